//! artpanels - ASCII art style and upscale panels for the terminal
//!
//! Two leaf components that turn user interaction into a single callback:
//! a style prompt selector that composes an ASCII art instruction, and a
//! one-button upscale trigger. A small ratatui host wires them to a
//! background dispatcher.

pub mod config;
pub mod input;
pub mod logging;
pub mod panels;
pub mod state;
pub mod text;
pub mod ui;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use panels::{ActionTriggerPanel, RenderStyle, StylePromptSelector, PRESETS, UPSCALE_PANEL};
pub use state::AppState;
