//! Presentational panels
//!
//! Leaf components that collect user intent and hand it to host callbacks.
//! They never talk to each other and own no asynchronous work.

pub mod action_trigger;
pub mod presets;
pub mod style_prompt;

pub use action_trigger::{ActionTriggerPanel, UPSCALE_PANEL};
pub use presets::{find_preset, RenderStyle, StylePreset, PRESETS};
pub use style_prompt::{
    compose_once, ApplyButton, ComposeError, PromptChoice, PromptSource, StylePromptSelector,
};
