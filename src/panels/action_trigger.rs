//! Single-action trigger panel
//!
//! Explanatory text plus one button. Has no state of its own: each enabled
//! click invokes the host callback synchronously.

use tracing::{info, trace};

/// Static description of a trigger panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTriggerPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub button_label: &'static str,
}

/// The upscale panel
pub const UPSCALE_PANEL: ActionTriggerPanel = ActionTriggerPanel {
    title: "Enhance & Upscale Image",
    description: "Increase the resolution and clarity of your image using AI. This works best for restoring details in lower-quality photos. The process may take a moment.",
    button_label: "Apply Upscale",
};

impl ActionTriggerPanel {
    pub fn is_enabled(&self, is_loading: bool) -> bool {
        !is_loading
    }

    /// Click the button; returns whether `on_trigger` ran
    pub fn trigger<F>(&self, is_loading: bool, on_trigger: F) -> bool
    where
        F: FnOnce(),
    {
        if !self.is_enabled(is_loading) {
            trace!(action = self.button_label, "trigger ignored while loading");
            return false;
        }
        info!(action = self.button_label, "action triggered");
        on_trigger();
        true
    }
}
