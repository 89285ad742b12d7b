//! ASCII art style prompt selector
//!
//! Holds which prompt source is active (a catalog preset or free text) and
//! the render style. The last interaction wins: picking a preset discards
//! custom text and any edit to the text field discards the preset, even an
//! edit that leaves the field empty.
//!
//! Every mutating operation takes the host's `is_loading` flag and is a no-op
//! while it is set. Operations return `true` when the state changed.

use thiserror::Error;
use tracing::{debug, info, trace};

use super::presets::{find_preset, RenderStyle, StylePreset};
use crate::text;

/// Where the active prompt comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromptSource {
    #[default]
    None,
    Preset(&'static StylePreset),
    Custom(String),
}

impl PromptSource {
    pub fn text(&self) -> &str {
        match self {
            PromptSource::None => "",
            PromptSource::Preset(preset) => preset.prompt_fragment,
            PromptSource::Custom(text) => text,
        }
    }
}

/// Visibility and enablement of the "Apply ASCII Art" control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyButton {
    /// No actionable prompt; the control is not rendered
    Hidden,
    /// Rendered but inert while the host is busy
    Disabled,
    Enabled,
}

#[derive(Debug, Clone, Default)]
pub struct StylePromptSelector {
    source: PromptSource,
    render_style: RenderStyle,
}

impl StylePromptSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a given render style instead of the default
    pub fn with_render_style(render_style: RenderStyle) -> Self {
        Self {
            source: PromptSource::None,
            render_style,
        }
    }

    pub fn source(&self) -> &PromptSource {
        &self.source
    }

    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn selected_preset(&self) -> Option<&'static StylePreset> {
        match self.source {
            PromptSource::Preset(preset) => Some(preset),
            _ => None,
        }
    }

    /// Contents of the text field; empty whenever a preset is selected
    pub fn custom_text(&self) -> &str {
        match &self.source {
            PromptSource::Custom(text) => text,
            _ => "",
        }
    }

    pub fn active_prompt(&self) -> &str {
        self.source.text()
    }

    pub fn select_preset(&mut self, preset: &'static StylePreset, is_loading: bool) -> bool {
        if is_loading {
            trace!(preset = preset.name, "preset selection ignored while loading");
            return false;
        }
        debug!(preset = preset.name, "preset selected");
        self.source = PromptSource::Preset(preset);
        true
    }

    pub fn set_custom_text(&mut self, text: impl Into<String>, is_loading: bool) -> bool {
        if is_loading {
            trace!("custom text edit ignored while loading");
            return false;
        }
        let text = text.into();
        debug!(len = text.len(), "custom text edited");
        self.source = PromptSource::Custom(text);
        true
    }

    /// Append a character to the text field
    pub fn push_char(&mut self, c: char, is_loading: bool) -> bool {
        let mut text = self.custom_text().to_string();
        text.push(c);
        self.set_custom_text(text, is_loading)
    }

    /// Backspace in the text field
    ///
    /// Counts as an edit even when the field is already empty, so it still
    /// clears a selected preset.
    pub fn pop_grapheme(&mut self, is_loading: bool) -> bool {
        let mut text = self.custom_text().to_string();
        text::pop_grapheme(&mut text);
        self.set_custom_text(text, is_loading)
    }

    pub fn set_render_style(&mut self, style: RenderStyle, is_loading: bool) -> bool {
        if is_loading {
            trace!("render style change ignored while loading");
            return false;
        }
        if self.render_style == style {
            return false;
        }
        debug!(style = style.name(), "render style changed");
        self.render_style = style;
        true
    }

    pub fn toggle_render_style(&mut self, is_loading: bool) -> bool {
        self.set_render_style(self.render_style.toggled(), is_loading)
    }

    pub fn apply_button(&self, is_loading: bool) -> ApplyButton {
        if self.active_prompt().trim().is_empty() {
            ApplyButton::Hidden
        } else if is_loading {
            ApplyButton::Disabled
        } else {
            ApplyButton::Enabled
        }
    }

    /// Active prompt followed by the render-style sentence
    pub fn composed_prompt(&self) -> Option<String> {
        let active = self.active_prompt();
        if active.trim().is_empty() {
            return None;
        }
        let mut composed = String::with_capacity(active.len() + 160);
        composed.push_str(active);
        composed.push_str(self.render_style.suffix());
        Some(composed)
    }

    /// Confirm the current prompt
    ///
    /// Calls `on_apply_style` once with the composed prompt when the apply
    /// control is enabled. Local state is left as it was.
    pub fn apply<F>(&self, is_loading: bool, on_apply_style: F) -> bool
    where
        F: FnOnce(String),
    {
        if self.apply_button(is_loading) != ApplyButton::Enabled {
            trace!("apply ignored: control not enabled");
            return false;
        }
        let Some(prompt) = self.composed_prompt() else {
            return false;
        };
        info!(style = self.render_style.name(), "applying ascii art style");
        on_apply_style(prompt);
        true
    }
}

/// Where a one-shot composition takes its prompt from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice<'a> {
    Preset(&'a str),
    Custom(&'a str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("prompt is empty")]
    EmptyPrompt,
}

/// Drive a fresh selector through one choice and one confirmation
pub fn compose_once(choice: PromptChoice<'_>, style: RenderStyle) -> Result<String, ComposeError> {
    let mut selector = StylePromptSelector::with_render_style(style);
    match choice {
        PromptChoice::Preset(name) => {
            let preset =
                find_preset(name).ok_or_else(|| ComposeError::UnknownPreset(name.to_string()))?;
            selector.select_preset(preset, false);
        }
        PromptChoice::Custom(text) => {
            selector.set_custom_text(text, false);
        }
    }

    let mut composed = None;
    selector.apply(false, |prompt| composed = Some(prompt));
    composed.ok_or(ComposeError::EmptyPrompt)
}
