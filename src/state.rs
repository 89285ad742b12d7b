//! Application state management
//!
//! Single source of truth for the demo host: both panels, keyboard focus,
//! the loading flag and the activity log.

use std::collections::VecDeque;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::config::Config;
use crate::panels::{
    ActionTriggerPanel, ApplyButton, RenderStyle, StylePromptSelector, PRESETS, UPSCALE_PANEL,
};
use crate::worker::{DispatchError, EditRequest, EditResponse, RequestKind};

/// Number of columns in the preset grid
pub const PRESET_COLUMNS: usize = 2;

/// Which panel is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Style,
    Upscale,
    Activity,
}

impl FocusedPanel {
    pub fn next(&self) -> Self {
        match self {
            FocusedPanel::Style => FocusedPanel::Upscale,
            FocusedPanel::Upscale => FocusedPanel::Activity,
            FocusedPanel::Activity => FocusedPanel::Style,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FocusedPanel::Style => FocusedPanel::Activity,
            FocusedPanel::Upscale => FocusedPanel::Style,
            FocusedPanel::Activity => FocusedPanel::Upscale,
        }
    }
}

/// Control under the keyboard cursor inside the style panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleControl {
    RenderStyle(RenderStyle),
    Preset(usize),
    CustomText,
    Apply,
}

impl Default for StyleControl {
    fn default() -> Self {
        StyleControl::Preset(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityOutcome {
    Pending,
    Completed { elapsed_ms: u64 },
    Failed(String),
}

/// One dispatched request as shown in the activity log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: RequestKind,
    pub detail: String,
    pub outcome: ActivityOutcome,
}

/// Host side of the panel callbacks
///
/// Owns the loading flag the panels read and forwards their requests to the
/// dispatcher thread.
pub struct EditorHost {
    request_tx: Sender<EditRequest>,
    is_loading: bool,
    activity: VecDeque<ActivityEntry>,
    activity_limit: usize,
}

impl EditorHost {
    pub fn new(request_tx: Sender<EditRequest>, activity_limit: usize) -> Self {
        Self {
            request_tx,
            is_loading: false,
            activity: VecDeque::new(),
            activity_limit: activity_limit.max(1),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Most recent first
    pub fn activity(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.activity.iter().rev()
    }

    pub fn activity_len(&self) -> usize {
        self.activity.len()
    }

    /// Callback for the style panel
    pub fn apply_ascii_art(&mut self, prompt: String) -> Result<(), DispatchError> {
        let detail = prompt.clone();
        self.dispatch(EditRequest::AsciiArt { prompt }, detail)
    }

    /// Callback for the upscale panel
    pub fn apply_upscale(&mut self) -> Result<(), DispatchError> {
        self.dispatch(EditRequest::Upscale, UPSCALE_PANEL.title.to_string())
    }

    fn dispatch(&mut self, request: EditRequest, detail: String) -> Result<(), DispatchError> {
        let kind = request.kind();
        self.request_tx
            .send(request)
            .map_err(|_| DispatchError::Disconnected)?;

        self.is_loading = true;
        self.push_activity(ActivityEntry {
            kind,
            detail,
            outcome: ActivityOutcome::Pending,
        });
        Ok(())
    }

    /// Apply a dispatcher response; always clears the loading flag
    pub fn handle_response(&mut self, response: &EditResponse) {
        self.is_loading = false;

        let (kind, outcome) = match response {
            EditResponse::Completed { kind, elapsed_ms } => (
                *kind,
                ActivityOutcome::Completed {
                    elapsed_ms: *elapsed_ms,
                },
            ),
            EditResponse::Failed { kind, message } => {
                (*kind, ActivityOutcome::Failed(message.clone()))
            }
        };

        let pending = self
            .activity
            .iter_mut()
            .rev()
            .find(|entry| entry.kind == kind && entry.outcome == ActivityOutcome::Pending);
        match pending {
            Some(entry) => entry.outcome = outcome,
            None => warn!(request = kind.name(), "response without a pending request"),
        }
    }

    fn push_activity(&mut self, entry: ActivityEntry) {
        self.activity.push_back(entry);
        while self.activity.len() > self.activity_limit {
            self.activity.pop_front();
        }
    }
}

/// Main application state
pub struct AppState {
    // Navigation
    pub focus: FocusedPanel,
    pub style_cursor: StyleControl,
    pub editing_text: bool,
    pub activity_scroll: usize,
    pub show_help: bool,
    pub should_quit: bool,

    // Panels
    pub style_panel: StylePromptSelector,
    pub upscale_panel: ActionTriggerPanel,

    // Host
    pub host: EditorHost,
    pub status_message: String,
    pub status_is_error: bool,

    pub terminal_size: (u16, u16),
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, request_tx: Sender<EditRequest>, terminal_size: (u16, u16)) -> Self {
        Self {
            focus: FocusedPanel::default(),
            style_cursor: StyleControl::default(),
            editing_text: false,
            activity_scroll: 0,
            show_help: false,
            should_quit: false,

            style_panel: StylePromptSelector::with_render_style(
                config.panels.default_render_style,
            ),
            upscale_panel: UPSCALE_PANEL,

            host: EditorHost::new(request_tx, config.host.activity_limit),
            status_message: "Ready - Press [?] for help".to_string(),
            status_is_error: false,

            terminal_size,
            config,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.host.is_loading()
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn set_status(&mut self, message: &str, is_error: bool) {
        self.status_message = message.to_string();
        self.status_is_error = is_error;
    }

    /// Confirm the style panel, forwarding the composed prompt to the host
    pub fn apply_style(&mut self) {
        let AppState {
            style_panel, host, ..
        } = self;
        let is_loading = host.is_loading();

        let mut dispatched = None;
        style_panel.apply(is_loading, |prompt| {
            dispatched = Some(host.apply_ascii_art(prompt));
        });

        match dispatched {
            Some(Ok(())) => self.set_status("Applying ASCII art...", false),
            Some(Err(e)) => self.set_status(&format!("Dispatch failed: {}", e), true),
            None if is_loading => self.set_status("Busy - wait for the current request", false),
            None => self.set_status("Pick a preset or describe a style first", false),
        }
    }

    /// Click the upscale button
    pub fn trigger_upscale(&mut self) {
        let AppState {
            upscale_panel,
            host,
            ..
        } = self;
        let is_loading = host.is_loading();

        let mut dispatched = None;
        upscale_panel.trigger(is_loading, || {
            dispatched = Some(host.apply_upscale());
        });

        match dispatched {
            Some(Ok(())) => self.set_status("Upscaling...", false),
            Some(Err(e)) => self.set_status(&format!("Dispatch failed: {}", e), true),
            None => self.set_status("Busy - wait for the current request", false),
        }
    }

    /// Handle response from the dispatcher thread
    pub fn handle_dispatch_response(&mut self, response: EditResponse) {
        self.host.handle_response(&response);
        self.activity_scroll = 0;

        match response {
            EditResponse::Completed { kind, elapsed_ms } => {
                self.set_status(&format!("{} finished in {}ms", kind.name(), elapsed_ms), false);
            }
            EditResponse::Failed { kind, message } => {
                self.set_status(&format!("{} failed: {}", kind.name(), message), true);
            }
        }
    }

    /// Activate the control under the style cursor
    pub fn activate_style_control(&mut self) {
        let is_loading = self.is_loading();
        match self.style_cursor {
            StyleControl::RenderStyle(style) => {
                self.style_panel.set_render_style(style, is_loading);
            }
            StyleControl::Preset(index) => {
                if let Some(preset) = PRESETS.get(index) {
                    if self.style_panel.select_preset(preset, is_loading) {
                        self.set_status(&format!("Preset: {}", preset.name), false);
                    }
                }
            }
            StyleControl::CustomText => self.start_editing(),
            StyleControl::Apply => self.apply_style(),
        }
    }

    pub fn start_editing(&mut self) {
        if self.is_loading() {
            self.set_status("Busy - wait for the current request", false);
            return;
        }
        self.style_cursor = StyleControl::CustomText;
        self.editing_text = true;
        self.set_status("Editing style: type, Enter to finish (Esc to leave)", false);
    }

    pub fn stop_editing(&mut self) {
        self.editing_text = false;
        self.set_status("Ready", false);
    }

    /// Move the style cursor one row up
    pub fn style_cursor_up(&mut self) {
        self.style_cursor = match self.style_cursor {
            StyleControl::RenderStyle(style) => StyleControl::RenderStyle(style),
            StyleControl::Preset(index) if index < PRESET_COLUMNS => {
                StyleControl::RenderStyle(self.style_panel.render_style())
            }
            StyleControl::Preset(index) => StyleControl::Preset(index - PRESET_COLUMNS),
            StyleControl::CustomText => StyleControl::Preset(last_preset_row_start()),
            StyleControl::Apply => StyleControl::CustomText,
        };
    }

    /// Move the style cursor one row down
    pub fn style_cursor_down(&mut self) {
        let apply_visible =
            self.style_panel.apply_button(self.is_loading()) != ApplyButton::Hidden;
        self.style_cursor = match self.style_cursor {
            StyleControl::RenderStyle(_) => StyleControl::Preset(0),
            StyleControl::Preset(index) if index + PRESET_COLUMNS < PRESETS.len() => {
                StyleControl::Preset(index + PRESET_COLUMNS)
            }
            StyleControl::Preset(_) => StyleControl::CustomText,
            StyleControl::CustomText if apply_visible => StyleControl::Apply,
            other => other,
        };
    }

    pub fn style_cursor_left(&mut self) {
        self.style_cursor = match self.style_cursor {
            StyleControl::RenderStyle(_) => StyleControl::RenderStyle(RenderStyle::Outlines),
            StyleControl::Preset(index) if index % PRESET_COLUMNS > 0 => {
                StyleControl::Preset(index - 1)
            }
            other => other,
        };
    }

    pub fn style_cursor_right(&mut self) {
        self.style_cursor = match self.style_cursor {
            StyleControl::RenderStyle(_) => StyleControl::RenderStyle(RenderStyle::Solid),
            StyleControl::Preset(index)
                if index % PRESET_COLUMNS + 1 < PRESET_COLUMNS && index + 1 < PRESETS.len() =>
            {
                StyleControl::Preset(index + 1)
            }
            other => other,
        };
    }

    /// Keep the cursor off the apply control once it disappears
    pub fn settle_style_cursor(&mut self) {
        if self.style_cursor == StyleControl::Apply
            && self.style_panel.apply_button(self.is_loading()) == ApplyButton::Hidden
        {
            debug!("apply control hidden, moving cursor to text field");
            self.style_cursor = StyleControl::CustomText;
        }
    }

    pub fn scroll_activity_up(&mut self, amount: usize) {
        self.activity_scroll = self.activity_scroll.saturating_sub(amount);
    }

    pub fn scroll_activity_down(&mut self, amount: usize) {
        let max = self.host.activity_len().saturating_sub(1);
        self.activity_scroll = (self.activity_scroll + amount).min(max);
    }
}

fn last_preset_row_start() -> usize {
    (PRESETS.len() - 1) / PRESET_COLUMNS * PRESET_COLUMNS
}
