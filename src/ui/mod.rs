//! UI module
//!
//! Contains all UI rendering components using Ratatui.

mod action_panel;
mod activity;
mod help;
mod style_panel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{AppState, FocusedPanel};

/// Smallest terminal the panels fit in
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Right column width in the side-by-side layout
const SIDE_COLUMN_WIDTH: u16 = 46;

/// Activity log rows below which the stacked layout hides it
const MIN_ACTIVITY_HEIGHT: u16 = 4;

/// Main render function - draws the entire UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();

    // Check minimum size
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_size_warning(frame, size);
        return;
    }

    // Main layout: title bar, content, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_title_bar(frame, main_chunks[0], state);
    render_main_content(frame, main_chunks[1], state);
    render_status_bar(frame, main_chunks[2], state);

    // Render help overlay if active
    if state.show_help {
        help::render_help_overlay(frame, size);
    }
}

/// Border colour for a panel
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render warning when terminal is too small
fn render_size_warning(frame: &mut Frame, area: Rect) {
    let warning = Paragraph::new(format!(
        "Terminal too small!\nMinimum: {}x{}",
        MIN_WIDTH, MIN_HEIGHT
    ))
    .style(Style::default().fg(Color::Red))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(warning, area);
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let (busy_label, busy_style) = if state.is_loading() {
        ("● Working", Style::default().fg(Color::Yellow))
    } else {
        ("○ Idle", Style::default().fg(Color::DarkGray))
    };

    let mut title = Line::from(vec![
        Span::styled(
            " artpanels ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("v1.0", Style::default().fg(Color::DarkGray)),
        Span::raw(" │ "),
        Span::styled(busy_label, busy_style),
    ]);
    let keys = Line::from(vec![
        Span::styled("[?]", Style::default().fg(Color::Green)),
        Span::raw(" Help  "),
        Span::styled("[Q]", Style::default().fg(Color::Red)),
        Span::raw(" Quit "),
    ]);

    let padding = (area.width as usize)
        .saturating_sub(title.width())
        .saturating_sub(keys.width());
    title.spans.push(Span::raw(" ".repeat(padding)));
    title.spans.extend(keys.spans);

    let title_widget =
        Paragraph::new(title).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(title_widget, area);
}

/// Render the main content area
fn render_main_content(frame: &mut Frame, area: Rect, state: &AppState) {
    // Responsive layout: side-by-side if wide enough, stacked if narrow
    if area.width >= 110 {
        render_wide_layout(frame, area, state);
    } else {
        render_narrow_layout(frame, area, state);
    }
}

/// Style panel on the left, upscale and activity on the right
fn render_wide_layout(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(60), Constraint::Length(SIDE_COLUMN_WIDTH)])
        .split(area);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(action_panel::panel_height(&state.upscale_panel, SIDE_COLUMN_WIDTH)),
            Constraint::Min(MIN_ACTIVITY_HEIGHT),
        ])
        .split(chunks[1]);

    render_panels(frame, [chunks[0], right_chunks[0], right_chunks[1]], state);
}

/// Stacked layout for narrow terminals
///
/// The upscale panel always keeps its button on screen. The style panel drops
/// its spacing rows when the full version does not fit, and the activity log
/// is the first to collapse.
fn render_narrow_layout(frame: &mut Frame, area: Rect, state: &AppState) {
    let [style_height, upscale_height, activity_height] = narrow_heights(
        area.height,
        action_panel::panel_height(&state.upscale_panel, area.width),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(style_height),
            Constraint::Length(upscale_height),
            Constraint::Length(activity_height),
        ])
        .split(area);

    render_panels(frame, [chunks[0], chunks[1], chunks[2]], state);
}

/// Row budget for the stacked layout: style, upscale, activity
fn narrow_heights(available: u16, upscale_full: u16) -> [u16; 3] {
    let style = if available >= style_panel::FULL_HEIGHT + upscale_full {
        style_panel::FULL_HEIGHT
    } else {
        style_panel::COMPACT_HEIGHT.min(available.saturating_sub(action_panel::MIN_HEIGHT))
    };

    let rest = available.saturating_sub(style);
    let upscale = upscale_full.min(rest);
    let activity = rest - upscale;

    if activity < MIN_ACTIVITY_HEIGHT {
        [style, rest, 0]
    } else {
        [style, upscale, activity]
    }
}

fn render_panels(frame: &mut Frame, areas: [Rect; 3], state: &AppState) {
    let [style_area, upscale_area, activity_area] = areas;
    style_panel::render_style_panel(frame, style_area, state, state.focus == FocusedPanel::Style);
    action_panel::render_action_panel(
        frame,
        upscale_area,
        &state.upscale_panel,
        state.is_loading(),
        state.focus == FocusedPanel::Upscale,
    );
    if activity_area.height > 0 {
        activity::render_activity(
            frame,
            activity_area,
            state,
            state.focus == FocusedPanel::Activity,
        );
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let status_color = if state.status_is_error {
        Color::Red
    } else {
        Color::White
    };

    let style_info = format!("Style: {}", state.style_panel.render_style().name());
    let preset_info = state
        .style_panel
        .selected_preset()
        .map(|p| format!(" │ {}", p.name))
        .unwrap_or_default();

    // Calculate spacing
    let status_len = state.status_message.chars().count();
    let info_len = style_info.chars().count() + preset_info.chars().count();
    let spacing = (area.width as usize)
        .saturating_sub(status_len)
        .saturating_sub(info_len)
        .saturating_sub(2);

    let status = Line::from(vec![
        Span::raw(" "),
        Span::styled(&state.status_message, Style::default().fg(status_color)),
        Span::raw(" ".repeat(spacing)),
        Span::styled(&style_info, Style::default().fg(Color::DarkGray)),
        Span::styled(&preset_info, Style::default().fg(Color::Blue)),
        Span::raw(" "),
    ]);

    let widget =
        Paragraph::new(status).style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(widget, area);
}
