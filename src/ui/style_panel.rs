//! "Generate ASCII Art" panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::panels::{ApplyButton, RenderStyle, PRESETS};
use crate::state::{AppState, StyleControl, PRESET_COLUMNS};
use crate::text::{display_width, tail_to_width, truncate_to_width};

const PLACEHOLDER: &str = "Describe your own custom ASCII art style...";
const PRESET_CELL_WIDTH: usize = 20;

/// Rows for the panel with spacing and the key hint
pub(super) const FULL_HEIGHT: u16 = 15;
/// Rows for the panel with controls only
pub(super) const COMPACT_HEIGHT: u16 = 11;

/// Render the style prompt panel
pub fn render_style_panel(frame: &mut Frame, area: Rect, state: &AppState, is_focused: bool) {
    let is_loading = state.is_loading();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused))
        .title(Span::styled(
            " Generate ASCII Art ",
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = is_focused.then_some(state.style_cursor);
    let compact = area.height < FULL_HEIGHT;
    let mut lines = Vec::new();

    lines.push(render_style_row(state, cursor, is_loading));
    if !compact {
        lines.push(Line::from(""));
    }

    for row in PRESETS.chunks(PRESET_COLUMNS).enumerate() {
        lines.push(render_preset_row(state, row, cursor, is_loading));
    }

    lines.push(divider_line(inner.width as usize));
    lines.push(render_text_field(
        state,
        cursor == Some(StyleControl::CustomText),
        is_loading,
        inner.width as usize,
    ));
    if !compact {
        lines.push(Line::from(""));
    }

    match state.style_panel.apply_button(is_loading) {
        ApplyButton::Hidden => {}
        button => lines.push(render_apply_button(
            button == ApplyButton::Enabled,
            cursor == Some(StyleControl::Apply),
        )),
    }

    if is_focused && !state.editing_text && !compact {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "1-0 preset  o/s style  e edit  a apply  c copy",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_style_row(
    state: &AppState,
    cursor: Option<StyleControl>,
    is_loading: bool,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Render Style: ",
        Style::default().fg(Color::Gray),
    )];

    for style in RenderStyle::all() {
        let is_active = state.style_panel.render_style() == *style;
        let is_cursor = cursor == Some(StyleControl::RenderStyle(*style));

        let mut button_style = if is_active {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_cursor {
            button_style = button_style.add_modifier(Modifier::UNDERLINED);
        }
        if is_loading {
            button_style = button_style.add_modifier(Modifier::DIM);
        }

        spans.push(Span::styled(
            if is_cursor { "▸" } else { " " },
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(format!(" {} ", style.name()), button_style));
    }

    Line::from(spans)
}

fn render_preset_row(
    state: &AppState,
    (row, presets): (usize, &[crate::panels::StylePreset]),
    cursor: Option<StyleControl>,
    is_loading: bool,
) -> Line<'static> {
    let selected = state.style_panel.selected_preset();
    let mut spans = Vec::new();

    for (column, preset) in presets.iter().enumerate() {
        let index = row * PRESET_COLUMNS + column;
        let is_selected = selected.map(|p| p.name) == Some(preset.name);
        let is_cursor = cursor == Some(StyleControl::Preset(index));

        let shortcut = (index + 1) % 10;
        let bullet = if is_selected { "●" } else { "○" };

        let mut name_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if is_cursor {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }
        if is_loading {
            name_style = name_style.fg(Color::DarkGray);
        }

        let label = format!("{} {}", bullet, preset.name);
        let padding = PRESET_CELL_WIDTH.saturating_sub(display_width(&label));

        spans.push(Span::styled(
            if is_cursor { " ▸" } else { "  " },
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("{} ", shortcut),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(label, name_style));
        spans.push(Span::raw(" ".repeat(padding)));
    }

    Line::from(spans)
}

fn divider_line(width: usize) -> Line<'static> {
    let side = width.saturating_sub(4) / 2;
    Line::from(vec![
        Span::styled("─".repeat(side), Style::default().fg(Color::DarkGray)),
        Span::styled(" OR ", Style::default().fg(Color::Gray)),
        Span::styled("─".repeat(side), Style::default().fg(Color::DarkGray)),
    ])
}

fn render_text_field(
    state: &AppState,
    is_cursor: bool,
    is_loading: bool,
    width: usize,
) -> Line<'static> {
    let text = state.style_panel.custom_text();
    let field_width = width.saturating_sub(5);

    let (content, content_style) = if state.editing_text {
        (
            format!("{}▌", tail_to_width(text, field_width.saturating_sub(1))),
            Style::default().fg(Color::Green),
        )
    } else if text.is_empty() {
        (
            truncate_to_width(PLACEHOLDER, field_width),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (truncate_to_width(text, field_width), Style::default().fg(Color::White))
    };

    let content_style = if is_loading {
        content_style.fg(Color::DarkGray)
    } else {
        content_style
    };

    Line::from(vec![
        Span::styled(
            if is_cursor { " ▸ " } else { "   " },
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("> ", Style::default().fg(Color::Blue)),
        Span::styled(content, content_style),
    ])
}

fn render_apply_button(is_enabled: bool, is_cursor: bool) -> Line<'static> {
    let mut button_style = if is_enabled {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    if is_cursor {
        button_style = button_style.add_modifier(Modifier::UNDERLINED);
    }

    Line::from(vec![
        Span::styled(
            if is_cursor { " ▸ " } else { "   " },
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  Apply ASCII Art  ", button_style),
    ])
}
