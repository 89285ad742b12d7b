//! Single-button trigger panel rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::panels::ActionTriggerPanel;
use crate::text::wrap_to_width;

/// Borders plus the button row
pub(super) const MIN_HEIGHT: u16 = 3;

fn description_lines(panel: &ActionTriggerPanel, panel_width: u16) -> Vec<String> {
    wrap_to_width(panel.description, panel_width.saturating_sub(4) as usize)
}

/// Rows needed to show the whole panel at `width`
pub(super) fn panel_height(panel: &ActionTriggerPanel, width: u16) -> u16 {
    description_lines(panel, width).len() as u16 + 1 + MIN_HEIGHT
}

pub fn render_action_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &ActionTriggerPanel,
    is_loading: bool,
    is_focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused))
        .title(Span::styled(
            format!(" {} ", panel.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The button row always stays; description rows go first when short on space
    let description = description_lines(panel, area.width);
    let rows = inner.height as usize;
    let keep_gap = description.len() + 2 <= rows;
    let description_rows = rows.saturating_sub(if keep_gap { 2 } else { 1 });

    let mut lines: Vec<Line> = description
        .into_iter()
        .take(description_rows)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray))))
        .collect();

    if keep_gap {
        lines.push(Line::from(""));
    }

    let button_style = if panel.is_enabled(is_loading) {
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    let marker = if is_focused { "▸ " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("  {}  ", panel.button_label), button_style),
    ]));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, inner);
}
