//! Activity log rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::state::{ActivityEntry, ActivityOutcome, AppState};
use crate::text::truncate_to_width;

/// Render the activity log
pub fn render_activity(frame: &mut Frame, area: Rect, state: &AppState, is_focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused))
        .title(Span::styled(
            " Activity ",
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = state.host.activity_len();
    if total == 0 {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No requests yet",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let width = inner.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = state
        .host
        .activity()
        .skip(state.activity_scroll)
        .take(inner.height as usize)
        .map(|entry| activity_line(entry, width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    let visible = inner.height as usize;
    if total > visible {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(total)
            .position(state.activity_scroll)
            .viewport_content_length(visible);

        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}

fn activity_line(entry: &ActivityEntry, width: usize) -> Line<'static> {
    let (marker, marker_style, suffix) = match &entry.outcome {
        ActivityOutcome::Pending => ("…", Style::default().fg(Color::Yellow), String::new()),
        ActivityOutcome::Completed { elapsed_ms } => (
            "✓",
            Style::default().fg(Color::Green),
            format!(" ({}ms)", elapsed_ms),
        ),
        ActivityOutcome::Failed(message) => (
            "✗",
            Style::default().fg(Color::Red),
            format!(" ({})", message),
        ),
    };

    let head = format!(" {}: ", entry.kind.name());
    let budget = width.saturating_sub(head.len() + suffix.len() + 2);

    Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(head, Style::default().fg(Color::Cyan)),
        Span::styled(
            truncate_to_width(&entry.detail, budget),
            Style::default().fg(Color::White),
        ),
        Span::styled(suffix, Style::default().fg(Color::DarkGray)),
    ])
}
