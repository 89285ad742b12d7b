//! Help overlay rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    // 70% width, 80% height, centered
    let overlay_width = (area.width as f32 * 0.7).min(70.0) as u16;
    let overlay_height = (area.height as f32 * 0.8).min(30.0) as u16;

    let overlay_area = centered_rect(overlay_width, overlay_height, area);

    // Clear background
    frame.render_widget(Clear, overlay_area);

    // Render help content
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let help_text = create_help_text();
    let widget = Paragraph::new(help_text).style(Style::default().fg(Color::White));

    frame.render_widget(widget, inner);
}

/// Create help text content
fn create_help_text() -> Vec<Line<'static>> {
    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let desc_style = Style::default().fg(Color::White);

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    vec![
        Line::from(Span::styled("Global", section_style)),
        entry("Q", "Quit application"),
        entry("?", "Toggle help overlay"),
        entry("Tab", "Next panel"),
        entry("Shift+Tab", "Previous panel"),
        Line::from(""),
        Line::from(Span::styled("Generate ASCII Art", section_style)),
        entry("↑ ↓ ← →", "Move between controls"),
        entry("Enter Space", "Activate control"),
        entry("1-9, 0", "Pick preset"),
        entry("O / S / T", "Outlines / Solid Fill / toggle"),
        entry("E", "Edit custom style (Esc to leave)"),
        entry("A", "Apply ASCII Art"),
        entry("C", "Copy composed prompt"),
        Line::from(""),
        Line::from(Span::styled("Enhance & Upscale", section_style)),
        entry("Enter / U", "Apply Upscale"),
        Line::from(""),
        Line::from(Span::styled("Activity", section_style)),
        entry("↑ ↓", "Scroll by line"),
        entry("PgUp PgDn", "Scroll by page"),
        Line::from(""),
        Line::from(Span::styled(
            "       [Press ? or Esc to close]",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Create a centered rectangle
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let horizontal_padding = area.width.saturating_sub(width) / 2;
    let vertical_padding = area.height.saturating_sub(height) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_padding),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
