use super::layout::centered_rect;
use picstash::model::Alert;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a blocking alert (dismiss only)
pub fn render_alert(f: &mut Frame, alert: &Alert) {
    let message_lines = alert.message.lines().count().max(1) as u16;
    // Borders + blank line + "[ OK ]" line, plus room for wrapping
    let prompt_height = message_lines + 6;
    let prompt_area = centered_rect(f.area(), 60, prompt_height);

    let mut lines: Vec<Line> = alert
        .message
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ OK ]",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", alert.title))
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
