use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, at_root: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("hjkl", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("gg/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
            Span::styled("^d/^u", Style::default().fg(Color::Yellow)),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("←↑↓→", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
            Span::raw(":Page  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":Open  "),
    ]);

    // Back only does something below the start directory
    if !at_root {
        hotkey_spans.extend(vec![
            Span::styled("Bksp", Style::default().fg(Color::Yellow)),
            Span::raw(":Back  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Refresh  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, at_root: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, at_root)));
    f.render_widget(legend, area);
}
