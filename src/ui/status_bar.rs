use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Counts shown in the status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryCounts {
    pub folders: usize,
    pub images: usize,
}

fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Build the status text (extracted for testability)
pub fn build_status_text(
    counts: EntryCounts,
    selected: Option<(usize, &str)>,
    platform: &str,
) -> String {
    let mut parts = vec![
        count_label(counts.folders, "folder", "folders"),
        count_label(counts.images, "image", "images"),
    ];
    if let Some((index, name)) = selected {
        parts.push(format!(
            "{}/{}: {}",
            index + 1,
            counts.folders + counts.images,
            name
        ));
    }
    parts.push(platform.to_string());
    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    counts: EntryCounts,
    selected: Option<(usize, &str)>,
    platform: &str,
) {
    let text = build_status_text(counts, selected, platform);
    let line = Line::from(Span::styled(text, Style::default().fg(Color::Gray)));
    f.render_widget(Paragraph::new(line), area);
}
