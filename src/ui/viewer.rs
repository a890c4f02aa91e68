//! Full-screen image viewer overlay
//!
//! Shows one image over everything else. Holds no state of its own: the
//! decoded image lives in the app's image map.

use crate::{ImageMetadata, ImagePreviewState};
use picstash::logic::formatting::format_bytes;
use picstash::logic::path::to_file_uri;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;
use std::path::Path;

/// Render the viewer for `path` when `visible`
pub fn render_viewer(
    f: &mut Frame,
    visible: bool,
    path: &Path,
    image_state: Option<&mut ImagePreviewState>,
) {
    if !visible {
        return;
    }

    let area = f.area();
    f.render_widget(Clear, area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", to_file_uri(path)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Esc/q: Close ", Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let image_area = chunks[0];
    let info_area = chunks[1];

    match image_state {
        Some(ImagePreviewState::Ready { protocol, metadata }) => {
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);
            render_info(f, info_area, metadata);
        }
        Some(ImagePreviewState::Failed { metadata }) => {
            let reason = metadata
                .format
                .clone()
                .unwrap_or_else(|| "Unknown error".to_string());
            let message = format!("Image preview unavailable\n\n{}", reason);
            render_message(f, image_area, &message, Color::Red);
            render_info(f, info_area, metadata);
        }
        Some(ImagePreviewState::Loading) | None => {
            render_message(f, image_area, "Loading image preview...", Color::Yellow);
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, message: &str, color: Color) {
    let y = area.y + area.height.saturating_sub(3) / 2;
    let message_area = Rect {
        y,
        height: area.height.saturating_sub(y - area.y),
        ..area
    };
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, message_area);
}

fn render_info(f: &mut Frame, area: Rect, metadata: &ImageMetadata) {
    let mut parts = Vec::new();
    if let Some((w, h)) = metadata.dimensions {
        parts.push(format!("{}x{}", w, h));
    }
    if let Some(format) = &metadata.format {
        parts.push(format.clone());
    }
    parts.push(format_bytes(metadata.file_size));

    let info = Paragraph::new(parts.join(" │ "))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(info, area);
}
