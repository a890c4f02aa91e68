use super::icons::IconRenderer;
use crate::ImagePreviewState;
use picstash::logic::formatting::{format_modified, truncate_name};
use picstash::logic::layout::{
    calculate_scroll_offset, visible_index_range, visible_row_count, CellSize, CAPTION_LINES,
    GRID_COLUMNS,
};
use picstash::logic::navigation::row_of;
use picstash::model::DirectoryEntry;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;
use std::collections::HashMap;
use std::path::PathBuf;

/// Columns between neighbouring cells
const CELL_GAP: u16 = 1;

/// Everything the grid needs to draw one frame
pub struct GridView<'a> {
    pub title: &'a str,
    pub entries: &'a [DirectoryEntry],
    pub selected_index: Option<usize>,
    pub loaded: bool,
    pub cell_size: CellSize,
    pub icons: &'a IconRenderer,
}

/// Render the three-column entry grid
///
/// Only the rows that fit are drawn; `scroll_offset` is adjusted so the
/// selected cell stays visible. `thumbnails` is `None` when thumbnails
/// are disabled. Returns the number of visible rows.
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    view: &GridView<'_>,
    scroll_offset: &mut usize,
    mut thumbnails: Option<&mut HashMap<PathBuf, ImagePreviewState>>,
) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible_rows = visible_row_count(inner.height, view.cell_size.height);

    if view.entries.is_empty() {
        // Before the first successful listing the grid stays blank
        if view.loaded {
            let empty = Paragraph::new("No images or folders here")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
        }
        *scroll_offset = 0;
        return visible_rows;
    }

    *scroll_offset = calculate_scroll_offset(
        view.selected_index.map(row_of),
        *scroll_offset,
        visible_rows,
    );

    for idx in visible_index_range(*scroll_offset, visible_rows, view.entries.len()) {
        let entry = &view.entries[idx];
        let row = (row_of(idx) - *scroll_offset) as u16;
        let col = (idx % GRID_COLUMNS) as u16;

        let cell = Rect {
            x: inner.x + col * (view.cell_size.width + CELL_GAP),
            y: inner.y + row * view.cell_size.height,
            width: view.cell_size.width,
            height: view.cell_size.height,
        }
        .intersection(inner);
        if cell.is_empty() {
            continue;
        }

        let is_selected = view.selected_index == Some(idx);
        let thumbnail = match (&mut thumbnails, entry) {
            (Some(map), DirectoryEntry::Image { path, .. }) => map.get_mut(path),
            _ => None,
        };
        render_cell(f, cell, entry, is_selected, view.icons, thumbnail);
    }

    visible_rows
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    entry: &DirectoryEntry,
    is_selected: bool,
    icons: &IconRenderer,
    thumbnail: Option<&mut ImagePreviewState>,
) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.is_empty() {
        return;
    }

    let caption_height = CAPTION_LINES.min(inner.height);
    let picture_area = Rect {
        height: inner.height - caption_height,
        ..inner
    };
    let caption_area = Rect {
        y: inner.y + picture_area.height,
        height: caption_height,
        ..inner
    };

    // Picture: thumbnail when ready, otherwise an icon
    if !picture_area.is_empty() {
        match (entry, thumbnail) {
            (DirectoryEntry::Image { .. }, Some(ImagePreviewState::Ready { protocol, .. })) => {
                f.render_stateful_widget(StatefulImage::default(), picture_area, protocol);
            }
            (DirectoryEntry::Image { .. }, Some(ImagePreviewState::Loading)) => {
                render_icon(f, picture_area, icons.loading());
            }
            (DirectoryEntry::Image { .. }, Some(ImagePreviewState::Failed { .. })) => {
                render_icon(f, picture_area, icons.error());
            }
            (DirectoryEntry::Image { .. }, None) => {
                render_icon(f, picture_area, icons.image());
            }
            (DirectoryEntry::Folder { .. }, _) => {
                render_icon(f, picture_area, icons.folder());
            }
        }
    }

    let width = caption_area.width as usize;
    let name_style = if entry.is_folder() {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let name_line = Line::from(Span::styled(truncate_name(entry.name(), width), name_style));
    let time_line = Line::from(Span::styled(
        truncate_name(&format_modified(entry.modified()), width),
        Style::default().fg(Color::DarkGray),
    ));

    let caption = Paragraph::new(vec![name_line, time_line]).alignment(Alignment::Center);
    f.render_widget(caption, caption_area);
}

fn render_icon(f: &mut Frame, area: Rect, icon: Span<'static>) {
    // Vertically center a single line
    let icon_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    f.render_widget(
        Paragraph::new(Line::from(icon)).alignment(Alignment::Center),
        icon_area,
    );
}
