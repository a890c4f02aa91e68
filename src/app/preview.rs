//! Image loading methods
//!
//! Decoding happens on blocking threads; results come back over the
//! image update channel and are drained by the event loop:
//! - Full-screen viewer image for the selected path
//! - Thumbnails for the grid cells currently on screen

use crate::{App, ImageMetadata, ImagePreviewState, ImageTarget};
use picstash::logic::layout::{row_count, visible_index_range};
use picstash::model::DirectoryEntry;
use std::path::{Path, PathBuf};

/// Images above this size are not decoded
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Upper bound for a decoded image, in terminal cells
#[derive(Debug, Clone, Copy)]
struct CellBudget {
    columns: u32,
    rows: u32,
}

/// Typical large terminal: the viewer never needs more than this
const VIEWER_BUDGET: CellBudget = CellBudget {
    columns: 200,
    rows: 60,
};

/// The single image the viewer holds, keyed by its path
///
/// Opening another image replaces it and closing the viewer drops it,
/// so at most one decoded image is kept.
#[derive(Debug)]
pub(crate) struct ViewerImage<S> {
    slot: Option<(PathBuf, S)>,
}

impl<S> Default for ViewerImage<S> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<S> ViewerImage<S> {
    /// Start over with `path` in its loading state
    pub(crate) fn start(&mut self, path: PathBuf, loading: S) {
        self.slot = Some((path, loading));
    }

    /// Store a finished load; results for any other path are dropped
    pub(crate) fn accept(&mut self, path: &Path, state: S) -> bool {
        match &mut self.slot {
            Some((current, slot)) if current == path => {
                *slot = state;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn get_mut(&mut self, path: &Path) -> Option<&mut S> {
        match &mut self.slot {
            Some((current, state)) if current == path => Some(state),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slot = None;
    }
}

impl App {
    /// Start loading the selected image for the viewer
    pub(crate) fn request_viewer_image(&mut self) {
        let Some(selected) = &self.model.selected_image else {
            return;
        };
        let path = selected.path.clone();

        // Replaces whatever image was open before
        self.viewer_image
            .start(path.clone(), ImagePreviewState::Loading);
        self.spawn_image_load(ImageTarget::Viewer, path, VIEWER_BUDGET);
    }

    /// Start loading thumbnails for image cells on screen that have none yet
    pub(crate) fn request_visible_thumbnails(&mut self) {
        if !self.model.ui.thumbnails_enabled || self.model.selected_image.is_some() {
            return;
        }

        let state = self.browser.state();
        let visible_rows = self.model.ui.grid_visible_rows;
        if visible_rows == 0 || row_count(state.entries.len()) == 0 {
            return;
        }

        let range = visible_index_range(state.scroll_offset, visible_rows, state.entries.len());
        let pending: Vec<PathBuf> = state.entries[range]
            .iter()
            .filter_map(|entry| match entry {
                DirectoryEntry::Image { path, .. } if !self.thumbnail_map.contains_key(path) => {
                    Some(path.clone())
                }
                _ => None,
            })
            .collect();

        let cell = self.model.ui.cell_size;
        let budget = CellBudget {
            columns: cell.width as u32,
            rows: cell.height as u32,
        };
        for path in pending {
            self.thumbnail_map
                .insert(path.clone(), ImagePreviewState::Loading);
            self.spawn_image_load(ImageTarget::Thumbnail, path, budget);
        }
    }

    fn spawn_image_load(&self, target: ImageTarget, path: PathBuf, budget: CellBudget) {
        let picker = self.image_picker.clone();
        let image_tx = self.image_update_tx.clone();

        tokio::spawn(async move {
            tracing::debug!("Background: Loading image {:?} ({:?})", path, target);
            let state = match Self::load_image_preview(path.clone(), picker, budget).await {
                Ok((protocol, metadata)) => {
                    tracing::debug!("Background: Image loaded successfully {:?}", path);
                    ImagePreviewState::Ready { protocol, metadata }
                }
                Err(metadata) => {
                    tracing::debug!(
                        "Background: Image load failed {:?}: {:?}",
                        path,
                        metadata.format
                    );
                    ImagePreviewState::Failed { metadata }
                }
            };
            let _ = image_tx.send((target, path, state));
        });
    }

    async fn load_image_preview(
        path: PathBuf,
        picker: ratatui_image::picker::Picker,
        budget: CellBudget,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), ImageMetadata> {
        // Check file size
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Not readable: {}", e)),
                    file_size: 0,
                });
            }
        };

        let file_size = metadata.len();
        if file_size > MAX_IMAGE_BYTES {
            return Err(ImageMetadata {
                dimensions: None,
                format: Some("Too large".to_string()),
                file_size,
            });
        }

        // Load image
        let img_result = tokio::task::spawn_blocking(move || image::open(&path)).await;

        let img = match img_result {
            Ok(Ok(img)) => img,
            Ok(Err(e)) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Load error: {}", e)),
                    file_size,
                });
            }
            Err(e) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Task error: {}", e)),
                    file_size,
                });
            }
        };

        let dimensions = (img.width(), img.height());
        let format = match img.color() {
            image::ColorType::L8 => "Grayscale 8-bit",
            image::ColorType::La8 => "Grayscale+Alpha 8-bit",
            image::ColorType::Rgb8 => "RGB 8-bit",
            image::ColorType::Rgba8 => "RGBA 8-bit",
            image::ColorType::L16 => "Grayscale 16-bit",
            image::ColorType::La16 => "Grayscale+Alpha 16-bit",
            image::ColorType::Rgb16 => "RGB 16-bit",
            image::ColorType::Rgba16 => "RGBA 16-bit",
            _ => "Unknown",
        };

        let load_start = std::time::Instant::now();

        // Pre-downscale to the cell budget with 1.25x headroom for quality
        let font_size = picker.font_size();
        let max_width = budget.columns.max(1) * font_size.0 as u32 * 5 / 4;
        let max_height = budget.rows.max(1) * font_size.1 as u32 * 5 / 4;

        let processed_img = if img.width() > max_width || img.height() > max_height {
            let scale_factor = (img.width() as f32 / max_width as f32)
                .max(img.height() as f32 / max_height as f32);

            // Adaptive filter selection based on downscale amount
            let filter = if scale_factor > 4.0 {
                image::imageops::FilterType::Triangle
            } else if scale_factor > 2.0 {
                image::imageops::FilterType::CatmullRom
            } else {
                image::imageops::FilterType::Lanczos3
            };

            tracing::debug!(
                "Pre-downscaling {}x{} by {:.2}x to fit {}x{} using {:?}",
                img.width(),
                img.height(),
                scale_factor,
                max_width,
                max_height,
                filter
            );
            img.resize(max_width, max_height, filter)
        } else {
            img
        };

        let protocol = picker.new_resize_protocol(processed_img);
        tracing::debug!(
            "Total image load took {:.2}s",
            load_start.elapsed().as_secs_f32()
        );

        let metadata = ImageMetadata {
            dimensions: Some(dimensions),
            format: Some(format.to_string()),
            file_size,
        };

        Ok((protocol, metadata))
    }
}
