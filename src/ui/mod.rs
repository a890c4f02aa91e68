// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Folder/image/loading icons (emoji and Nerd Fonts)
// - layout: Calculates screen layout (header, grid, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Title and current directory
// - grid: Three-column entry grid with thumbnails
// - viewer: Full-screen image overlay
// - legend: Hotkey legend
// - status_bar: Entry counts and selection
// - dialogs: Blocking alert dialog

pub mod dialogs;
pub mod grid;
pub mod header;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod viewer;

// Re-export main render function for convenience
pub use render::render;
