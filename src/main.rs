use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    time::Duration,
};

/// Terminal image gallery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to start in (overrides start_directory from the config)
    directory: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Show icons instead of image thumbnails in the grid
    #[arg(long)]
    no_thumbnails: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

mod app;
mod config;
mod handlers;
mod ui;
mod utils;

use config::Config;
use picstash::host::{FsPermissionHost, LocalFs};
use picstash::logic::layout::calculate_cell_size;
use picstash::model;
use picstash::DirectoryBrowser;
use ui::icons::{IconMode, IconRenderer, IconTheme};

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        metadata: ImageMetadata,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => {
                f.debug_struct("ImagePreviewState::Ready")
                    .field("metadata", metadata)
                    .field("protocol", &"<StatefulProtocol>")
                    .finish()
            }
            ImagePreviewState::Failed { metadata } => {
                f.debug_struct("ImagePreviewState::Failed")
                    .field("metadata", metadata)
                    .finish()
            }
        }
    }
}

/// Which map a finished image load belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    Viewer,
    Thumbnail,
}

pub type GalleryBrowser = DirectoryBrowser<LocalFs, FsPermissionHost>;

pub struct App {
    pub model: model::Model,

    browser: GalleryBrowser,
    icon_renderer: IconRenderer,
    image_picker: ratatui_image::picker::Picker,
    image_update_tx: tokio::sync::mpsc::UnboundedSender<(ImageTarget, PathBuf, ImagePreviewState)>,
    image_update_rx: tokio::sync::mpsc::UnboundedReceiver<(ImageTarget, PathBuf, ImagePreviewState)>,

    /// Image open in the full-screen viewer
    viewer_image: app::preview::ViewerImage<ImagePreviewState>,

    /// Grid thumbnails by path (current directory only)
    thumbnail_map: HashMap<PathBuf, ImagePreviewState>,
}

impl App {
    fn new(config: Config, start_override: Option<PathBuf>) -> Self {
        let storage_root = config.resolve_storage_root();
        let start_directory = match start_override {
            Some(dir) => dir,
            None => config.resolve_start_directory(&storage_root),
        };
        let platform = config.platform();
        tracing::info!(
            "Storage root {:?}, start directory {:?}, platform {}",
            storage_root,
            start_directory,
            platform.as_str()
        );

        let browser = DirectoryBrowser::with_root(
            LocalFs::new(&storage_root),
            FsPermissionHost::new(&storage_root),
            platform,
            start_directory,
        );

        // Parse icon mode from config
        let icon_mode = match config.icon_mode.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        };
        let icon_renderer = IconRenderer::new(icon_mode, IconTheme::default());

        let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Image support: Failed to detect terminal: {}", e);
                ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
            }
        };
        let font_size = picker.font_size();
        tracing::debug!("Image font size: {}x{}", font_size.0, font_size.1);

        match config.image_protocol.to_lowercase().as_str() {
            "auto" => {
                tracing::debug!("Image support: Auto-detected protocol");
            }
            "iterm2" => {
                picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
            }
            "kitty" => {
                picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
            }
            "sixel" => {
                picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
            }
            "halfblocks" => {
                picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
            }
            unknown => {
                tracing::warn!(
                    "Image support: Unknown protocol '{}', using auto-detect",
                    unknown
                );
            }
        }

        // Cell size is derived from the width once, at startup
        let (screen_width, _) = crossterm::terminal::size().unwrap_or((80, 24));

        let mut model = model::Model::new(config.vim_mode);
        model.ui.thumbnails_enabled = config.thumbnails;
        model.ui.cell_size = calculate_cell_size(screen_width, config.grid_margin);

        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();

        App {
            model,
            browser,
            icon_renderer,
            image_picker: picker,
            image_update_tx,
            image_update_rx,
            viewer_image: app::preview::ViewerImage::default(),
            thumbnail_map: HashMap::new(),
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::keyboard::handle_key(self, key).await
    }

    /// Store finished image loads from background tasks
    fn apply_image_update(&mut self, target: ImageTarget, path: PathBuf, state: ImagePreviewState) {
        match target {
            ImageTarget::Viewer => {
                // Drop results for an image that is no longer open
                if !self.viewer_image.accept(&path, state) {
                    tracing::debug!("Discarding stale viewer image {:?}", path);
                }
            }
            ImageTarget::Thumbnail => {
                // Drop results for a directory we already left
                if self.thumbnail_map.contains_key(&path) {
                    self.thumbnail_map.insert(path, state);
                }
            }
        }
    }
}

/// Determine the config file path with fallback logic
///
/// The config file is optional: `Ok(None)` means run on defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/picstash/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("picstash").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Log to a file; the terminal belongs to the TUI
fn init_logging(debug: bool) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = utils::get_log_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let default_level = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let file_appender = tracing_appender::rolling::never(&log_dir, utils::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if debug {
        eprintln!(
            "Logs are being written to: {:?}",
            log_dir.join(utils::LOG_FILE_NAME)
        );
    }

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let _log_guard = init_logging(args.debug)?;
    tracing::debug!("Debug mode enabled");

    // Determine config file path
    let config_path = get_config_path(args.config)?;
    match &config_path {
        Some(path) => tracing::info!("Loading config from: {:?}", path),
        None => tracing::info!("No config file found, using defaults"),
    }

    // Load configuration
    let mut config = load_config(config_path.as_ref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if args.no_thumbnails {
        config.thumbnails = false;
    }

    // Initialize app
    let mut app = App::new(config, args.directory);

    // Setup terminal
    setup_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    // Mount: first permission check and listing
    app.mount_browser().await;

    loop {
        // Clear terminal to remove sixel graphics if needed (brief flash but necessary)
        if app.model.ui.sixel_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.sixel_cleanup_frames = 0;
        }

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process image updates from background loading tasks (non-blocking)
        while let Ok((target, path, image_state)) = app.image_update_rx.try_recv() {
            tracing::debug!("Image update for {:?} ({:?})", path, target);
            app.apply_image_update(target, path, image_state);
        }

        // Queue thumbnails for whatever the last frame showed
        app.request_visible_thumbnails();

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }
    }

    Ok(())
}
