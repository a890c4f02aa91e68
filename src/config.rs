use picstash::logic::layout::DEFAULT_GRID_MARGIN;
use picstash::Platform;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Storage the gallery may read (default: home directory)
    #[serde(default)]
    pub storage_root: Option<PathBuf>,
    /// Directory shown at startup (default: `<storage_root>/Pictures`)
    #[serde(default)]
    pub start_directory: Option<PathBuf>,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_android_api_level")]
    pub android_api_level: u32,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_thumbnails")]
    pub thumbnails: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_grid_margin")]
    pub grid_margin: u16,
}

fn default_platform() -> String {
    "desktop".to_string()
}

fn default_android_api_level() -> u32 {
    33
}

fn default_thumbnails() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

fn default_grid_margin() -> u16 {
    DEFAULT_GRID_MARGIN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: None,
            start_directory: None,
            platform: default_platform(),
            android_api_level: default_android_api_level(),
            vim_mode: false,
            thumbnails: default_thumbnails(),
            image_protocol: default_image_protocol(),
            icon_mode: default_icon_mode(),
            grid_margin: default_grid_margin(),
        }
    }
}

impl Config {
    /// Parse the `platform` key; unknown values fall back to desktop
    pub fn platform(&self) -> Platform {
        match self.platform.to_lowercase().as_str() {
            "android" => Platform::Android {
                api_level: self.android_api_level,
            },
            "desktop" => Platform::Desktop,
            unknown => {
                tracing::warn!("Unknown platform '{}', using desktop", unknown);
                Platform::Desktop
            }
        }
    }

    pub fn resolve_storage_root(&self) -> PathBuf {
        self.storage_root
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Start directory: explicit setting, else `<root>/Pictures` if it
    /// exists, else the storage root itself
    pub fn resolve_start_directory(&self, storage_root: &Path) -> PathBuf {
        if let Some(dir) = &self.start_directory {
            return dir.clone();
        }

        let pictures = storage_root.join("Pictures");
        if pictures.is_dir() {
            pictures
        } else {
            storage_root.to_path_buf()
        }
    }
}
