//! Player configuration and the embedded media library.
//!
//! The library file carries both the media origin template and the catalog, so a
//! deployment only has to swap `assets/library.json`.

use crate::catalog::Catalog;
use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const EMBEDDED_LIBRARY: &str = include_str!("../assets/library.json");

static LIBRARY: Lazy<PlayerConfig> = Lazy::new(|| match PlayerConfig::from_json(EMBEDDED_LIBRARY) {
    Ok(config) => config,
    Err(err) => {
        warn!("library file unusable, starting with an empty catalog: {err}");
        PlayerConfig::default()
    }
});

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid library json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where playable media, covers and lyric files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTemplate {
    pub base_url: String,
    pub media_dir: String,
    pub media_ext: String,
    pub cover_dir: String,
    pub cover_ext: String,
    /// `None` disables lyrics for every song.
    pub lyrics_dir: Option<String>,
    /// Absolute origin for lyric paths when there is no page to resolve against.
    pub lyrics_origin: Option<String>,
}

impl Default for MediaTemplate {
    fn default() -> Self {
        Self {
            base_url: "https://r5.dlozs.top/".to_string(),
            media_dir: "mp4".to_string(),
            media_ext: ".m3u8".to_string(),
            cover_dir: "jpg".to_string(),
            cover_ext: ".jpg".to_string(),
            lyrics_dir: Some("kasi".to_string()),
            lyrics_origin: None,
        }
    }
}

impl MediaTemplate {
    pub fn media_url(&self, title: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base_url.trim_end_matches('/'),
            self.media_dir.trim_matches('/'),
            urlencoding::encode(title),
            self.media_ext
        )
    }

    pub fn cover_url(&self, title: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base_url.trim_end_matches('/'),
            self.cover_dir.trim_matches('/'),
            urlencoding::encode(title),
            self.cover_ext
        )
    }

    pub fn lyrics_path(&self, title: &str) -> Option<String> {
        let dir = self.lyrics_dir.as_deref()?.trim_matches('/');
        if dir.is_empty() {
            return Some(format!("{}.txt", urlencoding::encode(title)));
        }
        Some(format!("{dir}/{}.txt", urlencoding::encode(title)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub sidebar_min_width: f64,
    pub sidebar_max_width: f64,
    pub sidebar_default_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_min_width: 180.0,
            sidebar_max_width: 600.0,
            sidebar_default_width: 250.0,
        }
    }
}

impl LayoutConfig {
    /// Keeps `min <= default <= max` whatever the file says.
    fn normalized(self) -> Self {
        let fallback = Self::default();
        let finite_or = |value: f64, or: f64| if value.is_finite() && value >= 0.0 { value } else { or };

        let mut min = finite_or(self.sidebar_min_width, fallback.sidebar_min_width);
        let mut max = finite_or(self.sidebar_max_width, fallback.sidebar_max_width);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        let default = finite_or(self.sidebar_default_width, fallback.sidebar_default_width)
            .clamp(min, max);

        Self {
            sidebar_min_width: min,
            sidebar_max_width: max,
            sidebar_default_width: default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub double_click_window_ms: u32,
    pub mode_hint_ms: u32,
    pub controls_idle_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            double_click_window_ms: 300,
            mode_hint_ms: 2000,
            controls_idle_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub media: MediaTemplate,
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub categories: Catalog,
}

impl PlayerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: PlayerConfig = serde_json::from_str(raw)?;
        config.layout = config.layout.normalized();
        Ok(config)
    }
}

/// The library compiled into the binary.
pub fn library() -> &'static PlayerConfig {
    &LIBRARY
}
