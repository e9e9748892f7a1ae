use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Deck file to open when none is given on the command line
    #[serde(default)]
    pub deck: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            deck: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while the track is moving
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Show the navigation hint in each slide footer
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            show_hints: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a map with 'name' and 'colors'
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Stage background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Status bar and toast background
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Muted text (subtitles, footers)
    pub muted: Option<String>,
    /// Disabled controls and inactive dots
    pub disabled: Option<String>,
    /// Active slide border, active dot, progress fill
    pub accent: Option<String>,
    /// Kicker line above the title
    pub kicker: Option<String>,
    /// "Before" panel markers
    pub before: Option<String>,
    /// "After" panel markers
    pub after: Option<String>,
    /// Metric number
    pub metric: Option<String>,
}

/// Damped spring constants for settling the slide track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Higher is snappier
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Higher is less bouncy
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
        }
    }
}

/// Navigation and motion tuning for the slide carousel
///
/// The flick and resistance values are empirically tuned; they are exposed
/// so a deck can be given a different feel without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Wrap past the first/last slide instead of clamping
    #[serde(default)]
    pub loop_at_end: bool,
    #[serde(default)]
    pub spring: SpringConfig,
    /// Fraction of a drag applied past the first/last slide
    #[serde(default = "default_edge_resistance")]
    pub edge_resistance: f64,
    /// Release velocity (px/s) that counts as one slide of flick
    #[serde(default = "default_flick_velocity_scale")]
    pub flick_velocity_scale: f64,
    /// How many viewport widths one slide of flick projects forward
    #[serde(default = "default_flick_projection")]
    pub flick_projection: f64,
    /// Largest integration step in seconds
    #[serde(default = "default_max_frame_dt")]
    pub max_frame_dt: f64,
    /// Snap when closer than this to the target (px)
    #[serde(default = "default_snap_distance")]
    pub snap_distance: f64,
    /// Snap when slower than this (px/s)
    #[serde(default = "default_snap_velocity")]
    pub snap_velocity: f64,
    /// How long the "Slide i/N" notice stays up
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            loop_at_end: false,
            spring: SpringConfig::default(),
            edge_resistance: default_edge_resistance(),
            flick_velocity_scale: default_flick_velocity_scale(),
            flick_projection: default_flick_projection(),
            max_frame_dt: default_max_frame_dt(),
            snap_distance: default_snap_distance(),
            snap_velocity: default_snap_velocity(),
            toast_duration_ms: default_toast_duration(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-g>" (Shift+g), "<CR>" (Enter), "<Space>", "<Home>"
///
/// Right/Space/Enter always advance and Left always goes back, in addition
/// to whatever is configured here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the viewer
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Previous slide
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Jump to the first slide
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Jump to the last slide
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Toggle the key help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            first: default_key_first(),
            last: default_key_last(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_prev() -> String { "h".to_string() }
fn default_key_first() -> String { "g".to_string() }
fn default_key_last() -> String { "G".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flowpitch")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_stiffness() -> f64 {
    160.0
}

fn default_damping() -> f64 {
    26.0
}

fn default_mass() -> f64 {
    1.0
}

fn default_edge_resistance() -> f64 {
    0.28
}

fn default_flick_velocity_scale() -> f64 {
    1400.0
}

fn default_flick_projection() -> f64 {
    0.35
}

fn default_max_frame_dt() -> f64 {
    0.033
}

fn default_snap_distance() -> f64 {
    0.6
}

fn default_snap_velocity() -> f64 {
    18.0
}

fn default_toast_duration() -> u64 {
    900
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Always uses ~/.config/flowpitch/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("flowpitch")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("flowpitch.log")
    }

    /// Configured default deck (with tilde expansion)
    pub fn deck_path(&self) -> Option<PathBuf> {
        self.general.deck.as_deref().map(expand_tilde)
    }
}
