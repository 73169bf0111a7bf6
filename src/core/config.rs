//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flashdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlashdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub words_file: Option<String>,
    pub seed: Option<u64>,
    pub shuffle_on_open: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub toast_duration_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TOAST_DURATION_MS: u64 = 1500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means the built-in word list.
    pub words_file: Option<PathBuf>,
    /// `None` means seed from entropy.
    pub seed: Option<u64>,
    pub shuffle_on_open: bool,
    pub toast_duration_ms: u64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.flashdeck`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flashdeck"))
}

/// Returns the path to `~/.flashdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.flashdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlashdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FlashdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FlashdeckConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Same first-run behaviour as `load_config`.
pub fn load_config_from(path: &Path) -> Result<FlashdeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FlashdeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FlashdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# flashdeck configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# words_file = "words.json"     # Relative to ~/.flashdeck/, or absolute. Or FLASHDECK_WORDS.
# seed = 42                     # Fixed shuffle seed. Or FLASHDECK_SEED.
# shuffle_on_open = false       # Shuffle every deck as it is opened

# [display]
# toast_duration_ms = 1500
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_words` and `cli_seed` are from CLI flags (None = not specified).
pub fn resolve(
    config: &FlashdeckConfig,
    cli_words: Option<&Path>,
    cli_seed: Option<u64>,
) -> ResolvedConfig {
    let env = EnvOverrides {
        words: std::env::var("FLASHDECK_WORDS").ok(),
        seed: std::env::var("FLASHDECK_SEED").ok(),
    };
    resolve_layers(config, &env, cli_words, cli_seed)
}

/// Raw values of the `FLASHDECK_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub words: Option<String>,
    pub seed: Option<String>,
}

fn resolve_layers(
    config: &FlashdeckConfig,
    env: &EnvOverrides,
    cli_words: Option<&Path>,
    cli_seed: Option<u64>,
) -> ResolvedConfig {
    // Words file: CLI → env → config (relative to ~/.flashdeck/) → built-in
    let words_file = cli_words
        .map(Path::to_path_buf)
        .or_else(|| env.words.as_deref().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .words_file
                .as_deref()
                .map(resolve_words_path)
        });

    // Seed: CLI → env → config → entropy
    let seed = cli_seed
        .or_else(|| env.seed.as_deref().and_then(parse_seed))
        .or(config.general.seed);

    ResolvedConfig {
        words_file,
        seed,
        shuffle_on_open: config.general.shuffle_on_open.unwrap_or(false),
        toast_duration_ms: config
            .display
            .toast_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS),
    }
}

/// Config-file paths are relative to `~/.flashdeck/` unless absolute.
fn resolve_words_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!("Ignoring FLASHDECK_SEED={:?}: {}", raw, e);
            None
        }
    }
}
