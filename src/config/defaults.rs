//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of points sampled per country
pub const DEFAULT_POINTS: usize = 1;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Whether map links are printed by default
pub const DEFAULT_LINKS: bool = false;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "terrapoint";
