//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::layout::LayoutParams;

/// Engine-level configuration.
///
/// The subset of [`ResolvedConfig`] that the layout and navigation
/// services need to be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Screen width in columns.
    pub screen_width: u16,
    /// Tile cell geometry.
    pub layout: LayoutParams,
    /// Entries kept by each memo cache.
    pub cache_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

impl From<&ResolvedConfig> for AppConfig {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            screen_width: config.screen_width,
            layout: LayoutParams::new(config.tile_width, config.group_padding),
            cache_capacity: config.cache_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_resolved_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.screen_width, 80);
        assert_eq!(config.layout, LayoutParams::default());
        assert_eq!(config.cache_capacity, crate::layout::DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn from_resolved_copies_geometry() {
        let resolved = ResolvedConfig {
            screen_width: 132,
            tile_width: 4,
            group_padding: 0,
            cache_capacity: 3,
            ..ResolvedConfig::default()
        };
        let config = AppConfig::from(&resolved);
        assert_eq!(config.screen_width, 132);
        assert_eq!(config.layout, LayoutParams::new(4, 0));
        assert_eq!(config.cache_capacity, 3);
    }
}
