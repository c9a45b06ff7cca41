//! Tree configuration.

use crate::error::QuadTreeError;
use crate::spatial::Rectangle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Construction parameters for a root node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Points a node stores before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub boundary: BoundaryConfig,
}

impl TreeConfig {
    /// Load configuration from a TOML file, or use defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            info!("No config found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryConfig::default(),
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    4
}

/// Root boundary as center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoundaryConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_half_extent")]
    pub half_width: f64,
    #[serde(default = "default_half_extent")]
    pub half_height: f64,
}

impl BoundaryConfig {
    pub fn to_rectangle(&self) -> Result<Rectangle, QuadTreeError> {
        Rectangle::new(self.x, self.y, self.half_width, self.half_height)
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            half_width: default_half_extent(),
            half_height: default_half_extent(),
        }
    }
}

fn default_half_extent() -> f64 {
    100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{Point, QuadNode};

    #[test]
    fn test_defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.capacity, 4);
        assert_eq!(
            config.boundary.to_rectangle().unwrap(),
            Rectangle::new(0.0, 0.0, 100.0, 100.0).unwrap()
        );
        assert_eq!(TreeConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_partial_toml() {
        let config = TreeConfig::from_toml_str(
            r#"
            capacity = 8

            [boundary]
            x = 512.0
            half_width = 512.0
            "#,
        )
        .unwrap();

        assert_eq!(config.capacity, 8);
        assert_eq!(config.boundary.x, 512.0);
        assert_eq!(config.boundary.y, 0.0);
        assert_eq!(config.boundary.half_width, 512.0);
        assert_eq!(config.boundary.half_height, 100.0);
    }

    #[test]
    fn test_bad_toml() {
        assert!(TreeConfig::from_toml_str("capacity = \"lots\"").is_err());
        assert!(TreeConfig::from_toml_str("capacity = -1").is_err());
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let mut config = TreeConfig::default();
        config.capacity = 16;
        config.boundary.y = -25.5;

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[boundary]"));
        assert_eq!(TreeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load() {
        let missing = std::env::temp_dir().join("quadtree-config-does-not-exist.toml");
        assert_eq!(TreeConfig::load(&missing).unwrap(), TreeConfig::default());

        let path = std::env::temp_dir().join(format!("quadtree-config-{}.toml", std::process::id()));
        std::fs::write(&path, "capacity = 2\n[boundary]\nhalf_height = 10.0\n").unwrap();
        let loaded = TreeConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.capacity, 2);
        assert_eq!(loaded.boundary.half_height, 10.0);
    }

    #[test]
    fn test_build_from_config() {
        let mut tree = QuadNode::from_config(&TreeConfig::default()).unwrap();
        assert_eq!(tree.capacity(), 4);
        assert!(tree.insert(Point::new(99.0, -100.0)).unwrap());
        assert!(!tree.insert(Point::new(100.0, 0.0)).unwrap());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut config = TreeConfig::default();
        config.boundary.half_width = -1.0;
        assert!(matches!(
            QuadNode::from_config(&config),
            Err(QuadTreeError::InvalidExtent { .. })
        ));

        let config = TreeConfig { capacity: 0, ..TreeConfig::default() };
        assert_eq!(
            QuadNode::from_config(&config).unwrap_err(),
            QuadTreeError::ZeroCapacity
        );
    }
}
