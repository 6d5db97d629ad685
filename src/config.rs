//! Viewer configuration loaded from a RON file.

use crate::zoom::{
    DEFAULT_ZOOM, FIT_MARGIN, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP, ZoomController, ZoomLimits,
};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "photo-viewer";
const CONFIG_FILE_NAME: &str = "config.ron";

/// Errors that can occur when loading the viewer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Zoom range, step and startup image of the viewer.
///
/// Every field is optional in the file; missing fields take the defaults of
/// the [`zoom`](crate::zoom) module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Lowest zoom percentage reachable with zoom out
    pub min_zoom: f64,
    /// Highest zoom percentage reachable with zoom in
    pub max_zoom: f64,
    /// Percentage added or removed per zoom step
    pub zoom_step: f64,
    /// Subtracted from the fit ratio to keep the image inside the container
    pub fit_margin: f64,
    /// Image shown on startup when none is given on the command line
    pub default_image: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            fit_margin: FIT_MARGIN,
            default_image: None,
        }
    }
}

impl ViewerConfig {
    /// Parses and validates a RON document.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source)
    }

    /// Loads `path` if given, otherwise the file in the user config directory.
    ///
    /// A missing file in the config directory is not an error and yields the
    /// defaults; an explicitly requested file must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::info!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/photo-viewer/config.ron`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Checks that the zoom range contains the natural size and that the step
    /// and margin are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.min_zoom,
            self.max_zoom,
            self.zoom_step,
            self.fit_margin,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("values must be finite".into()));
        }
        if self.min_zoom <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_zoom must be positive, got {}",
                self.min_zoom
            )));
        }
        if !(self.min_zoom <= DEFAULT_ZOOM && DEFAULT_ZOOM <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "zoom range must contain {DEFAULT_ZOOM}%, got {} to {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "zoom_step must be positive, got {}",
                self.zoom_step
            )));
        }
        if !(0.0..1.0).contains(&self.fit_margin) {
            return Err(ConfigError::Invalid(format!(
                "fit_margin must be in [0, 1), got {}",
                self.fit_margin
            )));
        }
        Ok(())
    }

    pub fn limits(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.min_zoom,
            max: self.max_zoom,
            step: self.zoom_step,
        }
    }

    /// Builds a zoom controller using this range and margin.
    pub fn controller(&self) -> ZoomController {
        ZoomController::new(self.limits(), self.fit_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoom::DisplaySize;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = ViewerConfig::from_ron("()").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.limits(), ZoomLimits::default());
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let config = ViewerConfig::from_ron(
            r#"(max_zoom: 400.0, zoom_step: 25.0, default_image: Some("file:///tmp/cat.png"))"#,
        )
        .unwrap();

        assert_eq!(config.max_zoom, 400.0);
        assert_eq!(config.zoom_step, 25.0);
        assert_eq!(config.min_zoom, MIN_ZOOM);
        assert_eq!(config.default_image.as_deref(), Some("file:///tmp/cat.png"));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = ViewerConfig::from_ron("(min_zoom: 300.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_range_excluding_natural_size_is_rejected() {
        let err = ViewerConfig::from_ron("(min_zoom: 20.0, max_zoom: 80.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_positive_step_is_rejected() {
        let err = ViewerConfig::from_ron("(zoom_step: 0.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_margin_out_of_range_is_rejected() {
        let err = ViewerConfig::from_ron("(fit_margin: 1.5)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = ViewerConfig::from_ron("(max_zoom: )").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let err = ViewerConfig::load(Path::new("/nonexistent/photo-viewer.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_controller_uses_configured_limits() {
        let config = ViewerConfig::from_ron("(min_zoom: 50.0, fit_margin: 0.0)").unwrap();
        let mut zoom = config.controller();
        zoom.set_container_size(100, 100);
        zoom.set_image(1000, 1000);

        // Fit scale 0.1 gives 10%, clamped to the configured minimum
        assert_eq!(zoom.zoom(), 50.0);
    }

    #[test]
    fn test_configured_step_sizes_from_natural_size() {
        let config =
            ViewerConfig::from_ron("(min_zoom: 20.0, max_zoom: 300.0, zoom_step: 25.0)").unwrap();
        let mut zoom = config.controller();
        zoom.set_container_size(400, 300);
        zoom.set_image(800, 600);

        assert_eq!(zoom.original_size(), Some(DisplaySize::new(800.0, 600.0)));
        assert_eq!(zoom.zoom(), 100.0);

        assert_eq!(zoom.zoom_in(), Some(DisplaySize::new(1000.0, 750.0)));
        assert_eq!(zoom.zoom(), 125.0);
        assert_eq!(zoom.display_percent(), Some(125.0));

        zoom.zoom_out();
        zoom.zoom_out();
        assert_eq!(zoom.zoom(), 75.0);
        assert_eq!(zoom.display_size(), Some(DisplaySize::new(600.0, 450.0)));
    }

    #[test]
    fn test_unknown_default_zoom_key_does_not_shift_sizes() {
        // 100% is always the natural size
        let config = ViewerConfig::from_ron("(default_zoom: 150.0)").unwrap();
        let mut zoom = config.controller();
        zoom.set_container_size(400, 300);
        zoom.set_image(800, 600);
        zoom.original_size();
        zoom.zoom_in();

        assert_eq!(zoom.zoom(), 110.0);
    }
}
