//! Asset embedding and image source helpers.

use eframe::egui;
use photo_viewer::ViewerConfig;
use rust_embed::RustEmbed;
use std::path::Path;
use thiserror::Error;

/// Embeds all assets from the assets/ directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const PLACEHOLDER_PATH: &str = "default-photo.svg";

/// URI the embedded placeholder photo is registered under.
pub const PLACEHOLDER_URI: &str = "bytes://default-photo.svg";

/// Errors that can occur when loading embedded assets.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
}

/// Makes the placeholder photo available to egui's loaders under
/// [`PLACEHOLDER_URI`].
pub fn register_placeholder(ctx: &egui::Context) -> Result<(), AssetError> {
    let file = Assets::get(PLACEHOLDER_PATH)
        .ok_or_else(|| AssetError::AssetNotFound(PLACEHOLDER_PATH.to_string()))?;
    ctx.include_bytes(PLACEHOLDER_URI, file.data.into_owned());
    Ok(())
}

/// Turns a command line argument or dropped path into a loader URI.
///
/// Strings that already carry a scheme are passed through; anything else is
/// treated as a local path.
pub fn image_uri(input: &str) -> String {
    if input.contains("://") {
        return input.to_string();
    }

    let path = Path::new(input);
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

/// Picks the image shown on startup: command line, then config, then the
/// embedded placeholder.
pub fn startup_source(cli_image: Option<&str>, config: &ViewerConfig) -> String {
    cli_image
        .or(config.default_image.as_deref())
        .filter(|source| !source.trim().is_empty())
        .map(image_uri)
        .unwrap_or_else(|| PLACEHOLDER_URI.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_passes_through() {
        assert_eq!(image_uri("https://example.com/a.png"), "https://example.com/a.png");
        assert_eq!(image_uri(PLACEHOLDER_URI), PLACEHOLDER_URI);
    }

    #[test]
    fn test_absolute_path_becomes_file_uri() {
        assert_eq!(image_uri("/tmp/photo.jpg"), "file:///tmp/photo.jpg");
    }

    #[test]
    fn test_relative_path_is_made_absolute() {
        let uri = image_uri("photo.jpg");
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("photo.jpg"));
        assert!(Path::new(uri.trim_start_matches("file://")).is_absolute());
    }

    #[test]
    fn test_startup_source_precedence() {
        let mut config = ViewerConfig::default();
        assert_eq!(startup_source(None, &config), PLACEHOLDER_URI);

        config.default_image = Some("/srv/default.png".into());
        assert_eq!(startup_source(None, &config), "file:///srv/default.png");
        assert_eq!(
            startup_source(Some("/tmp/cli.png"), &config),
            "file:///tmp/cli.png"
        );
    }

    #[test]
    fn test_placeholder_is_embedded() {
        assert!(Assets::get(PLACEHOLDER_PATH).is_some());
    }
}
