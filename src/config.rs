//! Runtime configuration.
//!
//! Every field has a default, so a missing file, an empty file and a
//! partial file are all valid:
//!
//! ```toml
//! [window]
//! width = 800
//! height = 600
//! title = "LearnOpenGL"
//! vsync = true
//!
//! [context]
//! major = 3
//! minor = 3
//!
//! [render]
//! clear_color = [0.2, 0.3, 0.3, 1.0]
//! wireframe = "hold"
//!
//! [assets]
//! root = "assets"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::{fs, path};

/// Window creation parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Window {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "LearnOpenGL".to_string(),
            vsync: true,
        }
    }
}

/// Requested OpenGL core profile version.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Context {
    pub major: u8,
    pub minor: u8,
}

impl Default for Context {
    fn default() -> Self {
        Self { major: 3, minor: 3 }
    }
}

/// How the wireframe key behaves.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WireframeMode {
    /// Wireframe while the key is held down.
    Hold,

    /// Each key press flips between wireframe and fill.
    Click,
}

impl Default for WireframeMode {
    fn default() -> Self {
        WireframeMode::Hold
    }
}

/// Per-frame rendering parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Render {
    pub clear_color: [f32; 4],
    pub wireframe: WireframeMode,
}

impl Default for Render {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3, 1.0],
            wireframe: WireframeMode::default(),
        }
    }
}

/// Where shaders and textures are read from.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Assets {
    pub root: path::PathBuf,
}

impl Default for Assets {
    fn default() -> Self {
        Self { root: path::PathBuf::from("assets") }
    }
}

impl Assets {
    /// Path of a GLSL file under `<root>/shaders`.
    pub fn shader(&self, name: &str) -> path::PathBuf {
        self.root.join("shaders").join(name)
    }

    /// Path of an image file under `<root>/textures`.
    pub fn texture(&self, name: &str) -> path::PathBuf {
        self.root.join("textures").join(name)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: Window,
    pub context: Context,
    pub render: Render,
    pub assets: Assets,
}

impl Config {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> ::std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads the configuration file at `path`.
    pub fn load<P: AsRef<path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Replaces settings given on the command line.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(width) = overrides.width {
            self.window.width = width;
        }
        if let Some(height) = overrides.height {
            self.window.height = height;
        }
        if let Some(root) = overrides.assets {
            self.assets.root = root;
        }
    }
}

/// Command line settings that take precedence over the configuration file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub assets: Option<path::PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.window.title, "LearnOpenGL");
        assert_eq!(config.render.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert_eq!(config.render.wireframe, WireframeMode::Hold);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [window]
            width = 1280

            [render]
            wireframe = "click"
            "#,
        ).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.render.wireframe, WireframeMode::Click);
        assert_eq!(config.context, Context { major: 3, minor: 3 });
    }

    #[test]
    fn unknown_wireframe_mode_is_rejected() {
        assert!(Config::from_toml("[render]\nwireframe = \"toggle\"\n").is_err());
    }

    #[test]
    fn asset_paths_are_rooted() {
        let assets = Assets { root: path::PathBuf::from("data") };
        assert_eq!(assets.shader("a.vert"), path::PathBuf::from("data/shaders/a.vert"));
        assert_eq!(assets.texture("b.png"), path::PathBuf::from("data/textures/b.png"));
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let mut config = Config::from_toml("[window]\nwidth = 1280\nheight = 720\n").unwrap();
        config.apply_overrides(Overrides {
            width: Some(640),
            height: None,
            assets: Some(path::PathBuf::from("/opt/lessons")),
        });
        assert_eq!((config.window.width, config.window.height), (640, 720));
        assert_eq!(config.assets.shader("a.vert"), path::PathBuf::from("/opt/lessons/shaders/a.vert"));
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = Config::default();
        config.apply_overrides(Overrides::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(Config::load("no/such/config.toml"), Err(Error::Io { .. })));
    }
}
