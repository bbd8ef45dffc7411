use std::{
    collections::BTreeMap,
    fs,
    ops::Index,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use cube_core::Color;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub type Rgb = [u8; 3];

/// CLI configuration, read from a TOML file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Cube size used when neither `--size` nor `--puzzle` is given.
    pub default_size: usize,
    /// Paint stickers with the palette instead of printing letters.
    pub color_output: bool,
    pub palette: Palette,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_size: 3,
            color_output: true,
            palette: Palette::default(),
        }
    }
}

/// Sticker colors as RGB triples, indexed by `Color as usize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaletteRepr", into = "PaletteRepr")]
pub struct Palette([Rgb; 6]);

impl Default for Palette {
    fn default() -> Self {
        Palette([
            [255, 255, 255],
            [255, 255, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 0, 0],
            [255, 165, 0],
        ])
    }
}

impl Index<Color> for Palette {
    type Output = Rgb;

    fn index(&self, index: Color) -> &Self::Output {
        &self.0[index as usize]
    }
}

/// The `[palette]` table, keyed by color name. Colors left out keep their
/// default.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct PaletteRepr(BTreeMap<Color, Rgb>);

impl From<PaletteRepr> for Palette {
    fn from(value: PaletteRepr) -> Self {
        let mut palette = Palette::default();
        for (color, rgb) in value.0 {
            palette.0[color as usize] = rgb;
        }
        palette
    }
}

impl From<Palette> for PaletteRepr {
    fn from(value: Palette) -> Self {
        PaletteRepr(Color::ALL.into_iter().zip(value.0).collect())
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cube/config.toml"))
}

impl CliConfig {
    /// Loads the config from `path`, or from the default location if no path
    /// is given. A missing default file means built-in defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<CliConfig> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!(target: "config", "No config file found, using defaults");
                    return Ok(CliConfig::default());
                }
            },
        };

        info!(target: "config", "Reading config: path={}", path.display());

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;

        CliConfig::parse(&text)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<CliConfig, toml::de::Error> {
        toml::from_str(text)
    }
}
