use std::path::{Path, PathBuf};

use anyhow::Context;
use photo_packer_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Sheet manifest: page geometry, algorithm, and the authored photo list.
///
/// Quantities are a presentation concept; [`Manifest::inputs`] expands them
/// into one `PhotoInput` per copy before the packer sees them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub page: PageSection,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    pub photos: Vec<PhotoEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageSection {
    pub width: f64,
    pub height: f64,
    /// Uniform margin; any per-side value overrides it.
    #[serde(default)]
    pub margin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(default)]
    pub spacing: f64,
    #[serde(default = "default_multi_page")]
    pub multi_page: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhotoEntry {
    /// Image path. The packer treats it as an opaque payload; `render` reads it.
    pub source: PathBuf,
    /// Print-size label, e.g. "4x6". Defaults to "WIDTHxHEIGHT".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    /// Degrees: 0, 90, 180 or 270.
    #[serde(default)]
    pub rotation: u16,
    #[serde(default)]
    pub priority: i32,
}

fn default_algorithm() -> String {
    "maxrects".to_string()
}

fn default_multi_page() -> bool {
    true
}

fn default_quantity() -> usize {
    1
}

impl Manifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let manifest: Manifest =
            serde_yaml::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
        Ok(manifest)
    }

    pub fn page_config(&self) -> PageConfig {
        let p = &self.page;
        PageConfig {
            page_width: p.width,
            page_height: p.height,
            margin_top: p.margin_top.unwrap_or(p.margin),
            margin_right: p.margin_right.unwrap_or(p.margin),
            margin_bottom: p.margin_bottom.unwrap_or(p.margin),
            margin_left: p.margin_left.unwrap_or(p.margin),
            spacing: p.spacing,
            multi_page: p.multi_page,
        }
    }

    pub fn algorithm(&self) -> anyhow::Result<Algorithm> {
        Ok(self.algorithm.parse()?)
    }

    /// Expands quantities into one input per copy; copy ids are `source#n`.
    pub fn inputs(&self) -> anyhow::Result<Vec<PhotoInput<String, PathBuf>>> {
        let mut authored = Vec::with_capacity(self.photos.len());
        for entry in &self.photos {
            let rotation = Rotation::from_degrees(entry.rotation)
                .with_context(|| format!("photo {}", entry.source.display()))?;
            let name = entry
                .name
                .clone()
                .unwrap_or_else(|| format!("{}x{}", entry.width, entry.height));
            authored.push((
                PhotoInput {
                    id: entry.source.display().to_string(),
                    size: PhotoSize::new(name, entry.width, entry.height),
                    rotation,
                    priority: entry.priority,
                    payload: entry.source.clone(),
                },
                entry.quantity,
            ));
        }
        Ok(expand_quantities(authored, |id, copy| format!("{id}#{copy}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_and_expands() {
        let yaml = r#"
page:
  width: 8.5
  height: 11.0
  margin: 0.25
  spacing: 0.125
algorithm: guillotine
photos:
  - source: img/dog.jpg
    width: 4.0
    height: 6.0
    quantity: 2
    rotation: 90
  - source: img/cat.jpg
    name: wallet
    width: 2.5
    height: 3.5
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(manifest.algorithm().unwrap(), Algorithm::Guillotine);

        let config = manifest.page_config();
        assert_eq!(config.margin_left, 0.25);
        assert_eq!(config.spacing, 0.125);
        assert!(config.multi_page);

        let inputs = manifest.inputs().unwrap();
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0].id, "img/dog.jpg#0");
        assert_eq!(inputs[1].id, "img/dog.jpg#1");
        assert_eq!(inputs[0].rotation, Rotation::R90);
        assert_eq!(inputs[2].size.name, "wallet");
    }

    #[test]
    fn per_side_margins_override_the_uniform_one() {
        let yaml = r#"
page:
  width: 8.5
  height: 11.0
  margin: 0.25
  margin_top: 1.0
photos: []
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        let config = manifest.page_config();
        assert_eq!(config.margin_top, 1.0);
        assert_eq!(config.margin_bottom, 0.25);
    }

    #[test]
    fn bad_rotation_degrees_are_rejected() {
        let yaml = r#"
page:
  width: 8.5
  height: 11.0
photos:
  - source: img/dog.jpg
    width: 4.0
    height: 6.0
    rotation: 45
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert!(manifest.inputs().is_err());
    }
}
