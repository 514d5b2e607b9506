//! Configuration file support for Liftscript.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftscript/config.toml`.

use crate::equipment::{standard_plate_set, EquipmentConfig, PlateInventory, StandardPlateSet};
use crate::types::{GeneratorConfig, WeightUnit};
use crate::weight::Weight;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorSection,

    #[serde(default)]
    pub equipment: Option<EquipmentSection>,
}

/// Script generation options
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorSection {
    #[serde(default)]
    pub include_warmups: bool,

    #[serde(default)]
    pub include_rest_times: bool,

    #[serde(default = "default_true")]
    pub include_week_headers: bool,

    #[serde(default = "default_true")]
    pub include_comments: bool,

    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            include_warmups: false,
            include_rest_times: false,
            include_week_headers: true,
            include_comments: true,
            weight_unit: WeightUnit::Lb,
        }
    }
}

/// Equipment and plate inventory configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EquipmentSection {
    #[serde(default = "default_barbell_weight")]
    pub barbell_weight: f64,

    #[serde(default)]
    pub dumbbell_max: Option<f64>,

    /// Named standard inventory: "home_basic", "home_full", "commercial_gym".
    /// Ignored when explicit `plates` entries are present.
    #[serde(default)]
    pub standard_set: Option<String>,

    #[serde(default)]
    pub plates: Vec<PlateEntry>,
}

impl Default for EquipmentSection {
    fn default() -> Self {
        Self {
            barbell_weight: default_barbell_weight(),
            dumbbell_max: None,
            standard_set: None,
            plates: Vec::new(),
        }
    }
}

/// One plate inventory entry: plate weight and pairs on hand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlateEntry {
    pub weight: f64,
    pub pairs: u32,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_barbell_weight() -> f64 {
    45.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftscript").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build the generator options this configuration describes.
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let equipment = match &self.equipment {
            Some(section) => Some(section.to_equipment(self.generator.weight_unit)?),
            None => None,
        };

        Ok(GeneratorConfig {
            include_warmups: self.generator.include_warmups,
            include_rest_times: self.generator.include_rest_times,
            include_week_headers: self.generator.include_week_headers,
            include_comments: self.generator.include_comments,
            weight_unit: self.generator.weight_unit,
            equipment,
        })
    }
}

impl EquipmentSection {
    /// Resolve this section into a core equipment configuration.
    pub fn to_equipment(&self, unit: WeightUnit) -> Result<EquipmentConfig> {
        let barbell_weight = Weight::from_f64(self.barbell_weight);
        if !barbell_weight.is_positive() {
            return Err(Error::Config(format!(
                "barbell_weight must be positive, got {}",
                self.barbell_weight
            )));
        }

        let plate_inventory = if !self.plates.is_empty() {
            let mut inventory = PlateInventory::new();
            for entry in &self.plates {
                let weight = Weight::from_f64(entry.weight);
                if !weight.is_positive() {
                    return Err(Error::Config(format!(
                        "plate weight must be positive, got {}",
                        entry.weight
                    )));
                }
                inventory.insert(weight, entry.pairs);
            }
            inventory
        } else if let Some(name) = &self.standard_set {
            let set = match name.as_str() {
                "home_basic" => StandardPlateSet::HomeBasic,
                "home_full" => StandardPlateSet::HomeFull,
                "commercial_gym" => StandardPlateSet::CommercialGym,
                other => {
                    return Err(Error::Config(format!(
                        "unknown standard plate set: {:?}",
                        other
                    )))
                }
            };
            standard_plate_set(set, unit)
        } else {
            PlateInventory::new()
        };

        Ok(EquipmentConfig {
            weight_unit: unit,
            barbell_weight,
            dumbbell_max: self.dumbbell_max.map(Weight::from_f64),
            plate_inventory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.generator.include_week_headers);
        assert!(config.generator.include_comments);
        assert!(!config.generator.include_warmups);
        assert_eq!(config.generator.weight_unit, WeightUnit::Lb);
        assert!(config.equipment.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.equipment = Some(EquipmentSection {
            barbell_weight: 45.0,
            dumbbell_max: Some(100.0),
            standard_set: Some("home_basic".into()),
            plates: Vec::new(),
        });

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            config.generator.include_comments,
            parsed.generator.include_comments
        );
        assert_eq!(
            parsed.equipment.as_ref().unwrap().standard_set.as_deref(),
            Some("home_basic")
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[generator]
weight_unit = "kg"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.weight_unit, WeightUnit::Kg);
        assert!(config.generator.include_comments); // default
    }

    #[test]
    fn test_explicit_plates() {
        let toml_str = r#"
[equipment]
barbell_weight = 45.0
plates = [
    { weight = 45.0, pairs = 2 },
    { weight = 2.5, pairs = 2 },
]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let generator = config.generator_config().unwrap();
        let equipment = generator.equipment.unwrap();

        assert_eq!(equipment.min_increment(), Weight::from_f64(5.0));
        assert_eq!(
            equipment.plate_inventory.get(&Weight::from_f64(45.0)),
            Some(&2)
        );
    }

    #[test]
    fn test_standard_set_resolution() {
        let toml_str = r#"
[equipment]
standard_set = "home_full"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let equipment = config.generator_config().unwrap().equipment.unwrap();
        assert!(!equipment.plate_inventory.is_empty());
    }

    #[test]
    fn test_unknown_standard_set_rejected() {
        let toml_str = r#"
[equipment]
standard_set = "garage_deluxe"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.generator_config().is_err());
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.generator.weight_unit = WeightUnit::Kg;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.generator.weight_unit, WeightUnit::Kg);
    }
}
