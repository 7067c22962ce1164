//! Reference datasets and the registry that serves them.
//!
//! The registry is built once, validated, and read-only afterwards. A record
//! that breaks the dataset contract is a development-time defect, so
//! validation panics instead of skipping the record.

mod animals;
mod biomes;
mod climate;
mod counties;
mod marine;

pub use animals::ANIMALS;
pub use biomes::BIOMES;
pub use climate::CLIMATE_ZONES;
pub use counties::COUNTIES;
pub use marine::MARINE_ZONES;

use std::collections::HashSet;

use bevy::prelude::*;

use crate::records::{
    AnimalRecord, BiomeRecord, ClimateZoneRecord, CountyRecord, MarineZoneRecord,
};

/// Every dataset the map can display.
#[derive(Resource, Debug, Clone)]
pub struct DatasetRegistry {
    pub animals: Vec<AnimalRecord>,
    pub biomes: Vec<BiomeRecord>,
    pub climate_zones: Vec<ClimateZoneRecord>,
    pub marine_zones: Vec<MarineZoneRecord>,
    /// Kept for completeness; no layer group draws counties.
    pub counties: Vec<CountyRecord>,
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::reference()
    }
}

impl DatasetRegistry {
    /// The built-in Irish datasets, validated.
    pub fn reference() -> Self {
        let registry = Self {
            animals: ANIMALS.to_vec(),
            biomes: BIOMES.to_vec(),
            climate_zones: CLIMATE_ZONES.to_vec(),
            marine_zones: MARINE_ZONES.to_vec(),
            counties: COUNTIES.to_vec(),
        };
        registry.validate();
        registry
    }

    /// Biomes that receive the extra wetland highlight overlay.
    pub fn wetland_biomes(&self) -> Vec<BiomeRecord> {
        self.biomes
            .iter()
            .filter(|b| b.is_wetland_like())
            .cloned()
            .collect()
    }

    /// Asserts the dataset contract. Panics on the first violation.
    pub fn validate(&self) {
        for a in &self.animals {
            assert!(!a.name.is_empty(), "animal record with empty name");
        }
        for b in &self.biomes {
            assert!(!b.name.is_empty(), "biome record with empty name");
            assert!(
                b.color.is_empty() || is_hex_color(b.color),
                "biome {}: bad color {}",
                b.name,
                b.color
            );
        }

        let mut colors = HashSet::new();
        for z in &self.climate_zones {
            assert!(!z.name.is_empty(), "climate zone with empty name");
            assert!(is_hex_color(z.color), "climate zone {}: bad color {}", z.name, z.color);
            assert!(
                colors.insert(z.color.to_ascii_lowercase()),
                "climate zone {}: color {} already used by another zone",
                z.name,
                z.color
            );
        }

        for m in &self.marine_zones {
            assert!(!m.name.is_empty(), "marine zone with empty name");
            assert!(is_hex_color(m.color), "marine zone {}: bad color {}", m.name, m.color);
            assert!(!m.species.is_empty(), "marine zone {} lists no species", m.name);
        }
        for c in &self.counties {
            assert!(!c.name.is_empty(), "county record with empty name");
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} animals, {} biomes, {} climate zones, {} marine zones, {} counties",
            self.animals.len(),
            self.biomes.len(),
            self.climate_zones.len(),
            self.marine_zones.len(),
            self.counties.len()
        )
    }
}

/// `#rrggbb` with exactly six hex digits.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{LatLon, IRELAND_REGION};

    #[test]
    fn reference_dataset_sizes() {
        let r = DatasetRegistry::reference();
        assert_eq!(r.animals.len(), 12);
        assert_eq!(r.biomes.len(), 6);
        assert_eq!(r.climate_zones.len(), 5);
        assert_eq!(r.marine_zones.len(), 6);
        assert_eq!(r.counties.len(), 10);
    }

    #[test]
    fn all_coordinates_fall_in_the_documented_region() {
        let r = DatasetRegistry::reference();
        let points: Vec<(&str, LatLon)> = r
            .animals
            .iter()
            .map(|a| (a.name, a.coordinate))
            .chain(r.biomes.iter().map(|b| (b.name, b.coordinate)))
            .chain(r.climate_zones.iter().map(|z| (z.name, z.coordinate)))
            .chain(r.marine_zones.iter().map(|m| (m.name, m.coordinate)))
            .chain(r.counties.iter().map(|c| (c.name, c.coordinate)))
            .collect();
        for (name, point) in points {
            assert!(IRELAND_REGION.contains(point), "{name} at {point:?}");
        }
    }

    #[test]
    fn only_blanket_bog_is_wetland_like_in_reference_data() {
        let r = DatasetRegistry::reference();
        let names: Vec<&str> = r.wetland_biomes().iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Blanket Bog"]);
    }

    #[test]
    fn endangered_species_in_reference_data() {
        let r = DatasetRegistry::reference();
        let endangered = r.animals.iter().filter(|a| a.endangered).count();
        assert_eq!(endangered, 4);
    }

    #[test]
    fn hex_color_check() {
        assert!(is_hex_color("#2d5016"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("2d5016"));
        assert!(!is_hex_color("#2d501"));
        assert!(!is_hex_color("#2d501g"));
    }

    #[test]
    #[should_panic(expected = "lists no species")]
    fn marine_zone_without_species_fails_validation() {
        let mut r = DatasetRegistry::reference();
        r.marine_zones[0].species = &[];
        r.validate();
    }

    #[test]
    #[should_panic(expected = "already used")]
    fn duplicate_climate_color_fails_validation() {
        let mut r = DatasetRegistry::reference();
        r.climate_zones[1].color = r.climate_zones[0].color;
        r.validate();
    }

    #[test]
    #[should_panic(expected = "empty name")]
    fn empty_animal_name_fails_validation() {
        let mut r = DatasetRegistry::reference();
        r.animals[3].name = "";
        r.validate();
    }
}
