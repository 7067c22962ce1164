//! Immutable dataset records.
//!
//! Records are plain data compiled into the binary. They are never created,
//! mutated or destroyed at runtime.

use crate::geo::LatLon;

/// Common accessors for anything that gets a marker on the map.
pub trait MapRecord {
    fn name(&self) -> &'static str;
    fn icon(&self) -> &'static str;
    fn coordinate(&self) -> LatLon;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    pub name: &'static str,
    pub scientific_name: &'static str,
    /// Place where the species is typically seen, e.g. "County Kerry".
    pub location: &'static str,
    pub coordinate: LatLon,
    pub icon: &'static str,
    pub habitat: &'static str,
    pub description: &'static str,
    pub endangered: bool,
    /// External image URI. Embedded in popups, never fetched.
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomeKind {
    Forest,
    Wetland,
    Grassland,
    Coastal,
    Aquatic,
}

impl BiomeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Forest => "Forest",
            Self::Wetland => "Wetland",
            Self::Grassland => "Grassland",
            Self::Coastal => "Coastal",
            Self::Aquatic => "Aquatic",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomeRecord {
    pub name: &'static str,
    pub kind: BiomeKind,
    pub locations: &'static [&'static str],
    pub coordinate: LatLon,
    /// `#rrggbb` fill/stroke color of the biome overlay.
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub flora: &'static str,
    pub fauna: &'static str,
}

impl BiomeRecord {
    /// Wetland-like biomes get an extra highlighted overlay: either typed as
    /// a wetland or named after a bog.
    pub fn is_wetland_like(&self) -> bool {
        self.kind == BiomeKind::Wetland || self.name.to_lowercase().contains("bog")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClimateZoneRecord {
    pub name: &'static str,
    pub region: &'static str,
    pub coordinate: LatLon,
    pub avg_temp: &'static str,
    pub rainfall: &'static str,
    pub icon: &'static str,
    /// `#rrggbb`, unique per zone; identifies the zone in the legend.
    pub color: &'static str,
    pub description: &'static str,
    pub seasons: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarineZoneRecord {
    pub name: &'static str,
    pub location: &'static str,
    pub coordinate: LatLon,
    pub depth: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub species: &'static [&'static str],
    pub image_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountyRecord {
    pub name: &'static str,
    pub coordinate: LatLon,
    pub info: &'static str,
}

impl MapRecord for AnimalRecord {
    fn name(&self) -> &'static str {
        self.name
    }
    fn icon(&self) -> &'static str {
        self.icon
    }
    fn coordinate(&self) -> LatLon {
        self.coordinate
    }
}

impl MapRecord for BiomeRecord {
    fn name(&self) -> &'static str {
        self.name
    }
    fn icon(&self) -> &'static str {
        self.icon
    }
    fn coordinate(&self) -> LatLon {
        self.coordinate
    }
}

impl MapRecord for ClimateZoneRecord {
    fn name(&self) -> &'static str {
        self.name
    }
    fn icon(&self) -> &'static str {
        self.icon
    }
    fn coordinate(&self) -> LatLon {
        self.coordinate
    }
}

impl MapRecord for MarineZoneRecord {
    fn name(&self) -> &'static str {
        self.name
    }
    fn icon(&self) -> &'static str {
        self.icon
    }
    fn coordinate(&self) -> LatLon {
        self.coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn biome(name: &'static str, kind: BiomeKind) -> BiomeRecord {
        BiomeRecord {
            name,
            kind,
            locations: &["Somewhere"],
            coordinate: LatLon::new(53.0, -8.0),
            color: "#2d5016",
            icon: "🌲",
            description: "",
            flora: "",
            fauna: "",
        }
    }

    #[test]
    fn wetland_kind_is_wetland_like() {
        assert!(biome("Raised Marsh", BiomeKind::Wetland).is_wetland_like());
    }

    #[test]
    fn bog_in_name_is_wetland_like_regardless_of_kind() {
        assert!(biome("Bogland Forest", BiomeKind::Forest).is_wetland_like());
        assert!(biome("Lowland BOG", BiomeKind::Grassland).is_wetland_like());
    }

    #[test]
    fn other_biomes_are_not_wetland_like() {
        assert!(!biome("Atlantic Oakwoods", BiomeKind::Forest).is_wetland_like());
        assert!(!biome("Sand Dunes", BiomeKind::Coastal).is_wetland_like());
    }
}
