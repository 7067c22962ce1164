//! Overlay styling per dataset.

use crate::records::{BiomeRecord, ClimateZoneRecord, MarineZoneRecord};

/// Stroke color used for the wetland highlight, regardless of biome color.
pub const WETLAND_COLOR: &str = "#8b4513";

/// Fallback when a biome has no color of its own.
pub const DEFAULT_BIOME_COLOR: &str = "#2d5016";

/// Visual style of a rectangle overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// `#rrggbb` outline color.
    pub stroke: &'static str,
    /// `#rrggbb` fill color.
    pub fill: &'static str,
    pub fill_opacity: f32,
    /// Outline width in logical pixels.
    pub weight: f32,
    /// Dash and gap lengths in logical pixels; `None` for a solid outline.
    pub dash: Option<(f32, f32)>,
}

impl OverlayStyle {
    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

pub fn biome_style(biome: &BiomeRecord) -> OverlayStyle {
    let color = if biome.color.is_empty() {
        DEFAULT_BIOME_COLOR
    } else {
        biome.color
    };
    OverlayStyle {
        stroke: color,
        fill: color,
        fill_opacity: 0.3,
        weight: 2.0,
        dash: None,
    }
}

pub const WETLAND_STYLE: OverlayStyle = OverlayStyle {
    stroke: WETLAND_COLOR,
    fill: WETLAND_COLOR,
    fill_opacity: 0.4,
    weight: 3.0,
    dash: Some((10.0, 5.0)),
};

pub fn climate_style(zone: &ClimateZoneRecord) -> OverlayStyle {
    OverlayStyle {
        stroke: zone.color,
        fill: zone.color,
        fill_opacity: 0.25,
        weight: 2.0,
        dash: None,
    }
}

pub fn marine_style(zone: &MarineZoneRecord) -> OverlayStyle {
    OverlayStyle {
        stroke: zone.color,
        fill: zone.color,
        fill_opacity: 0.35,
        weight: 2.0,
        dash: Some((8.0, 4.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::DatasetRegistry;

    #[test]
    fn biome_style_uses_record_color() {
        let registry = DatasetRegistry::reference();
        let style = biome_style(&registry.biomes[2]);
        assert_eq!(style.stroke, "#90ee90");
        assert_eq!(style.fill, "#90ee90");
        assert!(!style.is_dashed());
    }

    #[test]
    fn biome_without_color_falls_back() {
        let mut biome = DatasetRegistry::reference().biomes[0].clone();
        biome.color = "";
        assert_eq!(biome_style(&biome).stroke, DEFAULT_BIOME_COLOR);
    }

    #[test]
    fn wetland_and_marine_outlines_are_dashed() {
        let registry = DatasetRegistry::reference();
        assert_eq!(WETLAND_STYLE.dash, Some((10.0, 5.0)));
        assert_eq!(marine_style(&registry.marine_zones[0]).dash, Some((8.0, 4.0)));
        assert!(!climate_style(&registry.climate_zones[0]).is_dashed());
    }
}
