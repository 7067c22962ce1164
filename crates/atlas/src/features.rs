//! Components describing what a layer element draws, plus the per-dataset
//! builders the mode controller hands to the layer manager.

use bevy::prelude::*;

use crate::config::{
    BIOME_OVERLAY_OFFSET, CLIMATE_HALO_RADIUS_M, CLIMATE_OVERLAY_OFFSET, MARINE_HALO_RADIUS_M,
    MARINE_OVERLAY_OFFSET, WETLAND_OVERLAY_OFFSET,
};
use crate::geo::{LatLon, OverlayRect};
use crate::overlay::{self, OverlayStyle};
use crate::popup::{self, Popup};
use crate::records::{
    AnimalRecord, BiomeRecord, ClimateZoneRecord, MapRecord, MarineZoneRecord,
};

/// Colored disc drawn under a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halo {
    pub radius_m: f64,
    pub color: &'static str,
    pub fill_opacity: f32,
}

/// Glyph marker pinned to a coordinate.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLon,
    pub glyph: &'static str,
    pub halo: Option<Halo>,
}

/// Rectangle overlay synthesized around a record.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct OverlayShape {
    pub rect: OverlayRect,
    pub style: OverlayStyle,
}

/// Popup opened when the element is clicked.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FeaturePopup(pub Popup);

fn marker(record: &impl MapRecord, halo: Option<Halo>) -> MapMarker {
    MapMarker {
        position: record.coordinate(),
        glyph: record.icon(),
        halo,
    }
}

pub fn animal_marker(animal: &AnimalRecord) -> impl Bundle {
    (
        Name::new(animal.name),
        marker(animal, None),
        FeaturePopup(popup::animal_popup(animal)),
    )
}

pub fn biome_marker(biome: &BiomeRecord) -> impl Bundle {
    (
        Name::new(biome.name),
        marker(biome, None),
        FeaturePopup(popup::biome_popup(biome)),
    )
}

pub fn climate_marker(zone: &ClimateZoneRecord) -> impl Bundle {
    let halo = Halo {
        radius_m: CLIMATE_HALO_RADIUS_M,
        color: zone.color,
        fill_opacity: 0.3,
    };
    (
        Name::new(zone.name),
        marker(zone, Some(halo)),
        FeaturePopup(popup::climate_popup(zone)),
    )
}

pub fn marine_marker(zone: &MarineZoneRecord) -> impl Bundle {
    let halo = Halo {
        radius_m: MARINE_HALO_RADIUS_M,
        color: zone.color,
        fill_opacity: 0.4,
    };
    (
        Name::new(zone.name),
        marker(zone, Some(halo)),
        FeaturePopup(popup::marine_popup(zone)),
    )
}

pub fn biome_overlay(biome: &BiomeRecord) -> impl Bundle {
    (
        Name::new(format!("{} overlay", biome.name)),
        OverlayShape {
            rect: OverlayRect::around(biome.coordinate, BIOME_OVERLAY_OFFSET),
            style: overlay::biome_style(biome),
        },
        FeaturePopup(popup::biome_overlay_popup(biome)),
    )
}

pub fn wetland_overlay(biome: &BiomeRecord) -> impl Bundle {
    (
        Name::new(format!("{} wetland highlight", biome.name)),
        OverlayShape {
            rect: OverlayRect::around(biome.coordinate, WETLAND_OVERLAY_OFFSET),
            style: overlay::WETLAND_STYLE,
        },
        FeaturePopup(popup::wetland_overlay_popup(biome)),
    )
}

pub fn climate_overlay(zone: &ClimateZoneRecord) -> impl Bundle {
    (
        Name::new(format!("{} overlay", zone.name)),
        OverlayShape {
            rect: OverlayRect::around(zone.coordinate, CLIMATE_OVERLAY_OFFSET),
            style: overlay::climate_style(zone),
        },
        FeaturePopup(popup::climate_overlay_popup(zone)),
    )
}

pub fn marine_overlay(zone: &MarineZoneRecord) -> impl Bundle {
    (
        Name::new(format!("{} overlay", zone.name)),
        OverlayShape {
            rect: OverlayRect::around(zone.coordinate, MARINE_OVERLAY_OFFSET),
            style: overlay::marine_style(zone),
        },
        FeaturePopup(popup::marine_overlay_popup(zone)),
    )
}
