//! Read-only panel content replaced on every mode transition.

use bevy::prelude::*;

use crate::legend::{legend_for_mode, LegendSection};
use crate::mode::MapMode;

pub const CLICK_TIP: &str = "💡 Tip: Click on any marker to see detailed information!";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
}

pub fn info_for_mode(mode: MapMode) -> InfoPanel {
    let (title, description) = match mode {
        MapMode::Wildlife => (
            "Wildlife & Biomes Mode",
            "Explore Ireland's amazing animals and natural ecosystems. Click on markers to learn more about each species and their habitats.",
        ),
        MapMode::Climate => (
            "Climate Mode",
            "View Ireland's climate zones and weather patterns. Ireland has a temperate oceanic climate with mild winters and cool summers.",
        ),
        MapMode::Underwater => (
            "Underwater Mode",
            "Explore Ireland's rich marine ecosystems. The waters around Ireland support diverse marine life from tiny plankton to giant basking sharks.",
        ),
    };
    InfoPanel {
        title,
        description,
        tip: CLICK_TIP,
    }
}

/// Legend and info panel content for the active mode.
///
/// Empty until the first mode is applied at startup.
#[derive(Resource, Debug, Default)]
pub struct PanelContent {
    pub legend: &'static [LegendSection],
    pub info: InfoPanel,
}

impl PanelContent {
    pub fn for_mode(mode: MapMode) -> Self {
        Self {
            legend: legend_for_mode(mode),
            info: info_for_mode(mode),
        }
    }
}
