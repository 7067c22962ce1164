//! Static legend content per mode, and the legend panel's visibility.

use bevy::prelude::*;

use crate::mode::MapMode;

/// What sits left of a legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Icon(&'static str),
    Color { hex: &'static str, dashed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendItem {
    pub swatch: Swatch,
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSection {
    pub title: &'static str,
    pub items: &'static [LegendItem],
}

const fn icon(glyph: &'static str, label: &'static str, detail: &'static str) -> LegendItem {
    LegendItem {
        swatch: Swatch::Icon(glyph),
        label,
        detail,
    }
}

const fn color(hex: &'static str, dashed: bool, label: &'static str, detail: &'static str) -> LegendItem {
    LegendItem {
        swatch: Swatch::Color { hex, dashed },
        label,
        detail,
    }
}

static WILDLIFE_LEGEND: [LegendSection; 3] = [
    LegendSection {
        title: "🦌 Wildlife",
        items: &[
            icon("🦌", "Mammals", "Red deer, foxes, hares"),
            icon("🐦", "Birds", "Puffins, falcons, owls"),
            icon("🦭", "Marine Mammals", "Seals, dolphins, whales"),
        ],
    },
    LegendSection {
        title: "🌍 Biomes & Ecosystems",
        items: &[
            color("#2d5016", false, "Forests", "Oakwoods, pine forests"),
            color("#8b4513", true, "Wetlands & Bogs", "Blanket bogs, marshes"),
            color("#90ee90", false, "Grasslands", "Coastal, limestone"),
            color("#4682b4", false, "Freshwater", "Lakes, rivers, ponds"),
        ],
    },
    LegendSection {
        title: "🐟 Marine Life (Oceans)",
        items: &[
            icon("🌿", "Kelp Forests", "West coast"),
            icon("🐋", "Deep Waters", "Whales, dolphins"),
        ],
    },
];

static CLIMATE_LEGEND: [LegendSection; 1] = [LegendSection {
    title: "🌦️ Climate Zones",
    items: &[
        color("#4169e1", false, "West Coast - Oceanic", "High rainfall (1400mm/yr)"),
        color("#ffa500", false, "Southeast - Warmest", "Sunniest region (800mm/yr)"),
        color("#8a9a5b", false, "Mountain Climate", "Cool, wet (2000mm/yr)"),
        color("#87ceeb", false, "East Coast - Drier", "Moderate (750mm/yr)"),
        color("#98d8c8", false, "Midlands - Continental", "Moderate (900mm/yr)"),
    ],
}];

static UNDERWATER_LEGEND: [LegendSection; 2] = [
    LegendSection {
        title: "🌊 Marine Zones",
        items: &[
            color("#2e8b57", true, "Kelp Forests", "Depth: 5-30m"),
            color("#000080", true, "Deep Atlantic", "Depth: 200-4000m"),
            color("#4682b4", true, "Continental Shelf", "Depth: 0-200m"),
            color("#696969", true, "Rocky Reefs", "Depth: 0-50m"),
            color("#daa520", true, "Sandy Seabed", "Depth: 10-100m"),
        ],
    },
    LegendSection {
        title: "🐟 Marine Life",
        items: &[
            icon("🐋", "Whales & Dolphins", "Deep waters"),
            icon("🦈", "Sharks", "Basking, porbeagle"),
            icon("🐟", "Fish Species", "Cod, haddock, tuna"),
            icon("🦐", "Crustaceans", "Crabs, lobsters, shrimp"),
            icon("🌿", "Kelp & Seaweed", "Marine plants"),
        ],
    },
];

pub fn legend_for_mode(mode: MapMode) -> &'static [LegendSection] {
    match mode {
        MapMode::Wildlife => &WILDLIFE_LEGEND,
        MapMode::Climate => &CLIMATE_LEGEND,
        MapMode::Underwater => &UNDERWATER_LEGEND,
    }
}

/// Whether the legend panel is shown. Hidden at startup.
#[derive(Resource, Debug, Default)]
pub struct LegendVisibility {
    pub visible: bool,
}

impl LegendVisibility {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Text of the toolbar button that toggles the legend.
    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            "📋 Hide Legend"
        } else {
            "📋 Show Legend"
        }
    }
}
