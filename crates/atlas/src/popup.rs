//! Record → popup view-models.
//!
//! Every builder here is a pure function of one record. The UI decides how a
//! [`Popup`] looks; nothing in this module knows about egui.

use bevy::prelude::*;

use crate::layers::LayerGroup;
use crate::records::{AnimalRecord, BiomeRecord, ClimateZoneRecord, MarineZoneRecord};

/// Conservation badge shown at the bottom of an animal popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConservationStatus {
    Endangered,
    LeastConcern,
}

impl ConservationStatus {
    pub fn from_endangered(endangered: bool) -> Self {
        if endangered {
            Self::Endangered
        } else {
            Self::LeastConcern
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Endangered => "Endangered",
            Self::LeastConcern => "Least Concern",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Endangered => "⚠️",
            Self::LeastConcern => "✅",
        }
    }
}

/// Reference to an externally hosted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub uri: &'static str,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupField {
    /// "Label: value", optionally with the value emphasized.
    Labeled {
        label: &'static str,
        value: String,
        emphasized: bool,
    },
    /// Free-standing paragraph.
    Paragraph(String),
    /// Small secondary text.
    Note(String),
    Badge(ConservationStatus),
}

impl PopupField {
    fn labeled(label: &'static str, value: impl Into<String>) -> Self {
        Self::Labeled {
            label,
            value: value.into(),
            emphasized: false,
        }
    }

    fn plain_text(&self) -> String {
        match self {
            Self::Labeled { label, value, .. } => format!("{label}: {value}"),
            Self::Paragraph(text) | Self::Note(text) => text.clone(),
            Self::Badge(status) => format!("{} {}", status.glyph(), status.label()),
        }
    }
}

/// Display fragment for one map element.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub header: String,
    pub image: Option<ImageRef>,
    pub fields: Vec<PopupField>,
}

impl Popup {
    /// Flattens the popup to one line per part, header first.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.header.clone()];
        lines.extend(self.fields.iter().map(PopupField::plain_text));
        lines.join("\n")
    }

    pub fn badge(&self) -> Option<ConservationStatus> {
        self.fields.iter().find_map(|f| match f {
            PopupField::Badge(status) => Some(*status),
            _ => None,
        })
    }
}

fn header(icon: &str, name: &str) -> String {
    format!("{icon} {name}")
}

pub fn animal_popup(animal: &AnimalRecord) -> Popup {
    Popup {
        header: header(animal.icon, animal.name),
        image: Some(ImageRef {
            uri: animal.image_url,
            alt: animal.name.to_string(),
        }),
        fields: vec![
            PopupField::Labeled {
                label: "Scientific Name",
                value: animal.scientific_name.to_string(),
                emphasized: true,
            },
            PopupField::labeled("Location", animal.location),
            PopupField::labeled("Habitat", animal.habitat),
            PopupField::Paragraph(animal.description.to_string()),
            PopupField::Badge(ConservationStatus::from_endangered(animal.endangered)),
        ],
    }
}

pub fn biome_popup(biome: &BiomeRecord) -> Popup {
    Popup {
        header: header(biome.icon, biome.name),
        image: None,
        fields: vec![
            PopupField::labeled("Type", biome.kind.label()),
            PopupField::labeled("Found in", biome.locations.join(", ")),
            PopupField::Paragraph(biome.description.to_string()),
            PopupField::labeled("Typical Flora", biome.flora),
            PopupField::labeled("Typical Fauna", biome.fauna),
        ],
    }
}

pub fn climate_popup(zone: &ClimateZoneRecord) -> Popup {
    Popup {
        header: header(zone.icon, zone.name),
        image: None,
        fields: vec![
            PopupField::labeled("Average Temperature", zone.avg_temp),
            PopupField::labeled("Annual Rainfall", zone.rainfall),
            PopupField::Paragraph(zone.description.to_string()),
            PopupField::labeled("Seasons", zone.seasons),
        ],
    }
}

pub fn marine_popup(zone: &MarineZoneRecord) -> Popup {
    Popup {
        header: header(zone.icon, zone.name),
        image: Some(ImageRef {
            uri: zone.image_url,
            alt: zone.name.to_string(),
        }),
        fields: vec![
            PopupField::labeled("Location", zone.location),
            PopupField::labeled("Depth", zone.depth),
            PopupField::Paragraph(zone.description.to_string()),
            PopupField::labeled("Common Species", zone.species.join(", ")),
        ],
    }
}

// Overlay popups are shorter than the marker popups.

pub fn biome_overlay_popup(biome: &BiomeRecord) -> Popup {
    Popup {
        header: biome.name.to_string(),
        image: None,
        fields: vec![
            PopupField::Paragraph(biome.kind.label().to_string()),
            PopupField::Note(biome.description.to_string()),
        ],
    }
}

pub fn wetland_overlay_popup(biome: &BiomeRecord) -> Popup {
    Popup {
        header: format!("🌾 Wetland Area: {}", biome.name),
        image: None,
        fields: vec![PopupField::Paragraph(biome.description.to_string())],
    }
}

pub fn climate_overlay_popup(zone: &ClimateZoneRecord) -> Popup {
    Popup {
        header: header(zone.icon, zone.name),
        image: None,
        fields: vec![
            PopupField::Paragraph(zone.avg_temp.to_string()),
            PopupField::Paragraph(zone.rainfall.to_string()),
        ],
    }
}

pub fn marine_overlay_popup(zone: &MarineZoneRecord) -> Popup {
    Popup {
        header: header(zone.icon, zone.name),
        image: None,
        fields: vec![
            PopupField::labeled("Depth", zone.depth),
            PopupField::Note(zone.species.join(", ")),
        ],
    }
}

/// Popup opened on the map at startup.
pub fn welcome_popup() -> Popup {
    Popup {
        header: "Welcome to EcoTracker Ireland! 🌿".to_string(),
        image: None,
        fields: vec![PopupField::Paragraph("Click around to explore.".to_string())],
    }
}

/// The popup currently open on the map, if any.
///
/// A popup opened from a layer element closes when that layer is cleared; a
/// popup opened on the map itself stays until dismissed.
#[derive(Resource, Debug, Default)]
pub struct SelectedPopup {
    pub popup: Option<Popup>,
    pub source: Option<LayerGroup>,
}

impl SelectedPopup {
    pub fn open_for(&mut self, group: LayerGroup, popup: Popup) {
        self.popup = Some(popup);
        self.source = Some(group);
    }

    pub fn open_on_map(&mut self, popup: Popup) {
        self.popup = Some(popup);
        self.source = None;
    }

    pub fn close(&mut self) {
        self.popup = None;
        self.source = None;
    }

    pub fn is_open(&self) -> bool {
        self.popup.is_some()
    }

    /// Closes the popup if it belongs to a layer element.
    pub fn close_layer_popup(&mut self) {
        if self.source.is_some() {
            self.close();
        }
    }
}
