//! Display modes and the controller that switches between them.
//!
//! Every transition is total: all layer groups are cleared, only the new
//! mode's groups are repopulated from the registry, and the legend and info
//! panel are replaced. Re-selecting the active mode repopulates it.

use bevy::prelude::*;

use crate::datasets::DatasetRegistry;
use crate::features;
use crate::info_panel::PanelContent;
use crate::layers::{LayerGroup, LayerManager};
use crate::popup::SelectedPopup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapMode {
    #[default]
    Wildlife,
    Climate,
    Underwater,
}

impl MapMode {
    /// Toolbar order.
    pub const ALL: [MapMode; 3] = [MapMode::Wildlife, MapMode::Climate, MapMode::Underwater];

    /// Short identifier, also accepted by [`MapMode::parse`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Wildlife => "wildlife",
            Self::Climate => "climate",
            Self::Underwater => "underwater",
        }
    }

    /// Label of the toolbar button that selects this mode.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Wildlife => "🦌 Wildlife & Biomes",
            Self::Climate => "🌦️ Climate",
            Self::Underwater => "🐟 Underwater",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|m| m.key().eq_ignore_ascii_case(s))
    }

    /// Layer groups populated while this mode is active.
    pub fn groups(self) -> &'static [LayerGroup] {
        match self {
            Self::Wildlife => &[
                LayerGroup::AnimalMarkers,
                LayerGroup::BiomeMarkers,
                LayerGroup::BiomeOverlays,
                LayerGroup::WetlandOverlays,
            ],
            Self::Climate => &[LayerGroup::ClimateMarkers, LayerGroup::ClimateOverlays],
            Self::Underwater => &[LayerGroup::MarineMarkers, LayerGroup::MarineOverlays],
        }
    }
}

/// The mode currently displayed.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveMode(pub MapMode);

/// Mode applied once at startup.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StartMode(pub MapMode);

/// Request to switch the map to a mode.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetModeEvent(pub MapMode);

/// One toolbar button and whether it renders as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeButton {
    pub mode: MapMode,
    pub label: &'static str,
    pub active: bool,
}

/// The three mode buttons, exactly one of them active.
pub fn mode_buttons(active: MapMode) -> [ModeButton; 3] {
    MapMode::ALL.map(|mode| ModeButton {
        mode,
        label: mode.button_label(),
        active: mode == active,
    })
}

/// Startup system: queue the initial mode so it goes through the same
/// transition path as a button click.
pub fn request_start_mode(start: Res<StartMode>, mut requests: EventWriter<SetModeEvent>) {
    requests.send(SetModeEvent(start.0));
}

/// Applies every pending mode request in order.
pub fn apply_mode_requests(
    mut commands: Commands,
    mut requests: EventReader<SetModeEvent>,
    registry: Res<DatasetRegistry>,
    mut active: ResMut<ActiveMode>,
    mut layers: ResMut<LayerManager>,
    mut panels: ResMut<PanelContent>,
    mut selected: ResMut<SelectedPopup>,
) {
    for request in requests.read() {
        let mode = request.0;
        info!("Switching to {} mode", mode.key());

        active.0 = mode;
        layers.clear_all(&mut commands);
        selected.close_layer_popup();
        populate_mode(&mut commands, mode, &registry, &mut layers);
        *panels = PanelContent::for_mode(mode);

        debug!(
            "{} mode shows {} elements in {} groups",
            mode.key(),
            layers.total_elements(),
            layers.non_empty_groups().len()
        );
    }
}

/// Fills the layer groups belonging to `mode`.
pub fn populate_mode(
    commands: &mut Commands,
    mode: MapMode,
    registry: &DatasetRegistry,
    layers: &mut LayerManager,
) {
    match mode {
        MapMode::Wildlife => {
            let animals = layers.populate_group(
                commands,
                LayerGroup::AnimalMarkers,
                &registry.animals,
                features::animal_marker,
            );
            let biomes = layers.populate_group(
                commands,
                LayerGroup::BiomeMarkers,
                &registry.biomes,
                features::biome_marker,
            );
            layers.populate_group(
                commands,
                LayerGroup::BiomeOverlays,
                &registry.biomes,
                features::biome_overlay,
            );
            let wetlands = layers.populate_group(
                commands,
                LayerGroup::WetlandOverlays,
                &registry.wetland_biomes(),
                features::wetland_overlay,
            );
            info!("Added {animals} animal markers, {biomes} biome markers, {wetlands} wetland overlays");
        }
        MapMode::Climate => {
            let zones = layers.populate_group(
                commands,
                LayerGroup::ClimateMarkers,
                &registry.climate_zones,
                features::climate_marker,
            );
            layers.populate_group(
                commands,
                LayerGroup::ClimateOverlays,
                &registry.climate_zones,
                features::climate_overlay,
            );
            info!("Added {zones} climate zones");
        }
        MapMode::Underwater => {
            let zones = layers.populate_group(
                commands,
                LayerGroup::MarineMarkers,
                &registry.marine_zones,
                features::marine_marker,
            );
            layers.populate_group(
                commands,
                LayerGroup::MarineOverlays,
                &registry.marine_zones,
                features::marine_overlay,
            );
            info!("Added {zones} marine zones");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_button_is_active() {
        for mode in MapMode::ALL {
            let buttons = mode_buttons(mode);
            assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
            assert!(buttons.iter().any(|b| b.active && b.mode == mode));
        }
    }

    #[test]
    fn parse_accepts_keys_case_insensitively() {
        assert_eq!(MapMode::parse("climate"), Some(MapMode::Climate));
        assert_eq!(MapMode::parse(" Underwater "), Some(MapMode::Underwater));
        assert_eq!(MapMode::parse("WILDLIFE"), Some(MapMode::Wildlife));
        assert_eq!(MapMode::parse("satellite"), None);
    }

    #[test]
    fn default_mode_is_wildlife() {
        assert_eq!(ActiveMode::default().0, MapMode::Wildlife);
        assert_eq!(StartMode::default().0, MapMode::Wildlife);
    }

    #[test]
    fn mode_groups_do_not_overlap() {
        for a in MapMode::ALL {
            for b in MapMode::ALL {
                if a != b {
                    assert!(a.groups().iter().all(|g| !b.groups().contains(g)));
                }
            }
        }
    }
}
