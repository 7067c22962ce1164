//! Named layer groups of map elements.
//!
//! Each element is an ECS entity tagged with [`LayerMember`]. The
//! [`LayerManager`] resource remembers which entities belong to which group so
//! a group can be cleared in one call and its size is known before the spawn
//! commands are flushed.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::mode::MapMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerGroup {
    AnimalMarkers,
    BiomeMarkers,
    BiomeOverlays,
    WetlandOverlays,
    ClimateMarkers,
    ClimateOverlays,
    MarineMarkers,
    MarineOverlays,
}

pub const ALL_GROUPS: [LayerGroup; 8] = [
    LayerGroup::AnimalMarkers,
    LayerGroup::BiomeMarkers,
    LayerGroup::BiomeOverlays,
    LayerGroup::WetlandOverlays,
    LayerGroup::ClimateMarkers,
    LayerGroup::ClimateOverlays,
    LayerGroup::MarineMarkers,
    LayerGroup::MarineOverlays,
];

impl LayerGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::AnimalMarkers => "Animal markers",
            Self::BiomeMarkers => "Biome markers",
            Self::BiomeOverlays => "Biome overlays",
            Self::WetlandOverlays => "Wetland overlays",
            Self::ClimateMarkers => "Climate markers",
            Self::ClimateOverlays => "Climate overlays",
            Self::MarineMarkers => "Marine markers",
            Self::MarineOverlays => "Marine overlays",
        }
    }

    /// The mode whose display includes this group.
    pub fn mode(self) -> MapMode {
        match self {
            Self::AnimalMarkers
            | Self::BiomeMarkers
            | Self::BiomeOverlays
            | Self::WetlandOverlays => MapMode::Wildlife,
            Self::ClimateMarkers | Self::ClimateOverlays => MapMode::Climate,
            Self::MarineMarkers | Self::MarineOverlays => MapMode::Underwater,
        }
    }
}

/// Tags an entity as an element of a layer group.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMember(pub LayerGroup);

#[derive(Debug, Default)]
struct GroupState {
    elements: Vec<Entity>,
    /// Whether the group is currently shown on the viewport.
    attached: bool,
}

#[derive(Resource, Debug, Default)]
pub struct LayerManager {
    groups: BTreeMap<LayerGroup, GroupState>,
}

impl LayerManager {
    /// Despawns every element of `group` and detaches it from the viewport.
    pub fn clear_group(&mut self, commands: &mut Commands, group: LayerGroup) {
        let Some(state) = self.groups.get_mut(&group) else {
            return;
        };
        for entity in state.elements.drain(..) {
            if let Some(mut entity_commands) = commands.get_entity(entity) {
                entity_commands.despawn();
            }
        }
        state.attached = false;
    }

    pub fn clear_all(&mut self, commands: &mut Commands) {
        for group in ALL_GROUPS {
            self.clear_group(commands, group);
        }
    }

    /// Spawns one element per record using `builder` and attaches the group.
    ///
    /// Any previous elements of the group are cleared first, so the group
    /// always ends up with exactly `records.len()` elements. Returns that
    /// count.
    pub fn populate_group<R, B, F>(
        &mut self,
        commands: &mut Commands,
        group: LayerGroup,
        records: &[R],
        builder: F,
    ) -> usize
    where
        B: Bundle,
        F: Fn(&R) -> B,
    {
        self.clear_group(commands, group);
        let state = self.groups.entry(group).or_default();
        state.elements.extend(
            records
                .iter()
                .map(|record| commands.spawn((builder(record), LayerMember(group))).id()),
        );
        state.attached = true;
        state.elements.len()
    }

    pub fn len(&self, group: LayerGroup) -> usize {
        self.groups.get(&group).map_or(0, |s| s.elements.len())
    }

    pub fn is_empty(&self, group: LayerGroup) -> bool {
        self.len(group) == 0
    }

    pub fn is_attached(&self, group: LayerGroup) -> bool {
        self.groups.get(&group).is_some_and(|s| s.attached)
    }

    pub fn elements(&self, group: LayerGroup) -> &[Entity] {
        self.groups
            .get(&group)
            .map(|s| s.elements.as_slice())
            .unwrap_or_default()
    }

    /// Groups that currently hold at least one element, in declaration order.
    pub fn non_empty_groups(&self) -> Vec<LayerGroup> {
        ALL_GROUPS
            .into_iter()
            .filter(|g| !self.is_empty(*g))
            .collect()
    }

    pub fn total_elements(&self) -> usize {
        self.groups.values().map(|s| s.elements.len()).sum()
    }
}
