//! Mode transitions: group isolation, panel content and popup handling.

use crate::features::{MapMarker, OverlayShape};
use crate::layers::{LayerGroup, ALL_GROUPS};
use crate::legend::Swatch;
use crate::mode::MapMode;
use crate::popup::{self, SelectedPopup};
use crate::test_harness::TestAtlas;

/// Only the active mode's groups hold elements, and they are attached.
fn assert_isolated(atlas: &mut TestAtlas, mode: MapMode) {
    for group in ALL_GROUPS {
        let live = atlas.members_in(group);
        if mode.groups().contains(&group) {
            assert!(live > 0, "{group:?} should be populated in {mode:?}");
            assert_eq!(live, atlas.group_len(group));
            assert!(atlas
                .resource::<crate::layers::LayerManager>()
                .is_attached(group));
        } else {
            assert_eq!(live, 0, "{group:?} should be empty in {mode:?}");
            assert_eq!(atlas.group_len(group), 0);
        }
    }
}

#[test]
fn every_transition_leaves_only_the_target_groups() {
    for from in MapMode::ALL {
        for to in MapMode::ALL {
            let mut atlas = TestAtlas::starting_in(from);
            assert_isolated(&mut atlas, from);
            atlas.set_mode(to);
            assert_eq!(atlas.active_mode(), to);
            assert_isolated(&mut atlas, to);
        }
    }
}

#[test]
fn wildlife_mode_counts() {
    let mut atlas = TestAtlas::new();
    assert_eq!(atlas.members_in(LayerGroup::AnimalMarkers), 12);
    assert_eq!(atlas.members_in(LayerGroup::BiomeMarkers), 6);
    assert_eq!(atlas.members_in(LayerGroup::BiomeOverlays), 6);
    assert_eq!(atlas.members_in(LayerGroup::WetlandOverlays), 1);
    assert_eq!(atlas.total_members(), 25);
}

#[test]
fn climate_mode_end_to_end() {
    let mut atlas = TestAtlas::new();
    atlas.set_mode(MapMode::Climate);

    let panels = atlas.panels();
    assert_eq!(panels.info.title, "Climate Mode");
    let items: Vec<_> = panels.legend.iter().flat_map(|s| s.items.iter()).collect();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|i| matches!(i.swatch, Swatch::Color { .. })));

    assert_eq!(atlas.members_in(LayerGroup::ClimateMarkers), 5);
    assert_eq!(atlas.members_in(LayerGroup::ClimateOverlays), 5);
    assert_eq!(atlas.members_in(LayerGroup::AnimalMarkers), 0);
    assert_eq!(atlas.members_in(LayerGroup::MarineOverlays), 0);
}

#[test]
fn climate_markers_carry_halos_and_overlays_use_half_degree_offset() {
    let mut atlas = TestAtlas::starting_in(MapMode::Climate);
    let world = atlas.world_mut();

    let markers: Vec<MapMarker> = world.query::<&MapMarker>().iter(world).cloned().collect();
    assert_eq!(markers.len(), 5);
    assert!(markers
        .iter()
        .all(|m| m.halo.is_some_and(|h| h.radius_m == 40_000.0)));

    let both = world
        .query::<(&MapMarker, &OverlayShape)>()
        .iter(world)
        .count();
    assert_eq!(both, 0, "markers and overlays are separate entities");

    let shapes: Vec<OverlayShape> = world.query::<&OverlayShape>().iter(world).cloned().collect();
    for shape in &shapes {
        let center = shape.rect.center();
        assert!((shape.rect.north() - center.lat - 0.5).abs() < 1e-9);
        assert!((center.lon - shape.rect.west() - 0.5).abs() < 1e-9);
    }
}

#[test]
fn reselecting_the_active_mode_repopulates_without_duplicates() {
    let mut atlas = TestAtlas::new();
    for _ in 0..3 {
        atlas.set_mode(MapMode::Wildlife);
    }
    assert_eq!(atlas.members_in(LayerGroup::AnimalMarkers), 12);
    assert_eq!(atlas.total_members(), 25);
}

#[test]
fn several_requests_in_one_frame_settle_on_the_last() {
    let mut atlas = TestAtlas::new();
    atlas
        .world_mut()
        .send_event(crate::mode::SetModeEvent(MapMode::Climate));
    atlas.set_mode(MapMode::Underwater);

    assert_eq!(atlas.active_mode(), MapMode::Underwater);
    assert_eq!(atlas.members_in(LayerGroup::ClimateMarkers), 0);
    assert_eq!(atlas.members_in(LayerGroup::MarineMarkers), 6);
    assert_eq!(atlas.panels().info.title, "Underwater Mode");
}

#[test]
fn switching_mode_closes_layer_popups_only() {
    let mut atlas = TestAtlas::new();
    atlas
        .world_mut()
        .resource_mut::<SelectedPopup>()
        .open_for(LayerGroup::AnimalMarkers, popup::welcome_popup());
    atlas.set_mode(MapMode::Climate);
    assert!(!atlas.resource::<SelectedPopup>().is_open());

    atlas
        .world_mut()
        .resource_mut::<SelectedPopup>()
        .open_on_map(popup::welcome_popup());
    atlas.set_mode(MapMode::Underwater);
    assert!(atlas.resource::<SelectedPopup>().is_open());
}
