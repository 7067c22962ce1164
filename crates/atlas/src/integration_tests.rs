//! Integration tests for the atlas using the `TestAtlas` harness.
//!
//! Each test spins up a headless Bevy App with `AtlasPlugin` and drives it
//! through mode requests and form interactions frame by frame.

mod mode_tests;

use crate::layers::{LayerGroup, ALL_GROUPS};
use crate::mode::MapMode;
use crate::popup::SelectedPopup;
use crate::test_harness::TestAtlas;

// ===========================================================================
// Harness bootstrap
// ===========================================================================

#[test]
fn startup_applies_wildlife_mode() {
    let atlas = TestAtlas::new();
    assert_eq!(atlas.active_mode(), MapMode::Wildlife);
    assert_eq!(atlas.group_len(LayerGroup::AnimalMarkers), 12);
    assert_eq!(atlas.panels().info.title, "Wildlife & Biomes Mode");
}

#[test]
fn startup_opens_the_welcome_popup() {
    let atlas = TestAtlas::new();
    let selected = atlas.resource::<SelectedPopup>();
    let header = selected.popup.as_ref().map(|p| p.header.as_str());
    assert_eq!(header, Some("Welcome to EcoTracker Ireland! 🌿"));
    assert!(selected.source.is_none());
}

#[test]
fn start_mode_can_be_overridden() {
    let mut atlas = TestAtlas::starting_in(MapMode::Underwater);
    assert_eq!(atlas.active_mode(), MapMode::Underwater);
    assert_eq!(atlas.members_in(LayerGroup::MarineMarkers), 6);
    assert_eq!(atlas.members_in(LayerGroup::AnimalMarkers), 0);
}

#[test]
fn idle_frames_change_nothing() {
    let mut atlas = TestAtlas::new();
    let before: Vec<usize> = ALL_GROUPS.iter().map(|g| atlas.group_len(*g)).collect();
    atlas.tick(10);
    let after: Vec<usize> = ALL_GROUPS.iter().map(|g| atlas.group_len(*g)).collect();
    assert_eq!(before, after);
    assert_eq!(atlas.active_mode(), MapMode::Wildlife);
}
