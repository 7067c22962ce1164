//! Headless core of the EcoTracker Ireland map: reference datasets, layer
//! groups, the mode controller, popup content and the sighting form.
//!
//! Nothing in this crate draws. The `rendering` and `ui` crates read the
//! resources and components defined here.

use bevy::prelude::*;

pub mod config;
pub mod datasets;
pub mod features;
pub mod geo;
pub mod info_panel;
pub mod layers;
pub mod legend;
pub mod mode;
pub mod overlay;
pub mod popup;
pub mod records;
pub mod sighting;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use datasets::DatasetRegistry;
use info_panel::PanelContent;
use layers::LayerManager;
use legend::LegendVisibility;
use mode::{ActiveMode, SetModeEvent, StartMode};
use popup::SelectedPopup;
use sighting::{SightingForm, SightingLog};

/// Systems that mutate atlas state each frame. Drawing systems run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtlasUpdateSet;

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct AtlasPlugin;

impl Plugin for AtlasPlugin {
    fn build(&self, app: &mut App) {
        let registry = DatasetRegistry::reference();
        info!("Loaded reference datasets: {}", registry.summary());

        app.insert_resource(registry)
            .init_resource::<StartMode>()
            .init_resource::<ActiveMode>()
            .init_resource::<LayerManager>()
            .init_resource::<PanelContent>()
            .init_resource::<LegendVisibility>()
            .init_resource::<SelectedPopup>()
            .init_resource::<SightingForm>()
            .init_resource::<SightingLog>()
            .add_event::<SetModeEvent>()
            .add_systems(Startup, (open_welcome_popup, mode::request_start_mode))
            .add_systems(
                Update,
                (mode::apply_mode_requests, sighting::tick_sighting_form).in_set(AtlasUpdateSet),
            );
    }
}

fn open_welcome_popup(mut selected: ResMut<SelectedPopup>) {
    selected.open_on_map(popup::welcome_popup());
}
