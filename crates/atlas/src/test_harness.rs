//! # TestAtlas: headless harness for atlas integration tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`AtlasPlugin`] so mode
//! transitions, layer population and the sighting form can be driven frame by
//! frame without a window.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::info_panel::PanelContent;
use crate::layers::{LayerGroup, LayerManager, LayerMember};
use crate::mode::{ActiveMode, MapMode, SetModeEvent, StartMode};
use crate::sighting::SightingForm;
use crate::AtlasPlugin;

/// Real time per frame while the harness runs.
pub const FRAME: Duration = Duration::from_millis(100);

pub struct TestAtlas {
    app: App,
}

impl Default for TestAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAtlas {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Starts in the default mode and runs one frame so Startup systems and
    /// the initial mode request have been applied.
    pub fn new() -> Self {
        Self::starting_in(MapMode::default())
    }

    pub fn starting_in(mode: MapMode) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(StartMode(mode));
        app.add_plugins(AtlasPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Requests a mode switch and runs one frame to apply it.
    pub fn set_mode(&mut self, mode: MapMode) {
        self.app.world_mut().send_event(SetModeEvent(mode));
        self.app.update();
    }

    /// Runs `n` frames of [`FRAME`] each.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn active_mode(&self) -> MapMode {
        self.resource::<ActiveMode>().0
    }

    pub fn panels(&self) -> &PanelContent {
        self.resource::<PanelContent>()
    }

    /// Element count recorded by the layer manager.
    pub fn group_len(&self, group: LayerGroup) -> usize {
        self.resource::<LayerManager>().len(group)
    }

    /// Live entities tagged with `group`.
    pub fn members_in(&mut self, group: LayerGroup) -> usize {
        let world = self.app.world_mut();
        world
            .query::<&LayerMember>()
            .iter(world)
            .filter(|m| m.0 == group)
            .count()
    }

    /// Live entities tagged with any group.
    pub fn total_members(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&LayerMember>().iter(world).count()
    }

    pub fn form_mut(&mut self) -> Mut<'_, SightingForm> {
        self.app.world_mut().resource_mut::<SightingForm>()
    }
}
