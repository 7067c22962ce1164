use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use atlas::config::START_MODE_ENV;
use atlas::mode::{MapMode, StartMode};

/// Sea color behind the graticule.
const SEA_COLOR: Color = Color::srgb(0.667, 0.827, 0.875);

/// Mode named by `ECOTRACKER_START_MODE`, wildlife when unset or unknown.
fn start_mode_from_env() -> MapMode {
    let Ok(value) = std::env::var(START_MODE_ENV) else {
        return MapMode::default();
    };
    MapMode::parse(&value).unwrap_or_else(|| {
        warn!("{START_MODE_ENV}={value:?} is not a mode, starting in wildlife mode");
        MapMode::default()
    })
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "EcoTracker Ireland".to_string(),
            resolution: (1280.0, 800.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(SEA_COLOR))
    .insert_resource(StartMode(start_mode_from_env()))
    .add_plugins((atlas::AtlasPlugin, rendering::RenderingPlugin, ui::UiPlugin));

    app.run();
}
