mod app;
mod render;
mod ui;
mod util;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

fn main() {
    let _ = tracing_subscriber::fmt::try_init();

    let cfg = util::config::load_or_default();
    let title = cfg.window_title.clone();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(app::TabletPlugin { cfg })
        .run();
}
