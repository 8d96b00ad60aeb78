use bevy::app::AppExit;
use bevy::prelude::*;
use tablet_core::VisibilityController;

use crate::app::resources::{Overlay, Prefs, Shell};
use crate::util::config::TabletConfig;

pub mod resources;

pub struct TabletPlugin {
    pub cfg: TabletConfig,
}

impl Plugin for TabletPlugin {
    fn build(&self, app: &mut App) {
        let cfg = self.cfg.clone();
        let controller = VisibilityController::with_config(cfg.game_state, cfg.controller_config());
        tracing::info!(
            toggle_key = %cfg.toggle_key,
            cooldown_ms = cfg.cooldown_ms,
            "tablet overlay ready"
        );

        app.insert_resource(Overlay(controller))
            .insert_resource(Shell::default())
            .insert_resource(Prefs { cfg })
            .add_systems(Startup, crate::render::setup_scene)
            .add_systems(
                Update,
                (
                    crate::ui::apply_visuals,
                    crate::ui::handle_shortcuts,
                    crate::ui::hud_overlay,
                    crate::ui::tablet_shell,
                )
                    .chain()
                    .run_if(resource_exists::<Overlay>),
            )
            .add_systems(Last, dispose_on_exit);
    }
}

fn dispose_on_exit(world: &mut World) {
    let exiting = world
        .get_resource::<Events<AppExit>>()
        .is_some_and(|events| !events.is_empty());
    if !exiting {
        return;
    }
    if let Some(Overlay(controller)) = world.remove_resource::<Overlay>() {
        let state = controller.dispose();
        tracing::info!(was_open = state.is_open(), "tablet overlay disposed");
    }
}
