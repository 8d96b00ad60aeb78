use bevy::prelude::*;

/// Backdrop colour standing in for the game world behind the HUD.
const WORLD_BACKDROP: Color = Color::srgb(0.07, 0.08, 0.10);

pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(ClearColor(WORLD_BACKDROP));
    commands.spawn(Camera2dBundle::default());
}
