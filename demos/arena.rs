use bevy::prelude::*;
use bevy_bot_arena::prelude::*;

/// Fraction of the window height the arena should fill.
const ARENA_FILL: f32 = 0.8;

fn main() {
    let arena = Arena::default().with_population(2, 2);
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bot Interaction Simulation".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ArenaPlugin::new(arena))
        .add_plugins(ArenaRenderPlugin)
        .add_systems(Startup, setup_camera)
        .run();
}

/// Frames the whole arena, which lives in `[0, size]²` rather than
/// around the origin.
fn setup_camera(mut commands: Commands, arena: Res<Arena>, windows: Query<&Window>) {
    let height = windows
        .iter()
        .next()
        .map(|window| window.height())
        .unwrap_or(720.0);
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: arena.size() / (height * ARENA_FILL),
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(arena.center().extend(0.0)),
    ));
}
