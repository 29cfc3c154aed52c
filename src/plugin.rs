use bevy::prelude::*;

use crate::{
    agent::{Bot, HeadingSteps, InteractionStatus, TeleportCooldown, Velocity},
    arena::Arena,
    behaviors::{chase, flee, wander},
    movement::move_bots,
    neighbors::{Neighborhood, update_neighborhoods},
    render::{
        BotPalette, draw_arena, draw_bots, spawn_legend, spawn_status_text, update_status_text,
    },
    rng::BotRng,
    spawn::spawn_bots,
    status::{ArenaStatus, update_status},
    teleport::decay_cooldowns,
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BehaviorSystemSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ArenaSystemSet;

/// Runs the simulation. One tick of the fixed timestep moves every bot,
/// lets them react to each other, refreshes [ArenaStatus] and counts
/// teleport cooldowns down.
#[derive(Default)]
pub struct ArenaPlugin {
    arena: Arena,
}

impl ArenaPlugin {
    pub fn new(arena: Arena) -> Self {
        Self { arena }
    }
}

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Arena>()
            .register_type::<ArenaStatus>()
            .register_type::<Bot>()
            .register_type::<Velocity>()
            .register_type::<HeadingSteps>()
            .register_type::<TeleportCooldown>()
            .register_type::<InteractionStatus>()
            .register_type::<Neighborhood>();

        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(
            self.arena.tick_interval,
        )))
        .insert_resource(BotRng::new(self.arena.seed))
        .insert_resource(self.arena.clone())
        .init_resource::<ArenaStatus>();

        let behavior_systems = (flee::run, chase::run, wander::run)
            .chain()
            .in_set(BehaviorSystemSet);
        let update_systems = (
            move_bots,
            update_neighborhoods,
            behavior_systems,
            update_status,
            decay_cooldowns,
        )
            .chain()
            .in_set(ArenaSystemSet);
        app.add_systems(Startup, spawn_bots)
            .add_systems(FixedUpdate, update_systems);
    }
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ArenaRenderSystemSet;

/// Draws the arena and its bots with gizmos, and shows the status line
/// and a legend. The application is responsible for the camera.
pub struct ArenaRenderPlugin;

impl Plugin for ArenaRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BotPalette>()
            .add_systems(Startup, (spawn_status_text, spawn_legend))
            .add_systems(
                Update,
                (draw_arena, draw_bots, update_status_text).in_set(ArenaRenderSystemSet),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teleport::Corner;

    fn run_app_test<T>(arena: Arena, setup: impl FnOnce(&mut World) -> T) -> (App, T) {
        let mut app = App::new();
        app.add_plugins(ArenaPlugin::new(arena.with_population(0, 0).with_seed(17)));
        let result = setup(app.world_mut());
        (app, result)
    }

    fn tick(app: &mut App) {
        app.world_mut().run_schedule(FixedUpdate);
    }

    fn position(app: &App, entity: Entity) -> Vec2 {
        app.world()
            .get::<Transform>(entity)
            .unwrap()
            .translation
            .truncate()
    }

    #[test]
    fn test_startup_spawns_population() {
        let mut app = App::new();
        app.add_plugins(ArenaPlugin::new(
            Arena::default().with_population(3, 2).with_seed(1),
        ));
        app.world_mut().run_schedule(Startup);

        let mut query = app.world_mut().query::<&Bot>();
        assert_eq!(query.iter(app.world()).count(), 5);
    }

    #[test]
    fn test_bots_stay_in_arena() {
        let arena = Arena::default();
        let (mut app, bots) = run_app_test(arena.clone(), |world| {
            let mut bots = Vec::new();
            for i in 0..6 {
                let bot = if i % 2 == 0 {
                    Bot::shy(i)
                } else {
                    Bot::chatty(i)
                };
                let x = 5.0 + i as f32 * 8.0;
                bots.push(
                    world
                        .spawn((bot, Transform::from_xyz(x, 50.0 - x, 0.0)))
                        .id(),
                );
            }
            bots
        });

        for _ in 0..1000 {
            tick(&mut app);
            for bot in &bots {
                let position = position(&app, *bot);
                assert!(arena.contains(position), "Bot left the arena: {}", position);
            }
        }
    }

    #[test]
    fn test_shy_and_chatty_react_after_tick() {
        let (mut app, (shy, chatty)) = run_app_test(Arena::default(), |world| {
            let shy = world
                .spawn((
                    Bot::shy(0),
                    Transform::from_xyz(20.0, 25.0, 0.0),
                    Velocity::new(0.0, 0.0),
                ))
                .id();
            let chatty = world
                .spawn((
                    Bot::chatty(1),
                    Transform::from_xyz(27.0, 25.0, 0.0),
                    Velocity::new(0.0, 0.0),
                ))
                .id();
            (shy, chatty)
        });

        tick(&mut app);

        let shy_position = position(&app, shy);
        let chatty_position = position(&app, chatty);
        let world = app.world();
        let shy_velocity = **world.get::<Velocity>(shy).unwrap();
        let chatty_velocity = **world.get::<Velocity>(chatty).unwrap();
        assert!(shy_velocity.dot(chatty_position - shy_position) < 0.0);
        assert!(chatty_velocity.dot(shy_position - chatty_position) > 0.0);
        assert_eq!(
            world.get::<InteractionStatus>(shy),
            Some(&InteractionStatus::Fleeing)
        );
        assert_eq!(
            world.get::<InteractionStatus>(chatty),
            Some(&InteractionStatus::Chasing)
        );

        let status = world.resource::<ArenaStatus>();
        let expected = shy_position.distance(chatty_position);
        assert!((status.average_distance.unwrap() - expected).abs() < 0.0001);
    }

    #[test]
    fn test_cornered_bot_teleports_once_cooldown_expires() {
        let arena = Arena::default();
        let (mut app, bot) = run_app_test(arena.clone(), |world| {
            world
                .spawn((
                    Bot::shy(0),
                    Transform::from_xyz(0.0, 0.0, 0.0),
                    Velocity::new(-1.0, -1.0),
                    TeleportCooldown::new(0.1),
                ))
                .id()
        });

        // First tick: still cooling down, the bot stays put and the
        // cooldown reaches zero.
        tick(&mut app);
        assert_eq!(position(&app, bot), Vec2::ZERO);
        assert!(app.world().get::<TeleportCooldown>(bot).unwrap().is_ready());

        // Pin it in the corner again and let it teleport.
        app.world_mut().get_mut::<Velocity>(bot).unwrap().0 = Vec2::new(-1.0, -1.0);
        tick(&mut app);

        let landed = position(&app, bot);
        let corner = [Corner::BottomRight, Corner::TopLeft, Corner::TopRight]
            .into_iter()
            .find(|corner| corner.position(arena.size) == landed);
        assert!(corner.is_some(), "Bot did not land in another corner: {}", landed);

        let cooldown = **app.world().get::<TeleportCooldown>(bot).unwrap();
        let expected = arena.teleport_cooldown - arena.tick_interval;
        assert!((cooldown - expected).abs() < 0.0001);
    }
}
