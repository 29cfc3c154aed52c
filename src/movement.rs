use bevy::{ecs::query::QueryData, prelude::*};
use rand::Rng;

use crate::{
    agent::{Bot, HeadingSteps, TeleportCooldown, Velocity},
    arena::Arena,
    rng::{BotRng, random_heading},
    teleport::Corner,
};

/// Mutable movement state of a single bot for one tick.
pub(crate) struct Motion<'a> {
    pub(crate) position: Vec2,
    pub(crate) velocity: &'a mut Vec2,
    pub(crate) steps: &'a mut u32,
    pub(crate) cooldown: &'a mut TeleportCooldown,
}

impl Motion<'_> {
    fn new_heading(&mut self, rng: &mut impl Rng, speed: f32) {
        *self.velocity = random_heading(rng, speed);
        *self.steps = 0;
    }

    /// Advance one tick: move, clamp into the arena, and bounce or teleport
    /// off the walls. Returns the corner the bot teleported to, if any.
    pub(crate) fn step(&mut self, arena: &Arena, rng: &mut impl Rng) -> Option<Corner> {
        let (position, contact) = arena.clamp(self.position + *self.velocity);
        self.position = position;
        *self.steps += 1;

        let mut teleported = None;
        if !contact.is_empty() {
            match Corner::from_contact(contact) {
                Some(corner) if self.cooldown.is_ready() => {
                    let destination = corner.random_other(rng);
                    self.position = destination.position(arena.size);
                    // The heading changes but the step count carries on.
                    *self.velocity = random_heading(rng, arena.speed);
                    self.cooldown.reset(arena.teleport_cooldown);
                    teleported = Some(destination);
                }
                _ => self.new_heading(rng, arena.speed),
            }
        }

        if *self.steps >= arena.heading_steps {
            self.new_heading(rng, arena.speed);
        }
        teleported
    }
}

#[derive(QueryData)]
#[query_data(mutable)]
pub(crate) struct MoveBotSystemQuery {
    bot: &'static Bot,
    transform: &'static mut Transform,
    velocity: &'static mut Velocity,
    steps: &'static mut HeadingSteps,
    cooldown: &'static mut TeleportCooldown,
}

pub(crate) fn move_bots(
    mut query: Query<MoveBotSystemQuery>,
    arena: Res<Arena>,
    mut rng: ResMut<BotRng>,
) {
    for mut item in query.iter_mut() {
        let mut motion = Motion {
            position: item.transform.translation.truncate(),
            velocity: &mut item.velocity.0,
            steps: &mut item.steps.0,
            cooldown: &mut *item.cooldown,
        };
        let teleported = motion.step(&arena, &mut **rng);
        let position = motion.position;
        item.transform.translation.x = position.x;
        item.transform.translation.y = position.y;

        if let Some(corner) = teleported {
            info!("Bot {} teleported to {} {}", item.bot.id, corner, position);
        }
    }
}
