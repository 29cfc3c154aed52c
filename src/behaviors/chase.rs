use bevy::prelude::*;

use crate::{
    agent::{InteractionStatus, Reaction},
    arena::Arena,
    behaviors::{ReactingBotQuery, provoker},
};

/// Heading straight at `target` at `speed`. None when the chaser is
/// already on top of its target.
pub(crate) fn chase_heading(position: Vec2, target: Vec2, speed: f32) -> Option<Vec2> {
    (target - position).try_normalize().map(|toward| toward * speed)
}

/// Bots that chase their nearest provoker head directly for it.
pub(crate) fn run(mut query: Query<ReactingBotQuery>, arena: Res<Arena>) {
    for mut item in query.iter_mut() {
        let Some((target, Reaction::Chase)) =
            provoker(item.bot, item.neighborhood, arena.interaction_radius)
        else {
            continue;
        };
        let position = item.transform.translation.truncate();
        let Some(heading) = chase_heading(position, target.position, arena.speed) else {
            continue;
        };
        item.velocity.0 = heading;

        if *item.status != InteractionStatus::Chasing {
            info!("Bot {} starts chasing Bot {}", item.bot.id, target.id);
            *item.status = InteractionStatus::Chasing;
        }
    }
}
