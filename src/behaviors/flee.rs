use bevy::prelude::*;

use crate::{
    agent::{InteractionStatus, Reaction},
    arena::Arena,
    behaviors::{ReactingBotQuery, provoker},
};

/// Heading straight away from `threat` at `speed`. None when the two
/// positions coincide and there is no direction to run in.
pub(crate) fn flee_heading(position: Vec2, threat: Vec2, speed: f32) -> Option<Vec2> {
    (position - threat).try_normalize().map(|away| away * speed)
}

/// Bots that flee their nearest provoker run directly away from it.
pub(crate) fn run(mut query: Query<ReactingBotQuery>, arena: Res<Arena>) {
    for mut item in query.iter_mut() {
        let Some((threat, Reaction::Flee)) =
            provoker(item.bot, item.neighborhood, arena.interaction_radius)
        else {
            continue;
        };
        let position = item.transform.translation.truncate();
        let Some(heading) = flee_heading(position, threat.position, arena.speed) else {
            continue;
        };
        item.velocity.0 = heading;

        if *item.status != InteractionStatus::Fleeing {
            info!("Bot {} starts running away from Bot {}", item.bot.id, threat.id);
            *item.status = InteractionStatus::Fleeing;
        }
    }
}
