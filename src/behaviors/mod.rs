use bevy::{ecs::query::QueryData, prelude::*};

use crate::{
    agent::{Bot, InteractionStatus, Reaction, Velocity},
    neighbors::{ComputedNeighbor, Neighborhood},
};

pub(crate) mod chase;
pub(crate) mod flee;
pub(crate) mod wander;

#[derive(QueryData)]
#[query_data(mutable)]
pub(crate) struct ReactingBotQuery {
    bot: &'static Bot,
    transform: &'static Transform,
    neighborhood: &'static Neighborhood,
    velocity: &'static mut Velocity,
    status: &'static mut InteractionStatus,
}

/// The neighbor a bot reacts to this tick: the nearest bot within `radius`
/// that provokes any reaction at all.
pub(crate) fn provoker<'a>(
    bot: &Bot,
    neighborhood: &'a Neighborhood,
    radius: f32,
) -> Option<(&'a ComputedNeighbor, Reaction)> {
    let neighbor = neighborhood.nearest_within(radius, |neighbor| {
        bot.emotion.reaction_to(neighbor.emotion).is_some()
    })?;
    let reaction = bot.emotion.reaction_to(neighbor.emotion)?;
    Some((neighbor, reaction))
}
