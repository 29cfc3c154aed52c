use bevy::prelude::*;

use crate::{
    agent::InteractionStatus,
    arena::Arena,
    behaviors::{ReactingBotQuery, provoker},
    rng::{BotRng, random_heading},
};

/// Bots with nobody to react to calm down. Once the nearest bot that could
/// provoke them is far enough away, they wander off on a random heading.
pub(crate) fn run(
    mut query: Query<ReactingBotQuery>,
    arena: Res<Arena>,
    mut rng: ResMut<BotRng>,
) {
    for mut item in query.iter_mut() {
        if provoker(item.bot, item.neighborhood, arena.interaction_radius).is_some() {
            continue;
        }

        if *item.status != InteractionStatus::Idle {
            debug!("Bot {} stops {}", item.bot.id, *item.status);
            *item.status = InteractionStatus::Idle;
        }

        let emotion = item.bot.emotion;
        let nearest = item
            .neighborhood
            .nearest(|neighbor| emotion.reaction_to(neighbor.emotion).is_some());
        let Some(nearest) = nearest else {
            continue;
        };
        if nearest.distance >= arena.resume_distance {
            item.velocity.0 = random_heading(&mut **rng, arena.speed);
        }
    }
}
