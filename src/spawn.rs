use bevy::prelude::*;

use crate::{
    agent::{Bot, Emotion, Velocity},
    arena::Arena,
    rng::{BotRng, random_heading, random_position},
};

/// Populate the arena. Shy bots take the first ids, chatty bots the rest.
pub(crate) fn spawn_bots(mut commands: Commands, arena: Res<Arena>, mut rng: ResMut<BotRng>) {
    let emotions = std::iter::repeat_n(Emotion::Shy, arena.shy_bots)
        .chain(std::iter::repeat_n(Emotion::Chatty, arena.chatty_bots));
    for (id, emotion) in (0u32..).zip(emotions) {
        let position = random_position(&mut **rng, arena.size);
        let velocity = random_heading(&mut **rng, arena.speed);
        commands.spawn((
            Name::new(format!("{} bot {}", emotion, id)),
            Bot::new(id, emotion),
            Transform::from_translation(position.extend(0.0)),
            Velocity(velocity),
        ));
    }
    debug!(
        "Spawned {} shy and {} chatty bots",
        arena.shy_bots, arena.chatty_bots
    );
}
