use bevy::prelude::*;
use derivative::Derivative;
use enum_map::Enum;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::neighbors::Neighborhood;

/// The temperament of a bot. It decides how a bot reacts when another
/// bot gets close.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Enum, EnumIter, Display, Reflect)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Emotion {
    /// Runs away from chatty bots.
    #[default]
    Shy,
    /// Chases shy bots.
    Chatty,
}

/// What a bot does about a nearby bot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reaction {
    Flee,
    Chase,
}

impl Emotion {
    /// How a bot with this emotion reacts to a bot with the `other`
    /// emotion, if at all.
    pub fn reaction_to(self, other: Emotion) -> Option<Reaction> {
        match (self, other) {
            (Emotion::Shy, Emotion::Chatty) => Some(Reaction::Flee),
            (Emotion::Chatty, Emotion::Shy) => Some(Reaction::Chase),
            _ => None,
        }
    }
}

/// A bot living in the [Arena](crate::arena::Arena). Its position is the
/// x/y of its [Transform].
#[derive(Component, Clone, Debug, Reflect, Derivative)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
#[derivative(Default)]
#[require(
    Transform,
    Velocity,
    HeadingSteps,
    TeleportCooldown,
    InteractionStatus,
    Neighborhood
)]
#[reflect(Component)]
pub struct Bot {
    pub(crate) id: u32,
    pub(crate) emotion: Emotion,
}

impl Bot {
    pub fn new(id: u32, emotion: Emotion) -> Self {
        Self { id, emotion }
    }

    pub fn shy(id: u32) -> Self {
        Self::new(id, Emotion::Shy)
    }

    pub fn chatty(id: u32) -> Self {
        Self::new(id, Emotion::Chatty)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }
}

/// Distance a bot travels per tick.
#[derive(Component, Debug, Default, Copy, Clone, PartialEq, Reflect, Deref, DerefMut)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Ticks spent on the current heading.
#[derive(Component, Debug, Default, Copy, Clone, PartialEq, Eq, Reflect, Deref, DerefMut)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[reflect(Component)]
pub struct HeadingSteps(pub u32);

/// Seconds left before the bot may teleport out of a corner again.
#[derive(Component, Debug, Default, Copy, Clone, PartialEq, Reflect, Deref)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[reflect(Component)]
pub struct TeleportCooldown(pub(crate) f32);

impl TeleportCooldown {
    pub fn new(seconds: f32) -> Self {
        Self(seconds.max(0.0))
    }

    pub fn is_ready(&self) -> bool {
        self.0 <= 0.0
    }

    pub(crate) fn reset(&mut self, seconds: f32) {
        self.0 = seconds.max(0.0);
    }

    /// Count the cooldown down by one tick. Never drops below zero.
    pub(crate) fn decay(&mut self, tick: f32) {
        self.0 = (self.0 - tick).max(0.0);
    }
}

/// What the bot was doing the last time it reacted to another bot.
#[derive(Component, Debug, Default, Copy, Clone, PartialEq, Eq, Display, Reflect)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[reflect(Component)]
pub enum InteractionStatus {
    #[default]
    Idle,
    Fleeing,
    Chasing,
}

impl From<Reaction> for InteractionStatus {
    fn from(reaction: Reaction) -> Self {
        match reaction {
            Reaction::Flee => InteractionStatus::Fleeing,
            Reaction::Chase => InteractionStatus::Chasing,
        }
    }
}
