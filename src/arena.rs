use bevy::prelude::*;
use bitflags::bitflags;
use derivative::Derivative;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Smallest side length an [Arena] accepts.
pub const MIN_ARENA_SIZE: f32 = 1.0;

/// The square arena bots live in, along with every tuning knob of the
/// simulation. Positions are kept inside `[0, size]` on both axes.
#[derive(Resource, Clone, Debug, Reflect, Derivative)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
#[derivative(Default)]
#[reflect(Resource)]
pub struct Arena {
    /// Side length of the arena.
    #[derivative(Default(value = "50.0"))]
    pub(crate) size: f32,
    /// Bots closer than this (inclusive) react to each other.
    #[derivative(Default(value = "10.0"))]
    pub(crate) interaction_radius: f32,
    /// Once the nearest provoking bot is at least this far away, a bot
    /// goes back to moving randomly.
    #[derivative(Default(value = "40.0"))]
    pub(crate) resume_distance: f32,
    /// Scale applied to every heading.
    #[derivative(Default(value = "1.0"))]
    pub(crate) speed: f32,
    /// Duration of one simulation tick, in seconds.
    #[derivative(Default(value = "0.1"))]
    pub(crate) tick_interval: f32,
    /// Seconds a bot must wait after a corner teleport before it can
    /// teleport again.
    #[derivative(Default(value = "2.0"))]
    pub(crate) teleport_cooldown: f32,
    /// Number of ticks a bot keeps the same heading before picking a
    /// new random one.
    #[derivative(Default(value = "10"))]
    pub(crate) heading_steps: u32,
    /// Shy bots spawned on startup.
    #[derivative(Default(value = "1"))]
    pub(crate) shy_bots: usize,
    /// Chatty bots spawned on startup.
    #[derivative(Default(value = "1"))]
    pub(crate) chatty_bots: usize,
    /// Seed for the simulation RNG. Uses OS entropy when unset.
    pub(crate) seed: Option<u64>,
}

impl Arena {
    /// Set the side length of the arena. Sizes below [MIN_ARENA_SIZE]
    /// are raised to it.
    pub fn with_size(self, size: f32) -> Self {
        Self {
            size: size.max(MIN_ARENA_SIZE),
            ..self
        }
    }

    pub fn with_interaction_radius(self, radius: f32) -> Self {
        Self {
            interaction_radius: radius,
            ..self
        }
    }

    /// Set the distance beyond which a bot stops reacting and resumes
    /// random movement.
    pub fn with_resume_distance(self, distance: f32) -> Self {
        Self {
            resume_distance: distance,
            ..self
        }
    }

    pub fn with_speed(self, speed: f32) -> Self {
        Self { speed, ..self }
    }

    /// Set the tick duration in seconds. The plugin drives the fixed
    /// timestep at this rate and cooldowns decay by this amount.
    pub fn with_tick_interval(self, seconds: f32) -> Self {
        Self {
            tick_interval: seconds,
            ..self
        }
    }

    pub fn with_teleport_cooldown(self, seconds: f32) -> Self {
        Self {
            teleport_cooldown: seconds,
            ..self
        }
    }

    pub fn with_heading_steps(self, steps: u32) -> Self {
        Self {
            heading_steps: steps,
            ..self
        }
    }

    /// Set how many bots of each kind are spawned on startup.
    pub fn with_population(self, shy_bots: usize, chatty_bots: usize) -> Self {
        Self {
            shy_bots,
            chatty_bots,
            ..self
        }
    }

    /// Seed the simulation RNG so runs are reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn interaction_radius(&self) -> f32 {
        self.interaction_radius
    }

    pub fn tick_interval(&self) -> f32 {
        self.tick_interval
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.size / 2.0)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..=self.size).contains(&position.x) && (0.0..=self.size).contains(&position.y)
    }

    /// Clamp a position into the arena and report which walls it is
    /// touching afterwards.
    pub(crate) fn clamp(&self, position: Vec2) -> (Vec2, BoundaryContact) {
        let clamped = position.clamp(Vec2::ZERO, Vec2::splat(self.size));
        let mut contact = BoundaryContact::empty();
        contact.set(BoundaryContact::LEFT, clamped.x == 0.0);
        contact.set(BoundaryContact::RIGHT, clamped.x == self.size);
        contact.set(BoundaryContact::BOTTOM, clamped.y == 0.0);
        contact.set(BoundaryContact::TOP, clamped.y == self.size);
        (clamped, contact)
    }
}

bitflags! {
    /// Walls of the arena a position is touching.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct BoundaryContact: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

impl BoundaryContact {
    const HORIZONTAL: Self = Self::LEFT.union(Self::RIGHT);
    const VERTICAL: Self = Self::BOTTOM.union(Self::TOP);

    /// A position is pinned in a corner when it touches a wall on
    /// each axis.
    pub fn is_corner(self) -> bool {
        self.intersects(Self::HORIZONTAL) && self.intersects(Self::VERTICAL)
    }
}
