use bevy::prelude::*;
use rand::{Rng, seq::IndexedRandom};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    agent::TeleportCooldown,
    arena::{Arena, BoundaryContact},
};

/// One of the four corners of the arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    /// The corner a clamped position is pinned in, if any.
    pub fn from_contact(contact: BoundaryContact) -> Option<Corner> {
        if !contact.is_corner() {
            return None;
        }
        let left = contact.contains(BoundaryContact::LEFT);
        let bottom = contact.contains(BoundaryContact::BOTTOM);
        Some(match (left, bottom) {
            (true, true) => Corner::BottomLeft,
            (false, true) => Corner::BottomRight,
            (true, false) => Corner::TopLeft,
            (false, false) => Corner::TopRight,
        })
    }

    pub fn position(self, size: f32) -> Vec2 {
        match self {
            Corner::BottomLeft => Vec2::new(0.0, 0.0),
            Corner::BottomRight => Vec2::new(size, 0.0),
            Corner::TopLeft => Vec2::new(0.0, size),
            Corner::TopRight => Vec2::new(size, size),
        }
    }

    /// Pick one of the three other corners uniformly.
    pub fn random_other(self, rng: &mut impl Rng) -> Corner {
        let others: Vec<Corner> = Corner::iter().filter(|corner| *corner != self).collect();
        // There are always three candidates.
        *others.choose(rng).unwrap_or(&self.opposite())
    }

    pub fn opposite(self) -> Corner {
        match self {
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
        }
    }
}

/// Count every bot's teleport cooldown down by one tick.
pub(crate) fn decay_cooldowns(arena: Res<Arena>, mut query: Query<&mut TeleportCooldown>) {
    for mut cooldown in query.iter_mut() {
        cooldown.decay(arena.tick_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_from_contact() {
        let test_cases = [
            (
                BoundaryContact::LEFT | BoundaryContact::BOTTOM,
                Some(Corner::BottomLeft),
            ),
            (
                BoundaryContact::RIGHT | BoundaryContact::BOTTOM,
                Some(Corner::BottomRight),
            ),
            (
                BoundaryContact::LEFT | BoundaryContact::TOP,
                Some(Corner::TopLeft),
            ),
            (
                BoundaryContact::RIGHT | BoundaryContact::TOP,
                Some(Corner::TopRight),
            ),
            (BoundaryContact::RIGHT, None),
            (BoundaryContact::empty(), None),
        ];
        for (input, expect) in test_cases {
            assert_eq!(Corner::from_contact(input), expect, "Failed for {:?}", input);
        }
    }

    #[test]
    fn test_corner_round_trips_through_clamp() {
        let arena = Arena::default();
        for corner in Corner::iter() {
            let (position, contact) = arena.clamp(corner.position(arena.size));
            assert_eq!(position, corner.position(arena.size));
            assert_eq!(Corner::from_contact(contact), Some(corner));
        }
    }

    #[test]
    fn test_random_other_never_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        for corner in Corner::iter() {
            for _ in 0..50 {
                assert_ne!(corner.random_other(&mut rng), corner);
            }
        }
    }

    #[test]
    fn test_decay_cooldowns() {
        let mut world = World::new();
        world.insert_resource(Arena::default().with_tick_interval(0.5));
        let slow = world.spawn(TeleportCooldown::new(1.2)).id();
        let done = world.spawn(TeleportCooldown::new(0.3)).id();

        let mut previous = 1.2;
        for _ in 0..4 {
            world
                .run_system_once(decay_cooldowns)
                .expect("Failed to run decay_cooldowns system");
            let current = **world.get::<TeleportCooldown>(slow).unwrap();
            assert!(current <= previous);
            assert!(current >= 0.0);
            previous = current;
        }

        assert_eq!(**world.get::<TeleportCooldown>(slow).unwrap(), 0.0);
        assert_eq!(**world.get::<TeleportCooldown>(done).unwrap(), 0.0);
    }
}
