use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random source shared by every simulation system. Seed it through
/// [Arena::with_seed](crate::arena::Arena::with_seed) to replay a run.
#[derive(Resource, Deref, DerefMut)]
pub struct BotRng(StdRng);

impl BotRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_os_rng()),
        }
    }
}

/// A heading with each component drawn from `[-1, 1]`, scaled by `speed`.
pub(crate) fn random_heading(rng: &mut impl Rng, speed: f32) -> Vec2 {
    Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0)) * speed
}

/// A uniformly random point inside `[0, size]²`.
pub(crate) fn random_position(rng: &mut impl Rng, size: f32) -> Vec2 {
    Vec2::new(rng.random_range(0.0..=size), rng.random_range(0.0..=size))
}
