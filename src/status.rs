use std::fmt;

use bevy::prelude::*;
use itertools::Itertools;

use crate::agent::Bot;

/// Summary of the arena after the latest tick, shown as the status line.
#[derive(Resource, Debug, Default, Copy, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct ArenaStatus {
    /// Mean distance between every pair of distinct bots. None with
    /// fewer than two bots.
    pub average_distance: Option<f32>,
}

impl fmt::Display for ArenaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average_distance {
            Some(distance) => write!(f, "Average Distance: {:.2}", distance),
            None => write!(f, "Average Distance: n/a"),
        }
    }
}

/// Mean pairwise distance between `positions`. Every unordered pair is
/// visited once, which gives the same mean as visiting ordered pairs.
pub(crate) fn average_distance(positions: &[Vec2]) -> Option<f32> {
    let (total, pairs) = positions
        .iter()
        .tuple_combinations()
        .fold((0.0, 0usize), |(total, pairs), (a, b)| {
            (total + a.distance(*b), pairs + 1)
        });
    (pairs > 0).then(|| total / pairs as f32)
}

pub(crate) fn update_status(
    query: Query<&Transform, With<Bot>>,
    mut status: ResMut<ArenaStatus>,
) {
    let positions: Vec<Vec2> = query
        .iter()
        .map(|transform| transform.translation.truncate())
        .collect();
    status.set_if_neq(ArenaStatus {
        average_distance: average_distance(&positions),
    });
}
