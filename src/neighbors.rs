use bevy::{ecs::query::QueryData, prelude::*};

use crate::agent::{Bot, Emotion};

/// A snapshot of another bot, taken once per tick after movement. This
/// makes it easier to get common properties for neighbors without
/// performing extra queries.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub(crate) struct ComputedNeighbor {
    pub(crate) entity: Entity,
    pub(crate) id: u32,
    pub(crate) emotion: Emotion,
    pub(crate) position: Vec2,
    pub(crate) distance: f32,
}

/// Every other bot in the arena, with its distance from this one.
#[derive(Component, Debug, Default, Clone, Reflect)]
#[reflect(Component)]
pub(crate) struct Neighborhood {
    pub(crate) neighbors: Vec<ComputedNeighbor>,
}

impl Neighborhood {
    /// The closest neighbor accepted by `filter`. Ties go to the lowest id.
    pub(crate) fn nearest(
        &self,
        filter: impl Fn(&ComputedNeighbor) -> bool,
    ) -> Option<&ComputedNeighbor> {
        self.neighbors
            .iter()
            .filter(|neighbor| filter(neighbor))
            .min_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)))
    }

    /// The closest neighbor accepted by `filter` that is at most `radius` away.
    pub(crate) fn nearest_within(
        &self,
        radius: f32,
        filter: impl Fn(&ComputedNeighbor) -> bool,
    ) -> Option<&ComputedNeighbor> {
        self.nearest(filter)
            .filter(|neighbor| neighbor.distance <= radius)
    }
}

#[derive(QueryData)]
#[query_data(mutable)]
pub(crate) struct UpdateNeighborhoodQuery {
    entity: Entity,
    transform: &'static Transform,
    neighborhood: &'static mut Neighborhood,
}

pub(crate) fn update_neighborhoods(
    mut agent_query: Query<UpdateNeighborhoodQuery>,
    bot_query: Query<(Entity, &Bot, &Transform)>,
) {
    let bots: Vec<_> = bot_query
        .iter()
        .map(|(entity, bot, transform)| {
            (entity, bot.id, bot.emotion, transform.translation.truncate())
        })
        .collect();

    for mut item in agent_query.iter_mut() {
        let origin = item.transform.translation.truncate();
        let neighbors = bots
            .iter()
            .filter(|(entity, ..)| *entity != item.entity)
            .map(|&(entity, id, emotion, position)| ComputedNeighbor {
                entity,
                id,
                emotion,
                position,
                distance: origin.distance(position),
            });
        item.neighborhood.neighbors.clear();
        item.neighborhood.neighbors.extend(neighbors);
    }
}
