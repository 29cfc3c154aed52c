pub use crate::{
    agent::{Bot, Emotion, HeadingSteps, InteractionStatus, Reaction, TeleportCooldown, Velocity},
    arena::{Arena, BoundaryContact, MIN_ARENA_SIZE},
    plugin::{
        ArenaPlugin, ArenaRenderPlugin, ArenaRenderSystemSet, ArenaSystemSet, BehaviorSystemSet,
    },
    render::{BotPalette, StatusText},
    rng::BotRng,
    status::ArenaStatus,
    teleport::Corner,
};
