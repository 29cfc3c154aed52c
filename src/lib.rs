mod agent;
mod arena;
mod behaviors;
mod movement;
mod neighbors;
mod plugin;
pub mod prelude;
mod render;
mod rng;
mod spawn;
mod status;
mod teleport;
