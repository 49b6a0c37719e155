// Domain layer: payload models and the two ports the engine drives.

pub mod model;
pub mod ports;
