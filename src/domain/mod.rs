// Domain layer: note models and the transport port. No HTTP or config types here.

pub mod model;
pub mod ports;
