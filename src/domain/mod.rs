// Domain layer: records shared by every stage and the ports the stages plug into.

pub mod model;
pub mod ports;
