// Domain layer: the earthquake record and the ports the pipeline is driven through.

pub mod model;
pub mod ports;
