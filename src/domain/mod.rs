// Domain layer: the request model and the capability ports. No adapters here.

pub mod model;
pub mod ports;
