// Domain layer: wire models, scenario planning and the transport port.

pub mod model;
pub mod ports;
pub mod scenario;
