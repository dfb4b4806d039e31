// Domain layer: date shapes, documents and the transport port.

pub mod date;
pub mod model;
pub mod ports;
