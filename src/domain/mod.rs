// Domain layer: records, their backend mapping, and the ports handlers and stores plug into.

pub mod entity;
pub mod model;
pub mod ports;
