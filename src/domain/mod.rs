// Domain layer: response records and the ports the client is built around.

pub mod model;
pub mod ports;
