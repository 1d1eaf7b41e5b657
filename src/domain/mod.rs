// Domain layer: wire models, display models, the court directory and
// the ports the adapters implement.

pub mod directory;
pub mod display;
pub mod model;
pub mod ports;
