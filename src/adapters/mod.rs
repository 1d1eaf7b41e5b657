// Adapters layer: concrete implementations against external systems
// (HTTP service, local filesystem, terminal).

pub mod console;
pub mod http;
pub mod storage;
