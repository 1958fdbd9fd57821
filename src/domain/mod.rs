// Domain layer: record model and ports (interfaces). No HTTP or CLI
// concerns here.

pub mod model;
pub mod ports;
