// Domain layer: carousel models and the surface port. No dependency on tokio or the CLI.

pub mod model;
pub mod ports;
