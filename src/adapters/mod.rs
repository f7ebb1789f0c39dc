// Adapters layer: concrete hosts for the carousel surface port.

pub mod headless;
