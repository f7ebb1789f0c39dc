pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::headless::HeadlessSurface;
pub use config::{scenario::Scenario, toml_config::SliderConfig};
pub use crate::core::{
    carousel::CarouselController, runtime::CarouselRuntime, simulation::Simulation,
};
pub use domain::model::{CarouselEvent, CarouselSettings, CarouselState};
pub use domain::ports::SliderSurface;
pub use utils::error::{Result, SliderError};
