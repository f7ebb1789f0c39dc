pub mod carousel;
pub mod runtime;
pub mod simulation;

pub use crate::domain::model::{CarouselEvent, CarouselSettings, CarouselState, TimerKind};
pub use crate::domain::ports::SliderSurface;
