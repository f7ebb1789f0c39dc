use crate::adapters::headless::HeadlessSurface;
use crate::config::parse_toml;
use crate::core::simulation::ScheduledEvent;
use crate::domain::model::CarouselEvent;
use crate::utils::error::{Result, SliderError};
use crate::utils::validation::{validate_finite_non_negative, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// A scripted interaction: the page layout plus a list of timed events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub surface: SurfaceConfig,
    /// Keep the clock running at least this long after mount.
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub events: Vec<ScenarioStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Omit to model a page without a slider track.
    pub slides: Option<usize>,
    pub viewport_width: Option<f64>,
    #[serde(default = "default_slide_width")]
    pub slide_width: f64,
    pub gap: Option<f64>,
    #[serde(default = "default_true")]
    pub indicators: bool,
}

fn default_slide_width() -> f64 {
    320.0
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioStep {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: CarouselEvent,
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SliderError::IoError)?;
        parse_toml(&content, &path.as_ref().display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_toml(content, "scenario")
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.unwrap_or(0))
    }

    pub fn surface(&self) -> Result<HeadlessSurface> {
        let viewport_width =
            *validate_required_field("surface.viewport_width", &self.surface.viewport_width)?;
        let surface = match self.surface.slides {
            Some(slides) => HeadlessSurface::new(
                slides,
                viewport_width,
                self.surface.slide_width,
                self.surface.gap,
            ),
            None => HeadlessSurface::without_track(viewport_width),
        };
        Ok(if self.surface.indicators {
            surface
        } else {
            surface.without_indicator_container()
        })
    }

    pub fn scheduled_events(&self) -> Vec<ScheduledEvent> {
        self.events
            .iter()
            .map(|step| ScheduledEvent {
                at: Duration::from_millis(step.at_ms),
                event: step.event,
            })
            .collect()
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        let width =
            *validate_required_field("surface.viewport_width", &self.surface.viewport_width)?;
        validate_finite_non_negative("surface.viewport_width", width)?;
        validate_finite_non_negative("surface.slide_width", self.surface.slide_width)?;
        if let Some(gap) = self.surface.gap {
            validate_finite_non_negative("surface.gap", gap)?;
        }

        for (i, step) in self.events.iter().enumerate() {
            match step.event {
                CarouselEvent::Resize { width } => {
                    validate_finite_non_negative(&format!("events[{}].width", i), width)?
                }
                CarouselEvent::TouchStart { x } | CarouselEvent::TouchEnd { x }
                    if !x.is_finite() =>
                {
                    return Err(SliderError::InvalidConfigValueError {
                        field: format!("events[{}].x", i),
                        value: x.to_string(),
                        reason: "Touch coordinate must be finite".to_string(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
