use crate::domain::model::{IndicatorStrip, TrackMetrics, TrackOffset};
use crate::domain::ports::SliderSurface;
use serde::Serialize;

/// In-memory stand-in for a rendered slider.
///
/// Layout values are plain fields that tests and the simulator can change
/// between events; everything the controller writes is recorded.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessSurface {
    slides: Option<usize>,
    viewport_width: f64,
    slide_width: f64,
    gap: Option<f64>,
    has_indicator_container: bool,
    offset: TrackOffset,
    indicators: IndicatorStrip,
    transform_writes: usize,
}

impl HeadlessSurface {
    /// `gap` of `None` models a computed gap that does not parse as a length.
    pub fn new(slides: usize, viewport_width: f64, slide_width: f64, gap: Option<f64>) -> Self {
        Self {
            slides: Some(slides),
            viewport_width,
            slide_width,
            gap,
            has_indicator_container: true,
            offset: TrackOffset::ZERO,
            indicators: IndicatorStrip::Hidden,
            transform_writes: 0,
        }
    }

    pub fn without_track(viewport_width: f64) -> Self {
        Self {
            slides: None,
            ..Self::new(0, viewport_width, 0.0, None)
        }
    }

    pub fn without_indicator_container(mut self) -> Self {
        self.has_indicator_container = false;
        self
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn set_slide_width(&mut self, width: f64) {
        self.slide_width = width;
    }

    pub fn offset(&self) -> TrackOffset {
        self.offset
    }

    pub fn transform_css(&self) -> String {
        self.offset.to_css()
    }

    pub fn transform_writes(&self) -> usize {
        self.transform_writes
    }

    pub fn indicators(&self) -> &IndicatorStrip {
        &self.indicators
    }
}

impl SliderSurface for HeadlessSurface {
    fn slide_count(&self) -> Option<usize> {
        self.slides
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn measure_track(&self) -> TrackMetrics {
        TrackMetrics {
            slide_width: self.slide_width,
            gap: self.gap.unwrap_or(0.0),
        }
    }

    fn set_track_offset(&mut self, offset: TrackOffset) {
        self.offset = offset;
        self.transform_writes += 1;
    }

    fn render_indicators(&mut self, strip: IndicatorStrip) {
        if self.has_indicator_container {
            self.indicators = strip;
        }
    }

    fn mark_active_indicator(&mut self, index: usize) {
        self.indicators.mark_active(index);
    }

    fn viewport_resized(&mut self, width: f64) {
        self.viewport_width = width;
    }
}
