use crate::domain::model::{IndicatorStrip, TrackMetrics, TrackOffset};

/// Layout queries and visual mutations the carousel needs from its host page.
///
/// A browser binding maps these onto the slider root, its track, and the dot
/// container; [`crate::adapters::headless::HeadlessSurface`] keeps them in memory.
pub trait SliderSurface {
    /// Number of slides in the track, or `None` when the track is absent.
    fn slide_count(&self) -> Option<usize>;

    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Reads rendered slide width and inter-slide gap.
    fn measure_track(&self) -> TrackMetrics;

    fn set_track_offset(&mut self, offset: TrackOffset);

    /// Replaces the indicator controls. Hosts without a dot container ignore this.
    fn render_indicators(&mut self, strip: IndicatorStrip);

    fn mark_active_indicator(&mut self, index: usize);

    /// Notified when a resize event is observed. Hosts that read the width
    /// live need not do anything.
    fn viewport_resized(&mut self, _width: f64) {}
}
