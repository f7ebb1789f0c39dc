use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(5000);
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Viewport classification deciding how many slides are shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportBand {
    Wide,
    Medium,
    Narrow,
}

/// Width thresholds and per-band visible counts. `Wide` always shows every slide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandLayout {
    pub wide_min_px: f64,
    pub medium_min_px: f64,
    pub medium_visible: usize,
    pub narrow_visible: usize,
}

impl Default for BandLayout {
    fn default() -> Self {
        Self {
            wide_min_px: 1024.0,
            medium_min_px: 768.0,
            medium_visible: 2,
            narrow_visible: 1,
        }
    }
}

impl BandLayout {
    pub fn classify(&self, viewport_width: f64) -> ViewportBand {
        if viewport_width >= self.wide_min_px {
            ViewportBand::Wide
        } else if viewport_width >= self.medium_min_px {
            ViewportBand::Medium
        } else {
            ViewportBand::Narrow
        }
    }

    /// Nominal visible count for a band. Not capped against `slide_count`;
    /// capping happens when the maximum index is derived.
    pub fn visible_count(&self, band: ViewportBand, slide_count: usize) -> usize {
        match band {
            ViewportBand::Wide => slide_count,
            ViewportBand::Medium => self.medium_visible,
            ViewportBand::Narrow => self.narrow_visible,
        }
    }
}

/// Tuning knobs for a mounted carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub bands: BandLayout,
    pub autoplay_delay: Duration,
    pub resize_debounce: Duration,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            bands: BandLayout::default(),
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub current_index: usize,
    pub autoplay_active: bool,
}

/// Live layout measurement of the slide track.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackMetrics {
    pub slide_width: f64,
    pub gap: f64,
}

impl TrackMetrics {
    pub fn stride(&self) -> f64 {
        self.slide_width + self.gap
    }
}

/// Leftward translation of the track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackOffset(pub f64);

impl TrackOffset {
    pub const ZERO: TrackOffset = TrackOffset(0.0);

    pub fn to_css(&self) -> String {
        if self.0 == 0.0 {
            "translateX(0)".to_string()
        } else {
            format!("translateX(-{}px)", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

impl Indicator {
    pub fn new(index: usize, active: bool) -> Self {
        Self {
            index,
            active,
            label: format!("Go to slide {}", index + 1),
        }
    }
}

/// The generated dot controls. A single-position carousel shows none.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "dots", rename_all = "snake_case")]
pub enum IndicatorStrip {
    #[default]
    Hidden,
    Visible(Vec<Indicator>),
}

impl IndicatorStrip {
    pub fn build(positions: usize, active: usize) -> Self {
        if positions <= 1 {
            return IndicatorStrip::Hidden;
        }
        IndicatorStrip::Visible(
            (0..positions)
                .map(|i| Indicator::new(i, i == active))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            IndicatorStrip::Hidden => 0,
            IndicatorStrip::Visible(dots) => dots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, IndicatorStrip::Hidden)
    }

    pub fn active_index(&self) -> Option<usize> {
        match self {
            IndicatorStrip::Hidden => None,
            IndicatorStrip::Visible(dots) => dots.iter().find(|d| d.active).map(|d| d.index),
        }
    }

    pub fn mark_active(&mut self, index: usize) {
        if let IndicatorStrip::Visible(dots) = self {
            for dot in dots.iter_mut() {
                dot.active = dot.index == index;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Forward,
    /// Finger moved right: show the previous slide.
    Backward,
}

impl SwipeDirection {
    /// `delta` is start minus end on the x axis. Movements within the
    /// threshold are taps, not swipes.
    pub fn from_delta(delta: f64, threshold_px: f64) -> Option<Self> {
        if delta.abs() <= threshold_px {
            None
        } else if delta > 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    }
}

/// Input the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CarouselEvent {
    PointerEnter,
    PointerLeave,
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    Resize { width: f64 },
    IndicatorActivated { index: usize },
}

/// Which deferred action a timer deadline stood for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    AutoplayTick,
    ResizeSettled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        let bands = BandLayout::default();
        assert_eq!(bands.classify(1200.0), ViewportBand::Wide);
        assert_eq!(bands.classify(1024.0), ViewportBand::Wide);
        assert_eq!(bands.classify(1023.9), ViewportBand::Medium);
        assert_eq!(bands.classify(768.0), ViewportBand::Medium);
        assert_eq!(bands.classify(767.0), ViewportBand::Narrow);
        assert_eq!(bands.classify(0.0), ViewportBand::Narrow);
    }

    #[test]
    fn test_visible_count_is_not_capped() {
        let bands = BandLayout::default();
        assert_eq!(bands.visible_count(ViewportBand::Wide, 6), 6);
        assert_eq!(bands.visible_count(ViewportBand::Medium, 1), 2);
        assert_eq!(bands.visible_count(ViewportBand::Narrow, 6), 1);
    }

    #[test]
    fn test_indicator_strip_build() {
        assert!(IndicatorStrip::build(0, 0).is_hidden());
        assert!(IndicatorStrip::build(1, 0).is_hidden());

        let strip = IndicatorStrip::build(3, 1);
        assert_eq!(strip.len(), 3);
        assert_eq!(strip.active_index(), Some(1));
        if let IndicatorStrip::Visible(dots) = &strip {
            assert_eq!(dots[0].label, "Go to slide 1");
            assert_eq!(dots[2].label, "Go to slide 3");
        }
    }

    #[test]
    fn test_indicator_mark_active() {
        let mut strip = IndicatorStrip::build(4, 0);
        strip.mark_active(3);
        assert_eq!(strip.active_index(), Some(3));

        let mut hidden = IndicatorStrip::Hidden;
        hidden.mark_active(2);
        assert_eq!(hidden.active_index(), None);
    }

    #[test]
    fn test_swipe_direction() {
        assert_eq!(SwipeDirection::from_delta(50.0, 50.0), None);
        assert_eq!(SwipeDirection::from_delta(-50.0, 50.0), None);
        assert_eq!(SwipeDirection::from_delta(80.0, 50.0), Some(SwipeDirection::Forward));
        assert_eq!(SwipeDirection::from_delta(-51.0, 50.0), Some(SwipeDirection::Backward));
    }

    #[test]
    fn test_track_offset_css() {
        assert_eq!(TrackOffset::ZERO.to_css(), "translateX(0)");
        assert_eq!(TrackOffset(324.0).to_css(), "translateX(-324px)");
        assert_eq!(TrackOffset(160.5).to_css(), "translateX(-160.5px)");
    }

    #[test]
    fn test_event_deserializes_from_tagged_json() {
        let event: CarouselEvent =
            serde_json::from_str(r#"{"kind":"touch_end","x":120.0}"#).unwrap();
        assert_eq!(event, CarouselEvent::TouchEnd { x: 120.0 });

        let event: CarouselEvent = serde_json::from_str(r#"{"kind":"pointer_enter"}"#).unwrap();
        assert_eq!(event, CarouselEvent::PointerEnter);
    }
}
