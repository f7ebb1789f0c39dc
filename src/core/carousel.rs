use crate::domain::model::{
    CarouselEvent, CarouselSettings, CarouselState, IndicatorStrip, SwipeDirection, TimerKind,
    TrackOffset, ViewportBand,
};
use crate::domain::ports::SliderSurface;
use tokio::time::Instant;

/// Owns the slide position and the two deferred actions (autoplay tick and
/// resize settle) of one mounted carousel.
///
/// Every method is synchronous and takes the current instant where timing
/// matters, so the same controller can be driven by a tokio loop or by a
/// virtual clock.
#[derive(Debug)]
pub struct CarouselController<S: SliderSurface> {
    surface: S,
    settings: CarouselSettings,
    slide_count: usize,
    current_index: usize,
    autoplay_deadline: Option<Instant>,
    resize_deadline: Option<Instant>,
    touch_start_x: f64,
}

impl<S: SliderSurface> CarouselController<S> {
    /// Mounts a carousel on `surface`: builds indicators, shows the first
    /// slide, and starts autoplay. Returns `None` when there is no track or
    /// it holds no slides.
    pub fn mount(surface: S, settings: CarouselSettings, now: Instant) -> Option<Self> {
        let slide_count = match surface.slide_count() {
            Some(count) if count > 0 => count,
            Some(_) => {
                tracing::debug!("Slider track is empty, carousel not mounted");
                return None;
            }
            None => {
                tracing::debug!("Slider track not found, carousel not mounted");
                return None;
            }
        };

        let mut controller = Self {
            surface,
            settings,
            slide_count,
            current_index: 0,
            autoplay_deadline: None,
            resize_deadline: None,
            touch_start_x: 0.0,
        };

        controller.build_indicators();
        controller.go_to(0);
        controller.start_autoplay(now);

        tracing::info!(
            slides = slide_count,
            band = ?controller.band(),
            max_index = controller.max_index(),
            "Carousel mounted"
        );
        Some(controller)
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            autoplay_active: self.autoplay_active(),
        }
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn band(&self) -> ViewportBand {
        self.settings.bands.classify(self.surface.viewport_width())
    }

    pub fn visible_count(&self, viewport_width: f64) -> usize {
        let band = self.settings.bands.classify(viewport_width);
        self.settings.bands.visible_count(band, self.slide_count)
    }

    /// Highest reachable index for the live viewport width.
    pub fn max_index(&self) -> usize {
        self.slide_count
            .saturating_sub(self.visible_count(self.surface.viewport_width()))
    }

    pub fn build_indicators(&mut self) {
        let strip = IndicatorStrip::build(self.max_index() + 1, self.current_index);
        tracing::debug!(dots = strip.len(), "Rebuilding indicators");
        self.surface.render_indicators(strip);
    }

    /// Moves to `index`, clamped into `[0, max_index]`.
    pub fn go_to(&mut self, index: isize) {
        let max = self.max_index();
        let clamped = index.clamp(0, max as isize) as usize;
        if clamped != self.current_index {
            tracing::debug!(from = self.current_index, to = clamped, "Slide index changed");
        }
        self.current_index = clamped;

        let visible = self.visible_count(self.surface.viewport_width());
        let offset = if visible >= self.slide_count {
            TrackOffset::ZERO
        } else {
            let metrics = self.surface.measure_track();
            TrackOffset(self.current_index as f64 * metrics.stride())
        };
        self.surface.set_track_offset(offset);
        self.surface.mark_active_indicator(self.current_index);
    }

    /// Moves one position forward, wrapping to the start after the last one.
    pub fn advance(&mut self) {
        let max = self.max_index();
        if max == 0 {
            return;
        }
        let next = if self.current_index >= max {
            0
        } else {
            self.current_index + 1
        };
        self.go_to(next as isize);
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_deadline.is_some()
    }

    pub fn start_autoplay(&mut self, now: Instant) {
        self.stop_autoplay();
        self.autoplay_deadline = Some(now + self.settings.autoplay_delay);
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay_deadline.take().is_some() {
            tracing::trace!("Autoplay stopped");
        }
    }

    pub fn pointer_enter(&mut self) {
        self.stop_autoplay();
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.start_autoplay(now);
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = x;
        self.stop_autoplay();
    }

    /// Finishes a gesture: navigates if it travelled past the swipe
    /// threshold, then resumes autoplay either way.
    pub fn touch_end(&mut self, x: f64, now: Instant) -> Option<SwipeDirection> {
        let delta = self.touch_start_x - x;
        let direction = SwipeDirection::from_delta(delta, self.settings.swipe_threshold_px);
        match direction {
            Some(SwipeDirection::Forward) => self.go_to(self.current_index as isize + 1),
            Some(SwipeDirection::Backward) => self.go_to(self.current_index as isize - 1),
            None => {}
        }
        self.start_autoplay(now);
        direction
    }

    /// Restarts the resize quiet period.
    pub fn schedule_resize(&mut self, now: Instant) {
        self.resize_deadline = Some(now + self.settings.resize_debounce);
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_deadline.is_some()
    }

    /// Rebuilds indicators and pulls the index back inside the new range.
    pub fn settle_resize(&mut self) {
        self.resize_deadline = None;
        self.build_indicators();
        let max = self.max_index();
        self.go_to(self.current_index.min(max) as isize);
        tracing::debug!(band = ?self.band(), max_index = max, "Resize settled");
    }

    pub fn handle(&mut self, event: CarouselEvent, now: Instant) {
        match event {
            CarouselEvent::PointerEnter => self.pointer_enter(),
            CarouselEvent::PointerLeave => self.pointer_leave(now),
            CarouselEvent::TouchStart { x } => self.touch_start(x),
            CarouselEvent::TouchEnd { x } => {
                self.touch_end(x, now);
            }
            CarouselEvent::Resize { width } => {
                self.surface.viewport_resized(width);
                self.schedule_resize(now);
            }
            CarouselEvent::IndicatorActivated { index } => {
                self.go_to(index.min(isize::MAX as usize) as isize)
            }
        }
    }

    /// Earliest pending deadline, if any timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.autoplay_deadline, self.resize_deadline) {
            (Some(a), Some(r)) => Some(a.min(r)),
            (a, r) => a.or(r),
        }
    }

    /// Fires the earliest timer whose deadline is at or before `now`.
    /// Call repeatedly until it returns `None` to drain every due timer.
    pub fn fire_next_due(&mut self, now: Instant) -> Option<TimerKind> {
        let resize_due = self.resize_deadline.filter(|d| *d <= now);
        let autoplay_due = self.autoplay_deadline.filter(|d| *d <= now);

        match (resize_due, autoplay_due) {
            (Some(r), Some(a)) if a < r => Some(self.fire_autoplay(a, now)),
            (Some(_), _) => {
                self.settle_resize();
                Some(TimerKind::ResizeSettled)
            }
            (None, Some(a)) => Some(self.fire_autoplay(a, now)),
            (None, None) => None,
        }
    }

    fn fire_autoplay(&mut self, deadline: Instant, now: Instant) -> TimerKind {
        let delay = self.settings.autoplay_delay;
        let mut next = deadline + delay;
        // Ticks missed while the loop was stalled are dropped, not replayed.
        if next <= now {
            next = now + delay;
        }
        self.autoplay_deadline = Some(next);
        self.advance();
        TimerKind::AutoplayTick
    }
}
