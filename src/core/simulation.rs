use crate::adapters::headless::HeadlessSurface;
use crate::core::carousel::CarouselController;
use crate::domain::model::{
    CarouselEvent, CarouselSettings, CarouselState, IndicatorStrip, TimerKind, ViewportBand,
};
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEvent {
    pub at: Duration,
    pub event: CarouselEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cause {
    Mounted,
    Event { event: CarouselEvent },
    Timer { timer: TimerKind },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub at_ms: u64,
    pub cause: Cause,
    pub index: usize,
    pub autoplay_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub slides: usize,
    pub band: ViewportBand,
    pub max_index: usize,
    pub final_state: CarouselState,
    pub transform: String,
    pub indicators: IndicatorStrip,
    pub timeline: Vec<TimelineEntry>,
}

/// Replays a scripted interaction against a headless carousel on a virtual
/// clock, so a minute of autoplay costs no wall time.
pub struct Simulation {
    controller: CarouselController<HeadlessSurface>,
    origin: Instant,
    timeline: Vec<TimelineEntry>,
}

impl Simulation {
    pub fn mount(surface: HeadlessSurface, settings: CarouselSettings) -> Option<Self> {
        let origin = Instant::now();
        let controller = CarouselController::mount(surface, settings, origin)?;
        let mut simulation = Self {
            controller,
            origin,
            timeline: Vec::new(),
        };
        simulation.record(Duration::ZERO, Cause::Mounted);
        Some(simulation)
    }

    pub fn controller(&self) -> &CarouselController<HeadlessSurface> {
        &self.controller
    }

    /// Applies `events` in time order, firing every timer that comes due in
    /// between, then keeps the clock running until `until`.
    pub fn run(mut self, events: &[ScheduledEvent], until: Duration) -> SimulationReport {
        let mut ordered = events.to_vec();
        ordered.sort_by_key(|e| e.at);

        for scheduled in &ordered {
            self.fire_timers_until(scheduled.at);
            self.controller.handle(scheduled.event, self.origin + scheduled.at);
            self.record(scheduled.at, Cause::Event { event: scheduled.event });
        }
        let end = ordered.last().map_or(until, |last| last.at.max(until));
        self.fire_timers_until(end);

        tracing::info!(
            entries = self.timeline.len(),
            final_index = self.controller.current_index(),
            "Simulation finished"
        );
        self.into_report()
    }

    fn fire_timers_until(&mut self, limit: Duration) {
        let limit = self.origin + limit;
        while let Some(deadline) = self.controller.next_deadline() {
            if deadline > limit {
                break;
            }
            match self.controller.fire_next_due(deadline) {
                Some(timer) => self.record(deadline - self.origin, Cause::Timer { timer }),
                None => break,
            }
        }
    }

    fn record(&mut self, at: Duration, cause: Cause) {
        let state = self.controller.state();
        self.timeline.push(TimelineEntry {
            at_ms: at.as_millis() as u64,
            cause,
            index: state.current_index,
            autoplay_active: state.autoplay_active,
        });
    }

    fn into_report(self) -> SimulationReport {
        let surface = self.controller.surface();
        SimulationReport {
            slides: self.controller.slide_count(),
            band: self.controller.band(),
            max_index: self.controller.max_index(),
            final_state: self.controller.state(),
            transform: surface.transform_css(),
            indicators: surface.indicators().clone(),
            timeline: self.timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64, event: CarouselEvent) -> ScheduledEvent {
        ScheduledEvent {
            at: Duration::from_millis(ms),
            event,
        }
    }

    #[test]
    fn test_autoplay_ticks_on_virtual_clock() {
        let surface = HeadlessSurface::new(3, 500.0, 300.0, Some(20.0));
        let sim = Simulation::mount(surface, CarouselSettings::default()).unwrap();
        let report = sim.run(&[], Duration::from_millis(15_000));

        let ticks: Vec<u64> = report
            .timeline
            .iter()
            .filter(|e| matches!(e.cause, Cause::Timer { timer: TimerKind::AutoplayTick }))
            .map(|e| e.at_ms)
            .collect();
        assert_eq!(ticks, vec![5000, 10_000, 15_000]);
        // 0 -> 1 -> 2 -> wrap to 0
        assert_eq!(report.final_state.current_index, 0);
    }

    #[test]
    fn test_hover_blocks_ticks() {
        let surface = HeadlessSurface::new(3, 500.0, 300.0, Some(20.0));
        let sim = Simulation::mount(surface, CarouselSettings::default()).unwrap();
        let report = sim.run(
            &[
                at(4000, CarouselEvent::PointerEnter),
                at(12_000, CarouselEvent::PointerLeave),
            ],
            Duration::from_millis(16_000),
        );
        // Paused from 4s to 12s; next tick only at 17s.
        assert_eq!(report.final_state.current_index, 0);
        assert!(report.final_state.autoplay_active);
    }

    #[test]
    fn test_events_are_applied_in_time_order() {
        let surface = HeadlessSurface::new(6, 800.0, 300.0, Some(24.0));
        let sim = Simulation::mount(surface, CarouselSettings::default()).unwrap();
        let report = sim.run(
            &[
                at(200, CarouselEvent::IndicatorActivated { index: 1 }),
                at(100, CarouselEvent::IndicatorActivated { index: 3 }),
            ],
            Duration::from_millis(300),
        );
        assert_eq!(report.final_state.current_index, 1);
        assert_eq!(report.transform, "translateX(-324px)");
    }

    #[test]
    fn test_mount_records_initial_state() {
        let surface = HeadlessSurface::new(5, 800.0, 300.0, Some(24.0));
        let sim = Simulation::mount(surface, CarouselSettings::default()).unwrap();
        assert_eq!(sim.controller().current_index(), 0);
        assert_eq!(sim.controller().max_index(), 3);

        let report = sim.run(&[], Duration::ZERO);
        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.timeline[0].cause, Cause::Mounted);
        assert!(report.timeline[0].autoplay_active);
    }
}
