use crate::core::carousel::CarouselController;
use crate::domain::model::{CarouselEvent, CarouselSettings};
use crate::domain::ports::SliderSurface;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Event loop for one carousel: dispatches incoming events and fires the
/// autoplay and resize timers, one callback at a time.
pub struct CarouselRuntime<S: SliderSurface> {
    controller: CarouselController<S>,
    events: mpsc::Receiver<CarouselEvent>,
}

impl<S: SliderSurface> CarouselRuntime<S> {
    pub fn new(controller: CarouselController<S>, events: mpsc::Receiver<CarouselEvent>) -> Self {
        Self { controller, events }
    }

    /// Mounts on `surface` and returns the runtime with the sender hosts use
    /// to feed it events. `None` when the surface has nothing to show.
    pub fn mount(
        surface: S,
        settings: CarouselSettings,
        capacity: usize,
    ) -> Option<(Self, mpsc::Sender<CarouselEvent>)> {
        let controller = CarouselController::mount(surface, settings, Instant::now())?;
        let (tx, rx) = mpsc::channel(capacity);
        Some((Self::new(controller, rx), tx))
    }

    pub fn controller(&self) -> &CarouselController<S> {
        &self.controller
    }

    /// Runs until every sender is dropped and hands the controller back.
    pub async fn run(mut self) -> CarouselController<S> {
        loop {
            let deadline = self.controller.next_deadline();
            tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => {
                        tracing::trace!(?event, "Dispatching carousel event");
                        self.controller.handle(event, Instant::now());
                    }
                    None => break,
                },
                _ = sleep_until_deadline(deadline) => {
                    let now = Instant::now();
                    while let Some(kind) = self.controller.fire_next_due(now) {
                        tracing::trace!(
                            ?kind,
                            index = self.controller.current_index(),
                            "Timer fired"
                        );
                    }
                }
            }
        }
        tracing::debug!("Carousel event stream closed");
        self.controller
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
