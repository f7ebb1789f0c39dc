use slider_chrome::{CarouselEvent, CarouselRuntime, CarouselSettings, HeadlessSurface};
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::time::sleep;

fn mount(
    slides: usize,
    width: f64,
    capacity: usize,
) -> (CarouselRuntime<HeadlessSurface>, Sender<CarouselEvent>) {
    let surface = HeadlessSurface::new(slides, width, 300.0, Some(24.0));
    CarouselRuntime::mount(surface, CarouselSettings::default(), capacity).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_double_start_keeps_single_timer() {
    let (runtime, tx) = mount(6, 500.0, 8);
    let handle = tokio::spawn(runtime.run());

    // Each pointer leave restarts autoplay.
    tx.send(CarouselEvent::PointerLeave).await.unwrap();
    tx.send(CarouselEvent::PointerLeave).await.unwrap();

    sleep(Duration::from_millis(5_100)).await;
    drop(tx);

    let controller = handle.await.unwrap();
    assert_eq!(controller.current_index(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_hover_suspends_autoplay() {
    let (runtime, tx) = mount(6, 500.0, 8);
    let handle = tokio::spawn(runtime.run());

    sleep(Duration::from_millis(1_000)).await;
    tx.send(CarouselEvent::PointerEnter).await.unwrap();
    sleep(Duration::from_millis(20_000)).await;
    drop(tx);

    let controller = handle.await.unwrap();
    assert_eq!(controller.current_index(), 0);
    assert!(!controller.autoplay_active());
}

#[tokio::test(start_paused = true)]
async fn test_gesture_restarts_autoplay_period() {
    let (runtime, tx) = mount(6, 500.0, 8);
    let handle = tokio::spawn(runtime.run());

    // Gesture spans the point where the first tick would have fired.
    sleep(Duration::from_millis(4_000)).await;
    tx.send(CarouselEvent::TouchStart { x: 400.0 }).await.unwrap();
    sleep(Duration::from_millis(2_000)).await;
    tx.send(CarouselEvent::TouchEnd { x: 300.0 }).await.unwrap();

    // Swipe moved to 1; the next tick is due 5s after touch end (t = 11s).
    sleep(Duration::from_millis(4_900)).await;
    drop(tx);

    let controller = handle.await.unwrap();
    assert_eq!(controller.current_index(), 1);
    assert!(controller.autoplay_active());
}

#[tokio::test(start_paused = true)]
async fn test_resize_burst_settles_once() {
    let (runtime, tx) = mount(6, 500.0, 16);
    let handle = tokio::spawn(runtime.run());

    tx.send(CarouselEvent::PointerEnter).await.unwrap();
    tx.send(CarouselEvent::IndicatorActivated { index: 5 }).await.unwrap();
    for width in [600.0, 700.0, 800.0, 900.0] {
        tx.send(CarouselEvent::Resize { width }).await.unwrap();
        sleep(Duration::from_millis(100)).await;
    }
    sleep(Duration::from_millis(100)).await;
    drop(tx);

    let controller = handle.await.unwrap();
    assert_eq!(controller.max_index(), 4);
    assert_eq!(controller.current_index(), 4);
    assert!(!controller.resize_pending());
    assert_eq!(controller.surface().indicators().len(), 5);
}
