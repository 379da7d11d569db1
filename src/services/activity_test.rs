use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_handler() -> (ActivityHandler, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    let handler: ActivityHandler = Arc::new(move |_signal| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (handler, count)
}

#[test]
fn subscriber_receives_emitted_signals() {
    let hub = ActivityHub::new();
    let (handler, count) = counting_handler();
    hub.subscribe(handler);

    hub.emit(ActivitySignal::PointerMove);
    hub.emit(ActivitySignal::KeyPress);
    hub.emit(ActivitySignal::Scroll);

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn unsubscribe_stops_delivery() {
    let hub = ActivityHub::new();
    let (handler, count) = counting_handler();
    let id = hub.subscribe(handler);

    hub.emit(ActivitySignal::Click);
    hub.unsubscribe(id);
    hub.emit(ActivitySignal::Click);

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn every_subscriber_sees_every_signal() {
    let hub = ActivityHub::new();
    let (first, first_count) = counting_handler();
    let (second, second_count) = counting_handler();
    hub.subscribe(first);
    hub.subscribe(second);

    hub.emit(ActivitySignal::Touch);

    assert_eq!(first_count.load(Ordering::SeqCst), 1);
    assert_eq!(second_count.load(Ordering::SeqCst), 1);
}

#[test]
fn handler_sees_the_signal_kind() {
    let hub = ActivityHub::new();
    let last = Arc::new(Mutex::new(None));
    let seen = last.clone();
    hub.subscribe(Arc::new(move |signal| {
        *seen.lock().unwrap() = Some(signal);
    }));

    hub.emit(ActivitySignal::Scroll);
    assert_eq!(*last.lock().unwrap(), Some(ActivitySignal::Scroll));
}

#[test]
fn subscriber_count_tracks_subscriptions() {
    let hub = ActivityHub::new();
    assert_eq!(hub.subscriber_count(), 0);

    let (handler, _count) = counting_handler();
    let id = hub.subscribe(handler);
    assert_eq!(hub.subscriber_count(), 1);

    hub.unsubscribe(id);
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn unsubscribing_twice_is_harmless() {
    let hub = ActivityHub::new();
    let (handler, _count) = counting_handler();
    let id = hub.subscribe(handler);
    hub.unsubscribe(id);
    hub.unsubscribe(id);
    assert_eq!(hub.subscriber_count(), 0);
}
