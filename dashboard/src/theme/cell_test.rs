use std::sync::Mutex;

use super::*;

fn recorder() -> (Arc<Mutex<Vec<Theme>>>, impl Fn(Theme) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |theme| sink.lock().expect("lock").push(theme))
}

#[test]
fn new_cell_holds_initial_value() {
    assert_eq!(ThemeCell::new(Theme::Light).get(), Theme::Light);
    assert_eq!(ThemeCell::default().get(), Theme::Dark);
}

#[test]
fn set_reports_change() {
    let cell = ThemeCell::default();
    assert!(cell.set(Theme::Light));
    assert!(!cell.set(Theme::Light));
    assert_eq!(cell.get(), Theme::Light);
}

#[test]
fn observers_see_every_change() {
    let cell = ThemeCell::default();
    let (seen, observer) = recorder();
    cell.subscribe(observer);

    cell.set(Theme::Light);
    cell.set(Theme::Dark);

    assert_eq!(*seen.lock().expect("lock"), vec![Theme::Light, Theme::Dark]);
}

#[test]
fn unchanged_write_does_not_notify() {
    let cell = ThemeCell::new(Theme::Dark);
    let (seen, observer) = recorder();
    cell.subscribe(observer);

    cell.set(Theme::Dark);

    assert!(seen.lock().expect("lock").is_empty());
}

#[test]
fn observers_run_in_registration_order() {
    let cell = ThemeCell::default();
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        cell.subscribe(move |_| order.lock().expect("lock").push(tag));
    }

    cell.set(Theme::Light);

    assert_eq!(*order.lock().expect("lock"), vec!["first", "second", "third"]);
}

#[test]
fn observer_may_read_cell_during_notification() {
    let cell = Arc::new(ThemeCell::default());
    let observed = Arc::new(Mutex::new(None));
    {
        let reader = Arc::clone(&cell);
        let observed = Arc::clone(&observed);
        cell.subscribe(move |_| *observed.lock().expect("lock") = Some(reader.get()));
    }

    cell.set(Theme::Light);

    assert_eq!(*observed.lock().expect("lock"), Some(Theme::Light));
}

#[test]
fn unsubscribe_stops_notifications() {
    let cell = ThemeCell::default();
    let (seen, observer) = recorder();
    let subscription = cell.subscribe(observer);

    assert!(cell.unsubscribe(subscription));
    assert!(!cell.unsubscribe(subscription));
    cell.set(Theme::Light);

    assert!(seen.lock().expect("lock").is_empty());
    assert_eq!(cell.observer_count(), 0);
}

#[test]
fn subscriptions_are_distinct() {
    let cell = ThemeCell::default();
    let a = cell.subscribe(|_| {});
    let b = cell.subscribe(|_| {});
    assert_ne!(a, b);
    assert_eq!(cell.observer_count(), 2);
}

#[test]
fn debug_shows_value_and_observer_count() {
    let cell = ThemeCell::new(Theme::Light);
    cell.subscribe(|_| {});
    let rendered = format!("{cell:?}");
    assert!(rendered.contains("Light"));
    assert!(rendered.contains("observers: 1"));
}
