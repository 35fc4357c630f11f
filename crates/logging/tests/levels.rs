// crates/logging/tests/levels.rs
use logging::{SubscriberConfig, level_for, subscriber};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::with_default;

#[test]
fn warn_is_the_default_level() {
    let sub = subscriber(SubscriberConfig::default()).unwrap();
    with_default(sub, || {
        assert!(tracing::enabled!(Level::WARN));
        assert!(!tracing::enabled!(Level::INFO));
    });
}

#[test]
fn verbose_enables_info() {
    let sub = subscriber(SubscriberConfig::builder().verbose(1).build()).unwrap();
    with_default(sub, || {
        assert!(tracing::enabled!(Level::INFO));
        assert!(!tracing::enabled!(Level::DEBUG));
    });
}

#[test]
fn quiet_overrides_verbose() {
    let sub = subscriber(SubscriberConfig::builder().verbose(3).quiet(true).build()).unwrap();
    with_default(sub, || {
        assert!(tracing::enabled!(Level::ERROR));
        assert!(!tracing::enabled!(Level::WARN));
    });
}

#[test]
fn level_mapping() {
    assert_eq!(level_for(0, false), LevelFilter::WARN);
    assert_eq!(level_for(1, false), LevelFilter::INFO);
    assert_eq!(level_for(2, false), LevelFilter::DEBUG);
    assert_eq!(level_for(7, false), LevelFilter::TRACE);
    assert_eq!(level_for(7, true), LevelFilter::ERROR);
}
