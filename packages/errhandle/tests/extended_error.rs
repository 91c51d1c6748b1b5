//! Construction, configuration and display of `ExtendedError`

mod common;

use std::error::Error as _;
use std::io;

use common::Capture;
use errhandle::{Classification, ExtendedError, HandlerConfig, ParseClassificationError, StackDepth};

#[test]
fn display_joins_user_message_and_wrapped_error() {
    let err = ExtendedError::new(io::Error::other("disk full"), Classification::LogErr, "save failed");

    assert_eq!(err.to_string(), "save failed: disk full");
}

#[test]
fn display_without_wrapped_error_is_the_user_message() {
    let err = ExtendedError::without_source(Classification::LogErr, "nothing to do");

    assert_eq!(err.to_string(), "nothing to do");
    assert!(err.source().is_none());
    assert!(err.wrapped().is_none());
}

#[test]
fn alternate_display_lists_deeper_sources() {
    let inner = ExtendedError::new(io::Error::other("refused"), Classification::LogErr, "connect");
    let err = ExtendedError::new(inner, Classification::LogErr, "sync");

    assert_eq!(err.to_string(), "sync: connect: refused");
    assert_eq!(format!("{err:#}"), "sync: connect: refused\nCaused by: refused");
}

#[test]
fn unwrap_returns_the_wrapped_error() {
    let err = ExtendedError::new(
        io::Error::new(io::ErrorKind::PermissionDenied, "no access"),
        Classification::LogErr,
        "open",
    );

    let wrapped = err.source().expect("wrapped error");
    let io_err = wrapped.downcast_ref::<io::Error>().expect("io error");
    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(io_err.to_string(), "no access");

    let inner = err.into_inner().expect("wrapped error");
    assert!(inner.downcast::<io::Error>().is_ok());
}

#[test]
fn defaults_are_level_one_and_three_frames() {
    let err = ExtendedError::without_source(Classification::LogErr, "x");

    assert_eq!(err.id(), Classification::LogErr);
    assert_eq!(err.level(), 1);
    assert_eq!(err.stack_depth(), StackDepth::Frames(3));
    assert!(!err.is_handled());
}

#[test]
fn fatal_classifications_force_level_four_and_unlimited_frames() {
    for id in [Classification::Panic, Classification::Fail] {
        let err = ExtendedError::without_source(id, "x");

        assert_eq!(err.id(), id);
        assert_eq!(err.level(), 4);
        assert_eq!(err.stack_depth(), StackDepth::Unlimited);
    }
}

#[test]
fn fatal_defaults_ignore_the_config_defaults() {
    let config = HandlerConfig::default().with_level(2).with_stack_depth(0);

    let fatal = ExtendedError::with_config(None, Classification::Fail, "x", &config);
    assert_eq!(fatal.level(), 4);
    assert_eq!(fatal.stack_depth(), StackDepth::Unlimited);

    let plain = ExtendedError::with_config(None, Classification::LogErr, "x", &config);
    assert_eq!(plain.level(), 2);
    assert_eq!(plain.stack_depth(), StackDepth::Off);
}

#[test]
fn configuration_calls_override_fatal_defaults() {
    let err = ExtendedError::without_source(Classification::Panic, "x")
        .set_level(2, None)
        .set_stack_depth(5);

    assert_eq!(err.id(), Classification::Panic);
    assert_eq!(err.level(), 2);
    assert_eq!(err.stack_depth(), StackDepth::Frames(5));
}

#[test]
fn unknown_ids_normalize_to_log_and_return() {
    let err = ExtendedError::new(io::Error::other("boom"), "SomeId", "x");
    assert_eq!(err.id(), Classification::LogErr);

    assert_eq!(ExtendedError::without_source("Log and panic ", "x").id(), Classification::Panic);
    assert_eq!(ExtendedError::without_source("Log and exit", "x").id(), Classification::Fail);
}

#[test]
fn strict_parsing_rejects_unknown_ids() {
    assert_eq!("Log and return ".parse::<Classification>(), Ok(Classification::LogErr));
    assert_eq!(
        "SomeId".parse::<Classification>(),
        Err(ParseClassificationError::Unknown("SomeId".to_owned()))
    );
    assert_eq!(Classification::from_id("SomeId"), Classification::LogErr);
}

#[test]
fn labels_double_as_log_prefixes() {
    assert_eq!(Classification::LogErr.label(), "Log and return ");
    assert_eq!(Classification::Panic.label(), "Log and panic ");
    assert_eq!(Classification::Fail.label(), "Log and exit ");
    assert_eq!(Classification::Fail.to_string(), "Log and exit");
}

#[test]
fn stack_depth_from_integers() {
    assert_eq!(StackDepth::from(0), StackDepth::Off);
    assert_eq!(StackDepth::from(-1), StackDepth::Unlimited);
    assert_eq!(StackDepth::from(7), StackDepth::Frames(7));
}

#[test]
fn config_is_read_once_at_construction() {
    let first = Capture::new();
    let second = Capture::new();

    let config = first.config().with_level(0);
    let early = ExtendedError::with_config(None, Classification::LogErr, "early", &config);

    // a changed copy only reaches errors built from it
    let changed = config.clone().with_printer(second.printer());
    let late = ExtendedError::with_config(None, Classification::LogErr, "late", &changed);

    let _ = early.handle_now(&[]);
    let _ = late.handle_now(&[]);

    assert_eq!(first.printed(), vec!["early".to_owned()]);
    assert_eq!(second.printed(), vec!["late".to_owned()]);

    let _ = ExtendedError::with_config(None, Classification::LogErr, "again", &config).handle_now(&[]);
    assert_eq!(first.printed(), vec!["early".to_owned(), "again".to_owned()]);
}
