//! Integration tests for the rendered line format.
//!
//! These tests pin down the bit-exact layout of the standard line prefix and
//! the truncation and newline rules, by rendering records with known field
//! values and parsing the fixed-width fields back out.

use logging_sink::{Body, MAX_LOG_LINE_LEN, Record, ToArg, render};

use core::Severity;
use time::{Date, Month, PrimitiveDateTime, Time};

fn record_at(severity: Severity) -> Record {
    let date = Date::from_calendar_date(2026, Month::August, 25).expect("valid date");
    let clock = Time::from_hms_micro(13, 5, 9, 42).expect("valid time");

    Record {
        time: PrimitiveDateTime::new(date, clock).assume_utc(),
        file: "engine.rs".to_owned(),
        line: 321,
        depth: 0,
        severity,
        thread: 4321,
    }
}

fn rendered(severity: Severity, body: &Body<'_>) -> String {
    let mut buf = Vec::new();
    render(&record_at(severity), body, &mut buf);
    String::from_utf8(buf).expect("rendered line is UTF-8")
}

#[test]
fn header_layout_is_bit_exact() {
    let line = rendered(Severity::Warning, &Body::Formatted(format_args!("hello")));
    assert_eq!(line, "W0825 13:05:09.000042    4321 engine.rs:321] hello\n");
}

#[test]
fn header_fields_parse_back_exactly() {
    let line = rendered(Severity::Error, &Body::Formatted(format_args!("x")));

    // <Sev><MM><DD> <HH>:<MM>:<SS>.<uuuuuu> <TID pad 7> <file>:<line>]
    assert_eq!(&line[0..1], "E");
    assert_eq!(&line[1..3], "08");
    assert_eq!(&line[3..5], "25");
    assert_eq!(&line[5..6], " ");
    assert_eq!(&line[6..8], "13");
    assert_eq!(&line[9..11], "05");
    assert_eq!(&line[12..14], "09");
    assert_eq!(&line[15..21], "000042");
    assert_eq!(&line[21..22], " ");
    assert_eq!(&line[22..29], "   4321");

    let rest = &line[30..];
    let bracket = rest.find(']').expect("closing bracket present");
    assert_eq!(&rest[..bracket], "engine.rs:321");
}

#[test]
fn severity_prefix_tracks_record_severity() {
    for (severity, prefix) in [
        (Severity::Info, 'I'),
        (Severity::Warning, 'W'),
        (Severity::Error, 'E'),
        (Severity::Fatal, 'F'),
    ] {
        let line = rendered(severity, &Body::Formatted(format_args!("m")));
        assert_eq!(line.chars().next(), Some(prefix));
    }
}

#[test]
fn oversized_messages_truncate_to_the_cap_with_one_newline() {
    let payload = "a".repeat(MAX_LOG_LINE_LEN * 2);
    let line = rendered(Severity::Info, &Body::Formatted(format_args!("{payload}")));

    assert_eq!(line.len(), MAX_LOG_LINE_LEN);
    assert!(line.ends_with('\n'));
    assert!(!line.ends_with("\n\n"));
}

#[test]
fn message_exactly_at_the_cap_is_untouched() {
    let header = rendered(Severity::Info, &Body::Formatted(format_args!(""))).len() - 1;
    let payload = "b".repeat(MAX_LOG_LINE_LEN - 1 - header);
    let line = rendered(Severity::Info, &Body::Formatted(format_args!("{payload}")));

    assert_eq!(line.len(), MAX_LOG_LINE_LEN);
    assert!(line.ends_with("b\n"));
}

#[test]
fn println_body_does_not_double_terminate() {
    let args = [1_i32.to_arg(), 2_i32.to_arg(), 3_i32.to_arg()];
    let line = rendered(Severity::Info, &Body::Println(&args));

    assert!(line.ends_with("] 1 2 3\n"));
    assert!(!line.ends_with("\n\n"));
}

#[test]
fn print_body_joins_with_glog_spacing() {
    let args = [
        "x".to_arg(),
        1_i32.to_arg(),
        2_i32.to_arg(),
        "y".to_arg(),
    ];
    let line = rendered(Severity::Info, &Body::Print(&args));

    assert!(line.ends_with("] x1 2y\n"));
}

#[test]
fn empty_formatted_body_still_yields_a_complete_line() {
    let line = rendered(Severity::Info, &Body::Formatted(format_args!("")));
    assert!(line.ends_with("] \n"));
}

#[test]
fn reused_buffer_is_overwritten_not_appended() {
    let mut buf = Vec::new();
    render(
        &record_at(Severity::Info),
        &Body::Formatted(format_args!("first message that is fairly long")),
        &mut buf,
    );
    let first_len = buf.len();

    render(
        &record_at(Severity::Info),
        &Body::Formatted(format_args!("2nd")),
        &mut buf,
    );

    assert!(buf.len() < first_len);
    assert!(buf.ends_with(b"] 2nd\n"));
}
