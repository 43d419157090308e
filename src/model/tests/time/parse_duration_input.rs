//! Tests for the parse_duration_input commit gate.

use crate::model::time::{parse_duration_input, InvalidDurationText};

/// Tests accepting well-formed "h:mm" text.
///
/// Expected: Ok(90)
#[test]
fn accepts_hours_and_minutes() {
    assert_eq!(parse_duration_input("1:30"), Ok(90));
}

/// Tests accepting bare minutes.
///
/// Expected: Ok(90)
#[test]
fn accepts_bare_minutes() {
    assert_eq!(parse_duration_input("90"), Ok(90));
}

/// Tests accepting a single digit.
///
/// Expected: Ok(5)
#[test]
fn accepts_single_digit() {
    assert_eq!(parse_duration_input("5"), Ok(5));
}

/// Tests accepting a single-digit minutes side after the colon.
///
/// The pattern allows one or two digits on each side, so "12:5" is a valid
/// partial entry and commits as 12 hours 5 minutes.
///
/// Expected: Ok(725)
#[test]
fn accepts_single_digit_minutes_side() {
    assert_eq!(parse_duration_input("12:5"), Ok(725));
}

/// Tests rejecting empty text.
///
/// Expected: Err
#[test]
fn rejects_empty_text() {
    assert_eq!(
        parse_duration_input(""),
        Err(InvalidDurationText(String::new()))
    );
}

/// Tests rejecting non-numeric text.
///
/// Expected: Err
#[test]
fn rejects_garbage() {
    assert!(parse_duration_input("abc").is_err());
}

/// Tests rejecting a trailing colon with no minutes digits.
///
/// Expected: Err
#[test]
fn rejects_trailing_colon() {
    assert!(parse_duration_input("1:").is_err());
}

/// Tests rejecting a leading colon with no hours digits.
///
/// Expected: Err
#[test]
fn rejects_leading_colon() {
    assert!(parse_duration_input(":30").is_err());
}

/// Tests rejecting more than two digits on a side.
///
/// Expected: Err for both a three-digit hours side and a three-digit
/// minutes side
#[test]
fn rejects_three_digit_sides() {
    assert!(parse_duration_input("123").is_err());
    assert!(parse_duration_input("1:345").is_err());
}

/// Tests rejecting surrounding whitespace.
///
/// The gate validates the raw text exactly as typed; leniency about
/// whitespace belongs to parse_duration alone.
///
/// Expected: Err
#[test]
fn rejects_whitespace() {
    assert!(parse_duration_input(" 1:30").is_err());
    assert!(parse_duration_input("1:30 ").is_err());
}
