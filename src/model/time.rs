//! Stage duration codec.
//!
//! Durations are stored as integer minutes and displayed as `"H:MM"` text.
//! [`parse_duration`] is deliberately lenient so that a half-typed value
//! never produces an error mid-edit; [`parse_duration_input`] is the strict
//! gate duration fields use before committing a value to state.

use thiserror::Error;

/// Duration text that failed the `h:mm` / `mm` input pattern.
///
/// The presentation layer treats this as "do not commit": the edit is
/// discarded and the field reverts to the formatted current duration on
/// focus loss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration {0:?}: expected h:mm or mm")]
pub struct InvalidDurationText(pub String);

/// Formats a duration in minutes as `"H:MM"`.
///
/// The minutes-within-hour component is zero-padded to two digits:
/// 90 becomes `"1:30"` and 42 becomes `"0:42"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Parses duration text leniently, returning total minutes.
///
/// Accepts `"H:MM"` or a bare `"MM"`. The text is split on the first colon
/// if one is present; otherwise the whole text is the minutes component and
/// hours are zero. Each side is parsed as a base-10 integer and a side that
/// fails to parse contributes zero, so this function never fails; an hours
/// side too large to represent saturates at [`u32::MAX`] minutes rather
/// than overflowing.
///
/// Round-trips with [`format_duration`]: `parse_duration(&format_duration(m))`
/// equals `m` for every `m`.
pub fn parse_duration(text: &str) -> u32 {
    let (hours, minutes) = match text.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None => ("0", text),
    };
    let hours: u32 = hours.trim().parse().unwrap_or(0);
    let minutes: u32 = minutes.trim().parse().unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Strict commit gate for duration fields.
///
/// The raw text must be one or two digits, optionally followed by a colon
/// and one or two more digits. Text failing the pattern yields
/// [`InvalidDurationText`] and must not be committed to state; text passing
/// it is converted with [`parse_duration`].
pub fn parse_duration_input(text: &str) -> Result<u32, InvalidDurationText> {
    let valid = match text.split_once(':') {
        Some((hours, minutes)) => is_digit_run(hours) && is_digit_run(minutes),
        None => is_digit_run(text),
    };
    if valid {
        Ok(parse_duration(text))
    } else {
        Err(InvalidDurationText(text.to_string()))
    }
}

/// Recomputes a duration field's display text after the stored duration
/// may have changed elsewhere.
///
/// Duration fields keep their own text so a partially-typed value stays
/// visible, but the same duration can be edited from more than one widget.
/// Returns the canonical formatted text when `text` no longer parses to
/// `duration`, and `None` when it still does, so an in-progress edit that
/// already reflects the stored value is never clobbered.
pub fn refresh_duration_text(text: &str, duration: u32) -> Option<String> {
    match parse_duration_input(text) {
        Ok(minutes) if minutes == duration => None,
        _ => Some(format_duration(duration)),
    }
}

fn is_digit_run(part: &str) -> bool {
    (1..=2).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
}
