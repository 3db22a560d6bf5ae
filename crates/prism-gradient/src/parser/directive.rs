//! Leading geometry directives: `<n>deg` for linear gradients and
//! `circle at <x>% <y>%` for radial ones.
//!
//! Detection is a plain substring check. A token that looks like a
//! directive is always consumed, even when its numbers cannot be read; in
//! that case the running value is left untouched. Numbers too large for
//! `u32` saturate.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::parse_digits;
use crate::types::{DEFAULT_ANGLE, DEFAULT_POSITION_X, DEFAULT_POSITION_Y};

static ANGLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)deg").unwrap());

static RADIAL_POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"circle at ([0-9]+)% ([0-9]+)%").unwrap());

/// Pull the angle out of a linear gradient's parts.
///
/// Returns the angle (last readable directive wins, default 90) and the
/// remaining parts in input order.
pub(crate) fn extract_angle(parts: Vec<String>) -> (u32, Vec<String>) {
    let mut angle = DEFAULT_ANGLE;
    let mut rest = Vec::with_capacity(parts.len());

    for part in parts {
        if !part.contains("deg") {
            rest.push(part);
            continue;
        }
        match ANGLE_RE.captures(&part).map(|caps| parse_digits(&caps[1])) {
            Some(value) => angle = value,
            None => debug!("ignoring unreadable angle directive: {part}"),
        }
    }

    (angle, rest)
}

/// Pull the `circle at X% Y%` position out of a radial gradient's parts.
pub(crate) fn extract_position(parts: Vec<String>) -> ((u32, u32), Vec<String>) {
    let mut position = (DEFAULT_POSITION_X, DEFAULT_POSITION_Y);
    let mut rest = Vec::with_capacity(parts.len());

    for part in parts {
        if !part.contains("circle at") {
            rest.push(part);
            continue;
        }
        let parsed = RADIAL_POSITION_RE
            .captures(&part)
            .map(|caps| (parse_digits(&caps[1]), parse_digits(&caps[2])));
        match parsed {
            Some(value) => position = value,
            None => debug!("ignoring unreadable position directive: {part}"),
        }
    }

    (position, rest)
}
