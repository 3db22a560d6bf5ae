//! Color stop parsing.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::parse_digits;
use crate::colors::ColorParser;
use crate::types::GradientStop;

static PERCENTAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)%$").unwrap());

/// Split `"<color> <n>%"` at the last space.
///
/// Returns `None` when there is no trailing percentage, no space to split
/// on, or nothing left of the color once trimmed.
fn split_color_and_percentage(token: &str) -> Option<(&str, u32)> {
    let caps = PERCENTAGE_RE.captures(token)?;
    let percentage = parse_digits(&caps[1]);

    let last_space = token.rfind(' ')?;
    let color = token[..last_space].trim();
    if color.is_empty() {
        return None;
    }

    Some((color, percentage))
}

/// Turn stop tokens into [`GradientStop`]s, in input order.
///
/// A token without a percentage gets 0 when no stop has been accepted yet
/// and 100 otherwise. Tokens whose color is rejected by `parser` are
/// skipped. Ids count up from 1 over the accepted stops.
pub(crate) fn parse_stops<P>(parts: &[String], parser: &P) -> Vec<GradientStop>
where
    P: ColorParser + ?Sized,
{
    let mut stops: Vec<GradientStop> = Vec::with_capacity(parts.len());
    let mut next_id = 1;

    for part in parts {
        let trimmed = part.trim();

        let (color_text, percentage) = match split_color_and_percentage(trimmed) {
            Some(split) => split,
            None => (trimmed, if stops.is_empty() { 0 } else { 100 }),
        };

        match parser.parse_color(color_text) {
            Ok(color) => {
                stops.push(GradientStop {
                    id: next_id,
                    percentage,
                    color,
                });
                next_id += 1;
            }
            Err(e) => debug!("skipping gradient stop `{trimmed}`: {e}"),
        }
    }

    stops
}
