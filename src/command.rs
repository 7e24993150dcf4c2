//! Spoken/typed command parsing.
//!
//! Turns a transcript such as `"safe route from Chennai to Kanchipuram"`
//! into a [`Command`]. Matching is case-insensitive and place names come
//! back lowercased and trimmed.

pub const UNRECOGNIZED_REPLY: &str = "Sorry, I did not understand that. Please try again.";

const SAFE_ROUTE_PREFIX: &str = "safe route from ";
const SAFE_ROUTE_TRIGGER: &str = "safe route from";
const NAVIGATION_TRIGGER: &str = "start navigation";
const SEPARATOR: &str = " to ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plan a route and report hazards along it.
    SafeRoute { from: String, to: String },
    /// Hand the current route off to turn-by-turn navigation.
    StartNavigation,
}

impl Command {
    /// Reply announced when the command is accepted.
    pub fn acknowledgement(&self) -> String {
        match self {
            Command::SafeRoute { from, to } => format!("Finding the safest route from {} to {}", from, to),
            Command::StartNavigation => "Starting navigation in Google Maps".to_string(),
        }
    }
}

/// Parses a transcript. Returns `None` when it is not understood.
///
/// A transcript mentioning a safe route is only ever read as a route
/// request: if the places cannot be extracted it is rejected, even when it
/// also says "start navigation".
pub fn parse(text: &str) -> Option<Command> {
    let text = text.trim().to_lowercase();

    if text.contains(SAFE_ROUTE_TRIGGER) {
        return parse_safe_route(&text);
    }
    if text.contains(NAVIGATION_TRIGGER) {
        return Some(Command::StartNavigation);
    }
    None
}

fn parse_safe_route(text: &str) -> Option<Command> {
    let start = text.find(SAFE_ROUTE_PREFIX)? + SAFE_ROUTE_PREFIX.len();
    let rest = &text[start..];

    // The last separator that leaves a place on both sides wins, so a
    // departure point may itself contain " to ".
    let separators: Vec<usize> = rest.match_indices(SEPARATOR).map(|(i, _)| i).collect();
    let (from, to) = separators.iter().rev().find_map(|&i| {
        let from = &rest[..i];
        let to = &rest[i + SEPARATOR.len()..];
        (!from.is_empty() && !to.is_empty()).then_some((from, to))
    })?;

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some(Command::SafeRoute {
        from: from.to_string(),
        to: to.to_string(),
    })
}
