//! Arrival and departure events.

use std::fmt;

use coop_core::{HenId, NestId};

/// What happens at an event's moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A hen settles into a nest box.
    Arrival,
    /// A hen leaves her nest box.
    Departure,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival => write!(f, "entry"),
            EventKind::Departure => write!(f, "exit"),
        }
    }
}

/// One scheduled moment in a hen's visit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// Seconds since run start.
    pub time: f64,
    pub hen: HenId,
    pub nest: NestId,
    pub kind: EventKind,
}

impl Event {
    pub fn arrival(time: f64, hen: HenId, nest: NestId) -> Self {
        Self { time, hen, nest, kind: EventKind::Arrival }
    }

    pub fn departure(time: f64, hen: HenId, nest: NestId) -> Self {
        Self { time, hen, nest, kind: EventKind::Departure }
    }
}
