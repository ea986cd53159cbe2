use std::fmt;

use super::filter::RangeFilter;

// ---------------------------------------------------------------------------
// Range selection state machine
// ---------------------------------------------------------------------------

/// Progress of a two-click score range selection (values in percent).
///
/// ```text
///  Unset ──select(a)──▶ StartPending{a} ──select(b)──▶ Complete{a, b}
///    ▲                                                    │
///    └───────────────reset() (from any state)             │
///                      StartPending{c} ◀──select(c)───────┘
/// ```
///
/// The second value becomes `end` as-is, even when it is below `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeSelection {
    #[default]
    Unset,
    StartPending {
        start: u8,
    },
    Complete {
        start: u8,
        end: u8,
    },
}

impl RangeSelection {
    /// Feed one selected score value into the machine.
    ///
    /// A value arriving while already `Complete` starts a fresh selection;
    /// the previous range is dropped.
    pub fn select(&mut self, value: u8) {
        *self = match *self {
            RangeSelection::Unset | RangeSelection::Complete { .. } => {
                RangeSelection::StartPending { start: value }
            }
            RangeSelection::StartPending { start } => RangeSelection::Complete { start, end: value },
        };
    }

    pub fn reset(&mut self) {
        *self = RangeSelection::Unset;
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, RangeSelection::Complete { .. })
    }

    pub fn start(&self) -> Option<u8> {
        match *self {
            RangeSelection::Unset => None,
            RangeSelection::StartPending { start } | RangeSelection::Complete { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn end(&self) -> Option<u8> {
        match *self {
            RangeSelection::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    /// The selection as a filter. Only `Complete` restricts anything.
    pub fn filter(&self) -> RangeFilter {
        RangeFilter {
            start: self.start(),
            end: self.end(),
        }
    }

    /// Caption shown next to the Reset button, `None` while unset.
    pub fn label(&self) -> Option<String> {
        match *self {
            RangeSelection::Unset => None,
            RangeSelection::StartPending { start } => Some(format!("Sampling starting {start}")),
            RangeSelection::Complete { start, end } => {
                Some(format!("Sampling between {start} and {end}"))
            }
        }
    }
}

impl fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSelection::Unset => write!(f, "unset"),
            RangeSelection::StartPending { start } => write!(f, "pending from {start}"),
            RangeSelection::Complete { start, end } => write!(f, "complete {start}..={end}"),
        }
    }
}
