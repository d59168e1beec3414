//! Temporal query engine
//!
//! Pure functions deriving what the user sees from the stored records, the
//! filter selection, the search text and the current instant. Nothing here
//! touches storage or keeps state between calls.

pub mod board;
pub mod countdown;
pub mod display;
pub mod instant;
pub mod projection;

pub use board::{Board, BoardEntry, BoardQuery};
pub use countdown::{countdown_text, urgency, DurationParts};
pub use display::{location_label, prefixed_countdown, schedule_label};
pub use instant::parse_instant;
pub use projection::project;
