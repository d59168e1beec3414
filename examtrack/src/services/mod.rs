//! Services module
//!
//! Business logic services that coordinate between the presentation layer,
//! the query engine and the key-value store.

pub mod clock;
pub mod exam_store;
pub mod exams;
pub mod settings;
pub mod ticker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use exam_store::ExamStore;
pub use exams::ExamsService;
pub use settings::ThemeService;
pub use ticker::{CountdownTicker, TickerHandle};
