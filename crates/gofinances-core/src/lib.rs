//! gofinances-core
//!
//! Aggregation, summarization and presentation logic for stored transactions.
//! Depends on gofinances-domain. No CLI, no terminal I/O; storage is reached only
//! through the [`storage::KeyValueStore`] seam.

pub mod aggregator;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod period;
pub mod storage;
pub mod summarizer;
pub mod time;


pub use aggregator::*;
pub use dashboard::*;
pub use error::CoreError;
pub use format::*;
pub use period::*;
pub use storage::*;
pub use summarizer::*;
pub use time::*;
