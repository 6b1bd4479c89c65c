//! gofinances-domain
//!
//! Pure domain models (transaction records and the category catalog).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod transaction;

pub use category::*;
pub use transaction::*;
