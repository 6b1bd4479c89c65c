#![doc(test(attr(deny(warnings))))]

//! gofinances ties the workspace crates into a terminal front end: dashboard
//! highlights, the transaction listing and the monthly category resume, backed
//! by a JSON key-value store.

pub mod cli;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber once.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("gofinances tracing initialized");
    });
}
