//! Observability for Sole storefront tools.
//!
//! - `RequestId` - Correlates every log line of one run
//! - `StructuredLogger` - Leveled JSON/human logging with typed fields

mod id;
mod logging;

pub use id::*;
pub use logging::*;
