//! # lunar-core - Core Domain Types
//!
//! Foundation crate for Lunar Console. Provides the client-side mirrors of the
//! backend's resources, error handling, logging setup and timestamp helpers.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Function`] - A serverless function with its active version and env vars
//! - [`Version`] - An immutable code snapshot of a function
//! - [`Execution`], [`ExecutionLog`] - Invocation records and their log lines
//! - [`DiffLine`], [`VersionDiff`] - Pre-computed line diff between two versions
//! - [`Pagination`] - Server pagination envelope
//!
//! ### Error Reports (`error_report`)
//! - [`ErrorReport`] - Execution error split into description, code snippet and tip
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lunar_core::prelude::*;
//! ```

pub mod error;
pub mod error_report;
pub mod logging;
pub mod time;
pub mod types;

/// Prelude for common imports used throughout all Lunar Console crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use error_report::ErrorReport;
pub use time::{format_timestamp, format_timestamp_in, TimestampFormat};
pub use types::{
    ActiveVersion, DiffLine, EnvVars, Execution, ExecutionList, ExecutionStatus, ExecutionLog,
    FunctionList, Function, LineType, LogLevel, LogList, Pagination, Version, VersionDiff,
    VersionList,
};
