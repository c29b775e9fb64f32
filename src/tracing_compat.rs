//! Tracing compatibility layer for structured logging.
//!
//! This module provides a unified interface for logging that works whether
//! or not the `tracing-integration` feature is enabled:
//!
//! - **With feature enabled**: Re-exports the level macros from the
//!   `tracing` crate for full functionality.
//! - **Without feature**: No-op macros that compile to nothing for zero
//!   runtime overhead.
//!
//! The store emits `trace!` events on capacity transitions and `debug!`
//! on release; span machinery is not carried because nothing in this
//! crate suspends or nests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trivec::tracing_compat::{debug, trace};
//!
//! // These compile to no-ops when tracing-integration is disabled
//! trace!(old_capacity = 4, new_capacity = 8, "storage grew");
//! debug!("storage released");
//! ```
//!
//! # Feature Flag
//!
//! Enable tracing by adding the feature to your `Cargo.toml`:
//!
//! ```toml
//! trivec = { version = "0.1", features = ["tracing-integration"] }
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, error, info, trace, warn};

// When tracing is disabled, provide no-op macros
#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! No-op implementations when tracing is disabled.
    //!
    //! These macros expand to nothing, ensuring zero compile-time and
    //! runtime cost.

    /// No-op trace-level logging macro.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info-level logging macro.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op warn-level logging macro.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error-level logging macro.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    // Re-export the macros at module level
    pub use crate::{debug, error, info, trace, warn};
}

#[cfg(not(feature = "tracing-integration"))]
pub use noop::*;
