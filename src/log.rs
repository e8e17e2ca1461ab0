//! Logging shims.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it they
//! swallow their arguments, so geometry code can log fallbacks and clamps
//! without paying for it in default builds.
//!
//! Use them as `crate::log::debug!(preset = name, "...")`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __prstgeom_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __prstgeom_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __prstgeom_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__prstgeom_debug as debug, __prstgeom_trace as trace, __prstgeom_warn as warn};
