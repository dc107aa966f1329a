//! Optional Tracy instrumentation.
//!
//! Enable the `profiling` feature to emit spans and plots to the
//! [Tracy profiler](https://github.com/wolfpld/tracy):
//!
//! ```toml
//! [dependencies]
//! vmesh-core = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use vmesh_core::profiling::{profile_function, profile_scope};
//!
//! fn bake_meshes() {
//!     profile_function!();
//!     {
//!         profile_scope!("encode");
//!         // ...
//!     }
//! }
//! ```
//!
//! Without the feature every macro expands to nothing.

#[cfg(feature = "profiling")]
pub use tracy_client::{self, Client, plot as tracy_plot, span};

/// Profile the enclosing scope under a static name.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::span!($name);
    };
}

/// Profile the enclosing scope (no-op without `profiling`).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Profile the enclosing function, named after its module path.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_function {
    () => {
        let _profile_span = $crate::profiling::span!();
    };
}

/// Profile the enclosing function (no-op without `profiling`).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_function {
    () => {};
}

/// Plot a numeric value over time, e.g. vertex counts of baked meshes.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_plot {
    ($name:expr, $value:expr) => {
        $crate::profiling::tracy_plot!($name, $value as f64)
    };
}

/// Plot a numeric value (no-op without `profiling`).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_plot {
    ($name:expr, $value:expr) => {
        let _ = $value;
    };
}

pub use profile_function;
pub use profile_plot;
pub use profile_scope;
