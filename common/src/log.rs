//! Thin wrappers over `tracing` so every crate logs under the same targets.
//!
//! The CLI formatter keys its prefixes off these targets, e.g. `[+]` for
//! [`success!`](crate::success).

pub const SUCCESS_TARGET: &str = "bookinn::success";
pub const PRINT_TARGET: &str = "bookinn::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "bookinn::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}
