#![allow(unused_macros)]

// Debug-level reports for rejected operations. Compiled away unless the
// `logging` feature is enabled.

macro_rules! reject {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!(target: "dynarr", $($arg)+);
    };
}
