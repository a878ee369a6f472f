// Not every macro is used under every feature combination.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}

/// Logs the fault and panics. Used when a unit outside of an operation's
/// supported set reaches it, which is always a caller bug.
macro_rules! unsupported_unit {
    ($operation:expr, $unit:expr) => {{
        error!("{} does not support unit {:?}", $operation, $unit);
        panic!("{} does not support unit {:?}", $operation, $unit)
    }};
}
