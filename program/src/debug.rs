/// Debug macro that wraps `solana_program_log::log!`. Compiles to nothing unless the `debug`
/// feature is enabled.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        solana_program_log::log!($($arg)*)
    };
}
