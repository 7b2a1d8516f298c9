pub mod cc {
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
}

/// Diagnostic lines only show up with `DEBUG_LOGS=true`.
pub fn enabled() -> bool {
    *crate::constants::DEBUG_LOGS
}

/// Timestamp prefix shared by the log macros.
pub fn stamp() -> String {
    chrono::Utc::now().format("%H:%M:%S%.3f").to_string()
}

// Everything goes to stderr; stdout carries the balance line only.
#[macro_export]
macro_rules! log {
    // Plain arms first, a leading format literal would otherwise bind as `$color`.
    // log!("hello");
    ($fmt:literal $(,)?) => {{
        $crate::log!($crate::libs::writing::cc::LIGHT_GRAY, $fmt)
    }};

    // log!("chain id {}", id);
    ($fmt:literal, $($arg:tt)+) => {{
        $crate::log!($crate::libs::writing::cc::LIGHT_GRAY, $fmt, $($arg)+)
    }};

    // log!(cc::RED, "hello");
    ($color:expr, $fmt:literal $(,)?) => {{
        if $crate::libs::writing::enabled() {
            let mut _stderr = ::std::io::stderr().lock();
            let _ = ::std::io::Write::write_fmt(
                &mut _stderr,
                format_args!(
                    concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                    $crate::libs::writing::cc::LIGHT_GRAY,
                    $crate::libs::writing::stamp(),
                    $crate::libs::writing::cc::RESET,
                    $color,
                    $crate::libs::writing::cc::RESET,
                ),
            );
        }
    }};

    // log!(cc::GREEN, "resolved {} -> {}", name, addr);
    ($color:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {{
        if $crate::libs::writing::enabled() {
            let mut _stderr = ::std::io::stderr().lock();
            let _ = ::std::io::Write::write_fmt(
                &mut _stderr,
                format_args!(
                    concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                    $crate::libs::writing::cc::LIGHT_GRAY,
                    $crate::libs::writing::stamp(),
                    $crate::libs::writing::cc::RESET,
                    $color,
                    $($arg),+,
                    $crate::libs::writing::cc::RESET,
                ),
            );
        }
    }};

}

/// Unconditional, for things the user should see even without `DEBUG_LOGS`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{}{}\n",
                $crate::libs::writing::cc::ORANGE,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}
