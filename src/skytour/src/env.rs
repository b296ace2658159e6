use chrono::Local;

/// Print a timestamped message to stderr.
///
/// Accepts the same arguments as `format!`.
#[macro_export]
macro_rules! elog {
    ($($arg:tt)*) => {
        eprintln!("[{}] {}", $crate::env::timestamp(), format!($($arg)*))
    };
}

/// Current local time in the format used by `elog!`.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
