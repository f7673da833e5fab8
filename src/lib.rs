/// Macro for prefixed step logging to stdout.
///
/// One line per completed pipeline step:
/// ```ignore
/// log_step!("package.json updated (name={})", pkg_name);
/// log_step!("removed {}", path);
/// ```
#[macro_export]
macro_rules! log_step {
    ($($arg:tt)*) => {
        println!("[init] {}", format_args!($($arg)*));
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `sprout::manifest` instead of `sprout::core::manifest`
pub use core::*;
pub use utils::*;
