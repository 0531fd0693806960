// Console output gated by a process-wide verbosity level
use std::sync::atomic::{AtomicU8, Ordering};

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(1);

pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 1 {
        println!("📢 Verbosity level: {} (0=summary, 1=progress, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! v_print {
    ($level:expr, $($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= $level {
            println!($($arg)*);
        }
    };
}

/// Status lines, always shown
#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => { println!($($arg)*); };
}

/// Progress of cycles, purchases and sales
#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!(1, $($arg)*); };
}

#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!(2, $($arg)*); };
}

// Always print errors regardless of verbosity
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*); };
}
