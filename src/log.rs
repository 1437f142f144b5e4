use derive_more::Display;

///
/// Level
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

#[macro_export]
macro_rules! log {
    // ============================================================
    // (1) topic, level, message
    //    log!("rating", Level::Error, "update failed {}", err)
    // ============================================================
    ($topic:literal, $level:expr, $fmt:expr, $($arg:tt)*) => {{
        $crate::log!(@inner $level, Some($topic), $fmt, $($arg)*);
    }};
    ($topic:literal, $level:expr, $fmt:expr) => {{
        $crate::log!(@inner $level, Some($topic), $fmt);
    }};

    // ============================================================
    // (2) topic, message
    //    log!("category", "created {}", id)
    // ============================================================
    ($topic:literal, $fmt:expr, $($arg:tt)*) => {{
        $crate::log!(@inner $crate::log::Level::Info, Some($topic), $fmt, $($arg)*);
    }};
    ($topic:literal, $fmt:expr) => {{
        $crate::log!(@inner $crate::log::Level::Info, Some($topic), $fmt);
    }};

    // ============================================================
    // (3) level, message
    //    log!(Level::Warn, "bad input {}", id)
    // ============================================================
    ($level:expr, $fmt:expr, $($arg:tt)*) => {{
        $crate::log!(@inner $level, None, $fmt, $($arg)*);
    }};
    ($level:expr, $fmt:expr) => {{
        $crate::log!(@inner $level, None, $fmt);
    }};

    // ============================================================
    // INTERNAL IMPLEMENTATION
    // ============================================================
    (@inner $level:expr, $topic:expr, $fmt:expr $(, $($arg:tt)*)?) => {{
        let level = $level;
        let topic: Option<&str> = $topic;
        let message = format!($fmt $(, $($arg)*)?);

        // Optional topic rendering
        let final_msg = if let Some(t) = topic {
            format!("[{t}] {message}")
        } else {
            message
        };

        // ANSI color codes (Debug has no color)
        let color = match level {
            $crate::log::Level::Ok    => "\x1b[32m", // green
            $crate::log::Level::Info  => "\x1b[34m", // blue
            $crate::log::Level::Warn  => "\x1b[33m", // yellow
            $crate::log::Level::Error => "\x1b[31m", // red
            $crate::log::Level::Debug => "",         // no color
        };

        // Only apply reset if we actually colored the label
        let reset = if color.is_empty() { "" } else { "\x1b[0m" };

        let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());

        println!("{label}| {final_msg}");
    }};
}
