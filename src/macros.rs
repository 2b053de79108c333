/// Shared expansion for the severity macros.
///
/// The level has to arrive as an ident because `tracing::event!` bakes it
/// into static callsite metadata. Exported only so the public macros can
/// reach it from downstream crates.
#[doc(hidden)]
#[macro_export]
macro_rules! __fblog_event {
    ($lvl:ident, $sev:ident, $tag:expr, $($arg:tt)+) => {
        $crate::tracing::event!(
            target: $crate::FBLOG_TARGET,
            $crate::tracing::Level::$lvl,
            {
                tag = $tag,
                severity = u64::from($crate::Severity::$sev)
            },
            $($arg)+
        )
    };
}

/// Verbose log, `fblogv!(tag, format, args...)`.
///
/// Compiled out when `debug_assertions` are off, unless the
/// `release-verbose` feature is enabled. Stripped calls evaluate none of
/// their arguments.
#[macro_export]
macro_rules! fblogv {
    ($tag:expr, $($arg:tt)+) => {{
        if $crate::VERBOSE_ENABLED {
            $crate::__fblog_event!(TRACE, Verbose, $tag, $($arg)+);
        }
    }};
}

/// Debug log, `fblogd!(tag, format, args...)`.
#[macro_export]
macro_rules! fblogd {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__fblog_event!(DEBUG, Debug, $tag, $($arg)+)
    };
}

/// Info log, `fblogi!(tag, format, args...)`.
#[macro_export]
macro_rules! fblogi {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__fblog_event!(INFO, Info, $tag, $($arg)+)
    };
}

/// Warning log, `fblogw!(tag, format, args...)`.
#[macro_export]
macro_rules! fblogw {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__fblog_event!(WARN, Warn, $tag, $($arg)+)
    };
}

/// Error log, `fbloge!(tag, format, args...)`.
#[macro_export]
macro_rules! fbloge {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__fblog_event!(ERROR, Error, $tag, $($arg)+)
    };
}

/// Fatal log, `fblogf!(tag, format, args...)`.
///
/// Emitted at `ERROR` level with fatal severity. Does not abort.
#[macro_export]
macro_rules! fblogf {
    ($tag:expr, $($arg:tt)+) => {
        $crate::__fblog_event!(ERROR, Fatal, $tag, $($arg)+)
    };
}

/// `fblogv!` guarded by a condition: `fblogv_if!(cond, tag, format, ...)`.
///
/// When verbose logging is stripped, the condition is not evaluated either.
#[macro_export]
macro_rules! fblogv_if {
    ($cond:expr, $tag:expr, $($arg:tt)+) => {{
        if $crate::VERBOSE_ENABLED {
            if $cond {
                $crate::__fblog_event!(TRACE, Verbose, $tag, $($arg)+);
            }
        }
    }};
}

/// `fblogd!` guarded by a condition.
#[macro_export]
macro_rules! fblogd_if {
    ($cond:expr, $tag:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::__fblog_event!(DEBUG, Debug, $tag, $($arg)+);
        }
    }};
}

/// `fblogi!` guarded by a condition.
#[macro_export]
macro_rules! fblogi_if {
    ($cond:expr, $tag:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::__fblog_event!(INFO, Info, $tag, $($arg)+);
        }
    }};
}

/// `fblogw!` guarded by a condition.
#[macro_export]
macro_rules! fblogw_if {
    ($cond:expr, $tag:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::__fblog_event!(WARN, Warn, $tag, $($arg)+);
        }
    }};
}

/// `fbloge!` guarded by a condition.
#[macro_export]
macro_rules! fbloge_if {
    ($cond:expr, $tag:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::__fblog_event!(ERROR, Error, $tag, $($arg)+);
        }
    }};
}

/// `fblogf!` guarded by a condition.
#[macro_export]
macro_rules! fblogf_if {
    ($cond:expr, $tag:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::__fblog_event!(ERROR, Fatal, $tag, $($arg)+);
        }
    }};
}

/// Severity-parameterized form: `fblog!(Warn, tag, format, args...)`.
///
/// Dispatches to the fixed-severity macros, so `fblog!(Verbose, ...)` is
/// subject to the same stripping as `fblogv!`.
#[macro_export]
macro_rules! fblog {
    (Verbose, $($rest:tt)+) => { $crate::fblogv!($($rest)+) };
    (Debug, $($rest:tt)+) => { $crate::fblogd!($($rest)+) };
    (Info, $($rest:tt)+) => { $crate::fblogi!($($rest)+) };
    (Warn, $($rest:tt)+) => { $crate::fblogw!($($rest)+) };
    (Error, $($rest:tt)+) => { $crate::fbloge!($($rest)+) };
    (Fatal, $($rest:tt)+) => { $crate::fblogf!($($rest)+) };
}
