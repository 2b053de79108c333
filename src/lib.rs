//! Prefixed, severity-tagged logging macros over `tracing`.
//!
//! The `fblog*` macros carry an explicit log tag and forward to the
//! installed `tracing` subscriber, so they can sit in the same scope as the
//! unprefixed `log`/`tracing` macro families without import collisions.
//! Every macro takes `(tag, format, args...)`.
//!
//! `fblogv!` is a compile-time decision: when `debug_assertions` are off it
//! expands to nothing and evaluates none of its arguments, unless the
//! `release-verbose` feature forces it back on. The other severities are
//! always compiled in.
//!
//! [`FbLogSubscriber`] is the matching receiving side, rendering each event
//! as a logcat-style or JSON line.

pub mod event;
pub mod formatter;
pub mod severity;
pub mod subscriber;

#[macro_use]
pub mod macros;

#[doc(hidden)]
pub use tracing;

pub use severity::Severity;
pub use subscriber::FbLogSubscriber;

/// Event target the macros emit under.
pub const FBLOG_TARGET: &str = "fblog";

/// Whether `fblogv!` is compiled in. True when `debug_assertions` are on or
/// the `release-verbose` feature is enabled.
pub const VERBOSE_ENABLED: bool = cfg!(any(debug_assertions, feature = "release-verbose"));

#[cfg(test)]
mod tests {
    use crate::formatter::LogFmt;
    use crate::subscriber::FbLogSubscriber;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tokio::time::{sleep, Duration};
    use tracing;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Sink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_capture<F: FnOnce()>(fmt: LogFmt, f: F) -> String {
        let sink = Sink::default();
        let subscriber = FbLogSubscriber::with_writer(fmt, sink.clone());
        tracing::subscriber::with_default(subscriber, f);
        sink.contents()
    }

    #[test]
    fn every_severity_reaches_the_sink() {
        let out = with_capture(LogFmt::Pretty, || {
            fblogd!("boot", "starting");
            fblogi!("net", "listening on {}", 8080);
            fblogw!("disk", "{}% full", 93);
            fbloge!("auth", "token rejected");
            fblogf!("core", "giving up");
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("D/boot: starting"));
        assert!(lines[1].contains("I/net: listening on 8080"));
        assert!(lines[2].contains("W/disk: 93% full"));
        assert!(lines[3].contains("E/auth: token rejected"));
        assert!(lines[4].contains("F/core: giving up"));
    }

    #[cfg(any(debug_assertions, feature = "release-verbose"))]
    #[test]
    fn verbose_forwards_when_enabled() {
        assert!(crate::VERBOSE_ENABLED);

        let mut calls = 0;
        let out = with_capture(LogFmt::Pretty, || {
            fblogv!("cache", "probe {}", {
                calls += 1;
                42
            });
        });

        assert_eq!(calls, 1);
        assert!(out.contains("V/cache: probe 42"));
    }

    // Run with `cargo test --release` to exercise the stripped path.
    #[cfg(all(not(debug_assertions), not(feature = "release-verbose")))]
    #[test]
    fn verbose_strips_without_evaluating_arguments() {
        assert!(!crate::VERBOSE_ENABLED);

        let mut calls = 0;
        let mut checked = 0;
        let out = with_capture(LogFmt::Pretty, || {
            fblogv!("cache", "probe {}", {
                calls += 1;
                42
            });
            fblogv_if!(
                {
                    checked += 1;
                    true
                },
                "cache",
                "probe"
            );
        });

        assert_eq!(calls, 0);
        assert_eq!(checked, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn conditional_variants_respect_the_condition() {
        let retries = 3;
        let out = with_capture(LogFmt::Pretty, || {
            fblogi_if!(retries == 0, "net", "skipped");
            fblogi_if!(retries > 0, "net", "kept after {} retries", retries);
            fblogw_if!(true, "disk", "also kept");
        });

        assert!(!out.contains("skipped"));
        assert!(out.contains("I/net: kept after 3 retries"));
        assert!(out.contains("W/disk: also kept"));
    }

    #[test]
    fn severity_parameterized_dispatch() {
        let out = with_capture(LogFmt::Pretty, || {
            fblog!(Warn, "disk", "tight");
            fblog!(Fatal, "core", "bad state");
        });

        assert!(out.contains("W/disk: tight"));
        assert!(out.contains("F/core: bad state"));
    }

    #[test]
    fn json_lines_carry_tag_and_severity() {
        let out = with_capture(LogFmt::Json, || {
            fbloge!("auth", "denied for {}", "alice");
        });

        let value: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["tag"], "auth");
        assert_eq!(value["message"], "denied for alice");
    }

    #[test]
    fn foreign_events_fall_back_to_level() {
        let out = with_capture(LogFmt::Pretty, || {
            tracing::warn!("plain warning");
        });

        assert!(out.contains("W/: plain warning"));
    }

    #[test]
    fn concurrent_tasks_emit_whole_lines() {
        let sink = Sink::default();
        let subscriber = FbLogSubscriber::with_writer(LogFmt::Pretty, sink.clone());

        tracing::subscriber::with_default(subscriber, || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();

            rt.block_on(async {
                async fn first() {
                    fblogi!("first", "before");
                    sleep(Duration::from_millis(50)).await;
                    fblogi!("first", "after");
                }

                async fn second() {
                    sleep(Duration::from_millis(25)).await;
                    fblogi!("second", "going to sleep");
                    sleep(Duration::from_millis(50)).await;
                    fblogi!("second", "awake");
                }

                tokio::join!(first(), second());
            });
        });

        let out = sink.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert!(line.contains(" I/"));
            assert!(line.contains(": "));
        }
        assert!(out.contains("I/first: before"));
        assert!(out.contains("I/second: awake"));
    }
}
