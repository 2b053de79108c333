use serde::Serialize;
use std::convert::TryFrom;
use tracing::Level;

/// Severity of a log line, ordered lowest to highest.
///
/// `Verbose` is the only severity that can be compiled out; see
/// [`crate::VERBOSE_ENABLED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn pretty(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Single-letter code used in pretty output, `V/tag: message` style.
    pub fn letter(self) -> char {
        match self {
            Severity::Verbose => 'V',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Fatal => 'F',
        }
    }

    /// The `tracing` level a log line of this severity is emitted at.
    ///
    /// `Fatal` shares `ERROR` with `Error`; the `severity` field on the
    /// event keeps the two apart.
    pub fn as_level(self) -> Level {
        match self {
            Severity::Verbose => Level::TRACE,
            Severity::Debug => Level::DEBUG,
            Severity::Info => Level::INFO,
            Severity::Warn => Level::WARN,
            Severity::Error | Severity::Fatal => Level::ERROR,
        }
    }

    /// Fallback for events that carry no `severity` field.
    pub(crate) fn from_level(level: &Level) -> Self {
        if *level == Level::TRACE {
            Severity::Verbose
        } else if *level == Level::DEBUG {
            Severity::Debug
        } else if *level == Level::INFO {
            Severity::Info
        } else if *level == Level::WARN {
            Severity::Warn
        } else {
            Severity::Error
        }
    }
}

// Wire values follow the liblog priority numbering, VERBOSE=2 .. FATAL=7.
impl From<Severity> for u64 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Verbose => 2,
            Severity::Debug => 3,
            Severity::Info => 4,
            Severity::Warn => 5,
            Severity::Error => 6,
            Severity::Fatal => 7,
        }
    }
}

impl TryFrom<u64> for Severity {
    type Error = ();

    fn try_from(value: u64) -> Result<Self, ()> {
        match value {
            2 => Ok(Severity::Verbose),
            3 => Ok(Severity::Debug),
            4 => Ok(Severity::Info),
            5 => Ok(Severity::Warn),
            6 => Ok(Severity::Error),
            7 => Ok(Severity::Fatal),
            _ => Err(()),
        }
    }
}

#[test]
fn priority_round_trip() {
    for &severity in &[
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ] {
        assert_eq!(Severity::try_from(u64::from(severity)), Ok(severity));
    }

    assert_eq!(Severity::try_from(0), Err(()));
    assert_eq!(Severity::try_from(1), Err(()));
    assert_eq!(Severity::try_from(8), Err(()));
}

#[test]
fn level_mapping() {
    assert_eq!(Severity::Verbose.as_level(), Level::TRACE);
    assert_eq!(Severity::Debug.as_level(), Level::DEBUG);
    assert_eq!(Severity::Info.as_level(), Level::INFO);
    assert_eq!(Severity::Warn.as_level(), Level::WARN);
    assert_eq!(Severity::Error.as_level(), Level::ERROR);
    assert_eq!(Severity::Fatal.as_level(), Level::ERROR);

    // Levels round-trip through the fallback except for Fatal, which has no
    // level of its own.
    assert_eq!(Severity::from_level(&Level::TRACE), Severity::Verbose);
    assert_eq!(Severity::from_level(&Level::ERROR), Severity::Error);
}

#[test]
fn letters() {
    assert_eq!(Severity::Verbose.letter(), 'V');
    assert_eq!(Severity::Fatal.letter(), 'F');
    assert_eq!(Severity::Warn.pretty(), "warn");
}
