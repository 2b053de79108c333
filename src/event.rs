use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::Serialize;
use std::io;

use crate::severity::Severity;

const TIMESTAMP_FMT: &str = "%m-%d %H:%M:%S%.3f";

/// A single rendered log line.
pub struct LogEntry<'a> {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub tag: &'a str,
    pub message: &'a str,
}

impl<'a> Serialize for LogEntry<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("LogEntry", 4)?;
        state.serialize_field(
            "timestamp",
            &self.timestamp.format(TIMESTAMP_FMT).to_string(),
        )?;
        state.serialize_field("severity", &self.severity)?;
        state.serialize_field("tag", &self.tag)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

impl<'a> LogEntry<'a> {
    /// One JSON object per line.
    pub fn write_json<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *writer, self).map_err(io::Error::from)?;
        writeln!(writer)
    }

    /// Logcat-style single line, `MM-DD HH:MM:SS.mmm L/tag: message`.
    pub fn write_pretty<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "{time} {letter}/{tag}: {msg}",
            time = self.timestamp.format(TIMESTAMP_FMT),
            letter = self.severity.letter(),
            tag = self.tag,
            msg = self.message,
        )
    }
}

#[cfg(test)]
fn fixed_entry() -> LogEntry<'static> {
    LogEntry {
        timestamp: "2021-07-09T12:34:56.789Z".parse().unwrap(),
        severity: Severity::Error,
        tag: "auth",
        message: "token rejected",
    }
}

#[test]
fn pretty_line() {
    let mut out = Vec::new();
    fixed_entry().write_pretty(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "07-09 12:34:56.789 E/auth: token rejected\n"
    );
}

#[test]
fn json_line() {
    let mut out = Vec::new();
    fixed_entry().write_json(&mut out).unwrap();

    let line = String::from_utf8(out).unwrap();
    assert!(line.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["timestamp"], "07-09 12:34:56.789");
    assert_eq!(value["severity"], "error");
    assert_eq!(value["tag"], "auth");
    assert_eq!(value["message"], "token rejected");
}
