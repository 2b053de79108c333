use std::io;

use crate::event::LogEntry;

/// Output format of an installed subscriber.
#[derive(Clone, Copy, Debug)]
pub enum LogFmt {
    Json,
    Pretty,
}

impl LogFmt {
    pub fn format_event<W: io::Write>(&self, entry: &LogEntry, writer: &mut W) -> io::Result<()> {
        match self {
            LogFmt::Json => entry.write_json(writer),
            LogFmt::Pretty => entry.write_pretty(writer),
        }
    }
}
