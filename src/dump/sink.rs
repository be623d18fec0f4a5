//! Where rendered records go.
//!
//! A record is written with a single call so records from concurrent
//! connections never interleave.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Destination for rendered request records.
pub trait DumpSink: Send + Sync {
    /// Write one complete record.
    fn write_record(&self, record: &str) -> io::Result<()>;
}

/// Process standard output. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DumpSink for StdoutSink {
    fn write_record(&self, record: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(record.as_bytes())?;
        out.flush()
    }
}

/// Any writer behind a mutex.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<Vec<u8>> {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buf = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<W: Write + Send> DumpSink for WriterSink<W> {
    fn write_record(&self, record: &str) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(record.as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_appends_whole_records() {
        let sink = WriterSink::new(Vec::new());
        sink.write_record("GET\n/\nBody:\n\n").unwrap();
        sink.write_record("POST\n/x\nBody:\nhi\n").unwrap();
        assert_eq!(sink.contents(), "GET\n/\nBody:\n\nPOST\n/x\nBody:\nhi\n");
        assert_eq!(sink.into_inner().len(), 30);
    }

    #[test]
    fn sinks_are_object_safe() {
        let sink: Box<dyn DumpSink> = Box::new(WriterSink::new(Vec::new()));
        assert!(sink.write_record("x\n").is_ok());
    }
}
