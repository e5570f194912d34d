//! Persistence of per-worker result records.
//!
//! Every worker owns a fixed-size region of the output, so concurrent writers
//! never overlap and need no coordination.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("record for worker {worker} is {len} bytes but a slot holds {slot}")]
    RecordTooLarge { worker: usize, len: usize, slot: usize },
    #[error("i/o on {path} for worker {worker}")]
    Io {
        worker: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait ResultSink: Sync {
    fn write(&self, worker: usize, record: &str) -> Result<(), SinkError>;
}

/// Writes worker `n`'s record at byte offset `n * slot_bytes` of one file,
/// padded with spaces and terminated by a newline.
#[derive(Debug, Clone)]
pub struct SlotFileSink {
    path: PathBuf,
    slot_bytes: usize,
}

impl SlotFileSink {
    /// Create (or truncate) the output file.
    pub fn create(path: &Path, slot_bytes: usize) -> io::Result<Self> {
        File::create(path)?;
        Ok(Self::open(path, slot_bytes))
    }

    /// Attach to an existing output file without truncating it.
    pub fn open(path: &Path, slot_bytes: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            slot_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn offset(&self, worker: usize) -> u64 {
        (worker * self.slot_bytes) as u64
    }

    fn io_err(&self, worker: usize) -> impl FnOnce(io::Error) -> SinkError + '_ {
        move |source| SinkError::Io {
            worker,
            path: self.path.clone(),
            source,
        }
    }

    /// Read a worker's record back, or `None` if its slot was never written.
    pub fn read(&self, worker: usize) -> Result<Option<String>, SinkError> {
        let mut file = File::open(&self.path).map_err(self.io_err(worker))?;
        let len = file.metadata().map_err(self.io_err(worker))?.len();
        if len < self.offset(worker) + self.slot_bytes as u64 {
            return Ok(None);
        }

        let mut buf = vec![0u8; self.slot_bytes];
        file.seek(SeekFrom::Start(self.offset(worker)))
            .map_err(self.io_err(worker))?;
        file.read_exact(&mut buf).map_err(self.io_err(worker))?;

        // Unwritten gaps below a later worker's slot read back as zeros.
        if buf.iter().all(|&b| b == 0) {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        Ok(Some(text.trim_end().to_string()))
    }
}

impl ResultSink for SlotFileSink {
    fn write(&self, worker: usize, record: &str) -> Result<(), SinkError> {
        // one byte is kept for the trailing newline
        if record.len() >= self.slot_bytes {
            return Err(SinkError::RecordTooLarge {
                worker,
                len: record.len(),
                slot: self.slot_bytes,
            });
        }

        let mut buf = Vec::with_capacity(self.slot_bytes);
        buf.extend_from_slice(record.as_bytes());
        buf.resize(self.slot_bytes - 1, b' ');
        buf.push(b'\n');

        let mut file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(self.io_err(worker))?;
        file.seek(SeekFrom::Start(self.offset(worker)))
            .map_err(self.io_err(worker))?;
        file.write_all(&buf).map_err(self.io_err(worker))?;
        Ok(())
    }
}

/// Keeps records in memory, keyed by worker
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<BTreeMap<usize, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> BTreeMap<usize, String> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ResultSink for MemorySink {
    fn write(&self, worker: usize, record: &str) -> Result<(), SinkError> {
        let mut guard = match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.insert(worker, record.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod sink_tests;
