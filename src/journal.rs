//! Event journal - one JSON object per line.
//!
//! Every record carries `type`, `seq` (starting at 1) and `ts` (milliseconds
//! since the session started), followed by the event's own fields:
//!
//! ```text
//! {"type":"spawned","seq":1,"ts":0,"kind":"T","color":[12,200,80],"next":"O"}
//! {"type":"locked","seq":9,"ts":1840,"kind":"T","cells":[[13,4],[14,3],[14,4],[14,5]],"full_rows":[14],"score":1}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::CoreEvent;
use crate::types::Rgb;

#[derive(Debug, Serialize)]
struct Record<'a> {
    #[serde(rename = "type")]
    event: &'static str,
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    detail: Detail<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Detail<'a> {
    Spawned {
        kind: &'static str,
        color: [u8; 3],
        next: &'static str,
    },
    Moved {
        center_row: i8,
        center_column: i8,
    },
    Locked {
        kind: &'static str,
        cells: &'a [(usize, usize); 4],
        full_rows: &'a [usize],
        score: u32,
    },
    Collapsed {
        rows: &'a [usize],
    },
    ToppedOut {
        kind: &'static str,
        score: u32,
    },
    Restarted {
        seed: u32,
    },
    Bare {},
}

impl<'a> From<&'a CoreEvent> for Detail<'a> {
    fn from(event: &'a CoreEvent) -> Self {
        match event {
            CoreEvent::Spawned { kind, color, next } => Detail::Spawned {
                kind: kind.as_str(),
                color: rgb(*color),
                next: next.as_str(),
            },
            CoreEvent::Moved {
                center_row,
                center_column,
            } => Detail::Moved {
                center_row: *center_row,
                center_column: *center_column,
            },
            CoreEvent::Locked {
                kind,
                cells,
                full_rows,
                score,
            } => Detail::Locked {
                kind: kind.as_str(),
                cells,
                full_rows: full_rows.as_slice(),
                score: *score,
            },
            CoreEvent::Collapsed { rows } => Detail::Collapsed {
                rows: rows.as_slice(),
            },
            CoreEvent::ToppedOut { kind, score } => Detail::ToppedOut {
                kind: kind.as_str(),
                score: *score,
            },
            CoreEvent::Restarted { seed } => Detail::Restarted { seed: *seed },
            CoreEvent::Rotated | CoreEvent::Paused | CoreEvent::Resumed => Detail::Bare {},
        }
    }
}

fn rgb(c: Rgb) -> [u8; 3] {
    [c.r, c.g, c.b]
}

pub struct Journal<W: Write> {
    out: W,
    seq: u64,
    line: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Append to (or create) the file at `path`.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            line: Vec::with_capacity(256),
        }
    }

    /// Number of records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, event: &CoreEvent, ts_ms: u64) -> Result<()> {
        self.seq += 1;
        let record = Record {
            event: event.name(),
            seq: self.seq,
            ts: ts_ms,
            detail: Detail::from(event),
        };

        self.line.clear();
        serde_json::to_writer(&mut self.line, &record).context("encode journal record")?;
        self.line.push(b'\n');
        self.out
            .write_all(&self.line)
            .context("write journal record")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush journal")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
