use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::{CellView, StatsSnapshot};

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write a stats history as JSONL, one snapshot per line, for charting.
///
/// Parent directories are created as needed and an existing file is replaced.
pub fn flush_history_to_jsonl<'a>(
    history: impl IntoIterator<Item = &'a StatsSnapshot>,
    path: &Path,
) -> io::Result<()> {
    write_jsonl(path, history.into_iter())
}

/// Write one frame of cell views as JSONL, for external renderers.
pub fn flush_frame_to_jsonl(cells: impl Iterator<Item = CellView>, path: &Path) -> io::Result<()> {
    write_jsonl(path, cells)
}
