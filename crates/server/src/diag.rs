#![forbid(unsafe_code)]

use serde_json::Value;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Fire-and-forget diagnostics port. Appending must never block a response
/// or fail one: implementations swallow their own I/O errors.
pub(crate) trait DiagnosticsSink {
    fn append(&self, record: Value);
}

pub(crate) struct NullSink;

impl DiagnosticsSink for NullSink {
    fn append(&self, _record: Value) {}
}

/// Append-only JSON-lines file, one record per dispatched request. Written
/// best-effort into the configured log directory; request bodies are never
/// recorded, only ids, tool names, and outcomes.
pub(crate) struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub(crate) fn new(dir: &Path) -> Self {
        let _ = std::fs::create_dir_all(dir);
        Self {
            path: dir.join("hb_server_diag.jsonl"),
        }
    }
}

impl DiagnosticsSink for FileSink {
    fn append(&self, record: Value) {
        let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        else {
            return;
        };
        let _ = writeln!(file, "{record}");
    }
}
