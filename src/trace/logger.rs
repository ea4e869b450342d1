use std::{
    fs::{File, OpenOptions},
    io::{LineWriter, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::{debug, warn};

use crate::trace::trace::AnalysisEvent;

struct SinkState {
    writer: LineWriter<File>,
    written: usize,
}

struct TraceSink {
    path: PathBuf,
    state: Mutex<SinkState>,
}

/// JSON-lines sink for [`AnalysisEvent`]s, one line per analysis phase.
///
/// A sink that cannot be opened or written never aborts the analysis; the
/// problem goes to `tracing` and the event is dropped.
pub struct TraceLogger {
    sink: Option<TraceSink>,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                debug!(path = %path.display(), "analysis trace enabled");
                Self {
                    sink: Some(TraceSink {
                        path,
                        state: Mutex::new(SinkState {
                            writer: LineWriter::new(file),
                            written: 0,
                        }),
                    }),
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not open trace file");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Trace file in use, `None` when disabled.
    pub fn path(&self) -> Option<&Path> {
        self.sink.as_ref().map(|s| s.path.as_path())
    }

    /// Events successfully written so far.
    pub fn events_written(&self) -> usize {
        self.sink
            .as_ref()
            .and_then(|s| s.state.lock().ok().map(|state| state.written))
            .unwrap_or(0)
    }

    pub fn log(&self, event: &AnalysisEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                warn!(phase = %event.phase, error = %e, "failed to serialize trace event");
                return;
            }
        };

        let Ok(mut state) = sink.state.lock() else {
            warn!(path = %sink.path.display(), "trace sink lock poisoned");
            return;
        };

        match writeln!(state.writer, "{}", line) {
            Ok(()) => state.written += 1,
            Err(e) => {
                warn!(path = %sink.path.display(), phase = %event.phase, error = %e, "failed to write trace event")
            }
        }
    }
}
