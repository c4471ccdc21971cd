//! JSONL transcript writer
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying `type` and
//! `timestamp`. Each line goes to the file in a single append.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;
use tutor_application::{ConversationEvent, ConversationLogger};

/// Transcript logger writing one JSON object per line
///
/// Opens in append mode so several sessions can share a file.
pub struct JsonlConversationLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One transcript line. `type` and `timestamp` come first and win over
/// payload fields of the same name; a non-object payload sits under `data`.
fn record(event: ConversationEvent, timestamp: String) -> Value {
    let mut map = Map::new();
    map.insert("type".into(), Value::from(event.event_type));
    map.insert("timestamp".into(), Value::from(timestamp));

    match event.payload {
        Value::Object(fields) => {
            for (key, value) in fields {
                map.entry(key).or_insert(value);
            }
        }
        other => {
            map.insert("data".into(), other);
        }
    }
    Value::Object(map)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut line = record(event, timestamp).to_string();
        line.push('\n');

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = file.write_all(line.as_bytes()) {
            warn!("Could not write transcript {}: {}", self.path.display(), e);
        }
    }
}
