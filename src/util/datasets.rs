use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use crate::{documents::ProfileSnapshot, Status};

/// Read/write access to the generated JSON datasets on disk.
///
/// Snapshots are read-only captures; every load re-reads the file and there
/// is no caching across requests.
pub struct DatasetStore {
    data_dir: PathBuf,
}

impl DatasetStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> DatasetStore {
        DatasetStore {
            data_dir: data_dir.into(),
        }
    }

    #[instrument(name = "datasets::load_profile", level = "trace", skip(self))]
    pub fn load_profile(&self, steam_id: &str) -> Result<ProfileSnapshot, Status> {
        let path = self.data_dir.join(format!("profile_{steam_id}.json"));
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Status::not_found(format!(
                    "Dataset '{}' was not found",
                    path.display()
                )))
            }
            Err(e) => return Err(Status::from(e)),
        };

        Ok(serde_json::from_str(&text)?)
    }

    /// Writes a document as pretty-printed JSON under the dataset dir.
    #[instrument(name = "datasets::save_json", level = "trace", skip(self, doc))]
    pub fn save_json<T: Serialize>(&self, doc: &T, filename: &str) -> Result<PathBuf, Status> {
        std::fs::create_dir_all(&self.data_dir)?;

        let path = self.data_dir.join(filename);
        std::fs::write(&path, serde_json::to_string_pretty(doc)?)?;
        Ok(path)
    }
}
