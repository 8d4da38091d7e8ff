//! Title file reader.

use bench_core::{LoadError, TitleMetadata};
use std::path::Path;
use tracing::debug;

/// Read the run title; the whole file content is the title.
pub fn read_title(path: impl AsRef<Path>) -> Result<TitleMetadata, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, &e))?;
    let title = TitleMetadata::new(text);
    debug!(path = %path.display(), title = %title, "Loaded title");
    Ok(title)
}
