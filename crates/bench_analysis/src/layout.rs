//! Where measurement files live.

use bench_core::types::{ContractDirection, OptionStyle};
use bench_core::{LoadError, MeasurementRecord};
use std::path::{Path, PathBuf};

/// Supplies the measurement record of one (direction, style) pair.
pub trait MeasurementSource {
    /// Record of one file, or why it could not be read
    fn load(
        &self,
        direction: ContractDirection,
        style: OptionStyle,
    ) -> Result<MeasurementRecord, LoadError>;
}

/// Measurement files on disk, named by a template.
///
/// `{direction}` expands to `call`/`put` and `{style}` to the engine's
/// numeric style code, so the default template yields
/// `call_style_0_measurements.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementLayout {
    data_dir: PathBuf,
    template: String,
}

impl MeasurementLayout {
    /// Layout under `data_dir` with a `{direction}`/`{style}` file template
    pub fn new(data_dir: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            template: template.into(),
        }
    }

    /// Layout using `{direction}_style_{style}_measurements.txt`
    pub fn with_default_template(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(data_dir, "{direction}_style_{style}_measurements.txt")
    }

    /// Directory the files are resolved against
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File name of one (direction, style) pair; style is its engine code
    pub fn file_name(&self, direction: ContractDirection, style: OptionStyle) -> String {
        self.template
            .replace("{direction}", direction.name())
            .replace("{style}", &style.code().to_string())
    }

    /// Full path of one (direction, style) pair
    pub fn path_for(&self, direction: ContractDirection, style: OptionStyle) -> PathBuf {
        self.data_dir.join(self.file_name(direction, style))
    }
}

impl MeasurementSource for MeasurementLayout {
    fn load(
        &self,
        direction: ContractDirection,
        style: OptionStyle,
    ) -> Result<MeasurementRecord, LoadError> {
        adapter_loader::load_measurements(self.path_for(direction, style))
    }
}
