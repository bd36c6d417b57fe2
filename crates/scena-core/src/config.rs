use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Per-user data directory, falling back to `Default` when the
    /// platform offers none.
    pub fn user_data() -> Self {
        dirs::data_dir()
            .map(|base| Self::new(base.join("scena")))
            .unwrap_or_default()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("scena_data")
    }
}
