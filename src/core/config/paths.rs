use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// Set when the path was named explicitly and must exist.
    pub required: bool,
}

impl ConfigPaths {
    pub fn new() -> Self {
        Self {
            rc_path: dirs::home_dir().map(|home| home.join(".krshrc")),
            required: false,
        }
    }

    pub fn explicit(path: impl AsRef<Path>) -> Self {
        Self {
            rc_path: Some(path.as_ref().to_path_buf()),
            required: true,
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
