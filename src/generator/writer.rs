use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Filesystem primitives the generator drives, in call order.
pub trait TreeWriter {
    fn create_dir(&mut self, path: &Path) -> Result<()>;
    fn write_file(&mut self, path: &Path, contents: &str, executable: bool) -> Result<()>;
}

/// Writes to disk below `base`.
#[derive(Debug)]
pub struct DiskWriter {
    base: PathBuf,
}

impl DiskWriter {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl TreeWriter for DiskWriter {
    fn create_dir(&mut self, path: &Path) -> Result<()> {
        let dest = self.base.join(path);
        std::fs::create_dir_all(&dest).map_err(|e| ScaffoldError::Io {
            context: format!("creating directory {}", dest.display()),
            source: e,
        })
    }

    fn write_file(&mut self, path: &Path, contents: &str, executable: bool) -> Result<()> {
        let dest = self.base.join(path);
        std::fs::write(&dest, contents).map_err(|e| ScaffoldError::Io {
            context: format!("writing {}", dest.display()),
            source: e,
        })?;
        if executable {
            make_executable(&dest)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
        ScaffoldError::Io {
            context: format!("setting permissions on {}", path.display()),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// A directory or file that a run would create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedEntry {
    Dir(PathBuf),
    File {
        path: PathBuf,
        contents: String,
        executable: bool,
    },
}

impl PlannedEntry {
    pub fn path(&self) -> &Path {
        match self {
            PlannedEntry::Dir(path) => path,
            PlannedEntry::File { path, .. } => path,
        }
    }
}

/// Records every call instead of touching the filesystem. Used for dry runs.
#[derive(Debug, Default)]
pub struct PlanRecorder {
    pub entries: Vec<PlannedEntry>,
}

impl TreeWriter for PlanRecorder {
    fn create_dir(&mut self, path: &Path) -> Result<()> {
        self.entries.push(PlannedEntry::Dir(path.to_path_buf()));
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str, executable: bool) -> Result<()> {
        self.entries.push(PlannedEntry::File {
            path: path.to_path_buf(),
            contents: contents.to_string(),
            executable,
        });
        Ok(())
    }
}
