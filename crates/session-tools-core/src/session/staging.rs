//! Files staged for upload in the current session

use parking_lot::Mutex;

/// Collaborator that owns the files attached to the composer
pub trait FileStaging: Send + Sync {
    /// Drop every staged file
    fn clear(&self);

    /// Number of staged files
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory staging area holding file ids
#[derive(Debug, Default)]
pub struct MemoryFileStaging {
    files: Mutex<Vec<String>>,
}

impl MemoryFileStaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: Mutex::new(files.into_iter().map(Into::into).collect()),
        }
    }

    pub fn stage(&self, file_id: impl Into<String>) {
        self.files.lock().push(file_id.into());
    }

    pub fn files(&self) -> Vec<String> {
        self.files.lock().clone()
    }
}

impl FileStaging for MemoryFileStaging {
    fn clear(&self) {
        self.files.lock().clear();
    }

    fn len(&self) -> usize {
        self.files.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_and_clear() {
        let staging = MemoryFileStaging::with_files(["a"]);
        staging.stage("b");
        assert_eq!(staging.files(), vec!["a", "b"]);

        staging.clear();
        assert!(staging.is_empty());
    }
}
