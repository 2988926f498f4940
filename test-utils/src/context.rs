use std::path::Path;

use tempfile::TempDir;

use crate::error::TestError;

/// Test environment holding a temporary resources directory.
///
/// The directory and everything in it is removed when the context is dropped, so
/// keep the context alive for as long as the test reads from it.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Creates a test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh directory
    /// - `Err(TestError::Io)` - The temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root of the resources directory, to hand to the code under test.
    pub fn resources_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the resources directory, creating parent directories.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    pub fn write_file(&self, relative_path: &Path, contents: &str) -> Result<(), TestError> {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}
