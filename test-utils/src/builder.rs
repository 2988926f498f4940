use std::path::PathBuf;

use crate::{context::TestContext, error::TestError};

/// Relative path of the substat table inside a resources directory.
pub const SUBSTATS_FILE: &str = "artifacts/substats.json";

/// Relative path of the reply catalog inside a resources directory.
pub const REPLIES_FILE: &str = "communication.json";

/// Builder for creating test contexts with a populated resources directory.
///
/// Provides a fluent interface for choosing which resource files exist and what
/// they contain, then call `build()` to write them into a fresh temporary directory.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_substats(fixture::substat::table())
///     .with_replies(fixture::reply::catalog())
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Files to write, as (path relative to the resources directory, contents).
    ///
    /// Written in the order they were added; a later file with the same path wins.
    files: Vec<(PathBuf, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no resource files configured.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a raw file to the resources directory.
    ///
    /// Use this for malformed content that cannot be expressed as a JSON value.
    ///
    /// # Arguments
    /// - `relative_path` - Path inside the resources directory; parent directories are created
    /// - `contents` - Exact file contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file(mut self, relative_path: &str, contents: &str) -> Self {
        self.files
            .push((PathBuf::from(relative_path), contents.to_string()));
        self
    }

    /// Adds `artifacts/substats.json` with the given JSON value.
    pub fn with_substats(self, substats: serde_json::Value) -> Self {
        let contents = substats.to_string();
        self.with_file(SUBSTATS_FILE, &contents)
    }

    /// Adds `communication.json` with the given JSON value.
    pub fn with_replies(self, replies: serde_json::Value) -> Self {
        let contents = replies.to_string();
        self.with_file(REPLIES_FILE, &contents)
    }

    /// Builds the test context and writes all configured files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Temporary resources directory with every file in place
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (path, contents) in &self.files {
            context.write_file(path, contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
