use std::path::{Path, PathBuf};

use crate::{
    data::read_json,
    error::resource::ResourceError,
    model::artifact::{RawSubstatTable, SubstatTable},
};

/// Location of the roll populations relative to the resources directory.
pub const SUBSTATS_FILE: &str = "artifacts/substats.json";

pub struct SubstatRepository<'a> {
    resources_dir: &'a Path,
}

impl<'a> SubstatRepository<'a> {
    pub fn new(resources_dir: &'a Path) -> Self {
        Self { resources_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.resources_dir.join(SUBSTATS_FILE)
    }

    /// Loads and validates every roll population.
    ///
    /// # Returns
    /// - `Ok(SubstatTable)` - All populations are non-empty and strictly positive
    /// - `Err(ResourceError)` - File unreadable, malformed, or holding an invalid population
    pub fn load(&self) -> Result<SubstatTable, ResourceError> {
        let raw: RawSubstatTable = read_json(&self.path())?;
        SubstatTable::from_raw(raw)
    }
}
