use std::path::{Path, PathBuf};

use crate::{data::read_json, error::resource::ResourceError, model::reply::ReplyCatalog};

/// Location of the reply catalog relative to the resources directory.
pub const REPLIES_FILE: &str = "communication.json";

pub struct ReplyRepository<'a> {
    resources_dir: &'a Path,
}

impl<'a> ReplyRepository<'a> {
    pub fn new(resources_dir: &'a Path) -> Self {
        Self { resources_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.resources_dir.join(REPLIES_FILE)
    }

    pub fn load(&self) -> Result<ReplyCatalog, ResourceError> {
        read_json(&self.path())
    }
}
