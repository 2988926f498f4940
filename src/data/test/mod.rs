use test_utils::{builder::TestBuilder, error::TestError, fixture};

use crate::error::resource::ResourceError;

mod substat;
