use serde::{Deserialize, Serialize};

use crate::format::FormatMetadata;
use crate::mode::GameMode;

/// A scoring format available in this build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatEntry {
    pub mode: GameMode,
    pub metadata: FormatMetadata,
}
