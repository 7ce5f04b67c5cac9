use std::path::{Path, PathBuf};

use lexis_types::SessionStats;

use crate::{Result, persist};

/// Review statistics persisted next to the history file
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    stats: SessionStats,
}

impl StatsStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stats = persist::load_or_default(&path);
        Self { path, stats }
    }

    pub fn save(&self) -> Result<()> {
        persist::save(&self.path, &self.stats)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SessionStats {
        &mut self.stats
    }
}
