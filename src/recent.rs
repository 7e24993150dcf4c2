//! Recently planned routes, most recent first.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRoute {
    pub from: String,
    pub to: String,
}

/// Bounded list of route searches with duplicate pairs collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRoutes {
    capacity: usize,
    routes: Vec<RecentRoute>,
}

impl Default for RecentRoutes {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RecentRoutes {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            routes: Vec::with_capacity(capacity),
        }
    }

    pub fn routes(&self) -> &[RecentRoute] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Moves `from -> to` to the front, dropping the oldest entry when full.
    pub fn record(&mut self, from: &str, to: &str) {
        self.routes.retain(|route| route.from != from || route.to != to);
        self.routes.insert(
            0,
            RecentRoute {
                from: from.to_string(),
                to: to.to_string(),
            },
        );
        self.routes.truncate(self.capacity);
    }

    /// Reads a saved list; a missing file yields an empty list.
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let mut recent = Self::with_capacity(capacity);
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => {
                let mut routes: Vec<RecentRoute> = serde_json::from_str(&contents)?;
                routes.truncate(capacity);
                recent.routes = routes;
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.as_ref().display(), "no recent routes file");
            }
            Err(err) => return Err(err.into()),
        }
        Ok(recent)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.routes)?;
        fs::write(path, json)?;
        Ok(())
    }
}
