pub mod consent;
pub mod launch;
pub mod meals;
pub mod points;
pub mod status;
pub mod templates;
pub mod version;

use std::path::Path;
use std::sync::Arc;
use tastyroad_core::{LaunchConfig, LaunchPoints, RoutingState};
use tastyroad_store::{JsonFileStore, KeyValueStore, Paths};

/// Services shared by every command, constructed once per process
pub struct App {
    pub paths: Paths,
    pub config: LaunchConfig,
    pub store: Arc<dyn KeyValueStore>,
}

impl App {
    pub fn open(data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let paths = match data_dir {
            Some(dir) => Paths::with_root(dir),
            None => Paths::new()?,
        };
        let config = LaunchConfig::load(&paths.config_file());
        let store = JsonFileStore::open(&paths.store_file())?;

        Ok(Self {
            paths,
            config,
            store: Arc::new(store),
        })
    }

    pub fn routing(&self) -> RoutingState {
        RoutingState::new(self.store.clone())
    }

    pub fn points(&self) -> LaunchPoints {
        LaunchPoints::load(self.store.clone(), &self.config)
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> (tempfile::TempDir, App) {
    let temp = tempfile::TempDir::new().unwrap();
    let app = App::open(Some(temp.path())).unwrap();
    (temp, app)
}
