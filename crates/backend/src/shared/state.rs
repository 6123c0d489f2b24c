use contracts::system::users::User;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::a001_project::seed::SeedData;
use crate::domain::a001_project::ProjectStore;

/// Общее состояние сервера
///
/// The store is the single shared resource. Every handler goes through the
/// lock, so reads and mutations never interleave.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProjectStore>>,
    pub users: Arc<Vec<User>>,
}

impl AppState {
    pub fn new(store: ProjectStore, users: Vec<User>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            users: Arc::new(users),
        }
    }

    pub fn from_seed(seed: &SeedData) -> Self {
        Self::new(ProjectStore::from_seed(seed), seed.users.clone())
    }
}
