use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::services::auth_provider::AuthProvider;
use crate::services::practice::PracticeEngine;
use crate::store::{ProgressRecorder, QuestionStore};

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    config: Arc<Config>,
    auth: Arc<AuthProvider>,
    engine: Arc<PracticeEngine>,
}

impl AppState {
    pub fn new(config: Config, auth: AuthProvider, engine: PracticeEngine) -> Self {
        Self {
            started_at: Instant::now(),
            config: Arc::new(config),
            auth: Arc::new(auth),
            engine: Arc::new(engine),
        }
    }

    /// Wires the default collaborators: the auth delegate plus the practice
    /// engine over the two capability-scoped store clients.
    pub fn from_config(config: Config) -> Self {
        let auth = AuthProvider::from_config(&config);
        let questions = QuestionStore::from_config(&config);
        let progress = ProgressRecorder::from_config(&config);
        let engine = PracticeEngine::new(Arc::new(questions), Arc::new(progress));
        Self::new(config, auth, engine)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn auth(&self) -> Arc<AuthProvider> {
        Arc::clone(&self.auth)
    }

    pub fn engine(&self) -> Arc<PracticeEngine> {
        Arc::clone(&self.engine)
    }
}
