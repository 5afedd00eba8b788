use crate::{
    config::Config,
    models::{BusinessProfile, DocumentRecord},
    services::gemini::GeminiService,
    storage::ProfileStore,
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub profile: Arc<RwLock<Option<BusinessProfile>>>,
    /// In-memory document vault — records live for the process lifetime
    pub documents: Arc<RwLock<Vec<DocumentRecord>>>,
    pub store: Arc<dyn ProfileStore>,
    pub gemini: GeminiService,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn ProfileStore>,
        initial_profile: Option<BusinessProfile>,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            gemini: GeminiService::new(Arc::clone(&config)),
            config,
            profile: Arc::new(RwLock::new(initial_profile)),
            documents: Arc::new(RwLock::new(Vec::new())),
            store,
        }
    }
}
