use std::sync::Arc;

use papyrus_core::AppConfig;
use papyrus_dispatch::ExtractionService;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub service: Arc<ExtractionService>,
}
