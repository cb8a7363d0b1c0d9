use std::sync::Arc;

use crate::{config::Config, store::AnswerStore};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnswerStore>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<dyn AnswerStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
