// src/handlers/mod.rs

pub mod feedback;
pub mod leaderboard;

use uuid::Uuid;

use crate::{
    error::AppError,
    store::{AnswerStore, ReadScope},
};

/// Opens a read scope and confirms the tenant exists inside it.
async fn open_tenant_scope(
    store: &dyn AnswerStore,
    tenant_id: Uuid,
) -> Result<Box<dyn ReadScope>, AppError> {
    if tenant_id.is_nil() {
        return Err(AppError::BadRequest("tenant id is required".to_string()));
    }

    let mut scope = store.read_scope().await?;
    if !scope.tenant_exists(tenant_id).await? {
        return Err(AppError::NotFound("Tenant not found".to_string()));
    }

    Ok(scope)
}
