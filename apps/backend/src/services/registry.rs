use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::config::TableConfig;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::services::table_actor::{TableActor, TableHandle};

/// Live tables by id.
#[derive(Default)]
pub struct TableRegistry {
    tables: DashMap<Uuid, TableHandle>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a table with `config` and register it under a fresh id.
    pub fn create(&self, config: TableConfig) -> Result<TableHandle, AppError> {
        let table_id = Uuid::new_v4();
        let handle = TableActor::spawn(table_id, config)?;
        self.tables.insert(table_id, handle.clone());
        info!(%table_id, tables = self.tables.len(), "Table registered");
        Ok(handle)
    }

    pub fn get(&self, table_id: Uuid) -> Result<TableHandle, AppError> {
        self.tables
            .get(&table_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found(table_id))
    }

    /// Unregister the table and stop its actor.
    pub async fn close(&self, table_id: Uuid) -> Result<(), AppError> {
        let (_, handle) = self
            .tables
            .remove(&table_id)
            .ok_or_else(|| not_found(table_id))?;
        info!(%table_id, "Table unregistered");
        // Already stopped is as good as stopped.
        match handle.shutdown().await {
            Ok(()) | Err(AppError::TableClosed { .. }) => Ok(()),
            Err(err) => Err(err),
        }
    }

    pub fn table_ids(&self) -> Vec<Uuid> {
        self.tables.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn not_found(table_id: Uuid) -> AppError {
    DomainError::not_found(NotFoundKind::Table, format!("Table {table_id} not found")).into()
}
