use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::backend::domain::models::event::EventId;
use crate::backend::domain::models::event_result::EventResult;
use crate::backend::storage::traits::ResultStorage;

/// In-memory result repository
#[derive(Clone)]
pub struct ResultRepository {
    connection: Arc<MemoryConnection>,
}

impl ResultRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl ResultStorage for ResultRepository {
    fn store_result(&self, result: &EventResult) -> Result<()> {
        let mut results = self.connection.results_mut()?;
        results.push(result.clone());
        debug!("Stored result for event {} ({} results total)", result.event_id, results.len());
        Ok(())
    }

    fn list_results_for_event(&self, event_id: &EventId) -> Result<Vec<EventResult>> {
        let results = self.connection.results()?;
        Ok(results.iter().filter(|r| r.event_id == *event_id).cloned().collect())
    }

    fn list_results(&self) -> Result<Vec<EventResult>> {
        Ok(self.connection.results()?.clone())
    }
}
