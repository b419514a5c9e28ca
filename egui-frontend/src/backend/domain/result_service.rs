use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::result::{
    PublishResultCommand, PublishResultResult, ResultsForEventQuery, ResultsForEventResult,
};
use crate::backend::domain::errors::DomainError;
use crate::backend::domain::event_service::EventService;
use crate::backend::domain::models::event_result::EventResult;
use crate::backend::storage::memory::{MemoryConnection, ResultRepository};
use crate::backend::storage::traits::ResultStorage;

/// Service for publishing and reading event results
#[derive(Clone)]
pub struct ResultService {
    result_repository: ResultRepository,
    event_service: EventService,
}

impl ResultService {
    /// Create a new ResultService
    pub fn new(connection: Arc<MemoryConnection>, event_service: EventService) -> Self {
        let result_repository = ResultRepository::new(connection);
        Self { result_repository, event_service }
    }

    /// Append a result for an existing event. Text fields are free-form.
    pub fn publish_result(&self, command: PublishResultCommand) -> Result<PublishResultResult> {
        info!("Publishing result for event {}", command.event_id);

        let event = match self.event_service.get_event(&command.event_id)? {
            Some(event) => event,
            None => {
                warn!("Cannot publish result, event not found: {}", command.event_id);
                return Err(DomainError::EventNotFound(command.event_id).into());
            }
        };

        let result = EventResult {
            event_id: event.id,
            student_name: command.student_name.trim().to_string(),
            department: command.department.trim().to_string(),
            position: command.position.trim().to_string(),
        };
        self.result_repository.store_result(&result)?;

        info!("Published result for '{}': {} ({})", event.name, result.student_name, result.position);

        Ok(PublishResultResult { result, event })
    }

    /// All results of one event, in publication order
    pub fn results_for_event(&self, query: ResultsForEventQuery) -> Result<ResultsForEventResult> {
        let event = self
            .event_service
            .get_event(&query.event_id)?
            .ok_or(DomainError::EventNotFound(query.event_id))?;

        let results = self.result_repository.list_results_for_event(&query.event_id)?;
        info!("Found {} results for '{}'", results.len(), event.name);

        Ok(ResultsForEventResult { event, results })
    }
}
