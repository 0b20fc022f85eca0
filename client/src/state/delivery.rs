//! Courier task-board state.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use crate::net::error::ApiError;
use crate::net::types::{DeliveryTask, DeliveryTaskStatus};

#[derive(Clone, Debug, Default)]
pub struct DeliveryBoardState {
    pub tasks: Vec<DeliveryTask>,
    pub loading: bool,
    /// Last load failure; the previous task list stays on screen.
    pub error: Option<String>,
    /// Task whose accept call is in flight.
    pub accepting: Option<String>,
}

impl DeliveryBoardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<DeliveryTask>, ApiError>) {
        self.loading = false;
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => self.error = Some(e.user_message("Failed to load delivery tasks")),
        }
    }

    /// Only unassigned tasks can be accepted, one at a time.
    pub fn can_accept(&self, task: &DeliveryTask) -> bool {
        task.status == DeliveryTaskStatus::Pending && self.accepting.is_none()
    }

    pub fn open_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == DeliveryTaskStatus::Pending)
            .count()
    }
}

/// Line shown under a task that is no longer open.
pub fn assignment_note(task: &DeliveryTask) -> Option<String> {
    if task.status == DeliveryTaskStatus::Pending {
        return None;
    }
    Some(match task.courier_id.as_deref().filter(|c| !c.is_empty()) {
        Some(courier) => format!("Taken by courier {courier}"),
        None => "Already taken".to_owned(),
    })
}
