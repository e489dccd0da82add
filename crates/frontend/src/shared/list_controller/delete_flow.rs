//! Two-phase delete: a confirmation prompt carrying the target id, then at
//! most one delete call per confirmation.

use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletePhase {
    #[default]
    Idle,
    ConfirmPending(String),
    Deleting(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { id: String, message: Option<String> },
    Failed { id: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteFlow {
    phase: DeletePhase,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete clicked on a row. Ignored while another delete is running.
    pub fn request(&mut self, id: impl Into<String>) -> bool {
        if matches!(self.phase, DeletePhase::Deleting(_)) {
            return false;
        }
        self.phase = DeletePhase::ConfirmPending(id.into());
        true
    }

    /// Prompt dismissed; no side effect. Ignored while deleting.
    pub fn cancel(&mut self) {
        if matches!(self.phase, DeletePhase::ConfirmPending(_)) {
            self.phase = DeletePhase::Idle;
        }
    }

    /// Prompt confirmed. Returns the id to delete exactly once; repeated
    /// confirmations while the call is running return `None`.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(&mut self.phase) {
            DeletePhase::ConfirmPending(id) => {
                self.phase = DeletePhase::Deleting(id.clone());
                Some(id)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// The delete call finished; the prompt closes either way
    pub fn finish(&mut self, result: Result<Option<String>, ApiError>) -> Option<DeleteOutcome> {
        if !self.is_busy() {
            return None;
        }
        let DeletePhase::Deleting(id) = std::mem::take(&mut self.phase) else {
            return None;
        };
        Some(match result {
            Ok(message) => DeleteOutcome::Deleted { id, message },
            Err(err) => DeleteOutcome::Failed {
                id,
                message: err.user_message(),
            },
        })
    }

    pub fn phase(&self) -> &DeletePhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DeletePhase::Idle)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, DeletePhase::Deleting(_))
    }

    pub fn target(&self) -> Option<&str> {
        match &self.phase {
            DeletePhase::Idle => None,
            DeletePhase::ConfirmPending(id) | DeletePhase::Deleting(id) => Some(id),
        }
    }
}
