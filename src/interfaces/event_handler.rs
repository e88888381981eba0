// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculation requests and outcomes
// ============================================================================

use crate::domain::{CalculationId, OperandSlot};
use crate::engine::CalcError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Events emitted by the calculator for every request
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationEvent {
    /// Request received with this many operand fields
    Requested {
        id: CalculationId,
        operand_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// An operand failed to parse or was out of range
    OperandRejected {
        id: CalculationId,
        slot: OperandSlot,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Evaluation finished and the result was formatted
    Completed {
        id: CalculationId,
        display: String,
        timestamp: DateTime<Utc>,
    },

    /// Evaluation aborted with an error
    Failed {
        id: CalculationId,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    pub fn id(&self) -> CalculationId {
        match self {
            CalculationEvent::Requested { id, .. }
            | CalculationEvent::OperandRejected { id, .. }
            | CalculationEvent::Completed { id, .. }
            | CalculationEvent::Failed { id, .. } => *id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Failed { id, error, .. } => {
                tracing::warn!(%id, %error, "calculation failed");
            }
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, e.g. for a history panel.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far, oldest first.
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requested(id: CalculationId) -> CalculationEvent {
        CalculationEvent::Requested {
            id,
            operand_count: 2,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(requested(CalculationId::new()));
        // Should not panic
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        let id = CalculationId::new();
        handler.on_event(requested(id));
        handler.on_events(vec![CalculationEvent::Completed {
            id,
            display: "13".to_string(),
            timestamp: Utc::now(),
        }]);

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.id() == id));

        handler.clear();
        assert_eq!(handler.len(), 0);
    }
}
