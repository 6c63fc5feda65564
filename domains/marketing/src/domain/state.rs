//! State machine for the campaign lifecycle
//!
//! A campaign moves `draft → scheduled → {sent, failed}`. The two delivery
//! outcomes are terminal: a delivery collaborator reporting with
//! at-least-once semantics may repeat a completion report, and a repeat
//! must not transition or double-apply metrics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot leave {from} via {event}")]
    InvalidTransition { from: String, event: String },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

/// Campaign delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sent,
    Failed,
}

impl CampaignStatus {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sent | Self::Failed)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [CampaignStatus] {
        // No cancel-from-scheduled or retry-from-failed edges yet; adding
        // either means extending this table and the transition match below.
        match self {
            Self::Draft => &[Self::Scheduled],
            Self::Scheduled => &[Self::Sent, Self::Failed],
            Self::Sent => &[],
            Self::Failed => &[],
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Sent => write!(f, "sent"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Events that trigger campaign state transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CampaignEvent {
    /// Operator schedules the campaign
    Schedule,
    /// Delivery collaborator reports the send completed
    Complete,
    /// Delivery collaborator reports the send failed
    Fail,
}

impl std::fmt::Display for CampaignEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Schedule => write!(f, "schedule"),
            Self::Complete => write!(f, "complete"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Campaign state machine
pub struct CampaignStateMachine;

impl CampaignStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: CampaignStatus,
        event: CampaignEvent,
    ) -> Result<CampaignStatus, StateError> {
        // Check for terminal state
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (&current, &event) {
            (CampaignStatus::Draft, CampaignEvent::Schedule) => CampaignStatus::Scheduled,
            (CampaignStatus::Scheduled, CampaignEvent::Complete) => CampaignStatus::Sent,
            (CampaignStatus::Scheduled, CampaignEvent::Fail) => CampaignStatus::Failed,

            // Invalid transitions
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: CampaignStatus, event: &CampaignEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}
