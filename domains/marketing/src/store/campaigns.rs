//! Campaign store
//!
//! Owns the campaigns and applies delivery reports through the state
//! machine. Terminal states are one-way, so a repeated report from an
//! at-least-once delivery collaborator is rejected without mutating
//! anything.

use uuid::Uuid;

use vendora_common::{Error, Result};

use crate::domain::entities::{Campaign, CampaignMetrics};
use crate::domain::state::StateError;

#[derive(Debug, Default)]
pub struct CampaignStore {
    campaigns: Vec<Campaign>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-validated campaign (creation and reference
    /// resolution live in the marketing service)
    pub fn insert(&mut self, campaign: Campaign) -> Campaign {
        tracing::info!(
            campaign_id = %campaign.id,
            name = %campaign.name,
            status = %campaign.status,
            "campaign created"
        );
        self.campaigns.push(campaign.clone());
        campaign
    }

    /// Campaigns in creation order; no secondary sort
    pub fn list(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn get(&self, id: Uuid) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    /// Apply a completed-delivery report: `scheduled → sent` with metrics
    pub fn record_sent(&mut self, id: Uuid, metrics: CampaignMetrics) -> Result<Campaign> {
        let campaign = self.get_mut(id)?;
        campaign
            .record_sent(metrics)
            .map_err(|e| map_state_error(id, e))?;
        tracing::info!(campaign_id = %id, sent_count = metrics.sent_count, "campaign sent");
        Ok(campaign.clone())
    }

    /// Apply a failed-delivery report: `scheduled → failed`, no metrics
    pub fn record_failed(&mut self, id: Uuid) -> Result<Campaign> {
        let campaign = self.get_mut(id)?;
        campaign.record_failed().map_err(|e| map_state_error(id, e))?;
        tracing::warn!(campaign_id = %id, "campaign delivery failed");
        Ok(campaign.clone())
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Campaign> {
        self.campaigns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Campaign {} does not exist", id)))
    }
}

/// Map state-machine failures onto the common taxonomy: a report against a
/// terminal campaign is a duplicate, anything else is caller error
fn map_state_error(id: Uuid, e: StateError) -> Error {
    match e {
        StateError::TerminalState(state) => Error::DuplicateReport(format!(
            "Campaign {} is already {} and cannot be reported again",
            id, state
        )),
        other => Error::Validation(other.to_string()),
    }
}
