//! Marketing service facade
//!
//! Composes the per-entity stores into the operator-facing workflows:
//! campaign creation with strict reference resolution, delivery reporting
//! with duplicate rejection, delivery bundle preparation, ad hoc customer
//! email, and the async profile connection test.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use vendora_common::{Config, Error, Result};
use vendora_email::probe::{ConnectionTestResult, SmtpProbe};
use vendora_email::{Composer, OutboundMessage};

use crate::domain::entities::{
    Campaign, CampaignMetrics, ContactGroup, SendingProfile, Template,
};
use crate::store::{
    CampaignStore, ContactGroupStore, CustomerDirectory, SendingProfileStore, TemplateStore,
};

/// Everything a delivery collaborator needs to execute a bulk send
#[derive(Debug, Clone)]
pub struct DeliveryRequest {
    pub campaign: Campaign,
    pub template: Template,
    pub group: ContactGroup,
    pub profile: SendingProfile,
}

pub struct MarketingService {
    templates: TemplateStore,
    profiles: SendingProfileStore,
    groups: ContactGroupStore,
    customers: CustomerDirectory,
    campaigns: CampaignStore,
    probe: SmtpProbe,
}

impl MarketingService {
    pub fn new() -> Self {
        Self {
            templates: TemplateStore::new(),
            profiles: SendingProfileStore::new(),
            groups: ContactGroupStore::new(),
            customers: CustomerDirectory::new(),
            campaigns: CampaignStore::new(),
            probe: SmtpProbe::default(),
        }
    }

    /// Build a service with the probe timeout taken from configuration
    pub fn from_config(config: &Config) -> Self {
        let mut service = Self::new();
        service.probe = SmtpProbe::new(std::time::Duration::from_secs(config.probe_timeout_secs));
        service
    }

    // Store accessors: the UI layer issues commands and renders queries
    // through these, never by holding its own mutable copies.

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut TemplateStore {
        &mut self.templates
    }

    pub fn profiles(&self) -> &SendingProfileStore {
        &self.profiles
    }

    pub fn profiles_mut(&mut self) -> &mut SendingProfileStore {
        &mut self.profiles
    }

    pub fn groups(&self) -> &ContactGroupStore {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut ContactGroupStore {
        &mut self.groups
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerDirectory {
        &mut self.customers
    }

    pub fn campaigns(&self) -> &CampaignStore {
        &self.campaigns
    }

    /// Create a campaign, resolving template and group by display name.
    ///
    /// Unlike the loose original flow, an unresolved name blocks creation
    /// instead of persisting a dangling string.
    pub fn create_campaign(
        &mut self,
        name: &str,
        template_name: &str,
        group_name: &str,
        schedule: DateTime<Utc>,
    ) -> Result<Campaign> {
        let template = self.templates.find_by_name(template_name).ok_or_else(|| {
            Error::UnresolvedReference(format!("Template '{}' does not exist", template_name))
        })?;
        let group = self.groups.find_by_name(group_name).ok_or_else(|| {
            Error::UnresolvedReference(format!("Contact group '{}' does not exist", group_name))
        })?;

        let campaign = Campaign::new(name, template, group, schedule)?;
        Ok(self.campaigns.insert(campaign))
    }

    /// Apply a completed-delivery report from the delivery collaborator.
    ///
    /// When the campaign's group still resolves, the reported sent count
    /// may not exceed the group size; if the group was deleted after
    /// creation the guard is skipped (the stale snapshot name is all that
    /// remains).
    pub fn record_sent(&mut self, campaign_id: Uuid, metrics: CampaignMetrics) -> Result<Campaign> {
        let campaign = self
            .campaigns
            .get(campaign_id)
            .ok_or_else(|| Error::NotFound(format!("Campaign {} does not exist", campaign_id)))?;

        if let Some(group) = self.groups.get(campaign.group_id) {
            if metrics.sent_count > group.member_count {
                return Err(Error::Validation(format!(
                    "Sent count {} exceeds group '{}' size {}",
                    metrics.sent_count, group.name, group.member_count
                )));
            }
        }

        self.campaigns.record_sent(campaign_id, metrics)
    }

    /// Apply a failed-delivery report
    pub fn record_failed(&mut self, campaign_id: Uuid) -> Result<Campaign> {
        self.campaigns.record_failed(campaign_id)
    }

    /// Bundle a scheduled campaign with its resolved referents and a
    /// sending profile for handoff to the delivery collaborator
    pub fn prepare_delivery(&self, campaign_id: Uuid, profile_id: Uuid) -> Result<DeliveryRequest> {
        let campaign = self
            .campaigns
            .get(campaign_id)
            .ok_or_else(|| Error::NotFound(format!("Campaign {} does not exist", campaign_id)))?;

        if campaign.status != crate::domain::state::CampaignStatus::Scheduled {
            return Err(Error::Validation(format!(
                "Campaign '{}' is {}, only scheduled campaigns can be dispatched",
                campaign.name, campaign.status
            )));
        }

        let template = self.templates.get(campaign.template_id).ok_or_else(|| {
            Error::UnresolvedReference(format!(
                "Template '{}' was deleted after the campaign was created",
                campaign.template_name
            ))
        })?;
        let group = self.groups.get(campaign.group_id).ok_or_else(|| {
            Error::UnresolvedReference(format!(
                "Contact group '{}' was deleted after the campaign was created",
                campaign.group_name
            ))
        })?;
        let profile = self
            .profiles
            .get(profile_id)
            .ok_or_else(|| Error::NotFound(format!("Sending profile {} does not exist", profile_id)))?;

        Ok(DeliveryRequest {
            campaign: campaign.clone(),
            template: template.clone(),
            group: group.clone(),
            profile: profile.clone(),
        })
    }

    /// Compose an ad hoc message to a single customer, with `{name}`
    /// rendering. The returned message goes to a delivery collaborator;
    /// nothing is stored.
    pub fn email_customer(
        &self,
        customer_id: Uuid,
        subject: &str,
        body: &str,
    ) -> Result<OutboundMessage> {
        let customer = self
            .customers
            .get(customer_id)
            .ok_or_else(|| Error::NotFound(format!("Customer {} does not exist", customer_id)))?;

        Composer::compose_personalized(&customer.email, subject, body, Some(&customer.name))
            .map_err(|e| Error::Validation(e.to_string()))
    }

    /// Probe a sending profile's SMTP endpoint. The inner result is the
    /// test outcome; a failed test is reported, never fatal, and the store
    /// is unaffected either way.
    pub async fn test_connection(&self, profile_id: Uuid) -> Result<ConnectionTestResult> {
        let profile = self
            .profiles
            .get(profile_id)
            .ok_or_else(|| Error::NotFound(format!("Sending profile {} does not exist", profile_id)))?;

        Ok(self.probe.test_connection(&profile.host, profile.port).await)
    }
}

impl Default for MarketingService {
    fn default() -> Self {
        Self::new()
    }
}
