//! Domain entities for the Vendora marketing domain
//!
//! Each entity carries a validating constructor; invalid input is rejected
//! with `Error::Validation` before anything is stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use vendora_common::{Error, Result};

pub use crate::domain::state::CampaignStatus;
use crate::domain::state::{CampaignEvent, CampaignStateMachine, StateError};

/// Reusable email template: subject + body, with `{name}` placeholder
/// support in either field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub last_modified: NaiveDate,
}

impl Template {
    /// Create a new template with validation
    pub fn new(name: &str, subject: &str, body: &str) -> Result<Self> {
        Self::validate_fields(name, subject, body)?;

        Ok(Template {
            id: Uuid::new_v4(),
            name: name.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            last_modified: Utc::now().date_naive(),
        })
    }

    /// Replace all three fields and refresh the last-modified date.
    /// Validates before mutating, so a rejected update leaves the
    /// template untouched.
    pub fn apply_update(&mut self, name: &str, subject: &str, body: &str) -> Result<()> {
        Self::validate_fields(name, subject, body)?;

        self.name = name.to_string();
        self.subject = subject.to_string();
        self.body = body.to_string();
        self.last_modified = Utc::now().date_naive();
        Ok(())
    }

    fn validate_fields(name: &str, subject: &str, body: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "Template name must not be empty".to_string(),
            ));
        }
        if subject.trim().is_empty() {
            return Err(Error::Validation(
                "Template subject must not be empty".to_string(),
            ));
        }
        if body.trim().is_empty() {
            return Err(Error::Validation(
                "Template body must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Form record for creating or updating a sending profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendingProfileDraft {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub use_tls: bool,
}

/// SMTP connection profile used as a campaign's outbound identity
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SendingProfile {
    pub id: Uuid,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Opaque secret; presence is the only check ever applied
    pub password: String,
    pub from_email: String,
    pub use_tls: bool,
}

impl SendingProfile {
    /// Create a new sending profile with validation
    pub fn new(draft: SendingProfileDraft) -> Result<Self> {
        Self::validate_draft(&draft)?;

        Ok(SendingProfile {
            id: Uuid::new_v4(),
            name: draft.name,
            host: draft.host,
            port: draft.port,
            username: draft.username,
            password: draft.password,
            from_email: draft.from_email,
            use_tls: draft.use_tls,
        })
    }

    /// Replace all fields from a form record, keeping the identity
    pub fn apply_update(&mut self, draft: SendingProfileDraft) -> Result<()> {
        Self::validate_draft(&draft)?;

        self.name = draft.name;
        self.host = draft.host;
        self.port = draft.port;
        self.username = draft.username;
        self.password = draft.password;
        self.from_email = draft.from_email;
        self.use_tls = draft.use_tls;
        Ok(())
    }

    fn validate_draft(draft: &SendingProfileDraft) -> Result<()> {
        if draft.name.trim().is_empty() {
            return Err(Error::Validation(
                "Profile name must not be empty".to_string(),
            ));
        }
        if draft.host.trim().is_empty() {
            return Err(Error::Validation("SMTP host must not be empty".to_string()));
        }
        if draft.port == 0 {
            return Err(Error::Validation("SMTP port must be non-zero".to_string()));
        }
        if draft.username.trim().is_empty() {
            return Err(Error::Validation("Username must not be empty".to_string()));
        }
        if draft.password.is_empty() {
            return Err(Error::Validation("Password must not be empty".to_string()));
        }
        if !draft.from_email.validate_email() {
            return Err(Error::Validation(format!(
                "Invalid from address: {}",
                draft.from_email
            )));
        }
        Ok(())
    }
}

// Keep the secret out of logs and panic output
impl std::fmt::Debug for SendingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendingProfile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("from_email", &self.from_email)
            .field("use_tls", &self.use_tls)
            .finish()
    }
}

/// Named recipient segment with a cached member count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactGroup {
    pub id: Uuid,
    pub name: String,
    pub member_count: u32,
    pub last_updated: NaiveDate,
}

impl ContactGroup {
    /// Create a new, empty group; counts are populated by the import
    /// collaborator
    pub fn new(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "Group name must not be empty".to_string(),
            ));
        }

        Ok(ContactGroup {
            id: Uuid::new_v4(),
            name: name.to_string(),
            member_count: 0,
            last_updated: Utc::now().date_naive(),
        })
    }
}

/// Customer account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub total_purchases: u32,
    pub last_purchase: NaiveDate,
    pub total_spent: f64,
    pub status: CustomerStatus,
}

impl Customer {
    /// Create a new customer with validation
    pub fn new(
        name: &str,
        email: &str,
        total_purchases: u32,
        last_purchase: NaiveDate,
        total_spent: f64,
        status: CustomerStatus,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "Customer name must not be empty".to_string(),
            ));
        }
        if !email.validate_email() {
            return Err(Error::Validation(format!("Invalid email address: {}", email)));
        }
        if total_spent < 0.0 {
            return Err(Error::Validation(
                "Total spent cannot be negative".to_string(),
            ));
        }

        Ok(Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            total_purchases,
            last_purchase,
            total_spent,
            status,
        })
    }

    /// Case-insensitive match against name or email
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }
}

/// Post-send performance metrics, present only on sent campaigns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub sent_count: u32,
    pub open_rate: f32,
    pub click_rate: f32,
}

impl CampaignMetrics {
    /// Create metrics with percentage validation
    pub fn new(sent_count: u32, open_rate: f32, click_rate: f32) -> Result<Self> {
        if !(0.0..=100.0).contains(&open_rate) {
            return Err(Error::Validation(format!(
                "Open rate must be within 0-100, got {}",
                open_rate
            )));
        }
        if !(0.0..=100.0).contains(&click_rate) {
            return Err(Error::Validation(format!(
                "Click rate must be within 0-100, got {}",
                click_rate
            )));
        }

        Ok(CampaignMetrics {
            sent_count,
            open_rate,
            click_rate,
        })
    }
}

/// Scheduled binding of one template to one contact group.
///
/// References are resolved to ids at creation time; the name snapshots are
/// kept for display so listings still render after the referent is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub template_id: Uuid,
    pub template_name: String,
    pub group_id: Uuid,
    pub group_name: String,
    pub schedule: DateTime<Utc>,
    pub status: CampaignStatus,
    pub metrics: Option<CampaignMetrics>,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a campaign against already-resolved referents.
    ///
    /// New campaigns enter `scheduled` directly; a separate save-as-draft
    /// stage is not exposed, though `draft` remains a loadable status.
    pub fn new(
        name: &str,
        template: &Template,
        group: &ContactGroup,
        schedule: DateTime<Utc>,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "Campaign name must not be empty".to_string(),
            ));
        }

        Ok(Campaign {
            id: Uuid::new_v4(),
            name: name.to_string(),
            template_id: template.id,
            template_name: template.name.clone(),
            group_id: group.id,
            group_name: group.name.clone(),
            schedule,
            status: CampaignStatus::Scheduled,
            metrics: None,
            created_at: Utc::now(),
        })
    }

    /// Apply a completed-delivery report
    pub fn record_sent(&mut self, metrics: CampaignMetrics) -> std::result::Result<(), StateError> {
        let next = CampaignStateMachine::transition(self.status, CampaignEvent::Complete)?;
        self.status = next;
        self.metrics = Some(metrics);
        Ok(())
    }

    /// Apply a failed-delivery report; no partial metrics are retained
    pub fn record_failed(&mut self) -> std::result::Result<(), StateError> {
        let next = CampaignStateMachine::transition(self.status, CampaignEvent::Fail)?;
        self.status = next;
        self.metrics = None;
        Ok(())
    }
}
