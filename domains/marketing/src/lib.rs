//! Marketing domain: templates, sending profiles, contact groups, campaigns
//!
//! The one subsystem of Vendora with multi-entity lifecycle logic: an
//! operator creates templates and sending profiles, imports contact
//! groups, and binds a template to a group on a schedule as a campaign
//! whose delivery status moves through a one-way state machine.

pub mod domain;
pub mod export;
pub mod service;
pub mod store;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Campaign, CampaignMetrics, ContactGroup, Customer, CustomerStatus, SendingProfile,
    SendingProfileDraft, Template,
};
pub use domain::state::{CampaignEvent, CampaignStateMachine, CampaignStatus, StateError};

// Re-export store types
pub use store::{
    CampaignStore, ContactGroupStore, CustomerDirectory, SendingProfileStore, TemplateStore,
};

// Re-export service and export boundaries
pub use export::{campaigns_to_csv, customers_to_csv, parse_contact_rows, ContactRow};
pub use service::{DeliveryRequest, MarketingService};
