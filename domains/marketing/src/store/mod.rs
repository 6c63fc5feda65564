//! In-memory stores, one per entity kind
//!
//! Each store is an owned, insertion-ordered collection behind explicit
//! operations; callers issue commands and render query results. The
//! discipline is single-writer synchronous mutation, so no store takes a
//! lock.

pub mod campaigns;
pub mod customers;
pub mod groups;
pub mod profiles;
pub mod templates;

pub use campaigns::CampaignStore;
pub use customers::CustomerDirectory;
pub use groups::ContactGroupStore;
pub use profiles::SendingProfileStore;
pub use templates::TemplateStore;
