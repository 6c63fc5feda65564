//! Contact-group store

use chrono::Utc;
use uuid::Uuid;

use vendora_common::{Error, Result};

use crate::domain::entities::ContactGroup;
use crate::export::ContactRow;

/// Owns the named recipient segments for the session.
///
/// The store tracks only the cached member count; individual membership is
/// owned by the import collaborator and handed over as clean rows.
#[derive(Debug, Default)]
pub struct ContactGroupStore {
    groups: Vec<ContactGroup>,
}

impl ContactGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group with member count 0
    pub fn create(&mut self, name: &str) -> Result<ContactGroup> {
        let group = ContactGroup::new(name)?;
        tracing::debug!(group_id = %group.id, name = %group.name, "created contact group");
        self.groups.push(group.clone());
        Ok(group)
    }

    /// Remove a group; idempotent filter-based removal
    pub fn delete(&mut self, id: Uuid) {
        self.groups.retain(|g| g.id != id);
        tracing::debug!(group_id = %id, "deleted contact group");
    }

    /// Groups in insertion order
    pub fn list(&self) -> &[ContactGroup] {
        &self.groups
    }

    pub fn get(&self, id: Uuid) -> Option<&ContactGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ContactGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Apply an import: the member count becomes the number of distinct
    /// addresses in the handed-over rows, and the group is stamped updated
    pub fn record_import(&mut self, id: Uuid, rows: &[ContactRow]) -> Result<ContactGroup> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("Contact group {} does not exist", id)))?;

        let mut emails: Vec<&str> = rows.iter().map(|r| r.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();

        group.member_count = emails.len() as u32;
        group.last_updated = Utc::now().date_naive();
        tracing::info!(
            group_id = %id,
            member_count = group.member_count,
            "applied contact import"
        );
        Ok(group.clone())
    }
}
