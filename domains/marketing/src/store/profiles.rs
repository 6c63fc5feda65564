//! Sending-profile store

use uuid::Uuid;

use vendora_common::{Error, Result};

use crate::domain::entities::{SendingProfile, SendingProfileDraft};

/// Owns the SMTP sending profiles for the session
#[derive(Debug, Default)]
pub struct SendingProfileStore {
    profiles: Vec<SendingProfile>,
}

impl SendingProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile from a form record
    pub fn create(&mut self, draft: SendingProfileDraft) -> Result<SendingProfile> {
        let profile = SendingProfile::new(draft)?;
        tracing::debug!(profile_id = %profile.id, name = %profile.name, "created sending profile");
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    /// Replace all fields of an existing profile.
    /// Fails with `NotFound` on an unknown id, leaving the store unchanged.
    pub fn update(&mut self, id: Uuid, draft: SendingProfileDraft) -> Result<SendingProfile> {
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("Sending profile {} does not exist", id)))?;
        profile.apply_update(draft)?;
        tracing::debug!(profile_id = %id, "updated sending profile");
        Ok(profile.clone())
    }

    /// Remove a profile; idempotent filter-based removal
    pub fn delete(&mut self, id: Uuid) {
        self.profiles.retain(|p| p.id != id);
        tracing::debug!(profile_id = %id, "deleted sending profile");
    }

    /// Profiles in insertion order
    pub fn list(&self) -> &[SendingProfile] {
        &self.profiles
    }

    pub fn get(&self, id: Uuid) -> Option<&SendingProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SendingProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}
