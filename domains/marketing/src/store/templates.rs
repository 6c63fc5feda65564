//! Template store

use uuid::Uuid;

use vendora_common::{Error, Result};

use crate::domain::entities::Template;

/// Owns the named email templates for the session
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a template with a fresh identity and today's date
    pub fn create(&mut self, name: &str, subject: &str, body: &str) -> Result<Template> {
        let template = Template::new(name, subject, body)?;
        tracing::debug!(template_id = %template.id, name = %template.name, "created email template");
        self.templates.push(template.clone());
        Ok(template)
    }

    /// Replace all fields of an existing template.
    /// Fails with `NotFound` on an unknown id, leaving the store unchanged.
    pub fn update(&mut self, id: Uuid, name: &str, subject: &str, body: &str) -> Result<Template> {
        let template = self
            .templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("Template {} does not exist", id)))?;
        template.apply_update(name, subject, body)?;
        tracing::debug!(template_id = %id, "updated email template");
        Ok(template.clone())
    }

    /// Remove a template. Filter-based removal: deleting an absent id is a
    /// no-op, so delete is idempotent.
    pub fn delete(&mut self, id: Uuid) {
        self.templates.retain(|t| t.id != id);
        tracing::debug!(template_id = %id, "deleted email template");
    }

    /// Templates in insertion order
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: Uuid) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Resolve a template by its display name (exact match)
    pub fn find_by_name(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }
}
