//! Vendora Email Service
//!
//! Provides email functionality for the marketing module with support for:
//! - Composing and validating single outbound messages
//! - Placeholder rendering for templated content
//! - A delivery trait implemented by real transports and the mock service
//! - An async SMTP connection probe with bounded timeout

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

pub mod content;
pub mod mock;
pub mod probe;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    Configuration(String),

    #[error("Email validation error: {0}")]
    Validation(String),

    #[error("Email delivery error: {0}")]
    Delivery(String),
}

/// Email message packaged for handoff to a delivery collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub to: String,
    /// Filled in from the sending profile at delivery time when absent
    pub from: Option<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl OutboundMessage {
    /// Create a new outbound message
    pub fn new(to: String, subject: String, body_text: String) -> Self {
        Self {
            to,
            from: None,
            reply_to: None,
            subject,
            body_text,
            body_html: None,
            metadata: HashMap::new(),
        }
    }

    /// Set an explicit from address
    pub fn with_from(mut self, from: String) -> Self {
        self.from = Some(from);
        self
    }

    /// Add HTML body content
    pub fn with_html(mut self, body_html: String) -> Self {
        self.body_html = Some(body_html);
        self
    }

    /// Add reply-to address
    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Add metadata for tracking
    pub fn with_metadata(mut self, key: String, value: String) -> Self {
        self.metadata.insert(key, value);
        self
    }
}

/// Email delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub message_id: String,
    pub sent_at: DateTime<Utc>,
    pub provider: String,
    pub metadata: HashMap<String, String>,
}

/// Validates and packages a single outbound message.
///
/// Both the ad hoc single-customer path and a campaign firing funnel
/// through this contract; campaign sends render placeholders first
/// (see [`content`]).
pub struct Composer;

impl Composer {
    /// Package a message, rejecting malformed input before anything is sent
    pub fn compose(to: &str, subject: &str, body: &str) -> Result<OutboundMessage, EmailError> {
        if !to.validate_email() {
            return Err(EmailError::Validation(format!(
                "Invalid recipient address: {}",
                to
            )));
        }
        if subject.trim().is_empty() {
            return Err(EmailError::Validation(
                "Subject must not be empty".to_string(),
            ));
        }
        if body.trim().is_empty() {
            return Err(EmailError::Validation(
                "Message body must not be empty".to_string(),
            ));
        }

        Ok(OutboundMessage::new(
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ))
    }

    /// Render `{name}` placeholders for the recipient, then compose
    pub fn compose_personalized(
        to: &str,
        subject: &str,
        body: &str,
        recipient_name: Option<&str>,
    ) -> Result<OutboundMessage, EmailError> {
        let (subject, body) = content::personalize(subject, body, recipient_name);
        Self::compose(to, &subject, &body)
    }
}

/// Delivery trait for different transport implementations
#[async_trait::async_trait]
pub trait EmailDelivery: Send + Sync {
    /// Send an outbound message
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, EmailError>;

    /// Name of the underlying provider
    fn provider_name(&self) -> &'static str;

    /// Verify the transport is reachable
    async fn health_check(&self) -> Result<(), EmailError>;
}
