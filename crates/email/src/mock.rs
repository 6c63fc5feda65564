//! Mock Delivery Service Implementation
//!
//! Provides in-memory message capture for testing without external
//! dependencies. Campaign workflow tests inspect captured messages to
//! validate composition and personalization.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{DeliveryReceipt, EmailDelivery, EmailError, OutboundMessage};

/// Message captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedMessage {
    pub message: OutboundMessage,
    pub receipt: DeliveryReceipt,
    pub captured_at: DateTime<Utc>,
}

/// Mock delivery service for testing
#[derive(Debug, Clone)]
pub struct MockDeliveryService {
    messages: Arc<Mutex<Vec<CapturedMessage>>>,
    by_recipient: Arc<Mutex<HashMap<String, Vec<CapturedMessage>>>>,
    enabled: bool,
}

impl MockDeliveryService {
    /// Create a new mock delivery service
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            by_recipient: Arc::new(Mutex::new(HashMap::new())),
            enabled: true,
        }
    }

    /// Create a disabled mock delivery service (for testing)
    pub fn new_disabled() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            by_recipient: Arc::new(Mutex::new(HashMap::new())),
            enabled: false,
        }
    }

    /// Get all captured messages
    pub fn all_messages(&self) -> Vec<CapturedMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Get messages sent to a specific recipient
    pub fn messages_for_recipient(&self, email: &str) -> Vec<CapturedMessage> {
        self.by_recipient
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    /// Get the most recent message for a recipient
    pub fn latest_for_recipient(&self, email: &str) -> Option<CapturedMessage> {
        self.messages_for_recipient(email)
            .into_iter()
            .max_by_key(|m| m.captured_at)
    }

    /// Get count of messages sent
    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    /// Clear all captured messages
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
        self.by_recipient.lock().unwrap().clear();
    }

    /// Check if delivery is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for MockDeliveryService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailDelivery for MockDeliveryService {
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, EmailError> {
        if !self.enabled {
            tracing::warn!("Mock delivery service disabled, skipping send");
            return Ok(DeliveryReceipt {
                message_id: format!("disabled-{}", Uuid::new_v4()),
                sent_at: Utc::now(),
                provider: "mock-disabled".to_string(),
                metadata: message.metadata.clone(),
            });
        }

        tracing::info!("Mock delivery service capturing message to: {}", message.to);

        let receipt = DeliveryReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
            metadata: message.metadata.clone(),
        };

        let captured = CapturedMessage {
            message: message.clone(),
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        };

        // Store message in global list
        self.messages.lock().unwrap().push(captured.clone());

        // Store message by recipient for easy lookup
        self.by_recipient
            .lock()
            .unwrap()
            .entry(message.to)
            .or_default()
            .push(captured);

        Ok(receipt)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    async fn health_check(&self) -> Result<(), EmailError> {
        // Mock service is always healthy
        Ok(())
    }
}
