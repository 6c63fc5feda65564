//! Common test fixtures for integration tests
//!
//! Seeds a marketing service with the demo data the business console
//! ships with: two templates, three contact groups, one sending profile,
//! and three customers.

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;

use vendora_marketing::{
    ContactRow, Customer, CustomerStatus, MarketingService, SendingProfileDraft,
};

/// Build a service seeded with the demo catalog
pub fn demo_service() -> MarketingService {
    let mut service = MarketingService::new();

    service
        .templates_mut()
        .create(
            "Welcome Email",
            "Welcome to our platform!",
            "Dear {name},\n\nWelcome to our platform! We're excited to have you on board.",
        )
        .unwrap();
    service
        .templates_mut()
        .create("Newsletter", "Latest Updates", "Hi {name},\n\nHere are our latest updates...")
        .unwrap();

    for (name, count) in [
        ("All Customers", 1250u32),
        ("Active Buyers", 850),
        ("Newsletter Subscribers", 2100),
    ] {
        let group = service.groups_mut().create(name).unwrap();
        let rows: Vec<ContactRow> = (0..count)
            .map(|i| ContactRow {
                email: format!("member{}@example.com", i),
                attributes: HashMap::new(),
            })
            .collect();
        service.groups_mut().record_import(group.id, &rows).unwrap();
    }

    service
        .profiles_mut()
        .create(SendingProfileDraft {
            name: "Primary SMTP".to_string(),
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "user@example.com".to_string(),
            password: "hunter2-but-longer".to_string(),
            from_email: "noreply@example.com".to_string(),
            use_tls: true,
        })
        .unwrap();

    for customer in demo_customers() {
        service.customers_mut().insert(customer);
    }

    service
}

/// The three demo customers the console's customer table shows
pub fn demo_customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "John Doe",
            "john.doe@example.com",
            5,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            499.95,
            CustomerStatus::Active,
        )
        .unwrap(),
        Customer::new(
            "Jane Smith",
            "jane.smith@example.com",
            3,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            299.97,
            CustomerStatus::Active,
        )
        .unwrap(),
        Customer::new(
            "Mike Johnson",
            "mike.johnson@example.com",
            1,
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            99.99,
            CustomerStatus::Inactive,
        )
        .unwrap(),
    ]
}
