//! Customer Email Integration Tests
//!
//! Validates the ad hoc single-customer path end to end through the mock
//! delivery service, plus the customer export boundary.

use vendora_common::Error;
use vendora_email::mock::MockDeliveryService;
use vendora_email::EmailDelivery;
use vendora_marketing::customers_to_csv;

mod common;

#[tokio::test]
async fn test_ad_hoc_customer_email_through_mock_delivery() {
    let service = common::demo_service();
    let delivery = MockDeliveryService::new();

    let customer = service.customers().find_by_email("jane.smith@example.com").unwrap();
    let message = service
        .email_customer(
            customer.id,
            "Your order shipped",
            "Hi {name},\n\nYour order is on the way.",
        )
        .unwrap();

    let receipt = delivery.send(message).await.unwrap();
    assert_eq!(receipt.provider, "mock");

    let captured = delivery
        .latest_for_recipient("jane.smith@example.com")
        .unwrap();
    assert_eq!(captured.message.subject, "Your order shipped");
    assert_eq!(
        captured.message.body_text,
        "Hi Jane Smith,\n\nYour order is on the way."
    );
    assert_eq!(delivery.message_count(), 1);
}

#[test]
fn test_ad_hoc_email_rejects_empty_subject() {
    let service = common::demo_service();
    let customer = service.customers().find_by_email("john.doe@example.com").unwrap();

    let result = service.email_customer(customer.id, "", "Hi {name}");
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[test]
fn test_customer_search_and_status_filter() {
    let service = common::demo_service();

    let active = service
        .customers()
        .search("", Some(vendora_marketing::CustomerStatus::Active));
    assert_eq!(active.len(), 2);

    let by_name = service.customers().search("mike", None);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].email, "mike.johnson@example.com");
}

#[test]
fn test_customer_export_matches_console_format() {
    let service = common::demo_service();
    let csv = customers_to_csv(service.customers().list()).unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines.len(), 4); // header + 3 customers
    assert_eq!(
        lines[0],
        "Name,Email,Total Purchases,Last Purchase,Total Spent,Status"
    );
    assert_eq!(
        lines[2],
        "Jane Smith,jane.smith@example.com,3,2024-03-10,299.97,active"
    );
}
