//! Campaign Workflow Integration Tests
//!
//! Exercises the full campaign lifecycle end to end: template and group
//! setup, campaign creation with reference resolution, the delivery
//! handoff bundle, completion reporting with duplicate rejection, and
//! list ordering.

use chrono::{Duration, Utc};

use vendora_common::Error;
use vendora_marketing::{CampaignMetrics, CampaignStatus, MarketingService};

mod common;

#[test]
fn test_campaign_lifecycle_e2e() {
    println!("\n=== CAMPAIGN LIFECYCLE TEST ===\n");

    // Step 1: template + group
    let mut service = MarketingService::new();
    let template = service
        .templates_mut()
        .create("Welcome Email", "Welcome", "Hi {name}")
        .unwrap();
    let group = service.groups_mut().create("New Customers").unwrap();
    let rows: Vec<_> = (0..100)
        .map(|i| vendora_marketing::ContactRow {
            email: format!("c{}@example.com", i),
            attributes: Default::default(),
        })
        .collect();
    service.groups_mut().record_import(group.id, &rows).unwrap();
    println!("✅ Template '{}' and group '{}' ready", template.name, group.name);

    // Step 2: campaign enters the schedule immediately
    let schedule = Utc::now() + Duration::days(1);
    let campaign = service
        .create_campaign("Welcome Series", "Welcome Email", "New Customers", schedule)
        .unwrap();
    assert_eq!(campaign.status, CampaignStatus::Scheduled);
    assert_eq!(campaign.template_id, template.id);
    assert_eq!(campaign.group_id, group.id);
    println!("✅ Campaign '{}' scheduled for {}", campaign.name, schedule);

    // Step 3: delivery collaborator reports completion
    let metrics = CampaignMetrics::new(100, 40.0, 10.0).unwrap();
    let sent = service.record_sent(campaign.id, metrics).unwrap();
    assert_eq!(sent.status, CampaignStatus::Sent);
    assert_eq!(sent.metrics, Some(metrics));
    println!("✅ Campaign sent: {:?}", sent.metrics.unwrap());

    // Step 4: a repeated report must not double-apply
    let duplicate = CampaignMetrics::new(100, 99.0, 99.0).unwrap();
    let result = service.record_sent(campaign.id, duplicate);
    assert!(matches!(result, Err(Error::DuplicateReport(_))));

    let stored = service.campaigns().get(campaign.id).unwrap();
    assert_eq!(stored.metrics, Some(metrics));
    println!("✅ Duplicate report rejected, metrics unchanged");
}

#[test]
fn test_campaign_creation_blocked_on_unresolved_names() {
    let mut service = common::demo_service();

    let missing_template = service.create_campaign(
        "Spring Sale",
        "No Such Template",
        "All Customers",
        Utc::now(),
    );
    assert!(matches!(
        missing_template,
        Err(Error::UnresolvedReference(_))
    ));

    let missing_group =
        service.create_campaign("Spring Sale", "Newsletter", "No Such Group", Utc::now());
    assert!(matches!(missing_group, Err(Error::UnresolvedReference(_))));

    assert!(service.campaigns().list().is_empty());
}

#[test]
fn test_failed_campaign_is_terminal() {
    let mut service = common::demo_service();
    let campaign = service
        .create_campaign("March Newsletter", "Newsletter", "All Customers", Utc::now())
        .unwrap();

    let failed = service.record_failed(campaign.id).unwrap();
    assert_eq!(failed.status, CampaignStatus::Failed);
    assert!(failed.metrics.is_none());

    // Neither outcome can be reported again
    assert!(matches!(
        service.record_failed(campaign.id),
        Err(Error::DuplicateReport(_))
    ));
    let metrics = CampaignMetrics::new(1, 1.0, 1.0).unwrap();
    assert!(matches!(
        service.record_sent(campaign.id, metrics),
        Err(Error::DuplicateReport(_))
    ));
}

#[test]
fn test_prepare_delivery_hands_over_full_bundle() {
    let mut service = common::demo_service();
    let campaign = service
        .create_campaign("March Newsletter", "Newsletter", "All Customers", Utc::now())
        .unwrap();
    let profile_id = service.profiles().find_by_name("Primary SMTP").unwrap().id;

    let request = service.prepare_delivery(campaign.id, profile_id).unwrap();
    assert_eq!(request.campaign.name, "March Newsletter");
    assert_eq!(request.template.subject, "Latest Updates");
    assert_eq!(request.group.member_count, 1250);
    assert_eq!(request.profile.host, "smtp.example.com");

    // A sent campaign can no longer be dispatched
    let metrics = CampaignMetrics::new(1250, 45.5, 12.3).unwrap();
    service.record_sent(campaign.id, metrics).unwrap();
    assert!(matches!(
        service.prepare_delivery(campaign.id, profile_id),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_campaigns_list_in_creation_order() {
    let mut service = common::demo_service();
    for name in ["First", "Second", "Third"] {
        service
            .create_campaign(name, "Newsletter", "Active Buyers", Utc::now())
            .unwrap();
    }

    let names: Vec<_> = service
        .campaigns()
        .list()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[test]
fn test_deleting_referent_degrades_to_stale_name() {
    let mut service = common::demo_service();
    let campaign = service
        .create_campaign("March Newsletter", "Newsletter", "All Customers", Utc::now())
        .unwrap();

    service.templates_mut().delete(campaign.template_id);

    // The listing still renders the snapshot name
    let stored = service.campaigns().get(campaign.id).unwrap();
    assert_eq!(stored.template_name, "Newsletter");

    // But dispatch surfaces the dangling reference
    let profile_id = service.profiles().find_by_name("Primary SMTP").unwrap().id;
    assert!(matches!(
        service.prepare_delivery(campaign.id, profile_id),
        Err(Error::UnresolvedReference(_))
    ));
}

#[tokio::test]
async fn test_connection_probe_reports_failure_without_touching_store() {
    let config = vendora_common::Config {
        default_from: "noreply@vendora.app".to_string(),
        probe_timeout_secs: 1,
        log_level: "info".to_string(),
        rust_log: "vendora=debug".to_string(),
    };
    let mut service = MarketingService::from_config(&config);
    let profile = service
        .profiles_mut()
        .create(vendora_marketing::SendingProfileDraft {
            name: "Unreachable SMTP".to_string(),
            host: "192.0.2.1".to_string(), // TEST-NET-1, never routable
            port: 25,
            username: "user@example.com".to_string(),
            password: "secret".to_string(),
            from_email: "noreply@example.com".to_string(),
            use_tls: true,
        })
        .unwrap();
    let before = service.profiles().list().to_vec();

    // The probe must report a tagged failure rather than hang or panic
    let outcome = service.test_connection(profile.id).await.unwrap();
    assert!(outcome.is_err());

    // A failed test never mutates the store
    assert_eq!(service.profiles().list(), &before[..]);
}
