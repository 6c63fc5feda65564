//! Tabular export/import collaborator boundary
//!
//! Campaign and customer lists serialize to row-oriented CSV; contact
//! imports arrive as raw CSV and are handed to the group store as clean
//! `(email, attributes)` rows. Column order matters for compatibility
//! with existing exports.

use std::collections::HashMap;
use std::io::Read;

use validator::ValidateEmail;

use vendora_common::{Error, Result};

use crate::domain::entities::{Campaign, Customer};

/// Customer export columns, in the order existing exports use
pub const CUSTOMER_EXPORT_HEADER: [&str; 6] = [
    "Name",
    "Email",
    "Total Purchases",
    "Last Purchase",
    "Total Spent",
    "Status",
];

/// Campaign export columns
pub const CAMPAIGN_EXPORT_HEADER: [&str; 8] = [
    "Campaign",
    "Template",
    "Audience",
    "Schedule",
    "Status",
    "Sent",
    "Open Rate",
    "Click Rate",
];

/// Serialize customers to CSV: header plus one row per customer, money
/// formatted to two decimal places
pub fn customers_to_csv(customers: &[Customer]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record(CUSTOMER_EXPORT_HEADER)
        .map_err(export_err)?;

    for customer in customers {
        writer
            .write_record(&[
                customer.name.clone(),
                customer.email.clone(),
                customer.total_purchases.to_string(),
                customer.last_purchase.format("%Y-%m-%d").to_string(),
                format!("{:.2}", customer.total_spent),
                customer.status.to_string(),
            ])
            .map_err(export_err)?;
    }

    finish(writer)
}

/// Serialize campaigns to CSV; metric columns are blank unless sent
pub fn campaigns_to_csv(campaigns: &[Campaign]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record(CAMPAIGN_EXPORT_HEADER)
        .map_err(export_err)?;

    for campaign in campaigns {
        let (sent, open_rate, click_rate) = match campaign.metrics {
            Some(m) => (
                m.sent_count.to_string(),
                format!("{:.1}", m.open_rate),
                format!("{:.1}", m.click_rate),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        writer
            .write_record(&[
                campaign.name.clone(),
                campaign.template_name.clone(),
                campaign.group_name.clone(),
                campaign.schedule.to_rfc3339(),
                campaign.status.to_string(),
                sent,
                open_rate,
                click_rate,
            ])
            .map_err(export_err)?;
    }

    finish(writer)
}

/// Clean contact row handed to the group store after parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRow {
    pub email: String,
    pub attributes: HashMap<String, String>,
}

/// Parse raw CSV into clean contact rows.
///
/// The header must contain an `Email` column (case-insensitive); every
/// other column becomes an attribute. Rows without a plausible address are
/// skipped with a warning rather than failing the whole import.
pub fn parse_contact_rows<R: Read>(reader: R) -> Result<Vec<ContactRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers().map_err(export_err)?.clone();
    let email_index = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("email"))
        .ok_or_else(|| Error::Export("Import is missing an Email column".to_string()))?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(export_err)?;
        let email = record.get(email_index).unwrap_or("").trim().to_string();
        if !email.validate_email() {
            tracing::warn!(email = %email, "skipping import row with invalid address");
            continue;
        }

        let attributes = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != email_index)
            .filter_map(|(i, header)| {
                record
                    .get(i)
                    .map(|value| (header.to_string(), value.to_string()))
            })
            .collect();

        rows.push(ContactRow { email, attributes });
    }

    tracing::info!(rows = rows.len(), "parsed contact import");
    Ok(rows)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

fn export_err(e: csv::Error) -> Error {
    Error::Export(e.to_string())
}
