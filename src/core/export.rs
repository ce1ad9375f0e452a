// SyriaBiz - core/export.rs
//
// CSV and JSON export of a filtered listing.
// Core layer: writes to any Write trait object. Text is rendered in the
// requested language and the open/closed column reflects `now`.

use crate::core::i18n;
use crate::core::model::{Business, Language};
use crate::core::status::{is_open_now, status_label};
use crate::util::error::ExportError;
use chrono::Timelike;
use serde::Serialize;
use std::io::Write;

/// One exported listing row, already localized.
#[derive(Debug, Serialize)]
pub struct ListingRow<'a> {
    pub id: u64,
    pub name: &'a str,
    pub category: &'static str,
    pub city: &'static str,
    pub phone: &'a str,
    pub address: &'a str,
    pub description: &'a str,
    pub hours: String,
    pub open: bool,
    pub status: &'static str,
    pub image: &'a str,
}

impl<'a> ListingRow<'a> {
    pub fn new<T: Timelike>(business: &'a Business, language: Language, now: &T) -> Self {
        Self {
            id: business.id,
            name: business.name.get(language),
            category: i18n::category_label(business.category, language),
            city: i18n::city_label(business.city, language),
            phone: &business.phone,
            address: business.address.get(language),
            description: business.description.get(language),
            hours: business.hours.label(),
            open: is_open_now(business, now),
            status: status_label(business, now, language),
            image: &business.image,
        }
    }
}

/// Export a listing to CSV format.
///
/// Writes: id, name, category, city, phone, address, hours, status
pub fn export_csv<W: Write, T: Timelike>(
    listing: &[&Business],
    language: Language,
    now: &T,
    writer: W,
    destination: &str,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "name", "category", "city", "phone", "address", "hours", "status"])
        .map_err(|e| ExportError::Csv {
            destination: destination.to_string(),
            source: e,
        })?;

    let mut count = 0;
    for business in listing {
        let row = ListingRow::new(business, language, now);
        csv_writer
            .write_record([
                row.id.to_string().as_str(),
                row.name,
                row.category,
                row.city,
                row.phone,
                row.address,
                row.hours.as_str(),
                row.status,
            ])
            .map_err(|e| ExportError::Csv {
                destination: destination.to_string(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        destination: destination.to_string(),
        source: e,
    })?;

    Ok(count)
}

/// Export a listing to JSON format (array of objects).
pub fn export_json<W: Write, T: Timelike>(
    listing: &[&Business],
    language: Language,
    now: &T,
    writer: W,
    destination: &str,
) -> Result<usize, ExportError> {
    let rows: Vec<ListingRow<'_>> = listing
        .iter()
        .map(|b| ListingRow::new(b, language, now))
        .collect();
    serde_json::to_writer_pretty(writer, &rows).map_err(|e| ExportError::Json {
        destination: destination.to_string(),
        source: e,
    })?;
    Ok(rows.len())
}
