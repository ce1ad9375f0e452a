// SyriaBiz - core/seed.rs
//
// Catalog document parsing and the built-in seed listings.
// Core layer: accepts TOML strings, never touches the filesystem.
// File I/O for user catalogs is handled by app::catalog which feeds content here.

use crate::core::builder::{build_record, RawRecord};
use crate::core::model::Business;
use crate::util::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Raw TOML catalog document: a list of `[[business]]` tables.
/// Records are checked one by one by `validate_document`.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, rename = "business")]
    pub businesses: Vec<RawRecord>,
}

/// Built-in listings embedded at compile time.
const SEED_CATALOG: &str = include_str!("../../catalog/seed.toml");

/// Parse a TOML catalog document.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_catalog_toml(
    toml_content: &str,
    source_path: &Path,
) -> Result<CatalogDocument, CatalogError> {
    toml::from_str(toml_content).map_err(|e| CatalogError::TomlParse {
        path: source_path.to_path_buf(),
        source: e,
    })
}

/// Validate every record of a document.
///
/// Invalid records and repeated ids are reported and skipped; the valid
/// records are returned in document order.
pub fn validate_document(
    doc: CatalogDocument,
    source_path: &Path,
) -> (Vec<Business>, Vec<CatalogError>) {
    let mut records = Vec::with_capacity(doc.businesses.len());
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for raw in doc.businesses {
        let id = raw.id;
        let business = match build_record(raw) {
            Ok(b) => b,
            Err(e) => {
                errors.push(CatalogError::InvalidRecord {
                    path: source_path.to_path_buf(),
                    id,
                    source: e,
                });
                continue;
            }
        };
        if !seen.insert(business.id) {
            errors.push(CatalogError::DuplicateId { id: business.id });
            continue;
        }
        records.push(business);
    }

    (records, errors)
}

/// Load the built-in seed listings in their fixed order.
///
/// The embedded document is checked by the tests below, so any error here
/// is a build defect; it is logged and the offending record dropped.
pub fn load_seed_catalog() -> Vec<Business> {
    let path = Path::new("<builtin>/seed.toml");
    let doc = match parse_catalog_toml(SEED_CATALOG, path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::error!(error = %e, "Built-in catalog failed to parse");
            return Vec::new();
        }
    };

    let (records, errors) = validate_document(doc, path);
    for e in &errors {
        tracing::error!(error = %e, "Built-in catalog record rejected");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Category, City, OpeningHours};
    use std::path::PathBuf;

    const VALID_DOC: &str = r#"
[[business]]
id = 100
category = "Office"
city = "Aleppo"
phone = "+963 21 000 1111"
image = ""
name = { ar = "مكتب", en = "Test Office" }
address = { ar = "حلب", en = "Aleppo" }
description = { ar = "وصف", en = "Description" }
hours = { open = 8, close = 14 }
"#;

    #[test]
    fn test_seed_has_eight_records_in_order() {
        let seed = load_seed_catalog();
        let ids: Vec<u64> = seed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_seed_parses_without_errors() {
        let path = PathBuf::from("seed.toml");
        let doc = parse_catalog_toml(SEED_CATALOG, &path).unwrap();
        let (records, errors) = validate_document(doc, &path);
        assert!(errors.is_empty(), "seed errors: {errors:?}");
        assert_eq!(records.len(), 8);
    }

    #[test]
    fn test_seed_pharmacies_are_always_open() {
        let seed = load_seed_catalog();
        let pharmacies: Vec<&Business> = seed
            .iter()
            .filter(|b| b.category == Category::Pharmacy)
            .collect();
        assert_eq!(pharmacies.len(), 2);
        assert!(pharmacies.iter().all(|b| b.hours == OpeningHours::ALWAYS_OPEN));
    }

    #[test]
    fn test_parse_valid_document() {
        let path = PathBuf::from("user.toml");
        let doc = parse_catalog_toml(VALID_DOC, &path).unwrap();
        let (records, errors) = validate_document(doc, &path);
        assert!(errors.is_empty());
        assert_eq!(records[0].city, City::Aleppo);
        assert_eq!(records[0].name.en, "Test Office");
    }

    #[test]
    fn test_unknown_category_skips_only_that_record() {
        let doc = format!(
            "{VALID_DOC}\n{}",
            VALID_DOC.replace("id = 100", "id = 101").replace("\"Office\"", "\"Bakery\"")
        );
        let path = PathBuf::from("user.toml");
        let parsed = parse_catalog_toml(&doc, &path).unwrap();
        let (records, errors) = validate_document(parsed, &path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 100);
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            CatalogError::InvalidRecord { id, source, .. } => {
                assert_eq!(*id, 101);
                assert_eq!(source.fields(), vec!["category"]);
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_hour_skips_only_that_record() {
        let doc = format!(
            "{VALID_DOC}\n{}",
            VALID_DOC.replace("id = 100", "id = 101").replace("open = 8", "open = -1")
        );
        let path = PathBuf::from("user.toml");
        let parsed = parse_catalog_toml(&doc, &path).unwrap();
        let (records, errors) = validate_document(parsed, &path);
        let ids: Vec<u64> = records.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![100]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CatalogError::InvalidRecord { id: 101, .. }));
    }

    #[test]
    fn test_invalid_and_duplicate_records_skipped() {
        let doc = format!(
            "{VALID_DOC}\n{}\n{}",
            VALID_DOC.replace("id = 100", "id = 101").replace("close = 14", "close = 25"),
            VALID_DOC
        );
        let path = PathBuf::from("user.toml");
        let parsed = parse_catalog_toml(&doc, &path).unwrap();
        let (records, errors) = validate_document(parsed, &path);
        assert_eq!(records.len(), 1);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], CatalogError::InvalidRecord { id: 101, .. }));
        assert!(matches!(errors[1], CatalogError::DuplicateId { id: 100 }));
    }

    #[test]
    fn test_empty_document_has_no_records() {
        let doc = parse_catalog_toml("", &PathBuf::from("empty.toml")).unwrap();
        assert!(doc.businesses.is_empty());
    }
}
