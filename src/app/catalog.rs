// SyriaBiz - app/catalog.rs
//
// The catalog store: an ordered list of listings, newest first.
// Loads the built-in seed listings plus an optional user catalog file on
// disk. User records with the same id as a seed record replace it in place.

use crate::core::model::Business;
use crate::core::seed;
use crate::util::constants;
use crate::util::error::CatalogError;
use std::path::Path;

/// Ordered collection of listings.
///
/// The only mutation is `prepend`, so the order is always "added this
/// session, newest first" followed by the startup listings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    businesses: Vec<Business>,
}

impl Catalog {
    /// Build from records in display order. Later duplicates of an id are dropped.
    pub fn new(businesses: Vec<Business>) -> Self {
        let mut catalog = Self::default();
        for business in businesses {
            if catalog.contains_id(business.id) {
                tracing::warn!(id = business.id, "Dropping duplicate catalog id");
                continue;
            }
            catalog.businesses.push(business);
        }
        catalog
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.businesses.iter().any(|b| b.id == id)
    }

    /// An id strictly greater than every id in the catalog.
    pub fn next_id(&self) -> u64 {
        self.businesses
            .iter()
            .map(|b| b.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Insert `business` as the new first element.
    pub fn prepend(&mut self, business: Business) -> Result<(), CatalogError> {
        if self.contains_id(business.id) {
            return Err(CatalogError::DuplicateId { id: business.id });
        }
        tracing::info!(id = business.id, name = %business.name.en, "Business added");
        self.businesses.insert(0, business);
        Ok(())
    }
}

/// Load the startup catalog: seed listings, then the user catalog file.
///
/// A user record whose id matches a seed record replaces it in place;
/// other user records follow the seed records in file order.
/// Problems with the user file are returned, never fatal. A missing file
/// is only silent when `required` is false (the platform default path).
pub fn load_catalog(user_catalog: Option<&Path>, required: bool) -> (Catalog, Vec<CatalogError>) {
    let mut businesses = seed::load_seed_catalog();
    let mut errors = Vec::new();

    tracing::info!(seed_count = businesses.len(), "Loaded built-in listings");

    if let Some(path) = user_catalog {
        if required || path.is_file() {
            let (user_records, user_errors) = load_user_catalog(path);
            errors.extend(user_errors);

            for record in user_records {
                if let Some(pos) = businesses.iter().position(|b| b.id == record.id) {
                    tracing::info!(id = record.id, "User listing overrides built-in");
                    businesses[pos] = record;
                } else {
                    tracing::debug!(id = record.id, "Loaded user listing");
                    businesses.push(record);
                }
            }
        } else {
            tracing::debug!(
                path = %path.display(),
                "User catalog file does not exist (skipping)"
            );
        }
    }

    let catalog = Catalog::new(businesses);
    tracing::info!(total = catalog.len(), "Catalog loading complete");

    (catalog, errors)
}

/// Read and validate a user catalog file.
fn load_user_catalog(path: &Path) -> (Vec<Business>, Vec<CatalogError>) {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            return (
                Vec::new(),
                vec![CatalogError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }],
            )
        }
    };

    if metadata.len() > constants::MAX_CATALOG_FILE_SIZE {
        return (
            Vec::new(),
            vec![CatalogError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: constants::MAX_CATALOG_FILE_SIZE,
            }],
        );
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            return (
                Vec::new(),
                vec![CatalogError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }],
            )
        }
    };

    let doc = match seed::parse_catalog_toml(&content, path) {
        Ok(doc) => doc,
        Err(e) => return (Vec::new(), vec![e]),
    };

    let (mut records, mut errors) = seed::validate_document(doc, path);

    if records.len() > constants::MAX_USER_RECORDS {
        tracing::warn!(
            count = records.len(),
            max = constants::MAX_USER_RECORDS,
            "Too many user listings, truncating"
        );
        errors.push(CatalogError::TooManyRecords {
            count: records.len(),
            max: constants::MAX_USER_RECORDS,
        });
        records.truncate(constants::MAX_USER_RECORDS);
    }

    (records, errors)
}
