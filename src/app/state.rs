// SyriaBiz - app/state.rs
//
// Session state: owns the catalog, the filter criteria and the active
// language, and keeps the visible listing in sync with them.
// Every mutation re-runs the filter pass against a single clock reading.

use crate::app::catalog::Catalog;
use crate::core::builder::{build_business, RawFormFields};
use crate::core::filter::{Criteria, Selection};
use crate::core::i18n;
use crate::core::model::{Business, Category, City, Language};
use crate::core::status::is_open_now;
use crate::util::error::Result;
use chrono::{Local, NaiveTime};

/// Top-level session state.
#[derive(Debug)]
pub struct Session {
    /// All listings, newest first.
    pub catalog: Catalog,

    /// Current filter configuration.
    pub criteria: Criteria,

    /// Language used for search and display.
    pub language: Language,

    /// Indices of listings matching the current criteria (into `catalog`).
    pub filtered_indices: Vec<usize>,

    /// Local time the last filter pass was evaluated at.
    pub evaluated_at: NaiveTime,

    /// Fixed local time to evaluate at instead of the wall clock.
    pub clock_override: Option<NaiveTime>,
}

impl Session {
    /// Create a session over `catalog` and run the first filter pass.
    pub fn new(catalog: Catalog, language: Language) -> Self {
        let mut session = Self {
            catalog,
            criteria: Criteria::default(),
            language,
            filtered_indices: Vec::new(),
            evaluated_at: Local::now().time(),
            clock_override: None,
        };
        session.apply_filters();
        session
    }

    /// Evaluate at a fixed local time from now on (`None` = wall clock).
    pub fn pin_clock(&mut self, at: Option<NaiveTime>) {
        self.clock_override = at;
        self.apply_filters();
    }

    /// Recompute the visible listing. The clock is read exactly once.
    pub fn apply_filters(&mut self) {
        let now = self
            .clock_override
            .unwrap_or_else(|| Local::now().time());
        self.evaluated_at = now;
        self.filtered_indices = crate::core::filter::matching_indices(
            self.catalog.businesses(),
            &self.criteria,
            self.language,
            &now,
        );
        tracing::debug!(
            total = self.catalog.len(),
            visible = self.filtered_indices.len(),
            language = %self.language,
            at = %now.format("%H:%M"),
            "Filter pass complete"
        );
    }

    /// Visible listings in catalog order.
    pub fn visible(&self) -> Vec<&Business> {
        let all = self.catalog.businesses();
        self.filtered_indices
            .iter()
            .filter_map(|&idx| all.get(idx))
            .collect()
    }

    /// Open/closed state as of the last filter pass.
    pub fn is_open(&self, business: &Business) -> bool {
        is_open_now(business, &self.evaluated_at)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.apply_filters();
    }

    /// Apply the category, city and open-only choices together.
    pub fn set_filters(
        &mut self,
        category: Selection<Category>,
        city: Selection<City>,
        open_only: bool,
    ) {
        self.criteria.category = category;
        self.criteria.city = city;
        self.criteria.open_only = open_only;
        self.apply_filters();
    }

    /// Clear category, city and open-only; the search text is kept.
    pub fn reset_filters(&mut self) {
        self.criteria.reset_filters();
        self.apply_filters();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.apply_filters();
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Validate a form submission and add it as the first listing.
    ///
    /// On failure the catalog is left untouched and the error is returned
    /// for display. Returns the new record's id.
    pub fn add_business(&mut self, fields: RawFormFields) -> Result<u64> {
        let id = self.catalog.next_id();
        let business = build_business(fields, id).map_err(|e| {
            tracing::warn!(fields = ?e.fields(), "Add-business submission rejected");
            e
        })?;
        self.catalog.prepend(business)?;
        self.apply_filters();
        Ok(id)
    }

    /// Localized message for an empty result, or `None` if anything is visible.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.filtered_indices.is_empty() {
            Some(i18n::text("noResults", self.language))
        } else {
            None
        }
    }
}
