// SyriaBiz - core/filter.rs
//
// Composable filter engine for directory listings.
// All active criteria are AND-combined; input order is preserved.
// Core layer: pure logic, no I/O, never reads the wall clock.

use crate::core::model::{Business, Category, City, Language};
use crate::core::status::is_open_at_hour;
use chrono::Timelike;

/// Either every value passes, or only one specific value does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns true if `value` passes this selection.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

/// User-chosen filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Substring search over name and description (case-insensitive).
    /// Empty = no filter.
    pub search_text: String,

    pub category: Selection<Category>,

    pub city: Selection<City>,

    /// Only keep businesses open at the evaluation time.
    pub open_only: bool,
}

impl Criteria {
    /// Returns true if no criterion restricts the result.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && !self.has_active_filters()
    }

    /// Returns true if category, city or open-only restricts the result.
    /// Search text is not counted.
    pub fn has_active_filters(&self) -> bool {
        !self.category.is_all() || !self.city.is_all() || self.open_only
    }

    /// Clear category, city and open-only, keeping the search text.
    pub fn reset_filters(&mut self) {
        self.category = Selection::All;
        self.city = Selection::All;
        self.open_only = false;
    }
}

/// Apply criteria to a catalog, returning indices of matching businesses.
///
/// `now` is read once, so every business in the pass is judged against the
/// same hour.
pub fn matching_indices<T: Timelike>(
    catalog: &[Business],
    criteria: &Criteria,
    language: Language,
    now: &T,
) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..catalog.len()).collect();
    }

    let search_lower = criteria.search_text.to_lowercase();
    let hour = now.hour();

    catalog
        .iter()
        .enumerate()
        .filter(|(_, business)| matches_all(business, criteria, language, &search_lower, hour))
        .map(|(idx, _)| idx)
        .collect()
}

/// Apply criteria to a catalog, returning the matching businesses in
/// catalog order.
pub fn filter_catalog<'a, T: Timelike>(
    catalog: &'a [Business],
    criteria: &Criteria,
    language: Language,
    now: &T,
) -> Vec<&'a Business> {
    matching_indices(catalog, criteria, language, now)
        .into_iter()
        .filter_map(|idx| catalog.get(idx))
        .collect()
}

/// Check if a single business matches all criteria.
fn matches_all(
    business: &Business,
    criteria: &Criteria,
    language: Language,
    search_lower: &str,
    hour: u32,
) -> bool {
    if !criteria.category.accepts(&business.category) {
        return false;
    }

    if !criteria.city.accepts(&business.city) {
        return false;
    }

    if criteria.open_only && !is_open_at_hour(&business.hours, hour) {
        return false;
    }

    matches_search(business, language, search_lower)
}

/// Case-insensitive substring match on the name and description in the
/// active language. The address is not searched.
fn matches_search(business: &Business, language: Language, search_lower: &str) -> bool {
    if search_lower.is_empty() {
        return true;
    }
    business
        .name
        .get(language)
        .to_lowercase()
        .contains(search_lower)
        || business
            .description
            .get(language)
            .to_lowercase()
            .contains(search_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{LocalizedString, OpeningHours};
    use chrono::NaiveTime;

    fn make_business(id: u64, en_name: &str, category: Category, city: City) -> Business {
        Business {
            id,
            name: LocalizedString::new(format!("عمل {id}"), en_name),
            category,
            city,
            phone: "+963 11 000 0000".to_string(),
            address: LocalizedString::new("دمشق", "Damascus, Old City"),
            description: LocalizedString::new("وصف", "Plain description"),
            image: String::new(),
            hours: OpeningHours::new(9, 17),
        }
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Business> {
        vec![
            make_business(1, "Central Clinic", Category::Clinic, City::Damascus),
            make_business(2, "North Pharmacy", Category::Pharmacy, City::Aleppo),
            make_business(3, "Homs Office", Category::Office, City::Homs),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_all() {
        let catalog = sample();
        let result = matching_indices(&catalog, &Criteria::default(), Language::En, &noon());
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let criteria = Criteria {
            search_text: "x".to_string(),
            open_only: true,
            ..Default::default()
        };
        assert!(filter_catalog(&[], &criteria, Language::En, &noon()).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample();
        let criteria = Criteria {
            category: Selection::Only(Category::Pharmacy),
            ..Default::default()
        };
        let ids: Vec<u64> = filter_catalog(&catalog, &criteria, Language::En, &noon())
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let catalog = sample();
        let criteria = Criteria {
            search_text: "CLINIC".to_string(),
            ..Default::default()
        };
        assert_eq!(
            matching_indices(&catalog, &criteria, Language::En, &noon()),
            vec![0]
        );
    }

    #[test]
    fn test_search_ignores_address() {
        let catalog = sample();
        let criteria = Criteria {
            search_text: "old city".to_string(),
            ..Default::default()
        };
        assert!(matching_indices(&catalog, &criteria, Language::En, &noon()).is_empty());
    }

    #[test]
    fn test_search_uses_active_language_only() {
        let catalog = sample();
        let criteria = Criteria {
            search_text: "pharmacy".to_string(),
            ..Default::default()
        };
        assert_eq!(
            matching_indices(&catalog, &criteria, Language::En, &noon()),
            vec![1]
        );
        assert!(matching_indices(&catalog, &criteria, Language::Ar, &noon()).is_empty());
    }

    #[test]
    fn test_arabic_search_multibyte() {
        let catalog = sample();
        let criteria = Criteria {
            search_text: "عمل 3".to_string(),
            ..Default::default()
        };
        assert_eq!(
            matching_indices(&catalog, &criteria, Language::Ar, &noon()),
            vec![2]
        );
    }

    #[test]
    fn test_open_only_uses_single_hour() {
        let mut catalog = sample();
        catalog[1].hours = OpeningHours::ALWAYS_OPEN;
        let criteria = Criteria {
            open_only: true,
            ..Default::default()
        };
        let night = NaiveTime::from_hms_opt(3, 0, 0).unwrap();
        assert_eq!(matching_indices(&catalog, &criteria, Language::En, &night), vec![1]);
        assert_eq!(
            matching_indices(&catalog, &criteria, Language::En, &noon()),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_combined_filters() {
        let catalog = sample();
        let criteria = Criteria {
            search_text: "office".to_string(),
            city: Selection::Only(City::Damascus),
            ..Default::default()
        };
        assert!(matching_indices(&catalog, &criteria, Language::En, &noon()).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = sample();
        let criteria = Criteria {
            city: Selection::Only(City::Aleppo),
            ..Default::default()
        };
        let once: Vec<Business> = filter_catalog(&catalog, &criteria, Language::En, &noon())
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Business> = filter_catalog(&once, &criteria, Language::En, &noon())
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_active_filters_and_reset() {
        let mut criteria = Criteria {
            search_text: "clinic".to_string(),
            ..Default::default()
        };
        assert!(!criteria.has_active_filters());
        assert!(!criteria.is_empty());

        criteria.city = Selection::Only(City::Homs);
        criteria.open_only = true;
        assert!(criteria.has_active_filters());

        criteria.reset_filters();
        assert!(!criteria.has_active_filters());
        assert_eq!(criteria.search_text, "clinic");
    }

    #[test]
    fn test_selection_from_option() {
        assert_eq!(Selection::<City>::from(None), Selection::All);
        assert_eq!(
            Selection::from(Some(City::Homs)),
            Selection::Only(City::Homs)
        );
    }
}
