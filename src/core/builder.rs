// SyriaBiz - core/builder.rs
//
// Turns raw add-business form fields and raw catalog document records
// into validated `Business` values.
// Core layer: never touches the catalog; the caller supplies the id and
// decides where the record goes.

use crate::core::model::{Business, Category, City, LocalizedString, OpeningHours};
use crate::util::constants;
use crate::util::error::{FieldIssue, FieldProblem, ValidationError};
use serde::Deserialize;

/// Raw string fields as collected by the add-business form.
///
/// Nothing here is trusted: every field is checked by `build_business`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFormFields {
    pub name_ar: String,
    pub name_en: String,
    pub category: String,
    pub city: String,
    pub phone: String,
    pub address_ar: String,
    pub address_en: String,
    pub desc_ar: String,
    pub desc_en: String,
    /// Empty = placeholder image.
    pub image: String,
    /// Empty = form default (09).
    pub open_hour: String,
    /// Empty = form default (17).
    pub close_hour: String,
}

/// Raw `[[business]]` table from a catalog document.
///
/// Hours are wide integers and category/city are plain strings, so a bad
/// value fails this record only, never the whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub name: RawLocalized,
    #[serde(default)]
    pub address: RawLocalized,
    #[serde(default)]
    pub description: RawLocalized,
    #[serde(default)]
    pub hours: RawHours,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLocalized {
    pub ar: String,
    pub en: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawHours {
    pub open: Option<i64>,
    pub close: Option<i64>,
}

/// Collects issues so one submission reports every bad field at once.
#[derive(Default)]
struct Issues(Vec<FieldIssue>);

impl Issues {
    fn push(&mut self, field: &'static str, problem: FieldProblem) {
        self.0.push(FieldIssue { field, problem });
    }

    /// Trimmed copy of `value`, recording `Missing` when it is blank.
    fn required(&mut self, field: &'static str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.push(field, FieldProblem::Missing);
        }
        trimmed.to_string()
    }

    /// Parse one of a fixed set of choices. `None` always records an issue.
    fn choice<T>(
        &mut self,
        field: &'static str,
        value: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.push(field, FieldProblem::Missing);
            return None;
        }
        let parsed = parse(trimmed);
        if parsed.is_none() {
            self.push(
                field,
                FieldProblem::UnknownChoice {
                    value: trimmed.to_string(),
                },
            );
        }
        parsed
    }

    fn hour(&mut self, field: &'static str, value: &str, default: u8) -> u8 {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return default;
        }
        match trimmed.parse::<i64>() {
            Ok(h) => self.hour_in_range(field, h).unwrap_or(default),
            Err(_) => {
                self.push(
                    field,
                    FieldProblem::NotANumber {
                        value: trimmed.to_string(),
                    },
                );
                default
            }
        }
    }

    /// A document hour has no default. `None` always records an issue.
    fn required_hour(&mut self, field: &'static str, value: Option<i64>) -> Option<u8> {
        match value {
            Some(h) => self.hour_in_range(field, h),
            None => {
                self.push(field, FieldProblem::Missing);
                None
            }
        }
    }

    fn hour_in_range(&mut self, field: &'static str, hour: i64) -> Option<u8> {
        let min = i64::from(constants::MIN_HOUR);
        let max = i64::from(constants::MAX_HOUR);
        if (min..=max).contains(&hour) {
            u8::try_from(hour).ok()
        } else {
            self.push(field, FieldProblem::OutOfRange { value: hour });
            None
        }
    }

    fn into_error(self) -> ValidationError {
        ValidationError { issues: self.0 }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

fn image_or_placeholder(image: &str) -> String {
    match image.trim() {
        "" => constants::PLACEHOLDER_IMAGE_URL.to_string(),
        url => url.to_string(),
    }
}

/// Validate `fields` and assemble a record carrying `id`.
///
/// Text fields are stored trimmed. On failure the error lists every
/// offending field in form order.
pub fn build_business(fields: RawFormFields, id: u64) -> Result<Business, ValidationError> {
    let mut issues = Issues::default();

    let name_ar = issues.required("name_ar", &fields.name_ar);
    let name_en = issues.required("name_en", &fields.name_en);
    let category = issues.choice("category", &fields.category, Category::parse);
    let city = issues.choice("city", &fields.city, City::parse);
    let phone = issues.required("phone", &fields.phone);
    let address_ar = issues.required("address_ar", &fields.address_ar);
    let address_en = issues.required("address_en", &fields.address_en);
    let desc_ar = issues.required("desc_ar", &fields.desc_ar);
    let desc_en = issues.required("desc_en", &fields.desc_en);
    let open = issues.hour("open_hour", &fields.open_hour, constants::DEFAULT_OPEN_HOUR);
    let close = issues.hour("close_hour", &fields.close_hour, constants::DEFAULT_CLOSE_HOUR);

    let (Some(category), Some(city)) = (category, city) else {
        return Err(issues.into_error());
    };
    issues.finish()?;

    tracing::debug!(id, category = %category, city = %city, "Built business record");

    Ok(Business {
        id,
        name: LocalizedString::new(name_ar, name_en),
        category,
        city,
        phone,
        address: LocalizedString::new(address_ar, address_en),
        description: LocalizedString::new(desc_ar, desc_en),
        image: image_or_placeholder(&fields.image),
        hours: OpeningHours::new(open, close),
    })
}

/// Validate a catalog document record against the same rules the form
/// applies. Unlike the form, both hours must be present.
pub fn build_record(raw: RawRecord) -> Result<Business, ValidationError> {
    let mut issues = Issues::default();

    let name_ar = issues.required("name_ar", &raw.name.ar);
    let name_en = issues.required("name_en", &raw.name.en);
    let category = issues.choice("category", &raw.category, Category::parse);
    let city = issues.choice("city", &raw.city, City::parse);
    let phone = issues.required("phone", &raw.phone);
    let address_ar = issues.required("address_ar", &raw.address.ar);
    let address_en = issues.required("address_en", &raw.address.en);
    let desc_ar = issues.required("desc_ar", &raw.description.ar);
    let desc_en = issues.required("desc_en", &raw.description.en);
    let open = issues.required_hour("open_hour", raw.hours.open);
    let close = issues.required_hour("close_hour", raw.hours.close);

    let (Some(category), Some(city), Some(open), Some(close)) = (category, city, open, close)
    else {
        return Err(issues.into_error());
    };
    issues.finish()?;

    Ok(Business {
        id: raw.id,
        name: LocalizedString::new(name_ar, name_en),
        category,
        city,
        phone,
        address: LocalizedString::new(address_ar, address_en),
        description: LocalizedString::new(desc_ar, desc_en),
        image: image_or_placeholder(&raw.image),
        hours: OpeningHours::new(open, close),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> RawFormFields {
        RawFormFields {
            name_ar: "مخبز الشام".to_string(),
            name_en: "Sham Bakery".to_string(),
            category: "Factory".to_string(),
            city: "Damascus".to_string(),
            phone: "+963 11 123 4567".to_string(),
            address_ar: "دمشق، باب توما".to_string(),
            address_en: "Damascus, Bab Touma".to_string(),
            desc_ar: "خبز طازج يومياً".to_string(),
            desc_en: "Fresh bread daily".to_string(),
            image: String::new(),
            open_hour: "6".to_string(),
            close_hour: "14".to_string(),
        }
    }

    #[test]
    fn test_build_complete_record() {
        let b = build_business(complete_fields(), 42).unwrap();
        assert_eq!(b.id, 42);
        assert_eq!(b.category, Category::Factory);
        assert_eq!(b.city, City::Damascus);
        assert_eq!(b.hours, OpeningHours::new(6, 14));
        assert_eq!(b.image, constants::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_missing_name_ar_is_named() {
        let mut fields = complete_fields();
        fields.name_ar = "   ".to_string();
        let err = build_business(fields, 1).unwrap_err();
        assert_eq!(err.fields(), vec!["name_ar"]);
        assert_eq!(err.issues[0].problem, FieldProblem::Missing);
    }

    #[test]
    fn test_every_bad_field_reported() {
        let fields = RawFormFields {
            open_hour: "25".to_string(),
            close_hour: "late".to_string(),
            category: "Bakery".to_string(),
            ..Default::default()
        };
        let err = build_business(fields, 1).unwrap_err();
        assert_eq!(
            err.fields(),
            vec![
                "name_ar",
                "name_en",
                "category",
                "city",
                "phone",
                "address_ar",
                "address_en",
                "desc_ar",
                "desc_en",
                "open_hour",
                "close_hour",
            ]
        );
        assert!(err.issues.contains(&FieldIssue {
            field: "open_hour",
            problem: FieldProblem::OutOfRange { value: 25 },
        }));
        assert!(err.issues.contains(&FieldIssue {
            field: "category",
            problem: FieldProblem::UnknownChoice {
                value: "Bakery".to_string()
            },
        }));
    }

    #[test]
    fn test_negative_hour_rejected_not_clamped() {
        let mut fields = complete_fields();
        fields.open_hour = "-1".to_string();
        let err = build_business(fields, 1).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue {
                field: "open_hour",
                problem: FieldProblem::OutOfRange { value: -1 },
            }]
        );
    }

    #[test]
    fn test_blank_hours_use_form_defaults() {
        let mut fields = complete_fields();
        fields.open_hour = String::new();
        fields.close_hour = " ".to_string();
        let b = build_business(fields, 1).unwrap();
        assert_eq!(b.hours, OpeningHours::new(9, 17));
    }

    #[test]
    fn test_always_open_accepted() {
        let mut fields = complete_fields();
        fields.open_hour = "0".to_string();
        fields.close_hour = "24".to_string();
        let b = build_business(fields, 1).unwrap();
        assert!(b.hours.is_always_open());
    }

    #[test]
    fn test_text_fields_trimmed_and_image_kept() {
        let mut fields = complete_fields();
        fields.name_en = "  Sham Bakery ".to_string();
        fields.image = " https://example.com/bakery.jpg ".to_string();
        let b = build_business(fields, 1).unwrap();
        assert_eq!(b.name.en, "Sham Bakery");
        assert_eq!(b.image, "https://example.com/bakery.jpg");
    }

    fn complete_record(id: u64) -> RawRecord {
        RawRecord {
            id,
            category: "Clinic".to_string(),
            city: "Homs".to_string(),
            phone: "+963 31 000 5050".to_string(),
            image: String::new(),
            name: RawLocalized {
                ar: "عيادة الوعر".to_string(),
                en: "Al-Waer Clinic".to_string(),
            },
            address: RawLocalized {
                ar: "حمص، الوعر".to_string(),
                en: "Homs, Al-Waer".to_string(),
            },
            description: RawLocalized {
                ar: "طب عام".to_string(),
                en: "General practice".to_string(),
            },
            hours: RawHours {
                open: Some(8),
                close: Some(14),
            },
        }
    }

    #[test]
    fn test_build_record_complete() {
        let b = build_record(complete_record(50)).unwrap();
        assert_eq!(b.id, 50);
        assert_eq!(b.city, City::Homs);
        assert_eq!(b.hours, OpeningHours::new(8, 14));
        assert_eq!(b.image, constants::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_build_record_negative_and_wide_hours() {
        let mut raw = complete_record(51);
        raw.hours = RawHours {
            open: Some(-1),
            close: Some(300),
        };
        raw.phone.clear();
        let err = build_record(raw).unwrap_err();
        assert_eq!(err.fields(), vec!["phone", "open_hour", "close_hour"]);
        assert!(err.issues.contains(&FieldIssue {
            field: "open_hour",
            problem: FieldProblem::OutOfRange { value: -1 },
        }));
    }

    #[test]
    fn test_build_record_requires_hours_and_known_choices() {
        let mut raw = complete_record(52);
        raw.category = "Bakery".to_string();
        raw.city.clear();
        raw.hours.close = None;
        let err = build_record(raw).unwrap_err();
        assert_eq!(err.fields(), vec!["category", "city", "close_hour"]);
        assert_eq!(err.issues[1].problem, FieldProblem::Missing);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_bad_city_alone_still_names_the_field() {
        let mut fields = complete_fields();
        fields.city = "Latakia".to_string();
        let err = build_business(fields, 1).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue {
                field: "city",
                problem: FieldProblem::UnknownChoice {
                    value: "Latakia".to_string()
                },
            }]
        );
    }
}
