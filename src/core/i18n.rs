// SyriaBiz - core/i18n.rs
//
// Localization table: string key -> text in both languages.
// Presentation code reads from it; the filter engine never does.
// Unknown keys resolve to the key itself so a typo shows up on screen
// instead of an empty label.

use crate::core::model::{Category, City, Language, LocalizedString};

/// (key, Arabic, English)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("appTitle", "دليل الأعمال السوري", "Syria Business Directory"),
    (
        "searchPlaceholder",
        "ابحث عن اسم، خدمة، أو مكان...",
        "Search name, service, or place...",
    ),
    ("filters", "تصفية النتائج", "Filters"),
    ("filterCategory", "الفئة", "Category"),
    ("filterCity", "المدينة", "City"),
    ("status", "الحالة", "Status"),
    ("openNow", "مفتوح الآن", "Open Now"),
    ("allCategories", "الكل", "All"),
    ("allCities", "الكل", "All"),
    ("apply", "تطبيق", "Apply"),
    ("reset", "إعادة تعيين", "Reset"),
    ("categoryClinic", "عيادة", "Clinic"),
    ("categoryPharmacy", "صيدلية", "Pharmacy"),
    ("categoryFactory", "معمل", "Factory"),
    ("categoryOffice", "مكتب", "Office"),
    ("cityDamascus", "دمشق", "Damascus"),
    ("cityAleppo", "حلب", "Aleppo"),
    ("cityHoms", "حمص", "Homs"),
    ("callNow", "اتصل", "Call"),
    ("openHours", "ساعات العمل", "Hours"),
    ("closed", "مغلق", "Closed"),
    ("open", "مفتوح", "Open"),
    ("noResults", "لا توجد نتائج مطابقة", "No matching results found"),
    ("addBusiness", "أضف عمل", "Add Business"),
    ("addBusinessTitle", "إضافة عمل جديد", "Add New Business"),
    ("save", "حفظ", "Save"),
    ("cancel", "إلغاء", "Cancel"),
    ("labelNameAr", "الاسم (عربي)", "Name (Arabic)"),
    ("labelNameEn", "الاسم (إنجليزي)", "Name (English)"),
    ("labelDescAr", "الوصف (عربي)", "Description (Arabic)"),
    ("labelDescEn", "الوصف (إنجليزي)", "Description (English)"),
    ("labelAddressAr", "العنوان (عربي)", "Address (Arabic)"),
    ("labelAddressEn", "العنوان (إنجليزي)", "Address (English)"),
    ("labelPhone", "رقم الهاتف", "Phone Number"),
    ("labelImage", "رابط الصورة", "Image URL"),
    ("labelOpenTime", "ساعة الفتح (0-23)", "Open Hour (0-23)"),
    ("labelCloseTime", "ساعة الإغلاق (0-24)", "Close Hour (0-24)"),
];

/// Full bilingual entry for `key`, if the key exists.
pub fn entry(key: &str) -> Option<LocalizedString> {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, ar, en)| LocalizedString::new(*ar, *en))
}

/// Text for `key` in `language`; falls back to the key itself.
pub fn text<'a>(key: &'a str, language: Language) -> &'a str {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, ar, en)| match language {
            Language::Ar => *ar,
            Language::En => *en,
        })
        .unwrap_or(key)
}

pub fn category_label(category: Category, language: Language) -> &'static str {
    text(category.label_key(), language)
}

pub fn city_label(city: City, language: Language) -> &'static str {
    text(city.label_key(), language)
}
