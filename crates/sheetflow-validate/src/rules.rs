//! Per-type cell validators.
//!
//! Each validator is a pure predicate producing zero or one error message
//! for a cell. Empty handling runs first: an empty optional cell passes
//! regardless of type, an empty required cell fails without any type check.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use sheetflow_model::{BooleanFormat, FieldType, TemplateField};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});
static YMD_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("Invalid date prefix regex"));
static YEAR_MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("Invalid year-month regex"));

/// Validate one cell against its template field. Returns an error message,
/// or `None` when the value is acceptable.
pub fn check_cell(field: &TemplateField, value: &str) -> Option<String> {
    if value.is_empty() {
        if field.required {
            return Some(format!("{} is required", field.name));
        }
        return None;
    }

    match field.field_type {
        FieldType::Text => None,
        FieldType::Number => check_number(field, value),
        FieldType::Boolean => check_boolean(field, value),
        FieldType::Date => check_date(field, value),
        FieldType::Email => check_email(field, value),
        FieldType::Select => check_select(field, value),
    }
}

fn check_number(field: &TemplateField, value: &str) -> Option<String> {
    let trimmed = value.trim();
    // Whitespace-only coerces to zero, matching lenient numeric coercion.
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => None,
        _ => Some(format!("{} must be a number", field.name)),
    }
}

fn check_boolean(field: &TemplateField, value: &str) -> Option<String> {
    match BooleanFormat::parse(&field.validation_format) {
        Some(format) => {
            if format.accepted().contains(&value) {
                None
            } else {
                Some(format!(
                    "{} must be a valid boolean value ({})",
                    field.name,
                    format.label()
                ))
            }
        }
        // An unrecognized format tag accepts no value at all.
        None => Some(format!(
            "{} must be a valid boolean value ({})",
            field.name, field.validation_format
        )),
    }
}

fn check_date(field: &TemplateField, value: &str) -> Option<String> {
    let trimmed = value.trim();

    // Bare numbers ("1234") parse as timestamps or years, never as a date
    // the user meant.
    if !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return Some(format!(
            "{} must be a valid date format (not just numbers)",
            field.name
        ));
    }

    let parsed = parse_generic_date(trimmed);
    let valid = match parsed {
        None => false,
        Some(datetime) => {
            let is_new_year_midnight = datetime.month() == 1
                && datetime.day() == 1
                && datetime.hour() == 0
                && datetime.minute() == 0
                && datetime.second() == 0;
            // A value that lands exactly on midnight Jan 1 without being
            // written as a full year-month-day date is almost always a bare
            // year that parsed into an unintended instant.
            !(is_new_year_midnight && !YMD_PREFIX_RE.is_match(trimmed))
        }
    };

    if valid {
        None
    } else {
        Some(format!("{} must be a valid date format", field.name))
    }
}

/// Best-effort parsing over the date shapes a spreadsheet plausibly holds.
fn parse_generic_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_utc());
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }

    const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%m-%d-%Y",
        "%d %B %Y",
        "%B %d, %Y",
        "%b %d, %Y",
        "%d %b %Y",
    ];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    // Year-month ("2024-03") reads as the first of the month.
    if YEAR_MONTH_RE.is_match(value) {
        let padded = format!("{value}-01");
        if let Ok(date) = NaiveDate::parse_from_str(&padded, "%Y-%m-%d") {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

fn check_email(field: &TemplateField, value: &str) -> Option<String> {
    if EMAIL_RE.is_match(value) {
        None
    } else {
        Some(format!("{} must be a valid email address", field.name))
    }
}

fn check_select(field: &TemplateField, value: &str) -> Option<String> {
    if field.validation_format.is_empty() {
        // An empty option list permits any value.
        return None;
    }
    let options: Vec<&str> = field.validation_format.split(',').map(str::trim).collect();
    let value_lower = value.to_lowercase();
    if options.iter().any(|opt| opt.to_lowercase() == value_lower) {
        None
    } else {
        Some(format!(
            "{} must be one of: {}",
            field.name,
            options.join(", ")
        ))
    }
}
