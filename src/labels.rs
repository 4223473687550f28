use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Country key the tracker records when it could not resolve a location.
pub const UNRESOLVED_COUNTRY: &str = "-";
pub const UNKNOWN_LABEL: &str = "Unknown";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

pub fn display_country(country: &str) -> &str {
    if country == UNRESOLVED_COUNTRY {
        UNKNOWN_LABEL
    } else {
        country
    }
}

/// Parses a daily record label into a sortable timestamp.
pub fn parse_label(label: &str) -> Option<NaiveDateTime> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(label) {
        return Some(datetime.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(label, format) {
            return Some(datetime);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(label, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
