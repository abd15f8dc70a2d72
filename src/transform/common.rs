use crate::core::time::{format_date, parse_date};

/// Trimmed text, with the placeholders nflverse uses for "missing" mapped to `None`.
pub fn clean(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    match value {
        "" | "NA" | "nan" | "None" => None,
        _ => Some(value.to_string()),
    }
}

/// `%Y-%m-%d`, or `None` when the input is not a date.
pub fn date(value: Option<&str>) -> Option<String> {
    clean(value).and_then(|v| parse_date(&v)).map(format_date)
}

pub fn int(value: Option<f64>) -> Option<i64> {
    value.filter(|v| v.is_finite()).map(|v| v.round() as i64)
}

/// A statistic where "not recorded" means zero.
pub fn count(value: Option<f64>) -> i64 {
    int(value).unwrap_or(0)
}

/// Sum of counts; missing terms contribute zero.
pub fn total(values: &[Option<f64>]) -> i64 {
    values.iter().map(|v| count(*v)).sum()
}
