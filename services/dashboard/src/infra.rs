use std::str::FromStr;

use chrono::NaiveDate;
use staff_performance::performance::Role;

pub(crate) fn parse_role(raw: &str) -> Result<Role, String> {
    Role::from_str(raw).map_err(|err| {
        let known: Vec<&str> = Role::ordered().iter().map(|role| role.label()).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}

/// Parses `Metric Name=score` as supplied to `--score`.
pub(crate) fn parse_score_entry(raw: &str) -> Result<(String, f64), String> {
    let (name, score) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected 'Metric Name=score', found '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing metric name in '{raw}'"));
    }
    let score = score
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse score in '{raw}' ({err})"))?;
    Ok((name.to_string(), score))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
