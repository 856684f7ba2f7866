use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::catalog::find_role_metric;
use super::domain::{Role, Trend};
use super::professional::ProfessionalProfile;
use super::roster::NewProfessional;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownRole { row: usize, value: String },
    UnknownTrend { row: usize, value: String },
    UnknownMetric { row: usize, role: Role, metric: String },
    MalformedScore { row: usize, entry: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            ImportError::UnknownRole { row, value } => {
                write!(f, "row {}: unknown role '{}'", row, value)
            }
            ImportError::UnknownTrend { row, value } => {
                write!(f, "row {}: unknown trend '{}'", row, value)
            }
            ImportError::UnknownMetric { row, role, metric } => write!(
                f,
                "row {}: metric '{}' is not tracked for {}",
                row, metric, role
            ),
            ImportError::MalformedScore { row, entry } => write!(
                f,
                "row {}: expected 'Metric Name=score', found '{}'",
                row, entry
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads roster exports with the columns
/// `Name,Role,Department,Email,Phone,Salary,Trend,AI Usage,Scores`.
///
/// `Scores` lists `Metric Name=score` pairs separated by `;`. Completeness of the scores is
/// checked when the rows are added to a roster.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NewProfessional>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NewProfessional>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut professionals = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = record?;
            professionals.push(row.into_new_professional(index + 1)?);
        }

        debug!(rows = professionals.len(), "roster rows imported");
        Ok(professionals)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Role")]
    role: String,
    #[serde(rename = "Department", default, deserialize_with = "empty_string_as_none")]
    department: Option<String>,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Phone", default)]
    phone: String,
    #[serde(rename = "Salary")]
    salary: f64,
    #[serde(rename = "Trend", default)]
    trend: String,
    #[serde(rename = "AI Usage", default)]
    ai_usage: f64,
    #[serde(rename = "Scores")]
    scores: String,
}

impl RosterRow {
    fn into_new_professional(self, row: usize) -> Result<NewProfessional, ImportError> {
        let role: Role = self.role.parse().map_err(|_| ImportError::UnknownRole {
            row,
            value: self.role.clone(),
        })?;
        let trend: Trend = self.trend.parse().map_err(|_| ImportError::UnknownTrend {
            row,
            value: self.trend.clone(),
        })?;

        let mut scores = BTreeMap::new();
        for entry in self
            .scores
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
        {
            let (name, raw_score) = entry
                .split_once('=')
                .ok_or_else(|| ImportError::MalformedScore {
                    row,
                    entry: entry.to_string(),
                })?;
            let score: f64 = raw_score
                .trim()
                .parse()
                .map_err(|_| ImportError::MalformedScore {
                    row,
                    entry: entry.to_string(),
                })?;
            let definition =
                find_role_metric(role, name).ok_or_else(|| ImportError::UnknownMetric {
                    row,
                    role,
                    metric: name.trim().to_string(),
                })?;
            scores.insert(definition.key, score);
        }

        Ok(NewProfessional {
            name: self.name,
            role,
            department: self.department,
            salary: self.salary,
            scores,
            trend,
            ai_usage: self.ai_usage,
            profile: ProfessionalProfile {
                email: self.email,
                phone: self.phone,
                ..ProfessionalProfile::default()
            },
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
