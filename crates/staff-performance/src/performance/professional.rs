use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::compensation::{bonus_amount, get_compensation_tier, CompensationTier};
use super::domain::{Metric, MetricKey, Role, Trend};
use super::scoring::calculate_performance;

/// Identifier wrapper for roster entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfessionalId(pub String);

impl std::fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact and descriptive fields that do not take part in scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub experience_years: u8,
    pub hired_on: Option<NaiveDate>,
}

/// A staff member with scored metrics and the derived performance and bonus.
///
/// `performance` and `bonus` are only reachable through accessors so they cannot drift
/// from the metrics and salary they are computed from. Deserialization ignores any stored
/// values for them and recomputes both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfessionalRecord")]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub role: Role,
    pub department: String,
    pub profile: ProfessionalProfile,
    pub trend: Trend,
    /// Share of work completed with AI assistance, as a percentage.
    pub ai_usage: f64,
    metrics: Vec<Metric>,
    salary: f64,
    performance: f64,
    bonus: f64,
}

impl Professional {
    pub fn new(
        id: ProfessionalId,
        name: impl Into<String>,
        role: Role,
        department: impl Into<String>,
        metrics: Vec<Metric>,
        salary: f64,
    ) -> Self {
        let mut professional = Self {
            id,
            name: name.into(),
            role,
            department: department.into(),
            profile: ProfessionalProfile::default(),
            trend: Trend::Stable,
            ai_usage: 0.0,
            metrics,
            salary,
            performance: 0.0,
            bonus: 0.0,
        };
        professional.recompute();
        professional
    }

    pub fn with_profile(mut self, profile: ProfessionalProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_ai_usage(mut self, ai_usage: f64) -> Self {
        self.ai_usage = ai_usage;
        self
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn performance(&self) -> f64 {
        self.performance
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    pub fn tier(&self) -> &'static CompensationTier {
        get_compensation_tier(self.performance)
    }

    /// Updates the score of the metric identified by `key`. Returns `false` when the
    /// professional has no such metric.
    pub fn set_metric_score(&mut self, key: MetricKey, score: f64) -> bool {
        let Some(metric) = self
            .metrics
            .iter_mut()
            .find(|metric| metric.key == Some(key))
        else {
            return false;
        };

        metric.score = score;
        self.recompute();
        true
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
        self.recompute();
    }

    pub fn replace_metrics(&mut self, metrics: Vec<Metric>) {
        self.metrics = metrics;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.performance = calculate_performance(&self.metrics);
        self.bonus = bonus_amount(self.salary, self.performance);
    }
}

/// Serialized form of a [`Professional`] without the derived fields.
#[derive(Deserialize)]
struct ProfessionalRecord {
    id: ProfessionalId,
    name: String,
    role: Role,
    department: String,
    #[serde(default)]
    profile: ProfessionalProfile,
    trend: Trend,
    #[serde(default)]
    ai_usage: f64,
    metrics: Vec<Metric>,
    salary: f64,
}

impl From<ProfessionalRecord> for Professional {
    fn from(record: ProfessionalRecord) -> Self {
        Professional::new(
            record.id,
            record.name,
            record.role,
            record.department,
            record.metrics,
            record.salary,
        )
        .with_profile(record.profile)
        .with_trend(record.trend)
        .with_ai_usage(record.ai_usage)
    }
}
