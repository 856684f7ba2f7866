use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clinical and operational roles tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    GeneralDoctor,
    Psychiatrist,
    Radiologist,
    QualityAssurance,
    HealthcareIt,
    LabTechnician,
}

impl Role {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::GeneralDoctor,
            Self::Psychiatrist,
            Self::Radiologist,
            Self::QualityAssurance,
            Self::HealthcareIt,
            Self::LabTechnician,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralDoctor => "General Doctor",
            Self::Psychiatrist => "Psychiatrist",
            Self::Radiologist => "Radiologist",
            Self::QualityAssurance => "Quality Assurance",
            Self::HealthcareIt => "Healthcare IT",
            Self::LabTechnician => "Lab Technician",
        }
    }

    /// Department a freshly generated or imported professional defaults to.
    pub const fn default_department(self) -> &'static str {
        match self {
            Self::GeneralDoctor => "General Medicine",
            Self::Psychiatrist => "Behavioral Health",
            Self::Radiologist => "Radiology",
            Self::QualityAssurance => "Quality & Compliance",
            Self::HealthcareIt => "Information Technology",
            Self::LabTechnician => "Laboratory Services",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "generaldoctor" => Ok(Self::GeneralDoctor),
            "psychiatrist" => Ok(Self::Psychiatrist),
            "radiologist" => Ok(Self::Radiologist),
            "qualityassurance" | "qa" => Ok(Self::QualityAssurance),
            "healthcareit" => Ok(Self::HealthcareIt),
            "labtechnician" => Ok(Self::LabTechnician),
            _ => Err(UnknownRole(value.trim().to_string())),
        }
    }
}

/// Stable identifier for a catalog metric, independent of its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    PatientSatisfaction,
    ClinicalOutcomes,
    DocumentationQuality,
    PreventiveCareMeasures,
    PeerReviews,
    PatientProgress,
    TreatmentAdherence,
    CrisisManagement,
    DiagnosticAccuracy,
    ReportTurnaroundTime,
    ImageQualityAssessment,
    CriticalFindingsCommunication,
    ComplianceRate,
    IncidentResolution,
    AuditCompletion,
    ProcessImprovement,
    StaffTraining,
    SystemUptime,
    TicketResolutionTime,
    SecurityCompliance,
    UserSatisfaction,
    ProjectDelivery,
    TestAccuracy,
    TurnaroundTime,
    SafetyCompliance,
    DocumentationAccuracy,
    EquipmentMaintenance,
}

/// A scored, weighted performance dimension.
///
/// `key` is `None` for ad-hoc metrics entered outside the role catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<MetricKey>,
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub description: String,
}

impl Metric {
    pub fn ad_hoc(name: impl Into<String>, weight: f64, score: f64) -> Self {
        Self {
            key: None,
            name: name.into(),
            weight,
            score,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Weight of 30 or more is high impact, 15 or less is low.
    pub fn from_weight(weight: f64) -> Self {
        if weight >= 30.0 {
            Self::High
        } else if weight <= 15.0 {
            Self::Low
        } else {
            Self::Medium
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Improvement suggestion produced for a low-scoring metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiRecommendation {
    pub metric: String,
    pub recommendation: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trend '{0}'")]
pub struct UnknownTrend(pub String);

impl FromStr for Trend {
    type Err = UnknownTrend;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "stable" | "" => Ok(Self::Stable),
            other => Err(UnknownTrend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_labels_and_identifiers() {
        assert_eq!("Lab Technician".parse::<Role>(), Ok(Role::LabTechnician));
        assert_eq!("healthcare_it".parse::<Role>(), Ok(Role::HealthcareIt));
        assert_eq!("general-doctor".parse::<Role>(), Ok(Role::GeneralDoctor));
        assert_eq!(
            "Surgeon".parse::<Role>(),
            Err(UnknownRole("Surgeon".to_string()))
        );
    }

    #[test]
    fn every_role_label_round_trips_through_from_str() {
        for role in Role::ordered() {
            assert_eq!(role.label().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn impact_thresholds_are_inclusive() {
        assert_eq!(Impact::from_weight(30.0), Impact::High);
        assert_eq!(Impact::from_weight(29.9), Impact::Medium);
        assert_eq!(Impact::from_weight(15.1), Impact::Medium);
        assert_eq!(Impact::from_weight(15.0), Impact::Low);
    }
}
