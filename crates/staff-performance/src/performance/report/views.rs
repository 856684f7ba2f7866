use crate::performance::compensation::CompensationTier;
use crate::performance::domain::{AiRecommendation, Metric, Role, Trend};
use crate::performance::professional::ProfessionalId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TierBreakdownEntry {
    pub tier: u8,
    pub tier_label: &'static str,
    pub bonus_percentage: f64,
    pub headcount: usize,
    pub total_bonus: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentEntry {
    pub department: String,
    pub headcount: usize,
    pub average_performance: f64,
    pub total_salary: f64,
    pub total_bonus: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleEntry {
    pub role: Role,
    pub role_label: &'static str,
    pub headcount: usize,
    pub average_performance: f64,
    pub average_ai_usage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalSnapshotView {
    pub id: ProfessionalId,
    pub name: String,
    pub role: Role,
    pub role_label: &'static str,
    pub department: String,
    pub performance: f64,
    pub tier_label: &'static str,
    pub bonus: f64,
    pub trend: Trend,
    pub trend_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionBand {
    High,
    Moderate,
    Low,
}

impl AdoptionBand {
    /// 70% and above is high adoption, below 40% is low.
    pub fn from_usage(ai_usage: f64) -> Self {
        if ai_usage >= 70.0 {
            Self::High
        } else if ai_usage >= 40.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AiUsageSummary {
    pub average_usage: f64,
    pub high_adopters: usize,
    pub moderate_adopters: usize,
    pub low_adopters: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamReportSummary {
    pub headcount: usize,
    pub average_performance: f64,
    pub total_salary: f64,
    pub total_bonus: f64,
    pub tier_breakdown: Vec<TierBreakdownEntry>,
    pub departments: Vec<DepartmentEntry>,
    pub roles: Vec<RoleEntry>,
    pub top_performers: Vec<ProfessionalSnapshotView>,
    pub needs_attention: Vec<ProfessionalSnapshotView>,
    pub ai_usage: AiUsageSummary,
}

/// Everything the detail panel shows for a single professional.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalDetailView {
    #[serde(flatten)]
    pub snapshot: ProfessionalSnapshotView,
    pub salary: f64,
    pub tier: CompensationTier,
    pub ai_usage: f64,
    pub adoption_band: AdoptionBand,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<AiRecommendation>,
}
