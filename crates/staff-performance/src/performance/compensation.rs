use super::professional::Professional;
use serde::Serialize;

/// One of the three fixed performance bands used for bonus eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompensationTier {
    pub tier: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub bonus_percentage: f64,
    /// Inclusive lower bound of the band; `None` for the catch-all tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_performance: Option<f64>,
}

/// Tiers ordered by descending performance threshold.
pub static COMPENSATION_TIERS: [CompensationTier; 3] = [
    CompensationTier {
        tier: 1,
        name: "Tier 1",
        description: "Exceptional performance (90 and above)",
        bonus_percentage: 0.20,
        minimum_performance: Some(90.0),
    },
    CompensationTier {
        tier: 2,
        name: "Tier 2",
        description: "Strong performance (80 to 89.9)",
        bonus_percentage: 0.10,
        minimum_performance: Some(80.0),
    },
    CompensationTier {
        tier: 3,
        name: "Tier 3",
        description: "Developing performance (below 80)",
        bonus_percentage: 0.05,
        minimum_performance: None,
    },
];

/// Resolves the tier for an overall score. Anything below 80, including negative values, is Tier 3.
pub fn get_compensation_tier(performance: f64) -> &'static CompensationTier {
    if performance >= 90.0 {
        &COMPENSATION_TIERS[0]
    } else if performance >= 80.0 {
        &COMPENSATION_TIERS[1]
    } else {
        &COMPENSATION_TIERS[2]
    }
}

/// `salary * tier.bonus_percentage * (performance / 100)`.
///
/// Every bonus shown anywhere in the crate goes through this function.
pub fn bonus_amount(salary: f64, performance: f64) -> f64 {
    let tier = get_compensation_tier(performance);
    salary * tier.bonus_percentage * (performance / 100.0)
}

pub fn calculate_compensation(professional: &Professional) -> f64 {
    bonus_amount(professional.salary(), professional.performance())
}
