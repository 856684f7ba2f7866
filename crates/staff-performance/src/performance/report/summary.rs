use std::collections::BTreeMap;

use super::views::{
    AdoptionBand, AiUsageSummary, DepartmentEntry, ProfessionalDetailView,
    ProfessionalSnapshotView, RoleEntry, TeamReportSummary, TierBreakdownEntry,
};
use crate::performance::compensation::COMPENSATION_TIERS;
use crate::performance::domain::{Role, Trend};
use crate::performance::professional::Professional;
use crate::performance::recommendations::get_recommendations;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Length limit for the top-performer and needs-attention lists.
    pub highlight_count: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { highlight_count: 3 }
    }
}

/// Aggregated view over a roster snapshot.
#[derive(Debug, Clone)]
pub struct TeamReport<'a> {
    professionals: &'a [Professional],
    options: ReportOptions,
}

impl<'a> TeamReport<'a> {
    pub fn new(professionals: &'a [Professional], options: ReportOptions) -> Self {
        Self {
            professionals,
            options,
        }
    }

    pub fn summary(&self) -> TeamReportSummary {
        let professionals = self.professionals;
        let headcount = professionals.len();

        TeamReportSummary {
            headcount,
            average_performance: average(professionals.iter().map(Professional::performance)),
            total_salary: professionals.iter().map(Professional::salary).sum(),
            total_bonus: professionals.iter().map(Professional::bonus).sum(),
            tier_breakdown: self.tier_breakdown(),
            departments: self.departments(),
            roles: self.roles(),
            top_performers: self.top_performers(),
            needs_attention: self.needs_attention(),
            ai_usage: self.ai_usage(),
        }
    }

    fn tier_breakdown(&self) -> Vec<TierBreakdownEntry> {
        COMPENSATION_TIERS
            .iter()
            .map(|tier| {
                let members: Vec<&Professional> = self
                    .professionals
                    .iter()
                    .filter(|professional| professional.tier().tier == tier.tier)
                    .collect();

                TierBreakdownEntry {
                    tier: tier.tier,
                    tier_label: tier.name,
                    bonus_percentage: tier.bonus_percentage,
                    headcount: members.len(),
                    total_bonus: members.iter().map(|professional| professional.bonus()).sum(),
                }
            })
            .collect()
    }

    fn departments(&self) -> Vec<DepartmentEntry> {
        let mut grouped: BTreeMap<&str, Vec<&Professional>> = BTreeMap::new();
        for professional in self.professionals {
            grouped
                .entry(professional.department.as_str())
                .or_default()
                .push(professional);
        }

        grouped
            .into_iter()
            .map(|(department, members)| DepartmentEntry {
                department: department.to_string(),
                headcount: members.len(),
                average_performance: average(members.iter().map(|p| p.performance())),
                total_salary: members.iter().map(|p| p.salary()).sum(),
                total_bonus: members.iter().map(|p| p.bonus()).sum(),
            })
            .collect()
    }

    fn roles(&self) -> Vec<RoleEntry> {
        let mut entries: Vec<RoleEntry> = Role::ordered()
            .into_iter()
            .filter_map(|role| {
                let members: Vec<&Professional> = self
                    .professionals
                    .iter()
                    .filter(|professional| professional.role == role)
                    .collect();
                if members.is_empty() {
                    return None;
                }

                Some(RoleEntry {
                    role,
                    role_label: role.label(),
                    headcount: members.len(),
                    average_performance: average(members.iter().map(|p| p.performance())),
                    average_ai_usage: average(members.iter().map(|p| p.ai_usage)),
                })
            })
            .collect();

        entries.sort_by(|left, right| left.role_label.cmp(right.role_label));
        entries
    }

    fn top_performers(&self) -> Vec<ProfessionalSnapshotView> {
        let mut ranked: Vec<&Professional> = self.professionals.iter().collect();
        ranked.sort_by(|left, right| right.performance().total_cmp(&left.performance()));

        ranked
            .into_iter()
            .take(self.options.highlight_count)
            .map(snapshot)
            .collect()
    }

    /// Tier 3 members and anyone trending down, weakest first.
    fn needs_attention(&self) -> Vec<ProfessionalSnapshotView> {
        let mut flagged: Vec<&Professional> = self
            .professionals
            .iter()
            .filter(|professional| {
                professional.tier().tier == 3 || professional.trend == Trend::Down
            })
            .collect();
        flagged.sort_by(|left, right| left.performance().total_cmp(&right.performance()));

        flagged
            .into_iter()
            .take(self.options.highlight_count)
            .map(snapshot)
            .collect()
    }

    fn ai_usage(&self) -> AiUsageSummary {
        let mut summary = AiUsageSummary {
            average_usage: average(self.professionals.iter().map(|p| p.ai_usage)),
            ..AiUsageSummary::default()
        };

        for professional in self.professionals {
            match AdoptionBand::from_usage(professional.ai_usage) {
                AdoptionBand::High => summary.high_adopters += 1,
                AdoptionBand::Moderate => summary.moderate_adopters += 1,
                AdoptionBand::Low => summary.low_adopters += 1,
            }
        }

        summary
    }
}

pub fn professional_detail(professional: &Professional) -> ProfessionalDetailView {
    ProfessionalDetailView {
        snapshot: snapshot(professional),
        salary: professional.salary(),
        tier: *professional.tier(),
        ai_usage: professional.ai_usage,
        adoption_band: AdoptionBand::from_usage(professional.ai_usage),
        metrics: professional.metrics().to_vec(),
        recommendations: get_recommendations(professional.metrics(), professional.role),
    }
}

fn snapshot(professional: &Professional) -> ProfessionalSnapshotView {
    ProfessionalSnapshotView {
        id: professional.id.clone(),
        name: professional.name.clone(),
        role: professional.role,
        role_label: professional.role.label(),
        department: professional.department.clone(),
        performance: professional.performance(),
        tier_label: professional.tier().name,
        bonus: professional.bonus(),
        trend: professional.trend,
        trend_label: professional.trend.label(),
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::generator::ProfessionalGenerator;
    use crate::performance::professional::ProfessionalId;
    use chrono::NaiveDate;

    fn roster(size: usize) -> Vec<Professional> {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");
        ProfessionalGenerator::seeded(11, today).generate_roster(size)
    }

    #[test]
    fn empty_roster_produces_zeroed_summary() {
        let summary = TeamReport::new(&[], ReportOptions::default()).summary();

        assert_eq!(summary.headcount, 0);
        assert_eq!(summary.average_performance, 0.0);
        assert_eq!(summary.tier_breakdown.len(), 3);
        assert!(summary.tier_breakdown.iter().all(|entry| entry.headcount == 0));
        assert!(summary.departments.is_empty());
        assert!(summary.top_performers.is_empty());
    }

    #[test]
    fn tier_headcounts_cover_the_roster() {
        let professionals = roster(18);
        let summary = TeamReport::new(&professionals, ReportOptions::default()).summary();

        let counted: usize = summary
            .tier_breakdown
            .iter()
            .map(|entry| entry.headcount)
            .sum();
        assert_eq!(counted, 18);

        let bonus_by_tier: f64 = summary
            .tier_breakdown
            .iter()
            .map(|entry| entry.total_bonus)
            .sum();
        assert!((bonus_by_tier - summary.total_bonus).abs() < 1e-6);
    }

    #[test]
    fn top_performers_are_sorted_and_limited() {
        let professionals = roster(12);
        let options = ReportOptions { highlight_count: 4 };
        let summary = TeamReport::new(&professionals, options).summary();

        assert_eq!(summary.top_performers.len(), 4);
        assert!(summary
            .top_performers
            .windows(2)
            .all(|pair| pair[0].performance >= pair[1].performance));
    }

    #[test]
    fn needs_attention_only_lists_tier_three_or_declining() {
        let professionals = roster(24);
        let options = ReportOptions {
            highlight_count: 24,
        };
        let summary = TeamReport::new(&professionals, options).summary();

        assert!(summary
            .needs_attention
            .iter()
            .all(|entry| entry.tier_label == "Tier 3" || entry.trend == Trend::Down));
    }

    #[test]
    fn roles_and_departments_are_grouped() {
        let professionals = roster(12);
        let summary = TeamReport::new(&professionals, ReportOptions::default()).summary();

        assert_eq!(summary.roles.len(), 6);
        assert!(summary.roles.iter().all(|entry| entry.headcount == 2));
        assert_eq!(summary.departments.len(), 6);
        let adopters = summary.ai_usage.high_adopters
            + summary.ai_usage.moderate_adopters
            + summary.ai_usage.low_adopters;
        assert_eq!(adopters, 12);
    }

    #[test]
    fn detail_view_includes_recommendations() {
        let professionals = roster(1);
        let detail = professional_detail(&professionals[0]);

        assert_eq!(detail.metrics.len(), 5);
        assert_eq!(detail.recommendations.len(), 2);
        assert_eq!(detail.snapshot.bonus, professionals[0].bonus());
    }

    #[test]
    fn detail_json_omits_empty_recommendations() {
        let unscored = Professional::new(
            ProfessionalId("pro-000009".to_string()),
            "Ravi Patel",
            Role::HealthcareIt,
            Role::HealthcareIt.default_department(),
            Vec::new(),
            95_000.0,
        );

        let json = serde_json::to_value(professional_detail(&unscored)).expect("detail serializes");

        assert!(json.get("recommendations").is_none());
        assert_eq!(json["id"], "pro-000009");
        assert_eq!(json["tier"]["tier"], 3);
    }
}
