use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use staff_performance::config::AppConfig;
use staff_performance::error::AppError;
use staff_performance::performance::catalog::find_role_metric;
use staff_performance::performance::report::views::{ProfessionalDetailView, TeamReportSummary};
use staff_performance::performance::roster::{InMemoryProfessionalRepository, RosterService};
use staff_performance::performance::{
    bonus_amount, calculate_performance, get_compensation_tier, get_recommendations,
    professional_detail, AiRecommendation, CompensationTier, Metric, Professional,
    ProfessionalGenerator, ReportOptions, Role, RosterImporter, TeamReport,
};
use tracing::info;

use crate::infra::{parse_date, parse_role, parse_score_entry};
use crate::render;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only show the metrics for this role
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<Role>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Role whose metric catalog applies
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Role,
    /// Metric score as "Metric Name=score"; repeat for each metric
    #[arg(long = "score", value_parser = parse_score_entry)]
    pub(crate) scores: Vec<(String, f64)>,
    /// Base salary used to compute the bonus
    #[arg(long)]
    pub(crate) salary: Option<f64>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Number of generated professionals (defaults to ROSTER_SIZE)
    #[arg(long)]
    pub(crate) size: Option<usize>,
    /// Seed for the generated roster (defaults to ROSTER_SEED, else random)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Roster CSV export to report on instead of a generated roster
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Length of the top-performer and needs-attention lists
    #[arg(long)]
    pub(crate) highlight: Option<usize>,
    /// Reference date for generated hire dates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Include a per-professional breakdown
    #[arg(long)]
    pub(crate) list: bool,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the generated roster (defaults to ROSTER_SEED, else random)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Reference date for generated hire dates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

/// Result of scoring an ad-hoc set of metrics.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EvaluationOutput {
    pub(crate) role: Role,
    pub(crate) role_label: &'static str,
    pub(crate) metrics: Vec<Metric>,
    pub(crate) performance: f64,
    pub(crate) tier: CompensationTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bonus: Option<f64>,
    pub(crate) recommendations: Vec<AiRecommendation>,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let roles: Vec<Role> = match args.role {
        Some(role) => vec![role],
        None => Role::ordered().to_vec(),
    };
    render::catalog(&roles);
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let json = args.json;
    let output = evaluate(args.role, &args.scores, args.salary)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render::evaluation(&output);
    }
    Ok(())
}

pub(crate) fn evaluate(
    role: Role,
    scores: &[(String, f64)],
    salary: Option<f64>,
) -> Result<EvaluationOutput, AppError> {
    let metrics = scores
        .iter()
        .map(|(name, score)| {
            find_role_metric(role, name)
                .map(|definition| definition.scored(*score))
                .ok_or_else(|| {
                    AppError::Input(format!("metric '{name}' is not tracked for {role}"))
                })
        })
        .collect::<Result<Vec<Metric>, AppError>>()?;

    let performance = calculate_performance(&metrics);
    let tier = *get_compensation_tier(performance);
    let recommendations = get_recommendations(&metrics, role);

    Ok(EvaluationOutput {
        role,
        role_label: role.label(),
        metrics,
        performance,
        tier,
        salary,
        bonus: salary.map(|salary| bonus_amount(salary, performance)),
        recommendations,
    })
}

pub(crate) fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = RosterService::new(Arc::new(InMemoryProfessionalRepository::default()));

    match &args.roster_csv {
        Some(path) => {
            let rows = RosterImporter::from_path(path)?;
            info!(path = %path.display(), rows = rows.len(), "roster imported");
            for row in rows {
                service.add(row)?;
            }
        }
        None => {
            let size = args.size.unwrap_or(config.roster.size);
            let mut generator = roster_generator(args.seed.or(config.roster.seed), args.as_of);
            for professional in generator.generate_roster(size) {
                service.enroll(professional)?;
            }
        }
    }

    let professionals = service.list()?;
    let options = ReportOptions {
        highlight_count: args.highlight.unwrap_or(config.report.highlight_count),
    };

    if args.json {
        let payload = ReportPayload::build(&professionals, options, args.list);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let summary = TeamReport::new(&professionals, options).summary();
        render::team_report(&summary);
        if args.list {
            render::professional_listing(&professionals);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = RosterService::new(Arc::new(InMemoryProfessionalRepository::default()));
    let mut generator = roster_generator(args.seed.or(config.roster.seed), args.as_of);
    for professional in generator.generate_roster(config.roster.size) {
        service.enroll(professional)?;
    }

    let options = ReportOptions {
        highlight_count: config.report.highlight_count,
    };

    println!("Staff performance demo");
    let professionals = service.list()?;
    render::team_report(&TeamReport::new(&professionals, options).summary());

    let Some(focus) = professionals.first() else {
        return Ok(());
    };

    println!("\nFocus: {} ({})", focus.name, focus.role.label());
    render::professional_detail(&professional_detail(focus));

    if let Some(weakest) = weakest_metric(focus) {
        let key = weakest
            .key
            .ok_or_else(|| AppError::Input(format!("metric '{}' has no key", weakest.name)))?;
        let updated = service.update_metric_score(&focus.id, key, 100.0)?;
        println!(
            "\nAfter raising {} from {:.0} to 100: performance {:.1} -> {:.1}, bonus {} -> {}",
            weakest.name,
            weakest.score,
            focus.performance(),
            updated.performance(),
            render::currency(focus.bonus()),
            render::currency(updated.bonus()),
        );
    }

    if let Some(last) = professionals.last() {
        service.remove(&last.id)?;
        println!(
            "\nRemoved {} ({}); roster now has {} professional(s)",
            last.name,
            last.id,
            service.list()?.len()
        );
    }

    let professionals = service.list()?;
    println!("\nUpdated team report");
    render::team_report(&TeamReport::new(&professionals, options).summary());

    Ok(())
}

#[derive(Debug, Serialize)]
struct ReportPayload {
    summary: TeamReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    professionals: Option<Vec<ProfessionalDetailView>>,
}

impl ReportPayload {
    fn build(professionals: &[Professional], options: ReportOptions, include_list: bool) -> Self {
        let summary = TeamReport::new(professionals, options).summary();
        let professionals =
            include_list.then(|| professionals.iter().map(professional_detail).collect());
        Self {
            summary,
            professionals,
        }
    }
}

fn roster_generator(seed: Option<u64>, as_of: Option<NaiveDate>) -> ProfessionalGenerator {
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    match seed {
        Some(seed) => ProfessionalGenerator::seeded(seed, as_of),
        None => ProfessionalGenerator::from_entropy(as_of),
    }
}

fn weakest_metric(professional: &Professional) -> Option<Metric> {
    professional
        .metrics()
        .iter()
        .min_by(|left, right| left.score.total_cmp(&right.score))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab_scores() -> Vec<(String, f64)> {
        [
            ("Test Accuracy", 95.0),
            ("Turnaround Time", 85.0),
            ("Safety Compliance", 70.0),
            ("Documentation Accuracy", 60.0),
            ("Equipment Maintenance", 90.0),
        ]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect()
    }

    #[test]
    fn evaluate_scores_a_full_catalog() {
        let output = evaluate(Role::LabTechnician, &lab_scores(), Some(80_000.0))
            .expect("evaluation succeeds");

        assert!((output.performance - 83.0).abs() < 1e-9);
        assert_eq!(output.tier.tier, 2);
        let bonus = output.bonus.expect("bonus computed when salary given");
        assert!((bonus - 6_640.0).abs() < 1e-6);
        assert_eq!(output.recommendations.len(), 2);
    }

    #[test]
    fn evaluate_without_scores_falls_to_tier_three() {
        let output = evaluate(Role::Psychiatrist, &[], None).expect("evaluation succeeds");

        assert_eq!(output.performance, 0.0);
        assert_eq!(output.tier.tier, 3);
        assert!(output.bonus.is_none());
        assert!(output.recommendations.is_empty());
    }

    #[test]
    fn evaluate_rejects_metrics_from_other_roles() {
        let scores = vec![("System Uptime".to_string(), 99.0)];
        let result = evaluate(Role::Radiologist, &scores, None);
        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[test]
    fn report_payload_lists_details_on_request() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");
        let professionals = ProfessionalGenerator::seeded(21, today).generate_roster(6);

        let payload = ReportPayload::build(&professionals, ReportOptions::default(), true);
        assert_eq!(payload.summary.headcount, 6);
        assert_eq!(payload.professionals.as_ref().map(Vec::len), Some(6));

        let payload = ReportPayload::build(&professionals, ReportOptions::default(), false);
        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert!(json.get("professionals").is_none());
        assert_eq!(json["summary"]["tier_breakdown"].as_array().map(Vec::len), Some(3));
    }
}
