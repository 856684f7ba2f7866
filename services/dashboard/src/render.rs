use staff_performance::performance::report::views::{
    ProfessionalDetailView, ProfessionalSnapshotView, TeamReportSummary,
};
use staff_performance::performance::{get_role_metrics, Professional, Role};

use crate::commands::EvaluationOutput;

/// Formats a monetary amount as whole dollars with thousands separators.
pub(crate) fn currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

pub(crate) fn catalog(roles: &[Role]) {
    for (index, role) in roles.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", role.label());
        for metric in get_role_metrics(*role) {
            println!(
                "- {} (weight {:.0}): {}",
                metric.name, metric.weight, metric.description
            );
        }
    }
}

pub(crate) fn evaluation(output: &EvaluationOutput) {
    println!("Evaluation for {}", output.role_label);
    for metric in &output.metrics {
        println!(
            "- {}: {:.1} (weight {:.0})",
            metric.name, metric.score, metric.weight
        );
    }

    println!("\nOverall performance: {:.1}", output.performance);
    println!(
        "Compensation tier: {} ({}, {} bonus)",
        output.tier.name,
        output.tier.description,
        percent(output.tier.bonus_percentage)
    );
    if let (Some(salary), Some(bonus)) = (output.salary, output.bonus) {
        println!("Bonus on {}: {}", currency(salary), currency(bonus));
    }

    if output.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for item in &output.recommendations {
            println!(
                "- [{}] {}: {}",
                item.impact.label(),
                item.metric,
                item.recommendation
            );
        }
    }
}

pub(crate) fn team_report(summary: &TeamReportSummary) {
    println!(
        "Team of {}: average performance {:.1}, payroll {}, bonus pool {}",
        summary.headcount,
        summary.average_performance,
        currency(summary.total_salary),
        currency(summary.total_bonus)
    );

    println!("\nCompensation tiers");
    for entry in &summary.tier_breakdown {
        println!(
            "- {} ({} bonus): {} professional(s), {} in bonuses",
            entry.tier_label,
            percent(entry.bonus_percentage),
            entry.headcount,
            currency(entry.total_bonus)
        );
    }

    if !summary.departments.is_empty() {
        println!("\nDepartments");
        for entry in &summary.departments {
            println!(
                "- {}: {} staff, average {:.1}, bonuses {}",
                entry.department,
                entry.headcount,
                entry.average_performance,
                currency(entry.total_bonus)
            );
        }
    }

    if !summary.roles.is_empty() {
        println!("\nRoles");
        for entry in &summary.roles {
            println!(
                "- {}: {} staff, average {:.1}, AI usage {:.0}%",
                entry.role_label, entry.headcount, entry.average_performance, entry.average_ai_usage
            );
        }
    }

    print_snapshots("Top performers", &summary.top_performers);
    print_snapshots("Needs attention", &summary.needs_attention);

    println!(
        "\nAI usage: average {:.0}% ({} high, {} moderate, {} low adopters)",
        summary.ai_usage.average_usage,
        summary.ai_usage.high_adopters,
        summary.ai_usage.moderate_adopters,
        summary.ai_usage.low_adopters
    );
}

fn print_snapshots(title: &str, entries: &[ProfessionalSnapshotView]) {
    if entries.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for entry in entries {
        println!(
            "- {} ({}, {}): {:.1}, {}, trend {}",
            entry.name,
            entry.role_label,
            entry.department,
            entry.performance,
            entry.tier_label,
            entry.trend_label
        );
    }
}

pub(crate) fn professional_detail(detail: &ProfessionalDetailView) {
    let snapshot = &detail.snapshot;
    println!(
        "{} | {} | {} | performance {:.1} | {} | salary {} | bonus {} | AI usage {:.0}% ({})",
        snapshot.id,
        snapshot.role_label,
        snapshot.department,
        snapshot.performance,
        detail.tier.name,
        currency(detail.salary),
        currency(snapshot.bonus),
        detail.ai_usage,
        detail.adoption_band.label()
    );
    for metric in &detail.metrics {
        println!(
            "  - {}: {:.0} (weight {:.0})",
            metric.name, metric.score, metric.weight
        );
    }
    for item in &detail.recommendations {
        println!(
            "  * [{}] {}: {}",
            item.impact.label(),
            item.metric,
            item.recommendation
        );
    }
}

pub(crate) fn professional_listing(professionals: &[Professional]) {
    println!("\nProfessionals");
    for professional in professionals {
        println!(
            "- {} | {} | {} | performance {:.1} | {} | bonus {}",
            professional.id,
            professional.name,
            professional.role.label(),
            professional.performance(),
            professional.tier().name,
            currency(professional.bonus())
        );
    }
}
