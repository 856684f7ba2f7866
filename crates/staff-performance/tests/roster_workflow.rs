use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;
use staff_performance::performance::roster::{
    InMemoryProfessionalRepository, NewProfessional, RepositoryError, RosterError, RosterService,
};
use staff_performance::performance::{
    calculate_compensation, MetricKey, ProfessionalGenerator, ReportOptions, Role,
    RosterImporter, TeamReport,
};

const ROSTER_CSV: &str = "\
Name,Role,Department,Email,Phone,Salary,Trend,AI Usage,Scores
Ravi Patel,Lab Technician,,ravi@carenet.health,555-0101,80000,up,42,Test Accuracy=95;Turnaround Time=85;Safety Compliance=70;Documentation Accuracy=60;Equipment Maintenance=90
Lena Ortiz,Healthcare IT,Digital Health,lena@carenet.health,555-0102,110000,down,81,System Uptime=99;Ticket Resolution Time=72;Security Compliance=88;User Satisfaction=64;Project Delivery=70
";

fn service() -> RosterService<InMemoryProfessionalRepository> {
    RosterService::new(Arc::new(InMemoryProfessionalRepository::default()))
}

#[test]
fn imported_roster_flows_into_a_team_report() {
    let service = service();
    let rows = RosterImporter::from_reader(Cursor::new(ROSTER_CSV)).expect("csv parses");
    for row in rows {
        service.add(row).expect("row is complete");
    }

    let professionals = service.list().expect("list succeeds");
    assert_eq!(professionals.len(), 2);

    let ravi = &professionals[0];
    assert_eq!(ravi.role, Role::LabTechnician);
    assert_eq!(ravi.department, "Laboratory Services");
    assert!((ravi.performance() - 83.0).abs() < 1e-9);
    assert!((ravi.bonus() - 6_640.0).abs() < 1e-6);

    let lena = &professionals[1];
    assert_eq!(lena.department, "Digital Health");

    let summary = TeamReport::new(&professionals, ReportOptions::default()).summary();
    assert_eq!(summary.headcount, 2);
    assert_eq!(summary.departments.len(), 2);
    assert_eq!(summary.ai_usage.high_adopters, 1);
    assert_eq!(summary.ai_usage.moderate_adopters, 1);
    assert!(summary
        .needs_attention
        .iter()
        .any(|entry| entry.name == "Lena Ortiz"));
}

#[test]
fn rescoring_refreshes_performance_and_bonus() {
    let service = service();
    let stored = service
        .add(
            NewProfessional::new("Ravi Patel", Role::LabTechnician, 80_000.0)
                .with_score(MetricKey::TestAccuracy, 95.0)
                .with_score(MetricKey::TurnaroundTime, 85.0)
                .with_score(MetricKey::SafetyCompliance, 70.0)
                .with_score(MetricKey::DocumentationAccuracy, 60.0)
                .with_score(MetricKey::EquipmentMaintenance, 90.0),
        )
        .expect("add succeeds");
    assert_eq!(stored.tier().tier, 2);

    let updated = service
        .update_metric_score(&stored.id, MetricKey::SafetyCompliance, 100.0)
        .expect("rescore succeeds");
    let updated = service
        .update_metric_score(&updated.id, MetricKey::DocumentationAccuracy, 100.0)
        .expect("rescore succeeds");

    assert!((updated.performance() - 93.5).abs() < 1e-9);
    assert_eq!(updated.tier().tier, 1);
    assert_eq!(updated.bonus(), calculate_compensation(&updated));

    let fetched = service.get(&stored.id).expect("record persisted");
    assert_eq!(fetched, updated);

    let evaluation = service.evaluate(&stored.id).expect("evaluation succeeds");
    assert_eq!(evaluation.tier.tier, 1);
    assert_eq!(evaluation.recommendations.len(), 2);
}

#[test]
fn deleting_removes_the_professional() {
    let service = service();
    let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");
    let mut generator = ProfessionalGenerator::seeded(5, today);
    for professional in generator.generate_roster(4) {
        service.enroll(professional).expect("enroll succeeds");
    }

    let victim = service.list().expect("list succeeds")[1].id.clone();
    service.remove(&victim).expect("remove succeeds");

    let remaining = service.list().expect("list succeeds");
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|professional| professional.id != victim));
    assert!(matches!(
        service.remove(&victim),
        Err(RosterError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn enrolling_a_duplicate_id_conflicts() {
    let service = service();
    let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");
    let professional = ProfessionalGenerator::seeded(9, today).generate(Role::Radiologist);

    service
        .enroll(professional.clone())
        .expect("first enroll succeeds");
    assert!(matches!(
        service.enroll(professional),
        Err(RosterError::Repository(RepositoryError::Conflict))
    ));
}
