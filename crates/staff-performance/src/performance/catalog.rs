use super::domain::{Metric, MetricKey, Role};
use serde::Serialize;

/// Catalog entry for a role metric. Carries no score; attach one with [`MetricDefinition::scored`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDefinition {
    pub key: MetricKey,
    pub name: &'static str,
    pub weight: f64,
    pub description: &'static str,
}

impl MetricDefinition {
    pub fn scored(&self, score: f64) -> Metric {
        Metric {
            key: Some(self.key),
            name: self.name.to_string(),
            weight: self.weight,
            score,
            description: self.description.to_string(),
        }
    }
}

/// Returns the five weighted metrics that apply to `role`.
pub fn get_role_metrics(role: Role) -> Vec<MetricDefinition> {
    let metrics = role_table(role).to_vec();
    debug_assert_eq!(
        metrics.iter().map(|metric| metric.weight).sum::<f64>(),
        100.0,
        "metric weights for {} must sum to 100",
        role.label()
    );
    metrics
}

/// Sum of catalog weights for `role`.
pub fn role_metric_weight_total(role: Role) -> f64 {
    role_table(role).iter().map(|metric| metric.weight).sum()
}

/// Looks up a catalog entry for `role` by display name, ignoring case and surrounding whitespace.
pub fn find_role_metric(role: Role, name: &str) -> Option<MetricDefinition> {
    let needle = name.trim();
    role_table(role)
        .iter()
        .find(|metric| metric.name.eq_ignore_ascii_case(needle))
        .copied()
}

pub fn find_role_metric_by_key(role: Role, key: MetricKey) -> Option<MetricDefinition> {
    role_table(role)
        .iter()
        .find(|metric| metric.key == key)
        .copied()
}

const fn def(
    key: MetricKey,
    name: &'static str,
    weight: f64,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        key,
        name,
        weight,
        description,
    }
}

fn role_table(role: Role) -> &'static [MetricDefinition] {
    match role {
        Role::GeneralDoctor => &GENERAL_DOCTOR,
        Role::Psychiatrist => &PSYCHIATRIST,
        Role::Radiologist => &RADIOLOGIST,
        Role::QualityAssurance => &QUALITY_ASSURANCE,
        Role::HealthcareIt => &HEALTHCARE_IT,
        Role::LabTechnician => &LAB_TECHNICIAN,
    }
}

static GENERAL_DOCTOR: [MetricDefinition; 5] = [
    def(
        MetricKey::PatientSatisfaction,
        "Patient Satisfaction",
        25.0,
        "Patient feedback and satisfaction survey results",
    ),
    def(
        MetricKey::ClinicalOutcomes,
        "Clinical Outcomes",
        30.0,
        "Treatment success rates and patient recovery metrics",
    ),
    def(
        MetricKey::DocumentationQuality,
        "Documentation Quality",
        15.0,
        "Completeness and accuracy of medical records",
    ),
    def(
        MetricKey::PreventiveCareMeasures,
        "Preventive Care Measures",
        20.0,
        "Screening rates and preventive care compliance",
    ),
    def(
        MetricKey::PeerReviews,
        "Peer Reviews",
        10.0,
        "Evaluations from colleagues and supervisors",
    ),
];

static PSYCHIATRIST: [MetricDefinition; 5] = [
    def(
        MetricKey::PatientProgress,
        "Patient Progress",
        30.0,
        "Measured improvement on standardized symptom scales",
    ),
    def(
        MetricKey::TreatmentAdherence,
        "Treatment Adherence",
        20.0,
        "Patient adherence to medication and therapy plans",
    ),
    def(
        MetricKey::PatientSatisfaction,
        "Patient Satisfaction",
        20.0,
        "Patient feedback on care experience and therapeutic alliance",
    ),
    def(
        MetricKey::DocumentationQuality,
        "Documentation Quality",
        15.0,
        "Timeliness and completeness of session notes and treatment plans",
    ),
    def(
        MetricKey::CrisisManagement,
        "Crisis Management",
        15.0,
        "Response quality during psychiatric emergencies",
    ),
];

static RADIOLOGIST: [MetricDefinition; 5] = [
    def(
        MetricKey::DiagnosticAccuracy,
        "Diagnostic Accuracy",
        35.0,
        "Concordance of reads with follow-up findings and second opinions",
    ),
    def(
        MetricKey::ReportTurnaroundTime,
        "Report Turnaround Time",
        25.0,
        "Time from image acquisition to finalized report",
    ),
    def(
        MetricKey::ImageQualityAssessment,
        "Image Quality Assessment",
        15.0,
        "Identification of suboptimal studies and protocol feedback",
    ),
    def(
        MetricKey::CriticalFindingsCommunication,
        "Critical Findings Communication",
        15.0,
        "Timely escalation of urgent findings to care teams",
    ),
    def(
        MetricKey::PeerReviews,
        "Peer Reviews",
        10.0,
        "Results of departmental peer review audits",
    ),
];

static QUALITY_ASSURANCE: [MetricDefinition; 5] = [
    def(
        MetricKey::ComplianceRate,
        "Compliance Rate",
        30.0,
        "Adherence to regulatory and accreditation standards",
    ),
    def(
        MetricKey::IncidentResolution,
        "Incident Resolution",
        25.0,
        "Speed and thoroughness of incident investigations",
    ),
    def(
        MetricKey::AuditCompletion,
        "Audit Completion",
        20.0,
        "Scheduled audits completed on time",
    ),
    def(
        MetricKey::ProcessImprovement,
        "Process Improvement",
        15.0,
        "Improvement initiatives delivered and sustained",
    ),
    def(
        MetricKey::StaffTraining,
        "Staff Training",
        10.0,
        "Quality training sessions delivered to clinical staff",
    ),
];

static HEALTHCARE_IT: [MetricDefinition; 5] = [
    def(
        MetricKey::SystemUptime,
        "System Uptime",
        30.0,
        "Availability of clinical systems and infrastructure",
    ),
    def(
        MetricKey::TicketResolutionTime,
        "Ticket Resolution Time",
        25.0,
        "Average time to resolve support requests",
    ),
    def(
        MetricKey::SecurityCompliance,
        "Security Compliance",
        20.0,
        "Adherence to HIPAA and internal security controls",
    ),
    def(
        MetricKey::UserSatisfaction,
        "User Satisfaction",
        15.0,
        "Feedback from clinical and administrative users",
    ),
    def(
        MetricKey::ProjectDelivery,
        "Project Delivery",
        10.0,
        "Projects delivered on schedule and within scope",
    ),
];

static LAB_TECHNICIAN: [MetricDefinition; 5] = [
    def(
        MetricKey::TestAccuracy,
        "Test Accuracy",
        35.0,
        "Accuracy of test results against proficiency samples",
    ),
    def(
        MetricKey::TurnaroundTime,
        "Turnaround Time",
        25.0,
        "Time from specimen receipt to reported result",
    ),
    def(
        MetricKey::SafetyCompliance,
        "Safety Compliance",
        15.0,
        "Adherence to biosafety and specimen handling protocols",
    ),
    def(
        MetricKey::DocumentationAccuracy,
        "Documentation Accuracy",
        15.0,
        "Accuracy of specimen logs and chain-of-custody records",
    ),
    def(
        MetricKey::EquipmentMaintenance,
        "Equipment Maintenance",
        10.0,
        "Calibration and preventive maintenance completed on schedule",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_five_metrics_summing_to_one_hundred() {
        for role in Role::ordered() {
            let metrics = get_role_metrics(role);
            assert_eq!(metrics.len(), 5, "{} should expose five metrics", role);
            assert_eq!(role_metric_weight_total(role), 100.0);
        }
    }

    #[test]
    fn general_doctor_table_matches_expected_weights() {
        let weights: Vec<(&str, f64)> = get_role_metrics(Role::GeneralDoctor)
            .iter()
            .map(|metric| (metric.name, metric.weight))
            .collect();

        assert_eq!(
            weights,
            vec![
                ("Patient Satisfaction", 25.0),
                ("Clinical Outcomes", 30.0),
                ("Documentation Quality", 15.0),
                ("Preventive Care Measures", 20.0),
                ("Peer Reviews", 10.0),
            ]
        );
    }

    #[test]
    fn metric_keys_are_unique_within_a_role() {
        for role in Role::ordered() {
            let mut keys: Vec<MetricKey> =
                get_role_metrics(role).iter().map(|metric| metric.key).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), 5);
        }
    }

    #[test]
    fn find_role_metric_ignores_case() {
        let metric = find_role_metric(Role::LabTechnician, " turnaround time ")
            .expect("metric exists for lab technicians");
        assert_eq!(metric.key, MetricKey::TurnaroundTime);
        assert!(find_role_metric(Role::LabTechnician, "Clinical Outcomes").is_none());
    }

    #[test]
    fn scored_definition_carries_catalog_identity() {
        let metric = get_role_metrics(Role::Radiologist)[0].scored(91.5);
        assert_eq!(metric.key, Some(MetricKey::DiagnosticAccuracy));
        assert_eq!(metric.weight, 35.0);
        assert_eq!(metric.score, 91.5);
    }
}
