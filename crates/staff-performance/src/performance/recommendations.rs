use super::domain::{AiRecommendation, Impact, Metric, MetricKey, Role};

const MAX_RECOMMENDATIONS: usize = 2;

/// Suggests improvements for the two lowest-scoring metrics.
///
/// Metrics with equal scores keep their input order. The input slice is not reordered.
pub fn get_recommendations(metrics: &[Metric], role: Role) -> Vec<AiRecommendation> {
    let mut ranked: Vec<&Metric> = metrics.iter().collect();
    ranked.sort_by(|left, right| left.score.total_cmp(&right.score));

    ranked
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|metric| AiRecommendation {
            metric: metric.name.clone(),
            recommendation: recommendation_text(role, metric),
            impact: Impact::from_weight(metric.weight),
        })
        .collect()
}

/// Role guidance when the role tracks the metric, otherwise a sentence naming the metric.
fn recommendation_text(role: Role, metric: &Metric) -> String {
    match metric.key.and_then(|key| role_guidance(role, key)) {
        Some(text) => text.to_string(),
        None => format!(
            "Focus on improving {} through targeted training and regular feedback sessions.",
            metric.name.to_lowercase()
        ),
    }
}

fn role_guidance(role: Role, key: MetricKey) -> Option<&'static str> {
    use MetricKey::*;

    let text = match (role, key) {
        (Role::GeneralDoctor, PatientSatisfaction) => {
            "Schedule longer consultation slots for complex cases and follow up with patients after visits to improve their experience."
        }
        (Role::GeneralDoctor, ClinicalOutcomes) => {
            "Review treatment protocols against current clinical guidelines and track outcomes for chronic condition patients."
        }
        (Role::GeneralDoctor, DocumentationQuality) => {
            "Use structured note templates and complete charting within 24 hours of each encounter."
        }
        (Role::GeneralDoctor, PreventiveCareMeasures) => {
            "Set up automated reminders for overdue screenings and vaccinations in the patient panel."
        }
        (Role::GeneralDoctor, PeerReviews) => {
            "Participate in case review meetings and seek structured feedback from senior colleagues."
        }
        (Role::Psychiatrist, PatientProgress) => {
            "Track symptom scales at every session and adjust treatment plans when progress stalls."
        }
        (Role::Psychiatrist, TreatmentAdherence) => {
            "Introduce adherence check-ins between appointments and simplify medication regimens where possible."
        }
        (Role::Psychiatrist, PatientSatisfaction) => {
            "Collect session feedback regularly and involve patients in setting treatment goals."
        }
        (Role::Psychiatrist, DocumentationQuality) => {
            "Complete session notes the same day and keep treatment plans current after each review."
        }
        (Role::Psychiatrist, CrisisManagement) => {
            "Refresh crisis intervention training and rehearse escalation pathways with the care team."
        }
        (Role::Radiologist, DiagnosticAccuracy) => {
            "Join double-reading sessions for complex studies and review discrepancies with follow-up findings."
        }
        (Role::Radiologist, ReportTurnaroundTime) => {
            "Adopt structured reporting templates and prioritize the worklist by clinical urgency."
        }
        (Role::Radiologist, ImageQualityAssessment) => {
            "Flag suboptimal studies early and feed protocol issues back to the imaging technologists."
        }
        (Role::Radiologist, CriticalFindingsCommunication) => {
            "Use the critical results escalation workflow and document every direct communication."
        }
        (Role::Radiologist, PeerReviews) => {
            "Take part in monthly peer review audits and discuss learning cases with the department."
        }
        (Role::QualityAssurance, ComplianceRate) => {
            "Map open accreditation findings to owners and verify corrective actions before deadlines."
        }
        (Role::QualityAssurance, IncidentResolution) => {
            "Apply root cause analysis consistently and close the loop with affected departments."
        }
        (Role::QualityAssurance, AuditCompletion) => {
            "Publish a quarterly audit calendar and reserve time blocks for fieldwork."
        }
        (Role::QualityAssurance, ProcessImprovement) => {
            "Run small improvement cycles with measurable targets and share results with leadership."
        }
        (Role::QualityAssurance, StaffTraining) => {
            "Turn recurring audit findings into short training modules for clinical teams."
        }
        (Role::HealthcareIt, SystemUptime) => {
            "Strengthen monitoring and alerting on clinical systems and schedule maintenance outside peak hours."
        }
        (Role::HealthcareIt, TicketResolutionTime) => {
            "Build a knowledge base for recurring issues and triage tickets by clinical impact."
        }
        (Role::HealthcareIt, SecurityCompliance) => {
            "Complete outstanding access reviews and patch critical vulnerabilities within policy windows."
        }
        (Role::HealthcareIt, UserSatisfaction) => {
            "Hold regular check-ins with clinical users and communicate changes before rollout."
        }
        (Role::HealthcareIt, ProjectDelivery) => {
            "Break projects into smaller milestones and surface schedule risks early."
        }
        (Role::LabTechnician, TestAccuracy) => {
            "Review quality control results daily and repeat proficiency testing on flagged assays."
        }
        (Role::LabTechnician, TurnaroundTime) => {
            "Batch routine specimens efficiently and prioritize stat requests as soon as they arrive."
        }
        (Role::LabTechnician, SafetyCompliance) => {
            "Refresh biosafety training and audit specimen handling against laboratory protocols."
        }
        (Role::LabTechnician, DocumentationAccuracy) => {
            "Double-check specimen labels and chain-of-custody entries before releasing results."
        }
        (Role::LabTechnician, EquipmentMaintenance) => {
            "Follow the calibration schedule and log preventive maintenance for every instrument."
        }
        _ => return None,
    };

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::catalog::get_role_metrics;

    fn scored(role: Role, scores: &[f64]) -> Vec<Metric> {
        get_role_metrics(role)
            .iter()
            .zip(scores)
            .map(|(definition, score)| definition.scored(*score))
            .collect()
    }

    #[test]
    fn picks_the_two_lowest_scores() {
        let metrics = scored(Role::GeneralDoctor, &[88.0, 72.0, 95.0, 65.0, 90.0]);
        let recommendations = get_recommendations(&metrics, Role::GeneralDoctor);

        let names: Vec<&str> = recommendations
            .iter()
            .map(|item| item.metric.as_str())
            .collect();
        assert_eq!(names, vec!["Preventive Care Measures", "Clinical Outcomes"]);
        assert_eq!(recommendations[0].impact, Impact::Medium);
        assert_eq!(recommendations[1].impact, Impact::High);
    }

    #[test]
    fn ties_keep_input_order() {
        let metrics = scored(Role::LabTechnician, &[70.0, 70.0, 70.0, 90.0, 90.0]);
        let recommendations = get_recommendations(&metrics, Role::LabTechnician);

        assert_eq!(recommendations[0].metric, "Test Accuracy");
        assert_eq!(recommendations[1].metric, "Turnaround Time");
    }

    #[test]
    fn every_catalog_metric_has_role_guidance() {
        for role in Role::ordered() {
            for definition in get_role_metrics(role) {
                assert!(
                    role_guidance(role, definition.key).is_some(),
                    "{} lacks guidance for {}",
                    role,
                    definition.name
                );
            }
        }
    }

    #[test]
    fn foreign_metric_falls_back_to_templated_text() {
        let metric = get_role_metrics(Role::GeneralDoctor)[1].scored(40.0);
        let recommendations = get_recommendations(&[metric], Role::LabTechnician);

        assert_eq!(
            recommendations[0].recommendation,
            "Focus on improving clinical outcomes through targeted training and regular feedback sessions."
        );
    }

    #[test]
    fn ad_hoc_metric_gets_templated_text() {
        let metric = Metric::ad_hoc("Night Shift Coverage", 20.0, 50.0);

        for role in [Role::GeneralDoctor, Role::Psychiatrist] {
            let recommendations = get_recommendations(&[metric.clone()], role);
            assert_eq!(
                recommendations[0].recommendation,
                "Focus on improving night shift coverage through targeted training and regular feedback sessions."
            );
            assert_eq!(recommendations[0].impact, Impact::Medium);
        }
    }

    #[test]
    fn input_order_is_untouched() {
        let metrics = scored(Role::Radiologist, &[99.0, 10.0, 50.0, 20.0, 30.0]);
        let before = metrics.clone();
        let _ = get_recommendations(&metrics, Role::Radiologist);
        assert_eq!(metrics, before);
    }
}
