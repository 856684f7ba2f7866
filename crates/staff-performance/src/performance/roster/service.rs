use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::repository::{ProfessionalRepository, RepositoryError};
use crate::performance::catalog::{find_role_metric_by_key, get_role_metrics};
use crate::performance::compensation::{calculate_compensation, CompensationTier};
use crate::performance::domain::{AiRecommendation, Metric, MetricKey, Role, Trend};
use crate::performance::professional::{Professional, ProfessionalId, ProfessionalProfile};
use crate::performance::recommendations::get_recommendations;

const ID_PREFIX: &str = "pro-";

/// Input for adding a professional through the edit form or an import.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfessional {
    pub name: String,
    pub role: Role,
    pub department: Option<String>,
    pub salary: f64,
    pub scores: BTreeMap<MetricKey, f64>,
    pub trend: Trend,
    pub ai_usage: f64,
    pub profile: ProfessionalProfile,
}

impl NewProfessional {
    pub fn new(name: impl Into<String>, role: Role, salary: f64) -> Self {
        Self {
            name: name.into(),
            role,
            department: None,
            salary,
            scores: BTreeMap::new(),
            trend: Trend::Stable,
            ai_usage: 0.0,
            profile: ProfessionalProfile::default(),
        }
    }

    pub fn with_score(mut self, key: MetricKey, score: f64) -> Self {
        self.scores.insert(key, score);
        self
    }
}

/// Scoring snapshot for one professional.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalEvaluation {
    pub professional_id: ProfessionalId,
    pub performance: f64,
    pub tier: CompensationTier,
    pub bonus: f64,
    pub recommendations: Vec<AiRecommendation>,
}

impl ProfessionalEvaluation {
    pub fn of(professional: &Professional) -> Self {
        Self {
            professional_id: professional.id.clone(),
            performance: professional.performance(),
            tier: *professional.tier(),
            bonus: calculate_compensation(professional),
            recommendations: get_recommendations(professional.metrics(), professional.role),
        }
    }
}

/// Service owning the roster lifecycle: add, rescore, delete.
pub struct RosterService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> RosterService<R>
where
    R: ProfessionalRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> ProfessionalId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ProfessionalId(format!("{ID_PREFIX}{id:06}"))
    }

    /// Moves the sequence past an externally issued id so later adds cannot reuse it.
    fn reserve(&self, id: &ProfessionalId) {
        if let Some(number) = id
            .0
            .strip_prefix(ID_PREFIX)
            .and_then(|digits| digits.parse::<u64>().ok())
        {
            self.sequence.fetch_max(number + 1, Ordering::Relaxed);
        }
    }

    /// Adds a professional, attaching the supplied scores to the role's catalog metrics.
    pub fn add(&self, input: NewProfessional) -> Result<Professional, RosterError> {
        let metrics = catalog_metrics(input.role, &input.scores)?;
        let department = input
            .department
            .unwrap_or_else(|| input.role.default_department().to_string());

        let professional = Professional::new(
            self.next_id(),
            input.name,
            input.role,
            department,
            metrics,
            input.salary,
        )
        .with_profile(input.profile)
        .with_trend(input.trend)
        .with_ai_usage(input.ai_usage);

        let stored = self.repository.insert(professional)?;
        info!(
            id = %stored.id,
            role = stored.role.label(),
            performance = stored.performance(),
            "professional added"
        );
        Ok(stored)
    }

    /// Stores an already-built professional under its own id.
    pub fn enroll(&self, professional: Professional) -> Result<Professional, RosterError> {
        let stored = self.repository.insert(professional)?;
        self.reserve(&stored.id);
        debug!(id = %stored.id, "professional enrolled");
        Ok(stored)
    }

    pub fn update_metric_score(
        &self,
        id: &ProfessionalId,
        key: MetricKey,
        score: f64,
    ) -> Result<Professional, RosterError> {
        ensure_score_in_range(key, score)?;
        let mut professional = self.get(id)?;

        if !professional.set_metric_score(key, score) {
            return Err(RosterError::MetricNotInRole {
                role: professional.role,
                metric: key,
            });
        }

        self.repository.update(professional.clone())?;
        debug!(
            id = %professional.id,
            metric = ?key,
            score,
            performance = professional.performance(),
            "metric rescored"
        );
        Ok(professional)
    }

    pub fn update_salary(
        &self,
        id: &ProfessionalId,
        salary: f64,
    ) -> Result<Professional, RosterError> {
        let mut professional = self.get(id)?;
        professional.set_salary(salary);
        self.repository.update(professional.clone())?;
        Ok(professional)
    }

    pub fn remove(&self, id: &ProfessionalId) -> Result<Professional, RosterError> {
        let removed = self.repository.remove(id)?;
        info!(id = %removed.id, "professional removed");
        Ok(removed)
    }

    pub fn get(&self, id: &ProfessionalId) -> Result<Professional, RosterError> {
        let professional = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(professional)
    }

    pub fn list(&self) -> Result<Vec<Professional>, RosterError> {
        Ok(self.repository.list()?)
    }

    pub fn evaluate(&self, id: &ProfessionalId) -> Result<ProfessionalEvaluation, RosterError> {
        let professional = self.get(id)?;
        Ok(ProfessionalEvaluation::of(&professional))
    }
}

fn catalog_metrics(
    role: Role,
    scores: &BTreeMap<MetricKey, f64>,
) -> Result<Vec<Metric>, RosterError> {
    if let Some(foreign) = scores
        .keys()
        .find(|key| find_role_metric_by_key(role, **key).is_none())
    {
        return Err(RosterError::MetricNotInRole {
            role,
            metric: *foreign,
        });
    }

    get_role_metrics(role)
        .iter()
        .map(|definition| {
            let score = *scores
                .get(&definition.key)
                .ok_or(RosterError::MissingScore {
                    metric: definition.name,
                })?;
            ensure_score_in_range(definition.key, score)?;
            Ok(definition.scored(score))
        })
        .collect()
}

fn ensure_score_in_range(metric: MetricKey, score: f64) -> Result<(), RosterError> {
    if (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        Err(RosterError::ScoreOutOfRange { metric, score })
    }
}

/// Error raised by the roster service.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("no score supplied for metric '{metric}'")]
    MissingScore { metric: &'static str },
    #[error("metric {metric:?} is not tracked for role {role}")]
    MetricNotInRole { role: Role, metric: MetricKey },
    #[error("score {score} for metric {metric:?} must be between 0 and 100")]
    ScoreOutOfRange { metric: MetricKey, score: f64 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::generator::ProfessionalGenerator;
    use crate::performance::roster::InMemoryProfessionalRepository;

    fn service() -> RosterService<InMemoryProfessionalRepository> {
        RosterService::new(Arc::new(InMemoryProfessionalRepository::default()))
    }

    fn radiologist() -> NewProfessional {
        NewProfessional::new("Mei Tanaka", Role::Radiologist, 350_000.0)
            .with_score(MetricKey::DiagnosticAccuracy, 94.0)
            .with_score(MetricKey::ReportTurnaroundTime, 88.0)
            .with_score(MetricKey::ImageQualityAssessment, 90.0)
            .with_score(MetricKey::CriticalFindingsCommunication, 96.0)
            .with_score(MetricKey::PeerReviews, 85.0)
    }

    #[test]
    fn add_assigns_sequential_ids_and_default_department() {
        let service = service();
        let first = service.add(radiologist()).expect("first add succeeds");
        let second = service.add(radiologist()).expect("second add succeeds");

        assert_eq!(first.id, ProfessionalId("pro-000001".to_string()));
        assert_eq!(second.id, ProfessionalId("pro-000002".to_string()));
        assert_eq!(first.department, "Radiology");
    }

    #[test]
    fn add_after_enrolling_generated_roster_gets_a_fresh_id() {
        let service = service();
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");
        for professional in ProfessionalGenerator::seeded(5, today).generate_roster(2) {
            service.enroll(professional).expect("enroll succeeds");
        }

        let added = service.add(radiologist()).expect("add after enroll succeeds");

        assert_eq!(added.id, ProfessionalId("pro-000003".to_string()));
        assert_eq!(service.list().expect("list succeeds").len(), 3);
    }

    #[test]
    fn enrolling_foreign_ids_leaves_the_sequence_alone() {
        let service = service();
        let mut professional = service.add(radiologist()).expect("add succeeds");
        professional.id = ProfessionalId("legacy-42".to_string());
        service.enroll(professional).expect("enroll succeeds");

        let next = service.add(radiologist()).expect("add succeeds");
        assert_eq!(next.id, ProfessionalId("pro-000002".to_string()));
    }

    #[test]
    fn add_rejects_missing_scores() {
        let input = NewProfessional::new("Sam Ortiz", Role::HealthcareIt, 90_000.0)
            .with_score(MetricKey::SystemUptime, 99.0);

        match service().add(input) {
            Err(RosterError::MissingScore { metric }) => {
                assert_eq!(metric, "Ticket Resolution Time")
            }
            other => panic!("expected missing score, got {other:?}"),
        }
    }

    #[test]
    fn add_rejects_metrics_from_another_role() {
        let input = radiologist().with_score(MetricKey::TestAccuracy, 80.0);

        assert!(matches!(
            service().add(input),
            Err(RosterError::MetricNotInRole {
                role: Role::Radiologist,
                metric: MetricKey::TestAccuracy,
            })
        ));
    }

    #[test]
    fn rescoring_rejects_out_of_range_scores() {
        let service = service();
        let stored = service.add(radiologist()).expect("add succeeds");

        let result = service.update_metric_score(&stored.id, MetricKey::PeerReviews, 101.0);
        assert!(matches!(result, Err(RosterError::ScoreOutOfRange { .. })));
    }

    #[test]
    fn remove_then_get_reports_not_found() {
        let service = service();
        let stored = service.add(radiologist()).expect("add succeeds");

        service.remove(&stored.id).expect("remove succeeds");

        assert!(matches!(
            service.get(&stored.id),
            Err(RosterError::Repository(RepositoryError::NotFound))
        ));
        assert!(service.list().expect("list succeeds").is_empty());
    }
}
