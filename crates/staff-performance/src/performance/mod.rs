//! Weighted performance scoring, compensation tiers, and the roster built on top of them.
//!
//! The scoring core (`catalog`, `scoring`, `compensation`, `recommendations`) is a set of pure
//! functions. Callers own all state and pass it in on every call.

pub mod catalog;
pub mod compensation;
pub mod domain;
pub mod generator;
pub mod import;
pub mod professional;
pub mod recommendations;
pub mod report;
pub mod roster;
pub mod scoring;

pub use catalog::{get_role_metrics, MetricDefinition};
pub use compensation::{
    bonus_amount, calculate_compensation, get_compensation_tier, CompensationTier,
    COMPENSATION_TIERS,
};
pub use domain::{AiRecommendation, Impact, Metric, MetricKey, Role, Trend, UnknownRole};
pub use generator::ProfessionalGenerator;
pub use import::{ImportError, RosterImporter};
pub use professional::{Professional, ProfessionalId, ProfessionalProfile};
pub use recommendations::get_recommendations;
pub use report::{professional_detail, ReportOptions, TeamReport};
pub use scoring::calculate_performance;
