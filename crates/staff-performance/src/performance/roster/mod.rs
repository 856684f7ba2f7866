//! In-memory roster of professionals and the lifecycle operations the dashboard drives.

pub mod repository;
pub mod service;

pub use repository::{InMemoryProfessionalRepository, ProfessionalRepository, RepositoryError};
pub use service::{NewProfessional, ProfessionalEvaluation, RosterError, RosterService};
