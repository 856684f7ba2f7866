use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::performance::professional::{Professional, ProfessionalId};

/// Storage abstraction so the roster service can be exercised in isolation.
pub trait ProfessionalRepository: Send + Sync {
    fn insert(&self, professional: Professional) -> Result<Professional, RepositoryError>;
    fn update(&self, professional: Professional) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProfessionalId) -> Result<Option<Professional>, RepositoryError>;
    fn remove(&self, id: &ProfessionalId) -> Result<Professional, RepositoryError>;
    fn list(&self) -> Result<Vec<Professional>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Session-scoped store keyed by professional id. Listing order follows the id.
#[derive(Default, Clone)]
pub struct InMemoryProfessionalRepository {
    records: Arc<Mutex<BTreeMap<ProfessionalId, Professional>>>,
}

impl InMemoryProfessionalRepository {
    fn guard(
        &self,
    ) -> Result<MutexGuard<'_, BTreeMap<ProfessionalId, Professional>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("roster mutex poisoned".to_string()))
    }
}

impl ProfessionalRepository for InMemoryProfessionalRepository {
    fn insert(&self, professional: Professional) -> Result<Professional, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&professional.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(professional.id.clone(), professional.clone());
        Ok(professional)
    }

    fn update(&self, professional: Professional) -> Result<(), RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&professional.id) {
            guard.insert(professional.id.clone(), professional);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ProfessionalId) -> Result<Option<Professional>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &ProfessionalId) -> Result<Professional, RepositoryError> {
        let mut guard = self.guard()?;
        guard.remove(id).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<Professional>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.values().cloned().collect())
    }
}
