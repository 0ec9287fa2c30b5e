//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating repository instances. The
//! crate ships a single in-memory backend; the factory keeps construction
//! in one place so additional backends slot in behind the same call site.

use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::ScheduleRepository;

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use studyhub::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn ScheduleRepository> {
        Arc::new(LocalRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
    }
}
