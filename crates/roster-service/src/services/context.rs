//! Service context - dependency container for services
//!
//! Holds the repositories and external collaborators needed by the workflows.

use std::sync::Arc;

use roster_core::traits::{
    CompletionRepository, CourseRepository, IdentityProvider, MemberRepository,
    ProfileDirectory, RankChangeRepository, TagRequestRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects so the same services run against
/// PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    rank_change_repo: Arc<dyn RankChangeRepository>,
    course_repo: Arc<dyn CourseRepository>,
    completion_repo: Arc<dyn CompletionRepository>,
    tag_request_repo: Arc<dyn TagRequestRepository>,

    // External collaborators
    profile_directory: Arc<dyn ProfileDirectory>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        rank_change_repo: Arc<dyn RankChangeRepository>,
        course_repo: Arc<dyn CourseRepository>,
        completion_repo: Arc<dyn CompletionRepository>,
        tag_request_repo: Arc<dyn TagRequestRepository>,
        profile_directory: Arc<dyn ProfileDirectory>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            member_repo,
            rank_change_repo,
            course_repo,
            completion_repo,
            tag_request_repo,
            profile_directory,
            identity_provider,
        }
    }

    // === Repositories ===

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn rank_change_repo(&self) -> &dyn RankChangeRepository {
        self.rank_change_repo.as_ref()
    }

    pub fn course_repo(&self) -> &dyn CourseRepository {
        self.course_repo.as_ref()
    }

    pub fn completion_repo(&self) -> &dyn CompletionRepository {
        self.completion_repo.as_ref()
    }

    pub fn tag_request_repo(&self) -> &dyn TagRequestRepository {
        self.tag_request_repo.as_ref()
    }

    // === External collaborators ===

    /// Public profile lookup for the onboarding gate
    pub fn profile_directory(&self) -> &dyn ProfileDirectory {
        self.profile_directory.as_ref()
    }

    /// Credential creation for registering members
    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    rank_change_repo: Option<Arc<dyn RankChangeRepository>>,
    course_repo: Option<Arc<dyn CourseRepository>>,
    completion_repo: Option<Arc<dyn CompletionRepository>>,
    tag_request_repo: Option<Arc<dyn TagRequestRepository>>,
    profile_directory: Option<Arc<dyn ProfileDirectory>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn rank_change_repo(mut self, repo: Arc<dyn RankChangeRepository>) -> Self {
        self.rank_change_repo = Some(repo);
        self
    }

    pub fn course_repo(mut self, repo: Arc<dyn CourseRepository>) -> Self {
        self.course_repo = Some(repo);
        self
    }

    pub fn completion_repo(mut self, repo: Arc<dyn CompletionRepository>) -> Self {
        self.completion_repo = Some(repo);
        self
    }

    pub fn tag_request_repo(mut self, repo: Arc<dyn TagRequestRepository>) -> Self {
        self.tag_request_repo = Some(repo);
        self
    }

    pub fn profile_directory(mut self, directory: Arc<dyn ProfileDirectory>) -> Self {
        self.profile_directory = Some(directory);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo.ok_or_else(|| missing("member_repo"))?,
            self.rank_change_repo.ok_or_else(|| missing("rank_change_repo"))?,
            self.course_repo.ok_or_else(|| missing("course_repo"))?,
            self.completion_repo.ok_or_else(|| missing("completion_repo"))?,
            self.tag_request_repo.ok_or_else(|| missing("tag_request_repo"))?,
            self.profile_directory.ok_or_else(|| missing("profile_directory"))?,
            self.identity_provider.ok_or_else(|| missing("identity_provider"))?,
        ))
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::internal(format!("{dependency} is required"))
}
