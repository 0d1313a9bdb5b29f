//! Test fixtures and in-memory collaborators
//!
//! `MemoryStore` implements every repository port over plain vectors. Each
//! `create` enforces the same unique constraints the migrations declare, so
//! workflow tests see the same conflicts a PostgreSQL-backed run would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use roster_common::{hash_password, verify_password};
use roster_core::{
    Company, CompletionRepository, Course, CourseCompletion, CourseRepository, DomainError,
    ExternalProfile, IdentityProvider, Member, MemberRepository, ProfileDirectory,
    RankChangeRepository, RankChangeRequest, RepoResult, TagRequest, TagRequestRepository,
};
use roster_service::{ServiceContext, ServiceContextBuilder};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A nick that no other test will use
pub fn unique_nick(prefix: &str) -> String {
    format!("{prefix}{}", unique_suffix())
}

/// Id of the seeded legacy company
pub const EFB_COMPANY_ID: i32 = 1;
pub const CFI_COURSE_ID: i32 = 1;
pub const CFS_COURSE_ID: i32 = 2;
pub const CFC_COURSE_ID: i32 = 3;

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Default)]
struct Tables {
    members: Vec<Member>,
    rank_changes: Vec<RankChangeRequest>,
    companies: Vec<Company>,
    courses: Vec<Course>,
    completions: Vec<CourseCompletion>,
    tag_requests: Vec<TagRequest>,
}

/// Shared in-memory backing for all repository ports
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// A store holding the same catalogue the initial migration seeds
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock();
            tables.companies.push(Company {
                id: EFB_COMPANY_ID,
                acronym: "EFB".to_string(),
                name: "Escola de Formacao Basica".to_string(),
            });
            for (id, acronym, name, rank_id) in [
                (CFI_COURSE_ID, "CFI", "Curso de Formacao Inicial", 1),
                (CFS_COURSE_ID, "CFS", "Curso de Formacao de Soldados", 1),
                (CFC_COURSE_ID, "CFC", "Curso de Formacao de Cabos", 2),
            ] {
                tables.courses.push(Course {
                    id,
                    company_id: EFB_COMPANY_ID,
                    acronym: acronym.to_string(),
                    name: name.to_string(),
                    mandatory: true,
                    rank_id: Some(rank_id),
                });
            }
        }
        store
    }

    /// Insert a member directly, bypassing every workflow
    pub fn insert_member(&self, member: Member) -> Member {
        self.tables.lock().members.push(member.clone());
        member
    }

    /// Current stored state of a member
    pub fn member(&self, nick: &str) -> Option<Member> {
        self.tables
            .lock()
            .members
            .iter()
            .find(|m| m.nick == nick)
            .cloned()
    }

    pub fn member_count(&self) -> usize {
        self.tables.lock().members.len()
    }

    pub fn rank_changes_for(&self, affected_id: Uuid) -> Vec<RankChangeRequest> {
        self.tables
            .lock()
            .rank_changes
            .iter()
            .filter(|r| r.affected_id == affected_id)
            .cloned()
            .collect()
    }

    pub fn completions_for(&self, student_id: Uuid) -> Vec<CourseCompletion> {
        self.tables
            .lock()
            .completions
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect()
    }
}

/// Mirrors the case-insensitive unique index on `members.email`
fn email_matches(member: &Member, email: &str) -> bool {
    member
        .email
        .as_deref()
        .is_some_and(|stored| stored.eq_ignore_ascii_case(email))
}

fn newest_first<T>(mut rows: Vec<T>, created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
    rows.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
    rows
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        Ok(self.tables.lock().members.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Member>> {
        Ok(self
            .tables
            .lock()
            .members
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn find_by_nick(&self, nick: &str) -> RepoResult<Option<Member>> {
        Ok(self.member(nick))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .tables
            .lock()
            .members
            .iter()
            .find(|m| email_matches(m, email))
            .cloned())
    }

    async fn create(&self, member: &Member) -> RepoResult<()> {
        if self.create_if_absent(member).await? {
            Ok(())
        } else {
            Err(DomainError::NickAlreadyExists(member.nick.clone()))
        }
    }

    async fn create_if_absent(&self, member: &Member) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        if tables.members.iter().any(|m| m.nick == member.nick) {
            return Ok(false);
        }
        tables.members.push(member.clone());
        Ok(true)
    }

    async fn update(&self, member: &Member) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let stored = tables
            .members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| DomainError::MemberNotFound(member.nick.clone()))?;

        stored.rank_id = member.rank_id;
        stored.active = member.active;
        stored.has_contract = member.has_contract;
        stored.tag.clone_from(&member.tag);
        stored.promoter_tag.clone_from(&member.promoter_tag);
        stored.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn set_active(&self, nick: &str, active: bool) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        match tables.members.iter_mut().find(|m| m.nick == nick) {
            Some(member) => {
                member.set_active(active);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn grant_system_access(&self, id: Uuid, email: &str) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .members
            .iter()
            .any(|m| m.id != id && email_matches(m, email))
        {
            return Err(DomainError::EmailAlreadyExists);
        }

        match tables
            .members
            .iter_mut()
            .find(|m| m.id == id && !m.has_system_access)
        {
            Some(member) => {
                member.grant_system_access(email);
                Ok(())
            }
            None => Err(DomainError::SystemAccessAlreadyGranted),
        }
    }

    async fn revoke_system_access(
        &self,
        id: Uuid,
        email: &str,
        previous_email: Option<&str>,
    ) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if let Some(member) = tables
            .members
            .iter_mut()
            .find(|m| m.id == id && m.has_system_access && m.email.as_deref() == Some(email))
        {
            member.email = previous_email.map(str::to_string);
            member.has_system_access = false;
        }
        Ok(())
    }

    async fn list(&self, active: Option<bool>, limit: i64, offset: i64) -> RepoResult<Vec<Member>> {
        let mut members: Vec<Member> = self
            .tables
            .lock()
            .members
            .iter()
            .filter(|m| active.is_none_or(|a| m.active == a))
            .cloned()
            .collect();
        members.sort_by(|a, b| b.rank_id.cmp(&a.rank_id).then_with(|| a.nick.cmp(&b.nick)));

        Ok(members
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }
}

#[async_trait]
impl RankChangeRepository for MemoryStore {
    async fn has_awaiting(&self, affected_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .rank_changes
            .iter()
            .any(|r| r.affected_id == affected_id && r.is_awaiting()))
    }

    async fn create(&self, request: &RankChangeRequest) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        // Mirrors the partial unique index on awaiting requests
        if request.is_awaiting()
            && tables
                .rank_changes
                .iter()
                .any(|r| r.affected_id == request.affected_id && r.is_awaiting())
        {
            return Err(DomainError::PendingRequestExists);
        }
        tables.rank_changes.push(request.clone());
        Ok(())
    }

    async fn find_by_affected(&self, affected_id: Uuid) -> RepoResult<Vec<RankChangeRequest>> {
        Ok(newest_first(self.rank_changes_for(affected_id), |r| r.created_at))
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn find_by_ids(&self, ids: &[i32]) -> RepoResult<Vec<Course>> {
        Ok(self
            .tables
            .lock()
            .courses
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn find_in_company(&self, course_id: i32, company_id: i32) -> RepoResult<Option<Course>> {
        Ok(self
            .tables
            .lock()
            .courses
            .iter()
            .find(|c| c.id == course_id && c.company_id == company_id)
            .cloned())
    }

    async fn find_by_acronym(
        &self,
        company_acronym: &str,
        course_acronym: &str,
    ) -> RepoResult<Option<Course>> {
        let tables = self.tables.lock();
        let Some(company) = tables
            .companies
            .iter()
            .find(|c| c.acronym.eq_ignore_ascii_case(company_acronym))
        else {
            return Ok(None);
        };

        Ok(tables
            .courses
            .iter()
            .find(|c| c.company_id == company.id && c.acronym.eq_ignore_ascii_case(course_acronym))
            .cloned())
    }

    async fn find_company(&self, id: i32) -> RepoResult<Option<Company>> {
        Ok(self.tables.lock().companies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_company_by_acronym(&self, acronym: &str) -> RepoResult<Option<Company>> {
        Ok(self
            .tables
            .lock()
            .companies
            .iter()
            .find(|c| c.acronym.eq_ignore_ascii_case(acronym))
            .cloned())
    }

    async fn list_by_company(&self, company_id: i32) -> RepoResult<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .tables
            .lock()
            .courses
            .iter()
            .filter(|c| c.company_id == company_id)
            .cloned()
            .collect();
        courses.sort_by_key(|c| c.id);
        Ok(courses)
    }
}

#[async_trait]
impl CompletionRepository for MemoryStore {
    async fn exists(&self, course_id: i32, student_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .completions
            .iter()
            .any(|c| c.course_id == course_id && c.student_id == student_id))
    }

    async fn create(&self, completion: &CourseCompletion) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .completions
            .iter()
            .any(|c| c.course_id == completion.course_id && c.student_id == completion.student_id)
        {
            return Err(DomainError::AlreadyCompleted);
        }
        tables.completions.push(completion.clone());
        Ok(())
    }

    async fn find_by_student(&self, student_id: Uuid) -> RepoResult<Vec<CourseCompletion>> {
        Ok(newest_first(self.completions_for(student_id), |c| c.created_at))
    }
}

#[async_trait]
impl TagRequestRepository for MemoryStore {
    async fn has_open(&self, owner_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .tag_requests
            .iter()
            .any(|t| t.owner_id == owner_id && t.is_open()))
    }

    async fn create(&self, request: &TagRequest) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .tag_requests
            .iter()
            .any(|t| t.owner_id == request.owner_id && t.is_open())
        {
            return Err(DomainError::DuplicateTagRequest);
        }
        tables.tag_requests.push(request.clone());
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> RepoResult<Vec<TagRequest>> {
        let rows = self
            .tables
            .lock()
            .tag_requests
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(newest_first(rows, |t| t.created_at))
    }
}

// ============================================================================
// External collaborators
// ============================================================================

/// Profile directory answering from a table of mottos
#[derive(Debug, Default)]
pub struct StubProfileDirectory {
    mottos: Mutex<HashMap<String, String>>,
}

impl StubProfileDirectory {
    /// Make `nick` resolvable with the given motto
    pub fn set_motto(&self, nick: &str, motto: &str) {
        self.mottos.lock().insert(nick.to_string(), motto.to_string());
    }
}

#[async_trait]
impl ProfileDirectory for StubProfileDirectory {
    async fn fetch_profile(&self, nick: &str) -> RepoResult<ExternalProfile> {
        let motto = self
            .mottos
            .lock()
            .get(nick)
            .cloned()
            .ok_or_else(|| DomainError::ProfileLookupFailed(format!("{nick}: profile not found")))?;

        Ok(ExternalProfile {
            unique_id: format!("hhbr-{nick}"),
            name: nick.to_string(),
            motto: Some(motto),
            figure_string: None,
            online: Some(true),
            member_since: None,
        })
    }
}

/// Credential store keeping argon2 hashes in memory
///
/// Like the database store, it only writes for a member whose gate is open
/// under the same email.
#[derive(Debug)]
pub struct MemoryIdentityProvider {
    store: MemoryStore,
    credentials: Mutex<HashMap<Uuid, (String, String)>>,
    fail_next: AtomicBool,
}

impl MemoryIdentityProvider {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store,
            credentials: Mutex::new(HashMap::new()),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Whether `password` is the stored credential for the member
    pub fn verify(&self, member_id: Uuid, password: &str) -> bool {
        self.credentials
            .lock()
            .get(&member_id)
            .is_some_and(|(_, hash)| verify_password(password, hash).unwrap_or(false))
    }

    pub fn email_of(&self, member_id: Uuid) -> Option<String> {
        self.credentials.lock().get(&member_id).map(|(email, _)| email.clone())
    }

    /// Make the next credential write fail with an identity error
    pub fn fail_next_write(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn create_credentials(&self, member_id: Uuid, email: &str, password: &str) -> RepoResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DomainError::IdentityError("credential store unavailable".to_string()));
        }

        let gate_held = self
            .store
            .tables
            .lock()
            .members
            .iter()
            .any(|m| m.id == member_id && m.has_system_access && m.email.as_deref() == Some(email));
        if !gate_held {
            return Err(DomainError::SystemAccessAlreadyGranted);
        }

        let hash = hash_password(password).map_err(|e| DomainError::IdentityError(e.to_string()))?;
        self.credentials
            .lock()
            .insert(member_id, (email.to_string(), hash));
        Ok(())
    }
}

// ============================================================================
// Test context
// ============================================================================

/// Everything a workflow test needs: the store, the stubs and a context
pub struct TestContext {
    pub store: MemoryStore,
    pub profiles: Arc<StubProfileDirectory>,
    pub identity: Arc<MemoryIdentityProvider>,
    pub ctx: ServiceContext,
}

impl TestContext {
    pub fn new() -> Self {
        let store = MemoryStore::seeded();
        let profiles = Arc::new(StubProfileDirectory::default());
        let identity = Arc::new(MemoryIdentityProvider::new(store.clone()));
        let ctx = build_context(&store, profiles.clone(), identity.clone());

        Self {
            store,
            profiles,
            identity,
            ctx,
        }
    }

    /// Fresh service context over the same store and stubs
    pub fn service_context(&self) -> ServiceContext {
        build_context(&self.store, self.profiles.clone(), self.identity.clone())
    }

    /// An active member with system access, usable as promoter, seller or instructor
    pub fn staff(&self, prefix: &str, rank_id: i32, tag: &str) -> Member {
        let nick = unique_nick(prefix);
        let mut member = Member::new(&nick);
        member.rank_id = rank_id;
        member.tag = Some(tag.to_string());
        member.grant_system_access(format!("{}@example.com", nick.to_lowercase()));
        self.store.insert_member(member)
    }

    /// A plain active member at the given rank
    pub fn member(&self, prefix: &str, rank_id: i32) -> Member {
        let mut member = Member::new(unique_nick(prefix));
        member.rank_id = rank_id;
        self.store.insert_member(member)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn build_context(
    store: &MemoryStore,
    profiles: Arc<StubProfileDirectory>,
    identity: Arc<MemoryIdentityProvider>,
) -> ServiceContext {
    let shared = Arc::new(store.clone());
    ServiceContextBuilder::new()
        .member_repo(shared.clone())
        .rank_change_repo(shared.clone())
        .course_repo(shared.clone())
        .completion_repo(shared.clone())
        .tag_request_repo(shared)
        .profile_directory(profiles)
        .identity_provider(identity)
        .build()
        .expect("every dependency is provided")
}

/// Email assigned to members created by [`TestContext::staff`]
pub fn staff_email(member: &Member) -> String {
    member.email.clone().unwrap_or_default()
}
