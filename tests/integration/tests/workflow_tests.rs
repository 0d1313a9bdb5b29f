//! Workflow tests against the service layer
//!
//! Run with: cargo test -p integration-tests --test workflow_tests

use integration_tests::{staff_email, unique_nick, TestContext, CFC_COURSE_ID, CFI_COURSE_ID, EFB_COMPANY_ID};
use roster_core::{ranks, DomainError, IdentityProvider, MemberDefaults, OnboardingCode, RankChangeKind};
use roster_service::{
    ApplyCourseRequest, ConfirmChallengeRequest, CourseService, CourseTarget,
    CreateRankChangeRequest, CreateSaleRequest, CreateTagRequest, IssueChallengeRequest,
    MemberService, OnboardingService, PendingRequestGuard, ProfileService, ProvisioningService,
    RankService, RegisterRequest, SaleService, SeedMemberRequest, ServiceError, TagService,
    TimelineKind,
};

fn domain(err: &ServiceError) -> &DomainError {
    err.as_domain()
        .unwrap_or_else(|| panic!("expected a domain error, got {err:?}"))
}

fn rank_change(affected_nick: &str, email: &str) -> CreateRankChangeRequest {
    CreateRankChangeRequest {
        affected_nick: affected_nick.to_string(),
        reason: "Bom desempenho".to_string(),
        email: email.to_string(),
        permission: None,
    }
}

fn legacy_course(acronym: &str, student: &str, instructor_email: &str) -> ApplyCourseRequest {
    ApplyCourseRequest {
        course: CourseTarget::Legacy {
            course_name: acronym.to_string(),
        },
        student_nick: student.to_string(),
        date: "2024-05-01".to_string(),
        time: "19:30".to_string(),
        instructor_email: instructor_email.to_string(),
    }
}

fn sale(buyer: &str, rank_id: i32, seller_email: &str) -> CreateSaleRequest {
    CreateSaleRequest {
        buyer_nick: buyer.to_string(),
        purchased_rank_id: rank_id,
        seller_email: seller_email.to_string(),
        seller_tag: "SEL".to_string(),
    }
}

// ============================================================================
// Promotion / punishment
// ============================================================================

#[tokio::test]
async fn test_promote_alice_then_pending_request_blocks() {
    let t = TestContext::new();
    let promoter = t.staff("Cmd", 10, "CMD");
    let alice = t.member("Alice", 1);
    let service = RankService::new(&t.ctx);

    let response = service
        .promote(rank_change(&alice.nick, &staff_email(&promoter)))
        .await
        .unwrap();
    assert_eq!(response.previous_rank_name, "Soldado");
    assert_eq!(response.new_rank_name, "Cabo");
    assert_eq!(response.kind, "promotion");
    assert_eq!(response.status, "awaiting");

    // Nothing is applied until review
    assert_eq!(t.store.member(&alice.nick).unwrap().rank_id, 1);

    let err = service
        .promote(rank_change(&alice.nick, &staff_email(&promoter)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::PendingRequestExists));
    assert_eq!(err.status_code(), 400);
    assert_eq!(t.store.rank_changes_for(alice.id).len(), 1);
}

#[tokio::test]
async fn test_promote_every_rank_below_the_ceiling() {
    let t = TestContext::new();
    let promoter = t.staff("Cmd", 13, "CMD");
    let service = RankService::new(&t.ctx);

    for rank in ranks::all() {
        let member = t.member("Climber", rank.id);
        let result = service
            .promote(rank_change(&member.nick, &staff_email(&promoter)))
            .await;

        if rank.id < ranks::max_rank_id() {
            let response = result.unwrap();
            assert_eq!(response.previous_rank_name, rank.name);
            assert_eq!(response.new_rank_name, ranks::name_of(rank.id + 1));
        } else {
            let err = result.unwrap_err();
            assert!(matches!(domain(&err), DomainError::AlreadyAtMaxRank));
        }
    }
}

#[tokio::test]
async fn test_punish_shares_the_awaiting_slot() {
    let t = TestContext::new();
    let promoter = t.staff("Cmd", 10, "CMD");
    let member = t.member("Late", 3);
    let service = RankService::new(&t.ctx);

    let response = service
        .punish(rank_change(&member.nick, &staff_email(&promoter)))
        .await
        .unwrap();
    assert_eq!(response.previous_rank_name, "Sargento");
    assert_eq!(response.new_rank_name, "Cabo");
    assert_eq!(response.kind, "punishment");

    let guard = PendingRequestGuard::new(&t.ctx);
    assert!(guard.has_awaiting_request(member.id, RankChangeKind::Promotion).await.unwrap());
    assert!(!guard.has_awaiting_request(member.id, RankChangeKind::Sale).await.unwrap());

    let err = service
        .promote(rank_change(&member.nick, &staff_email(&promoter)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::PendingRequestExists));
}

#[tokio::test]
async fn test_punish_at_entry_rank_fails() {
    let t = TestContext::new();
    let promoter = t.staff("Cmd", 10, "CMD");
    let member = t.member("Rookie", ranks::MIN_RANK_ID);

    let err = RankService::new(&t.ctx)
        .punish(rank_change(&member.nick, &staff_email(&promoter)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AlreadyAtMinRank));
}

#[tokio::test]
async fn test_rank_change_lookups() {
    let t = TestContext::new();
    let promoter = t.staff("Cmd", 10, "CMD");
    let service = RankService::new(&t.ctx);

    let err = service
        .promote(rank_change("Nobody", "ghost@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::PromoterNotFound(_)));
    assert_eq!(err.status_code(), 404);

    let err = service
        .promote(rank_change("Nobody", &staff_email(&promoter)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AffectedNotFoundOrInactive(_)));

    let inactive = t.member("Gone", 2);
    MemberService::new(&t.ctx)
        .set_active(&inactive.nick, false)
        .await
        .unwrap();
    let err = service
        .promote(rank_change(&inactive.nick, &staff_email(&promoter)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AffectedNotFoundOrInactive(_)));
}

// ============================================================================
// Sales
// ============================================================================

#[tokio::test]
async fn test_sale_to_new_nick_creates_one_member() {
    let t = TestContext::new();
    let seller = t.staff("Seller", 12, "SEL");
    let buyer = unique_nick("Buyer");
    let before = t.store.member_count();

    let response = SaleService::new(&t.ctx)
        .sell(sale(&buyer, 6, &staff_email(&seller)))
        .await
        .unwrap();
    assert!(response.created_new_member);
    assert_eq!(response.previous_rank, "Soldado");
    assert_eq!(response.new_rank, "Tenente");
    assert_eq!(response.seller_nick, seller.nick);

    assert_eq!(t.store.member_count(), before + 1);
    let stored = t.store.member(&buyer).unwrap();
    assert!(stored.has_contract);
    assert!(stored.active);
    assert!(!stored.has_system_access);
    assert_eq!(stored.rank_id, 6);
    assert_eq!(stored.promoter_tag.as_deref(), Some("SEL"));

    let history = t.store.rank_changes_for(stored.id);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, RankChangeKind::Sale);
    assert!(!history[0].is_awaiting());
}

#[tokio::test]
async fn test_sale_to_existing_nick_never_duplicates() {
    let t = TestContext::new();
    let seller = t.staff("Seller", 12, "SEL");
    let buyer = t.member("Existing", 2);
    let before = t.store.member_count();
    let service = SaleService::new(&t.ctx);

    let response = service
        .sell(sale(&buyer.nick, 9, &staff_email(&seller)))
        .await
        .unwrap();
    assert!(!response.created_new_member);
    assert_eq!(response.previous_rank, "Cabo");
    assert_eq!(response.buyer_id, buyer.id);

    // Sales bypass the guard: a second sale still goes through
    service
        .sell(sale(&buyer.nick, 13, &staff_email(&seller)))
        .await
        .unwrap();

    assert_eq!(t.store.member_count(), before);
    assert_eq!(t.store.member(&buyer.nick).unwrap().rank_id, 13);
}

#[tokio::test]
async fn test_sale_rejects_unknown_rank_and_seller() {
    let t = TestContext::new();
    let seller = t.staff("Seller", 12, "SEL");
    let service = SaleService::new(&t.ctx);

    let err = service
        .sell(sale("Anyone", 99, &staff_email(&seller)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidRank(99)));

    let err = service
        .sell(sale("Anyone", 3, "nobody@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::SellerNotFound(_)));
    assert!(t.store.member("Anyone").is_none());
}

// ============================================================================
// Courses
// ============================================================================

#[tokio::test]
async fn test_cfi_provisions_bob_then_rejects_repeat() {
    let t = TestContext::new();
    let instructor = t.staff("Instr", 6, "INS");
    let bob = unique_nick("Bob");
    let service = CourseService::new(&t.ctx);

    let response = service
        .apply_course(legacy_course("CFI", &bob, &staff_email(&instructor)))
        .await
        .unwrap();
    assert!(response.success);
    assert!(response.student_created);
    assert_eq!(response.course_acronym, "CFI");

    let stored = t.store.member(&bob).unwrap();
    assert!(!stored.active);
    assert_eq!(stored.rank_id, ranks::MIN_RANK_ID);
    assert_eq!(stored.promoter_tag.as_deref(), Some("INS"));
    assert_eq!(t.store.completions_for(stored.id).len(), 1);

    let err = service
        .apply_course(legacy_course("CFI", &bob, &staff_email(&instructor)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AlreadyCompleted));
    assert_eq!(t.store.completions_for(stored.id).len(), 1);
}

#[tokio::test]
async fn test_repeat_completion_rejected_regardless_of_order() {
    let t = TestContext::new();
    let instructor = t.staff("Instr", 6, "INS");
    let first = t.member("Student", 2);
    let second = t.member("Student", 2);
    let service = CourseService::new(&t.ctx);

    let company_course = |nick: &str| ApplyCourseRequest {
        course: CourseTarget::Company {
            course_id: CFC_COURSE_ID,
            company_id: EFB_COMPANY_ID,
        },
        ..legacy_course("unused", nick, &staff_email(&instructor))
    };

    service.apply_course(company_course(&first.nick)).await.unwrap();
    service.apply_course(company_course(&second.nick)).await.unwrap();

    for nick in [&second.nick, &first.nick] {
        let err = service.apply_course(company_course(nick)).await.unwrap_err();
        assert!(matches!(domain(&err), DomainError::AlreadyCompleted));
    }
}

#[tokio::test]
async fn test_non_foundational_course_needs_existing_student() {
    let t = TestContext::new();
    let instructor = t.staff("Instr", 6, "INS");
    let ghost = unique_nick("Ghost");

    let err = CourseService::new(&t.ctx)
        .apply_course(legacy_course("CFC", &ghost, &staff_email(&instructor)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::StudentNotFound(_)));
    assert!(t.store.member(&ghost).is_none());
}

#[tokio::test]
async fn test_course_resolution_errors() {
    let t = TestContext::new();
    let instructor = t.staff("Instr", 6, "INS");
    let student = t.member("Student", 1);
    let service = CourseService::new(&t.ctx);

    let err = service
        .apply_course(legacy_course("XYZ", &student.nick, &staff_email(&instructor)))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::CourseNotFound(_)));

    // Course exists but not inside the given company
    let mut request = legacy_course("", &student.nick, &staff_email(&instructor));
    request.course = CourseTarget::Company {
        course_id: CFI_COURSE_ID,
        company_id: 42,
    };
    let err = service.apply_course(request).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::CourseNotFound(_)));

    let err = service
        .apply_course(legacy_course("CFI", &student.nick, "nobody@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::InstructorNotFound(_)));

    let mut bad_date = legacy_course("CFI", &student.nick, &staff_email(&instructor));
    bad_date.date = "01/05/2024".to_string();
    let err = service.apply_course(bad_date).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_company_courses_by_id_or_acronym() {
    let t = TestContext::new();
    let service = CourseService::new(&t.ctx);

    let by_acronym = service.company_courses("efb").await.unwrap();
    let by_id = service.company_courses("1").await.unwrap();
    assert_eq!(by_acronym.company.id, EFB_COMPANY_ID);
    assert_eq!(by_id.courses.len(), 3);
    assert_eq!(by_id.courses[0].acronym, "CFI");

    let err = service.company_courses("NOPE").await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::CompanyNotFound(_)));
}

// ============================================================================
// Onboarding
// ============================================================================

#[tokio::test]
async fn test_challenge_codes_follow_template_and_are_not_stored() {
    let t = TestContext::new();
    let member = t.member("Newbie", 1);
    let service = OnboardingService::new(&t.ctx);
    let request = || IssueChallengeRequest {
        nick: member.nick.clone(),
    };

    let first = service.issue_challenge(request()).await.unwrap();
    let second = service.issue_challenge(request()).await.unwrap();
    assert!(OnboardingCode::is_well_formed(&first.code));
    assert!(OnboardingCode::is_well_formed(&second.code));
    assert_eq!(first.code.len(), OnboardingCode::LEN);

    // The motto decides, not the most recent issuance
    t.profiles.set_motto(&member.nick, &first.code);
    let confirmed = service
        .confirm_challenge(ConfirmChallengeRequest {
            nick: member.nick.clone(),
            code: first.code.clone(),
        })
        .await
        .unwrap();
    assert!(confirmed.success);

    if second.code != first.code {
        let err = service
            .confirm_challenge(ConfirmChallengeRequest {
                nick: member.nick.clone(),
                code: second.code,
            })
            .await
            .unwrap_err();
        assert!(matches!(domain(&err), DomainError::ChallengeMismatch));
    }
}

#[tokio::test]
async fn test_challenge_for_unknown_or_registered_nick() {
    let t = TestContext::new();
    let service = OnboardingService::new(&t.ctx);

    let err = service
        .issue_challenge(IssueChallengeRequest {
            nick: unique_nick("Stranger"),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::NotPreRegistered(_)));
    assert_eq!(err.status_code(), 500);

    let staff = t.staff("Cmd", 10, "CMD");
    let err = service
        .issue_challenge(IssueChallengeRequest { nick: staff.nick })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AlreadyRegistered));
}

#[tokio::test]
async fn test_confirm_reports_profile_lookup_failure() {
    let t = TestContext::new();
    let err = OnboardingService::new(&t.ctx)
        .confirm_challenge(ConfirmChallengeRequest {
            nick: unique_nick("Offline"),
            code: "DDM0000-0000BR".to_string(),
        })
        .await
        .unwrap_err();
    assert!(domain(&err).is_upstream());
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_registration_opens_the_gate_once() {
    let t = TestContext::new();
    let member = t.member("Joiner", 1);
    let service = OnboardingService::new(&t.ctx);
    let email = format!("{}@example.com", member.nick.to_lowercase());
    let register = |email: &str| RegisterRequest {
        nick: member.nick.clone(),
        email: email.to_string(),
        password: "hunter22".to_string(),
    };

    let response = service.complete_registration(register(&email)).await.unwrap();
    assert!(response.success);
    assert!(response.member.has_system_access);
    assert!(t.identity.verify(member.id, "hunter22"));
    assert_eq!(t.identity.email_of(member.id).as_deref(), Some(email.as_str()));

    let err = service.complete_registration(register(&email)).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::SystemAccessAlreadyGranted));
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_registration_loser_keeps_winner_credentials() {
    let t = TestContext::new();
    let member = t.member("Racer", 1);
    let service = OnboardingService::new(&t.ctx);
    let winner = format!("{}@example.com", member.nick.to_lowercase());
    let loser = format!("{}@other.example.com", member.nick.to_lowercase());

    service
        .complete_registration(RegisterRequest {
            nick: member.nick.clone(),
            email: winner.clone(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();

    let err = service
        .complete_registration(RegisterRequest {
            nick: member.nick.clone(),
            email: loser.clone(),
            password: "other-password".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 409);

    // A concurrent loser that reached the credential write is refused too
    let err = t
        .identity
        .create_credentials(member.id, &loser, "other-password")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::SystemAccessAlreadyGranted));

    assert!(t.identity.verify(member.id, "hunter22"));
    assert!(!t.identity.verify(member.id, "other-password"));
    assert_eq!(t.identity.email_of(member.id).as_deref(), Some(winner.as_str()));
    assert_eq!(t.store.member(&member.nick).unwrap().email.as_deref(), Some(winner.as_str()));
}

#[tokio::test]
async fn test_failed_credential_write_closes_the_gate() {
    let t = TestContext::new();
    let member = t.member("Unlucky", 1);
    let service = OnboardingService::new(&t.ctx);
    let register = || RegisterRequest {
        nick: member.nick.clone(),
        email: format!("{}@example.com", member.nick.to_lowercase()),
        password: "hunter22".to_string(),
    };

    t.identity.fail_next_write();
    let err = service.complete_registration(register()).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::IdentityError(_)));

    let stored = t.store.member(&member.nick).unwrap();
    assert!(!stored.has_system_access);
    assert!(stored.email.is_none());

    // The member can retry once the store recovers
    service.complete_registration(register()).await.unwrap();
    assert!(t.identity.verify(member.id, "hunter22"));
}

#[tokio::test]
async fn test_emails_are_case_insensitive() {
    let t = TestContext::new();
    let member = t.member("Mixed", 1);
    let other = t.member("Shouty", 1);
    let target = t.member("Target", 1);
    let service = OnboardingService::new(&t.ctx);
    let email = format!("{}@Example.COM", member.nick);

    let response = service
        .complete_registration(RegisterRequest {
            nick: member.nick.clone(),
            email: format!("  {email} "),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();
    let stored = email.to_lowercase();
    assert_eq!(response.member.email.as_deref(), Some(stored.as_str()));
    assert_eq!(t.identity.email_of(member.id).as_deref(), Some(stored.as_str()));

    let err = service
        .complete_registration(RegisterRequest {
            nick: other.nick.clone(),
            email: email.to_uppercase(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::EmailAlreadyExists));

    // Lookups by email ignore case too
    RankService::new(&t.ctx)
        .promote(rank_change(&target.nick, &email.to_uppercase()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_registration_preconditions() {
    let t = TestContext::new();
    let service = OnboardingService::new(&t.ctx);
    let staff = t.staff("Cmd", 10, "CMD");

    let err = service
        .complete_registration(RegisterRequest {
            nick: unique_nick("Nobody"),
            email: "nobody@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    let inactive = t.member("Sleeper", 1);
    MemberService::new(&t.ctx)
        .set_active(&inactive.nick, false)
        .await
        .unwrap();
    let err = service
        .complete_registration(RegisterRequest {
            nick: inactive.nick.clone(),
            email: "sleeper@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::MemberInactive));
    assert_eq!(err.status_code(), 403);

    let member = t.member("Copycat", 1);
    let err = service
        .complete_registration(RegisterRequest {
            nick: member.nick.clone(),
            email: staff_email(&staff),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::EmailAlreadyExists));
    assert_eq!(err.status_code(), 409);

    let err = service
        .complete_registration(RegisterRequest {
            nick: member.nick.clone(),
            email: "copycat@example.com".to_string(),
            password: "abc".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::WeakPassword(_)));
    assert!(!t.store.member(&member.nick).unwrap().has_system_access);
}

// ============================================================================
// Provisioning, tags, members, profile
// ============================================================================

#[tokio::test]
async fn test_ensure_member_is_idempotent() {
    let t = TestContext::new();
    let nick = unique_nick("Twice");
    let service = ProvisioningService::new(&t.ctx);

    let (first, created) = service
        .ensure_member(&nick, MemberDefaults::recruit(None))
        .await
        .unwrap();
    assert!(created);

    let (second, created) = service
        .ensure_member(&nick, MemberDefaults::sold(5, "SEL"))
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(second.rank_id, ranks::MIN_RANK_ID);
}

#[tokio::test]
async fn test_single_open_tag_request() {
    let t = TestContext::new();
    let owner = t.staff("Owner", 4, "OWN");
    let service = TagService::new(&t.ctx);
    let request = |tag: &str| CreateTagRequest {
        email: staff_email(&owner),
        tag: tag.to_string(),
    };

    let response = service.request_tag(request("abc")).await.unwrap();
    assert_eq!(response.requested_tag, "ABC");
    assert_eq!(response.status, "awaiting");

    let err = service.request_tag(request("xyz")).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::DuplicateTagRequest));

    let err = service.request_tag(request("ab1")).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidTag(_)));
}

#[tokio::test]
async fn test_seed_and_toggle_member() {
    let t = TestContext::new();
    let service = MemberService::new(&t.ctx);
    let nick = unique_nick("Seeded");

    let seeded = service
        .seed_member(SeedMemberRequest {
            nick: nick.clone(),
            rank_id: Some(3),
            tag: Some("abc".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(seeded.rank_name, "Sargento");
    assert_eq!(seeded.tag.as_deref(), Some("ABC"));
    assert!(seeded.active);

    let err = service
        .seed_member(SeedMemberRequest {
            nick: nick.clone(),
            rank_id: None,
            tag: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::NickAlreadyExists(_)));
    assert_eq!(err.status_code(), 409);

    let updated = service.set_active(&nick, false).await.unwrap();
    assert!(!updated.active);
    assert!(!service.get_member(&nick).await.unwrap().active);

    let err = service.set_active("no-such-nick", true).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    let inactive = service.list_members(Some(false), 100, 0).await.unwrap();
    assert!(inactive.iter().any(|m| m.nick == nick));
    assert!(inactive.iter().all(|m| !m.active));
}

#[tokio::test]
async fn test_profile_timeline_merges_history() {
    let t = TestContext::new();
    let promoter = t.staff("Cmd", 10, "CMD");
    let instructor = t.staff("Instr", 6, "INS");
    let member = t.staff("Profiled", 2, "PRF");

    let courses = CourseService::new(&t.ctx);
    courses
        .apply_course(legacy_course("CFC", &member.nick, &staff_email(&instructor)))
        .await
        .unwrap();
    courses
        .apply_course(legacy_course("CFS", &member.nick, &staff_email(&instructor)))
        .await
        .unwrap();
    RankService::new(&t.ctx)
        .promote(rank_change(&member.nick, &staff_email(&promoter)))
        .await
        .unwrap();
    TagService::new(&t.ctx)
        .request_tag(CreateTagRequest {
            email: staff_email(&member),
            tag: "new".to_string(),
        })
        .await
        .unwrap();

    let profile = ProfileService::new(&t.ctx)
        .member_profile(&member.nick)
        .await
        .unwrap();
    assert_eq!(profile.member.nick, member.nick);
    assert_eq!(profile.courses.len(), 2);
    let mut acronyms: Vec<_> = profile
        .courses
        .iter()
        .filter_map(|c| c.course_acronym.as_deref())
        .collect();
    acronyms.sort_unstable();
    assert_eq!(acronyms, ["CFC", "CFS"]);
    assert!(profile
        .courses
        .iter()
        .all(|c| c.instructor_nick.as_deref() == Some(instructor.nick.as_str())));
    assert_eq!(profile.rank_changes.len(), 1);
    assert_eq!(profile.tag_requests.len(), 1);
    assert_eq!(profile.timeline.len(), 4);
    assert!(profile.mission.contains("Cabo"));

    let kinds: Vec<TimelineKind> = profile.timeline.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&TimelineKind::Course));
    assert!(kinds.contains(&TimelineKind::Promotion));
    assert!(kinds.contains(&TimelineKind::Tag));
    assert!(profile
        .timeline
        .windows(2)
        .all(|pair| pair[0].occurred_at >= pair[1].occurred_at));

    let err = ProfileService::new(&t.ctx)
        .member_profile("no-such-nick")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}
