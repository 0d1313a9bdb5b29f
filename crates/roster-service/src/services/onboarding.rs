//! Onboarding verification gate
//!
//! Proves that whoever registers a nick controls the matching external
//! profile. Codes are never stored: the client carries the issued code to
//! the confirm step, and confirmation only compares it with the profile's
//! current motto.

use roster_common::validate_password_strength;
use roster_core::{normalize_email, DomainError, OnboardingCode};
use tracing::{info, instrument, warn};

use crate::dto::{
    ChallengeResponse, ConfirmChallengeRequest, IssueChallengeRequest, MemberResponse,
    RegisterRequest, RegistrationResponse, VerificationResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct OnboardingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OnboardingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh verification code for a pre-registered nick
    #[instrument(skip(self, request), fields(nick = %request.nick))]
    pub async fn issue_challenge(
        &self,
        request: IssueChallengeRequest,
    ) -> ServiceResult<ChallengeResponse> {
        let nick = request.nick.trim();

        let member = self
            .ctx
            .member_repo()
            .find_by_nick(nick)
            .await?
            .ok_or_else(|| DomainError::NotPreRegistered(nick.to_string()))?;

        if member.has_system_access {
            return Err(DomainError::AlreadyRegistered.into());
        }

        let code = OnboardingCode::generate();
        info!(member_id = %member.id, "Onboarding challenge issued");

        Ok(ChallengeResponse {
            nick: member.nick,
            code: code.into_inner(),
        })
    }

    /// Check that the external profile's motto carries the supplied code
    #[instrument(skip(self, request), fields(nick = %request.nick))]
    pub async fn confirm_challenge(
        &self,
        request: ConfirmChallengeRequest,
    ) -> ServiceResult<VerificationResponse> {
        let nick = request.nick.trim();
        let profile = self.ctx.profile_directory().fetch_profile(nick).await?;

        if !profile.motto_matches(&request.code) {
            warn!(profile = %profile.unique_id, "Onboarding code does not match motto");
            return Err(DomainError::ChallengeMismatch.into());
        }

        info!(profile = %profile.unique_id, "Onboarding challenge confirmed");
        Ok(VerificationResponse {
            success: true,
            nick: nick.to_string(),
        })
    }

    /// Create credentials and open the system-access gate
    #[instrument(skip(self, request), fields(nick = %request.nick))]
    pub async fn complete_registration(
        &self,
        request: RegisterRequest,
    ) -> ServiceResult<RegistrationResponse> {
        let nick = request.nick.trim();
        let email = normalize_email(&request.email);
        let repo = self.ctx.member_repo();

        let mut member = repo
            .find_by_nick(nick)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(nick.to_string()))?;

        if !member.active {
            return Err(DomainError::MemberInactive.into());
        }
        if member.has_system_access {
            return Err(DomainError::SystemAccessAlreadyGranted.into());
        }

        if let Some(owner) = repo.find_by_email(&email).await? {
            if owner.id != member.id {
                return Err(DomainError::EmailAlreadyExists.into());
            }
        }

        validate_password_strength(&request.password).map_err(DomainError::from)?;

        // The conditional grant picks a single winner among concurrent
        // registrations; only the winner's email may write credentials.
        repo.grant_system_access(member.id, &email).await?;

        if let Err(e) = self
            .ctx
            .identity_provider()
            .create_credentials(member.id, &email, &request.password)
            .await
        {
            warn!(member_id = %member.id, error = %e, "Credential write failed, closing gate");
            repo.revoke_system_access(member.id, &email, member.email.as_deref())
                .await?;
            return Err(e.into());
        }
        member.grant_system_access(email);

        info!(member_id = %member.id, "Member registered");

        Ok(RegistrationResponse {
            success: true,
            member: MemberResponse::from(member),
        })
    }
}
