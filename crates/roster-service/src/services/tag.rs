//! Tag (callsign) requests

use roster_core::entities::TagRequest;
use roster_core::{normalize_email, DomainError, Tag};
use tracing::{info, instrument};

use crate::dto::{CreateTagRequest, TagRequestResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ask for a tag; at most one request per member may be open
    #[instrument(skip(self, request), fields(tag = %request.tag))]
    pub async fn request_tag(&self, request: CreateTagRequest) -> ServiceResult<TagRequestResponse> {
        let tag = Tag::parse(&request.tag)?;
        let email = normalize_email(&request.email);

        let owner = self
            .ctx
            .member_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(email.to_string()))?;

        if self.ctx.tag_request_repo().has_open(owner.id).await? {
            return Err(DomainError::DuplicateTagRequest.into());
        }

        let record = TagRequest::new(owner.id, tag);
        self.ctx.tag_request_repo().create(&record).await?;

        info!(request_id = %record.id, owner = %owner.nick, tag = %record.requested_tag, "Tag requested");
        Ok(TagRequestResponse::from(&record))
    }
}
