//! Course applications and the course catalogue

use roster_core::entities::{
    parse_date, parse_time, Company, Course, CourseCompletion, MemberDefaults,
    LEGACY_COMPANY_ACRONYM,
};
use roster_core::{normalize_email, DomainError};
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    ApplyCourseRequest, CompanyCoursesResponse, CourseApplicationResponse, CourseResponse,
    CourseTarget,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::provisioning::ProvisioningService;

pub struct CourseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CourseService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record that a student completed a course.
    ///
    /// Foundational courses provision an unknown student as an inactive
    /// recruit sponsored by the instructor; any other course requires the
    /// student to exist already.
    #[instrument(skip(self, request), fields(student = %request.student_nick))]
    pub async fn apply_course(
        &self,
        request: ApplyCourseRequest,
    ) -> ServiceResult<CourseApplicationResponse> {
        let date = parse_date(&request.date)?;
        let time = parse_time(&request.time)?;
        let instructor_email = normalize_email(&request.instructor_email);
        let student_nick = request.student_nick.trim();

        let instructor = self
            .ctx
            .member_repo()
            .find_by_email(&instructor_email)
            .await?
            .ok_or_else(|| DomainError::InstructorNotFound(instructor_email.to_string()))?;

        let course = self.resolve_course(&request.course).await?;

        let (student, student_created) = if course.is_foundational() {
            ProvisioningService::new(self.ctx)
                .ensure_member(student_nick, MemberDefaults::recruit(instructor.tag.as_deref()))
                .await?
        } else {
            let student = self
                .ctx
                .member_repo()
                .find_by_nick(student_nick)
                .await?
                .ok_or_else(|| DomainError::StudentNotFound(student_nick.to_string()))?;
            (student, false)
        };

        if self.ctx.completion_repo().exists(course.id, student.id).await? {
            warn!(course = %course.acronym, student = %student.nick, "Course already completed");
            return Err(DomainError::AlreadyCompleted.into());
        }

        let completion = CourseCompletion::new(course.id, instructor.id, student.id, date, time);
        self.ctx.completion_repo().create(&completion).await?;

        info!(
            completion_id = %completion.id,
            course = %course.acronym,
            instructor = %instructor.nick,
            student = %student.nick,
            student_created,
            "Course applied"
        );

        Ok(CourseApplicationResponse {
            success: true,
            completion_id: completion.id,
            course_id: course.id,
            course_acronym: course.acronym,
            student_id: student.id,
            student_nick: student.nick,
            student_created,
        })
    }

    /// Courses offered by a company, addressed by numeric id or acronym
    #[instrument(skip(self))]
    pub async fn company_courses(&self, company: &str) -> ServiceResult<CompanyCoursesResponse> {
        let company = self.resolve_company(company).await?;
        let courses = self.ctx.course_repo().list_by_company(company.id).await?;

        Ok(CompanyCoursesResponse {
            company: (&company).into(),
            courses: courses.iter().map(CourseResponse::from).collect(),
        })
    }

    async fn resolve_course(&self, target: &CourseTarget) -> ServiceResult<Course> {
        let repo = self.ctx.course_repo();

        let course = match target {
            CourseTarget::Company {
                course_id,
                company_id,
            } => repo
                .find_in_company(*course_id, *company_id)
                .await?
                .ok_or_else(|| {
                    DomainError::CourseNotFound(format!("{course_id} in company {company_id}"))
                })?,
            CourseTarget::Legacy { course_name } => {
                let acronym = course_name.trim();
                if acronym.is_empty() {
                    return Err(ServiceError::validation("course_name is required"));
                }
                repo.find_by_acronym(LEGACY_COMPANY_ACRONYM, acronym)
                    .await?
                    .ok_or_else(|| DomainError::CourseNotFound(acronym.to_string()))?
            }
        };

        debug!(course_id = course.id, acronym = %course.acronym, "Course resolved");
        Ok(course)
    }

    async fn resolve_company(&self, company: &str) -> ServiceResult<Company> {
        let key = company.trim();
        let repo = self.ctx.course_repo();

        let found = match key.parse::<i32>() {
            Ok(id) => repo.find_company(id).await?,
            Err(_) => repo.find_company_by_acronym(key).await?,
        };

        found.ok_or_else(|| DomainError::CompanyNotFound(key.to_string()).into())
    }
}
