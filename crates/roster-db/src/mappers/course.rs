//! Company, Course and CourseCompletion entity <-> model mappers

use roster_core::entities::{Company, Course, CourseCompletion};

use crate::models::{CompanyModel, CourseCompletionModel, CourseModel};

impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            id: model.id,
            acronym: model.acronym,
            name: model.name,
        }
    }
}

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            company_id: model.company_id,
            acronym: model.acronym,
            name: model.name,
            mandatory: model.mandatory,
            rank_id: model.rank_id,
        }
    }
}

impl From<CourseCompletionModel> for CourseCompletion {
    fn from(model: CourseCompletionModel) -> Self {
        CourseCompletion {
            id: model.id,
            course_id: model.course_id,
            instructor_id: model.instructor_member_id,
            student_id: model.student_member_id,
            date_applied: model.date_applied,
            time_applied: model.time_applied,
            created_at: model.created_at,
        }
    }
}
