use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::course::Course;
use crate::domain::failure::Failure;

#[derive(Debug, Clone)]
pub(crate) struct NewCourse {
    pub(crate) name: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
}

#[async_trait]
pub(crate) trait CourseRepository: Send + Sync {
    async fn create_course(&self, input: NewCourse) -> Result<Course, Failure>;
    async fn get_course(&self, id: i64) -> Result<Option<Course>, Failure>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, Failure>;
    async fn list_courses(&self) -> Result<Vec<Course>, Failure>;
}
