use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::data::course_repository::{CourseRepository, NewCourse};
use crate::domain::course::Course;
use crate::domain::failure::Failure;

#[derive(Debug, Default)]
pub(crate) struct MemoryCourseRepository {
    state: RwLock<CourseTable>,
}

#[derive(Debug, Default)]
struct CourseTable {
    rows: Vec<Course>,
    next_id: i64,
}

impl MemoryCourseRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn create_course(&self, input: NewCourse) -> Result<Course, Failure> {
        let mut table = self.state.write().await;

        // unique(name), same as the db constraint would enforce
        if table.rows.iter().any(|course| course.name == input.name) {
            return Err(Failure::conflict(format!(
                "course '{}' already exists",
                input.name
            )));
        }

        table.next_id += 1;
        let course = Course {
            id: table.next_id,
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: Utc::now(),
        };
        table.rows.push(course.clone());
        Ok(course)
    }

    async fn get_course(&self, id: i64) -> Result<Option<Course>, Failure> {
        let table = self.state.read().await;
        Ok(table.rows.iter().find(|course| course.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, Failure> {
        let table = self.state.read().await;
        Ok(table.rows.iter().find(|course| course.name == name).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, Failure> {
        let table = self.state.read().await;
        let mut courses = table.rows.clone();
        courses.sort_by_key(|course| (course.start_date, course.id));
        Ok(courses)
    }
}
