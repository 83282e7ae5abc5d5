use crate::data::course_repository::{CourseRepository, NewCourse};
use crate::domain::course::{Course, CreateCourseRequest};
use crate::domain::failure::Failure;

pub(crate) struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_course(&self, req: CreateCourseRequest) -> Result<Course, Failure> {
        let req = req.validate()?;

        if self.repo.find_by_name(&req.name).await?.is_some() {
            return Err(Failure::conflict(format!(
                "course '{}' already exists",
                req.name
            )));
        }

        let new_course = NewCourse {
            name: req.name,
            start_date: req.start_date,
            end_date: req.end_date,
        };
        self.repo.create_course(new_course).await
    }

    pub(crate) async fn get_course(&self, id: i64) -> Result<Course, Failure> {
        self.repo
            .get_course(id)
            .await?
            .ok_or_else(|| Failure::not_found(format!("course id: {id}")))
    }

    pub(crate) async fn list_courses(&self) -> Result<Vec<Course>, Failure> {
        self.repo.list_courses().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    use super::CourseService;
    use crate::data::course_repository::{CourseRepository, NewCourse};
    use crate::domain::course::{Course, CreateCourseRequest};
    use crate::domain::failure::{Failure, FailureKind};

    #[derive(Clone)]
    struct FakeCourseRepo {
        created_input: Arc<Mutex<Option<NewCourse>>>,
        existing: Arc<Mutex<Option<Course>>>,
        list_result: Arc<Mutex<Result<Vec<Course>, Failure>>>,
    }

    impl FakeCourseRepo {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                existing: Arc::new(Mutex::new(None)),
                list_result: Arc::new(Mutex::new(Ok(Vec::new()))),
            }
        }
    }

    #[async_trait]
    impl CourseRepository for FakeCourseRepo {
        async fn create_course(&self, input: NewCourse) -> Result<Course, Failure> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_course(1, &input.name))
        }

        async fn get_course(&self, _id: i64) -> Result<Option<Course>, Failure> {
            Ok(self.existing.lock().expect("existing mutex poisoned").clone())
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Course>, Failure> {
            Ok(self.existing.lock().expect("existing mutex poisoned").clone())
        }

        async fn list_courses(&self) -> Result<Vec<Course>, Failure> {
            self.list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone()
        }
    }

    #[tokio::test]
    async fn create_course_validates_before_repo_call() {
        let repo = FakeCourseRepo::new();
        let service = CourseService::new(repo.clone());

        let err = service
            .create_course(request("Rust", 5, 1))
            .await
            .expect_err("invalid dates must fail");

        assert_eq!(err.kind(), FailureKind::Validation);
        assert!(
            repo.created_input
                .lock()
                .expect("created_input mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn create_course_passes_normalized_input() {
        let repo = FakeCourseRepo::new();
        let service = CourseService::new(repo.clone());

        let created = service
            .create_course(request("  Rust  ", 1, 5))
            .await
            .expect("create must succeed");
        assert_eq!(created.name, "Rust");

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.name, "Rust");
    }

    #[tokio::test]
    async fn create_course_returns_conflict_for_existing_name() {
        let repo = FakeCourseRepo::new();
        *repo.existing.lock().expect("existing mutex poisoned") = Some(sample_course(3, "Rust"));

        let service = CourseService::new(repo);
        let err = service
            .create_course(request("Rust", 1, 5))
            .await
            .expect_err("duplicate must fail");
        assert_eq!(err.kind(), FailureKind::Conflict);
    }

    #[tokio::test]
    async fn get_course_returns_not_found_when_missing() {
        let service = CourseService::new(FakeCourseRepo::new());

        let err = service
            .get_course(42)
            .await
            .expect_err("course must be missing");
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(err.to_string(), "course id: 42");
    }

    #[tokio::test]
    async fn list_courses_propagates_repo_failure_untouched() {
        let repo = FakeCourseRepo::new();
        let failure = Failure::timeout("storage did not answer");
        *repo.list_result.lock().expect("list_result mutex poisoned") = Err(failure.clone());

        let service = CourseService::new(repo);
        let err = service
            .list_courses()
            .await
            .expect_err("repo failure must propagate");
        assert_eq!(err, failure);
    }

    fn request(name: &str, start_month: u32, end_month: u32) -> CreateCourseRequest {
        CreateCourseRequest {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, start_month, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2026, end_month, 1).expect("valid date"),
        }
    }

    fn sample_course(id: i64, name: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
            created_at: Utc::now(),
        }
    }
}
