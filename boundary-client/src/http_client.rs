use chrono::NaiveDate;
use reqwest::{Client, Method};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::models::{Course, Item, Payment};

#[derive(Debug, Serialize)]
struct CreateCourseRequestDto<'a> {
    name: &'a str,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct PurchaseRequestDto {
    customer_id: i64,
    item_id: i64,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API `boundary-server`.
pub struct BoundaryClient {
    base_url: String,
    client: Client,
}

impl BoundaryClient {
    /// Создаёт клиент с базовым URL сервера, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        match response.bytes().await {
            Ok(raw) => ClientError::from_http_status(status, &raw),
            Err(_) => ClientError::from_http_status(status, &[]),
        }
    }

    async fn send<TRes>(&self, request: reqwest::RequestBuilder) -> ClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(response.json::<TRes>().await?)
    }

    async fn get_json<TRes>(&self, path: &str) -> ClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let request = self.client.request(Method::GET, self.endpoint(path));
        self.send(request).await
    }

    async fn post_json<TReq, TRes>(&self, path: &str, body: &TReq) -> ClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let request = self
            .client
            .request(Method::POST, self.endpoint(path))
            .json(body);
        self.send(request).await
    }

    /// Возвращает все курсы, отсортированные по дате начала.
    pub async fn list_courses(&self) -> ClientResult<Vec<Course>> {
        self.get_json("/api/courses").await
    }

    /// Получает курс по идентификатору.
    pub async fn get_course(&self, id: i64) -> ClientResult<Course> {
        self.get_json(&format!("/api/courses/{id}")).await
    }

    /// Создаёт курс.
    ///
    /// Ошибки валидации приходят как [`ClientError::Invalid`] с ошибками по полям.
    pub async fn create_course(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ClientResult<Course> {
        let payload = CreateCourseRequestDto {
            name,
            start_date,
            end_date,
        };
        self.post_json("/api/courses", &payload).await
    }

    /// Возвращает каталог товаров.
    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        self.get_json("/api/items").await
    }

    /// Покупает товар от имени покупателя.
    pub async fn purchase_item(&self, customer_id: i64, item_id: i64) -> ClientResult<Payment> {
        let payload = PurchaseRequestDto {
            customer_id,
            item_id,
        };
        self.post_json("/api/payments", &payload).await
    }
}
