use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Состояние курса относительно текущей даты.
pub enum CourseStatus {
    /// Курс ещё не начался.
    Scheduled,
    /// Курс идёт.
    Running,
    /// Курс завершён.
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель курса.
pub struct Course {
    /// Идентификатор курса.
    pub id: i64,
    /// Название курса.
    pub name: String,
    /// Дата начала.
    pub start_date: NaiveDate,
    /// Дата окончания.
    pub end_date: NaiveDate,
    /// Состояние курса.
    pub status: CourseStatus,
    /// Дата и время создания курса (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Товар, доступный для покупки.
pub struct Item {
    /// Идентификатор товара.
    pub id: i64,
    /// Название.
    pub name: String,
    /// Цена в центах.
    pub price_cents: i64,
    /// Можно ли купить товар.
    pub purchasable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Проведённый платёж.
pub struct Payment {
    /// Идентификатор платежа.
    pub id: i64,
    /// Купленный товар.
    pub item_id: i64,
    /// Покупатель.
    pub customer_id: i64,
    /// Списанная сумма в центах.
    pub amount_cents: i64,
    /// Дата и время платежа (UTC).
    pub created_at: DateTime<Utc>,
}
