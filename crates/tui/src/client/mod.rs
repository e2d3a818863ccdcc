use api_types::{
    RecordId,
    balance::BalanceSummary,
    expense::{Expense, ExpenseNew},
    income::{Income, IncomeNew},
    reminder::{Reminder, ReminderNew, ReminderPatch},
};
use ledger::{LedgerStore, StoreError};
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// HTTP implementation of [`LedgerStore`] against the REST service.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: Url,
    http: reqwest::Client,
}

impl RestClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|err| StoreError::Server(format!("invalid base_url: {err}")))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, StoreError> {
        let res = self
            .http
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(transport)?;
        let res = check_status(res).await?;
        res.json::<T>().await.map_err(transport)
    }

    async fn dispatch(&self, req: reqwest::RequestBuilder) -> std::result::Result<(), StoreError> {
        let res = req.send().await.map_err(transport)?;
        check_status(res).await?;
        Ok(())
    }
}

impl LedgerStore for RestClient {
    async fn incomes(&self) -> std::result::Result<Vec<Income>, StoreError> {
        self.fetch("ingresos").await
    }

    async fn create_income(&self, new: IncomeNew) -> std::result::Result<(), StoreError> {
        let endpoint = self.endpoint("ingresos")?;
        self.dispatch(self.http.post(endpoint).json(&new)).await
    }

    async fn expenses(&self) -> std::result::Result<Vec<Expense>, StoreError> {
        self.fetch("gastos").await
    }

    async fn create_expense(&self, new: ExpenseNew) -> std::result::Result<(), StoreError> {
        let endpoint = self.endpoint("gastos")?;
        self.dispatch(self.http.post(endpoint).json(&new)).await
    }

    async fn reminders(&self) -> std::result::Result<Vec<Reminder>, StoreError> {
        self.fetch("recordatorios").await
    }

    async fn create_reminder(&self, new: ReminderNew) -> std::result::Result<(), StoreError> {
        let endpoint = self.endpoint("recordatorios")?;
        self.dispatch(self.http.post(endpoint).json(&new)).await
    }

    async fn set_reminder_completed(
        &self,
        id: &RecordId,
        completado: bool,
    ) -> std::result::Result<(), StoreError> {
        let endpoint = self.endpoint(&format!("recordatorios/{id}"))?;
        let patch = ReminderPatch { completado };
        self.dispatch(self.http.patch(endpoint).json(&patch)).await
    }

    async fn delete_reminder(&self, id: &RecordId) -> std::result::Result<(), StoreError> {
        let endpoint = self.endpoint(&format!("recordatorios/{id}"))?;
        self.dispatch(self.http.delete(endpoint)).await
    }

    async fn balance(&self) -> std::result::Result<BalanceSummary, StoreError> {
        self.fetch("balance").await
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

async fn check_status(res: Response) -> std::result::Result<Response, StoreError> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    let err = match status {
        StatusCode::NOT_FOUND => StoreError::NotFound(body),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => StoreError::Validation(body),
        _ => StoreError::Server(body),
    };
    Err(err)
}
