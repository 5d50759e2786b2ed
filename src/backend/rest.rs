//! Production backend adapter over JSON/HTTP.
//!
//! Data lives under Firebase-style paths: `users/{uid}/expenses.json`
//! is a map of id to record, and `users/{uid}/expenses/{id}.json` is
//! one record addressed by PUT/PATCH/DELETE. The record schema is
//! closed: unknown fields fail decoding, and writes with an empty
//! description are refused before they leave the client.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{validate_description, AuthGateway, BackendError, ExpenseRepository};
use crate::models::{Expense, ExpensePatch};

/// One expense as stored by the backend. The id is the map key, not a
/// field, and no extra fields are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ExpenseRecord {
    description: String,
    note: String,
    amount: i64,
    created_at: i64,
}

impl ExpenseRecord {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            description: expense.description.clone(),
            note: expense.note.clone(),
            amount: expense.amount,
            created_at: expense.created_at,
        }
    }

    fn into_expense(self, id: String) -> Expense {
        Expense {
            id,
            description: self.description,
            note: self.note,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    uid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    uid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    api_key: &'a str,
}

/// HTTP adapter for both backend traits.
#[derive(Debug, Clone)]
pub struct RestBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestBackend {
    /// Create an adapter for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Create an adapter with a preconfigured `reqwest::Client`.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Attach the auth key, Firebase-style, as an `auth` query parameter.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.query(&[("auth", key.as_str())]),
            None => builder,
        }
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(BackendError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AuthGateway for RestBackend {
    async fn current_user(&self) -> Result<Option<String>, BackendError> {
        let response = self
            .authed(self.client.get(self.url("auth/session")))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        let session: SessionResponse = serde_json::from_str(&body)?;
        Ok(session.uid)
    }

    async fn sign_in(&self) -> Result<String, BackendError> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let response = self
            .client
            .post(self.url("auth/sign-in"))
            .json(&SignInRequest { api_key: key })
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::SignInRefused);
        }
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        let signed_in: SignInResponse = serde_json::from_str(&body)?;
        Ok(signed_in.uid)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let response = self
            .authed(self.client.post(self.url("auth/sign-out")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ExpenseRepository for RestBackend {
    async fn fetch_expenses(&self, uid: &str) -> Result<Vec<Expense>, BackendError> {
        let path = format!("users/{uid}/expenses.json");
        let response = self.authed(self.client.get(self.url(&path))).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        // an empty collection comes back as JSON null
        let records: Option<BTreeMap<String, ExpenseRecord>> = serde_json::from_str(&body)?;
        Ok(records
            .unwrap_or_default()
            .into_iter()
            .map(|(id, record)| record.into_expense(id))
            .collect())
    }

    async fn create_expense(&self, uid: &str, expense: &Expense) -> Result<(), BackendError> {
        validate_description(&expense.description)?;
        let path = format!("users/{uid}/expenses/{}.json", expense.id);
        let response = self
            .authed(self.client.put(self.url(&path)))
            .json(&ExpenseRecord::from_expense(expense))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn update_expense(
        &self,
        uid: &str,
        id: &str,
        updates: &ExpensePatch,
    ) -> Result<(), BackendError> {
        if let Some(description) = &updates.description {
            validate_description(description)?;
        }
        let path = format!("users/{uid}/expenses/{id}.json");
        let response = self
            .authed(self.client.patch(self.url(&path)))
            .json(updates)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_expense(&self, uid: &str, id: &str) -> Result<(), BackendError> {
        let path = format!("users/{uid}/expenses/{id}.json");
        let response = self
            .authed(self.client.delete(self.url(&path)))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip_keeps_fields() {
        let expense = Expense {
            id: "e1".to_string(),
            description: "rent".to_string(),
            note: "march".to_string(),
            amount: 70000,
            created_at: 12345,
        };
        let record = ExpenseRecord::from_expense(&expense);
        assert_eq!(record.into_expense("e1".to_string()), expense);
    }

    #[test]
    fn test_record_schema_is_closed() {
        let err = serde_json::from_str::<ExpenseRecord>(
            r#"{"description":"rent","note":"","amount":1,"createdAt":0,"category":"home"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let backend = RestBackend::new("http://localhost:8000/", None);
        assert_eq!(backend.url("auth/session"), "http://localhost:8000/auth/session");
    }
}
