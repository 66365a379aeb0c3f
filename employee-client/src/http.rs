//! HTTP client for network-based API calls

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::{
    EMPLOYEES_PATH, Employee, EmployeeId, EmployeeOutcome, EmployeePayload, HealthReport,
    MSG_NOT_FOUND,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the employee server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn employee_url(&self, id: EmployeeId) -> String {
        self.url(&format!("{}/{}", EMPLOYEES_PATH, id))
    }

    /// Make a GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }
        response.json().await.map_err(Into::into)
    }

    /// Map a non-success response to an error
    ///
    /// JSON error envelopes contribute their message; anything else is
    /// passed through as text.
    fn error_from(status: StatusCode, text: String) -> ClientError {
        let message = serde_json::from_str::<ApiResponse>(&text)
            .map(|envelope| envelope.message)
            .unwrap_or(text);

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }

    /// Turn the text answer of a mutation into an outcome
    ///
    /// `success` is the outcome of a 2xx answer; a 404 carrying the
    /// not-found text becomes [`EmployeeOutcome::NotFound`].
    async fn outcome(
        response: Response,
        id: EmployeeId,
        success: EmployeeOutcome,
    ) -> ClientResult<EmployeeOutcome> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(success);
        }
        if status == StatusCode::NOT_FOUND && text == MSG_NOT_FOUND {
            return Ok(EmployeeOutcome::NotFound { id });
        }
        Err(Self::error_from(status, text))
    }

    // ========== Employee API ==========

    /// List all employees
    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get(&self.url(EMPLOYEES_PATH)).await
    }

    /// Get an employee by id
    ///
    /// A missing employee is [`ClientError::NotFound`].
    pub async fn get_employee(&self, id: EmployeeId) -> ClientResult<Employee> {
        self.get(&self.employee_url(id)).await
    }

    /// Create an employee; the assigned id is read from the `Location` header
    pub async fn create_employee(&self, payload: &EmployeePayload) -> ClientResult<EmployeeOutcome> {
        let response = self
            .client
            .post(self.url(EMPLOYEES_PATH))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }

        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ClientError::InvalidResponse("Missing Location header".to_string()))?;
        let id = location
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<EmployeeId>().ok())
            .ok_or_else(|| {
                ClientError::InvalidResponse(format!("Unexpected Location '{}'", location))
            })?;

        Ok(EmployeeOutcome::Created { id })
    }

    /// Replace the fields of an employee
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        payload: &EmployeePayload,
    ) -> ClientResult<EmployeeOutcome> {
        let response = self
            .client
            .put(self.employee_url(id))
            .json(payload)
            .send()
            .await?;
        Self::outcome(response, id, EmployeeOutcome::Updated { id }).await
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: EmployeeId) -> ClientResult<EmployeeOutcome> {
        let response = self.client.delete(self.employee_url(id)).send().await?;
        Self::outcome(response, id, EmployeeOutcome::Deleted { id }).await
    }

    // ========== Health API ==========

    pub async fn health(&self) -> ClientResult<HealthReport> {
        self.get(&self.url("/health")).await
    }
}
