//! The automations API client.
//!
//! Create and update parameters travel as query parameters, matching the
//! server's routes. Every failed call leaves caller state untouched and
//! may be retried as-is; deleting an already-deleted automation is a
//! server-side no-op.

use reqwest::Client;
use url::Url;

use super::AutomationFields;
use crate::automation::Automation;
use crate::error::ApiError;

/// Client for the automations API.
pub struct AutomationsClient {
    base: Url,
    http: Client,
}

impl AutomationsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base: Url::parse(base_url)?,
            http: Client::new(),
        })
    }

    /// All automations persisted for the current user.
    pub async fn list(&self) -> Result<Vec<Automation>, ApiError> {
        let url = self.base.join("/api/automations")?;
        let resp = check_status(self.http.get(url).send().await?).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Create a new automation, returning the persisted record with its
    /// durable id.
    pub async fn create(&self, fields: &AutomationFields) -> Result<Automation, ApiError> {
        let url = self.automation_url(fields, None)?;
        let resp = check_status(self.http.post(url).send().await?).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Update an existing automation, returning the updated record.
    pub async fn update(&self, id: i64, fields: &AutomationFields) -> Result<Automation, ApiError> {
        let url = self.automation_url(fields, Some(id))?;
        let resp = check_status(self.http.put(url).send().await?).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete an automation.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut url = self.base.join("/api/automation")?;
        url.query_pairs_mut()
            .append_pair("automation_id", &id.to_string());
        check_status(self.http.delete(url).send().await?).await?;
        Ok(())
    }

    /// Fire an immediate out-of-band run. The response body carries no
    /// information the caller needs.
    pub async fn trigger(&self, id: i64) -> Result<(), ApiError> {
        let mut url = self.base.join("/api/trigger/automation")?;
        url.query_pairs_mut()
            .append_pair("automation_id", &id.to_string());
        check_status(self.http.post(url).send().await?).await?;
        Ok(())
    }

    fn automation_url(
        &self,
        fields: &AutomationFields,
        id: Option<i64>,
    ) -> Result<Url, ApiError> {
        let mut url = self.base.join("/api/automation")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &fields.query_to_run);
            if let Some(id) = id {
                pairs.append_pair("automation_id", &id.to_string());
            }
            if let Some(subject) = &fields.subject {
                pairs.append_pair("subject", subject);
            }
            pairs.append_pair("crontime", &fields.crontime);
            if let Some(location) = &fields.location {
                pairs.append_pair("city", &location.city);
                pairs.append_pair("region", &location.region);
                pairs.append_pair("country", &location.country);
                pairs.append_pair("timezone", &location.timezone);
            }
        }
        Ok(url)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
