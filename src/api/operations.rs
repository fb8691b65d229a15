//! Resource operations: devices, observations, device templates
//!
//! Each operation is a two-stage pipeline, authenticate then request,
//! with no operation-level retry. The empty-vs-error rules are the
//! platform's business rules and differ per resource: an empty devices
//! or device-templates listing is an error, an empty observations array
//! is a valid result.

use log::debug;
use reqwest::Method;
use serde_json::Value;

use super::client::StarfishService;
use super::constants;
use super::query::PagedResult;
use crate::error::{Error, Result};

impl StarfishService {
    /// List all devices in the solution
    pub async fn get_devices(&self) -> Result<Vec<Value>> {
        self.query_devices(&[]).await
    }

    /// List devices matching a query filter.
    ///
    /// Fails with "No devices found" when the listing is empty; the API
    /// does not distinguish an empty solution from an unknown one.
    pub async fn query_devices(&self, filter: &[(&str, &str)]) -> Result<Vec<Value>> {
        let url = constants::devices_endpoint(&self.config.endpoint, &self.config.solution);
        debug!("Get devices: {}", url);

        let body = self.send_json(Method::GET, &url, filter, None).await?;
        match body.get("devices").and_then(Value::as_array) {
            Some(devices) if !devices.is_empty() => Ok(devices.clone()),
            _ => Err(Error::Empty("No devices found")),
        }
    }

    /// Create a device
    pub async fn post_device(&self, device: &Value) -> Result<Value> {
        let url = constants::devices_endpoint(&self.config.endpoint, &self.config.solution);
        debug!("Post device: {}", url);
        self.send_json(Method::POST, &url, &[], Some(device)).await
    }

    /// Delete a device by id
    pub async fn delete_device(&self, device_id: &str) -> Result<Value> {
        let url = constants::device_endpoint(&self.config.endpoint, &self.config.solution, device_id);
        debug!("Delete device: {}", url);
        self.send_json(Method::DELETE, &url, &[], None).await
    }

    /// List observations across the whole solution
    pub async fn get_observations(&self) -> Result<PagedResult> {
        self.query_observations(&[]).await
    }

    /// List observations across the solution, with a query filter.
    ///
    /// A `null` body fails with "No observations found"; an empty array
    /// is a valid (empty) page.
    pub async fn query_observations(&self, filter: &[(&str, &str)]) -> Result<PagedResult> {
        let url = constants::observations_endpoint(&self.config.endpoint, &self.config.solution);
        debug!("Get observations: {}", url);
        self.paged_observations(&url, filter).await
    }

    /// List observations reported by one device
    pub async fn get_device_observations(&self, device_id: &str) -> Result<PagedResult> {
        self.query_device_observations(device_id, &[]).await
    }

    /// List observations reported by one device, with a query filter
    pub async fn query_device_observations(
        &self,
        device_id: &str,
        filter: &[(&str, &str)],
    ) -> Result<PagedResult> {
        let url = constants::device_observations_endpoint(
            &self.config.endpoint,
            &self.config.solution,
            device_id,
        );
        debug!("Get device observations: {}", url);
        self.paged_observations(&url, filter).await
    }

    /// Fetch the next page of a paginated listing.
    ///
    /// `next_page` is the opaque absolute URI from an earlier
    /// [`PagedResult`](super::query::PagedResult); an empty value fails
    /// immediately, before any token handling or network activity.
    pub async fn get_next_page(&self, next_page: &str) -> Result<PagedResult> {
        if next_page.is_empty() {
            return Err(Error::Empty("next_page not found"));
        }
        debug!("Get next page: {}", next_page);

        let page = self.send_paged(Method::GET, next_page, &[]).await?;
        if page.data.is_null() {
            return Err(Error::Empty("next_page not found"));
        }
        Ok(page)
    }

    /// Record an observation against a device
    pub async fn post_device_observation(
        &self,
        device_id: &str,
        observation: &Value,
    ) -> Result<Value> {
        let url = constants::device_observations_endpoint(
            &self.config.endpoint,
            &self.config.solution,
            device_id,
        );
        debug!("Post device observation: {}", url);
        self.send_json(Method::POST, &url, &[], Some(observation)).await
    }

    /// List the solution's device templates.
    ///
    /// Fails with "No device templates found" when the listing is
    /// missing or empty; on success the whole response body is returned.
    pub async fn get_device_templates(&self) -> Result<Value> {
        let url = constants::device_templates_endpoint(&self.config.endpoint, &self.config.solution);
        debug!("Get device templates: {}", url);

        let body = self.send_json(Method::GET, &url, &[], None).await?;
        match body.get("deviceTemplates").and_then(Value::as_array) {
            Some(templates) if !templates.is_empty() => Ok(body),
            _ => Err(Error::Empty("No device templates found")),
        }
    }

    /// Read the system-tenant static template catalog
    pub async fn get_static_templates(&self) -> Result<Value> {
        let url = constants::static_templates_endpoint(&self.config.endpoint);
        debug!("Get static templates: {}", url);
        self.send_json(Method::GET, &url, &[], None).await
    }

    /// Create a device template
    pub async fn post_device_template(&self, template: &Value) -> Result<Value> {
        let url = constants::device_templates_endpoint(&self.config.endpoint, &self.config.solution);
        self.add_or_update_device_template(template, &url, Method::POST)
            .await
    }

    /// Replace a device template by id
    pub async fn put_device_template(&self, template_id: &str, template: &Value) -> Result<Value> {
        let url = constants::device_template_endpoint(
            &self.config.endpoint,
            &self.config.solution,
            template_id,
        );
        self.add_or_update_device_template(template, &url, Method::PUT)
            .await
    }

    async fn add_or_update_device_template(
        &self,
        template: &Value,
        url: &str,
        method: Method,
    ) -> Result<Value> {
        debug!("{} device template: {}", method, url);
        self.send_json(method, url, &[], Some(template)).await
    }

    async fn paged_observations(
        &self,
        url: &str,
        filter: &[(&str, &str)],
    ) -> Result<PagedResult> {
        let page = self.send_paged(Method::GET, url, filter).await?;
        if page.data.is_null() {
            return Err(Error::Empty("No observations found"));
        }
        Ok(page)
    }
}
