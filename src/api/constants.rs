//! API constants and URL builders for the Starfish Data Platform

/// Default platform endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.data-platform.developer.ssni.com";

/// Default solution (tenant namespace) for new services
pub const DEFAULT_SOLUTION: &str = "sandbox";

/// Tenant path used by the read-only static template catalog
pub const SYSTEM_TENANT: &str = "systemTenant";

/// Standard headers for Starfish requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Response header carrying the opaque URI of the next page
    pub const NEXT_PAGE: &str = "next_page";
}

/// Build the token-exchange endpoint URL
pub fn tokens_endpoint(base_url: &str) -> String {
    format!("{}/tokens", base_url)
}

/// Build the devices collection endpoint URL
pub fn devices_endpoint(base_url: &str, solution: &str) -> String {
    format!("{}/api/solutions/{}/devices", base_url, solution)
}

/// Build a single-device endpoint URL
pub fn device_endpoint(base_url: &str, solution: &str, device_id: &str) -> String {
    format!("{}/api/solutions/{}/devices/{}", base_url, solution, device_id)
}

/// Build the solution-wide observations endpoint URL
pub fn observations_endpoint(base_url: &str, solution: &str) -> String {
    format!("{}/api/solutions/{}/observations", base_url, solution)
}

/// Build a per-device observations endpoint URL
pub fn device_observations_endpoint(base_url: &str, solution: &str, device_id: &str) -> String {
    format!(
        "{}/api/solutions/{}/devices/{}/observations",
        base_url, solution, device_id
    )
}

/// Build the device templates collection endpoint URL
pub fn device_templates_endpoint(base_url: &str, solution: &str) -> String {
    format!("{}/api/solutions/{}/devicetemplates", base_url, solution)
}

/// Build a single device template endpoint URL
pub fn device_template_endpoint(base_url: &str, solution: &str, template_id: &str) -> String {
    format!(
        "{}/api/solutions/{}/devicetemplates/{}",
        base_url, solution, template_id
    )
}

/// Build the system-tenant static template catalog URL (no solution segment)
pub fn static_templates_endpoint(base_url: &str) -> String {
    format!("{}/api/tenants/{}/devicetemplates", base_url, SYSTEM_TENANT)
}
