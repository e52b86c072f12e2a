//! Configuration validation helpers

use url::Url;

/// Check that an API base is an absolute http(s) URL with a host
pub fn validate_api_base(api_base: &str) -> Result<(), String> {
    let url = Url::parse(api_base)
        .map_err(|e| format!("API base has invalid URL format: {}", e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "API base must use http:// or https:// scheme, got: {}",
                scheme
            ));
        }
    }

    if url.host_str().is_none() {
        return Err("API base URL must have a valid host".to_string());
    }

    Ok(())
}
