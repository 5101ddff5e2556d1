use crate::schema::GifNorrisConfig;

use super::helpers::is_header_token;

pub(crate) fn validate_service(errors: &mut Vec<String>, config: &GifNorrisConfig) {
    let service = &config.service;

    if !(service.host.starts_with("http://") || service.host.starts_with("https://")) {
        errors.push(format!(
            "service.host = {:?} must start with http:// or https://",
            service.host
        ));
    }

    if !service.base_path.is_empty() && !service.base_path.starts_with('/') {
        errors.push(format!(
            "service.base_path = {:?} must be empty or start with '/'",
            service.base_path
        ));
    }

    if !is_header_token(&service.header_name) {
        errors.push(format!(
            "service.header_name = {:?} is not a valid HTTP header name",
            service.header_name
        ));
    }

    // Never echo the key itself.
    if service.api_key.chars().any(|c| c.is_control()) {
        errors.push("service.api_key contains control characters".into());
    }
}
