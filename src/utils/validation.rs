//! Input validation for values supplied on the command line

use crate::error::CliError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Vehicle IDs are interpolated into the path unescaped, so they must be a
/// single non-empty segment.
pub fn validate_vehicle_id(id: &str) -> crate::Result<()> {
    if id.is_empty() {
        return Err(CliError::InvalidArguments("Vehicle ID cannot be empty".to_string()).into());
    }

    if id.contains(['/', '?', '#']) || id.chars().any(char::is_whitespace) {
        return Err(CliError::InvalidArguments(format!(
            "Invalid vehicle ID '{}': must be a single path segment",
            id
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://api-v3.mbta.com").is_ok());
        assert!(validate_url("http://localhost:4000").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("ftp://api-v3.mbta.com").is_err());
    }

    #[test]
    fn test_validate_vehicle_id() {
        assert!(validate_vehicle_id("y1886").is_ok());
        assert!(validate_vehicle_id("O-5487D4D1").is_ok());
        assert!(validate_vehicle_id("").is_err());
        assert!(validate_vehicle_id("a/b").is_err());
        assert!(validate_vehicle_id("a b").is_err());
        assert!(validate_vehicle_id("a?include=trip").is_err());
    }
}
