//! API key lookup
//!
//! The MBTA API accepts anonymous requests at a lower rate limit; a key is
//! picked up from the MBTA_API_KEY environment variable when present.

use std::env;

pub const API_KEY_ENV_VAR: &str = "MBTA_API_KEY";

/// Get the API key from the environment, ignoring empty values
pub fn get_api_key() -> Option<String> {
    non_empty(env::var(API_KEY_ENV_VAR).ok())
}

/// Prefer an explicitly passed key over the environment
pub fn resolve_api_key(explicit: Option<String>) -> Option<String> {
    non_empty(explicit).or_else(get_api_key)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("key".to_string())), Some("key".to_string()));
    }

    #[test]
    fn test_explicit_key_wins() {
        assert_eq!(
            resolve_api_key(Some("explicit".to_string())),
            Some("explicit".to_string())
        );
    }
}
