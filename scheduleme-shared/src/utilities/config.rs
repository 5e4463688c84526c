use dotenv::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_USERS_TABLE: &str = "SCHEDULEME_USERS";
const DEFAULT_CONFIGURATIONS_TABLE: &str = "USER_CONFIGURATIONS";
const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 3_000;

/// Initialize dotenv (only needs to be called once at startup)
pub fn init() {
    if dotenv().is_ok() {
        log::info!("Loaded .env file");
    } else {
        log::debug!("No .env file found, using process environment");
    }
}

/// Fetch an environment variable, falling back to `default` when unset or blank.
pub fn get_env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

//Get table names
pub fn get_users_table() -> String {
    get_env_var_or("USERS_TABLE_NAME", DEFAULT_USERS_TABLE)
}

pub fn get_configurations_table() -> String {
    get_env_var_or("CONFIGURATIONS_TABLE_NAME", DEFAULT_CONFIGURATIONS_TABLE)
}

/// Deadline for a single DynamoDB operation, attempts included.
pub fn get_store_operation_timeout() -> Duration {
    parse_timeout_ms(env::var("DYNAMODB_OPERATION_TIMEOUT_MS").ok().as_deref())
}

pub fn get_cors_allow_origin() -> Option<String> {
    env::var("CORS_ALLOW_ORIGIN")
        .ok()
        .filter(|origin| !origin.trim().is_empty())
}

fn parse_timeout_ms(raw: Option<&str>) -> Duration {
    let millis = match raw.map(str::trim) {
        Some(value) => value.parse::<u64>().ok().filter(|ms| *ms > 0).unwrap_or_else(|| {
            log::warn!("Ignoring invalid DYNAMODB_OPERATION_TIMEOUT_MS value: {:?}", value);
            DEFAULT_OPERATION_TIMEOUT_MS
        }),
        None => DEFAULT_OPERATION_TIMEOUT_MS,
    };
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_falls_back_to_default() {
        let value = get_env_var_or("SCHEDULEME_TEST_VARIABLE_THAT_IS_NEVER_SET", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn timeout_defaults_when_missing_or_invalid() {
        let default = Duration::from_millis(DEFAULT_OPERATION_TIMEOUT_MS);
        assert_eq!(parse_timeout_ms(None), default);
        assert_eq!(parse_timeout_ms(Some("soon")), default);
        assert_eq!(parse_timeout_ms(Some("0")), default);
    }

    #[test]
    fn timeout_accepts_millisecond_values() {
        assert_eq!(parse_timeout_ms(Some(" 1500 ")), Duration::from_millis(1500));
    }
}
