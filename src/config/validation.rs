use super::schema::Config;

/// Longest tick accepted; a slower tick would make score pulses linger
const MAX_TICK_RATE_MS: u64 = 1000;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.names_source.trim().is_empty() {
        errors.push("names_source: must not be empty".to_string());
    }

    if config.tick_rate_ms == 0 {
        errors.push("tick_rate_ms: must be greater than 0".to_string());
    } else if config.tick_rate_ms > MAX_TICK_RATE_MS {
        errors.push(format!(
            "tick_rate_ms: {} exceeds maximum of {}",
            config.tick_rate_ms, MAX_TICK_RATE_MS
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
