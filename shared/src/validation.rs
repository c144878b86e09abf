//! Validation utilities for the WeFarm platform

/// Validate login/registration credentials are present and sane
pub fn validate_credentials(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Please enter both username and password");
    }
    if username.len() > 50 {
        return Err("Username must be at most 50 characters");
    }
    Ok(())
}

/// Validate a coordinate pair is on the globe
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a confidence value is a float in [0, 1]
pub fn validate_confidence(confidence: f64) -> Result<(), &'static str> {
    if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
        return Err("Confidence must be between 0 and 1");
    }
    Ok(())
}
