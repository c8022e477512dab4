//! Settings parsing and validation

use folio_core::prelude::*;

use super::types::Settings;

/// Parse settings from TOML text, failing on malformed input.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)
        .map_err(|e| Error::config(format!("Failed to parse settings: {}", e)))?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Load settings from TOML text
///
/// Malformed or invalid input is logged and replaced by the defaults, so a
/// broken settings table never keeps the page from booting.
pub fn load_settings(content: &str) -> Settings {
    if content.trim().is_empty() {
        debug!("No settings provided, using defaults");
        return Settings::default();
    }

    match parse_settings(content) {
        Ok(settings) => {
            debug!("Loaded settings");
            settings
        }
        Err(e) if e.is_fatal() => {
            error!("Rejected settings, using defaults: {}", e);
            Settings::default()
        }
        Err(e) => {
            warn!("Ignoring settings: {}", e);
            Settings::default()
        }
    }
}

/// Reject values the controller cannot work with.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.layout.mobile_breakpoint == 0 {
        return Err(Error::config_invalid("mobile_breakpoint must be positive"));
    }
    if !settings.layout.parallax_factor.is_finite() {
        return Err(Error::config_invalid("parallax_factor must be a finite number"));
    }
    if !(0.0..=1.0).contains(&settings.reveal.threshold) {
        return Err(Error::config_invalid(format!(
            "reveal threshold {} is outside 0.0..=1.0",
            settings.reveal.threshold
        )));
    }
    if settings.timing.caret_blink_ms == 0 {
        return Err(Error::config_invalid("caret_blink_ms must be positive"));
    }
    Ok(())
}
