// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::StoreSettings;

/// Loads the store connection settings from the process environment.
///
/// This function is the primary entry point for this crate. It collects the
/// `STORE_*` environment variables and deserializes them into our
/// strongly-typed `StoreSettings` struct. Required keys are `STORE_HOST`,
/// `STORE_USER`, `STORE_PASSWORD` and `STORE_DATABASE`; `STORE_PORT` is
/// optional and defaults to the MySQL standard port.
pub fn load_settings() -> Result<StoreSettings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for STORE_-prefixed environment variables
        .add_source(config::Environment::with_prefix("STORE"))
        .build()?;

    // Attempt to deserialize the collected values into our settings struct.
    // A missing required key surfaces here as a deserialization error.
    let settings = builder.try_deserialize::<StoreSettings>()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_settings_from_environment() {
        // Process-wide environment mutation, hence unsafe on edition 2024.
        unsafe {
            std::env::set_var("STORE_HOST", "localhost");
            std::env::set_var("STORE_USER", "root");
            std::env::set_var("STORE_PASSWORD", "secret");
            std::env::set_var("STORE_DATABASE", "people");
        }

        let settings = load_settings().expect("settings should load");
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.user, "root");
        assert_eq!(settings.database, "people");
        // STORE_PORT unset, so the default applies.
        assert_eq!(settings.port, 3306);
    }
}
