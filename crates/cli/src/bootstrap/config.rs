use jping_domain::{CliOverrides, Config};

/// Loads the configuration and rejects it before any router is contacted.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
