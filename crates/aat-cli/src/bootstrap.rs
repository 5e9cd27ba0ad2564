use aat_config::AatConfig;
use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AatConfig> {
    let mut config = AatConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut AatConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .validate()
            .context("invalid --base-url override")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags(base_url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            quiet: false,
            verbose: false,
            base_url: base_url.map(str::to_string),
            demo_fallback: false,
        }
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let mut config = AatConfig::default();
        apply_overrides(&mut config, &flags(Some("https://staging.example.org/api"))).unwrap();
        assert_eq!(config.api.base_url, "https://staging.example.org/api");
    }

    #[test]
    fn no_flag_keeps_config() {
        let mut config = AatConfig::default();
        apply_overrides(&mut config, &flags(None)).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let mut config = AatConfig::default();
        assert!(apply_overrides(&mut config, &flags(Some("localhost:8000"))).is_err());
    }
}
