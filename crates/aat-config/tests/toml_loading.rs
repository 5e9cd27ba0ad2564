//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use aat_config::AatConfig;
use aat_core::Platform;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://analysis.example.org/api"
timeout_secs = 30
user_agent = "dashboard/2.0"

[api.headers]
x-request-source = "cli"

[defaults]
platform = "youtube"
max_items = 50
"#,
        )?;

        let config: AatConfig = Figment::from(Serialized::defaults(AatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://analysis.example.org/api");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.api.user_agent, "dashboard/2.0");
        assert_eq!(
            config.api.headers.get("x-request-source").map(String::as_str),
            Some("cli")
        );
        assert_eq!(config.defaults.platform, Platform::Youtube);
        assert_eq!(config.defaults.max_items, 50);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[defaults]
max_items = 10
"#,
        )?;

        let config: AatConfig = Figment::from(Serialized::defaults(AatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert!(config.api.timeout_secs.is_none());
        assert_eq!(config.defaults.platform, Platform::Reddit);
        assert_eq!(config.defaults.max_items, 10);
        Ok(())
    });
}

#[test]
fn project_toml_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aat")?;
        jail.create_file(
            ".aat/config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:9000/api"
"#,
        )?;

        let config = AatConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
        Ok(())
    });
}

#[test]
fn unknown_platform_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[defaults]
platform = "myspace"
"#,
        )?;

        let result: Result<AatConfig, _> =
            Figment::from(Serialized::defaults(AatConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
