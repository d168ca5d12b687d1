use anyhow::Result;
use clap::Parser;
use httpmock::prelude::*;
use quake_watch::config::toml_config::TomlConfig;
use quake_watch::core::printer::OutputFormat;
use quake_watch::utils::validation::Validate;
use quake_watch::CliConfig;
use std::process::Command;
use tempfile::TempDir;

const SAMPLE_PAGE: &str = include_str!("fixtures/lst4_sample.txt");

/// 配置檔的值會被命令列參數覆蓋
#[test]
fn test_config_file_layered_under_flags() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("quake-watch.toml");
    std::fs::write(
        &config_path,
        r#"
[source]
endpoint = "https://mirror.example.com/lst4.asp"
timeout_seconds = 12

[filter]
include_all = true
max_depth = 25.0

[time]
display_timezone = "UTC"

[output]
format = "json"
"#,
    )?;

    let cli = CliConfig::try_parse_from([
        "quake-watch",
        "--config",
        config_path.to_str().unwrap(),
        "-d",
        "40",
    ])?;
    let settings = cli.resolve()?;
    settings.validate()?;

    assert_eq!(settings.endpoint, "https://mirror.example.com/lst4.asp");
    assert_eq!(settings.timeout.map(|t| t.as_secs()), Some(12));
    assert!(settings.filter.include_all);
    assert_eq!(settings.filter.max_depth, 40.0);
    assert_eq!(settings.filter.min_magnitude, 4.5);
    assert_eq!(settings.format, OutputFormat::Json);
    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[source]\nendpoint = \"not a url\"\n")?;

    let config = TomlConfig::from_file(&config_path)?;
    assert!(config.validate().is_err());

    let cli = CliConfig::try_parse_from(["quake-watch", "-c", config_path.to_str().unwrap()])?;
    assert!(cli.resolve().is_err());
    Ok(())
}

#[test]
fn test_binary_reads_config_file() -> Result<()> {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/lst4.asp");
        then.status(200).body(SAMPLE_PAGE);
    });

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("quake-watch.toml");
    std::fs::write(
        &config_path,
        format!(
            "[source]\nendpoint = \"{}\"\n\n[filter]\nmin_magnitude = 6.0\nmax_depth = 71.0\n\n[time]\ndisplay_timezone = \"UTC\"\n",
            server.url("/lst4.asp")
        ),
    )?;

    let output = Command::new(env!("CARGO_BIN_EXE_quake-watch"))
        .args(["--config", config_path.to_str().unwrap()])
        .env_remove("RUST_LOG")
        .output()?;

    page_mock.assert();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "HENDEK KURTKOY\t6.1M\t70.0km\t2023-05-01 07:40:00\n"
    );
    Ok(())
}
