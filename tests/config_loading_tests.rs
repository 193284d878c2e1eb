use fare_estimator::config::{
    load_config, load_config_with_env_prefix, Config, LogFormat, OutputFormat,
};
use std::env;
use std::fs;

#[test]
fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = load_config(&dir.path().join("absent.toml"))?;

    assert_eq!(cfg, Config::default());
    Ok(())
}

#[test]
fn test_load_config_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fare.toml");
    fs::write(
        &path,
        r#"
[display]
format = "plain"
currency_symbol = "Rs "
color = false

[logging]
level = "debug"
format = "json"
"#,
    )?;

    let cfg = load_config(&path)?;

    assert_eq!(cfg.display.format, OutputFormat::Plain);
    assert_eq!(cfg.display.currency_symbol, "Rs ");
    assert!(!cfg.display.color);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.format, LogFormat::Json);
    Ok(())
}

#[test]
fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fare.toml");
    fs::write(&path, "[logging]\nlevel = \"info\"\n")?;

    let cfg = load_config(&path)?;

    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.display.format, OutputFormat::Table);
    assert_eq!(cfg.display.currency_symbol, "₹");
    Ok(())
}

#[test]
fn test_empty_currency_symbol_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fare.toml");
    fs::write(&path, "[display]\ncurrency_symbol = \"\"\n")?;

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Currency symbol cannot be empty"));
    Ok(())
}

#[test]
fn test_unknown_output_format_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fare.toml");
    fs::write(&path, "[display]\nformat = \"xml\"\n")?;

    assert!(load_config(&path).is_err());
    Ok(())
}

#[test]
fn test_config_round_trips_through_toml() -> anyhow::Result<()> {
    // `fare config show` prints this form; it must load back unchanged
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fare.toml");
    fs::write(&path, toml::to_string_pretty(&Config::default())?)?;

    assert_eq!(load_config(&path)?, Config::default());
    Ok(())
}

#[test]
fn test_environment_overrides_file() -> anyhow::Result<()> {
    // Own prefix so parallel tests calling load_config never see these
    const PREFIX: &str = "FARE_OVERRIDE_TEST";

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fare.toml");
    fs::write(
        &path,
        "[display]\nformat = \"plain\"\ncurrency_symbol = \"$\"\n\n[logging]\nlevel = \"info\"\n",
    )?;

    env::set_var("FARE_OVERRIDE_TEST__DISPLAY__FORMAT", "json");
    env::set_var("FARE_OVERRIDE_TEST__DISPLAY__CURRENCY_SYMBOL", "Rs ");
    let result = load_config_with_env_prefix(&path, PREFIX);
    env::remove_var("FARE_OVERRIDE_TEST__DISPLAY__FORMAT");
    env::remove_var("FARE_OVERRIDE_TEST__DISPLAY__CURRENCY_SYMBOL");

    let cfg = result?;
    assert_eq!(cfg.display.format, OutputFormat::Json);
    assert_eq!(cfg.display.currency_symbol, "Rs ");
    // Keys without a variable still come from the file
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_load_config_from_non_utf8_path() -> anyhow::Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(OsStr::from_bytes(b"fare-\xff.toml"));
    fs::write(&path, "[display]\nformat = \"json\"\n")?;

    let cfg = load_config(&path)?;
    assert_eq!(cfg.display.format, OutputFormat::Json);
    Ok(())
}
