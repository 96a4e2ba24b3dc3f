use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created .i18nrc.json"));
    let config = test.read_json(".i18nrc.json")?;
    assert_eq!(config["messagesRoot"], "./locales");
    assert_eq!(config["defaultStyle"], "template");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    let out = test.run(&["init"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage"));
    Ok(())
}
