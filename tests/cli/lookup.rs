use anyhow::Result;

use crate::CliTest;

#[test]
fn test_lookup_prints_every_locale() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": {"demo": {"key": "Hi"}}}"#)?;

    let out = test.run(&["lookup", "lang.demo.key", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "lang.demo.key in Home.json\n  en  Hi\n  zh  (missing)\n"
    );
    Ok(())
}

#[test]
fn test_lookup_missing_everywhere_fails() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": "flat"}"#)?;

    let out = test.run(&["lookup", "lang.demo", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(1));
    Ok(())
}

#[test]
fn test_lookup_locales_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/fr/Home.json", r#"{"greeting": "Bonjour"}"#)?;

    let out = test.run(&[
        "lookup",
        "greeting",
        "--file",
        "src/Home.vue",
        "--locales",
        "fr",
    ])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("  fr  Bonjour"));
    assert!(!out.stdout.contains("  en"));
    Ok(())
}

#[test]
fn test_lookup_invalid_json_is_an_error() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/zh/Home.json", "{ invalid json }")?;

    let out = test.run(&["lookup", "a", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Failed to parse JSON"));
    assert!(out.stderr.contains("Home.json"));
    Ok(())
}

#[test]
fn test_lookup_missing_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Home.vue", "")?;

    let out = test.run(&["lookup", "a", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("does not exist"));
    Ok(())
}

#[test]
fn test_lookup_from_subdirectory_finds_parent_config() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": {"demo": {"key": "Hi"}}}"#)?;

    let out = test.run_in("src", &["lookup", "lang.demo.key", "--file", "Home.vue"])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "lang.demo.key in Home.json\n  en  Hi\n  zh  (missing)\n"
    );
    Ok(())
}

#[test]
fn test_lookup_rejects_locale_outside_messages_root() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = test.run(&[
        "lookup",
        "a",
        "--file",
        "src/Home.vue",
        "--locales",
        "en,../..",
    ])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Invalid locale"));
    Ok(())
}
