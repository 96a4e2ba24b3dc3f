use anyhow::Result;

use crate::CliTest;

#[test]
fn test_find_existing_text() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": {"hello": "Hello"}}"#)?;
    test.write_file("locales/zh/Home.json", r#"{"lang": {"hello": "你好"}}"#)?;

    let out = test.run(&["find", "你好", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(0));
    insta::assert_snapshot!(out.stdout.trim_end(), @r#"✓ "你好" is lang.hello (zh)"#);
    Ok(())
}

#[test]
fn test_find_no_match() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": {"hello": "Hello"}}"#)?;

    let out = test.run(&["find", "hello", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("No translation matches \"hello\" in Home.json"));
    Ok(())
}

#[test]
fn test_find_discovers_locale_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/Home.vue", "")?;
    test.write_file("locales/de/Home.json", r#"{"save": "Speichern"}"#)?;

    let out = test.run(&["find", "Speichern", "--file", "src/Home.vue"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("save (de)"));
    Ok(())
}
