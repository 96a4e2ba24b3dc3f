use anyhow::Result;
use serde_json::json;

use crate::CliTest;

const SOURCE: &str = "src/Home.vue";

#[test]
fn test_extract_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = test.run(&["extract", "Hello", "--file", SOURCE, "--key", "lang.demo.key"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Would write lang.demo.key to 2 file(s):"));
    assert!(out.stdout.contains("Run with --apply"));
    insta::assert_snapshot!(out.last_line(), @r#"{{$t("lang.demo.key")}}"#);
    assert!(!test.exists("locales/en/Home.json"));
    assert!(!test.exists("locales/zh/Home.json"));
    Ok(())
}

#[test]
fn test_extract_apply_writes_every_locale() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": {"title": "Title"}}"#)?;

    let out = test.run(&[
        "extract",
        "Hello",
        "--file",
        SOURCE,
        "--key",
        "lang.demo.key",
        "--apply",
    ])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Wrote lang.demo.key to 2 file(s):"));
    assert_eq!(
        test.read_json("locales/en/Home.json")?,
        json!({"lang": {"title": "Title", "demo": {"key": "Hello"}}})
    );
    assert_eq!(
        test.read_json("locales/zh/Home.json")?,
        json!({"lang": {"demo": {"key": "Hello"}}})
    );
    assert_eq!(
        test.read_file("locales/zh/Home.json")?,
        "{\n  \"lang\": {\n    \"demo\": {\n      \"key\": \"Hello\"\n    }\n  }\n}\n"
    );
    Ok(())
}

#[test]
fn test_extract_references_existing_text() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/zh/Home.json", r#"{"common": {"hello": "Hello"}}"#)?;

    let out = test.run(&["extract", "Hello", "--file", SOURCE, "--style", "script"])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Found existing key common.hello (zh)"));
    insta::assert_snapshot!(out.last_line(), @r#"this.$t("common.hello")"#);
    assert!(!test.exists("locales/en/Home.json"));
    Ok(())
}

#[test]
fn test_extract_without_key_or_match_is_an_error() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = test.run(&["extract", "Hello", "--file", SOURCE])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("--key"));
    Ok(())
}

#[test]
fn test_extract_key_through_existing_text_is_a_conflict() -> Result<()> {
    let test = CliTest::with_locales()?;
    let original = r#"{"a": {"b": "Keep me"}}"#;
    test.write_file("locales/en/Home.json", original)?;

    let out = test.run(&["extract", "New", "--file", SOURCE, "--key", "a.b.c", "--apply"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("  en  Keep me (at a.b)"));
    assert_eq!(test.read_file("locales/en/Home.json")?, original);
    assert!(!test.exists("locales/zh/Home.json"));
    Ok(())
}

#[test]
fn test_extract_conflict_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_locales()?;
    let original = r#"{"lang": {"demo": {"key": "Old"}}}"#;
    test.write_file("locales/zh/Home.json", original)?;

    let out = test.run(&[
        "extract",
        "Hello",
        "--file",
        SOURCE,
        "--key",
        "lang.demo.key",
        "--apply",
    ])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("Key lang.demo.key already exists:"));
    assert!(out.stdout.contains("  zh  Old"));
    assert!(out.stdout.contains("--overwrite"));
    assert_eq!(test.read_file("locales/zh/Home.json")?, original);
    assert!(!test.exists("locales/en/Home.json"));
    Ok(())
}

#[test]
fn test_extract_overwrite_updates_each_locale() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("locales/en/Home.json", r#"{"lang": {"key": "Old", "other": "x"}}"#)?;
    test.write_file("locales/zh/Home.json", r#"{"lang": {"key": "旧"}}"#)?;

    let out = test.run(&[
        "extract",
        "New",
        "--file",
        SOURCE,
        "--key",
        "lang.key",
        "--overwrite",
        "--apply",
    ])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("(updated)"));
    assert_eq!(
        test.read_json("locales/en/Home.json")?,
        json!({"lang": {"key": "New", "other": "x"}})
    );
    assert_eq!(
        test.read_json("locales/zh/Home.json")?,
        json!({"lang": {"key": "New"}})
    );
    Ok(())
}

#[test]
fn test_extract_write_source_script_style() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/api.ts", "export const title = 'Hello';\n")?;

    let out = test.run(&[
        "extract",
        "Hello",
        "--file",
        "src/api.ts",
        "--key",
        "api.title",
        "--style",
        "script",
        "--apply",
        "--write-source",
    ])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Rewrote src/api.ts"));
    assert_eq!(
        test.read_file("src/api.ts")?,
        "export const title = this.$t(\"api.title\");\n"
    );
    assert_eq!(
        test.read_json("locales/en/api.json")?,
        json!({"api": {"title": "Hello"}})
    );
    Ok(())
}

#[test]
fn test_extract_write_source_template_style_from_config() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = test.run(&[
        "extract",
        "Hello",
        "--file",
        SOURCE,
        "--key",
        "home.hello",
        "--apply",
        "--write-source",
    ])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        test.read_file(SOURCE)?,
        "<template><div>{{$t(\"home.hello\")}}</div></template>\n"
    );
    Ok(())
}

#[test]
fn test_extract_write_source_missing_text_writes_nothing() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = test.run(&[
        "extract",
        "Goodbye",
        "--file",
        SOURCE,
        "--key",
        "home.bye",
        "--apply",
        "--write-source",
    ])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("text not found in src/Home.vue, nothing was written"));
    assert_eq!(
        test.read_file(SOURCE)?,
        "<template><div>Hello</div></template>\n"
    );
    assert!(!test.exists("locales/en/Home.json"));
    assert!(!test.exists("locales/zh/Home.json"));
    Ok(())
}

#[test]
fn test_extract_unsupported_source_extension() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = test.run(&["extract", "Hello", "--file", "src/App.tsx", "--key", "a"])?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Unsupported source file"));
    Ok(())
}
