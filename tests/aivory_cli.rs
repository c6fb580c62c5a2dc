//! Integration tests that lock aivory CLI flag and output behavior.

use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn aivory_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_aivory").expect("aivory test binary not built")
}

#[test]
fn help_mentions_name_and_core_flags() {
    let output = Command::new(aivory_bin())
        .arg("--help")
        .output()
        .expect("run aivory --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("aivory"));
    assert!(combined.contains("--theme"));
    assert!(combined.contains("--input-lang"));
    assert!(combined.contains("--output-lang"));
    assert!(combined.contains("--script"));
}

#[test]
fn list_themes_prints_every_palette() {
    let output = Command::new(aivory_bin())
        .arg("--list-themes")
        .output()
        .expect("run aivory --list-themes");
    assert!(output.status.success());
    let combined = combined_output(&output);
    for key in ["emerald", "crimson", "sapphire", "amethyst", "amber", "rose"] {
        assert!(combined.contains(key), "missing theme {key}");
    }
    assert!(combined.contains("(default)"));
}

#[test]
fn list_languages_prints_catalog_entries() {
    let output = Command::new(aivory_bin())
        .arg("--list-languages")
        .output()
        .expect("run aivory --list-languages");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("en-US"));
    assert!(combined.contains("Japanese"));
    assert!(combined.contains("(default)"));
}

#[test]
fn unknown_theme_flag_fails_fast() {
    let output = Command::new(aivory_bin())
        .args(["--theme", "ocean", "--list-themes"])
        .output()
        .expect("run aivory with bad theme");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("ocean"));
}

#[test]
fn unknown_language_flag_fails_fast() {
    let output = Command::new(aivory_bin())
        .args(["--input-lang", "xx-XX", "--list-languages"])
        .output()
        .expect("run aivory with bad language");
    assert!(!output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("xx-XX"));
}
