//! End-to-end tests for `embedgen generate`

mod common;

use predicates::prelude::*;

use common::TestWorkspace;

#[test]
fn test_generate_font_example() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("Font.ttf", &[0, 255, 16]);
    workspace.write_manifest(&[("Font", "FONT_DATA")]);

    workspace
        .cmd()
        .args(["-m", "embed.yaml", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 asset(s), 3 bytes"));

    assert_eq!(
        workspace.read_file("Font.c"),
        "const char FONT_DATA[3] = {0,255,16};"
    );
    assert_eq!(
        workspace.read_file("Font.h"),
        "extern \"C\" { extern const char FONT_DATA[3]; }"
    );
}

#[test]
fn test_generate_is_default_command() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("JetBrainsMono-Regular.ttf", &[1, 2, 3, 4]);

    workspace.cmd().assert().success();

    assert_eq!(
        workspace.read_file("JetBrainsMono-Regular.c"),
        "const char JET_BRAINS_MONO_FONT[4] = {1,2,3,4};"
    );
    assert_eq!(
        workspace.read_file("JetBrainsMono-Regular.h"),
        "extern \"C\" { extern const char JET_BRAINS_MONO_FONT[4]; }"
    );
}

#[test]
fn test_generate_with_dir_option() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("fonts/JetBrainsMono-Regular.ttf", &[42]);

    workspace
        .cmd()
        .args(["--dir", "fonts", "generate"])
        .assert()
        .success();

    assert!(workspace.file_exists("fonts/JetBrainsMono-Regular.c"));
    assert!(workspace.file_exists("fonts/JetBrainsMono-Regular.h"));
    assert!(!workspace.file_exists("JetBrainsMono-Regular.c"));
}

#[test]
fn test_generate_empty_asset() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("Empty.ttf", &[]);
    workspace.write_manifest(&[("Empty", "EMPTY_DATA")]);

    workspace
        .cmd()
        .args(["-m", "embed.yaml"])
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("Empty.c"),
        "const char EMPTY_DATA[0] = {};"
    );
    assert_eq!(
        workspace.read_file("Empty.h"),
        "extern \"C\" { extern const char EMPTY_DATA[0]; }"
    );
}

#[test]
fn test_generate_multiple_assets_in_order() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("Regular.ttf", &[1]);
    workspace.write_asset("Bold.ttf", &[2, 3]);
    workspace.write_manifest(&[("Regular", "REGULAR_FONT"), ("Bold", "BOLD_FONT")]);

    let output = workspace
        .cmd()
        .args(["-m", "embed.yaml", "-v"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let regular = stdout.find("Regular.ttf").unwrap();
    let bold = stdout.find("Bold.ttf").unwrap();
    assert!(regular < bold, "assets should be processed in manifest order");

    assert_eq!(workspace.read_file("Bold.c"), "const char BOLD_FONT[2] = {2,3};");
}

#[test]
fn test_generate_verbose_reports_each_file() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("JetBrainsMono-Regular.ttf", &[9]);

    workspace
        .cmd()
        .args(["--verbose", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing"))
        .stdout(predicate::str::contains("JetBrainsMono-Regular.ttf"))
        .stdout(predicate::str::contains("Written"))
        .stdout(predicate::str::contains("JetBrainsMono-Regular.c"))
        .stdout(predicate::str::contains("JetBrainsMono-Regular.h"));
}

#[test]
fn test_generate_quiet_prints_nothing() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("JetBrainsMono-Regular.ttf", &[9]);

    workspace
        .cmd()
        .args(["-q", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_generate_twice_is_byte_identical() {
    let workspace = TestWorkspace::new();
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    workspace.write_asset("JetBrainsMono-Regular.ttf", &data);

    workspace.cmd().arg("-q").assert().success();
    let first = (
        workspace.read_file("JetBrainsMono-Regular.c"),
        workspace.read_file("JetBrainsMono-Regular.h"),
    );

    workspace.cmd().arg("-q").assert().success();
    let second = (
        workspace.read_file("JetBrainsMono-Regular.c"),
        workspace.read_file("JetBrainsMono-Regular.h"),
    );

    assert_eq!(first, second);
    assert!(first.0.starts_with("const char JET_BRAINS_MONO_FONT[4096] = {0,1,2,"));
}

#[test]
fn test_generate_custom_extensions() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("Icons.otf", &[5, 6]);
    workspace.write_file(
        "embed.yaml",
        "extensions:\n  input: otf\n  source: cpp\n  header: hpp\nassets:\n  - stem: Icons\n    symbol: ICONS\n",
    );

    workspace
        .cmd()
        .args(["-m", "embed.yaml", "generate"])
        .assert()
        .success();

    assert_eq!(workspace.read_file("Icons.cpp"), "const char ICONS[2] = {5,6};");
    assert_eq!(
        workspace.read_file("Icons.hpp"),
        "extern \"C\" { extern const char ICONS[2]; }"
    );
}

#[test]
fn test_generate_without_manifest_uses_builtin_list() {
    let workspace = TestWorkspace::new();
    workspace.write_asset("JetBrainsMono-Regular.ttf", &[5, 6]);
    // Not passed with -m, so it must be ignored
    workspace.write_manifest(&[("Other", "OTHER")]);

    workspace.cmd().arg("generate").assert().success();

    assert_eq!(
        workspace.read_file("JetBrainsMono-Regular.c"),
        "const char JET_BRAINS_MONO_FONT[2] = {5,6};"
    );
    assert!(!workspace.file_exists("Other.c"));
}
