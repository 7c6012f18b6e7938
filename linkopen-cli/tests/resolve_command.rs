//! Integration tests for the `resolve` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_relative_link_against_workspace() {
    let env = TestEnv::new();
    let out = env.stdout_of(&[
        "--platform",
        "linux",
        "-w",
        "/home/me/repo",
        "resolve",
        "src/app.ts:42:7",
    ]);
    assert_eq!(out.trim(), "/home/me/repo/src/app.ts");
}

#[test]
fn test_resolve_absolute_link_ignores_workspace() {
    let env = TestEnv::new();
    let out = env.stdout_of(&["--platform", "linux", "-w", "/repo", "resolve", "/etc/hosts:3"]);
    assert_eq!(out.trim(), "/etc/hosts");
}

#[test]
fn test_resolve_windows_link() {
    let env = TestEnv::new();
    let out = env.stdout_of(&[
        "--platform",
        "windows",
        "-w",
        r"C:\work\repo",
        "resolve",
        "src/lib.rs:10",
    ]);
    assert_eq!(out.trim(), r"C:\work\repo\src\lib.rs");
}

#[test]
fn test_resolve_windows_drive_path_is_absolute() {
    let env = TestEnv::new();
    let out = env.stdout_of(&[
        "--platform",
        "windows",
        "-w",
        r"C:\repo",
        "resolve",
        "D:/data/file.txt",
    ]);
    assert_eq!(out.trim(), r"D:\data\file.txt");
}

#[test]
fn test_resolve_without_workspace_keeps_relative_path() {
    let env = TestEnv::new();
    let out = env.stdout_of(&["--platform", "linux", "resolve", "src/main.rs:1"]);
    assert_eq!(out.trim(), "src/main.rs");
}

#[test]
fn test_resolve_keep_suffix() {
    let env = TestEnv::new();
    let out = env.stdout_of(&[
        "--platform",
        "linux",
        "-w",
        "/repo",
        "resolve",
        "--keep-suffix",
        "a.rs:1:2",
    ]);
    assert_eq!(out.trim(), "/repo/a.rs:1:2");
}

#[test]
fn test_resolve_reads_project_config() {
    let env = TestEnv::new();
    env.write_project_file(
        "linkopen.yaml",
        "workspace_root: /from/config\nplatform: linux\n",
    );

    env.command()
        .args(["resolve", "lib.rs:9"])
        .assert()
        .success()
        .stdout("/from/config/lib.rs\n");
}

#[test]
fn test_resolve_local_config_overrides_project_config() {
    let env = TestEnv::new();
    env.write_project_file("linkopen.yaml", "workspace_root: /shared\nplatform: linux\n");
    env.write_project_file("linkopen.local.yaml", "workspace_root: /mine\n");

    env.command()
        .args(["resolve", "x.rs"])
        .assert()
        .success()
        .stdout("/mine/x.rs\n");
}

#[test]
fn test_resolve_flag_overrides_environment() {
    let env = TestEnv::new();
    env.command()
        .env("LINKOPEN_WORKSPACE", "/from/env")
        .env("LINKOPEN_PLATFORM", "linux")
        .args(["-w", "/from/flag", "resolve", "x.rs"])
        .assert()
        .success()
        .stdout("/from/flag/x.rs\n");
}

#[test]
fn test_resolve_environment_workspace() {
    let env = TestEnv::new();
    env.command()
        .env("LINKOPEN_WORKSPACE", "/from/env")
        .args(["--platform", "linux", "resolve", "x.rs"])
        .assert()
        .success()
        .stdout("/from/env/x.rs\n");
}

#[test]
fn test_resolve_config_disables_suffix_stripping() {
    let env = TestEnv::new();
    env.write_user_config("strip_line_suffix: false\n");

    env.command()
        .args(["--platform", "linux", "-w", "/r", "resolve", "a.rs:3"])
        .assert()
        .success()
        .stdout("/r/a.rs:3\n");
}

#[test]
fn test_resolve_invalid_config_exits_with_config_error() {
    let env = TestEnv::new();
    env.write_project_file("linkopen.yaml", "colour: red\n");

    env.command()
        .args(["resolve", "a.rs"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_resolve_invalid_platform_exits_with_usage_error() {
    let env = TestEnv::new();
    env.command()
        .args(["--platform", "beos", "resolve", "a.rs"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("beos"));
}
