use std::process::Command;

use tempfile::TempDir;

fn provisio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_provisio"))
}

#[test]
fn test_help_lists_infra_and_provision() {
    let output = provisio().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("infra"), "help should list `infra`; got:\n{}", stdout);
    assert!(stdout.contains("provision"), "help should list `provision`; got:\n{}", stdout);
}

#[test]
fn test_table_output_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = provisio()
        .args(["infra", "create", "--output", "table", "--no-prompt", "--cwd"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported format 'table'"), "stderr:\n{}", stderr);
}

#[test]
fn test_missing_project_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    let output = provisio()
        .args(["provision", "--no-prompt", "--cwd"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no project exists"), "stderr:\n{}", stderr);
    assert!(output.stdout.is_empty());
}
