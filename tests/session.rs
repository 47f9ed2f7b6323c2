use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

fn isolated_home(name: &str) -> PathBuf {
    let home = env::temp_dir().join(format!("krsh_session_{}", name));
    fs::create_dir_all(&home).unwrap();
    home
}

fn krsh(name: &str, extra_args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_krsh"))
        .arg("--no-editor")
        .args(extra_args)
        .env("HOME", isolated_home(name))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_exit_ignores_arguments_and_stops() {
    let output = krsh("exit", &[], "exit 1 2\necho after\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "krsh> Goodbye!\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let output = krsh("eof", &[], "echo hello  world\n\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "krsh> hello world\nkrsh> krsh> ");
}

#[test]
fn test_next_prompt_waits_for_child() {
    let start = Instant::now();
    let output = krsh("ordering", &[], "sleep 0.3\necho done\n");

    assert!(start.elapsed() >= Duration::from_millis(300));
    assert_eq!(stdout(&output), "krsh> krsh> done\nkrsh> ");
}

#[test]
fn test_missing_program_keeps_session() {
    let output = krsh("missing", &[], "krsh-missing-binary -x\necho still here\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).starts_with("krsh: exec: krsh-missing-binary: "));
    assert!(stdout(&output).contains("still here\n"));
}

#[test]
fn test_cd_then_external_uses_new_directory() {
    let target = isolated_home("cd_target").canonicalize().unwrap();
    let input = format!("cd\ncd {}\npwd\n", target.display());
    let output = krsh("cd", &[], &input);

    assert_eq!(stderr(&output), "krsh: cd: missing argument\n");
    assert!(stdout(&output).contains(&format!("{}\n", target.display())));
}

#[test]
fn test_rc_file_sets_prompt_and_split() {
    let home = isolated_home("rc");
    let rc = home.join("custom_rc");
    fs::write(&rc, "prompt = \"$ \"\nsplit = space\n").unwrap();

    let output = krsh("rc", &["--config", rc.to_str().unwrap()], "echo a\tb\n");

    assert_eq!(stdout(&output), "$ a\tb\n$ ");
}

#[test]
fn test_missing_explicit_config_fails() {
    let output = krsh("bad_rc", &["--config", "/nonexistent/krshrc"], "");

    assert!(!output.status.success());
}
