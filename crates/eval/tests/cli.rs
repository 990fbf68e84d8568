//! Runs the compiled `objective-eval` binary the way an optimizer loop does:
//! write `input.txt`, run in that directory, read `data/output.dat`.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use approx::assert_relative_eq;
use tempfile::{TempDir, tempdir};

fn workdir(input: Option<&str>) -> TempDir {
    let dir = tempdir().unwrap();
    if let Some(text) = input {
        fs::write(dir.path().join("input.txt"), text).unwrap();
    }
    dir
}

fn evaluate_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_objective-eval"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary should start")
}

fn read_value(dir: &Path) -> f64 {
    let text = fs::read_to_string(dir.join("data").join("output.dat")).unwrap();
    let first = text.lines().next().expect("output should have a line");
    first.trim().parse().expect("output should be a float")
}

#[test]
fn bowl_writes_value_and_reports_it() {
    let dir = workdir(Some("x_coord=0.500000\ny_coord=1.000000\n"));

    let out = evaluate_in(dir.path(), &["--surface", "bowl"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("data").is_dir());
    assert_eq!(
        fs::read_to_string(dir.path().join("data/output.dat")).unwrap(),
        "-0.25\n"
    );

    let stdout = String::from_utf8(out.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("val = -0.25"));
    assert!(lines.next().unwrap().starts_with("Value written to "));
}

#[test]
fn default_surface_is_multimodal_periodic() {
    let dir = workdir(Some("x_coord=1.000000\ny_coord=0.000000\n"));

    let out = evaluate_in(dir.path(), &[]);

    assert!(out.status.success());
    assert_relative_eq!(read_value(dir.path()), 1.0, epsilon = 1e-12);
}

#[test]
fn extra_keys_do_not_change_the_result() {
    let plain = workdir(Some("x_coord = -0.3\ny_coord = 2.2\n"));
    let noisy = workdir(Some(
        "# shared input file\ntheta = 0.4\nx_coord = -0.3\n\npostfraction = 0.9\ny_coord = 2.2\n",
    ));

    for dir in [&plain, &noisy] {
        let out = evaluate_in(dir.path(), &["--surface", "wavy_offset"]);
        assert!(out.status.success());
    }

    assert_eq!(
        read_value(plain.path()).to_bits(),
        read_value(noisy.path()).to_bits()
    );
}

#[test]
fn malformed_value_exits_nonzero_without_output() {
    let dir = workdir(Some("x_coord = abc\ny_coord = 1.0\n"));

    let out = evaluate_in(dir.path(), &["--surface", "bowl"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("x_coord"), "stderr: {stderr}");
    assert!(stderr.contains("abc"), "stderr: {stderr}");
    assert!(!dir.path().join("data/output.dat").exists());
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = workdir(None);

    let out = evaluate_in(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("input.txt"));
    assert!(!dir.path().join("data").exists());
}

#[test]
fn missing_coordinate_exits_nonzero() {
    let dir = workdir(Some("x_coord = 0.5\n"));

    let out = evaluate_in(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("y_coord"));
    assert!(!dir.path().join("data/output.dat").exists());
}

#[test]
fn unwritable_output_dir_exits_nonzero() {
    let dir = workdir(Some("x_coord = 0\ny_coord = 0\n"));
    fs::write(dir.path().join("data"), "not a directory").unwrap();

    let out = evaluate_in(dir.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("output directory"));
}

#[test]
fn custom_paths_are_honored() {
    let dir = workdir(None);
    fs::write(dir.path().join("proposal.txt"), "x_coord 2\ny_coord 0\n").unwrap();

    let out = evaluate_in(
        dir.path(),
        &[
            "--input",
            "proposal.txt",
            "--output-dir",
            "results",
            "--output-file",
            "value.txt",
            "--surface",
            "bowl",
        ],
    );

    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("results/value.txt")).unwrap(),
        "-3\n"
    );
}

#[test]
fn list_surfaces_prints_every_name() {
    let dir = workdir(None);

    let out = evaluate_in(dir.path(), &["--list-surfaces"]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    for name in ["multimodal_periodic", "wavy_offset", "bowl"] {
        assert!(stdout.contains(name), "missing {name} in {stdout}");
    }

    let bowl = stdout
        .lines()
        .find(|line| line.starts_with("bowl"))
        .expect("bowl should be listed");
    assert!(bowl.contains("unimodal"), "{bowl}");
}

#[test]
fn unknown_surface_is_rejected() {
    let dir = workdir(Some("x_coord = 0\ny_coord = 0\n"));

    let out = evaluate_in(dir.path(), &["--surface", "sphere"]);

    assert!(!out.status.success());
    assert!(!dir.path().join("data").exists());
}
