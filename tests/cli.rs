use assert_cmd::Command;

fn solver() -> Command {
    Command::cargo_bin("tileswap-solver").unwrap()
}

#[test]
fn prints_single_move() {
    solver()
        .args(["--quiet", "tests/cli/start.input", "tests/cli/one-right.input"])
        .assert()
        .success()
        .stdout("R\n");
}

#[test]
fn prints_empty_line_for_identical_grids() {
    solver()
        .args(["-q", "tests/cli/start.input", "tests/cli/start.input"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn replays_steps() {
    solver()
        .args(["-q", "--steps", "tests/cli/start.input", "tests/cli/one-right.input"])
        .assert()
        .success()
        .stdout(concat!(
            "R\n",
            "\nWRRB\nRBBR\nBRBR\nBBRB\nWhite at (0, 0)\n\n",
            "1: R\nRWRB\nRBBR\nBRBR\nBBRB\nWhite at (0, 1)\n\n",
        ));
}

#[test]
fn rejects_unknown_flags() {
    solver()
        .args(["--play", "tests/cli/start.input", "tests/cli/one-right.input"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn fails_without_default_target_file() {
    solver()
        .arg("-q")
        .current_dir("tests/cli")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn fails_on_missing_file() {
    solver()
        .args(["-q", "tests/cli/start.input", "tests/cli/missing.input"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn fails_on_malformed_files() {
    for file in ["two-whites", "bad-char", "eight-red"] {
        solver()
            .args(["-q", "tests/cli/start.input"])
            .arg(format!("tests/cli/{file}.input"))
            .assert()
            .failure()
            .code(1);
    }
}
