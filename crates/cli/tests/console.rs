use assert_cmd::Command;

fn libris() -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env("LIBRIS_CONFIG_DIR", "/nonexistent/libris-config")
        .env("LIBRIS_ENV", "local")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn borrow_and_return_session() {
    let mut cmd = libris();
    cmd.args(["--member", "1=Alice"]).write_stdin(
        "1\n1\nDune\nHerbert\navailable\n\
         3\n1\n1\n\
         5\n\
         6\n1\n\
         4\n1\n1\n\
         5\n\
         7\n",
    );

    let stdout = stdout_of(&mut cmd);
    assert!(stdout.starts_with("Library Management System\n1. Add a new book\n"));
    assert!(stdout.contains("Book added successfully!"));
    assert!(stdout.contains("Book borrowed successfully!"));
    assert!(stdout.contains("No available books."));
    assert!(stdout.contains("ID: 1, Title: Dune, Author: Herbert, Status: borrowed"));
    assert!(stdout.contains("Book returned successfully!"));
    assert!(stdout.contains("ID: 1, Title: Dune, Author: Herbert, Status: available"));
    assert!(stdout.ends_with("Exiting...\n"));
}

#[test]
fn borrowing_without_members_reports_not_found() {
    let mut cmd = libris();
    cmd.write_stdin("1\n1\nDune\nHerbert\navailable\n3\n1\n1\n7\n");

    let stdout = stdout_of(&mut cmd);
    assert!(stdout.contains("Error borrowing book: not found: member with ID 1 does not exist"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let mut cmd = libris();
    cmd.write_stdin("");

    let stdout = stdout_of(&mut cmd);
    assert!(stdout.contains("Enter your choice: "));
    assert!(!stdout.contains("Exiting..."));
}

#[test]
fn duplicate_member_flags_fail_startup() {
    let mut cmd = libris();
    cmd.args(["--member", "1=Alice", "--member", "1=Bob"])
        .write_stdin("7\n");
    cmd.assert().failure();
}

#[test]
fn unknown_environment_fails_startup() {
    let mut cmd = libris();
    cmd.args(["--env", "qa"]).write_stdin("7\n");
    cmd.assert().failure();
}
