use std::{
    fs,
    io::Write,
    process::{Command, Output, Stdio},
};

const INCEPTION: &str = "11‣Inception‣Inception‣2010-07-16‣Released‣8.3‣14075‣148‣PG-13‣/inception.jpg‣160000000‣‣878․SciFi‖28․Action‣525․Nolan‣3․McAdams․DreamGirl‖4․Page\n";

fn movies2sql(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_movies2sql"))
        .args(args)
        .env_remove("MOVIES2SQL_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The process may exit before reading its input.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn missing_dialect_is_a_usage_error() {
    let output = movies2sql(&[], INCEPTION);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn unknown_dialect_is_a_usage_error() {
    let output = movies2sql(&["oracle", "movies"], INCEPTION);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("oracle"));
}

#[test]
fn mysql_requires_a_database() {
    let output = movies2sql(&["mysql"], INCEPTION);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("requires a database name"));
}

#[test]
fn mysql_conversion() {
    let output = movies2sql(&["mysql", "movies"], INCEPTION);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "USE movies;");
    assert!(lines[1].starts_with("INSERT IGNORE movies ("));
    assert!(lines[1].contains("'SciFi,Action'"));
    assert_eq!(
        lines[5],
        "INSERT IGNORE directors (movie_id, director_id) VALUES ('11', '525');"
    );
    assert_eq!(
        stderr(&output),
        "[11::actor] expected 3 fields, found 2 in \"4․Page\"\n"
    );
}

#[test]
fn postgres_without_schema_has_no_preamble() {
    let output = movies2sql(&["postgres"], INCEPTION);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("INSERT INTO movies ("));
    assert!(out.lines().all(|line| line.ends_with(" ON CONFLICT DO NOTHING;")));
}

#[test]
fn empty_input_succeeds_quietly() {
    let output = movies2sql(&["postgres"], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn input_and_output_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("movies.txt");
    let sql = dir.path().join("movies.sql");
    fs::write(&input, INCEPTION).unwrap();

    let output = movies2sql(
        &[
            "postgres",
            "catalogue",
            "--input",
            input.to_str().unwrap(),
            "-o",
            sql.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&sql).unwrap();
    assert!(written.starts_with("SET search_path TO catalogue;\nINSERT INTO movies ("));
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = movies2sql(&["postgres", "-i", missing.to_str().unwrap()], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unable to open"));
}
