use std::fs;

use crate::config::Config;
use crate::driver::{Driver, DriverErrKind, DriverResult};

const DEFAULT_TRACE: &str = "\
S -> ES'
     E -> (S)
           S -> ES'
                1
                 S' -> +S
                        S -> ES'
                             2
                              S' -> +S
                                     S -> ES'
                                          E -> (S)
                                                S -> ES'
                                                     3
                                                      S' -> +S
                                                             S -> ES'
                                                                  4
                                                                   S' -> ε
                                           S' -> ε
      S' -> +S
             S -> ES'
                  5
                   S' -> ε
";

type TestDriver = Driver<Vec<u8>, Vec<u8>>;

fn new_driver(config: Config) -> TestDriver {
    Driver::with_writers(config, vec![], vec![])
}

/// Run the driver and return the result along with what was written
/// to its out and err writers.
fn run(
    config: Config,
    func: impl FnOnce(&mut TestDriver) -> DriverResult,
) -> (DriverResult, String, String) {
    let mut driver = new_driver(config);
    let result = func(&mut driver);
    let (out, err) = driver.into_writers();
    let out = String::from_utf8(out).expect("Trace should be UTF-8");
    let err = String::from_utf8(err).expect("Errors should be UTF-8");
    (result, out, err)
}

#[test]
fn execute_default() {
    let (result, out, err) = run(Config::default(), |d| d.execute_default());
    assert_eq!(result.unwrap(), 0);
    assert_eq!(out, DEFAULT_TRACE);
    assert_eq!(err, "");
}

#[test]
fn execute_default_twice() {
    let (_, out, _) = run(Config::default(), |d| {
        d.execute_default()?;
        d.execute_default()
    });
    assert_eq!(out, format!("{DEFAULT_TRACE}{DEFAULT_TRACE}"));
}

#[test]
fn errors_go_to_err_writer() {
    let (result, out, err) = run(Config::default(), |d| d.execute_text("()"));
    assert_eq!(result.unwrap(), 0);
    assert_eq!(out.lines().count(), 5);
    assert_eq!(err, "parse error: unexpected ')'\n");
}

#[test]
fn errors_are_written_in_order() {
    let (_, _, err) = run(Config::default(), |d| d.execute_text("(a"));
    assert_eq!(
        err,
        "parse error: unexpected 'a'\nparse error: expected RightParen got 'a'\n"
    );
}

#[test]
fn strict_mode_exit_code() {
    let config = Config::new(0, false, true);
    let (result, _, _) = run(config.clone(), |d| d.execute_text(""));
    assert_eq!(result.unwrap(), 1);
    let (result, _, _) = run(config, |d| d.execute_text("1+2"));
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn max_depth_from_config() {
    let text = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    let (_, _, err) = run(Config::new(4, false, false), |d| d.execute_text(&text));
    assert_eq!(err, "parse error: too deeply nested (max depth 4)\n");
    let (_, _, err) = run(Config::new(0, false, false), |d| d.execute_text(&text));
    assert_eq!(err, "");
}

#[test]
fn debug_dumps_tokens() {
    let (result, out, err) = run(Config::new(0, true, false), |d| d.execute_text("1"));
    assert_eq!(result.unwrap(), 0);
    assert_eq!(out, "S -> ES'\n     1\n      S' -> ε\n");
    assert_eq!(err, "# Source: \"1\"\n# Number '1': 1:1 -> 1:1\n# End '': 1:2 -> 1:2\n");
}

#[test]
fn execute_file() {
    let path = std::env::temp_dir().join(format!("descent-test-{}.txt", std::process::id()));
    fs::write(&path, "1 +\n(2)\n").expect("Could not write temp file");
    let path_str = path.to_str().expect("Temp path should be UTF-8").to_owned();

    let (result, out, err) = run(Config::default(), |d| d.execute_file(&path_str));
    fs::remove_file(&path).ok();

    assert_eq!(result.unwrap(), 0);
    assert_eq!(err, "");
    let (_, expected, _) = run(Config::default(), |d| d.execute_text("1+(2)"));
    assert_eq!(out, expected);
}

#[test]
fn execute_missing_file() {
    let (result, out, _) =
        run(Config::default(), |d| d.execute_file("/definitely/not/a/real/file.txt"));
    let err = result.unwrap_err();
    assert!(matches!(err.kind, DriverErrKind::CouldNotReadSourceFile(_, _)));
    assert!(err.to_string().starts_with("Could not read source file: /definitely"));
    assert_eq!(out, "");
}
