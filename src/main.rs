use std::process::ExitCode;

use descent::config::DEFAULT_MAX_DEPTH;
use descent::{Config, Driver};

mod cli;

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli::build_cli().get_matches();

    let max_depth =
        matches.get_one::<usize>("max_depth").copied().unwrap_or(DEFAULT_MAX_DEPTH);
    let debug = matches.get_flag("debug");
    let fail_on_error = matches.get_flag("strict");
    let config = Config::new(max_depth, debug, fail_on_error);

    log::debug!("{config:?}");

    let code = matches.get_one::<String>("code");
    let file_name = matches.get_one::<String>("FILE_NAME");
    let mut driver = Driver::new(config);

    let result = if let Some(code) = code {
        driver.execute_text(code)
    } else if let Some(file_name) = file_name {
        if file_name == "-" {
            driver.execute_stdin()
        } else {
            driver.execute_file(file_name)
        }
    } else {
        driver.execute_default()
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}
