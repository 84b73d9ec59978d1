use std::{
    env,
    io::{self, Write},
    path::Path,
    process,
};

use rlox::{
    errors::errors::DriverError, run_file, run_prompt, EXIT_DATA_ERROR, EXIT_IO_ERROR, EXIT_USAGE,
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match run_cli(&args) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(EXIT_IO_ERROR);
        }
    }
}

fn run_cli(args: &[String]) -> Result<i32, DriverError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match args {
        [] => {
            run_prompt(io::stdin().lock(), &mut out)?;
            0
        }
        [path] => {
            if run_file(Path::new(path), &mut out)? {
                EXIT_DATA_ERROR
            } else {
                0
            }
        }
        _ => {
            writeln!(out, "Usage: rlox [script]")?;
            EXIT_USAGE
        }
    };

    out.flush()?;
    Ok(code)
}
