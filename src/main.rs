use std::io;
use std::process::ExitCode;

use any2utf8::action::cli::process_args;

fn main() -> io::Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();
    let code = process_args(args)?;
    log::info!("程式執行完成");
    Ok(code)
}
