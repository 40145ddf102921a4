use punch::commands::Cli;
use punch::msg_error;
use std::process;

fn main() {
    if let Err(error) = Cli::menu() {
        msg_error!(format!("{:#}", error));
        process::exit(1);
    }
}
