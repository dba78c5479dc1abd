use std::process::ExitCode;

use ember_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();

    ember_driver::run(argument)
}
