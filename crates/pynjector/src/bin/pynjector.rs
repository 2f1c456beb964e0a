use std::process::ExitCode;

use pynjector::main as pynjector_main;

fn main() -> ExitCode {
    pynjector_main(std::env::args_os())
}
