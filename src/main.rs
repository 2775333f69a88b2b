// forthkernel main program

mod bootstrap;
mod config;
mod dictionary;
mod error;
mod kernel;
mod messages;
mod primitives;
mod tokenizer;
mod vm;

use config::Config;
use vm::Vm;

fn main() {
    let config = Config::new();
    let mut vm = match Vm::new(bootstrap::BOOTSTRAP, config.debug_level) {
        Ok(vm) => vm,
        Err(err) => {
            eprintln!("fatal: failed to start kernel: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = vm.run() {
        vm.fatal(&err);
    }

    use std::io::Write;
    std::io::stdout().flush().ok();
    std::process::exit(0);
}
