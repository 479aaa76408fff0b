// big_calc: arbitrary-precision unsigned calculator

use std::io;
use std::process;

use big_calc::cli::run;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = run(std::env::args(), stdin.lock(), stdout.lock(), stderr.lock());
    process::exit(code);
}
