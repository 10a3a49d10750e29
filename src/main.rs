use env_logger::Env;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = ip_filter::run(stdin.lock(), BufWriter::new(stdout.lock())) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
