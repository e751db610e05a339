use std::process;

fn main() {
    if let Err(e) = taskline::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
