use std::process;

fn main() {
    if let Err(e) = sitepipe::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
