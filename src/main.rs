// src/main.rs

use std::io;
use std::process::ExitCode;

use imgcrypt::cli::Session;
use imgcrypt::keystore::KeyStore;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), KeyStore::default());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}
