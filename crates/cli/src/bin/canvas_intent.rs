fn main() {
    if let Err(err) = intent_cli::main_entry() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
