fn main() {
    if let Err(err) = panel_cli::main_entry() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
