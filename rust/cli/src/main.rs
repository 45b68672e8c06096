use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=tricktable_engine=debug shows driver transitions
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let code = tricktable_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
