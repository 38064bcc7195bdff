//! DuckCheckers console

use duck_checkers::Console;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("DuckCheckers v0.1.0");
    println!("Type 'help' for commands, 'd' to display the board, 'quit' to exit");

    let mut console = Console::new();
    console.run()
}
