use std::io;

use anyhow::Result;
use tracing::info;

use gambit_console::Console;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Console::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
