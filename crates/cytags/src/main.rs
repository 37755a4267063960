//! Entry point for the `cytags` driver binary.

use eyre::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
