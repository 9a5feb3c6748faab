//! Countries command handler
//!
//! Lists the canonical country names in the bundled dataset, so users can
//! find the exact spellings the lookup expects.

use crate::atlas::Atlas;
use crate::error::Result;
use clap::Args;

/// Countries command arguments
#[derive(Args)]
pub struct CountriesArgs {
    /// Print only the number of countries
    #[arg(long)]
    pub count: bool,
}

/// Run the countries command
pub fn run(args: CountriesArgs) -> Result<()> {
    let atlas = Atlas::bundled()?;

    if args.count {
        println!("{}", atlas.len());
    } else {
        for name in atlas.names() {
            println!("{}", name);
        }
    }

    Ok(())
}
