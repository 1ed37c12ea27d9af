//! Craftstall CLI — local inventory manager and storefront generator for a
//! home craft shop.
//!
//! Keeps the item list in one JSON document, regenerates the static website
//! after every change, and draws the shop's flyer and icon.

mod commands;
mod menu;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
