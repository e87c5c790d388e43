// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;
use std::process;

use clap::Parser;
use ident_tint::colors;
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Render identifier tints as terminal color swatches")]
struct Args {
    /// Swatch width in terminal cells
    #[arg(short, long, value_name = "cells", default_value_t = 8)]
    width: usize,

    #[arg(value_name = "identifier", required = true)]
    identifiers: Vec<String>,
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(_) => (),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().init()?;

    let block = " ".repeat(args.width);
    for id in &args.identifiers {
        let c = colors::rgb_from_identifier(id);
        // 24-bit background escape, reset after the block
        println!(
            "\x1b[48;2;{};{};{}m{block}\x1b[0m  #{:02x}{:02x}{:02x}  {id}",
            c.r, c.g, c.b, c.r, c.g, c.b
        );
    }

    Ok(())
}
