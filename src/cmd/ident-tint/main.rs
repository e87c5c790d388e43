// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;
use std::process;

use clap::Parser;
use ident_tint::{colors, style, themes};
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(name = "ident-tint")]
#[command(about = "Deterministic tint colors for identifier strings")]
struct Args {
    /// Emit rgba(...) at this opacity instead of plain hex
    #[arg(short, long, value_name = "num")]
    alpha: Option<f32>,

    /// Resolve every surface of the named theme
    #[arg(short, long, value_name = "theme_name")]
    theme: Option<String>,

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

    if let Some(name) = &args.theme {
        let theme = themes::load(name)?;
        log::info!("using theme: {name}");

        let configs = themes::get_surface_list(&theme);
        for id in &args.identifiers {
            for cfg in &configs {
                let s = style::resolve(id, cfg)?;
                match &s.outline {
                    Some(outline) => println!("{id}\t{}\t{}\t{outline}", s.key, s.fill),
                    None => println!("{id}\t{}\t{}", s.key, s.fill),
                }
            }
        }

        return Ok(());
    }

    for id in &args.identifiers {
        let hex = colors::from_identifier(id);
        match args.alpha {
            Some(alpha) => println!("{id}\t{}", colors::hex_to_rgba(&hex, alpha)?),
            None => println!("{id}\t{hex}"),
        }
    }

    Ok(())
}
