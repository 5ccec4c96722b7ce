//! Command-line front end: settings, the SQLite collection, and subcommands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;

use anyhow::Result;
use cli::{Cli, Command};
use config::{EffectiveSettings, Settings};
use std::io::Write;

/// Run one parsed command, writing results to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Import(args) => {
            let effective = EffectiveSettings::merge(&settings, &args.overrides());
            let report = commands::import_file(
                &args.file,
                args.deck.as_deref(),
                &effective,
                args.dry_run,
            )?;
            commands::print_report(out, &report, args.json)?;
        }
        Command::Init { target } => {
            let effective = EffectiveSettings::merge(&settings, &target.overrides());
            commands::init_collection(&effective.collection_path)?;
            writeln!(out, "Created {}", effective.collection_path.display())?;
        }
        Command::Template { file, count } => {
            commands::write_template(&file, count)?;
            writeln!(out, "Wrote {count} entries to {}", file.display())?;
        }
        Command::Duplicates { deck, target, json } => {
            let effective = EffectiveSettings::merge(&settings, &target.overrides());
            let groups = commands::find_in_deck(&effective.collection_path, &deck)?;
            commands::print_groups(out, &groups, json)?;
        }
    }
    Ok(())
}
