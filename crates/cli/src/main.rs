//! `geoapi` binary.
//!
//! Lists and extends the built-in code lists, sorts codes in natural order
//! and writes HTML reports from JSON descriptions of identified objects.

mod cli;
mod commands;

use std::io;

use clap::Parser;
use cli::{Cli, Command};
use geoapi_vocab::CodeRegistry;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let properties = commands::load_properties(cli.config.as_deref(), &cli.set)?;
	let mut stdout = io::stdout().lock();

	match cli.command {
		Command::Render { template, output } => match output {
			Some(path) => {
				let mut file = io::BufWriter::new(std::fs::File::create(&path)?);
				commands::render(&properties, &template, &mut file)?;
				io::Write::flush(&mut file)?;
			}
			None => commands::render(&properties, &template, &mut stdout)?,
		},
		Command::AuthorityCodes { input, output } => {
			let path = commands::authority_codes(&properties, &input, &output)?;
			info!(path = %path.display(), "authority codes report written");
		}
		Command::Parameters { input, output } => {
			let path = commands::parameters(&properties, &input, &output)?;
			info!(path = %path.display(), "operation parameters report written");
		}
		Command::Reports {
			authority_codes,
			parameters,
			output,
		} => {
			let written = commands::reports(&properties, &authority_codes, &parameters, &output)?;
			info!(count = written.len(), "reports written");
		}
		Command::Sort => commands::sort(&mut io::stdin().lock(), &mut stdout)?,
		Command::Codes { list, names } => {
			let registry = CodeRegistry::new();
			commands::codes(&registry, list, &names, &mut stdout)?;
		}
	}
	Ok(())
}
