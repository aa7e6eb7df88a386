use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "geoapi")]
#[command(about = "Code lists, natural code ordering and HTML reports")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// TOML file of report properties
	#[arg(long, global = true, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Property override, may be repeated (later wins)
	#[arg(long = "set", global = true, value_name = "KEY=VALUE")]
	pub set: Vec<String>,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Render a template file with the report properties
	Render {
		/// Template containing ${KEY} placeholders
		template: PathBuf,
		/// Output file (standard output if omitted)
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
	/// Write an authority codes report from a JSON document
	AuthorityCodes {
		/// JSON document with vendor, authority and entries
		input: PathBuf,
		/// Output file or directory
		#[arg(short, long, default_value = ".")]
		output: PathBuf,
	},
	/// Write an operation parameters report from a JSON list of operations
	Parameters {
		/// JSON list of operations with their parameters
		input: PathBuf,
		/// Output file or directory
		#[arg(short, long, default_value = ".")]
		output: PathBuf,
	},
	/// Write several reports into one directory with shared progress
	Reports {
		/// Authority codes input
		#[arg(long, value_name = "JSON")]
		authority_codes: Vec<PathBuf>,
		/// Operation parameters input
		#[arg(long, value_name = "JSON")]
		parameters: Vec<PathBuf>,
		/// Output directory
		#[arg(short, long)]
		output: PathBuf,
	},
	/// Sort codes read from standard input, one per line
	Sort,
	/// List a built-in code list, creating the given names first
	Codes {
		/// Code list to list
		#[arg(value_enum)]
		list: CodeListKind,
		/// Names to look up or create before listing
		names: Vec<String>,
	},
}

/// Built-in code lists.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeListKind {
	AxisDirection,
	VerticalDatumType,
	Role,
	PresentationForm,
	CharacterSet,
}
