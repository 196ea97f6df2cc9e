use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use sem3_core::RdfFormat;

#[derive(Parser)]
#[command(name = "sem3", author, version, about, long_about = None)]
pub struct Sem3Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Input file glob pattern (can be given multiple times).
	#[arg(long, short, global = true)]
	pub input: Vec<String>,

	/// Sentinel marker that authorizes a fenced block for extraction.
	#[arg(long, global = true)]
	pub marker: Option<String>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// List the extracted markup snippets.
	List {
		/// Input files or glob patterns.
		files: Vec<String>,
	},
	/// Convert extracted markup records to RDF and serialize the graph.
	Dump(DumpArgs),
}

#[derive(Args)]
pub struct DumpArgs {
	/// Input files or glob patterns.
	pub files: Vec<String>,

	/// Output serialization format.
	#[arg(long, value_enum, default_value = "turtle")]
	pub format: OutputFormat,

	/// Output file path for the serialized graph (stdout when absent).
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Base URI for minted subject and predicate IRIs.
	#[arg(long, default_value = sem3_core::DEFAULT_BASE_URI)]
	pub base_uri: String,

	/// Namespace prefix used by the Turtle and JSON-LD serializers.
	#[arg(long, default_value = sem3_core::DEFAULT_NS_PREFIX)]
	pub ns_prefix: String,

	/// RDF type name asserted for every record.
	#[arg(long, default_value = "Markup")]
	pub type_name: String,

	/// Record field whose value becomes the subject identifier instead of
	/// an auto-generated one.
	#[arg(long)]
	pub id_field: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Turtle,
	Ntriples,
	N3,
	JsonLd,
}

impl From<OutputFormat> for RdfFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Turtle => RdfFormat::Turtle,
			OutputFormat::Ntriples => RdfFormat::NTriples,
			OutputFormat::N3 => RdfFormat::N3,
			OutputFormat::JsonLd => RdfFormat::JsonLd,
		}
	}
}
