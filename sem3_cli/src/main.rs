use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use sem3_core::AnyEmptyResult;
use sem3_core::AnyResult;
use sem3_core::Extractor;
use sem3_core::Markup;
use sem3_core::RdfDumper;
use sem3_core::RdfFormat;
use sem3_core::expand_glob;
use sem3_core::markups_to_lod;
use sem3_core::serialize_graph;
use sem3_cli::Commands;
use sem3_cli::DumpArgs;
use sem3_cli::Sem3Cli;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let args = Sem3Cli::parse();

	let result = match &args.command {
		Some(Commands::List { files }) => run_list(&args, files),
		Some(Commands::Dump(dump)) => run_dump(&args, dump),
		None => {
			eprintln!("No subcommand specified. Run `sem3 --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		eprintln!("error: {e}");
		process::exit(1);
	}
}

fn run_list(args: &Sem3Cli, files: &[String]) -> AnyEmptyResult {
	let markups = extract(args, files)?;

	if args.verbose {
		println!("Found {} markups", markups.len());
	}

	for (i, markup) in markups.iter().enumerate() {
		let name = Path::new(&markup.source)
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_default();
		println!("{}: {} in {name}", i + 1, markup.lang);
		println!("{}", markup.code);
		println!("{}", "-".repeat(20));
	}

	Ok(())
}

fn run_dump(args: &Sem3Cli, dump: &DumpArgs) -> AnyEmptyResult {
	let markups = extract(args, &dump.files)?;

	if args.verbose {
		eprintln!("Found {} markups", markups.len());
	}

	let lod = markups_to_lod(&markups);
	let dumper = RdfDumper::new(&dump.base_uri, &dump.ns_prefix);
	let triples = dumper.as_graph(&lod, &dump.type_name, dump.id_field.as_deref())?;
	let format: RdfFormat = dump.format.into();

	match &dump.output {
		Some(path) => {
			let mut file = std::fs::File::create(path)?;
			serialize_graph(&triples, format, &dump.base_uri, &dump.ns_prefix, &mut file)?;
			if args.verbose {
				eprintln!(
					"Saved {} triples to {} ({format})",
					triples.len(),
					path.display()
				);
			}
		}
		None => {
			let stdout = std::io::stdout();
			let mut lock = stdout.lock();
			serialize_graph(&triples, format, &dump.base_uri, &dump.ns_prefix, &mut lock)?;
		}
	}

	Ok(())
}

/// Expand the `-i` patterns and the positional files, in that order, and run
/// the extractor over every matched file exactly once.
fn extract(args: &Sem3Cli, files: &[String]) -> AnyResult<Vec<Markup>> {
	let mut patterns: Vec<String> = args.input.clone();
	patterns.extend(files.iter().cloned());

	if patterns.is_empty() {
		return Err("no input files or glob patterns given".into());
	}

	let extractor = match &args.marker {
		Some(marker) => Extractor::new(marker),
		None => Extractor::default(),
	};

	let mut markups = Vec::new();
	for path in &collect_files(&patterns)? {
		markups.extend(extractor.extract_from_file(path));
	}

	Ok(markups)
}

/// Expand glob patterns to file paths, deduplicated by canonical path so a
/// file matched by more than one pattern contributes its records once.
/// First-seen order is kept.
fn collect_files(patterns: &[String]) -> AnyResult<Vec<PathBuf>> {
	let mut seen = HashSet::new();
	let mut files = Vec::new();

	for pattern in patterns {
		for path in expand_glob(pattern)? {
			let key = path.canonicalize().unwrap_or_else(|_| path.clone());
			if seen.insert(key) {
				files.push(path);
			}
		}
	}

	Ok(files)
}
