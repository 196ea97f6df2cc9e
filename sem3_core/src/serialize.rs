use std::fmt;
use std::io::Write;
use std::str::FromStr;

use oxrdf::NamedNode;
use oxrdf::Term;
use oxrdf::Triple;
use oxrdf::vocab::rdf;
use oxrdf::vocab::xsd;
use serde_json::json;

use crate::Sem3Error;
use crate::Sem3Result;

/// Supported RDF wire formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RdfFormat {
	Turtle,
	NTriples,
	N3,
	JsonLd,
}

impl RdfFormat {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Turtle => "turtle",
			Self::NTriples => "ntriples",
			Self::N3 => "n3",
			Self::JsonLd => "json-ld",
		}
	}
}

impl fmt::Display for RdfFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RdfFormat {
	type Err = Sem3Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"turtle" | "ttl" => Ok(Self::Turtle),
			"ntriples" | "nt" => Ok(Self::NTriples),
			"n3" => Ok(Self::N3),
			"json-ld" | "jsonld" => Ok(Self::JsonLd),
			other => Err(Sem3Error::UnknownFormat(other.to_string())),
		}
	}
}

/// Serialize an ordered triple list to `writer` in the requested format.
///
/// N3 output is the Turtle serialization: Turtle is a valid subset of N3 and
/// the graphs produced here never need N3-only syntax.
pub fn serialize_graph(
	triples: &[Triple],
	format: RdfFormat,
	base_uri: &str,
	prefix: &str,
	writer: &mut dyn Write,
) -> Sem3Result<()> {
	match format {
		RdfFormat::NTriples => write_ntriples(triples, writer),
		RdfFormat::Turtle | RdfFormat::N3 => write_turtle(triples, base_uri, prefix, writer),
		RdfFormat::JsonLd => write_jsonld(triples, base_uri, prefix, writer),
	}
}

fn write_ntriples(triples: &[Triple], w: &mut dyn Write) -> Sem3Result<()> {
	for triple in triples {
		writeln!(w, "{triple} .")?;
	}

	Ok(())
}

/// Turtle output with one `@prefix` declaration, subjects grouped with `;`,
/// and `a` for `rdf:type`. Consecutive triples with the same subject form
/// one group, which the insertion order of the graph builder guarantees per
/// resource.
fn write_turtle(triples: &[Triple], base_uri: &str, prefix: &str, w: &mut dyn Write) -> Sem3Result<()> {
	writeln!(w, "@prefix {prefix}: <{base_uri}> .")?;

	let mut idx = 0;
	while idx < triples.len() {
		let subject = &triples[idx].subject;
		let mut end = idx;
		while end < triples.len() && triples[end].subject == *subject {
			end += 1;
		}

		writeln!(w)?;
		write!(w, "{}", shrink_term(&subject.to_string(), base_uri, prefix))?;

		for (offset, triple) in triples[idx..end].iter().enumerate() {
			let predicate = turtle_predicate(&triple.predicate, base_uri, prefix);
			let object = shrink_term(&triple.object.to_string(), base_uri, prefix);
			let separator = if idx + offset + 1 == end { " ." } else { " ;" };

			if offset == 0 {
				writeln!(w, " {predicate} {object}{separator}")?;
			} else {
				writeln!(w, "\t{predicate} {object}{separator}")?;
			}
		}

		idx = end;
	}

	Ok(())
}

fn turtle_predicate(predicate: &NamedNode, base_uri: &str, prefix: &str) -> String {
	if predicate.as_str() == rdf::TYPE.as_str() {
		return "a".to_string();
	}

	shrink_term(&predicate.to_string(), base_uri, prefix)
}

/// Abbreviate an N-Triples term to a prefixed name when it is an IRI under
/// `base_uri` with a safe local part. Literals and foreign IRIs pass through
/// unchanged; the N-Triples form of both is valid Turtle.
fn shrink_term(ntriples: &str, base_uri: &str, prefix: &str) -> String {
	let Some(iri) = ntriples.strip_prefix('<').and_then(|s| s.strip_suffix('>')) else {
		return ntriples.to_string();
	};

	match iri.strip_prefix(base_uri) {
		Some(local) if is_safe_local_name(local) => format!("{prefix}:{local}"),
		_ => ntriples.to_string(),
	}
}

fn is_safe_local_name(s: &str) -> bool {
	!s.is_empty()
		&& s.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// JSON-LD output as a `@context`/`@graph` document. Typed literals that
/// JSON can represent natively (booleans, integers) become plain JSON
/// values; doubles keep an explicit `@value`/`@type` object so the XSD
/// datatype survives the round trip.
fn write_jsonld(triples: &[Triple], base_uri: &str, prefix: &str, w: &mut dyn Write) -> Sem3Result<()> {
	let mut graph = Vec::new();

	let mut idx = 0;
	while idx < triples.len() {
		let subject = &triples[idx].subject;
		let mut node = serde_json::Map::new();
		node.insert("@id".to_string(), json!(term_iri(&subject.to_string())));

		let mut end = idx;
		while end < triples.len() && triples[end].subject == *subject {
			let triple = &triples[end];
			if triple.predicate.as_str() == rdf::TYPE.as_str() {
				if let Term::NamedNode(type_node) = &triple.object {
					node.insert("@type".to_string(), json!(type_node.as_str()));
				}
			} else {
				node.insert(
					triple.predicate.as_str().to_string(),
					jsonld_object(&triple.object),
				);
			}
			end += 1;
		}

		graph.push(serde_json::Value::Object(node));
		idx = end;
	}

	let doc = json!({
		"@context": { prefix: base_uri },
		"@graph": graph,
	});

	serde_json::to_writer_pretty(&mut *w, &doc).map_err(|e| Sem3Error::Serialize(e.to_string()))?;
	writeln!(w)?;

	Ok(())
}

/// Strip the angle brackets from the N-Triples form of an IRI term. Blank
/// node labels pass through unchanged.
fn term_iri(ntriples: &str) -> String {
	let stripped = ntriples
		.strip_prefix('<')
		.and_then(|s| s.strip_suffix('>'))
		.map(str::to_string);

	stripped.unwrap_or_else(|| ntriples.to_string())
}

fn jsonld_object(term: &Term) -> serde_json::Value {
	match term {
		Term::Literal(literal) => {
			let value = literal.value();
			let datatype = literal.datatype();

			if datatype == xsd::BOOLEAN {
				match value.parse::<bool>() {
					Ok(b) => json!(b),
					Err(_) => json!(value),
				}
			} else if datatype == xsd::INTEGER {
				match value.parse::<i64>() {
					Ok(n) => json!(n),
					Err(_) => json!(value),
				}
			} else if datatype == xsd::DOUBLE {
				json!({ "@value": value, "@type": datatype.as_str() })
			} else {
				json!(value)
			}
		}
		Term::NamedNode(node) => json!({ "@id": node.as_str() }),
		other => json!(other.to_string()),
	}
}
