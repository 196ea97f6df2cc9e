use oxrdf::Literal;
use oxrdf::NamedNode;
use oxrdf::Triple;
use oxrdf::vocab::rdf;
use oxrdf::vocab::xsd;
use serde_json::Map;
use serde_json::Value;

use crate::Sem3Result;

pub const DEFAULT_BASE_URI: &str = "http://example.org/";
pub const DEFAULT_NS_PREFIX: &str = "ex";

/// Converts plain mapping rows (field name → value) into RDF triples.
///
/// Each row becomes one resource: a subject IRI minted under `base_uri`, an
/// `rdf:type` assertion, and one triple per non-null field with a literal
/// typed by the field's native kind.
#[derive(Clone, Debug)]
pub struct RdfDumper {
	pub base_uri: String,
	pub prefix: String,
}

impl Default for RdfDumper {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URI, DEFAULT_NS_PREFIX)
	}
}

impl RdfDumper {
	pub fn new(base_uri: impl Into<String>, prefix: impl Into<String>) -> Self {
		Self {
			base_uri: base_uri.into(),
			prefix: prefix.into(),
		}
	}

	/// Convert mapping rows into an ordered triple list. Pure, no I/O; the
	/// insertion order is deterministic so repeat runs serialize
	/// byte-identically.
	pub fn as_graph(
		&self,
		lod: &[Map<String, Value>],
		type_name: &str,
		id_field: Option<&str>,
	) -> Sem3Result<Vec<Triple>> {
		let mut triples = Vec::new();

		for (idx, item) in lod.iter().enumerate() {
			self.add_resource(&mut triples, item, type_name, id_field, idx)?;
		}

		Ok(triples)
	}

	/// Add one resource to the triple list. The subject identifier comes
	/// from `id_field` when the row has it, else `"<type>_<index>"`.
	fn add_resource(
		&self,
		triples: &mut Vec<Triple>,
		item: &Map<String, Value>,
		type_name: &str,
		id_field: Option<&str>,
		idx: usize,
	) -> Sem3Result<()> {
		let resource_id = id_field
			.and_then(|field| item.get(field))
			.map(value_as_id)
			.unwrap_or_else(|| format!("{}_{idx}", type_name.to_lowercase()));

		let subject = NamedNode::new(format!("{}{resource_id}", self.base_uri))?;
		let type_node = NamedNode::new(format!("{}{type_name}", self.base_uri))?;
		triples.push(Triple::new(subject.clone(), rdf::TYPE, type_node));

		for (key, value) in item {
			if value.is_null() {
				continue;
			}
			let predicate = NamedNode::new(format!("{}{key}", self.base_uri))?;
			triples.push(Triple::new(subject.clone(), predicate, literal_for(value)));
		}

		Ok(())
	}
}

fn value_as_id(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Build an RDF literal typed by the native kind of the value: boolean,
/// integer, and double get an XSD datatype, everything else becomes a plain
/// string literal.
pub fn literal_for(value: &Value) -> Literal {
	match value {
		Value::Bool(b) => Literal::new_typed_literal(b.to_string(), xsd::BOOLEAN),
		Value::Number(n) if n.is_i64() || n.is_u64() => {
			Literal::new_typed_literal(n.to_string(), xsd::INTEGER)
		}
		Value::Number(n) => Literal::new_typed_literal(n.to_string(), xsd::DOUBLE),
		Value::String(s) => Literal::new_simple_literal(s.as_str()),
		other => Literal::new_simple_literal(other.to_string()),
	}
}
