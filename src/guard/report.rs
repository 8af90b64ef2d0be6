use std::fmt;

use parking_lot::Mutex;

/// One advisory problem found at an encode/decode boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// Struct field the codec cannot see and will drop silently.
	InvisibleField {
		/// Offending field name.
		field: &'static str,
		/// Struct that declares the field.
		type_name: &'static str,
	},
	/// Decode destination holding a non-zero scalar.
	NonDefaultDestination {
		/// Dotted field path, or the type name when the destination itself is the scalar.
		what: String,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::InvisibleField { field, type_name } => write!(
				f,
				"codecguard error: lower-case field {field} of {type_name} in RPC or persist/snapshot will be dropped by the codec"
			),
			Diagnostic::NonDefaultDestination { what } => {
				write!(f, "codecguard warning: decoding into a non-default variable/field {what} may not work")
			}
		}
	}
}

/// Destination for diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
	/// Publish one diagnostic. Must not call back into the owning context.
	fn emit(&self, diagnostic: &Diagnostic);
}

/// Prints each diagnostic as one line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
	fn emit(&self, diagnostic: &Diagnostic) {
		println!("{diagnostic}");
	}
}

/// Keeps every emitted diagnostic in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
	items: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of everything emitted so far.
	pub fn diagnostics(&self) -> Vec<Diagnostic> {
		self.items.lock().clone()
	}

	/// Number of diagnostics emitted so far.
	pub fn len(&self) -> usize {
		self.items.lock().len()
	}

	/// Whether nothing was emitted.
	pub fn is_empty(&self) -> bool {
		self.items.lock().is_empty()
	}

	/// Drop everything collected so far.
	pub fn clear(&self) {
		self.items.lock().clear();
	}
}

impl DiagnosticSink for MemorySink {
	fn emit(&self, diagnostic: &Diagnostic) {
		self.items.lock().push(diagnostic.clone());
	}
}
