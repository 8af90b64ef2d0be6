use std::any::TypeId;
use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::guard::{Diagnostic, DiagnosticSink, StdoutSink};

/// Non-default-destination warnings print only while the counter is below this.
pub const PRINT_LIMIT: u64 = 1;

static GLOBAL: Lazy<Arc<Diagnostics>> = Lazy::new(|| Arc::new(Diagnostics::new(Arc::new(StdoutSink))));

/// Shared state behind every gate: the checked-types memo and the warning counter.
///
/// Each read-modify-write takes the lock once and releases it before any recursion, so walkers
/// never hold it while descending into child types.
pub struct Diagnostics {
	state: Mutex<State>,
	sink: Arc<dyn DiagnosticSink>,
}

#[derive(Default)]
struct State {
	checked: Option<HashSet<TypeId>>,
	warnings: u64,
}

impl Diagnostics {
	/// Fresh context reporting to `sink`.
	pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
		Self {
			state: Mutex::new(State::default()),
			sink,
		}
	}

	/// Process-wide context printing to standard output, created on first use.
	pub fn global() -> Arc<Diagnostics> {
		Arc::clone(&GLOBAL)
	}

	/// Insert `id` into the memo; `false` when it was already there.
	pub fn mark_checked(&self, id: TypeId) -> bool {
		let mut state = self.state.lock();
		state.checked.get_or_insert_with(HashSet::new).insert(id)
	}

	/// Whether `id` is already in the memo.
	pub fn is_checked(&self, id: TypeId) -> bool {
		self.state.lock().checked.as_ref().is_some_and(|checked| checked.contains(&id))
	}

	/// Number of distinct types checked so far.
	pub fn checked_count(&self) -> usize {
		self.state.lock().checked.as_ref().map_or(0, HashSet::len)
	}

	/// Total problems observed, printed or not.
	pub fn warning_count(&self) -> u64 {
		self.state.lock().warnings
	}

	/// Report an invisible field. Always printed, always counted.
	pub fn invisible_field(&self, field: &'static str, type_name: &'static str) {
		self.sink.emit(&Diagnostic::InvisibleField { field, type_name });
		self.state.lock().warnings += 1;
	}

	/// Report a non-default decode destination. Printed only before the first problem of any
	/// kind, counted every time.
	pub fn non_default_destination(&self, what: &str) {
		let mut state = self.state.lock();
		if state.warnings < PRINT_LIMIT {
			self.sink.emit(&Diagnostic::NonDefaultDestination { what: what.to_owned() });
		}
		state.warnings += 1;
	}

	/// Forget every checked type and zero the counter.
	pub fn reset(&self) {
		let mut state = self.state.lock();
		state.checked = None;
		state.warnings = 0;
	}
}

impl Default for Diagnostics {
	fn default() -> Self {
		Self::new(Arc::new(StdoutSink))
	}
}

#[cfg(test)]
mod tests;
