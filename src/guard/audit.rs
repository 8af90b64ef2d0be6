use crate::guard::{Diagnostics, Reflect, ValueRef};

/// Deepest level the auditor inspects; the root value sits at level 1.
pub const MAX_AUDIT_DEPTH: u32 = 3;

/// Report scalar leaves of `value` that are not at their zero value.
///
/// Only struct fields, non-nil pointers and scalars are visited, down to
/// [`MAX_AUDIT_DEPTH`]. Slice, array and map contents are skipped.
pub fn check_default(diagnostics: &Diagnostics, value: Option<&dyn Reflect>) {
	let Some(value) = value else {
		return;
	};
	audit_inner(diagnostics, value, 1, "");
}

/// Audit a decode destination reached through `&mut`.
///
/// The reference is the non-nil pointer at level 1, so the destination itself sits at level 2.
pub(crate) fn check_destination(diagnostics: &Diagnostics, dest: &dyn Reflect) {
	audit_inner(diagnostics, dest, 2, "");
}

fn audit_inner(diagnostics: &Diagnostics, value: &dyn Reflect, depth: u32, path: &str) {
	if depth > MAX_AUDIT_DEPTH {
		return;
	}

	let view = value.inspect();
	match view {
		ValueRef::Struct(fields) => {
			for (name, field) in fields {
				let field_path = format!("{path}.{name}");
				audit_inner(diagnostics, field, depth + 1, &field_path);
			}
		}
		ValueRef::Pointer(None) => {}
		ValueRef::Pointer(Some(pointee)) => audit_inner(diagnostics, pointee, depth + 1, path),
		ValueRef::Opaque => {}
		leaf => {
			if leaf.is_zero() == Some(false) {
				let what = if path.is_empty() { value.type_descriptor().name } else { path };
				diagnostics.non_default_destination(what);
			}
		}
	}
}
