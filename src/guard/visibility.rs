use tracing::trace;

use crate::guard::{Diagnostics, Shape, TypeDescriptor};

/// Walk `ty` and everything reachable from it, reporting struct fields the codec cannot see.
///
/// Each type is expanded at most once per context; it is marked before its children are
/// visited, which is what makes recursive type graphs terminate.
pub fn check_type(diagnostics: &Diagnostics, ty: &TypeDescriptor) {
	if !diagnostics.mark_checked(ty.id) {
		trace!(type_name = ty.name, "type already checked");
		return;
	}
	trace!(type_name = ty.name, kind = ty.kind_str(), "checking type");

	match &ty.shape {
		Shape::Struct(fields) => {
			for field in fields {
				if !field.is_exported() {
					diagnostics.invisible_field(field.name, ty.name);
				}
				check_type(diagnostics, &(field.ty)());
			}
		}
		Shape::Slice(elem) | Shape::Array { elem, .. } | Shape::Pointer(elem) => check_type(diagnostics, &elem()),
		Shape::Map { key, value } => {
			check_type(diagnostics, &value());
			check_type(diagnostics, &key());
		}
		Shape::Scalar(_) | Shape::Other => {}
	}
}

#[cfg(test)]
mod tests;
