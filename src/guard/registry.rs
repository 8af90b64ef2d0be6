use std::any::TypeId;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::debug;

use crate::guard::{GuardError, Result, TypeDescriptor};

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Name bindings for concrete types sent behind polymorphic fields.
#[derive(Debug, Default)]
pub struct Registry {
	tables: Mutex<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
	by_name: HashMap<String, (TypeId, &'static str)>,
	by_type: HashMap<TypeId, String>,
}

impl Registry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Process-wide registry used by the free registration functions.
	pub fn global() -> &'static Registry {
		&GLOBAL
	}

	/// Bind `name` to the type described by `ty`. Repeating an identical binding is a no-op.
	pub fn bind(&self, name: &str, ty: &TypeDescriptor) -> Result<()> {
		if name.is_empty() {
			return Err(GuardError::EmptyName);
		}

		let mut tables = self.tables.lock();
		if let Some(&(existing, existing_name)) = tables.by_name.get(name) {
			if existing != ty.id {
				return Err(GuardError::DuplicateName {
					name: name.to_owned(),
					existing: existing_name,
					requested: ty.name,
				});
			}
		}
		if let Some(existing) = tables.by_type.get(&ty.id) {
			if existing != name {
				return Err(GuardError::DuplicateType {
					type_name: ty.name,
					existing: existing.clone(),
					requested: name.to_owned(),
				});
			}
		}

		tables.by_name.insert(name.to_owned(), (ty.id, ty.name));
		tables.by_type.insert(ty.id, name.to_owned());
		debug!(name, type_name = ty.name, "registered type");
		Ok(())
	}

	/// Type bound to `name`.
	pub fn lookup(&self, name: &str) -> Option<TypeId> {
		self.tables.lock().by_name.get(name).map(|&(id, _)| id)
	}

	/// Name bound to the type `id`.
	pub fn name_of(&self, id: TypeId) -> Option<String> {
		self.tables.lock().by_type.get(&id).cloned()
	}

	/// Number of bound names.
	pub fn len(&self) -> usize {
		self.tables.lock().by_name.len()
	}

	/// Whether nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.tables.lock().by_name.is_empty()
	}
}
