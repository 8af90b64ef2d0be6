use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lazily resolved type descriptor; keeps self-referential type graphs finite.
pub type TypeRef = fn() -> TypeDescriptor;

/// Shape summary of one caller type.
#[derive(Clone)]
pub struct TypeDescriptor {
	/// Stable identity, used as the checked-types memo key.
	pub id: TypeId,
	/// Human-readable type name used in diagnostics.
	pub name: &'static str,
	/// Structural kind and child types.
	pub shape: Shape,
}

/// Closed set of type shapes the walkers dispatch on.
#[derive(Clone)]
pub enum Shape {
	/// Named fields in declaration order.
	Struct(Vec<FieldDescriptor>),
	/// Variable-length sequence.
	Slice(TypeRef),
	/// Fixed-length sequence.
	Array {
		/// Element type.
		elem: TypeRef,
		/// Element count.
		len: usize,
	},
	/// Indirection that may or may not be nil.
	Pointer(TypeRef),
	/// Keyed container.
	Map {
		/// Key type.
		key: TypeRef,
		/// Value type.
		value: TypeRef,
	},
	/// Leaf value.
	Scalar(ScalarKind),
	/// Anything with no children worth visiting.
	Other,
}

/// Leaf value families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// `bool`.
	Bool,
	/// Signed integers.
	Int,
	/// Unsigned integers and `char`.
	Uint,
	/// `f32` and `f64`.
	Float,
	/// `String`.
	String,
}

/// One struct field declaration.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
	/// Field identifier as declared.
	pub name: &'static str,
	/// Field type.
	pub ty: TypeRef,
}

impl FieldDescriptor {
	/// Build a field declaration.
	pub fn new(name: &'static str, ty: TypeRef) -> Self {
		Self { name, ty }
	}

	/// Whether the codec can see this field: its first character is an upper-case letter.
	pub fn is_exported(&self) -> bool {
		self.name.chars().next().is_some_and(char::is_uppercase)
	}
}

impl TypeDescriptor {
	/// Descriptor for type `T` with an explicit shape.
	pub fn of<T: 'static>(name: &'static str, shape: Shape) -> Self {
		Self {
			id: TypeId::of::<T>(),
			name,
			shape,
		}
	}

	/// Short kind label for logs.
	pub fn kind_str(&self) -> &'static str {
		match self.shape {
			Shape::Struct(_) => "struct",
			Shape::Slice(_) => "slice",
			Shape::Array { .. } => "array",
			Shape::Pointer(_) => "pointer",
			Shape::Map { .. } => "map",
			Shape::Scalar(_) => "scalar",
			Shape::Other => "other",
		}
	}
}

impl PartialEq for TypeDescriptor {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("name", &self.name)
			.field("kind", &self.kind_str())
			.finish()
	}
}

impl fmt::Debug for FieldDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("name", &self.name)
			.field("ty", &(self.ty)().name)
			.finish()
	}
}

/// Read-only view of a live value, one level deep.
pub enum ValueRef<'a> {
	/// Struct fields in declaration order.
	Struct(Vec<(&'static str, &'a dyn Reflect)>),
	/// Pointee, or `None` when nil.
	Pointer(Option<&'a dyn Reflect>),
	/// Boolean leaf.
	Bool(bool),
	/// Signed integer leaf.
	Int(i64),
	/// Unsigned integer leaf.
	Uint(u64),
	/// Floating-point leaf.
	Float(f64),
	/// String leaf.
	Str(&'a str),
	/// Contents not exposed (slices, arrays, maps, other).
	Opaque,
}

impl ValueRef<'_> {
	/// Whether a leaf equals its type's zero value. Non-leaves report `None`.
	pub fn is_zero(&self) -> Option<bool> {
		match *self {
			ValueRef::Bool(value) => Some(!value),
			ValueRef::Int(value) => Some(value == 0),
			ValueRef::Uint(value) => Some(value == 0),
			ValueRef::Float(value) => Some(value == 0.0),
			ValueRef::Str(value) => Some(value.is_empty()),
			ValueRef::Struct(_) | ValueRef::Pointer(_) | ValueRef::Opaque => None,
		}
	}
}

/// Type introspection used by the visibility checker and the destination auditor.
///
/// Implement with [`reflect_struct!`](crate::reflect_struct) for plain structs; containers and
/// scalars from `std` are covered already.
pub trait Reflect: 'static {
	/// Static descriptor for this type.
	fn descriptor() -> TypeDescriptor
	where
		Self: Sized;

	/// Descriptor reachable through a trait object.
	fn type_descriptor(&self) -> TypeDescriptor;

	/// One-level view of the current value.
	fn inspect(&self) -> ValueRef<'_>;
}
