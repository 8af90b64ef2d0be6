use std::any::type_name;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::guard::{Reflect, ScalarKind, Shape, TypeDescriptor, ValueRef};

macro_rules! reflect_scalar {
	($kind:ident, $variant:ident, $conv:ty: $($ty:ty),+) => {
		$(
			impl Reflect for $ty {
				fn descriptor() -> TypeDescriptor {
					TypeDescriptor::of::<Self>(stringify!($ty), Shape::Scalar(ScalarKind::$kind))
				}

				fn type_descriptor(&self) -> TypeDescriptor {
					Self::descriptor()
				}

				fn inspect(&self) -> ValueRef<'_> {
					ValueRef::$variant(<$conv>::from(*self))
				}
			}
		)+
	};
}

reflect_scalar!(Int, Int, i64: i8, i16, i32, i64);
reflect_scalar!(Uint, Uint, u64: u8, u16, u32, u64);
reflect_scalar!(Float, Float, f64: f32, f64);

impl Reflect for bool {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>("bool", Shape::Scalar(ScalarKind::Bool))
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Bool(*self)
	}
}

impl Reflect for char {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>("char", Shape::Scalar(ScalarKind::Uint))
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Uint(u64::from(u32::from(*self)))
	}
}

// Pointer-width integers saturate into the 64-bit view; only zero-ness matters.
impl Reflect for isize {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>("isize", Shape::Scalar(ScalarKind::Int))
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Int(i64::try_from(*self).unwrap_or(i64::MAX))
	}
}

impl Reflect for usize {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>("usize", Shape::Scalar(ScalarKind::Uint))
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Uint(u64::try_from(*self).unwrap_or(u64::MAX))
	}
}

impl Reflect for String {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>("String", Shape::Scalar(ScalarKind::String))
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Str(self)
	}
}

impl Reflect for () {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>("()", Shape::Other)
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Opaque
	}
}

macro_rules! reflect_sequence {
	($($container:ident),+) => {
		$(
			impl<T: Reflect> Reflect for $container<T> {
				fn descriptor() -> TypeDescriptor {
					TypeDescriptor::of::<Self>(type_name::<Self>(), Shape::Slice(T::descriptor))
				}

				fn type_descriptor(&self) -> TypeDescriptor {
					Self::descriptor()
				}

				fn inspect(&self) -> ValueRef<'_> {
					ValueRef::Opaque
				}
			}
		)+
	};
}

reflect_sequence!(Vec, VecDeque, HashSet, BTreeSet);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>(type_name::<Self>(), Shape::Array { elem: T::descriptor, len: N })
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Opaque
	}
}

impl<T: Reflect> Reflect for Option<T> {
	fn descriptor() -> TypeDescriptor {
		TypeDescriptor::of::<Self>(type_name::<Self>(), Shape::Pointer(T::descriptor))
	}

	fn type_descriptor(&self) -> TypeDescriptor {
		Self::descriptor()
	}

	fn inspect(&self) -> ValueRef<'_> {
		ValueRef::Pointer(self.as_ref().map(|value| value as &dyn Reflect))
	}
}

macro_rules! reflect_owning_pointer {
	($($ptr:ident),+) => {
		$(
			impl<T: Reflect> Reflect for $ptr<T> {
				fn descriptor() -> TypeDescriptor {
					TypeDescriptor::of::<Self>(type_name::<Self>(), Shape::Pointer(T::descriptor))
				}

				fn type_descriptor(&self) -> TypeDescriptor {
					Self::descriptor()
				}

				fn inspect(&self) -> ValueRef<'_> {
					let pointee: &T = self;
					ValueRef::Pointer(Some(pointee as &dyn Reflect))
				}
			}
		)+
	};
}

reflect_owning_pointer!(Box, Arc);

macro_rules! reflect_map {
	($($map:ident),+) => {
		$(
			impl<K: Reflect, V: Reflect> Reflect for $map<K, V> {
				fn descriptor() -> TypeDescriptor {
					TypeDescriptor::of::<Self>(
						type_name::<Self>(),
						Shape::Map {
							key: K::descriptor,
							value: V::descriptor,
						},
					)
				}

				fn type_descriptor(&self) -> TypeDescriptor {
					Self::descriptor()
				}

				fn inspect(&self) -> ValueRef<'_> {
					ValueRef::Opaque
				}
			}
		)+
	};
}

reflect_map!(HashMap, BTreeMap);
