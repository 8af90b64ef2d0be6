use std::io::{Read, Write};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::guard::audit::check_destination;
use crate::guard::{Diagnostics, Reflect, Registry, Result, TypeDescriptor, check_type};

/// Value that can pass through the encoding gate behind a trait object.
pub trait Encodable: Reflect {
	/// Hand the value to the codec writer.
	fn encode_into(&self, writer: &mut dyn Write) -> bincode::Result<()>;
}

impl<T: Reflect + Serialize> Encodable for T {
	fn encode_into(&self, writer: &mut dyn Write) -> bincode::Result<()> {
		bincode::serialize_into(writer, self)
	}
}

/// Writer-side gate: checks field visibility, then encodes with the codec.
pub struct Encoder<W> {
	writer: W,
	diagnostics: Arc<Diagnostics>,
}

impl<W: Write> Encoder<W> {
	/// Gate reporting to the process-wide diagnostics context.
	pub fn new(writer: W) -> Self {
		Self::with_diagnostics(writer, Diagnostics::global())
	}

	/// Gate reporting to an explicit context.
	pub fn with_diagnostics(writer: W, diagnostics: Arc<Diagnostics>) -> Self {
		Self { writer, diagnostics }
	}

	/// Check `value`'s type, then encode it.
	pub fn encode<T: Reflect + Serialize>(&mut self, value: &T) -> bincode::Result<()> {
		check_type(&self.diagnostics, &T::descriptor());
		bincode::serialize_into(&mut self.writer, value)
	}

	/// Same as [`Encoder::encode`] for a type-erased value.
	pub fn encode_value(&mut self, value: &dyn Encodable) -> bincode::Result<()> {
		check_type(&self.diagnostics, &value.type_descriptor());
		value.encode_into(&mut self.writer)
	}

	/// Underlying writer.
	pub fn get_ref(&self) -> &W {
		&self.writer
	}

	/// Release the underlying writer.
	pub fn into_inner(self) -> W {
		self.writer
	}
}

/// Reader-side gate: checks field visibility and audits the destination, then decodes.
pub struct Decoder<R> {
	reader: R,
	diagnostics: Arc<Diagnostics>,
}

impl<R: Read> Decoder<R> {
	/// Gate reporting to the process-wide diagnostics context.
	pub fn new(reader: R) -> Self {
		Self::with_diagnostics(reader, Diagnostics::global())
	}

	/// Gate reporting to an explicit context.
	pub fn with_diagnostics(reader: R, diagnostics: Arc<Diagnostics>) -> Self {
		Self { reader, diagnostics }
	}

	/// Check and audit `dest`, then overwrite it with the next decoded value.
	///
	/// The audit sees `dest` before the codec fills it. On codec failure `dest` is untouched.
	pub fn decode<T: Reflect + DeserializeOwned>(&mut self, dest: &mut T) -> bincode::Result<()> {
		check_type(&self.diagnostics, &T::descriptor());
		check_destination(&self.diagnostics, &*dest);
		*dest = bincode::deserialize_from(&mut self.reader)?;
		Ok(())
	}

	/// Release the underlying reader.
	pub fn into_inner(self) -> R {
		self.reader
	}
}

/// Check `T`, then register it under its own type name in the process-wide registry.
pub fn register<T: Reflect>() -> Result<()> {
	register_with::<T>(&Diagnostics::global(), Registry::global(), None)
}

/// Check `T`, then register it under `name` in the process-wide registry.
pub fn register_name<T: Reflect>(name: &str) -> Result<()> {
	register_with::<T>(&Diagnostics::global(), Registry::global(), Some(name))
}

/// Check `T` against `diagnostics`, then bind it in `registry` under `name` or its type name.
pub fn register_with<T: Reflect>(diagnostics: &Diagnostics, registry: &Registry, name: Option<&str>) -> Result<()> {
	let ty: TypeDescriptor = T::descriptor();
	check_type(diagnostics, &ty);
	registry.bind(name.unwrap_or(ty.name), &ty)
}
