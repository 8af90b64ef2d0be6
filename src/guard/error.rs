use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors from type registration and the RPC client end.
///
/// Diagnostics are never errors; gates return codec results untouched.
#[derive(Debug, Error)]
pub enum GuardError {
	/// A registered name is already bound to another type.
	#[error("registering duplicate names for {name}: {existing} != {requested}")]
	DuplicateName {
		/// Registration name.
		name: String,
		/// Type already bound to the name.
		existing: &'static str,
		/// Type the caller tried to bind.
		requested: &'static str,
	},
	/// A type is already registered under another name.
	#[error("registering duplicate types for {type_name}: {existing} != {requested}")]
	DuplicateType {
		/// Type being registered.
		type_name: &'static str,
		/// Name already bound to the type.
		existing: String,
		/// Name the caller tried to use.
		requested: String,
	},
	/// Registration name was empty.
	#[error("attempt to register empty name")]
	EmptyName,
	/// Encoding arguments or decoding a reply failed.
	#[error("codec: {0}")]
	Codec(#[from] bincode::Error),
}
