mod audit;
mod diagnostics;
mod error;
mod gate;
mod macros;
mod registry;
mod report;
mod shape;
mod std_impls;
mod visibility;

/// Depth-bounded audit of decode destinations.
pub use audit::{MAX_AUDIT_DEPTH, check_default};
/// Shared memo, warning counter and sink.
pub use diagnostics::{Diagnostics, PRINT_LIMIT};
/// Error and result aliases.
pub use error::{GuardError, Result};
/// Encoding/decoding gates and type registration.
pub use gate::{Decoder, Encodable, Encoder, register, register_name, register_with};
/// Name bindings for registered types.
pub use registry::Registry;
/// Diagnostic records and sinks.
pub use report::{Diagnostic, DiagnosticSink, MemorySink, StdoutSink};
/// Type descriptors and the introspection trait.
pub use shape::{FieldDescriptor, Reflect, ScalarKind, Shape, TypeDescriptor, TypeRef, ValueRef};
/// Memoized field-visibility walk.
pub use visibility::check_type;
