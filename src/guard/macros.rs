/// Define a struct together with its [`Reflect`](crate::guard::Reflect) implementation.
///
/// Attributes on the struct and its fields pass through unchanged, so serde derives and
/// `#[allow(non_snake_case)]` go where they normally would. Field names are reported exactly as
/// written; only fields starting with an upper-case letter count as visible to the codec.
///
/// ```
/// use codecguard::reflect_struct;
///
/// reflect_struct! {
/// 	#[allow(non_snake_case)]
/// 	#[derive(Debug, Default)]
/// 	pub struct LogEntry {
/// 		pub Term: u64,
/// 		pub Command: Vec<u8>,
/// 	}
/// }
/// ```
#[macro_export]
macro_rules! reflect_struct {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $field_ty:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $field_ty,
			)*
		}

		impl $crate::guard::Reflect for $name {
			fn descriptor() -> $crate::guard::TypeDescriptor {
				$crate::guard::TypeDescriptor::of::<Self>(
					stringify!($name),
					$crate::guard::Shape::Struct(::std::vec![
						$(
							$crate::guard::FieldDescriptor::new(
								stringify!($field),
								<$field_ty as $crate::guard::Reflect>::descriptor,
							),
						)*
					]),
				)
			}

			fn type_descriptor(&self) -> $crate::guard::TypeDescriptor {
				<Self as $crate::guard::Reflect>::descriptor()
			}

			fn inspect(&self) -> $crate::guard::ValueRef<'_> {
				$crate::guard::ValueRef::Struct(::std::vec![
					$(
						(stringify!($field), &self.$field as &dyn $crate::guard::Reflect),
					)*
				])
			}
		}
	};
}
