mod unit_visibility {

	use std::any::TypeId;
	use std::collections::HashMap;
	use std::sync::Arc;

	use crate::guard::{Diagnostic, Diagnostics, MemorySink, Reflect, check_type};

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Peer {
			ID: u64,
			name: String,
		}
	}

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Node {
			Value: u64,
			Next: Option<Box<Node>>,
		}
	}

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Tree {
			Children: Vec<Branch>,
		}
	}

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Branch {
			Parent: Option<Box<Tree>>,
			label: String,
		}
	}

	crate::reflect_struct! {
		struct Key {
			id: u64,
		}
	}

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Slot {
			Inner: [Flagged; 2],
		}
	}

	crate::reflect_struct! {
		struct Flagged {
			flag: bool,
		}
	}

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Index {
			Entries: HashMap<Key, Slot>,
		}
	}

	crate::reflect_struct! {
		#[allow(non_snake_case)]
		struct Shared {
			Left: Peer,
			Right: Vec<Peer>,
		}
	}

	fn context() -> (Arc<MemorySink>, Diagnostics) {
		let sink = Arc::new(MemorySink::new());
		let diagnostics = Diagnostics::new(sink.clone());
		(sink, diagnostics)
	}

	#[test]
	fn lower_case_field_is_reported_once() {
		let (sink, diagnostics) = context();

		check_type(&diagnostics, &Peer::descriptor());
		assert_eq!(
			sink.diagnostics(),
			vec![Diagnostic::InvisibleField {
				field: "name",
				type_name: "Peer",
			}]
		);
		assert_eq!(diagnostics.warning_count(), 1);

		check_type(&diagnostics, &Peer::descriptor());
		assert_eq!(sink.len(), 1, "second check must be short-circuited");
		assert_eq!(diagnostics.warning_count(), 1);
	}

	#[test]
	fn field_types_are_visited() {
		let (_, diagnostics) = context();
		check_type(&diagnostics, &Peer::descriptor());

		assert!(diagnostics.is_checked(TypeId::of::<Peer>()));
		assert!(diagnostics.is_checked(TypeId::of::<u64>()));
		assert!(diagnostics.is_checked(TypeId::of::<String>()));
		assert_eq!(diagnostics.checked_count(), 3);
	}

	#[test]
	fn self_referential_type_terminates() {
		let (sink, diagnostics) = context();
		check_type(&diagnostics, &Node::descriptor());

		assert!(sink.is_empty());
		assert_eq!(diagnostics.checked_count(), 4, "Node, u64, Option<Box<Node>>, Box<Node>");
	}

	#[test]
	fn mutually_recursive_types_terminate() {
		let (sink, diagnostics) = context();
		check_type(&diagnostics, &Tree::descriptor());

		assert_eq!(
			sink.diagnostics(),
			vec![Diagnostic::InvisibleField {
				field: "label",
				type_name: "Branch",
			}]
		);
		assert!(diagnostics.is_checked(TypeId::of::<Branch>()));
		assert!(diagnostics.is_checked(TypeId::of::<Option<Box<Tree>>>()));
	}

	#[test]
	fn map_value_is_checked_before_key() {
		let (sink, diagnostics) = context();
		check_type(&diagnostics, &Index::descriptor());

		assert_eq!(
			sink.diagnostics(),
			vec![
				Diagnostic::InvisibleField {
					field: "flag",
					type_name: "Flagged",
				},
				Diagnostic::InvisibleField {
					field: "id",
					type_name: "Key",
				},
			]
		);
		assert_eq!(diagnostics.warning_count(), 2);
	}

	#[test]
	fn shared_type_reports_once() {
		let (sink, diagnostics) = context();
		check_type(&diagnostics, &Shared::descriptor());

		assert_eq!(sink.len(), 1);
		assert_eq!(diagnostics.warning_count(), 1);
	}

	#[test]
	fn scalar_root_has_nothing_to_report() {
		let (sink, diagnostics) = context();
		check_type(&diagnostics, &i32::descriptor());

		assert!(sink.is_empty());
		assert_eq!(diagnostics.checked_count(), 1);
	}
}
