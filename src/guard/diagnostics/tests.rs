mod unit_diagnostics {

	use std::any::TypeId;
	use std::sync::Arc;
	use std::thread;

	use crate::guard::{Diagnostic, Diagnostics, MemorySink};

	#[test]
	fn memo_insert_reports_first_time_only() {
		let diagnostics = Diagnostics::new(Arc::new(MemorySink::new()));

		assert_eq!(diagnostics.checked_count(), 0);
		assert!(diagnostics.mark_checked(TypeId::of::<u8>()));
		assert!(!diagnostics.mark_checked(TypeId::of::<u8>()));
		assert!(diagnostics.is_checked(TypeId::of::<u8>()));
		assert!(!diagnostics.is_checked(TypeId::of::<u16>()));
	}

	#[test]
	fn invisible_fields_always_print() {
		let sink = Arc::new(MemorySink::new());
		let diagnostics = Diagnostics::new(sink.clone());

		diagnostics.invisible_field("a", "First");
		diagnostics.invisible_field("b", "Second");

		assert_eq!(sink.len(), 2);
		assert_eq!(diagnostics.warning_count(), 2);
	}

	#[test]
	fn non_default_prints_only_below_limit() {
		let sink = Arc::new(MemorySink::new());
		let diagnostics = Diagnostics::new(sink.clone());

		diagnostics.non_default_destination(".Term");
		diagnostics.non_default_destination(".Index");

		assert_eq!(
			sink.diagnostics(),
			vec![Diagnostic::NonDefaultDestination { what: ".Term".to_owned() }]
		);
		assert_eq!(diagnostics.warning_count(), 2);
	}

	#[test]
	fn reset_clears_memo_and_counter() {
		let sink = Arc::new(MemorySink::new());
		let diagnostics = Diagnostics::new(sink.clone());
		diagnostics.mark_checked(TypeId::of::<u8>());
		diagnostics.non_default_destination(".Term");

		diagnostics.reset();
		assert_eq!(diagnostics.checked_count(), 0);
		assert_eq!(diagnostics.warning_count(), 0);

		diagnostics.non_default_destination(".Term");
		assert_eq!(sink.len(), 2, "printing resumes after reset");
	}

	#[test]
	fn concurrent_increments_are_not_lost() {
		let diagnostics = Arc::new(Diagnostics::new(Arc::new(MemorySink::new())));
		let workers: Vec<_> = (0..8)
			.map(|_| {
				let diagnostics = Arc::clone(&diagnostics);
				thread::spawn(move || {
					for _ in 0..100 {
						diagnostics.non_default_destination(".Value");
					}
				})
			})
			.collect();
		for worker in workers {
			worker.join().expect("worker finishes");
		}

		assert_eq!(diagnostics.warning_count(), 800);
	}

	#[test]
	fn global_context_is_shared() {
		assert!(Arc::ptr_eq(&Diagnostics::global(), &Diagnostics::global()));
	}

	#[test]
	fn diagnostic_lines_name_the_offender() {
		let invisible = Diagnostic::InvisibleField {
			field: "name",
			type_name: "Peer",
		};
		let line = invisible.to_string();
		assert!(line.contains("name"));
		assert!(line.contains("Peer"));

		let destination = Diagnostic::NonDefaultDestination { what: ".Term".to_owned() };
		assert!(destination.to_string().contains(".Term"));
	}
}
