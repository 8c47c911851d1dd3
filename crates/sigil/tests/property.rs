use proptest::prelude::*;
use sigil::prelude::*;

proptest! {
    #[test]
    fn every_configured_length_yields_exact_valid_ids(length in MIN_LENGTH..=MAX_LENGTH) {
        let generator = Generator::builder().length(length).unwrap().build().unwrap();
        let id = generator.generate();
        prop_assert_eq!(id.len(), length);
        prop_assert!(is_sigil(&id));
    }

    #[test]
    fn any_in_range_constant_source_is_accepted(value in 0.0f64..1.0) {
        let generator = Generator::builder()
            .random_source(move || value)
            .unwrap()
            .build()
            .unwrap();
        prop_assert!(is_sigil(&generator.generate()));
    }

    #[test]
    fn any_out_of_range_constant_source_is_rejected(value in 1.0f64..100.0) {
        let result = Generator::builder().random_source(move || value);
        let is_expected_error = matches!(result, Err(SigilError::InvalidRandomSource { .. }));
        prop_assert!(is_expected_error);
    }

    #[test]
    fn legal_shapes_are_accepted(candidate in "[a-z][a-z0-9]{1,31}") {
        prop_assert!(is_sigil(&candidate));
    }

    #[test]
    fn digit_led_candidates_are_rejected(candidate in "[0-9][a-z0-9]{1,30}") {
        prop_assert!(!is_sigil(&candidate));
    }

    #[test]
    fn candidates_with_foreign_characters_are_rejected(
        candidate in "[a-z][a-z0-9]{0,14}[A-Z!@#_. ][a-z0-9]{0,15}"
    ) {
        prop_assert!(!is_sigil(&candidate));
    }

    #[test]
    fn overlong_candidates_are_rejected(candidate in "[a-z][a-z0-9]{32,64}") {
        prop_assert!(!is_sigil(&candidate));
    }
}
