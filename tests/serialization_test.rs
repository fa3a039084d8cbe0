//! Round trips of parametric descriptions through every serializer

#[cfg(feature = "serialization")]
mod serialization_tests {
    use parametric_levenshtein::prelude::*;
    use parametric_levenshtein::serialization::{load_registry, save_registry};

    const INPUTS: [&str; 8] = [
        "abcdefg", "abxdefg", "abcdegf", "abxdeg", "bacdxfg", "abxdefgx", "abxxdeg", "abcd",
    ];

    fn builtin() -> Vec<ParametricDescription> {
        ParametricDescriptionRegistry::builtin()
            .iter()
            .map(|description| (**description).clone())
            .collect()
    }

    fn assert_same_behavior(registry: &ParametricDescriptionRegistry) {
        for key in ParametricDescriptionRegistry::builtin().keys() {
            let original =
                LevenshteinAutomaton::create("abcdefg", key.degree, key.include_transposition)
                    .unwrap();
            let loaded = LevenshteinAutomaton::create_with(
                "abcdefg",
                key.degree,
                key.include_transposition,
                registry,
            )
            .unwrap();

            for input in INPUTS {
                let state = loaded.run(input);
                assert_eq!(state, original.run(input), "{} on {}", key, input);
                assert_eq!(loaded.is_final(state), original.is_final(state));
                assert_eq!(loaded.is_failure(state), original.is_failure(state));
            }
        }
    }

    // ============================================================================
    // Bincode Round-Trip Tests
    // ============================================================================

    #[test]
    fn test_bincode_registry_roundtrip() {
        let mut buffer = Vec::new();
        save_registry::<BincodeSerializer, _>(ParametricDescriptionRegistry::builtin(), &mut buffer)
            .expect("Failed to serialize registry");

        let registry =
            load_registry::<BincodeSerializer, _>(&buffer[..]).expect("Failed to load registry");

        assert_eq!(registry.len(), 4);
        assert_same_behavior(&registry);
    }

    #[test]
    fn test_bincode_descriptions_roundtrip() {
        let descriptions = builtin();
        let mut buffer = Vec::new();
        BincodeSerializer::serialize(&descriptions, &mut buffer).unwrap();

        let loaded = BincodeSerializer::deserialize(&buffer[..]).unwrap();
        assert_eq!(loaded, descriptions);
    }

    // ============================================================================
    // JSON Round-Trip Tests
    // ============================================================================

    #[test]
    fn test_json_registry_roundtrip() {
        let mut buffer = Vec::new();
        save_registry::<JsonSerializer, _>(ParametricDescriptionRegistry::builtin(), &mut buffer)
            .expect("Failed to serialize registry");

        let registry =
            load_registry::<JsonSerializer, _>(&buffer[..]).expect("Failed to load registry");

        assert_same_behavior(&registry);
    }

    #[test]
    fn test_json_is_readable() {
        let mut buffer = Vec::new();
        JsonSerializer::serialize(&builtin()[..1], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"degree\": 1"));
        assert!(text.contains("\"final_addendums\""));
    }

    #[test]
    fn test_json_rejects_short_table() {
        let json = r#"[{
            "degree": 1,
            "include_transposition": false,
            "transitions": {"bits_per_value": 3, "len": 2, "words": [0]},
            "boundary_offsets": {"bits_per_value": 2, "len": 2, "words": [0]},
            "final_addendums": [0, 0, 0, 0, 0]
        }]"#;

        let error = JsonSerializer::deserialize(json.as_bytes()).unwrap_err();
        assert!(error.to_string().contains("expected 75"), "{}", error);
    }

    #[test]
    fn test_json_rejects_bad_bit_width() {
        let json = r#"[{
            "degree": 0,
            "include_transposition": false,
            "transitions": {"bits_per_value": 64, "len": 3, "words": [0, 0, 0]},
            "boundary_offsets": {"bits_per_value": 1, "len": 3, "words": [4]},
            "final_addendums": [0]
        }]"#;

        assert!(JsonSerializer::deserialize(json.as_bytes()).is_err());
    }

    #[test]
    fn test_subset_registry() {
        let descriptions: Vec<_> = builtin()
            .into_iter()
            .filter(|description| description.degree() == 2)
            .collect();
        let mut buffer = Vec::new();
        BincodeSerializer::serialize(&descriptions, &mut buffer).unwrap();

        let registry = load_registry::<BincodeSerializer, _>(&buffer[..]).unwrap();
        assert!(LevenshteinAutomaton::create_with("abc", 2, false, &registry).is_ok());
        assert_eq!(
            LevenshteinAutomaton::create_with("abc", 1, false, &registry).unwrap_err(),
            ParametricDescriptionNotFound {
                degree: 1,
                include_transposition: false
            }
        );
    }

    // ============================================================================
    // Compression Tests
    // ============================================================================

    #[test]
    #[cfg(feature = "compression")]
    fn test_gzip_registry_roundtrip() {
        let mut buffer = Vec::new();
        save_registry::<GzipSerializer<BincodeSerializer>, _>(
            ParametricDescriptionRegistry::builtin(),
            &mut buffer,
        )
        .unwrap();

        let registry = load_registry::<GzipSerializer<BincodeSerializer>, _>(&buffer[..]).unwrap();
        assert_same_behavior(&registry);
    }
}
