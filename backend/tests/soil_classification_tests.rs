//! Tests for soil description and label parsing
//! Verifies that questionnaire answers map to a stable description and that
//! classifier replies only ever land on the closed label set.

use proptest::prelude::*;
use shared::{
    classification_prompt, parse_soil_label, Drainage, Hardness, Moisture, ObservationChoice,
    SoilClassification, SoilColor, SoilObservation, SoilType, Texture, UNKNOWN_SOIL_LABEL,
};

fn observation_strategy() -> impl Strategy<Value = SoilObservation> {
    (
        prop::sample::select(Texture::ALL.to_vec()),
        prop::sample::select(Moisture::ALL.to_vec()),
        prop::sample::select(SoilColor::ALL.to_vec()),
        prop::sample::select(Hardness::ALL.to_vec()),
        prop::sample::select(Drainage::ALL.to_vec()),
    )
        .prop_map(|(texture, moisture, color, hardness, drainage)| SoilObservation {
            texture,
            moisture,
            color,
            hardness,
            drainage,
        })
}

fn soil_type_strategy() -> impl Strategy<Value = SoilType> {
    prop::sample::select(SoilType::ALL.to_vec())
}

// =============================================================================
// Soil description
// =============================================================================

mod soil_description {
    use super::*;

    #[test]
    fn sandy_fast_draining_sample() {
        let observation = SoilObservation {
            texture: Texture::Sandy,
            moisture: Moisture::Moist,
            color: SoilColor::Dark,
            hardness: Hardness::Medium,
            drainage: Drainage::Fast,
        };
        assert_eq!(
            observation.describe(),
            "Texture: loose gritty sandy; Moisture: moist damp; \
             Color: dark brown black organic rich; Hardness: medium firm; \
             Drainage: drains very fast porous"
        );
    }

    #[test]
    fn defaults_match_form_defaults() {
        let observation = SoilObservation::default();
        assert_eq!(observation.texture, Texture::Sandy);
        assert_eq!(observation.moisture, Moisture::Moist);
        assert_eq!(observation.color, SoilColor::Dark);
        assert_eq!(observation.hardness, Hardness::Medium);
        assert_eq!(observation.drainage, Drainage::Slow);
    }

    #[test]
    fn every_phrase_is_distinct_within_a_question() {
        fn distinct<T: ObservationChoice>() -> bool {
            let mut phrases: Vec<_> = T::ALL.iter().map(|c| c.phrase()).collect();
            phrases.sort_unstable();
            phrases.dedup();
            phrases.len() == T::ALL.len()
        }
        assert!(distinct::<Texture>());
        assert!(distinct::<Moisture>());
        assert!(distinct::<SoilColor>());
        assert!(distinct::<Hardness>());
        assert!(distinct::<Drainage>());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The same answers always produce the same description
        #[test]
        fn prop_description_is_deterministic(observation in observation_strategy()) {
            let copy = observation;
            prop_assert_eq!(observation.describe(), copy.describe());
        }

        /// The description contains each answer's phrase in form order
        #[test]
        fn prop_description_lists_phrases_in_order(observation in observation_strategy()) {
            let description = observation.describe();
            let expected = format!(
                "Texture: {}; Moisture: {}; Color: {}; Hardness: {}; Drainage: {}",
                observation.texture.phrase(),
                observation.moisture.phrase(),
                observation.color.phrase(),
                observation.hardness.phrase(),
                observation.drainage.phrase(),
            );
            prop_assert_eq!(description, expected);
        }

        /// Different answers never collapse onto the same description
        #[test]
        fn prop_description_is_injective(
            a in observation_strategy(),
            b in observation_strategy()
        ) {
            prop_assert_eq!(a == b, a.describe() == b.describe());
        }

        /// A description-only prompt always carries the description verbatim
        #[test]
        fn prop_text_prompt_embeds_description(observation in observation_strategy()) {
            let description = observation.describe();
            let prompt = classification_prompt(false, Some(&description));
            let expected = format!("Soil description: {}", description);
            prop_assert!(prompt.contains(&expected));
        }
    }
}

// =============================================================================
// Label parsing
// =============================================================================

mod label_parsing {
    use super::*;

    #[test]
    fn each_label_parses_to_its_type() {
        for soil in SoilType::ALL {
            assert_eq!(parse_soil_label(soil.label()), SoilClassification::from(soil));
        }
    }

    #[test]
    fn near_misses_are_unknown() {
        for reply in [
            "black soil",
            "BLACK SOIL",
            "Black Soil.",
            "Black-Soil",
            "The soil is Black Soil",
            "Loamy Soil",
            "",
        ] {
            let classification = parse_soil_label(reply);
            assert!(!classification.is_known(), "'{}' should be unknown", reply);
            assert_eq!(classification.label(), UNKNOWN_SOIL_LABEL);
        }
    }

    #[test]
    fn sentinel_round_trips_as_unknown() {
        assert_eq!(parse_soil_label(UNKNOWN_SOIL_LABEL).label(), UNKNOWN_SOIL_LABEL);
    }

    #[test]
    fn classification_serializes_with_status_tag() {
        let known = serde_json::to_value(SoilClassification::from(SoilType::RedSoil)).unwrap();
        assert_eq!(known["status"], "known");
        assert_eq!(known["soil_type"], "red_soil");

        let unknown = serde_json::to_value(parse_soil_label("Peat")).unwrap();
        assert_eq!(unknown["status"], "unknown");
        assert_eq!(unknown["raw_response"], "Peat");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Surrounding whitespace never changes the result
        #[test]
        fn prop_whitespace_is_ignored(
            soil in soil_type_strategy(),
            before in "[ \t\n]{0,4}",
            after in "[ \t\n]{0,4}"
        ) {
            let reply = format!("{}{}{}", before, soil.label(), after);
            prop_assert_eq!(parse_soil_label(&reply).soil_type(), Some(soil));
        }

        /// Parsing is total: any reply maps to a known label or the sentinel
        #[test]
        fn prop_parse_is_closed(reply in ".{0,40}") {
            let label = parse_soil_label(&reply).label();
            prop_assert!(
                label == UNKNOWN_SOIL_LABEL
                    || SoilType::ALL.iter().any(|soil| soil.label() == label)
            );
        }

        /// Extra words around a label are rejected
        #[test]
        fn prop_extra_words_are_unknown(soil in soil_type_strategy(), suffix in "[a-z]{1,8}") {
            let reply = format!("{} {}", soil.label(), suffix);
            prop_assert!(!parse_soil_label(&reply).is_known());
        }
    }
}
