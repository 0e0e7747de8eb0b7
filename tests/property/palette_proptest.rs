//! Property-based tests for config payloads

use craneshell::shared::ConfigPayload;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_payload_json_round_trip(
        name in "[A-Za-z0-9 ]{1,40}",
        color in "#[0-9a-f]{6}",
        opacity in 0.0f64..=1.0,
    ) {
        let mut payload = ConfigPayload::named(name.clone());
        payload.palette.color3 = color.clone();
        payload.special.opacity = opacity;

        let json = serde_json::to_value(&payload).unwrap();
        prop_assert_eq!(json["name"].as_str(), Some(name.as_str()));
        prop_assert_eq!(json["color3"].as_str(), Some(color.as_str()));

        let parsed: ConfigPayload = serde_json::from_value(json).unwrap();
        prop_assert_eq!(parsed, payload);
    }

    #[test]
    fn test_named_payload_is_valid(name in "[A-Za-z0-9][A-Za-z0-9 ]{0,40}") {
        prop_assert!(ConfigPayload::named(name).validate().is_ok());
    }

    #[test]
    fn test_opacity_out_of_range_is_invalid(opacity in 1.0001f64..100.0) {
        let mut payload = ConfigPayload::named("Scheme");
        payload.special.opacity = opacity;
        prop_assert!(payload.validate().is_err());
    }
}
