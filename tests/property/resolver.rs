use proptest::prelude::*;
use suzieq_launch::config::SuzieqConfig;
use suzieq_launch::launch::{resolve, resolve_value};
use suzieq_launch::schema::{API_KEY_ENV, API_KEY_FIELD, ENDPOINT_ENV, ENDPOINT_FIELD};
use suzieq_launch_test_utils::builders::RawConfigBuilder;

fn value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,40}"
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{1,4}"
}

proptest! {
    #[test]
    fn valid_input_maps_fields_onto_env(endpoint in value_strategy(), key in value_strategy()) {
        let raw = RawConfigBuilder::new()
            .endpoint(endpoint.clone())
            .api_key(key.clone())
            .build();
        let before = raw.clone();

        let first = resolve_value(&raw).unwrap();
        let second = resolve_value(&raw).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&raw, &before);
        prop_assert_eq!(first.command.as_str(), "python");
        prop_assert_eq!(first.args.clone(), vec!["main.py".to_string()]);
        prop_assert_eq!(first.env.len(), 2);
        prop_assert_eq!(&first.env[ENDPOINT_ENV], &endpoint);
        prop_assert_eq!(&first.env[API_KEY_ENV], &key);
    }

    #[test]
    fn whitespace_endpoint_is_passed_through(endpoint in whitespace_strategy(), key in value_strategy()) {
        let raw = RawConfigBuilder::new().endpoint(endpoint.clone()).api_key(key).build();
        let desc = resolve_value(&raw).unwrap();
        prop_assert_eq!(&desc.env[ENDPOINT_ENV], &endpoint);
    }

    #[test]
    fn empty_endpoint_never_resolves(key in value_strategy()) {
        let raw = RawConfigBuilder::new().endpoint("").api_key(key).build();
        let err = resolve_value(&raw).unwrap_err();
        prop_assert!(err.involves(ENDPOINT_FIELD));
    }

    #[test]
    fn non_string_key_never_resolves(n in any::<i64>(), flag in any::<bool>()) {
        let number = RawConfigBuilder::new().api_key(n).build();
        let boolean = RawConfigBuilder::new().api_key(flag).build();

        prop_assert!(resolve_value(&number).unwrap_err().involves(API_KEY_FIELD));
        prop_assert!(resolve_value(&boolean).unwrap_err().involves(API_KEY_FIELD));
    }

    #[test]
    fn smart_constructor_matches_raw_validation(endpoint in ".{0,12}", key in ".{0,12}") {
        let direct = SuzieqConfig::new(endpoint.clone(), key.clone());
        let raw = RawConfigBuilder::new().endpoint(endpoint).api_key(key).build();

        match (direct, resolve_value(&raw)) {
            (Ok(cfg), Ok(desc)) => prop_assert_eq!(resolve(&cfg), desc),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "disagreement: {:?} vs {:?}", a, b),
        }
    }
}
