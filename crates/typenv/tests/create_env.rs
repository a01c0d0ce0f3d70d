#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
use {
    rstest::rstest,
    std::collections::HashMap,
    typenv::{
        Reason, TypedEnv, ValidationError, as_boolean, as_enum, as_number, as_string,
        create_env, create_env_from, field, from_fn, typed_env,
    },
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn store() -> HashMap<String, String> {
    [
        ("TEST_STRING", "Hello"),
        ("TEST_NUMBER", "42"),
        ("TEST_BOOLEAN", "true"),
        ("TEST_ENUM", "option1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

typed_env! {
    #[derive(Debug, Clone, PartialEq)]
    struct TestEnv {
        test_string: String = "TEST_STRING" => as_string(),
        test_number: f64 = "TEST_NUMBER" => as_number(),
        test_boolean: bool = "TEST_BOOLEAN" => as_boolean(),
        test_enum: &'static str = "TEST_ENUM" => as_enum(["option1", "option2", "option3"]),
    }
}

#[test]
fn validates_and_returns_environment_variables() {
    init_tracing();
    let env = TestEnv::load_from(&store()).unwrap();

    assert_eq!(env.test_string, "Hello");
    assert_eq!(env.test_number, 42.0);
    assert!(env.test_boolean);
    assert_eq!(env.test_enum, "option1");
}

#[test]
fn tuple_schema_matches_record() {
    let schema = (
        field("TEST_STRING", as_string()),
        field("TEST_NUMBER", as_number()),
        field("TEST_BOOLEAN", as_boolean()),
        field("TEST_ENUM", as_enum(["option1", "option2", "option3"])),
    );
    let env = create_env_from(&schema, &store()).unwrap();
    let (string, number, boolean, choice) = &*env;
    let record = TestEnv::load_from(&store()).unwrap();

    assert_eq!(*string, record.test_string);
    assert_eq!(*number, record.test_number);
    assert_eq!(*boolean, record.test_boolean);
    assert_eq!(*choice, record.test_enum);
}

#[test]
fn undefined_variable_fails() {
    let err = create_env_from(&field("UNDEFINED_VAR", as_string()), &store()).unwrap_err();
    assert_eq!(err, ValidationError::not_defined("UNDEFINED_VAR"));
    assert_eq!(err.to_string(), "Env var UNDEFINED_VAR is not defined");
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t  ")]
#[case("\u{FEFF}")]
fn blank_variable_fails(#[case] raw: &str) {
    let mut env = store();
    env.insert("TEST_STRING".into(), raw.into());
    let err = TestEnv::load_from(&env).unwrap_err();
    assert_eq!(err.key, "TEST_STRING");
    assert_eq!(err.reason, Reason::NotDefined);
}

#[test]
fn empty_schema_loads() {
    assert!(create_env_from(&(), &store()).is_ok());
}

#[test]
fn invalid_number_fails() {
    let env = [("INVALID_NUMBER", "not_a_number")];
    let err = create_env_from(&field("INVALID_NUMBER", as_number()), &env).unwrap_err();
    assert_eq!(err.to_string(), "Env var INVALID_NUMBER must be a number");
}

#[test]
fn invalid_boolean_fails() {
    let env = [("INVALID_BOOLEAN", "not_a_boolean")];
    let err = create_env_from(&field("INVALID_BOOLEAN", as_boolean()), &env).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Env var INVALID_BOOLEAN must be a boolean (true/false)"
    );
}

#[test]
fn invalid_enum_value_fails() {
    let mut env = store();
    env.insert("TEST_ENUM".into(), "invalid_option".into());
    let err = TestEnv::load_from(&env).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Env var TEST_ENUM must be one of option1/option2/option3"
    );
}

#[test]
fn first_failure_in_declaration_order_wins() {
    let env = [("TEST_NUMBER", "x"), ("TEST_BOOLEAN", "y")];
    let schema = (
        field("TEST_NUMBER", as_number()),
        field("TEST_BOOLEAN", as_boolean()),
    );
    let err = create_env_from(&schema, &env).unwrap_err();
    assert_eq!(err.key, "TEST_NUMBER");

    let reversed = (
        field("TEST_BOOLEAN", as_boolean()),
        field("TEST_NUMBER", as_number()),
    );
    let err = create_env_from(&reversed, &env).unwrap_err();
    assert_eq!(err.key, "TEST_BOOLEAN");
}

#[test]
fn loading_twice_yields_equal_records() {
    let first = TestEnv::load_from(&store()).unwrap();
    let second = TestEnv::load_from(&store()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mutating_a_copy_leaves_the_record_unchanged() {
    let env: TypedEnv<TestEnv> = TestEnv::load_from(&store()).unwrap();
    let mut copy = env.get().clone();
    copy.test_number = 7.0;
    copy.test_string.clear();

    assert_eq!(env.test_number, 42.0);
    assert_eq!(env.test_string, "Hello");
}

#[test]
fn custom_validator_in_schema() {
    let port = from_fn(|key, value: &str| {
        value
            .parse::<u16>()
            .map_err(|_| ValidationError::custom(key, "must be a port number"))
    });
    let env = [("PORT", "70000")];
    let err = create_env_from(&field("PORT", &port), &env).unwrap_err();
    assert_eq!(err.to_string(), "Env var PORT must be a port number");

    let env = [("PORT", "8080")];
    assert_eq!(*create_env_from(&field("PORT", &port), &env).unwrap(), 8080);
}

#[test]
fn process_environment_is_the_default_source() {
    init_tracing();
    let err = create_env(&field("TYPENV_NONEXISTENT_XYZ_4A1B", as_string())).unwrap_err();
    assert_eq!(err.reason, Reason::NotDefined);
    assert!(TestEnv::load().is_err());

    let name = create_env(&field("CARGO_PKG_NAME", as_string())).unwrap();
    assert_eq!(name.as_str(), env!("CARGO_PKG_NAME"));
}
