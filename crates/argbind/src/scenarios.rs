//! Host-level behaviour: a screen-like host declaring one binding per kind.

use std::sync::Arc;

use proptest::prelude::*;

use crate::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

struct ArgumentsFragment {
    arguments: Arc<ArgumentSlot>,
    integer: Arg<i32>,
    boolean: Arg<bool>,
    string: Arg<String>,
    long: Arg<i64>,
    double: Arg<f64>,
    float: Arg<f32>,
}

impl ArgumentsFragment {
    fn explicit() -> BindingResult<Self> {
        let arguments = Arc::new(ArgumentSlot::new());
        let binder = Binder::new(&arguments);
        Ok(Self {
            integer: binder.bind("integer")?,
            boolean: binder.bind("boolean")?,
            string: binder.bind("string")?,
            long: binder.bind("long")?,
            double: binder.bind("double")?,
            float: binder.bind("float")?,
            arguments,
        })
    }

    fn inferred() -> BindingResult<Self> {
        let arguments = Arc::new(ArgumentSlot::new());
        let binder = Binder::new(&arguments);
        Ok(Self {
            integer: binder.bind(field_key!(integer))?,
            boolean: binder.bind(field_key!(boolean))?,
            string: binder.bind(field_key!(string))?,
            long: binder.bind(field_key!(long))?,
            double: binder.bind(field_key!(double))?,
            float: binder.bind(field_key!(float))?,
            arguments,
        })
    }

    fn with_defaults() -> BindingResult<Self> {
        let arguments = Arc::new(ArgumentSlot::new());
        let binder = Binder::new(&arguments);
        Ok(Self {
            integer: binder.bind_or("integer", 4)?,
            boolean: binder.bind_or("boolean", true)?,
            string: binder.bind_or("string", "flutter shy".to_string())?,
            long: binder.bind_or("long", 7)?,
            double: binder.bind_or("double", 1.23)?,
            float: binder.bind_or("float", 4.56)?,
            arguments,
        })
    }
}

impl ArgumentHost for ArgumentsFragment {
    fn argument_slot(&self) -> &Arc<ArgumentSlot> {
        &self.arguments
    }
}

struct OptionalArgumentsFragment {
    arguments: Arc<ArgumentSlot>,
    integer: OptionalArg<i32>,
    boolean: OptionalArg<bool>,
    string: OptionalArg<String>,
    long: OptionalArg<i64>,
    double: OptionalArg<f64>,
    float: OptionalArg<f32>,
}

impl OptionalArgumentsFragment {
    fn new() -> BindingResult<Self> {
        let arguments = Arc::new(ArgumentSlot::new());
        let binder = Binder::new(&arguments);
        Ok(Self {
            integer: binder.bind_optional("integer")?,
            boolean: binder.bind_optional("boolean")?,
            string: binder.bind_optional("string")?,
            long: binder.bind_optional("long")?,
            double: binder.bind_optional("double")?,
            float: binder.bind_optional("float")?,
            arguments,
        })
    }
}

impl ArgumentHost for OptionalArgumentsFragment {
    fn argument_slot(&self) -> &Arc<ArgumentSlot> {
        &self.arguments
    }
}

fn pinkie_pie_arguments() -> Arguments {
    let args = Arguments::new();
    args.put_int("integer", 33);
    args.put_bool("boolean", false);
    args.put_string("string", "pinkie pie");
    args.put_long("long", 14);
    args.put_double("double", 3.14);
    args.put_float("float", 2.71);
    args
}

fn assert_pinkie_pie(fragment: &ArgumentsFragment) {
    assert_eq!(fragment.integer.get().unwrap(), 33);
    assert!(!fragment.boolean.get().unwrap());
    assert_eq!(fragment.string.get().unwrap(), "pinkie pie");
    assert_eq!(fragment.long.get().unwrap(), 14);
    assert_eq!(fragment.double.get().unwrap(), 3.14);
    assert_eq!(fragment.float.get().unwrap(), 2.71);
}

fn assert_defaults(fragment: &ArgumentsFragment) {
    assert_eq!(fragment.integer.get().unwrap(), 4);
    assert!(fragment.boolean.get().unwrap());
    assert_eq!(fragment.string.get().unwrap(), "flutter shy");
    assert_eq!(fragment.long.get().unwrap(), 7);
    assert_eq!(fragment.double.get().unwrap(), 1.23);
    assert_eq!(fragment.float.get().unwrap(), 4.56);
}

fn assert_all_none(fragment: &OptionalArgumentsFragment) {
    assert_eq!(fragment.integer.get().unwrap(), None);
    assert_eq!(fragment.boolean.get().unwrap(), None);
    assert_eq!(fragment.string.get().unwrap(), None);
    assert_eq!(fragment.long.get().unwrap(), None);
    assert_eq!(fragment.double.get().unwrap(), None);
    assert_eq!(fragment.float.get().unwrap(), None);
}

// ---------------------------------------------------------------------------
// Required bindings
// ---------------------------------------------------------------------------

#[test]
fn explicit_required_bindings() {
    init_tracing();
    let fragment = ArgumentsFragment::explicit().unwrap();
    fragment.set_arguments(arguments! {
        "integer" => 12,
        "boolean" => true,
        "string" => "rainbow dash",
        "long" => 37i64,
        "double" => 1.25,
        "float" => 2.5f32,
    });

    assert_eq!(fragment.integer.get().unwrap(), 12);
    assert!(fragment.boolean.get().unwrap());
    assert_eq!(fragment.string.get().unwrap(), "rainbow dash");
    assert_eq!(fragment.long.get().unwrap(), 37);
    assert_eq!(fragment.double.get().unwrap(), 1.25);
    assert_eq!(fragment.float.get().unwrap(), 2.5);
}

#[test]
fn inferred_required_bindings() {
    init_tracing();
    let fragment = ArgumentsFragment::inferred().unwrap();
    fragment.set_arguments(pinkie_pie_arguments());
    assert_pinkie_pie(&fragment);
}

#[test]
fn explicit_and_inferred_keys_agree() {
    let explicit = ArgumentsFragment::explicit().unwrap();
    let inferred = ArgumentsFragment::inferred().unwrap();
    assert_eq!(explicit.integer.key(), inferred.integer.key());
    assert_eq!(explicit.float.key(), inferred.float.key());

    explicit.set_arguments(pinkie_pie_arguments());
    inferred.set_arguments(pinkie_pie_arguments());
    assert_pinkie_pie(&explicit);
    assert_pinkie_pie(&inferred);
}

#[test]
fn required_binding_fails_until_store_has_key() {
    init_tracing();
    let fragment = ArgumentsFragment::explicit().unwrap();

    for _ in 0..2 {
        let err = fragment.integer.get().unwrap_err();
        assert_eq!(
            err,
            BindingError::MissingArgument {
                key: "integer".into(),
                kind: crate::ValueKind::Int,
            }
        );
    }

    fragment.set_arguments(Arguments::empty());
    assert!(fragment.integer.get().is_err());

    fragment.set_arguments(pinkie_pie_arguments());
    assert_eq!(fragment.integer.get().unwrap(), 33);

    fragment.set_arguments(arguments! { "integer" => 12 });
    assert_eq!(fragment.integer.get().unwrap(), 33);
    fragment.clear_arguments();
    assert_eq!(fragment.integer.get().unwrap(), 33);
}

#[test]
fn required_binding_rejects_other_kind() {
    let fragment = ArgumentsFragment::explicit().unwrap();
    fragment.set_arguments(arguments! { "long" => 14 });
    let err = fragment.long.get().unwrap_err();
    assert!(matches!(err, BindingError::TypeMismatch { .. }));
    assert!(!fragment.long.is_resolved());
}

// ---------------------------------------------------------------------------
// Required bindings with defaults
// ---------------------------------------------------------------------------

#[test]
fn defaults_without_store() {
    init_tracing();
    let fragment = ArgumentsFragment::with_defaults().unwrap();
    assert!(!fragment.has_arguments());
    assert_defaults(&fragment);
}

#[test]
fn defaults_with_empty_store() {
    let fragment = ArgumentsFragment::with_defaults().unwrap();
    fragment.set_arguments(Arguments::empty());
    assert_defaults(&fragment);
}

#[test]
fn defaults_with_unrelated_store() {
    let fragment = ArgumentsFragment::with_defaults().unwrap();
    fragment.set_arguments(arguments! { "unrelated" => "value" });
    assert_defaults(&fragment);
}

#[test]
fn defaults_overridden_by_store() {
    let fragment = ArgumentsFragment::with_defaults().unwrap();
    fragment.set_arguments(pinkie_pie_arguments());
    assert_pinkie_pie(&fragment);
}

// ---------------------------------------------------------------------------
// Optional bindings
// ---------------------------------------------------------------------------

#[test]
fn optional_bindings_without_store() {
    let fragment = OptionalArgumentsFragment::new().unwrap();
    assert_all_none(&fragment);
}

#[test]
fn optional_bindings_with_empty_store() {
    let fragment = OptionalArgumentsFragment::new().unwrap();
    fragment.set_arguments(Arguments::new());
    assert_all_none(&fragment);
}

#[test]
fn optional_bindings_with_arguments() {
    let fragment = OptionalArgumentsFragment::new().unwrap();
    fragment.set_arguments(pinkie_pie_arguments());

    assert_eq!(fragment.integer.get().unwrap(), Some(33));
    assert_eq!(fragment.boolean.get().unwrap(), Some(false));
    assert_eq!(fragment.string.get().unwrap().as_deref(), Some("pinkie pie"));
    assert_eq!(fragment.long.get().unwrap(), Some(14));
    assert_eq!(fragment.double.get().unwrap(), Some(3.14));
    assert_eq!(fragment.float.get().unwrap(), Some(2.71));
}

// ---------------------------------------------------------------------------
// Host isolation
// ---------------------------------------------------------------------------

#[test]
fn hosts_do_not_share_state() {
    let first = ArgumentsFragment::inferred().unwrap();
    let second = ArgumentsFragment::inferred().unwrap();
    first.set_arguments(arguments! { "integer" => 1 });
    second.set_arguments(arguments! { "integer" => 2 });
    assert_eq!(first.integer.get().unwrap(), 1);
    assert_eq!(second.integer.get().unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Store states in which a key is not found.
#[derive(Clone, Copy, Debug)]
enum MissingState {
    Absent,
    Empty,
    OtherKeys,
}

fn missing_state() -> impl Strategy<Value = MissingState> {
    prop_oneof![
        Just(MissingState::Absent),
        Just(MissingState::Empty),
        Just(MissingState::OtherKeys),
    ]
}

fn slot_in(state: MissingState, key: &str) -> Arc<ArgumentSlot> {
    let slot = Arc::new(ArgumentSlot::new());
    match state {
        MissingState::Absent => {}
        MissingState::Empty => {
            slot.attach_store(Arguments::empty());
        }
        MissingState::OtherKeys => {
            slot.attach_store(arguments! { format!("{key}_other") => 1 });
        }
    }
    slot
}

/// One round-trip property per stored type: a value written under `key` is
/// read back unchanged by a required binding.
macro_rules! round_trip_properties {
    ($($name:ident: $ty:ty => $values:expr;)*) => {
        proptest! {
            $(
                #[test]
                fn $name(key in key_strategy(), value in $values) {
                    let store = Arguments::new().with(key.clone(), value.clone());
                    let slot = Arc::new(ArgumentSlot::with_store(store));
                    let arg: Arg<$ty> = Binder::new(&slot).bind(key).unwrap();
                    prop_assert_eq!(arg.get().unwrap(), value);
                }
            )*
        }
    };
}

round_trip_properties! {
    stored_int_round_trips: i32 => any::<i32>();
    stored_bool_round_trips: bool => any::<bool>();
    stored_string_round_trips: String => ".{0,24}";
    stored_long_round_trips: i64 => any::<i64>();
    stored_double_round_trips: f64 => -1.0e12f64..1.0e12;
    stored_float_round_trips: f32 => -1.0e6f32..1.0e6;
}

proptest! {
    #[test]
    fn default_applies_in_every_missing_state(
        key in key_strategy(),
        state in missing_state(),
        default in any::<i32>(),
    ) {
        let slot = slot_in(state, &key);
        let arg: Arg<i32> = Binder::new(&slot).bind_or(key.as_str(), default).unwrap();
        prop_assert_eq!(arg.get().unwrap(), default);
    }

    #[test]
    fn optional_is_none_in_every_missing_state(key in key_strategy(), state in missing_state()) {
        let slot = slot_in(state, &key);
        let arg: OptionalArg<f32> = Binder::new(&slot).bind_optional(key.as_str()).unwrap();
        prop_assert_eq!(arg.get().unwrap(), None);
    }

    #[test]
    fn required_is_missing_in_every_missing_state(key in key_strategy(), state in missing_state()) {
        let slot = slot_in(state, &key);
        let arg: Arg<bool> = Binder::new(&slot).bind(key.as_str()).unwrap();
        let is_missing = matches!(arg.get(), Err(BindingError::MissingArgument { .. }));
        prop_assert!(is_missing);
        prop_assert!(!arg.is_resolved());
    }
}
