#![cfg(test)]

use crate::{
    codec::{self, JSON, POT, TEXT},
    de::text::from_str,
    ser::text::{
        to_string, to_string_compact, to_string_pretty, to_vec_compact, to_vec_pretty,
        TextConfig, TextConfigStyle, TextWriter,
    },
    BoxError, Codec, Data, Dict, DictConvertible, Error, Number, Options, Registry, Value,
    CLASSNAME_KEY,
};
use std::sync::Arc;

use crate as dict_intermediate;

const CODINGS: [&str; 3] = [JSON, POT, TEXT];

#[derive(Debug, Default, Clone, PartialEq, DictConvertible)]
struct Point {
    x: i64,
    y: i64,
    subpoints: Vec<Arc<Point>>,
}

impl Point {
    fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            subpoints: vec![],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, DictConvertible)]
struct Label {
    text: String,
}

#[derive(Debug, Default, Clone, PartialEq, DictConvertible)]
struct Marker;

#[derive(Debug, Default, Clone, PartialEq, DictConvertible)]
struct Settings {
    #[dict_intermediate(rename = "display-name")]
    name: String,
    #[dict_intermediate(default)]
    volume: u8,
    #[dict_intermediate(ignore)]
    cache: Vec<u64>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Default)]
struct Strict {
    value: i64,
}

impl DictConvertible for Strict {
    fn to_dict(&self) -> Dict {
        Dict::new().with("value", self.value)
    }

    fn from_dict(mut self, mut dict: Dict) -> Result<Self, BoxError> {
        self.value = dict.take("value")?;
        if self.value < 0 {
            return Err(format!("negative value: {}", self.value).into());
        }
        Ok(self)
    }
}

#[derive(Debug, Default, Clone, DictConvertible)]
struct Singleton {
    label: String,
}

lazy_static::lazy_static! {
    static ref SINGLETON: Arc<Singleton> = Arc::new(Singleton {
        label: "only".to_owned(),
    });
}

fn sample() -> Point {
    Point {
        x: 1,
        y: -2,
        subpoints: vec![Arc::new(Point::new(3, 4)), Arc::new(Point::new(5, 6))],
    }
}

fn points_registry() -> Registry {
    let registry = Registry::default();
    registry.register_named::<Point>("pkg.Point");
    registry.register_named::<Label>("pkg.Label");
    registry
}

#[test]
fn test_scalars_roundtrip() {
    let data = Data::sequence_from(vec![
        Data::Null,
        Data::Bool(true),
        Data::from(42u64),
        Data::from(-7i64),
        Data::from(1.5),
        Data::from("hello"),
    ]);
    for coding in CODINGS {
        let options = Options::default().with_coding(coding);
        let bytes = crate::dumps(data.clone(), &options).unwrap();
        let loaded = crate::loads(&bytes, &options).unwrap();
        assert_eq!(loaded, data, "coding: {}", coding);
    }
}

#[test]
fn test_json_plain_data() {
    let options = Options::default();
    let bytes = crate::dumps(Data::sequence_from(vec![3, 1, 2]), &options).unwrap();
    assert_eq!(bytes, b"[3,1,2]");

    let loaded = crate::loads(r#"{"b":[true,null],"a":1}"#, &options).unwrap();
    assert_eq!(
        loaded,
        Data::mapping_from(vec![
            ("b", Data::sequence_from(vec![Data::Bool(true), Data::Null])),
            ("a", Data::from(1u64)),
        ])
    );
    let keys = loaded
        .as_mapping()
        .unwrap()
        .iter()
        .map(|(key, _)| key.as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_dumps_tagged_object() {
    let registry = points_registry();
    let options = Options::default();
    let bytes = crate::dumps_with(Arc::new(sample()), &options, &registry).unwrap();
    assert!(bytes.starts_with(br#"{"__classname__":"pkg.Point","x":1,"y":-2"#));
    let json = serde_json::from_slice::<serde_json::Value>(&bytes).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "__classname__": "pkg.Point",
            "x": 1,
            "y": -2,
            "subpoints": [
                {"__classname__": "pkg.Point", "x": 3, "y": 4, "subpoints": []},
                {"__classname__": "pkg.Point", "x": 5, "y": 6, "subpoints": []},
            ],
        })
    );
}

#[test]
fn test_loads_tagged_object() {
    let registry = points_registry();
    let options = Options::default();
    let input = r#"{"__classname__": "pkg.Point", "x": 1, "y": 2, "subpoints": []}"#;
    let loaded = crate::loads_with(input, &options, &registry).unwrap();
    assert!(loaded.is::<Point>());
    let point = loaded.downcast_ref::<Point>().unwrap();
    assert_eq!(point, &Point::new(1, 2));

    let point = crate::loads_as_with::<Arc<Point>>(input, &options, &registry).unwrap();
    assert_eq!(*point, Point::new(1, 2));
}

#[test]
fn test_point_scenarios() {
    let registry = points_registry();
    let options = Options::default();
    let point = crate::loads_as_with::<Arc<Point>>(
        r#"{"__classname__":"pkg.Point","x":200,"y":100,"subpoints":[]}"#,
        &options,
        &registry,
    )
    .unwrap();
    assert_eq!(*point, Point::new(200, 100));

    let bytes = crate::dumps_with(Arc::new(Point::new(3, 2)), &options, &registry).unwrap();
    let decoded = codec::find(JSON).unwrap().decode(&bytes, &options).unwrap();
    assert_eq!(
        decoded,
        Value::tagged("pkg.Point")
            .property("x", 3u64)
            .property("y", 2u64)
            .property("subpoints", Value::sequence())
    );
}

#[test]
fn test_objects_roundtrip() {
    let registry = points_registry();
    let data = Data::mapping_from(vec![
        ("origin", Data::from(Arc::new(sample()))),
        (
            "labels",
            Data::sequence_from(vec![
                Arc::new(Label {
                    text: "a".to_owned(),
                }),
                Arc::new(Label {
                    text: "b".to_owned(),
                }),
            ]),
        ),
    ]);
    for coding in CODINGS {
        let options = Options::default().with_coding(coding);
        let bytes = crate::dumps_with(data.clone(), &options, &registry).unwrap();
        let loaded = crate::loads_with(&bytes, &options, &registry).unwrap();
        assert_eq!(loaded, data, "coding: {}", coding);

        let mut dict = loaded.into_typed::<Dict>().unwrap();
        let origin = dict.take::<Arc<Point>>("origin").unwrap();
        assert_eq!(*origin, sample());
        let labels = dict.take::<Vec<Arc<Label>>>("labels").unwrap();
        assert_eq!(labels[0].text, "a");
        assert_eq!(labels[1].text, "b");
    }
}

#[test]
fn test_custom_loader_returns_singleton() {
    Registry::global()
        .register_custom_loader::<Singleton, _>(|_| Ok(Data::from(Arc::clone(&SINGLETON))));
    let data = Data::sequence_from(vec![Arc::clone(&SINGLETON), Arc::clone(&SINGLETON)]);
    for coding in CODINGS {
        let options = Options::default().with_coding(coding);
        let bytes = crate::dumps(data.clone(), &options).unwrap();
        let loaded = crate::loads_as::<Vec<Arc<Singleton>>>(&bytes, &options).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|item| Arc::ptr_eq(item, &SINGLETON)));
    }
}

#[test]
fn test_custom_loader_takes_precedence() {
    let registry = Registry::default();
    registry.register_named::<Label>("label");
    registry.register_custom_loader::<Label, _>(|mut dict| {
        let text = dict.take::<String>("text")?;
        Ok(Data::object(Label {
            text: text.to_uppercase(),
        }))
    });
    assert!(registry.resolve("label").unwrap().is_loader());
    assert_eq!(registry.registered_identifier::<Label>().as_deref(), Some("label"));

    let options = Options::default();
    let label = Arc::new(Label {
        text: "shout".to_owned(),
    });
    let bytes = crate::dumps_with(label, &options, &registry).unwrap();
    assert_eq!(bytes, br#"{"__classname__":"label","text":"shout"}"#);
    let loaded = crate::loads_as_with::<Arc<Label>>(&bytes, &options, &registry).unwrap();
    assert_eq!(loaded.text, "SHOUT");

    registry.register_named::<Label>("label");
    assert!(registry.resolve("label").unwrap().is_loader());
}

#[test]
fn test_custom_loader_claims_named_entry() {
    let registry = Registry::default();
    let identifier = std::any::type_name::<Label>();
    registry.register_custom_loader_named(identifier, |_| Ok(Data::from("first")));
    registry.register_custom_loader::<Label, _>(|_| Ok(Data::from("second")));
    assert_eq!(registry.registered_identifier::<Label>().as_deref(), Some(identifier));

    let value = crate::escape_with(&Data::object(Label::default()), &registry);
    assert_eq!(crate::unescape_with(value, &registry).unwrap(), Data::from("second"));

    registry.unregister::<Label>();
    assert!(registry.resolve(identifier).unwrap_err().is_unresolved_type());
}

#[test]
fn test_custom_loader_displaces_other_type() {
    let registry = Registry::default();
    let identifier = std::any::type_name::<Label>();
    registry.register_named::<Point>(identifier);
    registry.register_custom_loader::<Label, _>(|_| Ok(Data::from("label")));
    assert!(!registry.is_registered::<Point>());
    assert!(registry.resolve(identifier).unwrap().is_loader());

    let value = crate::escape_with(&Data::object(Label::default()), &registry);
    assert_eq!(crate::unescape_with(value, &registry).unwrap(), Data::from("label"));
}

#[test]
fn test_named_loader_without_type() {
    let registry = Registry::default();
    registry.register_custom_loader_named("legacy.Point", |mut dict| {
        let x = dict.take::<i64>("x")?;
        Ok(Data::object(Point::new(x, x)))
    });
    let loaded = crate::loads_with(
        r#"{"x": 9, "__classname__": "legacy.Point"}"#,
        &Options::default(),
        &registry,
    )
    .unwrap();
    assert_eq!(loaded.downcast_ref::<Point>(), Some(&Point::new(9, 9)));
}

#[test]
fn test_non_string_keys() {
    let data = Data::mapping_from(vec![(Data::from(1u64), "one"), (Data::from(-2i64), "two")]);
    for coding in [POT, TEXT] {
        let options = Options::default().with_coding(coding);
        let bytes = crate::dumps(data.clone(), &options).unwrap();
        assert_eq!(crate::loads(&bytes, &options).unwrap(), data, "coding: {}", coding);
    }
    let error = crate::dumps(data, &Options::default()).unwrap_err();
    assert!(error.is_malformed_payload());
}

#[test]
fn test_composite_keys() {
    let registry = points_registry();
    let data = Data::mapping_from(vec![
        (Data::from(Arc::new(Point::new(1, 2))), "point"),
        (Data::sequence_from(vec![1u64, 2]), "pair"),
    ]);
    for coding in [POT, TEXT] {
        let options = Options::default().with_coding(coding);
        let bytes = crate::dumps_with(data.clone(), &options, &registry).unwrap();
        let loaded = crate::loads_with(&bytes, &options, &registry).unwrap();
        assert_eq!(loaded, data, "coding: {}", coding);
        let (key, _) = &loaded.as_mapping().unwrap()[0];
        assert_eq!(key.downcast_ref::<Point>(), Some(&Point::new(1, 2)));
    }
    let error = crate::dumps_with(data, &Options::default(), &registry).unwrap_err();
    assert!(error.is_malformed_payload());
}

#[test]
fn test_json_rejects_non_finite_float() {
    let error = crate::dumps(f64::NAN, &Options::default()).unwrap_err();
    assert!(error.is_malformed_payload());
    let options = Options::default().with_coding(POT);
    let bytes = crate::dumps(f64::INFINITY, &options).unwrap();
    assert_eq!(crate::loads(&bytes, &options).unwrap(), Data::from(f64::INFINITY));
}

#[test]
fn test_invalid_coding() {
    let options = Options::default().with_encoder("bogus");
    assert!(crate::dumps(Data::Null, &options)
        .unwrap_err()
        .is_invalid_coding());
    let options = Options::default().with_decoder("bogus");
    assert!(crate::loads("null", &options).unwrap_err().is_invalid_coding());
}

#[test]
fn test_unresolved_type() {
    let registry = Registry::default();
    let error = crate::loads_with(
        r#"{"__classname__":"no.such.Type","x":1}"#,
        &Options::default(),
        &registry,
    )
    .unwrap_err();
    assert!(matches!(error, Error::UnresolvedType(identifier) if identifier == "no.such.Type"));
}

#[test]
fn test_malformed_classname() {
    let registry = points_registry();
    let options = Options::default();
    let error = crate::loads_with(r#"{"__classname__":5}"#, &options, &registry).unwrap_err();
    assert!(error.is_malformed_payload());

    let options = Options::default().with_coding(TEXT);
    let error = crate::loads_with(
        r#"{"__classname__": "pkg.Point", 1_u64: 2_u64}"#,
        &options,
        &registry,
    )
    .unwrap_err();
    assert!(error.is_malformed_payload());
}

#[test]
fn test_reconstruction_failure() {
    let registry = Registry::default();
    registry.register_named::<Strict>("strict");
    let options = Options::default();

    let error =
        crate::loads_with(r#"{"__classname__":"strict","other":1}"#, &options, &registry)
            .unwrap_err();
    assert!(error.is_reconstruction_failure());
    let source = std::error::Error::source(&error).unwrap();
    assert!(matches!(
        source.downcast_ref::<Error>(),
        Some(Error::MissingField(name)) if name == "value"
    ));

    let error =
        crate::loads_with(r#"{"__classname__":"strict","value":-1}"#, &options, &registry)
            .unwrap_err();
    assert!(error.to_string().contains("negative value: -1"));

    let loaded = crate::loads_as_with::<Arc<Strict>>(
        r#"{"__classname__":"strict","value":3}"#,
        &options,
        &registry,
    )
    .unwrap();
    assert_eq!(loaded.value, 3);
}

#[test]
fn test_loader_failure() {
    let registry = Registry::default();
    registry.register_custom_loader_named("broken", |_| Err("loader refused".into()));
    let error = crate::loads_with(r#"{"__classname__":"broken"}"#, &Options::default(), &registry)
        .unwrap_err();
    match error {
        Error::ReconstructionFailure { identifier, source } => {
            assert_eq!(identifier, "broken");
            assert_eq!(source.to_string(), "loader refused");
        }
        error => panic!("unexpected error: {}", error),
    }
}

#[test]
fn test_default_identifier() {
    let registry = Registry::default();
    let value = crate::escape_with(&Data::object(Marker), &registry);
    assert_eq!(value.classname(), Some(std::any::type_name::<Marker>()));

    registry.register::<Marker>();
    let loaded = crate::unescape_with(value, &registry).unwrap();
    assert!(loaded.is::<Marker>());
}

#[test]
fn test_escape_unescape() {
    let registry = points_registry();
    let value = crate::escape_with(&Data::object(Point::new(1, 2)), &registry);
    assert_eq!(
        value,
        Value::tagged("pkg.Point")
            .property("x", 1i64)
            .property("y", 2i64)
            .property("subpoints", Value::sequence())
    );
    assert_eq!(value.get(CLASSNAME_KEY), Some(&Value::string("pkg.Point")));

    let loaded = crate::unescape_with(value, &registry).unwrap();
    assert_eq!(loaded, Data::object(Point::new(1, 2)));
}

#[test]
fn test_registry_overwrite() {
    let registry = Registry::default();
    registry.register_named::<Point>("shared");
    registry.register_named::<Label>("shared");
    assert!(!registry.is_registered::<Point>());
    assert!(registry.is_registered::<Label>());
    let loaded = registry
        .resolve("shared")
        .unwrap()
        .reconstruct("shared", Dict::new().with("text", "t"))
        .unwrap();
    assert!(loaded.is::<Label>());

    registry.register_named::<Point>("first");
    registry.register_named::<Point>("second");
    assert_eq!(registry.registered_identifier::<Point>().as_deref(), Some("second"));
    assert!(registry.resolve("first").unwrap_err().is_unresolved_type());

    registry.unregister::<Point>();
    assert!(registry.resolve("second").unwrap_err().is_unresolved_type());
    registry.unregister_named("shared");
    assert!(!registry.is_registered::<Label>());
    registry.register::<Label>();
    registry.unregister_all();
    assert!(!registry.is_registered::<Label>());
}

#[test]
fn test_registry_concurrent_access() {
    let registry = points_registry();
    std::thread::scope(|scope| {
        for index in 0..8 {
            let registry = &registry;
            scope.spawn(move || {
                let identifier = format!("point.{}", index);
                registry.register_custom_loader_named(&identifier, move |_| {
                    Ok(Data::object(Point::new(index, index)))
                });
                for _ in 0..100 {
                    assert!(registry.resolve("pkg.Point").is_ok());
                    assert!(registry.resolve(&identifier).is_ok());
                }
            });
        }
    });
    for index in 0..8 {
        let loaded = registry
            .resolve(&format!("point.{}", index))
            .unwrap()
            .reconstruct("point", Dict::new())
            .unwrap();
        assert_eq!(loaded.downcast_ref::<Point>(), Some(&Point::new(index, index)));
    }
}

#[test]
fn test_loader_may_use_registry() {
    let registry = Arc::new(points_registry());
    let inner = Arc::clone(&registry);
    registry.register_custom_loader_named("wrapped", move |mut dict| {
        let point = dict.take::<Data>("point")?;
        inner.register_named::<Label>("late.Label");
        Ok(point)
    });
    let loaded = crate::loads_with(
        r#"{"__classname__":"wrapped","point":{"__classname__":"pkg.Point","x":1,"y":1,"subpoints":[]}}"#,
        &Options::default(),
        &registry,
    )
    .unwrap();
    assert!(loaded.is::<Point>());
    assert!(registry.resolve("late.Label").is_ok());
}

#[test]
fn test_derive_attributes() {
    let settings = Settings {
        name: "main".to_owned(),
        volume: 11,
        cache: vec![1, 2, 3],
        tags: None,
    };
    let dict = settings.to_dict();
    assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["display-name", "volume", "tags"]);
    assert_eq!(dict.get("tags"), Some(&Data::Null));

    let loaded = Settings {
        volume: 7,
        ..Default::default()
    }
    .from_dict(Dict::new().with("display-name", "side").with("tags", vec!["a"]))
    .unwrap();
    assert_eq!(loaded.name, "side");
    assert_eq!(loaded.volume, 7);
    assert_eq!(loaded.tags, Some(vec!["a".to_owned()]));

    let error = Settings::default()
        .from_dict(Dict::new().with("volume", 1))
        .unwrap_err();
    assert!(matches!(
        error.downcast_ref::<Error>(),
        Some(Error::MissingField(name)) if name == "display-name"
    ));

    let error = Settings::default()
        .from_dict(Dict::new().with("display-name", "x").with("volume", 300))
        .unwrap_err();
    assert!(matches!(
        error.downcast_ref::<Error>(),
        Some(Error::UnexpectedData { expected: "u8", .. })
    ));

    assert!(Marker.to_dict().is_empty());
}

#[test]
fn test_dict() {
    let mut dict = Dict::new().with("a", 1).with("b", "two").with("a", 3);
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(dict.insert("b", true), Some(Data::from("two")));
    assert_eq!(dict.take_if_present::<bool>("c").unwrap(), None);
    assert_eq!(dict.take::<u8>("a").unwrap(), 3);
    assert!(matches!(dict.take::<u8>("a"), Err(Error::MissingField(_))));
    assert!(dict.take::<String>("b").is_err());
    assert!(dict.is_empty());

    let dict = vec![("x", 1), ("y", 2)].into_iter().collect::<Dict>();
    assert!(dict.contains_key("y"));
}

#[test]
fn test_number_equality() {
    assert_eq!(Number::from(1u64), Number::from(1i64));
    assert_ne!(Number::from(1u64), Number::from(1.0));
    assert_ne!(Number::from(-1i64), Number::from(u64::MAX));
    assert_eq!(Number::from(f64::NAN), Number::from(f64::NAN));
    assert_eq!(Number::from(2.5f32).as_float(), 2.5);

    assert_eq!(Number::from(7u64).as_signed_integer(), Some(7));
    assert_eq!(Number::from(u64::MAX).as_signed_integer(), None);
    assert_eq!(Number::from(-3i64).as_unsigned_integer(), None);
    assert_eq!(Number::from(3i64).as_unsigned_integer(), Some(3));
    assert_eq!(Number::from(1.0).as_unsigned_integer(), None);
}

#[test]
fn test_text_format() {
    let value = Value::mapping()
        .property("a", 1u64)
        .property(2i64, Value::sequence().item(1.5).item("q\"\n"))
        .property("n", Value::null());
    assert_eq!(
        to_string_compact(&value).unwrap(),
        r#"{"a":1_u64,2_i64:[1.5_f64,"q\"\n"],"n":null}"#
    );
    assert_eq!(
        to_string(&value, TextConfig::default().with_numbers_with_type(false)).unwrap(),
        r#"{"a":1,2:[1.5,"q\"\n"],"n":null}"#
    );
    assert_eq!(
        to_string_pretty(&Value::sequence().item(1u64).item(Value::mapping().property("k", true)))
            .unwrap(),
        "[\n  1_u64,\n  {\n    \"k\": true\n  }\n]"
    );

    let parsed = from_str(
        r#"
        {
            "a": 1_u64,
            -2: [NaN_f64, -inf, 1e3, "tab\tand \u{e9}"],
            false: {},
        }
        "#,
    )
    .unwrap();
    assert_eq!(
        parsed,
        Value::mapping()
            .property("a", 1u64)
            .property(
                -2i64,
                Value::sequence()
                    .item(f64::NAN)
                    .item(f64::NEG_INFINITY)
                    .item(1000.0)
                    .item("tab\tand \u{e9}")
            )
            .property(false, Value::mapping())
    );
    assert_eq!(
        to_vec_compact(&value).unwrap(),
        to_string_compact(&value).unwrap().into_bytes()
    );
    assert_eq!(
        to_vec_pretty(&value).unwrap(),
        to_string_pretty(&value).unwrap().into_bytes()
    );
    let inline = TextConfig::default().with_style(TextConfigStyle::pretty(None));
    assert_eq!(
        to_string(
            &Value::sequence()
                .item(1u64)
                .item(Value::mapping().property("k", true)),
            inline
        )
        .unwrap(),
        r#"[1_u64, {"k": true}]"#
    );
    let mut writer = TextWriter::new(Vec::new(), TextConfig::default());
    writer.write_value(&Value::Bool(true)).unwrap();
    assert_eq!(writer.into_inner(), b"true");

    assert!(from_str("[1_u64,").is_err());
    assert!(from_str("\"\\q\"").is_err());
}

#[test]
fn test_options() {
    let options = serde_json::from_str::<Options>(r#"{"encoder":"pot","pretty":true}"#).unwrap();
    assert_eq!(options.encoder, POT);
    assert_eq!(options.decoder, JSON);
    assert!(options.pretty);
    assert!(options.numbers_with_type);

    let options = Options::default().with_coding(JSON).with_pretty(true);
    let bytes = crate::dumps(Data::mapping_from(vec![("k", 1)]), &options).unwrap();
    assert_eq!(bytes, b"{\n  \"k\": 1\n}");
}

#[test]
fn test_codec_registration() {
    #[derive(Debug)]
    struct Shouting;

    impl Codec for Shouting {
        fn encode(&self, value: &Value, _: &Options) -> crate::error::Result<Vec<u8>> {
            let text = to_string_compact(value)?;
            Ok(text.to_uppercase().into_bytes())
        }

        fn decode(&self, input: &[u8], _: &Options) -> crate::error::Result<Value> {
            crate::de::text::from_slice(&input.to_ascii_lowercase())
        }
    }

    codec::register("shouting", Shouting);
    assert!(codec::names().contains(&"shouting".to_owned()));
    let options = Options::default().with_coding("shouting");
    let bytes = crate::dumps(Data::sequence_from(vec![true]), &options).unwrap();
    assert_eq!(bytes, b"[TRUE]");
    assert_eq!(
        crate::loads(&bytes, &options).unwrap(),
        Data::sequence_from(vec![true])
    );
    codec::unregister("shouting");
    assert!(crate::dumps(Data::Null, &options)
        .unwrap_err()
        .is_invalid_coding());
}
