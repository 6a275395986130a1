use crate::{
    de,
    error::{Error, Result},
    options::Options,
    ser,
    value::intermediate::{Number, Value},
};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

pub const JSON: &str = "json";
pub const POT: &str = "pot";
pub const TEXT: &str = "text";

lazy_static::lazy_static! {
    static ref CODECS: RwLock<HashMap<String, Arc<dyn Codec>>> = {
        let mut codecs = HashMap::<String, Arc<dyn Codec>>::default();
        codecs.insert(JSON.to_owned(), Arc::new(JsonCodec));
        codecs.insert(POT.to_owned(), Arc::new(PotCodec));
        codecs.insert(TEXT.to_owned(), Arc::new(TextCodec));
        RwLock::new(codecs)
    };
}

/// Wire encoding of intermediate trees.
pub trait Codec: Send + Sync {
    fn encode(&self, value: &Value, options: &Options) -> Result<Vec<u8>>;

    fn decode(&self, input: &[u8], options: &Options) -> Result<Value>;
}

/// Makes `codec` available under `name`, replacing any codec of that name.
pub fn register(name: impl ToString, codec: impl Codec + 'static) {
    let name = name.to_string();
    log::debug!("registered codec `{}`", name);
    CODECS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name, Arc::new(codec));
}

pub fn unregister(name: &str) {
    CODECS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(name);
}

pub fn find(name: &str) -> Result<Arc<dyn Codec>> {
    CODECS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
        .ok_or_else(|| Error::InvalidCoding(name.to_owned()))
}

pub fn names() -> Vec<String> {
    let mut result = CODECS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    result.sort();
    result
}

/// JSON via `serde_json`.
///
/// Mapping keys must be strings and floats must be finite; anything else is
/// rejected on encode instead of being coerced.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl JsonCodec {
    fn validate(value: &Value) -> Result<()> {
        match value {
            Value::Number(Number::Float(v)) if !v.is_finite() => Err(Error::MalformedPayload(
                format!("json cannot represent float {}", v),
            )),
            Value::Sequence(v) => v.iter().try_for_each(Self::validate),
            Value::Mapping(v) => v.iter().try_for_each(|(key, value)| {
                if key.as_str().is_none() {
                    return Err(Error::MalformedPayload(format!(
                        "json mapping keys must be strings, found {}",
                        key.kind()
                    )));
                }
                Self::validate(value)
            }),
            _ => Ok(()),
        }
    }
}

impl Codec for JsonCodec {
    fn encode(&self, value: &Value, options: &Options) -> Result<Vec<u8>> {
        Self::validate(value)?;
        let result = if options.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        result.map_err(|e| Error::Message(format!("{}", e)))
    }

    fn decode(&self, input: &[u8], _: &Options) -> Result<Value> {
        serde_json::from_slice(input).map_err(|e| Error::Message(format!("{}", e)))
    }
}

/// Compact self-describing binary via `pot`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PotCodec;

impl Codec for PotCodec {
    fn encode(&self, value: &Value, _: &Options) -> Result<Vec<u8>> {
        pot::to_vec(value).map_err(|e| Error::Message(format!("{}", e)))
    }

    fn decode(&self, input: &[u8], _: &Options) -> Result<Value> {
        pot::from_slice(input).map_err(|e| Error::Message(format!("{}", e)))
    }
}

/// Human-readable text format that keeps number kinds and non-string keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn encode(&self, value: &Value, options: &Options) -> Result<Vec<u8>> {
        ser::text::to_vec(value, options.text_config())
    }

    fn decode(&self, input: &[u8], _: &Options) -> Result<Value> {
        de::text::from_slice(input)
    }
}
