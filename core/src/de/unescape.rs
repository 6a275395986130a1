use crate::{
    error::{Error, Result},
    registry::Registry,
    value::{
        data::Data,
        dict::Dict,
        intermediate::{Value, CLASSNAME_KEY},
    },
};

/// Unescapes an intermediate tree using the global registry.
pub fn unescape(value: Value) -> Result<Data> {
    unescape_with(value, Registry::global())
}

/// Turns an intermediate tree back into a live graph.
///
/// Mappings tagged with `__classname__` are rebuilt through `registry`, with
/// their remaining entries unescaped first and handed over as the payload.
pub fn unescape_with(value: Value, registry: &Registry) -> Result<Data> {
    match value {
        Value::Null => Ok(Data::Null),
        Value::Bool(v) => Ok(Data::Bool(v)),
        Value::Number(v) => Ok(Data::Number(v)),
        Value::String(v) => Ok(Data::String(v)),
        Value::Sequence(v) => v
            .into_iter()
            .map(|v| unescape_with(v, registry))
            .collect::<Result<Vec<_>>>()
            .map(Data::Sequence),
        Value::Mapping(mut v) => match take_classname(&mut v)? {
            Some(identifier) => unescape_object(identifier, v, registry),
            None => v
                .into_iter()
                .map(|(k, v)| Ok((unescape_with(k, registry)?, unescape_with(v, registry)?)))
                .collect::<Result<Vec<_>>>()
                .map(Data::Mapping),
        },
    }
}

fn take_classname(entries: &mut Vec<(Value, Value)>) -> Result<Option<String>> {
    let index = entries
        .iter()
        .position(|(key, _)| key.as_str() == Some(CLASSNAME_KEY));
    match index.map(|index| entries.remove(index).1) {
        Some(Value::String(identifier)) => Ok(Some(identifier)),
        Some(other) => Err(Error::MalformedPayload(format!(
            "`{}` must be a string, found {}",
            CLASSNAME_KEY,
            other.kind()
        ))),
        None => Ok(None),
    }
}

fn unescape_object(
    identifier: String,
    entries: Vec<(Value, Value)>,
    registry: &Registry,
) -> Result<Data> {
    let mut payload = Dict::with_capacity(entries.len());
    for (key, value) in entries {
        let key = match unescape_with(key, registry)? {
            Data::String(key) => key,
            other => {
                return Err(Error::MalformedPayload(format!(
                    "`{}` object key must be a string, found {}",
                    identifier,
                    other.kind()
                )))
            }
        };
        payload.insert(key, unescape_with(value, registry)?);
    }
    registry
        .resolve(&identifier)?
        .reconstruct(&identifier, payload)
}
