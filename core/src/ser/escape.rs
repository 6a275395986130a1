use crate::{
    convert::DictConvertible,
    registry::Registry,
    value::{
        data::Data,
        intermediate::{Value, CLASSNAME_KEY},
    },
};

/// Escapes a live graph using the global registry for type identifiers.
pub fn escape(data: &Data) -> Value {
    escape_with(data, Registry::global())
}

/// Turns a live graph into an intermediate tree.
///
/// Every object becomes a mapping tagged with `__classname__` followed by the
/// escaped entries of its `to_dict()`. Graphs must be acyclic: a cycle
/// recurses until the stack overflows.
pub fn escape_with(data: &Data, registry: &Registry) -> Value {
    match data {
        Data::Null => Value::Null,
        Data::Bool(v) => Value::Bool(*v),
        Data::Number(v) => Value::Number(*v),
        Data::String(v) => Value::String(v.to_owned()),
        Data::Sequence(v) => Value::Sequence(v.iter().map(|v| escape_with(v, registry)).collect()),
        Data::Mapping(v) => Value::Mapping(
            v.iter()
                .map(|(k, v)| (escape_with(k, registry), escape_with(v, registry)))
                .collect(),
        ),
        Data::Object(object) => escape_object(&**object, registry),
    }
}

fn escape_object(object: &dyn DictConvertible, registry: &Registry) -> Value {
    let dict = object.to_dict();
    let mut result = Vec::with_capacity(dict.len() + 1);
    result.push((
        Value::String(CLASSNAME_KEY.to_owned()),
        Value::String(registry.identifier_for(object)),
    ));
    for (key, value) in dict {
        if key == CLASSNAME_KEY {
            log::warn!(
                "dropped reserved `{}` entry from {} dict",
                CLASSNAME_KEY,
                object.type_name()
            );
            continue;
        }
        result.push((Value::String(key), escape_with(&value, registry)));
    }
    Value::Mapping(result)
}
