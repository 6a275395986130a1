use crate::{
    codec,
    convert::FromData,
    de::unescape::unescape_with,
    error::Result,
    options::Options,
    registry::Registry,
    ser::escape::escape_with,
    value::data::Data,
};

/// Escapes `data` and encodes it with `options.encoder`.
///
/// # Example
/// ```rust
/// use dict_intermediate::{dumps, loads, Data, Options};
///
/// let data = Data::sequence_from(vec![1, 2, 3]);
/// let bytes = dumps(data.clone(), &Options::default()).unwrap();
/// assert_eq!(bytes, b"[1,2,3]");
/// assert_eq!(loads(&bytes, &Options::default()).unwrap(), data);
/// ```
pub fn dumps(data: impl Into<Data>, options: &Options) -> Result<Vec<u8>> {
    dumps_with(data, options, Registry::global())
}

pub fn dumps_with(data: impl Into<Data>, options: &Options, registry: &Registry) -> Result<Vec<u8>> {
    let codec = codec::find(&options.encoder)?;
    let value = escape_with(&data.into(), registry);
    codec.encode(&value, options)
}

/// Decodes `input` with `options.decoder` and unescapes the result.
pub fn loads(input: impl AsRef<[u8]>, options: &Options) -> Result<Data> {
    loads_with(input, options, Registry::global())
}

pub fn loads_with(
    input: impl AsRef<[u8]>,
    options: &Options,
    registry: &Registry,
) -> Result<Data> {
    let codec = codec::find(&options.decoder)?;
    let value = codec.decode(input.as_ref(), options)?;
    unescape_with(value, registry)
}

/// [`loads`] followed by conversion into `T`, e.g. `Arc<Point>`.
pub fn loads_as<T>(input: impl AsRef<[u8]>, options: &Options) -> Result<T>
where
    T: FromData,
{
    T::from_data(loads(input, options)?)
}

pub fn loads_as_with<T>(input: impl AsRef<[u8]>, options: &Options, registry: &Registry) -> Result<T>
where
    T: FromData,
{
    T::from_data(loads_with(input, options, registry)?)
}
