use crate::{
    error::*,
    value::intermediate::{Number, Value},
};
use std::io::Write;

pub fn to_vec(value: &Value, config: TextConfig) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(256);
    TextWriter::new(&mut result, config).write_value(value)?;
    Ok(result)
}

pub fn to_vec_compact(value: &Value) -> Result<Vec<u8>> {
    to_vec(value, TextConfig::default())
}

pub fn to_vec_pretty(value: &Value) -> Result<Vec<u8>> {
    to_vec(
        value,
        TextConfig::default().with_style(TextConfigStyle::default_pretty()),
    )
}

pub fn to_string(value: &Value, config: TextConfig) -> Result<String> {
    String::from_utf8(to_vec(value, config)?).map_err(|e| Error::Message(format!("{}", e)))
}

pub fn to_string_compact(value: &Value) -> Result<String> {
    to_string(value, TextConfig::default())
}

pub fn to_string_pretty(value: &Value) -> Result<String> {
    to_string(
        value,
        TextConfig::default().with_style(TextConfigStyle::default_pretty()),
    )
}

#[derive(Debug, Clone)]
pub struct TextConfig {
    pub style: TextConfigStyle,
    /// Suffix numbers with their kind (`_u64`, `_i64`, `_f64`).
    pub numbers_with_type: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            style: TextConfigStyle::Default,
            numbers_with_type: true,
        }
    }
}

impl TextConfig {
    pub fn with_style(mut self, style: TextConfigStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_numbers_with_type(mut self, mode: bool) -> Self {
        self.numbers_with_type = mode;
        self
    }
}

#[derive(Debug, Default, Clone)]
pub enum TextConfigStyle {
    #[default]
    Default,
    Pretty {
        level: usize,
        indent: Option<usize>,
    },
}

impl TextConfigStyle {
    pub fn pretty(indent: Option<usize>) -> Self {
        Self::Pretty { indent, level: 0 }
    }

    pub fn default_pretty() -> Self {
        Self::Pretty {
            indent: Some(2),
            level: 0,
        }
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty { .. })
    }
}

#[derive(Debug, Default, Clone)]
pub struct TextWriter<W>
where
    W: Write,
{
    stream: W,
    config: TextConfig,
}

impl<W> TextWriter<W>
where
    W: Write,
{
    pub fn new(stream: W, config: TextConfig) -> Self {
        Self { stream, config }
    }

    pub fn into_inner(self) -> W {
        self.stream
    }

    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_raw("null"),
            Value::Bool(true) => self.write_raw("true"),
            Value::Bool(false) => self.write_raw("false"),
            Value::Number(v) => self.write_number(v),
            Value::String(v) => self.write_str(v),
            Value::Sequence(v) => {
                self.write_raw("[")?;
                self.push_level();
                for (index, item) in v.iter().enumerate() {
                    if index > 0 {
                        self.write_separator()?;
                    }
                    self.write_new_line_indent()?;
                    self.write_value(item)?;
                }
                self.pop_level();
                if !v.is_empty() {
                    self.write_new_line_indent()?;
                }
                self.write_raw("]")
            }
            Value::Mapping(v) => {
                self.write_raw("{")?;
                self.push_level();
                for (index, (key, value)) in v.iter().enumerate() {
                    if index > 0 {
                        self.write_separator()?;
                    }
                    self.write_new_line_indent()?;
                    self.write_value(key)?;
                    self.write_raw(":")?;
                    self.write_whitespace()?;
                    self.write_value(value)?;
                }
                self.pop_level();
                if !v.is_empty() {
                    self.write_new_line_indent()?;
                }
                self.write_raw("}")
            }
        }
    }

    fn push_level(&mut self) {
        if let TextConfigStyle::Pretty { level, .. } = &mut self.config.style {
            *level += 1;
        }
    }

    fn pop_level(&mut self) {
        if let TextConfigStyle::Pretty { level, .. } = &mut self.config.style {
            if *level > 0 {
                *level -= 1;
            }
        }
    }

    fn map_result<T>(result: std::io::Result<T>) -> Result<T> {
        result.map_err(|e| Error::Message(format!("{}", e)))
    }

    fn write_whitespace(&mut self) -> Result<()> {
        if self.config.style.is_pretty() {
            Self::map_result(write!(&mut self.stream, " "))
        } else {
            Ok(())
        }
    }

    fn write_separator(&mut self) -> Result<()> {
        if let TextConfigStyle::Pretty { indent, .. } = &self.config.style {
            if indent.is_none() {
                return self.write_raw(", ");
            }
        }
        self.write_raw(",")
    }

    fn write_new_line_indent(&mut self) -> Result<()> {
        #[allow(clippy::collapsible_match)]
        if let TextConfigStyle::Pretty { level, indent, .. } = &mut self.config.style {
            if let Some(indent) = *indent {
                Self::map_result(write!(
                    &mut self.stream,
                    "\n{:indent$}",
                    "",
                    indent = (*level) * indent
                ))?;
            }
        }
        Ok(())
    }

    fn write_raw(&mut self, value: &str) -> Result<()> {
        Self::map_result(write!(&mut self.stream, "{}", value))
    }

    fn write_number(&mut self, value: &Number) -> Result<()> {
        let typed = self.config.numbers_with_type;
        Self::map_result(match value {
            Number::SignedInteger(v) if typed => write!(&mut self.stream, "{}_i64", v),
            Number::UnsignedInteger(v) if typed => write!(&mut self.stream, "{}_u64", v),
            Number::Float(v) if typed => write!(&mut self.stream, "{:?}_f64", v),
            Number::SignedInteger(v) => write!(&mut self.stream, "{}", v),
            Number::UnsignedInteger(v) => write!(&mut self.stream, "{}", v),
            Number::Float(v) => write!(&mut self.stream, "{:?}", v),
        })
    }

    fn write_str(&mut self, value: &str) -> Result<()> {
        Self::map_result(write!(&mut self.stream, "{:?}", value))
    }
}
