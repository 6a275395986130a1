use crate::{
    codec::JSON,
    ser::text::{TextConfig, TextConfigStyle},
};
use serde::{Deserialize, Serialize};

/// Options of [`crate::dumps`] and [`crate::loads`].
///
/// Codec-specific fields are ignored by codecs they do not apply to.
/// Deserializes with defaults for missing fields, so it can be embedded in
/// application config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub encoder: String,
    pub decoder: String,
    /// Human-readable layout for the textual codecs.
    pub pretty: bool,
    /// Number kind suffixes for the `text` codec.
    pub numbers_with_type: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            encoder: JSON.to_owned(),
            decoder: JSON.to_owned(),
            pretty: false,
            numbers_with_type: true,
        }
    }
}

impl Options {
    pub fn with_encoder(mut self, name: impl ToString) -> Self {
        self.encoder = name.to_string();
        self
    }

    pub fn with_decoder(mut self, name: impl ToString) -> Self {
        self.decoder = name.to_string();
        self
    }

    /// Same codec for both directions.
    pub fn with_coding(self, name: impl ToString) -> Self {
        let name = name.to_string();
        self.with_encoder(&name).with_decoder(name)
    }

    pub fn with_pretty(mut self, mode: bool) -> Self {
        self.pretty = mode;
        self
    }

    pub fn with_numbers_with_type(mut self, mode: bool) -> Self {
        self.numbers_with_type = mode;
        self
    }

    pub fn text_config(&self) -> TextConfig {
        let style = if self.pretty {
            TextConfigStyle::default_pretty()
        } else {
            TextConfigStyle::Default
        };
        TextConfig::default()
            .with_style(style)
            .with_numbers_with_type(self.numbers_with_type)
    }
}
