//! YAML codec configuration
//!
//! ```yaml
//! scheme: triad
//! ```
//!
//! Every key is optional. An empty document selects the default scheme.
//! Unknown keys are rejected, so a misspelled key cannot fall back to the
//! default layout.

use serde::Deserialize;

use crate::chord_symbols::ChordSymbolOracle;
use crate::encoding::{AnyChordCodec, EncodingScheme};
use crate::error::{EncodingError, Result};

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    scheme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    pub scheme: EncodingScheme,
}

impl CodecConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| EncodingError::Config(e.to_string()))?;

        let scheme = match &raw.scheme {
            Some(scheme) => scheme.parse()?,
            None => EncodingScheme::default(),
        };

        Ok(Self { scheme })
    }

    /// Build the configured codec around the given chord symbol oracle
    pub fn build<O: ChordSymbolOracle>(&self, oracle: O) -> AnyChordCodec<O> {
        AnyChordCodec::new(self.scheme, oracle)
    }
}
