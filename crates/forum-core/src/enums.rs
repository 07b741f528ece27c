//! Enumerated codes used on the wire.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Privacy
// ---------------------------------------------------------------------------

/// Visibility of a topic.
///
/// Serialized as its integer code (`0` public, `1` private, `2` institution
/// only). Deserialization also accepts the code as a numeric string, the way
/// form values arrive from select controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Privacy {
    #[default]
    Public,
    Private,
    Institution,
}

impl Privacy {
    /// Options in the order a privacy picker lists them.
    pub const OPTIONS: [Self; 3] = [Self::Public, Self::Institution, Self::Private];

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Public => 0,
            Self::Private => 1,
            Self::Institution => 2,
        }
    }

    /// Map an integer code back to a privacy level.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPrivacy`] for codes outside `{0, 1, 2}`.
    pub fn from_code(code: i64) -> Result<Self, CoreError> {
        match code {
            0 => Ok(Self::Public),
            1 => Ok(Self::Private),
            2 => Ok(Self::Institution),
            other => Err(CoreError::InvalidPrivacy(other.to_string())),
        }
    }

    /// Human-readable label shown next to the option.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "Público",
            Self::Private => "Privado",
            Self::Institution => "Minha instituição",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Privacy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = trimmed
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidPrivacy(trimmed.to_string()))?;
        Self::from_code(code)
    }
}

impl Serialize for Privacy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Privacy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Self::from_code(code),
            Raw::Text(text) => text.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for Privacy {
    fn schema_name() -> Cow<'static, str> {
        "Privacy".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "integer",
            "enum": [0, 1, 2]
        })
    }
}
