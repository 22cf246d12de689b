//! Formato de data/hora do Podio
//!
//! O Podio envia timestamps como texto no layout fixo `YYYY-MM-DD HH:MM:SS`,
//! sempre em UTC e sem offset.
//!
//! ⚠️ IMPORTANTE: a API às vezes envia a STRING `"null"` (não o `null` do JSON)
//! no lugar de um timestamp. Esse token vira o sentinela [`Time::NULL`] em vez de
//! falhar, e é reemitido como `"null"` na serialização.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, Result};

/// Layout textual usado pelo Podio (formato `strftime` do chrono)
pub const PODIO_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Token textual que o Podio usa para "sem data"
pub const NULL_TOKEN: &str = "null";

/// Timestamp do Podio (UTC, precisão de segundos)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Time(Option<DateTime<Utc>>);

impl Time {
    /// Sentinela produzido pelo token `"null"`
    pub const NULL: Time = Time(None);

    /// Cria a partir de um `DateTime<Utc>`; frações de segundo são descartadas
    pub fn from_utc(at: DateTime<Utc>) -> Self {
        Self(Some(at.trunc_subsecs(0)))
    }

    /// Decodifica o layout do Podio (ou o token `"null"`)
    pub fn parse(text: &str) -> Result<Self> {
        if text == NULL_TOKEN {
            return Ok(Self::NULL);
        }

        // O chrono aceita campos sem zero à esquerda, espaços extras, sinal no
        // ano e segundo 60; o layout do Podio não.
        if !matches_layout(text) {
            return Err(DecodeError::TimeFormat {
                input: text.to_string(),
                reason: "expected YYYY-MM-DD HH:MM:SS".to_string(),
                source: None,
            });
        }
        if text.as_bytes()[17] > b'5' {
            return Err(DecodeError::TimeFormat {
                input: text.to_string(),
                reason: "second out of range".to_string(),
                source: None,
            });
        }

        NaiveDateTime::parse_from_str(text, PODIO_LAYOUT)
            .map(|naive| Self(Some(naive.and_utc())))
            .map_err(|source| DecodeError::TimeFormat {
                input: text.to_string(),
                reason: source.to_string(),
                source: Some(source),
            })
    }

    /// Reemite no layout do Podio; o sentinela vira `"null"`
    pub fn format(&self) -> String {
        match self.0 {
            Some(at) => at.format(PODIO_LAYOUT).to_string(),
            None => NULL_TOKEN.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }
}

/// Exatamente `DDDD-DD-DD DD:DD:DD` (D = dígito ASCII)
fn matches_layout(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

impl From<DateTime<Utc>> for Time {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_utc(at)
    }
}

impl FromStr for Time {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

// Aceita string no layout, "null" (string) e null do JSON
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Time::parse(&text).map_err(serde::de::Error::custom),
            None => Ok(Time::NULL),
        }
    }
}
