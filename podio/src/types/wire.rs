//! Helpers de (de)serialização para as manias do formato do Podio
//!
//! - `null` onde deveria haver string/lista → valor default
//! - decimais transmitidos como string (`"6513.5100"`) ou como número
//! - telefones ora string, ora inteiro

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value as JsonValue;

/// `null` → `T::default()` (use junto com `#[serde(default)]`)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_from_json<E: serde::de::Error>(raw: JsonValue) -> Result<Option<f64>, E> {
    match raw {
        JsonValue::Null => Ok(None),
        JsonValue::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("number {} is not representable as f64", n))),
        JsonValue::String(s) if s.trim().is_empty() => Ok(None),
        JsonValue::String(s) => match s.trim().parse::<f64>() {
            // "NaN", "inf" e overflow ("1e400") não são decimais
            Ok(n) if n.is_finite() => Ok(Some(n)),
            Ok(_) => Err(E::custom(format!("invalid decimal '{}': not finite", s))),
            Err(e) => Err(E::custom(format!("invalid decimal '{}': {}", s, e))),
        },
        other => Err(E::custom(format!("expected decimal, found {}", other))),
    }
}

/// Decimal obrigatório: `"541.987"` ou `541.987`
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    number_from_json(JsonValue::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("expected decimal, found null"))
}

/// Decimal opcional (latitude/longitude): número, string, `null` ou `""`
pub(crate) fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    number_from_json(JsonValue::deserialize(deserializer)?)
}

/// Reemite decimal como string, igual ao que a API envia
pub(crate) fn decimal_as_string<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Texto que às vezes chega como número (telefones legados)
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => Ok(String::new()),
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => match n.as_f64() {
            // 4.5e10 -> "45000000000"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                Ok(format!("{}", f as i64))
            }
            _ => Ok(n.to_string()),
        },
        other => Err(D::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}
