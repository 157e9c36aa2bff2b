/// Represents a raw authority transition event as consumed from the data source.
///
/// This struct holds the unprocessed data of an approval grant observed
/// on-chain before it undergoes validation and normalization by the graph
/// builder. The upstream extractor is untrusted, so every field that may be
/// omitted or nulled is modeled as `Option`: absence is detected and reported
/// by the builder with a field-naming error, never by the deserializer.
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorityEvent {
    #[serde(default)]
    pub wallet: Option<String>,
    #[serde(default)]
    pub contract: Option<String>,
    #[serde(default)]
    pub authority_type: Option<String>,
    #[serde(default)]
    pub target_entity: Option<String>,
    #[serde(default)]
    pub amount: AmountValue,
    #[serde(default, deserialize_with = "coerce_opt_u64")]
    pub block: Option<u64>,
    #[serde(default, deserialize_with = "coerce_opt_i64")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "coerce_opt_u64"
    )]
    pub log_index: Option<u64>,
}

/// Coerces an integer field from whatever scalar form the extractor emits.
///
/// `block`, `timestamp`, and `log_index` arrive as integers from most
/// sources, but older extractors emit digit strings or whole floats. Those
/// forms are coerced rather than rejected; only values that cannot be read
/// as an integer at all fail. Floats truncate toward zero.
fn integer_from_value<E>(value: &Value) -> Result<Option<i128>, E>
where
    E: serde::de::Error,
{
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(v) = number.as_u64() {
                Ok(Some(v as i128))
            } else if let Some(v) = number.as_i64() {
                Ok(Some(v as i128))
            } else if let Some(v) = number.as_f64() {
                Ok(Some(v as i128))
            } else {
                Err(E::custom(format!("cannot coerce {number} to an integer")))
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i128>()
            .map(Some)
            .map_err(|_| E::custom(format!("cannot coerce {text:?} to an integer"))),
        other => Err(E::custom(format!("cannot coerce {other} to an integer"))),
    }
}

fn coerce_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match integer_from_value::<D::Error>(&value)? {
        None => Ok(None),
        Some(v) => u64::try_from(v)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("integer {v} out of range"))),
    }
}

fn coerce_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match integer_from_value::<D::Error>(&value)? {
        None => Ok(None),
        Some(v) => i64::try_from(v)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("integer {v} out of range"))),
    }
}

/// Raw `amount` value exactly as it appears on the wire.
///
/// Approval amounts arrive as decimal strings, JSON numbers, `null`, or not
/// at all. Numbers are kept as `serde_json::Number` so 256-bit values written
/// out in decimal are never squeezed through a float or a fixed-width
/// integer.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AmountValue {
    Text(String),
    Number(Number),
    /// JSON `null` or a missing `amount` key.
    #[default]
    Absent,
}

impl AmountValue {
    /// Returns the string form of the raw value, or `None` when absent.
    ///
    /// Numbers render through their JSON literal, preserving full precision.
    pub fn to_raw_string(&self) -> Option<String> {
        match self {
            AmountValue::Text(text) => Some(text.clone()),
            AmountValue::Number(number) => Some(number.to_string()),
            AmountValue::Absent => None,
        }
    }
}

impl Serialize for AmountValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AmountValue::Text(text) => text.serialize(serializer),
            AmountValue::Number(number) => number.serialize(serializer),
            AmountValue::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for AmountValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any other JSON type is coerced to its text form rather than
        // rejected, matching the builder's coerce-not-reject posture.
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(AmountValue::Absent),
            Value::String(text) => Ok(AmountValue::Text(text)),
            Value::Number(number) => Ok(AmountValue::Number(number)),
            other => Ok(AmountValue::Text(other.to_string())),
        }
    }
}
