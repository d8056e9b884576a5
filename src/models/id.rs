// ============================================================================
// IDS - The backend sends identifiers as numbers or strings
// ============================================================================

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or integer identifier")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

/// `#[serde(deserialize_with = "deserialize_id")]` for `String` fields
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IdVisitor)
}

/// Treats an explicit `null` like a missing field. Pair with `#[serde(default)]`.
pub fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[derive(Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "deserialize_or_default")]
        name: String,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let n: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let s: Holder = serde_json::from_str(r#"{"id": "a1b2"}"#).unwrap();
        assert_eq!(n.id, "42");
        assert_eq!(s.id, "a1b2");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": [1]}"#).is_err());
    }

    #[test]
    fn null_and_missing_become_default() {
        let null: Loose = serde_json::from_str(r#"{"name": null}"#).unwrap();
        let missing: Loose = serde_json::from_str("{}").unwrap();
        let present: Loose = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(null.name, "");
        assert_eq!(missing.name, "");
        assert_eq!(present.name, "x");
    }
}
