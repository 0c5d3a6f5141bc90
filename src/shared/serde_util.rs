//! Custom serde helpers for backend wire formats.
//!
//! The backend is loose about JSON types: ids arrive as numbers or numeric
//! strings, flags as booleans or `0`/`1`, and collections as either arrays or
//! objects keyed by id.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

impl NumberOrString {
    fn into_u64<E: de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::String(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("Invalid numeric id: {:?}", s))),
        }
    }
}

/// Deserializes a `u64` id from a JSON number or a numeric string.
pub mod id {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        NumberOrString::deserialize(deserializer)?.into_u64()
    }

    pub fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = deserialize(deserializer)?;
        u32::try_from(n).map_err(|_| de::Error::custom(format!("Id out of range: {}", n)))
    }

    /// Optional variant; `null` and `""` map to `None`.
    pub mod option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<NumberOrString>::deserialize(deserializer)? {
                None => Ok(None),
                Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
                Some(v) => v.into_u64().map(Some),
            }
        }
    }
}

/// Deserializes a flag from `true`/`false`, `0`/`1`, `"0"`/`"1"` or `null`.
pub mod flag {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Number(i64),
        String(String),
        Null(()),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(b),
            Raw::Number(n) => Ok(n != 0),
            Raw::Null(()) => Ok(false),
            Raw::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                other => Err(de::Error::custom(format!("Invalid flag: {:?}", other))),
            },
        }
    }
}

/// Deserializes a list from either a JSON array or an object keyed by id.
///
/// Keyed objects are returned in ascending numeric key order (non-numeric keys
/// sort after numeric ones). `null` yields an empty list. Each item is decoded
/// on its own so a failure names the offending key or index.
pub mod keyed_or_list {
    use super::*;
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let entries: Vec<(String, Value)> = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map.into_iter().collect();
                entries.sort_by_key(|(key, _)| match key.parse::<u64>() {
                    Ok(n) => (0, n, String::new()),
                    Err(_) => (1, 0, key.clone()),
                });
                entries
            }
            other => {
                return Err(de::Error::custom(format!(
                    "Expected a list or an object keyed by id, got {}",
                    other
                )))
            }
        };

        entries
            .into_iter()
            .map(|(key, item)| {
                serde_json::from_value(item)
                    .map_err(|e| de::Error::custom(format!("Invalid item {:?}: {}", key, e)))
            })
            .collect()
    }
}

/// A list response decoded with [`keyed_or_list`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct KeyedList<T>(#[serde(deserialize_with = "keyed_or_list::deserialize")] pub Vec<T>);

impl<T> KeyedList<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(deserialize_with = "id::deserialize")]
        id: u64,
        #[serde(default, deserialize_with = "id::option::deserialize")]
        parent: Option<u64>,
        #[serde(default, deserialize_with = "flag::deserialize")]
        active: bool,
    }

    type Rows = KeyedList<Row>;

    #[test]
    fn test_id_accepts_number_and_string() {
        let row: Row = serde_json::from_str(r#"{"id": 566}"#).unwrap();
        assert_eq!(row.id, 566);
        let row: Row = serde_json::from_str(r#"{"id": "566", "parent": "12"}"#).unwrap();
        assert_eq!(row.id, 566);
        assert_eq!(row.parent, Some(12));
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{}"#).is_err());
    }

    #[test]
    fn test_optional_id_empty_values() {
        let row: Row = serde_json::from_str(r#"{"id": 1, "parent": null}"#).unwrap();
        assert_eq!(row.parent, None);
        let row: Row = serde_json::from_str(r#"{"id": 1, "parent": ""}"#).unwrap();
        assert_eq!(row.parent, None);
    }

    #[test]
    fn test_flag_variants() {
        for (raw, expected) in [
            ("true", true),
            ("false", false),
            ("1", true),
            ("0", false),
            (r#""1""#, true),
            (r#""0""#, false),
            ("null", false),
        ] {
            let row: Row = serde_json::from_str(&format!(r#"{{"id": 1, "active": {}}}"#, raw)).unwrap();
            assert_eq!(row.active, expected, "input {}", raw);
        }
        assert!(serde_json::from_str::<Row>(r#"{"id": 1, "active": "maybe"}"#).is_err());
    }

    #[test]
    fn test_keyed_object_sorted_numerically() {
        let rows: Rows =
            serde_json::from_str(r#"{"10": {"id": 10}, "9": {"id": 9}, "100": {"id": 100}}"#).unwrap();
        let ids: Vec<u64> = rows.0.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 10, 100]);
    }

    #[test]
    fn test_item_error_names_its_key() {
        let err = serde_json::from_str::<Rows>(r#"{"9": {"id": 9}, "10": {"active": 1}}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("\"10\""), "{}", err);
        assert!(err.contains("missing field `id`"), "{}", err);

        let err = serde_json::from_str::<Rows>(r#""rows""#).unwrap_err().to_string();
        assert!(err.contains("Expected a list"), "{}", err);
    }

    #[test]
    fn test_list_and_null() {
        let rows: Rows = serde_json::from_str(r#"[{"id": 2}, {"id": 1}]"#).unwrap();
        assert_eq!(rows.0.len(), 2);
        assert_eq!(rows.0[0].id, 2);

        let rows: Rows = serde_json::from_str("null").unwrap();
        assert!(rows.0.is_empty());
    }
}
