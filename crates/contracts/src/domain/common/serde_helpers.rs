use serde::{Deserialize, Deserializer};

/// Deserialize a nullable column into its type's default.
///
/// Array and JSON columns come back as `null` when never filled in; the
/// storefront treats that the same as an empty collection. Pair with
/// `#[serde(default)]` so a missing key behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_null_and_missing_become_empty() {
        let from_null: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        let from_missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(from_null.items.is_empty());
        assert!(from_missing.items.is_empty());
    }

    #[test]
    fn test_values_pass_through() {
        let holder: Holder = serde_json::from_str(r#"{"items": ["a", "b"]}"#).unwrap();
        assert_eq!(holder.items, vec!["a", "b"]);
    }
}
