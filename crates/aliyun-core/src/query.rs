//! Convenience builder for flat RPC query parameters.
//!
//! RPC actions take a flat bag of string pairs, including repeated members
//! spelled `Name.1`, `Name.2`, ... for list parameters. This module provides
//! a lightweight helper for assembling those pairs from optional values,
//! reducing boilerplate in product crates.

use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append a repeated list parameter as `key.1`, `key.2`, ...
    pub fn push_list<T>(&mut self, key: &str, values: &[T])
    where
        T: Display,
    {
        for (i, value) in values.iter().enumerate() {
            self.pairs.push((format!("{key}.{}", i + 1), value.to_string()));
        }
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("PageNumber", Option::<u32>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn push_opt_keeps_some() {
        let mut params = QueryParams::new();
        params.push_opt("PageSize", Some(100u32));
        assert_eq!(
            params.into_pairs(),
            vec![("PageSize".to_string(), "100".to_string())]
        );
    }

    #[test]
    fn push_list_numbers_members_from_one() {
        let mut params = QueryParams::new();
        params.push_list("InstanceId", &["i-aaa", "i-bbb"]);
        assert_eq!(
            params.into_pairs(),
            vec![
                ("InstanceId.1".to_string(), "i-aaa".to_string()),
                ("InstanceId.2".to_string(), "i-bbb".to_string()),
            ]
        );
    }
}
