//! Serialized form of the country reference dataset.

use indexmap::IndexMap;
use serde::Deserialize;

/// Dataset compiled into the binary.
pub(super) const BUNDLED: &str = include_str!("../../data/countries.json");

/// One country entry as stored on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct CountryRecord {
    pub(super) alpha2: String,
    pub(super) alpha3: String,
    pub(super) name: String,
    #[serde(default)]
    pub(super) unofficial_names: Vec<String>,
    #[serde(default)]
    pub(super) translations: IndexMap<String, String>,
}

pub(super) fn parse(json: &str) -> Result<Vec<CountryRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let records = parse(BUNDLED).expect("bundled dataset should parse");
        assert_eq!(records.len(), 250);
        assert!(records.iter().any(|record| record.alpha2 == "AX"));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let records = parse(r#"[{"alpha2": "XK", "alpha3": "XKX", "name": "Kosovo"}]"#)
            .expect("minimal record should parse");
        let record = records.first().expect("one record");
        assert!(record.unofficial_names.is_empty());
        assert!(record.translations.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse(r#"[{"alpha2": "XK", "alpha3": "XKX", "name": "Kosovo", "flag": 1}]"#)
            .expect_err("unknown field should fail");
        assert!(err.to_string().contains("flag"));
    }
}
