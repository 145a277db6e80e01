use std::collections::HashMap;
use regex::Regex;
use lazy_static::lazy_static;
use super::parser::SkipReason;

lazy_static! {
    // A key followed by either a quoted string (BMFont quotes `face` and
    // `file`) or a run of non-whitespace.
    static ref FIELD_PATTERN: Regex =
        Regex::new(r#"(?:^|\s)([A-Za-z_][A-Za-z0-9_]*)=("[^"]*"|\S*)"#).unwrap();
}

/// The `key=value` pairs of a single .fnt line
#[derive(Debug, Default)]
pub struct FieldMap<'a> {
    fields: HashMap<&'a str, &'a str>,
}

impl<'a> FieldMap<'a> {
    /// Split a line into its fields. The leading record tag and any token
    /// without `=` are ignored. When a key repeats, its first value is kept.
    pub fn parse(line: &'a str) -> Self {
        let mut fields = HashMap::new();
        for captures in FIELD_PATTERN.captures_iter(line) {
            if let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) {
                fields.entry(key.as_str()).or_insert(value.as_str());
            }
        }
        Self { fields }
    }

    /// Raw value of a key, with surrounding quotes removed
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).copied().map(|value| {
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Signed integer value of a required key
    pub fn int(&self, key: &'static str) -> Result<i32, SkipReason> {
        self.parse_value(key)
    }

    /// Non-negative integer value of a required key
    pub fn uint(&self, key: &'static str) -> Result<u32, SkipReason> {
        self.parse_value(key)
    }

    fn parse_value<T: std::str::FromStr>(&self, key: &'static str) -> Result<T, SkipReason> {
        let value = self.get(key).ok_or(SkipReason::MissingField(key))?;
        let invalid = || SkipReason::InvalidInteger {
            key,
            value: value.to_string(),
        };
        // BMFont writers never emit an explicit `+`
        if value.starts_with('+') {
            return Err(invalid());
        }
        value.parse().map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_in_any_order() {
        let fields = FieldMap::parse("common lineHeight=32 scaleH=64 base=26 scaleW=128 pages=1");
        assert_eq!(fields.get("scaleW"), Some("128"));
        assert_eq!(fields.get("scaleH"), Some("64"));
        assert_eq!(fields.len(), 5);
        assert!(!fields.contains("common"));
    }

    #[test]
    fn test_similar_keys_stay_distinct() {
        let fields = FieldMap::parse("char id=65 xoffset=-1 x=10 yoffset=2 y=20 xadvance=9");
        assert_eq!(fields.int("x"), Ok(10));
        assert_eq!(fields.int("xoffset"), Ok(-1));
        assert_eq!(fields.int("y"), Ok(20));
        assert_eq!(fields.int("yoffset"), Ok(2));
    }

    #[test]
    fn test_quoted_values() {
        let fields = FieldMap::parse(r#"info face="Noto Sans x=5" size=32 bold=0"#);
        assert_eq!(fields.get("face"), Some("Noto Sans x=5"));
        assert_eq!(fields.int("size"), Ok(32));
        assert!(!fields.contains("x"));
    }

    #[test]
    fn test_first_value_wins() {
        let fields = FieldMap::parse("char id=1 id=2");
        assert_eq!(fields.int("id"), Ok(1));
    }

    #[test]
    fn test_missing_and_invalid_values() {
        let fields = FieldMap::parse("char id=abc x=-3 width=");
        assert_eq!(fields.int("y"), Err(SkipReason::MissingField("y")));
        assert_eq!(
            fields.int("id"),
            Err(SkipReason::InvalidInteger { key: "id", value: "abc".to_string() })
        );
        assert_eq!(
            fields.int("width"),
            Err(SkipReason::InvalidInteger { key: "width", value: String::new() })
        );
        assert!(fields.uint("x").is_err());
    }

    #[test]
    fn test_explicit_plus_sign_rejected() {
        let fields = FieldMap::parse("common scaleW=+12 x=+3 id=-4");
        assert_eq!(
            fields.uint("scaleW"),
            Err(SkipReason::InvalidInteger { key: "scaleW", value: "+12".to_string() })
        );
        assert!(fields.int("x").is_err());
        assert_eq!(fields.int("id"), Ok(-4));
    }

    #[test]
    fn test_line_without_fields() {
        assert!(FieldMap::parse("char").is_empty());
        assert!(FieldMap::parse("").is_empty());
    }
}
