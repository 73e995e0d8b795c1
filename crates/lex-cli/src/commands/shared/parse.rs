use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use lex_core::enums::CaseType;
    use lex_query::query::CaseSortKey;

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let case_type: CaseType = parse_enum("judicial", "type").expect("type should parse");
        assert_eq!(case_type, CaseType::Judicial);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let key: CaseSortKey = parse_enum("last-updated", "sort").expect("sort should parse");
        assert_eq!(key, CaseSortKey::LastUpdated);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<CaseType>("criminal", "type").expect_err("should fail");
        assert!(err.to_string().contains("invalid type 'criminal'"));
    }
}
