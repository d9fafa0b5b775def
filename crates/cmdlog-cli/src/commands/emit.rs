//! Log a single message.

use anyhow::{bail, Result};
use cmdlog_core::{Fields, Level};
use serde_json::Value;

pub fn execute(message: &str, level: &str, fields: &[String]) -> Result<()> {
    let level: Level = level.parse()?;
    let fields = parse_fields(fields)?;

    cmdlog_core::logger().with_fields(fields).log(level, message);
    Ok(())
}

/// Parse `KEY=VALUE` pairs. Values that are valid JSON keep their type.
fn parse_fields(pairs: &[String]) -> Result<Fields> {
    let mut fields = Fields::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Invalid field '{}', expected KEY=VALUE", pair);
        };
        if key.is_empty() {
            bail!("Invalid field '{}', key is empty", pair);
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields() {
        let pairs = vec![
            "env=prod".to_string(),
            "retries=3".to_string(),
            "query=a=b".to_string(),
        ];
        let fields = parse_fields(&pairs).unwrap();
        assert_eq!(fields["env"], "prod");
        assert_eq!(fields["retries"], 3);
        assert_eq!(fields["query"], "a=b");

        assert!(parse_fields(&["novalue".to_string()]).is_err());
        assert!(parse_fields(&["=x".to_string()]).is_err());
    }
}
