use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),

    #[error("Component '{component}' cannot be empty in assignment '{assignment}'.")]
    EmptyComponent {
        component: &'static str,
        assignment: String,
    },

    #[error("Invalid {expected} value for {key}: {value}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Splits a `KEY=VALUE` assignment at the first `=`.
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidAssignment(assignment.to_string()))?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            assignment: assignment.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "value",
            assignment: assignment.to_string(),
        });
    }
    Ok((key, value))
}

pub fn parse_value<T: FromStr>(
    key: &str,
    value: &str,
    expected: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("channels.lmax=2").unwrap(),
            ("channels.lmax", "2")
        );
        assert_eq!(parse_assignment("a= b=c ").unwrap(), ("a", "b=c"));
    }

    #[test]
    fn parse_assignment_rejects_missing_equals() {
        assert_eq!(
            parse_assignment("channels.lmax"),
            Err(ParseError::InvalidAssignment("channels.lmax".to_string()))
        );
    }

    #[test]
    fn parse_assignment_rejects_empty_parts() {
        assert!(matches!(
            parse_assignment("=1"),
            Err(ParseError::EmptyComponent {
                component: "key",
                ..
            })
        ));
        assert!(matches!(
            parse_assignment("channels.lmax="),
            Err(ParseError::EmptyComponent {
                component: "value",
                ..
            })
        ));
    }

    #[test]
    fn parse_value_reports_expected_type() {
        let value: f64 = parse_value("hints.ecut-low", "31.5", "float").unwrap();
        assert_eq!(value, 31.5);

        let err = parse_value::<u32>("channels.lmax", "two", "integer").unwrap_err();
        assert_eq!(err.to_string(), "Invalid integer value for channels.lmax: two");
    }
}
