//! Field-level validation failures
//!
//! Validation engines report violations per field, each tagged with the
//! keyword codes of the constraint that fired (`NotNull`, `Size`, ...).
//! A [`FieldFailure`] is the canonical form of one violation; the keyword
//! codes are collapsed into a single coarse failure code through
//! [`failure_code`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Constraint keywords mapped to the failure code reported to callers.
///
/// Keywords not listed here classify as unknown (empty code). Extend the
/// table as new constraint families need their own code.
const FAILURE_CODES: &[(&str, &str)] = &[("NotNull", "empty"), ("NotEmpty", "empty")];

/// Collapse a violation's keyword codes into a failure code.
///
/// # Example
///
/// ```rust
/// use manila::validation::failure_code;
///
/// assert_eq!(failure_code(["NotEmpty"]), "empty");
/// assert_eq!(failure_code(["Size"]), "");
/// ```
pub fn failure_code<I, S>(keywords: I) -> &'static str
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .find_map(|keyword| {
            FAILURE_CODES
                .iter()
                .find(|(candidate, _)| *candidate == keyword.as_ref())
                .map(|(_, code)| *code)
        })
        .unwrap_or("")
}

/// One validation failure on one field
///
/// `value` is the rejected value, absent from the JSON form when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFailure {
    /// Failure code (`"empty"` for required-value violations, `""` when
    /// unclassified)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Field the failure applies to
    pub field: String,
    /// The rejected value, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldFailure {
    /// Failure with an explicit code
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: field.into(),
            value: None,
        }
    }

    /// Failure classified from the violation's keyword codes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::validation::FieldFailure;
    ///
    /// let failure = FieldFailure::from_violation("name", "must not be empty", ["NotEmpty"]);
    /// assert_eq!(failure.code, "empty");
    /// ```
    pub fn from_violation<I, S>(
        field: impl Into<String>,
        message: impl Into<String>,
        keywords: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(failure_code(keywords), message, field)
    }

    /// Attach the rejected value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Group failures by field name, preserving per-field insertion order.
///
/// # Example
///
/// ```rust
/// use manila::validation::{group_by_field, FieldFailure};
///
/// let grouped = group_by_field(vec![
///     FieldFailure::new("empty", "missing", "name"),
///     FieldFailure::new("", "too long", "name"),
/// ]);
/// assert_eq!(grouped["name"].len(), 2);
/// ```
#[must_use]
pub fn group_by_field(failures: Vec<FieldFailure>) -> HashMap<String, Vec<FieldFailure>> {
    let mut grouped: HashMap<String, Vec<FieldFailure>> = HashMap::new();
    for failure in failures {
        grouped.entry(failure.field.clone()).or_default().push(failure);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_code_for_required_keywords() {
        assert_eq!(failure_code(["NotNull"]), "empty");
        assert_eq!(failure_code(["NotEmpty"]), "empty");
    }

    #[test]
    fn test_failure_code_scans_all_keywords() {
        assert_eq!(failure_code(["Size", "NotEmpty"]), "empty");
    }

    #[test]
    fn test_failure_code_unknown_is_blank() {
        assert_eq!(failure_code(["Size"]), "");
        assert_eq!(failure_code(Vec::<String>::new()), "");
    }

    #[test]
    fn test_from_violation_classifies() {
        let failure = FieldFailure::from_violation("email", "required", ["NotNull"]);
        assert_eq!(failure.code, "empty");
        assert_eq!(failure.field, "email");
    }

    #[test]
    fn test_group_by_field_keeps_violation_order() {
        let grouped = group_by_field(vec![
            FieldFailure::new("empty", "first", "name"),
            FieldFailure::new("", "second", "name"),
            FieldFailure::new("", "other", "age"),
        ]);

        let name = &grouped["name"];
        assert_eq!(name.len(), 2);
        assert_eq!(name[0].message, "first");
        assert_eq!(name[1].message, "second");
        assert_eq!(grouped["age"].len(), 1);
    }

    #[test]
    fn test_value_absent_from_json_when_unknown() {
        let failure = FieldFailure::new("empty", "missing", "name");
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_value_present_in_json_when_known() {
        let failure = FieldFailure::new("", "bad", "age").with_value(-3);
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["value"], -3);
    }
}
