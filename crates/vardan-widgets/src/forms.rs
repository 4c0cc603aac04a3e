//! Required-field checks for page forms.

/// Alert shown when a submit is blocked.
pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields";
/// Border colour of an empty required field.
pub const INVALID_BORDER: &str = "#ff6b6b";
/// Border colour of a filled required field.
pub const VALID_BORDER: &str = "#e8e5e0";

/// Outcome of checking the required fields of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredCheck {
    filled: Vec<bool>,
}

impl RequiredCheck {
    /// Check the current values of a form's required fields, in document order.
    pub fn of<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            filled: values.into_iter().map(|v| !v.trim().is_empty()).collect(),
        }
    }

    /// Whether the submit may go ahead.
    pub fn is_valid(&self) -> bool {
        self.filled.iter().all(|&filled| filled)
    }

    /// Border colour for the field at `index`.
    pub fn border(&self, index: usize) -> &'static str {
        match self.filled.get(index) {
            Some(false) => INVALID_BORDER,
            _ => VALID_BORDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_block_submit() {
        let check = RequiredCheck::of(["Asha", "   ", "asha@example.com"]);
        assert!(!check.is_valid());
        assert_eq!(check.border(0), VALID_BORDER);
        assert_eq!(check.border(1), INVALID_BORDER);
        assert_eq!(check.border(2), VALID_BORDER);
    }

    #[test]
    fn test_no_required_fields_is_valid() {
        assert!(RequiredCheck::of(Vec::<&str>::new()).is_valid());
        assert!(RequiredCheck::of(["x"]).is_valid());
    }
}
