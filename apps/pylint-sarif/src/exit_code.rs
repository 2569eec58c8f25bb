//! Interpretation of pylint's bit-encoded exit status.

pub const FATAL: i32 = 1;
pub const ERROR: i32 = 2;
pub const WARNING: i32 = 4;
pub const REFACTOR: i32 = 8;
pub const CONVENTION: i32 = 16;
pub const USAGE: i32 = 32;

const SUCCESS_DESCRIPTION: &str = "Successful completion. No messages.";

const PHRASES: [(i32, &str); 6] = [
    (FATAL, "Fatal message issued. "),
    (ERROR, "Error message issued. "),
    (WARNING, "Warning message issued. "),
    (REFACTOR, "Refactor message issued. "),
    (CONVENTION, "Convention message issued. "),
    (USAGE, "Usage error."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Exit status of a `pylint -f json` run.
pub struct PylintExit(pub i32);

impl PylintExit {
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Human-readable description, concatenating one phrase per set bit.
    pub fn description(&self) -> String {
        if self.0 == 0 {
            return SUCCESS_DESCRIPTION.to_string();
        }
        PHRASES
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|(_, phrase)| *phrase)
            .collect()
    }

    /// Bit 0: pylint could not complete the analysis.
    pub fn is_fatal(&self) -> bool {
        self.0 & FATAL != 0
    }

    /// Messages were reported but pylint itself ran to completion.
    pub fn execution_successful(&self) -> bool {
        self.0 & (FATAL | USAGE) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_success_phrase() {
        let e = PylintExit(0);
        assert_eq!(e.description(), "Successful completion. No messages.");
        assert!(!e.is_fatal());
        assert!(e.execution_successful());
    }

    #[test]
    fn test_error_and_warning_bits() {
        assert_eq!(
            PylintExit(6).description(),
            "Error message issued. Warning message issued. "
        );
    }

    #[test]
    fn test_all_bits_in_order() {
        assert_eq!(
            PylintExit(63).description(),
            "Fatal message issued. Error message issued. Warning message issued. \
             Refactor message issued. Convention message issued. Usage error."
        );
    }

    #[test]
    fn test_fatal_and_usage_flags() {
        assert!(PylintExit(1).is_fatal());
        assert!(!PylintExit(1).execution_successful());
        assert!(!PylintExit(32).is_fatal());
        assert!(!PylintExit(32).execution_successful());
        assert!(PylintExit(28).execution_successful());
    }
}
