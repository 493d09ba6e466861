/// Result of a withdrawal attempt. A rejected withdrawal leaves the balance untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalOutcome {
    pub success: bool,
    pub message: String,
}

impl WithdrawalOutcome {
    pub fn accepted(message: String) -> Self {
        return Self {
            success: true,
            message,
        };
    }

    pub fn rejected(message: String) -> Self {
        return Self {
            success: false,
            message,
        };
    }
}
