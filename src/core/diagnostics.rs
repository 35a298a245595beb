/// Non-fatal event raised by the flow, written to the internal log by the
/// command that drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub operation: &'static str,
    pub target: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        operation: &'static str,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            target: target.into(),
            message: message.into(),
        }
    }
}
