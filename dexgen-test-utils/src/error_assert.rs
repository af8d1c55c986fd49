use anyhow::Error;

/// [`assert`]s that the result is an [`Error`] whose message or any of its causes contains the
/// given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    assert!(result.is_err_and(|err| err.chain().any(|cause| cause.to_string().contains(message))))
}
