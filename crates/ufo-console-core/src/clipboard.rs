//! Decision logic for the page-wide invite-code copy interceptor.

/// Where a `copy` event originated, as seen from the capture listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The event target is exactly `document.body`.
    DocumentBody,
    /// A focused input, a text selection, or any other node.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyDecision {
    /// Prevent the default copy and write this text as `text/plain`.
    Override(String),
    /// Let the browser copy normally.
    PassThrough,
    /// Body-targeted copy with no hidden field to read from.
    MissingSource,
}

/// `hidden_value` is only consulted for body-targeted copies, so callers can
/// pass a lazy lookup.
pub fn decide_copy<F>(target: CopyTarget, hidden_value: F) -> CopyDecision
where
    F: FnOnce() -> Option<String>,
{
    match target {
        CopyTarget::Other => CopyDecision::PassThrough,
        CopyTarget::DocumentBody => match hidden_value() {
            Some(value) => CopyDecision::Override(value),
            None => CopyDecision::MissingSource,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn body_target_overrides_payload() {
        let decision = decide_copy(CopyTarget::DocumentBody, || Some("invite-123".to_string()));
        assert_eq!(decision, CopyDecision::Override("invite-123".to_string()));
    }

    #[test]
    fn other_targets_pass_through_without_reading_hidden_field() {
        let reads = Cell::new(0);
        let decision = decide_copy(CopyTarget::Other, || {
            reads.set(reads.get() + 1);
            Some("invite-123".to_string())
        });
        assert_eq!(decision, CopyDecision::PassThrough);
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn missing_hidden_field_does_not_prevent_default() {
        let decision = decide_copy(CopyTarget::DocumentBody, || None);
        assert_eq!(decision, CopyDecision::MissingSource);
    }

    #[test]
    fn empty_invite_code_is_still_copied() {
        let decision = decide_copy(CopyTarget::DocumentBody, || Some(String::new()));
        assert_eq!(decision, CopyDecision::Override(String::new()));
    }
}
