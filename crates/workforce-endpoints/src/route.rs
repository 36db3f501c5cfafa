//! Paths addressing a single record.

use crate::error::{EndpointError, EndpointResult};
use workforce_client::RecordId;

/// `{collection}/{id}` for one record.
///
/// The id must be a single path segment made of letters, digits and `-_.~`,
/// and may not be `.` or `..`. Anything else is rejected before a request is
/// built, so an id can never retarget the call.
pub(crate) fn record_path(collection: &str, id: &RecordId, label: &str) -> EndpointResult<String> {
    let id = id.as_str().trim();
    if id.is_empty() {
        return Err(EndpointError::validation(format!("{} id is required", label)));
    }
    let segment_safe = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
    if !segment_safe || id == "." || id == ".." {
        return Err(EndpointError::validation(format!("{} id '{}' is invalid", label, id)));
    }
    Ok(format!("{}/{}", collection, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_uuid_ids_are_accepted() {
        assert_eq!(
            record_path("/leave-requests", &RecordId::from(7u64), "Leave request").unwrap(),
            "/leave-requests/7"
        );
        assert_eq!(
            record_path(
                "/approvals",
                &RecordId::new(" 1b4e28ba-2fa1-11d2-883f-0016d3cca427 "),
                "Approval"
            )
            .unwrap(),
            "/approvals/1b4e28ba-2fa1-11d2-883f-0016d3cca427"
        );
    }

    #[test]
    fn ids_that_change_the_target_are_rejected() {
        for raw in ["../profile", "..", ".", "7/approve", "7?status=all", "7#x", "%2e%2e", "a b"] {
            let err = record_path("/approvals", &RecordId::new(raw), "Approval").unwrap_err();
            assert!(matches!(err, EndpointError::Validation(_)), "{raw}");
            assert!(err.to_string().starts_with("Approval id"), "{raw}");
        }
    }

    #[test]
    fn blank_id_is_required() {
        let err = record_path("/leave-requests", &RecordId::new("  "), "Leave request").unwrap_err();
        assert_eq!(err.to_string(), "Leave request id is required");
    }
}
