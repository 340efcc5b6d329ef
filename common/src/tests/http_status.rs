use crate::HttpStatusCode;

/// **VALUE**: Each status maps to at most one of the three classifications.
///
/// **BUG THIS CATCHES**: Overlapping predicates, which would make callers treat
/// a rate limit as a missing resource (and e.g. drop it from state).
#[test]
fn given_known_statuses_when_classified_then_exactly_one_predicate_matches() {
    let cases = [
        (404, (true, false, false)),
        (429, (false, true, false)),
        (401, (false, false, true)),
        (500, (false, false, false)),
    ];

    for (code, expected) in cases {
        let status = HttpStatusCode(code);
        let actual = (
            status.is_not_found(),
            status.is_rate_limited(),
            status.is_unauthorized(),
        );
        assert_eq!(actual, expected, "status {code}");
    }
}

#[test]
fn given_status_ranges_when_checked_then_error_boundary_is_400() {
    assert!(!HttpStatusCode(399).is_error());
    assert!(HttpStatusCode(400).is_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

#[test]
fn given_unusual_status_when_reason_requested_then_falls_back() {
    assert_eq!(HttpStatusCode(404).reason_phrase(), "Not Found");
    assert_eq!(HttpStatusCode(599).reason_phrase(), "Unknown Status");
}

/// **BUG THIS CATCHES**: A partial reason table that reports standard codes
/// such as 408 as "Unknown Status" when the server sends an empty body.
#[test]
fn given_less_common_standard_statuses_when_reason_requested_then_canonical_phrase() {
    assert_eq!(HttpStatusCode(402).reason_phrase(), "Payment Required");
    assert_eq!(HttpStatusCode(408).reason_phrase(), "Request Timeout");
    assert_eq!(HttpStatusCode(412).reason_phrase(), "Precondition Failed");
    assert_eq!(HttpStatusCode(418).reason_phrase(), "I'm a teapot");
    assert_eq!(HttpStatusCode(1000).reason_phrase(), "Unknown Status");
}
