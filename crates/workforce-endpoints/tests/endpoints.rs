use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workforce_client::{ApiClient, ApiErrorKind, RecordId, StaticCredential};
use workforce_endpoints::{
    apply_for_leave, cancel_leave_request, decide_approval, fetch_timesheet, get_profile,
    list_leave_requests, list_leave_types, list_manual_time, list_pending_approvals,
    submit_manual_time, update_profile, ApprovalAction, ApprovalKind, EndpointError, ListFilter,
    NewLeaveRequest, NewManualTimeRequest, ProfileUpdate, RequestStatus, TimesheetReport,
};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), 2_000, Arc::new(StaticCredential::new("t"))).unwrap()
}

fn leave_json(id: serde_json::Value, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "leave_type": "Annual",
        "start_date": "2026-03-02",
        "end_date": "2026-03-03",
        "reason": "Holiday",
        "status": status
    })
}

#[tokio::test]
async fn profile_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "name": "Asha", "email": "asha@example.com", "department": "Ops"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/profile"))
        .and(body_json(json!({"phone": "555-0100"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42", "name": "Asha", "email": "asha@example.com", "phone": "555-0100"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let profile = get_profile(&client).await.unwrap();
    assert_eq!(profile.id.as_str(), "42");
    assert_eq!(profile.department.as_deref(), Some("Ops"));

    let update = ProfileUpdate {
        phone: Some(" 555-0100 ".into()),
        ..Default::default()
    };
    let updated = update_profile(&client, &update).await.unwrap();
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
}

#[tokio::test]
async fn lists_decode_every_envelope_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leave-types"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Annual"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/leave-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [leave_json(json!(1), "pending"), leave_json(json!("2"), "approved")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/manual-time-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"list": [{
                "id": "m1", "date": "2026-03-02", "clock_in": "09:00",
                "clock_out": "17:00", "status": "pending"
            }], "total": 1}
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let types = list_leave_types(&client).await.unwrap();
    assert_eq!(types[0].name, "Annual");

    let leaves = list_leave_requests(&client).await.unwrap();
    assert_eq!(leaves.len(), 2);
    let pending = ListFilter::default()
        .status(RequestStatus::Pending)
        .apply(leaves);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id.as_str(), "1");

    let manual = list_manual_time(&client).await.unwrap();
    assert_eq!(manual[0].clock_out.to_string(), "17:00:00");
}

#[tokio::test]
async fn unexpected_envelope_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leave-requests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [leave_json(json!(1), "pending")]})),
        )
        .mount(&server)
        .await;

    let err = list_leave_requests(&client(&server)).await.unwrap_err();
    match err {
        EndpointError::Api(api) => assert_eq!(api.kind(), ApiErrorKind::Decode),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn leave_apply_and_cancel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leave-requests"))
        .and(body_json(json!({
            "leave_type_id": "1",
            "start_date": "2026-03-02",
            "end_date": "2026-03-03",
            "reason": "Holiday"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(leave_json(json!(9), "pending")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/leave-requests/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let created = apply_for_leave(
        &client,
        &NewLeaveRequest {
            leave_type_id: 1u64.into(),
            start_date: "2026-03-02".parse().unwrap(),
            end_date: "2026-03-03".parse().unwrap(),
            reason: "Holiday".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.status, RequestStatus::Pending);

    cancel_leave_request(&client, &created.id).await.unwrap();
}

#[tokio::test]
async fn invalid_submissions_never_reach_the_server() {
    let server = MockServer::start().await;
    let client = client(&server);

    let err = apply_for_leave(
        &client,
        &NewLeaveRequest {
            leave_type_id: "1".into(),
            start_date: "2026-03-05".parse().unwrap(),
            end_date: "2026-03-03".parse().unwrap(),
            reason: "x".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EndpointError::Validation(_)));

    let at = |s: &str| workforce_endpoints::clock::parse(s).unwrap();
    let err = submit_manual_time(
        &client,
        &NewManualTimeRequest {
            date: "2026-03-02".parse().unwrap(),
            clock_in: at("17:00"),
            clock_out: at("09:00"),
            reason: "forgot".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EndpointError::Validation(_)));

    let err = fetch_timesheet(
        &client,
        "2026-03-10".parse().unwrap(),
        "2026-03-01".parse().unwrap(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EndpointError::Validation(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn record_ids_cannot_escape_their_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let client = client(&server);

    for raw in ["../profile", "..", "7/approve", "7?all=1", "7#frag"] {
        let err = cancel_leave_request(&client, &RecordId::new(raw))
            .await
            .unwrap_err();
        assert!(matches!(err, EndpointError::Validation(_)), "{raw}");

        let err = decide_approval(&client, &RecordId::new(raw), ApprovalAction::Reject, None)
            .await
            .unwrap_err();
        assert!(matches!(err, EndpointError::Validation(_)), "{raw}");
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn approvals_list_and_decide() {
    let server = MockServer::start().await;
    let item = |status: &str| {
        json!({
            "id": "a1", "kind": "leave", "requester": "Ravi",
            "start_date": "2026-03-02", "end_date": "2026-03-02", "status": status
        })
    };
    Mock::given(method("GET"))
        .and(path("/approvals"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [item("pending")]})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/approvals/a1"))
        .and(body_json(json!({"action": "approve", "comment": "enjoy"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(item("approved")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let pending = list_pending_approvals(&client).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].kind, ApprovalKind::Leave);

    let decided = decide_approval(&client, &pending[0].id, ApprovalAction::Approve, Some(" enjoy "))
        .await
        .unwrap();
    assert_eq!(decided.status, RequestStatus::Approved);
}

#[tokio::test]
async fn timesheet_query_and_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timesheets"))
        .and(query_param("from", "2026-03-02"))
        .and(query_param("to", "2026-03-06"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2026-03-02", "hours": 6.0, "project": "Payroll"},
            {"date": "2026-03-02", "hours": 2.0},
            {"date": "2026-03-03", "hours": 8.0}
        ])))
        .mount(&server)
        .await;

    let rows = fetch_timesheet(
        &client(&server),
        "2026-03-02".parse().unwrap(),
        "2026-03-06".parse().unwrap(),
    )
    .await
    .unwrap();
    let report = TimesheetReport::from_rows(&rows);
    assert_eq!(report.days.len(), 2);
    assert_eq!(report.days[0].hours, 8.0);
    assert_eq!(report.total_hours, 16.0);
}

#[tokio::test]
async fn server_message_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Forbidden"})))
        .mount(&server)
        .await;

    let err = get_profile(&client(&server)).await.unwrap_err();
    assert_eq!(err.to_string(), "Forbidden");
    assert!(!err.is_unauthorized());
}
