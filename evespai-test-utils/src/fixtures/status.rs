//! Mock endpoints for the server-status service.

use mockito::{Mock, ServerGuard};

/// Mount a status endpoint returning the given figures.
pub fn mock_status_endpoint(
    server: &mut ServerGuard,
    server_open: bool,
    current_time: i64,
    online_players: i32,
    hits: usize,
) -> Mock {
    let body = serde_json::json!({
        "server_open": server_open,
        "current_time": current_time,
        "online_players": online_players,
    });

    server
        .mock("GET", "/server/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create()
}
