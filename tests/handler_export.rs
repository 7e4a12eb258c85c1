mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

fn server() -> TestServer {
    TestServer::new(common::clicks_router(common::create_test_state())).unwrap()
}

#[tokio::test]
async fn test_export_headers() {
    let response = server()
        .get("/api/shortio/clicks/export")
        .add_query_param("tz", "Asia/Seoul")
        .await;

    response.assert_status_ok();

    assert_eq!(response.header("content-type"), "text/csv; charset=utf-8");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"shortio_clicks_asia_seoul.csv\""
    );
}

#[tokio::test]
async fn test_export_body() {
    let response = server().get("/api/shortio/clicks/export").await;

    response.assert_status_ok();

    let body = response.as_bytes();
    assert!(body.starts_with(b"\xEF\xBB\xBF"));

    let text = std::str::from_utf8(&body[3..]).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "link,date,time,path,city");
    assert_eq!(
        lines[1],
        "https://app.short.cm/login,2020-05-20,06:19:12,/login,Mumbai"
    );
    assert_eq!(
        lines[2],
        "https://app.short.cm/dashboard,2020-05-20,15:30:45,/dashboard,"
    );
}

#[tokio::test]
async fn test_export_utc_filename() {
    let response = server().get("/api/shortio/clicks/export").await;

    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"shortio_clicks_utc.csv\""
    );
}

#[tokio::test]
async fn test_export_invalid_limit() {
    let response = server()
        .get("/api/shortio/clicks/export")
        .add_query_param("limit", "0")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
