//! Paging query parameters and list responses

use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpRequest, HttpResponse};
use flint_api::app::configure;
use flint_api::dto::{CursorPageParams, OffsetPageParams};
use flint_api::handlers::{ApiResult, ProblemResultExt};
use flint_shared::config::ServerConfig;
use flint_shared::types::{Page, PaginationResponse, SliceCursor};
use serde_json::Value;

const TOTAL: u32 = 23;

async fn list_numbers(
    req: HttpRequest,
    params: web::Query<OffsetPageParams>,
) -> ApiResult<HttpResponse> {
    let request = params.to_page_request().or_problem(&req)?;

    let content: Vec<u32> = (1..=TOTAL)
        .skip(request.offset() as usize)
        .take(request.limit() as usize)
        .collect();
    let page = Page::for_request(content, &request, u64::from(TOTAL));

    Ok(HttpResponse::Ok().json(PaginationResponse::of_offset(page)))
}

/// Cursor is the last number already returned
async fn scroll_numbers(
    req: HttpRequest,
    params: web::Query<CursorPageParams>,
) -> ApiResult<HttpResponse> {
    let request = params.to_cursor_request().or_problem(&req)?;

    let after: u32 = request
        .cursor
        .as_deref()
        .and_then(|c| c.parse().ok())
        .unwrap_or(0);
    let items: Vec<u32> = (after + 1..=TOTAL).take(request.size as usize).collect();
    let next = items
        .last()
        .filter(|last| **last < TOTAL)
        .map(|last| last.to_string());

    let slice = SliceCursor::of(items, request.cursor.clone(), next);
    Ok(HttpResponse::Ok().json(PaginationResponse::of_cursor(slice)))
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .route("/numbers", web::get().to(list_numbers))
                .route("/numbers/scroll", web::get().to(scroll_numbers))
                .configure(|cfg| configure(cfg, &ServerConfig::default())),
        )
        .await
    };
}

#[actix_web::test]
async fn test_last_offset_page() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/numbers?page=3&size=10").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], serde_json::json!([21, 22, 23]));
    assert_eq!(
        body["meta"],
        serde_json::json!({
            "type": "OFFSET",
            "returned": 3,
            "currentPage": 3,
            "totalPages": 3,
            "totalElements": 23
        })
    );
}

#[actix_web::test]
async fn test_offset_defaults() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/numbers").to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["meta"]["currentPage"], 1);
    assert_eq!(body["meta"]["returned"], 20);
    assert_eq!(body["meta"]["totalPages"], 2);
}

#[actix_web::test]
async fn test_invalid_offset_params_are_validation_problem() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/numbers?page=0&size=500").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorCode"], "COMMON.INVALID_INPUT");
    assert_eq!(body["additionalInfo"]["page"], "page must be 1 or greater");
    assert_eq!(body["additionalInfo"]["size"], "size must be between 1 and 100");
}

#[actix_web::test]
async fn test_cursor_scroll() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/numbers/scroll?size=10").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(
        body["meta"],
        serde_json::json!({ "type": "CURSOR", "returned": 10, "nextCursor": "10" })
    );

    let req = test::TestRequest::get()
        .uri("/numbers/scroll?cursor=20&size=10")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"], serde_json::json!([21, 22, 23]));
    assert_eq!(body["meta"], serde_json::json!({ "type": "CURSOR", "returned": 3 }));
}

#[actix_web::test]
async fn test_empty_cursor_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/numbers/scroll?cursor=").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["additionalInfo"]["cursor"], "cursor must not be empty");
}

// Plain unit tests; kept apart so `#[test]` is not the actix macro
mod conversion {
    use flint_api::dto::{CursorPageParams, OffsetPageParams};
    use flint_shared::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    #[test]
    fn test_offset_params_convert() {
        let params = OffsetPageParams { page: 2, size: 50 };
        let request = params.to_page_request().unwrap();
        assert_eq!(request.offset(), 50);
        assert_eq!(request.limit(), 50);
    }

    #[test]
    fn test_offset_params_reject_oversized_page() {
        let params = OffsetPageParams { page: 1, size: 101 };
        let failure = params.to_page_request().unwrap_err();
        assert_eq!(failure.object_name(), "offsetPageParams");
        assert_eq!(failure.violations().len(), 1);
        assert_eq!(failure.violations()[0].field.as_deref(), Some("size"));
    }

    #[test]
    fn test_cursor_params_convert() {
        let params = CursorPageParams {
            cursor: Some("abc".to_string()),
            size: 5,
        };
        let request = params.to_cursor_request().unwrap();
        assert_eq!(request.cursor.as_deref(), Some("abc"));
        assert!(!request.is_first());
    }

    #[test]
    fn test_size_limits_follow_shared_constants() {
        let params: OffsetPageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.size, DEFAULT_PAGE_SIZE);

        let at_limit = OffsetPageParams {
            page: 1,
            size: MAX_PAGE_SIZE,
        };
        assert!(at_limit.to_page_request().is_ok());

        let over_limit = CursorPageParams {
            cursor: None,
            size: MAX_PAGE_SIZE + 1,
        };
        assert!(over_limit.to_cursor_request().is_err());
    }
}
