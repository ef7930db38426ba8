//! Unit tests for QR crate

#[cfg(test)]
mod support {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use base64::Engine;
    use base64::engine::general_purpose;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub fn post_json(path: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    pub fn get(path: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    pub fn qr_base64(body: &Value) -> String {
        body["data"]["qrBase64"].as_str().unwrap().to_string()
    }

    pub fn png_from_base64(encoded: &str) -> Vec<u8> {
        general_purpose::STANDARD.decode(encoded).unwrap()
    }

    /// Read the QR code in a PNG back into text
    pub fn decode_qr(png: &[u8]) -> String {
        let img = image::load_from_memory(png).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            img.width() as usize,
            img.height() as usize,
            |x, y| img.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR code in the image");
        let (_meta, content) = grids[0].decode().unwrap();
        content
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use crate::domain::value_objects::*;
    use crate::error::QrError;

    #[test]
    fn test_default_config() {
        let config = QrConfig::default();

        assert_eq!(config.box_size, 10);
        assert_eq!(config.border, 4);
        assert_eq!(config.foreground, [0, 0, 0]);
        assert_eq!(config.background, [255, 255, 255]);
        assert_eq!(config.error_correction, ErrorCorrection::Medium);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_render_options_match_config() {
        let options = QrConfig::default().render_options().unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            QrConfig {
                box_size: 0,
                ..QrConfig::default()
            },
            QrConfig {
                box_size: RenderOptions::MAX_BOX_SIZE + 1,
                ..QrConfig::default()
            },
            QrConfig {
                border: RenderOptions::MAX_BORDER + 1,
                ..QrConfig::default()
            },
            QrConfig {
                foreground: [9, 9, 9],
                background: [9, 9, 9],
                ..QrConfig::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(QrError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_border_is_allowed() {
        let config = QrConfig {
            border: 0,
            ..QrConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_correction_parsing() {
        assert_eq!("L".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Low);
        assert_eq!("m".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Medium);
        assert_eq!(" quartile ".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Quartile);
        assert_eq!("HIGH".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::High);
        assert!("X".parse::<ErrorCorrection>().is_err());
        assert_eq!(ErrorCorrection::Quartile.to_string(), "Q");
    }
}

#[cfg(test)]
mod renderer_tests {
    use super::support::decode_qr;
    use crate::application::config::QrConfig;
    use crate::domain::renderer::QrRenderer;
    use crate::infra::png::PngQrRenderer;

    #[test]
    fn test_render_round_trip() {
        let renderer = PngQrRenderer::default();

        for text in ["hello", "", "https://example.com/a?b=c", "héllo, 世界"] {
            let rendered = renderer.render(text).unwrap();
            assert_eq!(decode_qr(&rendered.png), text);
        }
    }

    #[test]
    fn test_render_round_trip_multibyte_large_version() {
        let renderer = PngQrRenderer::default();
        let text = "é".repeat(150);

        let rendered = renderer.render(&text).unwrap();
        assert!(rendered.version >= 10);
        assert_eq!(decode_qr(&rendered.png), text);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = PngQrRenderer::default();
        let first = renderer.render("hello").unwrap();
        let second = renderer.render("hello").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_image_size_follows_config() {
        let renderer = PngQrRenderer::new(&QrConfig {
            box_size: 2,
            border: 1,
            ..QrConfig::default()
        })
        .unwrap();

        let rendered = renderer.render("hello").unwrap();
        let img = image::load_from_memory(&rendered.png).unwrap();

        let side = renderer.options().image_side(rendered.width);
        assert_eq!(side, (21 + 2) * 2);
        assert_eq!(img.width(), side);
        assert_eq!(img.height(), side);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = QrConfig {
            box_size: 0,
            ..QrConfig::default()
        };
        assert!(PngQrRenderer::new(&config).is_err());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::services::encode;
    use crate::domain::value_objects::ErrorCorrection;
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::app_error::AppError;
    use std::error::Error;

    #[test]
    fn test_error_into_response_status_codes() {
        let too_long = encode(&"a".repeat(4000), ErrorCorrection::Medium).unwrap_err();

        let test_cases: Vec<(QrError, StatusCode)> = vec![
            (QrError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (too_long, StatusCode::INTERNAL_SERVER_ERROR),
            (
                QrError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                QrError::InvalidConfig("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.kind().status_code(), expected_status.as_u16());
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(QrError::InvalidRequest("x".into()).code(), "VALIDATION_FAILED");
        assert_eq!(QrError::Internal("x".into()).code(), "QR_GENERATION_FAILED");
        assert_eq!(
            QrError::Encode(qrcode::types::QrError::DataTooLong).code(),
            "QR_GENERATION_FAILED"
        );
    }

    #[test]
    fn test_detail_is_never_empty() {
        assert_eq!(
            QrError::Encode(qrcode::types::QrError::DataTooLong).detail(),
            "QR encoding failed: data too long"
        );
        assert_eq!(QrError::InvalidRequest(String::new()).detail(), "Bad Request");
    }

    #[test]
    fn test_into_app_error() {
        let app_err = QrError::Internal("boom".into()).into_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert_eq!(app_err.message(), GENERATION_FAILED_MESSAGE);
        assert_eq!(app_err.errors()[0].code, "QR_GENERATION_FAILED");
        assert_eq!(app_err.errors()[0].message, "Internal error: boom");
    }

    #[test]
    fn test_app_error_keeps_encoder_error_chain() {
        let app_err = AppError::from(QrError::Encode(qrcode::types::QrError::DataTooLong));

        let source = app_err.source().expect("QrError should be the source");
        assert_eq!(source.to_string(), "QR encoding failed: data too long");

        let root = source.source().expect("encoder error should be chained");
        assert_eq!(root.to_string(), "data too long");
    }
}

#[cfg(test)]
mod router_tests {
    use super::support::*;
    use crate::application::config::QrConfig;
    use crate::domain::renderer::QrRenderer;
    use crate::domain::value_objects::RenderedQr;
    use crate::error::{QrError, QrResult};
    use crate::presentation::router::{qr_router, qr_router_generic};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::json;

    fn app() -> Router {
        qr_router(&QrConfig::default()).unwrap()
    }

    struct FailingRenderer;

    impl QrRenderer for FailingRenderer {
        fn render(&self, _text: &str) -> QrResult<RenderedQr> {
            Err(QrError::Internal("renderer offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_root_reports_online() {
        let app = app();
        let response = tower::ServiceExt::oneshot(app, get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&bytes[..], br#"{"name":"qr-service","status":"online"}"#);
    }

    #[tokio::test]
    async fn test_health_reports_online() {
        let (status, body) = send(&app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "name": "qr-service", "status": "online" }));
    }

    #[tokio::test]
    async fn test_generate_success_envelope() {
        let (status, body) = send(&app(), post_json("/qr", r#"{"data":"hello"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "QR code generated.");
        assert!(body["errors"].is_null());

        let encoded = qr_base64(&body);
        assert!(!encoded.is_empty());
        let png = png_from_base64(&encoded);
        assert_eq!(decode_qr(&png), "hello");
    }

    #[tokio::test]
    async fn test_generate_empty_string() {
        let (status, body) = send(&app(), post_json("/qr", r#"{"data":""}"#)).await;

        assert_eq!(status, StatusCode::OK);
        let png = png_from_base64(&qr_base64(&body));
        assert_eq!(decode_qr(&png), "");
    }

    #[tokio::test]
    async fn test_generate_ignores_unknown_fields() {
        let (status, _) = send(
            &app(),
            post_json("/qr", r#"{"data":"hello","size":300}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_is_idempotent() {
        let app = app();
        let (_, first) = send(&app, post_json("/qr", r#"{"data":"hello"}"#)).await;
        let (_, second) = send(&app, post_json("/qr", r#"{"data":"hello"}"#)).await;
        assert_eq!(qr_base64(&first), qr_base64(&second));
    }

    #[tokio::test]
    async fn test_distinct_inputs_decode_distinctly() {
        let app = app();
        let (_, a) = send(&app, post_json("/qr", r#"{"data":"alpha"}"#)).await;
        let (_, b) = send(&app, post_json("/qr", r#"{"data":"bravo"}"#)).await;

        let decoded_a = decode_qr(&png_from_base64(&qr_base64(&a)));
        let decoded_b = decode_qr(&png_from_base64(&qr_base64(&b)));
        assert_eq!(decoded_a, "alpha");
        assert_eq!(decoded_b, "bravo");
        assert_ne!(decoded_a, decoded_b);
    }

    #[tokio::test]
    async fn test_validation_failures_are_400() {
        let bodies = [
            r#"{}"#,
            r#"{"data":123}"#,
            r#"{"data":null}"#,
            r#"{"data":["a"]}"#,
            r#"not json"#,
            r#"{"data":"unterminated"#,
        ];

        for raw in bodies {
            let (status, body) = send(&app(), post_json("/qr", raw)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw}");
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], "Validation failed.");
            assert!(body["data"].is_null());
            assert_eq!(body["errors"][0]["code"], "VALIDATION_FAILED");
            assert!(!body["errors"][0]["message"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/qr")
            .body(Body::from(r#"{"data":"hello"}"#))
            .unwrap();

        let (status, body) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn test_oversized_input_is_generation_failure() {
        // One byte past version 40-M byte capacity
        let payload = json!({ "data": "a".repeat(2332) }).to_string();
        let (status, body) = send(&app(), post_json("/qr", payload)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "status": "error",
                "message": "Failed to generate QR code.",
                "data": null,
                "errors": [{
                    "code": "QR_GENERATION_FAILED",
                    "message": "QR encoding failed: data too long"
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_input_at_capacity_succeeds() {
        for data in ["a".repeat(2331), "é".repeat(1165)] {
            let payload = json!({ "data": data }).to_string();
            let (status, body) = send(&app(), post_json("/qr", payload)).await;
            assert_eq!(status, StatusCode::OK);
            assert!(!qr_base64(&body).is_empty());
        }
    }

    #[tokio::test]
    async fn test_renderer_failure_is_500() {
        let app = qr_router_generic(FailingRenderer);
        let (status, body) = send(&app, post_json("/qr", r#"{"data":"hello"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["errors"][0]["code"], "QR_GENERATION_FAILED");
        assert_eq!(body["errors"][0]["message"], "Internal error: renderer offline");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_envelope() {
        let (status, body) = send(&app(), get("/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Endpoint not found.");
        assert_eq!(body["errors"][0]["code"], "ENDPOINT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_is_405_envelope() {
        let (status, body) = send(&app(), get("/qr")).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["errors"][0]["code"], "METHOD_NOT_ALLOWED");
    }
}
