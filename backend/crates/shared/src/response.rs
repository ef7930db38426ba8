//! Response Envelope
//!
//! Every JSON body the services return has the same four fields:
//! `status`, `message`, `data`, `errors`.

use std::borrow::Cow;

use serde::Serialize;

/// エンベロープの `status` フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// エラー詳細（`errors` 配列の要素）
///
/// ## Fields
/// * `code` - 機械可読なエラーコード（例: `QR_GENERATION_FAILED`）
/// * `message` - 人間向けの説明。空文字列にはならない
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

impl ErrorDetail {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// レスポンスエンベロープ
///
/// 成功時は `errors` が `null`、失敗時は `data` が `null` になります。
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let body = ApiResponse::success("Done.", 42);
/// let json = serde_json::to_string(&body).unwrap();
/// assert_eq!(json, r#"{"status":"success","message":"Done.","data":42,"errors":null}"#);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: Cow<'static, str>,
    pub data: Option<T>,
    pub errors: Option<Vec<ErrorDetail>>,
}

impl<T> ApiResponse<T> {
    /// 成功レスポンスを作成
    pub fn success(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    /// 失敗レスポンスを作成
    pub fn error(message: impl Into<Cow<'static, str>>, errors: Vec<ErrorDetail>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}
