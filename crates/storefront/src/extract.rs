//! Request body extractors.
//!
//! Every POST route takes either a urlencoded form or a JSON body with the
//! same field names.

use std::fmt;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::de::{self, DeserializeOwned, Deserializer, Visitor};

/// Extractor that reads a form or JSON body, picked by `Content-Type`.
///
/// `application/json` (and `+json` types) go through [`Json`]; anything else
/// goes through [`Form`], which rejects non-form content types with 415.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(FormOrJson(input): FormOrJson<ProductInput>) -> Response {
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&request) {
            let Json(value) = Json::<T>::from_request(request, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(request, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(value))
        }
    }
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

/// Deserialize a string field that JSON clients may also send as a number.
///
/// Numbers are turned into their decimal text, so `{"produtoId": 1}` and
/// `produtoId=1` give the same value.
///
/// # Errors
///
/// Fails for anything other than a string or a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringOrNumber)
}

struct StringOrNumber;

impl Visitor<'_> for StringOrNumber {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_owned())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct AddBody {
        #[serde(default, rename = "produtoId", deserialize_with = "string_or_number")]
        product_id: String,
    }

    fn request(content_type: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_string_or_number_from_json() {
        let text: AddBody = serde_json::from_str(r#"{"produtoId":"1"}"#).unwrap();
        let number: AddBody = serde_json::from_str(r#"{"produtoId":1}"#).unwrap();
        let float: AddBody = serde_json::from_str(r#"{"produtoId":25.5}"#).unwrap();
        assert_eq!(text.product_id, "1");
        assert_eq!(number.product_id, "1");
        assert_eq!(float.product_id, "25.5");
    }

    #[test]
    fn test_string_or_number_rejects_objects() {
        let result = serde_json::from_str::<AddBody>(r#"{"produtoId":{"id":1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_json_ignores_parameters_and_case() {
        assert!(is_json(&request("application/json", "{}")));
        assert!(is_json(&request("Application/JSON; charset=utf-8", "{}")));
        assert!(is_json(&request("application/merge-patch+json", "{}")));
        assert!(!is_json(&request("application/x-www-form-urlencoded", "")));
    }

    #[tokio::test]
    async fn test_extracts_form_body() {
        let FormOrJson(body) = FormOrJson::<AddBody>::from_request(
            request("application/x-www-form-urlencoded", "produtoId=+1+"),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(body.product_id, " 1 ");
    }

    #[tokio::test]
    async fn test_extracts_json_body() {
        let FormOrJson(body) =
            FormOrJson::<AddBody>::from_request(request("application/json", r#"{"produtoId":7}"#), &())
                .await
                .unwrap();
        assert_eq!(body.product_id, "7");
    }

    #[tokio::test]
    async fn test_other_content_type_is_unsupported() {
        let result =
            FormOrJson::<AddBody>::from_request(request("text/plain", "produtoId=1"), &()).await;
        let status = result.err().map(|r| r.status());
        assert_eq!(status, Some(axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE));
    }
}
