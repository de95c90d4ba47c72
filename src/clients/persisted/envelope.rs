//! Response envelope decoding and error classification.

use serde_json::{Map, Value};

use crate::clients::errors::{ApiError, DEFAULT_API_ERROR_MESSAGE};
use crate::clients::http_response::HttpResponse;

/// A decoded `{data, errors}` response body.
pub type Envelope = Map<String, Value>;

/// Decodes a response body into an envelope.
///
/// Decoding is all-or-nothing: a body that is not valid JSON, or is valid
/// JSON but not an object, fails.
///
/// # Errors
///
/// Returns a 500 [`ApiError::ServerError`] whose message starts with
/// `"Failed to decode JSON response: "`.
pub fn decode(body: &[u8]) -> Result<Envelope, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(envelope)) => Ok(envelope),
        Ok(_) => Err(ApiError::internal(
            "Failed to decode JSON response: expected a JSON object",
        )),
        Err(e) => Err(ApiError::internal(format!(
            "Failed to decode JSON response: {e}"
        ))),
    }
}

/// Classifies a response with status >= 400.
///
/// The message is the body's `message` string when there is one, else the
/// response's reason phrase. The decoded body (if it decodes at all) is kept
/// as the error's payload.
#[must_use]
pub fn classify_http_error(response: &HttpResponse) -> ApiError {
    let body = serde_json::from_slice::<Value>(&response.body).ok();

    let message = body
        .as_ref()
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .or_else(|| {
            (!response.reason_phrase.is_empty()).then(|| response.reason_phrase.clone())
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status));

    ApiError::from_status(response.status, message, body)
}

/// Fails if the envelope carries a non-empty `errors` array.
///
/// `errors` that is absent, `null`, empty, or not an array is ignored. The
/// error is classified with the response's own status code (normally 200,
/// which maps to `ServerError`); its message is the first entry's `message`
/// and its payload is `{"errors": [...]}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] when errors are present.
pub fn check_errors(envelope: &Envelope, http_status_code: u16) -> Result<(), ApiError> {
    let Some(errors) = envelope
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())
    else {
        return Ok(());
    };

    let message = errors
        .first()
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_API_ERROR_MESSAGE);

    let mut data = Map::new();
    data.insert("errors".to_string(), Value::Array(errors.clone()));

    Err(ApiError::from_status(
        http_status_code,
        message,
        Some(Value::Object(data)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ApiErrorKind;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        match value {
            Value::Object(map) => map,
            _ => panic!("test envelope must be an object"),
        }
    }

    #[test]
    fn test_decode_valid_object() {
        let env = decode(br#"{"data":{"productRetrieve":null}}"#).unwrap();
        assert!(env.contains_key("data"));
    }

    #[test]
    fn test_decode_failures_are_server_errors() {
        let bodies: [&[u8]; 4] = [b"{invalid json}", b"", b"{\"data\":", b"\xff\xfe"];
        for body in bodies {
            let error = decode(body).unwrap_err();
            assert_eq!(error.kind(), ApiErrorKind::ServerError);
            assert_eq!(error.http_status_code(), 500);
            assert!(
                error.message().starts_with("Failed to decode JSON response: "),
                "{}",
                error.message()
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_object_json() {
        let bodies: [&[u8]; 4] = [b"[]", b"\"ok\"", b"null", b"42"];
        for body in bodies {
            let error = decode(body).unwrap_err();
            assert!(error.message().contains("Failed to decode JSON response"));
        }
    }

    #[test]
    fn test_classify_uses_body_message() {
        let response = HttpResponse::new(404, r#"{"message":"Not Found"}"#);
        let error = classify_http_error(&response);

        assert_eq!(error.kind(), ApiErrorKind::NotFound);
        assert_eq!(error.http_status_code(), 404);
        assert_eq!(error.message(), "Not Found");
        assert_eq!(error.response_data(), Some(&json!({"message": "Not Found"})));
    }

    #[test]
    fn test_classify_falls_back_to_reason_phrase() {
        let response = HttpResponse::new(403, r#"{"message": 17}"#);
        let error = classify_http_error(&response);

        assert_eq!(error.kind(), ApiErrorKind::Forbidden);
        assert_eq!(error.message(), "Forbidden");
        assert!(error.response_data().is_some());
    }

    #[test]
    fn test_classify_with_undecodable_body() {
        let response =
            HttpResponse::new(502, "<html>Bad Gateway</html>").with_reason_phrase("Bad Gateway");
        let error = classify_http_error(&response);

        assert_eq!(error.kind(), ApiErrorKind::ServerError);
        assert_eq!(error.http_status_code(), 502);
        assert_eq!(error.message(), "Bad Gateway");
        assert!(error.response_data().is_none());
    }

    #[test]
    fn test_classify_without_reason_phrase() {
        let response = HttpResponse::new(599, "");
        let error = classify_http_error(&response);

        assert_eq!(error.message(), "HTTP 599");
        assert!(error.is_server_error());
    }

    #[test]
    fn test_check_errors_ignores_empty_null_and_non_array() {
        for errors in [json!([]), json!(null), json!("not-an-array"), json!({"message": "x"})] {
            let env = envelope(json!({"data": {}, "errors": errors}));
            assert!(check_errors(&env, 200).is_ok());
        }
        assert!(check_errors(&envelope(json!({"data": {}})), 200).is_ok());
    }

    #[test]
    fn test_check_errors_uses_first_message_and_http_status() {
        let env = envelope(json!({
            "data": null,
            "errors": [{"message": "X"}, {"message": "Y"}]
        }));

        let error = check_errors(&env, 200).unwrap_err();

        assert_eq!(error.kind(), ApiErrorKind::ServerError);
        assert_eq!(error.http_status_code(), 200);
        assert_eq!(error.message(), "X");
        assert_eq!(
            error.response_data(),
            Some(&json!({"errors": [{"message": "X"}, {"message": "Y"}]}))
        );
        assert_eq!(error.graphql_errors().len(), 2);
    }

    #[test]
    fn test_check_errors_default_message() {
        let env = envelope(json!({"errors": [{"path": ["productRetrieve"]}]}));
        let error = check_errors(&env, 200).unwrap_err();
        assert_eq!(error.message(), "API Error");
    }
}
