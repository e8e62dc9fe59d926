use serde::{Deserialize, Serialize};

use crate::domain::{BulkSms, DeliveryReport, ProviderAck, RecipientNumber};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wire shape of the `bulkV2` request body. Field order here is the field
/// order on the wire.
#[derive(Debug, Serialize)]
struct BulkSmsJsonRequest<'a> {
    route: &'a str,
    message: &'a str,
    language: &'a str,
    numbers: String,
}

/// Encode a request as the provider's JSON body.
///
/// Encoding is deterministic: the same request always serializes to the same
/// bytes (there is no timestamp, nonce, or random component).
pub fn encode_bulk_sms_json(request: &BulkSms) -> Result<String, TransportError> {
    let numbers = request
        .recipients()
        .iter()
        .map(RecipientNumber::raw)
        .collect::<Vec<_>>()
        .join(",");

    let wire = BulkSmsJsonRequest {
        route: request.route().as_str(),
        message: request.message().as_str(),
        language: request.language().as_str(),
        numbers,
    };

    Ok(serde_json::to_string(&wire)?)
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonAck {
    #[serde(rename = "return", default)]
    accepted: Option<bool>,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    message: Option<TransportMessage>,
}

/// Fast2SMS `message` field: a single string on rejections, an array of
/// strings on accepted sends.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportMessage {
    One(String),
    Many(Vec<String>),
}

impl TransportMessage {
    fn into_lines(self) -> Vec<String> {
        match self {
            Self::One(line) => vec![line],
            Self::Many(lines) => lines,
        }
    }
}

/// Decode a completed exchange into a [`DeliveryReport`].
///
/// The body must be valid JSON; beyond that no schema is assumed. The ack
/// view is extracted best-effort and never fails the decode.
pub fn decode_send_response(
    http_status: u16,
    body: &str,
) -> Result<DeliveryReport, TransportError> {
    let body: serde_json::Value = serde_json::from_str(body)?;
    let ack = decode_provider_ack(&body);
    Ok(DeliveryReport {
        http_status,
        body,
        ack,
    })
}

fn decode_provider_ack(body: &serde_json::Value) -> ProviderAck {
    let wire: SendJsonAck = match serde_json::from_value(body.clone()) {
        Ok(wire) => wire,
        Err(_) => return ProviderAck::default(),
    };
    ProviderAck {
        accepted: wire.accepted,
        request_id: wire.request_id,
        messages: wire
            .message
            .map(TransportMessage::into_lines)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{BulkSms, Language, MessageText, RecipientNumber, Route};

    use super::*;

    fn quick_request(numbers: &[&str], message: &str) -> BulkSms {
        let recipients = numbers
            .iter()
            .map(|n| RecipientNumber::new(*n).unwrap())
            .collect();
        BulkSms::quick(recipients, MessageText::new(message).unwrap()).unwrap()
    }

    #[test]
    fn encode_matches_provider_payload_exactly() {
        let request = quick_request(&["9940147796"], "This is Skill Bridge");
        let body = encode_bulk_sms_json(&request).unwrap();
        assert_eq!(
            body,
            r#"{"route":"q","message":"This is Skill Bridge","language":"english","numbers":"9940147796"}"#
        );
    }

    #[test]
    fn encode_joins_recipients_with_commas() {
        let request = quick_request(&["9940147796", "9940147797"], "hello");
        let body = encode_bulk_sms_json(&request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["numbers"], "9940147796,9940147797");
    }

    #[test]
    fn encode_is_byte_identical_across_calls() {
        let request = quick_request(&["9940147796"], "This is Skill Bridge");
        let first = encode_bulk_sms_json(&request).unwrap();
        let second = encode_bulk_sms_json(&request).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn encode_passes_custom_route_and_language_through() {
        let recipients = vec![RecipientNumber::new("9940147796").unwrap()];
        let request = BulkSms::new(
            recipients,
            MessageText::new("नमस्ते").unwrap(),
            Route::new("dlt").unwrap(),
            Language::new("unicode").unwrap(),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&encode_bulk_sms_json(&request).unwrap()).unwrap();
        assert_eq!(value["route"], "dlt");
        assert_eq!(value["language"], "unicode");
        assert_eq!(value["message"], "नमस्ते");
    }

    #[test]
    fn decode_keeps_body_opaque_and_extracts_ack() {
        let json = r#"{"return": true, "request_id": "abc123", "message": ["SMS sent successfully."]}"#;
        let report = decode_send_response(200, json).unwrap();

        assert_eq!(report.http_status, 200);
        assert_eq!(report.body["request_id"], "abc123");
        assert_eq!(report.ack.accepted, Some(true));
        assert_eq!(report.ack.request_id.as_deref(), Some("abc123"));
        assert_eq!(report.ack.messages, vec!["SMS sent successfully."]);
    }

    #[test]
    fn decode_accepts_string_message_variant() {
        let json = r#"{"return": false, "message": "Invalid Authentication"}"#;
        let report = decode_send_response(400, json).unwrap();

        assert_eq!(report.http_status, 400);
        assert_eq!(report.ack.accepted, Some(false));
        assert_eq!(report.ack.request_id, None);
        assert_eq!(report.ack.messages, vec!["Invalid Authentication"]);
    }

    #[test]
    fn decode_tolerates_unexpected_shapes() {
        let report = decode_send_response(200, r#"{"something": "else"}"#).unwrap();
        assert_eq!(report.ack, crate::domain::ProviderAck::default());

        // Valid JSON that is not an object still yields an empty ack.
        let report = decode_send_response(200, r#"["not", "an", "object"]"#).unwrap();
        assert_eq!(report.ack, crate::domain::ProviderAck::default());
        assert!(report.body.is_array());
    }

    #[test]
    fn decode_rejects_non_json_bodies() {
        let err = decode_send_response(200, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
