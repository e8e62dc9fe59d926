use std::io;

#[derive(Debug, Clone, PartialEq)]
/// Outcome of one completed HTTP exchange with Fast2SMS.
///
/// The provider's response schema is deliberately not modeled: `body` holds
/// the JSON-decoded value as-is, and a non-2xx `http_status` is data rather
/// than an error (the provider rejecting a send is still a completed call).
pub struct DeliveryReport {
    /// Numeric HTTP status code of the exchange.
    pub http_status: u16,
    /// JSON-decoded response body, opaque to this crate.
    pub body: serde_json::Value,
    /// Lenient view of the fields Fast2SMS is known to return.
    pub ack: ProviderAck,
}

impl DeliveryReport {
    /// Whether the HTTP exchange itself returned a 2xx status.
    ///
    /// This says nothing about delivery; consult [`DeliveryReport::ack`] or
    /// the raw body for the provider's verdict.
    pub fn is_http_success(&self) -> bool {
        (200..=299).contains(&self.http_status)
    }

    /// Write the two-line report: the status code, then the decoded body.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.http_status)?;
        writeln!(out, "{}", self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Best-effort view of a Fast2SMS response body.
///
/// Every field is optional: the provider's schema is not guaranteed, and a
/// body missing all of them still decodes to an empty ack.
pub struct ProviderAck {
    /// The provider's `return` flag, when present.
    pub accepted: Option<bool>,
    /// The provider's `request_id`, when present.
    pub request_id: Option<String>,
    /// The provider's `message` lines; Fast2SMS sends either a single string
    /// or an array of strings, normalized here to a list.
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_writes_status_then_body() {
        let report = DeliveryReport {
            http_status: 200,
            body: serde_json::json!({"return": true, "request_id": "abc123"}),
            ack: ProviderAck::default(),
        };

        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "200\n{\"request_id\":\"abc123\",\"return\":true}\n"
        );
    }

    #[test]
    fn http_success_is_a_status_range_check() {
        let mut report = DeliveryReport {
            http_status: 200,
            body: serde_json::Value::Null,
            ack: ProviderAck::default(),
        };
        assert!(report.is_http_success());

        report.http_status = 400;
        assert!(!report.is_http_success());
    }
}
