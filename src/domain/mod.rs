//! Domain layer: strong types with validation and invariants.

mod request;
mod response;
mod validation;
mod value;

pub use request::{BULK_SMS_MAX_RECIPIENTS, BulkSms};
pub use response::{DeliveryReport, ProviderAck};
pub use validation::ValidationError;
pub use value::{ApiKey, Language, MessageText, PhoneNumber, RecipientNumber, Route};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn recipient_number_rejects_non_digits() {
        assert!(matches!(
            RecipientNumber::new("99-40"),
            Err(ValidationError::NotDigits { .. })
        ));
    }

    #[test]
    fn bulk_sms_requires_at_least_one_recipient() {
        let msg = MessageText::new("hi").unwrap();
        let err = BulkSms::quick(Vec::new(), msg).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RecipientNumber::FIELD
            }
        ));
    }

    #[test]
    fn bulk_sms_recipient_limit_is_enforced() {
        let number = RecipientNumber::new("9940147796").unwrap();
        let msg = MessageText::new("hi").unwrap();
        let recipients = vec![number; BULK_SMS_MAX_RECIPIENTS + 1];
        let err = BulkSms::quick(recipients, msg).unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { .. }));
    }

    #[test]
    fn quick_request_carries_route_q_and_english() {
        let number = RecipientNumber::new("9940147796").unwrap();
        let msg = MessageText::new("This is Skill Bridge").unwrap();
        let request = BulkSms::quick(vec![number], msg).unwrap();
        assert_eq!(request.route().as_str(), "q");
        assert_eq!(request.language().as_str(), "english");
    }

    #[test]
    fn recipient_number_from_parsed_phone_uses_national_digits() {
        let pn = PhoneNumber::parse(None, "+91 99401 47796").unwrap();
        let recipient: RecipientNumber = pn.into();
        assert_eq!(recipient.raw(), "9940147796");
    }
}
