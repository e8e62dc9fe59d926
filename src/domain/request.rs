use crate::domain::validation::ValidationError;
use crate::domain::value::{Language, MessageText, RecipientNumber, Route};

/// Client-side cap on recipients per request. Fast2SMS takes the recipient
/// list as one comma-joined field, so an oversized batch fails late and
/// opaquely on the provider side; rejecting it up front keeps the error typed.
pub const BULK_SMS_MAX_RECIPIENTS: usize = 100;

#[derive(Debug, Clone)]
/// A validated `bulkV2` send request.
pub struct BulkSms {
    recipients: Vec<RecipientNumber>,
    message: MessageText,
    route: Route,
    language: Language,
}

impl BulkSms {
    /// Build a request with an explicit route and language.
    pub fn new(
        recipients: Vec<RecipientNumber>,
        message: MessageText,
        route: Route,
        language: Language,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RecipientNumber::FIELD,
            });
        }
        if recipients.len() > BULK_SMS_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: BULK_SMS_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            recipients,
            message,
            route,
            language,
        })
    }

    /// Build a quick-route request (`route=q`, `language=english`).
    pub fn quick(
        recipients: Vec<RecipientNumber>,
        message: MessageText,
    ) -> Result<Self, ValidationError> {
        Self::new(recipients, message, Route::quick(), Language::english())
    }

    pub fn recipients(&self) -> &[RecipientNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn language(&self) -> &Language {
        &self.language
    }
}
