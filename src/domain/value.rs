use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Fast2SMS API key, sent as the `authorization` header.
///
/// Invariant: non-empty after trimming. The key is a bearer secret, so the
/// `Debug` representation is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name the key is sent under (`authorization`).
    pub const FIELD: &'static str = "authorization";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Provider route code (`route`), e.g. `q` for the quick route.
///
/// The value is an opaque provider literal; this crate assigns no meaning to
/// it beyond passing it through. Invariant: non-empty after trimming.
pub struct Route(String);

impl Route {
    /// Payload field name used by Fast2SMS (`route`).
    pub const FIELD: &'static str = "route";

    /// Create a validated [`Route`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The quick-SMS route (`q`).
    pub fn quick() -> Self {
        Self("q".to_owned())
    }

    /// Borrow the validated route code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Message language tag (`language`), e.g. `english`.
///
/// Opaque provider literal. Invariant: non-empty after trimming.
pub struct Language(String);

impl Language {
    /// Payload field name used by Fast2SMS (`language`).
    pub const FIELD: &'static str = "language";

    /// Create a validated [`Language`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The `english` language tag.
    pub fn english() -> Self {
        Self("english".to_owned())
    }

    /// Borrow the validated language tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Payload field name used by Fast2SMS (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// One recipient entry of the comma-joined `numbers` field.
///
/// Fast2SMS expects bare local subscriber numbers (digits only, no `+` and no
/// country code). Invariant: non-empty and ASCII digits only after trimming.
/// This type does not check number plans; for real parsing use [`PhoneNumber`]
/// and convert it into [`RecipientNumber`].
pub struct RecipientNumber(String);

impl RecipientNumber {
    /// Payload field name used by Fast2SMS (`numbers`).
    pub const FIELD: &'static str = "numbers";

    /// Create a validated recipient number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotDigits {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Digits as sent to Fast2SMS.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RecipientNumber {
    /// Convert an already-parsed phone number to the national significant
    /// number, which is the form Fast2SMS accepts.
    fn from(value: PhoneNumber) -> Self {
        Self(value.parsed.national().value().to_string())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Payload field name used by Fast2SMS (`numbers`).
    pub const FIELD: &'static str = "numbers";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}
