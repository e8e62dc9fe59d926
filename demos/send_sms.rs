use std::io;

use fast2sms::{ApiKey, BulkSms, Fast2SmsClient, Language, MessageText, RecipientNumber, Route};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("FAST2SMS_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAST2SMS_API_KEY environment variable is required",
        )
    })?;
    let numbers_raw = std::env::var("FAST2SMS_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FAST2SMS_NUMBERS environment variable is required",
        )
    })?;
    let message = std::env::var("FAST2SMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the fast2sms example.".to_owned());
    let route = std::env::var("FAST2SMS_ROUTE").map_or_else(|_| Ok(Route::quick()), Route::new)?;
    let language = std::env::var("FAST2SMS_LANGUAGE")
        .map_or_else(|_| Ok(Language::english()), Language::new)?;

    let recipients = numbers_raw
        .split(',')
        .map(RecipientNumber::new)
        .collect::<Result<Vec<_>, _>>()?;
    let text = MessageText::new(message)?;
    let request = BulkSms::new(recipients, text, route, language)?;

    let client = Fast2SmsClient::new(ApiKey::new(api_key)?);
    let report = client.send_bulk_sms(request).await?;
    report.write_to(&mut io::stdout().lock())?;

    Ok(())
}
