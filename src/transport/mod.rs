//! Transport layer: wire-format details (serialization/deserialization).

mod send_sms;

pub use send_sms::{decode_send_response, encode_bulk_sms_json};
