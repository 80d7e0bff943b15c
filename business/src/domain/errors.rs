/// Failures surfaced by the product and image fetchers.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure, timeouts included.
    #[error("fetch.network")]
    Network,
    /// Response bytes are not valid UTF-8 text.
    #[error("fetch.encoding")]
    Encoding,
    /// Envelope strip or JSON parse failed.
    #[error("fetch.malformed_payload")]
    MalformedPayload,
    /// Image URL missing or unparseable.
    #[error("fetch.invalid_url")]
    InvalidUrl,
    /// Non-2xx image status or undecodable image bytes.
    #[error("fetch.image_decode")]
    ImageDecode,
}
