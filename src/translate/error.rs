use thiserror::Error;

/// Failure taxonomy for the translation pipeline.
///
/// Only `MissingParameter` ever reaches the external caller as a failure
/// status; every other kind is absorbed into a fallback translation before
/// the response is built.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Caller omitted `text` or `targetLang`. The message doubles as the
    /// wire-level 400 body, so it stays in Spanish.
    #[error("Faltan parámetros text o targetLang")]
    MissingParameter,

    /// No provider credential configured; the resolver short-circuits to
    /// the fallback transform without attempting a call.
    #[error("no provider credential configured")]
    NoCredential,

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider answered 2xx but the first choice carried no usable
    /// text after trimming.
    #[error("provider returned an empty translation")]
    EmptyTranslation,

    /// Network-level failure talking to the provider. Not absorbed by the
    /// resolver; the request handler downgrades it to a 200 response with
    /// fallback text.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
