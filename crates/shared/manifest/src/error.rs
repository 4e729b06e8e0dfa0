use std::borrow::Cow;

/// A specialized [`ManifestError`] enum of this crate.
#[mlp_derive::mlp_error]
pub enum ManifestError {
    #[error("Requirements file not found{}: {message}", format_context(.context))]
    FileNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
