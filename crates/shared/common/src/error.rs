use std::borrow::Cow;

/// A specialized [`CommonError`] enum of this crate.
#[mlp_derive::mlp_error]
pub enum CommonError {
    #[error("Type contract violation{}: {message}", format_context(.context))]
    TypeContract { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Empty document{}: {message}", format_context(.context))]
    EmptyDocument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("File not found{}: {message}", format_context(.context))]
    FileNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing key{}: {message}", format_context(.context))]
    MissingKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("YAML error{}: {source}", format_context(.context))]
    Yaml { source: serde_yaml_ng::Error, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Binary codec failure{}: {source}", format_context(.context))]
    Binary { source: postcard::Error, context: Option<Cow<'static, str>> },

    #[error("Decompression failure{}: {source}", format_context(.context))]
    Decompress { source: lz4_flex::block::DecompressError, context: Option<Cow<'static, str>> },

    #[error("Invalid artifact{}: {message}", format_context(.context))]
    InvalidArtifact { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
