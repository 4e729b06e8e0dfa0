#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//! Right now this is a single attribute macro, [`macro@mlp_error`], which every
//! library crate uses to declare its error taxonomy.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mlp-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum with named-field variants into a `thiserror` error and
/// wires up the boilerplate every crate in the workspace needs.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` (only the ones not already derived).
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant carrying a source.
/// * `From<SourceError>` for each variant with a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Must be applied to an **enum**.
/// 2. Every variant must use named fields.
/// 3. A variant with a source must also have `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use mlp_derive::mlp_error;
/// use std::borrow::Cow;
///
/// #[mlp_error]
/// pub enum ArtifactError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<Vec<u8>, ArtifactError> {
///     std::fs::read(path).context("Reading artifact")
/// }
/// ```
#[proc_macro_attribute]
pub fn mlp_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
