use mlp_derive::mlp_error;
use std::borrow::Cow;

#[mlp_error]
pub enum SampleError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<Vec<u8>, SampleError> {
    std::fs::read("/definitely/not/here.bin").context("Reading sample")
}

#[test]
fn mlp_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/mlp_error_pass.rs");
    t.compile_fail("tests/ui/mlp_error_no_context.rs");
    t.compile_fail("tests/ui/mlp_error_tuple_variant.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn inner() -> Result<(), SampleError> {
        Err(std::io::Error::other("disk on fire"))?;
        Ok(())
    }

    let err = inner().expect_err("io error should convert");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "I/O failure: disk on fire");
}

#[test]
fn context_is_attached_to_upstream_results() {
    let err = missing_file().expect_err("file must not exist");
    assert!(matches!(err, SampleError::Io { .. }));
    assert!(err.to_string().starts_with("I/O failure (Reading sample): "));
}

#[test]
fn context_overrides_on_own_results() {
    let result: Result<(), SampleError> =
        Err(SampleError::NotFound { message: "model.bin".into(), context: None });

    let err = result.context("Loading weights").expect_err("should stay an error");
    assert_eq!(err.to_string(), "Not found (Loading weights): model.bin");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();

    assert!(matches!(from_static, SampleError::Internal { .. }));
    assert_eq!(from_owned.to_string(), "Internal error: bang");
}
