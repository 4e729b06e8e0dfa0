use mlp_derive::mlp_error;

#[mlp_error]
pub enum MissingContextError {
    Io { source: std::io::Error },
}

fn main() {}
