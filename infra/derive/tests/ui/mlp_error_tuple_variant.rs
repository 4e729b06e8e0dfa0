use mlp_derive::mlp_error;

#[mlp_error]
pub enum TupleError {
    Io(std::io::Error),
}

fn main() {}
