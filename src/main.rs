use taskman::cli::{run, unexpected_error};

fn main() {
    if let Err(e) = run() {
        unexpected_error(&e);
    }
}
