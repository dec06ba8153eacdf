//! Short binary name (`qm`) that forwards to the `quick_memo` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = quick_memo::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
