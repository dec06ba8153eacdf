fn main() {
    if let Err(err) = quick_memo::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
