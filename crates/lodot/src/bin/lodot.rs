fn main() {
    if let Err(err) = lodot::run() {
        eprintln!("{}", lodot::format_error(&err));
        std::process::exit(1);
    }
}
