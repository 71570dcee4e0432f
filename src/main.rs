use zigzag::ui::output;

fn main() {
    if let Err(err) = zigzag::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
