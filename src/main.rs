fn main() {
    wordslides::app::cli::run();
}
