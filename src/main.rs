fn main() {
    promptdeck::app::cli::run();
}
