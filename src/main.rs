fn main() {
    hacsgen::app::cli::run();
}
