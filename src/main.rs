fn main() {
    naapi_launch::app::cli::run();
}
