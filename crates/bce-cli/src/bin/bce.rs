fn main() {
    bce_cli::cli::cli_main();
}
