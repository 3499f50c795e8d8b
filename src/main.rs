fn main() {
    if let Err(e) = subscription_census::cli::run() {
        // Reported on stdout: the error line replaces the report
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
