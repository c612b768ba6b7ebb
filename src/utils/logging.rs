pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // keeps ANSI color codes out of log files and CloudWatch.
        .with_ansi(false)
        // the log collector adds the ingestion time.
        .without_time()
        .json()
        .init();
}
