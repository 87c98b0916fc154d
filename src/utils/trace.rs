// installs the global fmt subscriber used by the lending binary
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time()
        .init();
}

// same as setup_tracing but emits one json object per line, for log shippers
pub fn setup_json_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}
