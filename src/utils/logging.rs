use log::LevelFilter;

/// Default level when RUST_LOG is unset
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the env_logger backend. RUST_LOG overrides the default level.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .format_target(verbose)
        .parse_default_env();

    // Already initialised (tests, embedding) is fine.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false);
        init_logging(true);
    }
}
