use env_logger::Env;

/// Initialize the global logger for the command line front end.
///
/// `RUST_LOG` wins when it is set. Calling this more than once is harmless.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "nricode=debug"
    } else {
        "nricode=info"
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
