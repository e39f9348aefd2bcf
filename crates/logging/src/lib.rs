//! helpers for logging.
//!
//! Libraries in this workspace only ever talk to the `log` facade.  Binaries and integration tests call one of these
//! functions once at startup.  Filtering is controlled with `RUST_LOG`, defaulting to `info`.

/// Log to stderr.
///
/// If called multiple times in the same process, only applies once.  Safe to call from every test.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let res = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .format(|buf, record| {
            use std::io::Write;

            let now = time::OffsetDateTime::now_utc();

            writeln!(
                buf,
                "{} {} time={} target={}",
                record.level(),
                record.args(),
                now,
                record.target()
            )
        })
        .is_test(cfg!(test))
        .try_init();

        // Someone else got there first, for example a host application embedding us.
        if let Err(e) = res {
            log::debug!("Logger was already installed: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_repeated_init() {
        super::log_to_stderr();
        super::log_to_stderr();
        log::info!("Logging initialized");
    }
}
