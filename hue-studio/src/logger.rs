use log::LevelFilter;
use std::io::Write;

/// Initializes the logger.
///
/// Format is `[time level file line] message`. The level comes from the
/// number of `-v` flags and can still be overridden through `RUST_LOG`.
pub fn init_logger(verbose: u8) {
    env_logger::builder()
        .filter_level(level_filter(verbose))
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
