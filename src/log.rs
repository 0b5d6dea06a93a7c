// src/log.rs
// env_logger backend for the `log` facade. Lines carry time since start:
//   [00:00:01.234][INFO] Page 1/3 (start=0): 15 listings

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the logger once. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    start();
    let default = if verbose { "job_scrape=debug" } else { "job_scrape=info" };
    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}
