//! Log records emitted while parsing

#![cfg(feature = "log")]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wvp_decoder::parse_module;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn every_section_reports_a_summary() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut bytes = wat::parse_str(
        r#"
        (module
          (import "env" "base" (global $base i32))
          (table 1 funcref)
          (memory 1)
          (global $g i32 (i32.const 0))
          (func $main)
          (export "main" (func $main))
          (start $main)
          (elem (i32.const 0) $main)
          (data (global.get $base) "wvp"))
        "#,
    )
    .unwrap();
    bytes.extend([0x00, 0x05, 0x04, b'm', b'e', b't', b'a']);
    parse_module(&bytes).unwrap();

    let records = LOGGER.records.lock().unwrap();
    let traced = |prefix: &str| {
        records
            .iter()
            .any(|(level, text)| *level == Level::Trace && text.starts_with(prefix))
    };
    for prefix in [
        "type section",
        "import section",
        "function section",
        "table section",
        "memory section",
        "global section",
        "export section",
        "start section",
        "element section",
        "code section",
        "data section",
        "custom section",
        "module parsed",
    ] {
        assert!(traced(prefix), "no trace record for {prefix}: {records:?}");
    }
    assert!(records
        .iter()
        .any(|(level, text)| *level == Level::Debug && text.starts_with("final check")));
}
