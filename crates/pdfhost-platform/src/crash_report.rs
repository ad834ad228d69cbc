use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::paths::crash_report_dir;

/// Base64 runs at least this long are treated as document payloads.
const PAYLOAD_RUN_MIN: usize = 256;

fn payload_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Static pattern; cannot fail to compile.
        Regex::new(&format!(r"[A-Za-z0-9+/]{{{PAYLOAD_RUN_MIN},}}={{0,2}}"))
            .expect("crash_report: static regex pattern must compile")
    })
}

/// Replaces embedded base64 document payloads with a length marker.
///
/// Panic messages raised while handling bridge traffic can carry whole
/// PDFs; reports keep only `[PAYLOAD <n> chars]`.
pub fn redact_payloads(input: &str) -> String {
    payload_pattern()
        .replace_all(input, |caps: &regex::Captures<'_>| {
            format!("[PAYLOAD {} chars]", caps[0].len())
        })
        .into_owned()
}

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
/// On Unix, the report file is set to mode 0o600.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = crash_report_dir().ok()?;
    let path = dir.join(format!("crash_{timestamp}.json"));

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": redact_payloads(&message),
        "location": location,
        "backtrace": redact_payloads(&backtrace),
    });

    let _ = std::fs::create_dir_all(&dir);
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
