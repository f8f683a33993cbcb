// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, timestamped console logging with different severity levels.
// Everything goes to stderr: stdout is reserved for extracted parameters so the
// JSON output stays parseable. Info and Success lines only show up in verbose
// mode.

use std::sync::atomic::{AtomicBool, Ordering};
use colored::*;
use chrono::Local;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub enum LogLevel {
	Info,
	Success,
	Warning,
	Error,
}

pub fn set_verbose(enabled: bool) {
	VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
	VERBOSE.load(Ordering::Relaxed)
}

pub fn log(level: LogLevel, message: &str) {
	if matches!(level, LogLevel::Info | LogLevel::Success) && !is_verbose() {
		return;
	}

	let timestamp = Local::now().format("%H:%M:%S").to_string();
	let prefix = match level {
		LogLevel::Info => "𝒊 ".blue().bold(),
		LogLevel::Success => "✔ ".green().bold(),
		LogLevel::Warning => "⚠ ".yellow().bold(),
		LogLevel::Error => "✘ ".red().bold(),
	};

	eprintln!("[{}] {} {}", timestamp.dimmed(), prefix, message);
}
