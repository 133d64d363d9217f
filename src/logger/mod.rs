//! Logger module
//!
//! Provides logging utilities for the fixture server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::fixture::RouteTable;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    DEBUG_ENABLED.store(config.logging.is_debug(), Ordering::Relaxed);
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, routes: &RouteTable) {
    write_info("======================================");
    write_info("Fingerprint fixture server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Profile: {} ({} routes)",
        routes.profile(),
        routes.len()
    ));
    if let Some(digest) = routes.digest() {
        write_info(&format!("Favicon MMH3 Hash: {}", digest.plain));
        write_info(&format!("Favicon MMH3 Hash (76-col base64): {}", digest.wrapped));
    }
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");

    let mut paths: Vec<&str> = routes.paths().collect();
    paths.sort_unstable();
    for path in paths {
        log_debug(&format!("Route {path} -> {}", routes.lookup(path).status));
    }
}

pub fn log_server_stop() {
    write_info("[Shutdown] Listener closed, exiting");
}

pub fn log_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, shutting down"));
}

pub fn log_debug(message: &str) {
    if DEBUG_ENABLED.load(Ordering::Relaxed) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
