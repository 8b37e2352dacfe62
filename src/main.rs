//! StaffScope — a fast, filterable HR records workspace.
//!
//! Entry point: initialises structured logging and launches the eframe
//! application window.

// Hide the console window in release builds on Windows.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Declare crate modules
mod app;
mod app_actions;
mod app_update;
mod core;
mod export;
mod ui;
mod util;

use tracing_subscriber::Layer as _;

use app::StaffScopeApp;
use util::constants;

fn main() -> eframe::Result<()> {
    // Set up dual-layer logging: stderr (env-controlled) + file (always debug).
    // The file log lives under the platform app-data directory.
    let log_dir = init_log_dir();
    init_logging(&log_dir);

    tracing::info!(
        "{} v{} starting",
        constants::APP_NAME,
        constants::APP_VERSION,
    );
    if let Some(dir) = &log_dir {
        tracing::info!("Log file: {}", dir.join(constants::LOG_FILE_NAME).display());
    }

    let icon = load_app_icon();

    // Configure the native window
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(format!(
            "{} v{}",
            constants::APP_NAME,
            constants::APP_VERSION
        ))
        .with_inner_size([1280.0, 800.0])
        .with_min_inner_size([900.0, 560.0]);

    if let Some(icon) = icon {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(StaffScopeApp::new(cc)))),
    )
}

/// Resolve the platform app-data directory for log storage.
///
/// `%LOCALAPPDATA%` on Windows, `$XDG_DATA_HOME` (or `~/.local/share`)
/// elsewhere. Returns `None` when no usable base directory exists.
fn app_data_base() -> Option<std::path::PathBuf> {
    if let Ok(dir) = std::env::var("LOCALAPPDATA") {
        return Some(std::path::PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("XDG_DATA_HOME") {
        return Some(std::path::PathBuf::from(dir));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".local").join("share"))
}

/// Create the persistent log directory under the app-data base.
///
/// Returns `Some(path)` to the log directory on success, `None` if the
/// directory cannot be created (logging falls back to stderr only).
fn init_log_dir() -> Option<std::path::PathBuf> {
    let log_dir = app_data_base()?
        .join(constants::APP_DATA_DIR)
        .join(constants::LOG_DIR);
    std::fs::create_dir_all(&log_dir).ok()?;

    // Rotate the log file if it exceeds the size limit.
    let log_file = log_dir.join(constants::LOG_FILE_NAME);
    if log_file.exists() {
        if let Ok(meta) = std::fs::metadata(&log_file) {
            if meta.len() > constants::MAX_LOG_FILE_SIZE {
                let backup = log_dir.join("staffscope.log.old");
                let _ = std::fs::rename(&log_file, &backup);
            }
        }
    }

    Some(log_dir)
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_dir` is `Some`): always writes at `debug` level
///   to a persistent log file for post-mortem diagnostics.
fn init_logging(log_dir: &Option<std::path::PathBuf>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let log_path = dir.join(constants::LOG_FILE_NAME);
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .with_filter(tracing_subscriber::EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer.with_filter(env_filter))
                .with(file_layer)
                .init();
            return;
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}

/// Load the application icon from the compile-time-embedded ICO data.
///
/// The ICO file is generated by `build.rs` and embedded via `include_bytes!`.
/// Extracts the largest image entry and decodes it to RGBA for use as
/// the window titlebar and taskbar icon.
/// Returns `None` if the icon cannot be decoded.
fn load_app_icon() -> Option<std::sync::Arc<egui::IconData>> {
    static ICO_BYTES: &[u8] = include_bytes!("../assets/icon.ico");

    // Parse the ICO header to find the largest image entry.
    // ICO format: 6-byte header, then 16-byte directory entries.
    if ICO_BYTES.len() < 6 {
        return None;
    }
    let count = u16::from_le_bytes([ICO_BYTES[4], ICO_BYTES[5]]) as usize;
    if count == 0 {
        return None;
    }

    // Find the entry with the largest dimensions
    let mut best_idx = 0usize;
    let mut best_size = 0u32;
    for i in 0..count {
        let offset = 6 + i * 16;
        if offset + 16 > ICO_BYTES.len() {
            break;
        }
        // Width/height: 0 means 256
        let w = if ICO_BYTES[offset] == 0 {
            256u32
        } else {
            ICO_BYTES[offset] as u32
        };
        let h = if ICO_BYTES[offset + 1] == 0 {
            256u32
        } else {
            ICO_BYTES[offset + 1] as u32
        };
        if w * h > best_size {
            best_size = w * h;
            best_idx = i;
        }
    }

    // Read the data offset and size for the best entry
    let dir_offset = 6 + best_idx * 16;
    let data_size = u32::from_le_bytes([
        ICO_BYTES[dir_offset + 8],
        ICO_BYTES[dir_offset + 9],
        ICO_BYTES[dir_offset + 10],
        ICO_BYTES[dir_offset + 11],
    ]) as usize;
    let data_offset = u32::from_le_bytes([
        ICO_BYTES[dir_offset + 12],
        ICO_BYTES[dir_offset + 13],
        ICO_BYTES[dir_offset + 14],
        ICO_BYTES[dir_offset + 15],
    ]) as usize;

    // Guard against malformed ICO data where offset + size would wrap.
    let data_end = data_offset.checked_add(data_size)?;
    if data_end > ICO_BYTES.len() {
        return None;
    }

    let png_data = &ICO_BYTES[data_offset..data_end];

    // Decode the PNG into RGBA pixels
    let img = image::load_from_memory(png_data).ok()?;
    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());

    Some(std::sync::Arc::new(egui::IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    }))
}
