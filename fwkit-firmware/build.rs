//! Build script for fwkit-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and turns it into `const` items

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    generate_board_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Board settings after validation
struct BoardConfig {
    on_level_high: bool,
    blink_count: u32,
    blink_delay_ms: u32,
    baudrate: u32,
    sentinel: u8,
    reset_pulse_ms: u64,
}

/// Validate board.toml and write `board_config.rs` into OUT_DIR
fn generate_board_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let board = validate(&config);

    let on_level = if board.on_level_high { "High" } else { "Low" };
    let generated = format!(
        "// Generated by build.rs from board.toml\n\
         pub const BLINK: BlinkConfig = BlinkConfig::new({}, Level::{}, {});\n\
         pub const CONSOLE_BAUDRATE: u32 = {};\n\
         pub const CONSOLE_SENTINEL: u8 = {};\n\
         pub const BUS_RESET_PULSE_MS: u64 = {};\n",
        board.blink_count,
        on_level,
        board.blink_delay_ms,
        board.baudrate,
        board.sentinel,
        board.reset_pulse_ms,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("board_config.rs"), generated).unwrap();

    println!("cargo:warning=board.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up an integer and check it against a range
fn int_in_range(
    config: &toml::Value,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(v)) if range.contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            *range.start()
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            *range.start()
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            *range.start()
        }
    }
}

/// Validate every section, collecting all problems before failing
fn validate(config: &toml::Value) -> BoardConfig {
    let mut errors = Vec::new();

    let on_level_high = match config.get("led").and_then(|s| s.get("on_level")) {
        Some(toml::Value::String(level)) if level == "high" => true,
        Some(toml::Value::String(level)) if level == "low" => false,
        Some(_) => {
            errors.push("[led] on_level must be 'high' or 'low'".to_string());
            true
        }
        None => {
            errors.push("[led] missing 'on_level'".to_string());
            true
        }
    };

    let blink_count = int_in_range(config, "blink", "count", 0..=100, &mut errors) as u32;
    let blink_delay_ms = int_in_range(config, "blink", "delay_ms", 1..=10_000, &mut errors) as u32;
    let baudrate = int_in_range(config, "console", "baudrate", 1200..=921_600, &mut errors) as u32;
    let reset_pulse_ms = int_in_range(config, "bus", "reset_pulse_ms", 0..=1000, &mut errors) as u64;

    let sentinel = match config.get("console").and_then(|s| s.get("sentinel")) {
        Some(toml::Value::String(s)) if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
        Some(_) => {
            errors.push("[console] sentinel must be a single ASCII character".to_string());
            b'g'
        }
        None => {
            errors.push("[console] missing 'sentinel'".to_string());
            b'g'
        }
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board.toml                                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    BoardConfig {
        on_level_high,
        blink_count,
        blink_delay_ms,
        baudrate,
        sentinel,
        reset_pulse_ms,
    }
}
