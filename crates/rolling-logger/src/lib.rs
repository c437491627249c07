//! Rolling File Logger
//!
//! Installs as the global `log` logger. Lines go to `<log_dir>/<app>.log`,
//! rotating to `<app>.log.1 .. <app>.log.N` once the active file passes the
//! size cap. The most recent lines are also kept in an in-memory circular
//! buffer so the app can show them without touching the filesystem.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Size cap for the active log file before rotation kicks in
const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Rotated files kept on disk (`.1` newest, `.N` oldest)
const MAX_ROTATIONS: u32 = 3;
/// Lines retained in the circular buffer
const BUFFER_LINES: usize = 256;

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

struct Inner {
    file: File,
    written: u64,
    recent: VecDeque<String>,
}

/// File-backed logger with a bounded in-memory tail
pub struct RollingLogger {
    path: PathBuf,
    max_bytes: u64,
    rotations: u32,
    inner: Mutex<Inner>,
}

impl RollingLogger {
    /// Open (or create) the active log file at `path`
    pub fn open(path: PathBuf, max_bytes: u64, rotations: u32) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            rotations,
            inner: Mutex::new(Inner {
                file,
                written,
                recent: VecDeque::with_capacity(BUFFER_LINES),
            }),
        })
    }

    /// Append one formatted line, rotating first if the cap is reached
    pub fn write_line(&self, level: Level, target: &str, message: &str) -> io::Result<()> {
        let line = format!(
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level,
            target,
            message
        );

        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.written >= self.max_bytes {
            self.rotate(&mut inner)?;
        }
        inner.file.write_all(line.as_bytes())?;
        inner.file.write_all(b"\n")?;
        inner.written += line.len() as u64 + 1;

        if inner.recent.len() == BUFFER_LINES {
            inner.recent.pop_front();
        }
        inner.recent.push_back(line);
        Ok(())
    }

    /// Lines currently held in the circular buffer, oldest first
    pub fn recent(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.recent.iter().cloned().collect()
    }

    /// Shift `<app>.log.N-1` -> `<app>.log.N`, `<app>.log` -> `<app>.log.1`,
    /// then start a fresh active file
    fn rotate(&self, inner: &mut Inner) -> io::Result<()> {
        inner.file.flush()?;
        for n in (1..self.rotations).rev() {
            let from = rotated_path(&self.path, n);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.path, n + 1))?;
            }
        }
        if self.rotations > 0 && self.path.exists() {
            fs::rename(&self.path, rotated_path(&self.path, 1))?;
        }
        inner.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        inner.written = 0;
        Ok(())
    }
}

fn rotated_path(path: &Path, n: u32) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(format!(".{}", n));
    PathBuf::from(os)
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = self.write_line(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let _ = inner.file.flush();
    }
}

/// Install the rolling logger as the global `log` backend.
///
/// Safe to call once per process; a second call reports `AlreadyExists`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> io::Result<()> {
    let path = log_dir.as_ref().join(format!("{}.log", app_name));
    let logger: &'static RollingLogger =
        Box::leak(Box::new(RollingLogger::open(path, MAX_FILE_BYTES, MAX_ROTATIONS)?));

    LOGGER
        .set(logger)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "logger already initialized"))?;
    log::set_logger(logger)
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

fn write_direct(level: Level, message: &str) -> io::Result<()> {
    match LOGGER.get() {
        Some(logger) => logger.write_line(level, "app", message),
        None => Err(io::Error::new(io::ErrorKind::NotConnected, "logger not initialized")),
    }
}

pub fn debug(message: &str) -> io::Result<()> {
    write_direct(Level::Debug, message)
}

pub fn info(message: &str) -> io::Result<()> {
    write_direct(Level::Info, message)
}

pub fn warn(message: &str) -> io::Result<()> {
    write_direct(Level::Warn, message)
}

pub fn error(message: &str) -> io::Result<()> {
    write_direct(Level::Error, message)
}

/// Recent lines from the global logger, oldest first; empty before init
pub fn recent_logs() -> Vec<String> {
    LOGGER.get().map(|l| l.recent()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_to_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::open(dir.path().join("app.log"), 1024 * 1024, 3).unwrap();

        logger.write_line(Level::Info, "test", "hello").unwrap();
        logger.write_line(Level::Warn, "test", "world").unwrap();
        logger.flush();

        let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(content.contains("[INFO] test: hello"));
        assert!(content.contains("[WARN] test: world"));
    }

    #[test]
    fn keeps_recent_lines_in_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RollingLogger::open(dir.path().join("app.log"), 1024 * 1024, 3).unwrap();

        for i in 0..BUFFER_LINES + 10 {
            logger.write_line(Level::Info, "test", &format!("line {}", i)).unwrap();
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), BUFFER_LINES);
        assert!(recent.last().unwrap().contains(&format!("line {}", BUFFER_LINES + 9)));
        assert!(recent.first().unwrap().contains("line 10"));
    }

    #[test]
    fn rotates_when_size_cap_reached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        // Tiny cap so a couple of lines force rotation
        let logger = RollingLogger::open(path.clone(), 64, 2).unwrap();

        for i in 0..20 {
            logger
                .write_line(Level::Info, "test", &format!("a reasonably long message {}", i))
                .unwrap();
        }
        logger.flush();

        assert!(path.exists());
        assert!(rotated_path(&path, 1).exists());
        // Never more rotated files than configured
        assert!(!rotated_path(&path, 3).exists());
    }

    #[test]
    fn resumes_byte_count_on_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        {
            let logger = RollingLogger::open(path.clone(), 1024, 2).unwrap();
            logger.write_line(Level::Info, "test", "before reopen").unwrap();
            logger.flush();
        }
        let logger = RollingLogger::open(path.clone(), 1024, 2).unwrap();
        logger.write_line(Level::Info, "test", "after reopen").unwrap();
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("before reopen"));
        assert!(content.contains("after reopen"));
    }
}
