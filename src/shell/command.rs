//! External program execution.
//!
//! Checks shell out to `docker`, `bash`, `python3` and `Rscript`. Every
//! invocation captures both output streams and is bounded by a timeout;
//! a process still running at the deadline is killed together with anything
//! it spawned and reported with [`CommandResult::timed_out`] set.

use crate::error::{LintError, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How long output is still collected after a timed-out process was killed.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timeout).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program exited with code 0.
    pub success: bool,

    /// Whether the program was killed at the timeout.
    pub timed_out: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Timeout (None = wait forever).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options with only a timeout set.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

/// Render a program and its arguments for logs and messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| {
        if a.is_empty() || a.contains(char::is_whitespace) {
            format!("'{}'", a)
        } else {
            a.to_string()
        }
    }));
    parts.join(" ")
}

/// Execute `program` with `args`, capturing output.
///
/// # Errors
///
/// Returns [`LintError::ToolNotFound`] when the program is not installed and
/// [`LintError::CommandFailed`] when it cannot be started or waited on.
/// A non-zero exit or a timeout is not an error.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);
    tracing::debug!("Executing: {}", rendered);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group, so a timeout reaches grandchildren too.
        cmd.process_group(0);
    }

    let mut child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ToolNotFound {
                program: program.to_string(),
            }
        } else {
            LintError::CommandFailed {
                command: rendered.clone(),
                message: e.to_string(),
            }
        }
    })?;

    let stdout_rx = child.stdout.take().map(spawn_reader);
    let stderr_rx = child.stderr.take().map(spawn_reader);

    let wait_failed = |e: std::io::Error| LintError::CommandFailed {
        command: rendered.clone(),
        message: e.to_string(),
    };

    let mut timed_out = false;
    let status = loop {
        if let Some(status) = child.try_wait().map_err(wait_failed)? {
            break Some(status);
        }
        if options.timeout.is_some_and(|t| start.elapsed() >= t) {
            tracing::debug!("Timed out after {:?}: {}", start.elapsed(), rendered);
            kill_tree(&mut child);
            timed_out = true;
            break None;
        }
        thread::sleep(POLL_INTERVAL);
    };

    // A descendant that outlived the child may still hold the pipes open.
    let drain_until = if timed_out {
        Some(Instant::now() + DRAIN_GRACE)
    } else {
        options
            .timeout
            .map(|t| Instant::now() + t.saturating_sub(start.elapsed()).max(DRAIN_GRACE))
    };
    let stdout = collect(stdout_rx, drain_until);
    let stderr = collect(stderr_rx, drain_until);

    let exit_code = status.and_then(|s| s.code());
    Ok(CommandResult {
        exit_code,
        stdout,
        stderr,
        duration: start.elapsed(),
        success: exit_code == Some(0),
        timed_out,
    })
}

fn spawn_reader<R: Read + Send + 'static>(mut stream: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0u8; 8192];
        loop {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });
    rx
}

/// Output of one reader up to EOF, or up to `deadline` when one is set.
fn collect(rx: Option<Receiver<Vec<u8>>>, deadline: Option<Instant>) -> String {
    let Some(rx) = rx else {
        return String::new();
    };
    let mut bytes = Vec::new();
    loop {
        let chunk = match deadline {
            Some(deadline) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(chunk) => chunk,
                    Err(RecvTimeoutError::Timeout) => {
                        tracing::debug!("Stopped waiting for output of a descendant process");
                        break;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(chunk) => chunk,
                Err(_) => break,
            },
        };
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: kill(2) with a negative pid signals the process group
            // the child leads; it has no memory-safety preconditions.
            unsafe {
                libc::kill(-pgid, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}
