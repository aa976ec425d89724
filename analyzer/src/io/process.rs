//! Bounded child-process execution for external collaborators.

use std::io::{Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, instrument, warn};
use wait_timeout::ChildExt;

/// Limits applied to one child process.
#[derive(Debug, Clone, Copy)]
pub struct ProcessLimits {
    pub timeout: Duration,
    /// Bytes of stdout/stderr kept in memory; the rest is drained and dropped.
    pub output_limit_bytes: usize,
}

/// Captured child process output.
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub timed_out: bool,
}

impl ProcessOutput {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Spawn `argv`, write `input` to its stdin, and wait up to `limits.timeout`.
///
/// Input is written and output drained on helper threads, so the timeout holds
/// even for a child that never reads its stdin or floods its stdout. A
/// timed-out child is killed and reported through `timed_out`, not as an error.
#[instrument(
    skip_all,
    fields(
        program = argv.first().map(String::as_str),
        timeout_secs = limits.timeout.as_secs()
    )
)]
pub fn run_with_input(
    argv: &[String],
    input: &[u8],
    limits: ProcessLimits,
) -> Result<ProcessOutput> {
    let Some((program, args)) = argv.split_first() else {
        bail!("command must be non-empty");
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawn {program}"))?;
    debug!("spawned child process");

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;
    let limit = limits.output_limit_bytes;
    let stdout_handle = thread::spawn(move || read_limited(stdout, limit));
    let stderr_handle = thread::spawn(move || read_limited(stderr, limit));

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| anyhow!("stdin was not piped"))?;
    let input = input.to_vec();
    let stdin_handle = thread::spawn(move || {
        // The child may exit without reading its input; its status says more.
        if let Err(err) = stdin.write_all(&input) {
            warn!(err = %err, "failed to write child stdin");
        }
    });

    let mut timed_out = false;
    let status = match child.wait_timeout(limits.timeout).context("wait for command")? {
        Some(status) => status,
        None => {
            warn!(timeout_secs = limits.timeout.as_secs(), "command timed out, killing");
            timed_out = true;
            child.kill().context("kill command")?;
            child.wait().context("wait command after kill")?
        }
    };

    if stdin_handle.join().is_err() {
        bail!("stdin writer thread panicked");
    }
    let stdout = join_reader(stdout_handle).context("join stdout")?;
    let stderr = join_reader(stderr_handle).context("join stderr")?;
    debug!(exit_code = ?status.code(), timed_out, "command finished");

    Ok(ProcessOutput {
        status,
        stdout,
        stderr,
        timed_out,
    })
}

fn join_reader(handle: thread::JoinHandle<Result<Vec<u8>>>) -> Result<Vec<u8>> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow!("output reader thread panicked")),
    }
}

fn read_limited<R: Read>(mut reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut dropped = 0usize;
    let mut chunk = [0u8; 8192];

    loop {
        let n = reader.read(&mut chunk).context("read output")?;
        if n == 0 {
            break;
        }
        let keep = n.min(limit.saturating_sub(buf.len()));
        buf.extend_from_slice(&chunk[..keep]);
        dropped += n - keep;
    }

    if dropped > 0 {
        warn!(dropped, "output truncated");
    }
    Ok(buf)
}
