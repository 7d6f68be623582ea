//! External ffmpeg invocation for burn-in and soft-mux exports.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Default time limit for one ffmpeg run in seconds
pub const DEFAULT_TIMEOUT: u64 = 600;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Escape a path for use inside a quoted ffmpeg filter argument.
///
/// Filter paths need forward slashes and escaped drive colons.
pub fn escape_filter_path(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .replace(':', "\\:")
}

/// `-vf` value that burns a subtitle file into the video.
pub fn subtitles_filter(subtitle_path: &Path) -> String {
    format!("subtitles='{}'", escape_filter_path(subtitle_path))
}

/// Arguments for burning `subtitle_path` into `video`.
pub fn burn_args(video: &Path, subtitle_path: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-nostdin".into(),
        "-loglevel".into(),
        "error".into(),
        "-i".into(),
        video.into(),
        "-vf".into(),
        subtitles_filter(subtitle_path).into(),
        "-c:a".into(),
        "copy".into(),
        output.into(),
    ]
}

/// Arguments for muxing `subtitle_path` as a selectable track into `output`.
pub fn soft_mux_args(video: &Path, subtitle_path: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-nostdin".into(),
        "-loglevel".into(),
        "error".into(),
        "-i".into(),
        video.into(),
        "-i".into(),
        subtitle_path.into(),
        "-map".into(),
        "0".into(),
        "-map".into(),
        "1".into(),
        "-c".into(),
        "copy".into(),
        "-c:s".into(),
        "srt".into(),
        output.into(),
    ]
}

/// Run ffmpeg with `args`, killing it once `timeout` elapses.
pub fn run(args: &[OsString], timeout: Duration) -> Result<()> {
    tracing::debug!(?args, "spawning ffmpeg");

    let mut child = Command::new("ffmpeg")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .wrap_err("failed to start ffmpeg")
        .suggestion("install ffmpeg and make sure it is on PATH")?;

    // drain stderr so a chatty ffmpeg cannot block on a full pipe
    let stderr = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = String::new();
            pipe.read_to_string(&mut buf).ok();
            buf
        })
    });

    let started = Instant::now();

    let status = loop {
        if let Some(status) = child.try_wait().wrap_err("failed to wait for ffmpeg")? {
            break status;
        }

        if started.elapsed() >= timeout {
            child.kill().ok();
            child.wait().ok();
            return Err(eyre!("ffmpeg timed out after {}s", timeout.as_secs()))
                .suggestion("raise --timeout for long or high resolution videos");
        }

        thread::sleep(POLL_INTERVAL);
    };

    let log = stderr
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    tracing::info!(
        elapsed = %format!("{:.2}s", started.elapsed().as_secs_f32()),
        code = ?status.code(),
        "ffmpeg finished"
    );

    if !status.success() {
        return Err(eyre!("ffmpeg exited with {status}")).with_note(|| log.trim().to_string());
    }

    Ok(())
}
