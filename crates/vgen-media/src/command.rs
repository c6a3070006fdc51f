//! FFmpeg command builder and runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::error::{MediaError, MediaResult};
use crate::progress::{parse_progress_line, FfmpegProgress};

/// Number of raw stderr lines kept for error reporting.
const STDERR_TAIL_LINES: usize = 20;

/// Builder for FFmpeg invocations with one or more inputs.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    /// Input file paths, in `-i` order
    inputs: Vec<PathBuf>,
    /// Output file path
    output: PathBuf,
    /// Arguments between the last input and the output
    output_args: Vec<String>,
    /// Whether to overwrite the output
    overwrite: bool,
    /// FFmpeg log level
    log_level: String,
}

impl FfmpegCommand {
    /// Create a new FFmpeg command producing `output`.
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            inputs: Vec::new(),
            output: output.as_ref().to_path_buf(),
            output_args: Vec::new(),
            overwrite: true,
            log_level: "error".to_string(),
        }
    }

    /// Add an input file.
    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.inputs.push(path.as_ref().to_path_buf());
        self
    }

    /// Add an output argument.
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Set the video codec.
    pub fn video_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:v").output_arg(codec)
    }

    /// Set the audio codec.
    pub fn audio_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:a").output_arg(codec)
    }

    /// Map a stream into the output, e.g. `0:v:0`.
    pub fn map(self, spec: impl Into<String>) -> Self {
        self.output_arg("-map").output_arg(spec)
    }

    /// Truncate the output to the shortest input.
    pub fn shortest(self) -> Self {
        self.output_arg("-shortest")
    }

    /// Set the FFmpeg log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Build the full argument list.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.overwrite {
            args.push("-y".to_string());
        }

        args.push("-v".to_string());
        args.push(self.log_level.clone());

        // Progress output to stderr
        args.push("-progress".to_string());
        args.push("pipe:2".to_string());

        for input in &self.inputs {
            args.push("-i".to_string());
            args.push(input.to_string_lossy().to_string());
        }

        args.extend(self.output_args.clone());
        args.push(self.output.to_string_lossy().to_string());

        args
    }
}

/// Runner for FFmpeg commands with progress reporting and a wall-clock
/// timeout.
pub struct FfmpegRunner {
    ffmpeg: PathBuf,
    timeout_secs: Option<u64>,
}

impl FfmpegRunner {
    /// Create a runner for a resolved `ffmpeg` binary.
    pub fn new(ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            timeout_secs: None,
        }
    }

    /// Kill the process if it runs longer than `secs`.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Run a command to completion.
    pub async fn run(&self, cmd: &FfmpegCommand) -> MediaResult<()> {
        self.run_with_progress(cmd, |_| {}).await
    }

    /// Run a command, reporting progress snapshots as FFmpeg emits them.
    pub async fn run_with_progress<F>(
        &self,
        cmd: &FfmpegCommand,
        progress_callback: F,
    ) -> MediaResult<()>
    where
        F: Fn(FfmpegProgress) + Send + 'static,
    {
        let args = cmd.build_args();
        debug!("Running FFmpeg: {} {}", self.ffmpeg.display(), args.join(" "));

        let mut child = Command::new(&self.ffmpeg)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        let stderr = child.stderr.take().ok_or_else(|| {
            MediaError::ffmpeg_failed("stderr not captured", None, None)
        })?;
        let mut reader = BufReader::new(stderr).lines();

        // Parse progress blocks, keeping a tail of raw lines for diagnostics.
        let stderr_handle = tokio::spawn(async move {
            let mut current = FfmpegProgress::default();
            let mut tail: Vec<String> = Vec::new();

            while let Ok(Some(line)) = reader.next_line().await {
                if let Some(snapshot) = parse_progress_line(&line, &mut current) {
                    progress_callback(snapshot);
                } else if !line.trim().is_empty() {
                    if tail.len() == STDERR_TAIL_LINES {
                        tail.remove(0);
                    }
                    tail.push(line);
                }
            }
            tail
        });

        let status = self.wait_for_completion(&mut child).await;
        let tail = stderr_handle.await.unwrap_or_default();

        let status = status?;
        if status.success() {
            Ok(())
        } else {
            warn!(exit_code = ?status.code(), "FFmpeg exited with non-zero status");
            Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                (!tail.is_empty()).then(|| tail.join("\n")),
                status.code(),
            ))
        }
    }

    /// Wait for the child, killing it if the timeout elapses.
    async fn wait_for_completion(&self, child: &mut Child) -> MediaResult<std::process::ExitStatus> {
        match self.timeout_secs {
            Some(timeout_secs) => {
                let deadline = std::time::Duration::from_secs(timeout_secs);
                match tokio::time::timeout(deadline, child.wait()).await {
                    Ok(result) => Ok(result?),
                    Err(_) => {
                        warn!(timeout_secs, "FFmpeg timed out, killing process");
                        let _ = child.kill().await;
                        Err(MediaError::Timeout(timeout_secs))
                    }
                }
            }
            None => Ok(child.wait().await?),
        }
    }
}

/// Locate the `ffmpeg` binary.
pub fn check_ffmpeg() -> MediaResult<PathBuf> {
    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mux_command_argument_order() {
        let cmd = FfmpegCommand::new("output.mp4")
            .input("input.mp4")
            .input("audio.mp3")
            .video_codec("copy")
            .audio_codec("aac")
            .map("0:v:0")
            .map("1:a:0")
            .shortest();

        let args = cmd.build_args();
        let expected: Vec<String> = [
            "-y", "-v", "error", "-progress", "pipe:2", "-i", "input.mp4", "-i", "audio.mp3",
            "-c:v", "copy", "-c:a", "aac", "-map", "0:v:0", "-map", "1:a:0", "-shortest",
            "output.mp4",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_inputs_precede_output_args() {
        let args = FfmpegCommand::new("out.mp4")
            .input("a.mp4")
            .video_codec("copy")
            .build_args();

        let i_pos = args.iter().position(|a| a == "-i").unwrap();
        let codec_pos = args.iter().position(|a| a == "-c:v").unwrap();
        assert!(i_pos < codec_pos);
        assert_eq!(args.last().unwrap(), "out.mp4");
    }
}
