//! vgen command-line front-end.

mod spinner;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

use vgen_client::VideoClient;
use vgen_engine::{EngineConfig, Generator};
use vgen_history::HistoryStore;
use vgen_media::FfmpegTranscoder;
use vgen_models::{
    builtin_tracks, AspectRatio, AudioTrack, GenerationRequest, HistoryEntry, SeedImage,
};

use crate::spinner::SpinnerSink;

#[derive(Parser)]
#[command(
    name = "vgen",
    version,
    about = "Generate short videos from text prompts, with optional background audio"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a video from a prompt
    Generate(GenerateArgs),
    /// Inspect or edit the generation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// List the bundled audio tracks
    Tracks,
}

#[derive(Args)]
struct GenerateArgs {
    /// Text prompt describing the video
    #[arg(long, short)]
    prompt: String,

    /// Seed image to guide the first frame (png, jpeg or webp)
    #[arg(long)]
    image: Option<PathBuf>,

    /// Aspect ratio: 16:9, 9:16, 1:1, 4:3 or 3:4
    #[arg(long, default_value = "16:9", value_parser = parse_aspect)]
    aspect: AspectRatio,

    /// Bundled audio track id (see `vgen tracks`)
    #[arg(long, conflicts_with = "audio_url")]
    audio: Option<String>,

    /// Custom audio track URL
    #[arg(long)]
    audio_url: Option<String>,

    /// Display name for --audio-url
    #[arg(long, requires = "audio_url")]
    audio_name: Option<String>,

    /// Directory generated videos are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List past generations, newest first
    List,
    /// Remove one entry by id
    Remove { id: String },
    /// Remove every entry
    Clear,
}

fn parse_aspect(s: &str) -> Result<AspectRatio, String> {
    s.parse::<AspectRatio>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate(args).await,
        Command::History { action } => history(action).await,
        Command::Tracks => {
            tracks();
            Ok(())
        }
    }
}

/// Colored output for dev, JSON for production, selected by `LOG_FORMAT`.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("vgen=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}

async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let request = build_request(&args)?;

    let client = VideoClient::from_env().context("could not create the generation client")?;

    let mut config = EngineConfig::from_env();
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }

    let generator = Generator::new(Arc::new(client), Arc::new(FfmpegTranscoder::new()), config);

    let sink = SpinnerSink::new();
    let video = match generator.generate(&request, &sink).await {
        Ok(video) => {
            sink.finish("Video ready!");
            video
        }
        Err(e) => {
            sink.abandon("Generation failed");
            return Err(e.into());
        }
    };

    if let Some(warning) = &video.warning {
        eprintln!("warning: {warning}");
    }
    println!("{}", video.path.display());

    let mut store = HistoryStore::open_default().await?;
    store
        .add(HistoryEntry::from_request(&request, video.path.clone()))
        .await?;
    info!(path = %video.path.display(), "Generation recorded in history");

    Ok(())
}

fn build_request(args: &GenerateArgs) -> anyhow::Result<GenerationRequest> {
    let mut request = GenerationRequest::new(args.prompt.clone()).with_aspect_ratio(args.aspect);

    if let Some(path) = &args.image {
        let bytes = std::fs::read(path)
            .with_context(|| format!("could not read seed image {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        request = request.with_image(SeedImage {
            bytes,
            media_type: media_type_for(path)?,
            file_name,
        });
    }

    if let Some(track) = resolve_audio(args)? {
        request = request.with_audio(track);
    }

    Ok(request)
}

fn resolve_audio(args: &GenerateArgs) -> anyhow::Result<Option<AudioTrack>> {
    if let Some(id) = &args.audio {
        let track = builtin_tracks()
            .into_iter()
            .find(|t| t.id == *id)
            .with_context(|| {
                format!("unknown audio track '{id}', run `vgen tracks` for the available ids")
            })?;
        return Ok(Some(track));
    }

    if let Some(raw) = &args.audio_url {
        let url = Url::parse(raw).with_context(|| format!("invalid audio URL '{raw}'"))?;
        let name = args
            .audio_name
            .clone()
            .unwrap_or_else(|| "Custom track".to_string());
        return Ok(Some(AudioTrack {
            id: "custom".to_string(),
            name,
            url,
        }));
    }

    Ok(None)
}

fn media_type_for(path: &Path) -> anyhow::Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let media_type = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        other => bail!("unsupported seed image extension '{other}', expected png, jpeg or webp"),
    };
    Ok(media_type.to_string())
}

async fn history(action: HistoryAction) -> anyhow::Result<()> {
    let mut store = HistoryStore::open_default().await?;

    match action {
        HistoryAction::List => {
            if store.list().is_empty() {
                println!("No generations yet.");
                return Ok(());
            }
            for entry in store.list() {
                println!(
                    "{}  {}  {:>5}  {}",
                    entry.id,
                    entry.created_at.format("%Y-%m-%d %H:%M"),
                    entry.aspect_ratio,
                    entry.prompt
                );
                if let Some(audio) = &entry.audio_name {
                    println!("{:38}audio: {audio}", "");
                }
                println!("{:38}{}", "", entry.video_path.display());
            }
        }
        HistoryAction::Remove { id } => {
            let removed = store.remove(&id).await?;
            println!("Removed '{}'", removed.prompt);
        }
        HistoryAction::Clear => {
            store.clear().await?;
            println!("History cleared.");
        }
    }

    Ok(())
}

fn tracks() {
    for track in builtin_tracks() {
        println!("{:<10} {:<16} {}", track.id, track.name, track.url);
    }
}
