use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fractalflow::{
    Canvas, ChannelProgress, EXAMPLE_PROMPTS, EffectMode, LayerStack, SessionStore,
    StudioConfig, StudioSession, VideoRef, list_modes, render, sample, studio_collaborators,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fractalflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the selectable effect modes.
    Modes,
    /// Print the layer stack for a video and effect mode as JSON.
    Render(RenderArgs),
    /// Print the sampled geometry of one moment of a remix as JSON.
    Frame(FrameArgs),
    /// Print the seeded project feed as JSON.
    Feed,
    /// Run a studio session from prompt to published project.
    Create(CreateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Video locator (URL or path).
    #[arg(long)]
    video: String,

    /// Effect mode tag; unknown tags fall back to "None".
    #[arg(long, default_value = "None")]
    mode: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    render: RenderArgs,

    /// Time in seconds.
    #[arg(long, default_value_t = 0.0)]
    t: f64,

    /// Canvas width; defaults to the 540x960 portrait preview.
    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct CreateArgs {
    /// Prompt for the source clip.
    #[arg(long, conflicts_with = "auto_prompt")]
    prompt: Option<String>,

    /// Ask the prompt writer for a prompt instead.
    #[arg(long)]
    auto_prompt: bool,

    /// Effect mode tag for the remix.
    #[arg(long, default_value = "Kaleidoscope")]
    mode: String,

    /// JSON config file; the API key may also come from GEMINI_API_KEY or API_KEY.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip simulated latency of the offline collaborators.
    #[arg(long)]
    instant: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Modes => cmd_modes(),
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Feed => cmd_feed(),
        Command::Create(args) => cmd_create(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize output")?;
    println!("{out}");
    Ok(())
}

fn cmd_modes() -> anyhow::Result<()> {
    for (mode, label) in list_modes() {
        println!("{}\t{label}", mode.tag());
    }
    Ok(())
}

fn layer_stack(args: &RenderArgs) -> LayerStack {
    render(&VideoRef::new(args.video.as_str()), EffectMode::parse_lossy(&args.mode))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let stack = layer_stack(&args);
    print_json(&stack, args.pretty)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let stack = layer_stack(&args.render);
    let preview = Canvas::portrait_preview();
    let canvas = Canvas::new(
        args.width.unwrap_or(preview.width),
        args.height.unwrap_or(preview.height),
    )
    .context("invalid canvas size")?;
    let frame = sample(&stack, canvas, args.t).with_context(|| format!("sample t={}", args.t))?;
    print_json(&frame, args.render.pretty)
}

fn cmd_feed() -> anyhow::Result<()> {
    let store = SessionStore::seeded();
    let feed: Vec<_> = store.list().collect();
    print_json(&feed, true)
}

fn load_config(args: &CreateArgs) -> anyhow::Result<StudioConfig> {
    let base = match &args.config {
        Some(path) => StudioConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => StudioConfig::default(),
    };
    let config = base.with_env_lookup(|key| std::env::var(key).ok());
    Ok(if args.instant { config.instant() } else { config })
}

fn cmd_create(args: CreateArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let mode = EffectMode::parse(&args.mode)
        .filter(|m| *m != EffectMode::None)
        .with_context(|| format!("'{}' is not a selectable effect mode", args.mode))?;
    let collaborators = studio_collaborators(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;

    runtime.block_on(async move {
        let mut store = SessionStore::seeded();
        let mut session = StudioSession::new(collaborators);

        let cancel = session.cancellation();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });

        if args.auto_prompt {
            let prompt = session.auto_prompt().await?;
            eprintln!("prompt: {prompt}");
        } else {
            let prompt = args.prompt.with_context(|| {
                format!(
                    "pass --prompt or --auto-prompt, e.g. --prompt \"{}\"",
                    EXAMPLE_PROMPTS[0]
                )
            })?;
            session.set_prompt(prompt)?;
        }

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
        let printer = tokio::spawn(async move {
            while let Some(status) = rx.recv().await {
                eprintln!("{status}");
            }
        });
        let progress = ChannelProgress(tx);
        let video = session.generate(&progress).await?.video.clone();
        drop(progress);
        let _ = printer.await;
        eprintln!("source: {video}");

        session.select_mode(mode)?;
        let analysis = session.analyze().await?;
        eprintln!("virality: {}/100 - {}", analysis.score, analysis.feedback);
        for tip in &analysis.suggestions {
            eprintln!("  * {tip}");
        }

        let record = session.publish(&mut store)?;
        print_json(&record, true)
    })
}
