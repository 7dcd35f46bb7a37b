use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use softraster::{
    AnimationState, FrameCompositor, FrameConfig, FrameRGBA, LifecycleEvent, NullSink,
    OffscreenSurface, PixelBuffer, PngSequenceSink, RunOpts, ScriptedEvents,
};

#[derive(Parser, Debug)]
#[command(name = "softraster", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Drive the headless frame loop, optionally writing a PNG sequence.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct Geometry {
    /// Visible width in pixels.
    #[arg(long)]
    width: u32,

    /// Visible height in pixels.
    #[arg(long)]
    height: u32,

    /// Cells per row. Defaults to the width.
    #[arg(long)]
    stride: Option<u32>,

    /// Frame configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    geometry: Geometry,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    geometry: Geometry,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Tick rate in frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Sleep between ticks to hold the tick rate.
    #[arg(long)]
    paced: bool,

    /// Write every presented frame as `frame_NNNNN.png` here.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn load_compositor(path: Option<&Path>) -> anyhow::Result<FrameCompositor> {
    let config = match path {
        Some(p) => FrameConfig::from_path(p)?,
        None => FrameConfig::default(),
    };
    FrameCompositor::new(config).with_context(|| "invalid frame config")
}

fn stride_for(g: &Geometry) -> anyhow::Result<u32> {
    let stride = g.stride.unwrap_or(g.width);
    anyhow::ensure!(
        stride >= g.width,
        "stride {stride} must be >= width {}",
        g.width
    );
    Ok(stride)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let compositor = load_compositor(args.geometry.config.as_deref())?;
    let Geometry { width, height, .. } = args.geometry;
    let stride = stride_for(&args.geometry)?;

    let cells = softraster::required_len(width, height, stride);
    let mut pixels = vec![0u32; cells];
    let mut buf = PixelBuffer::new(&mut pixels, width, height, stride)?;

    let state = AnimationState::new().advance_by(compositor.config().angle_step, args.frame);
    compositor.render_frame(&mut buf, state);

    let frame = FrameRGBA::from_buffer(&buf);
    softraster::write_png(&args.out, &frame)
        .with_context(|| format!("write frame {}", args.frame))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let compositor = load_compositor(args.geometry.config.as_deref())?;
    let Geometry { width, height, .. } = args.geometry;
    let stride = stride_for(&args.geometry)?;

    let opts = RunOpts {
        fps: softraster::Fps::new(args.fps, 1)?,
        max_frames: Some(args.frames),
        paced: args.paced,
    };
    let mut surface = OffscreenSurface::new(stride - width);
    let mut events = ScriptedEvents::new([(0, LifecycleEvent::WindowCreated { width, height })]);

    let stats = match &args.out_dir {
        Some(dir) => {
            let mut sink = PngSequenceSink::new(dir);
            softraster::run(
                &mut surface,
                &mut events,
                &compositor,
                AnimationState::new(),
                &opts,
                &mut sink,
            )
            .with_context(|| format!("render png sequence into '{}'", dir.display()))?
        }
        None => softraster::run(
            &mut surface,
            &mut events,
            &compositor,
            AnimationState::new(),
            &opts,
            &mut NullSink,
        )?,
    };

    eprintln!(
        "rendered {} frames ({} skipped), final angle {:.4}",
        stats.frames_rendered, stats.frames_skipped, stats.final_state.angle
    );
    Ok(())
}
