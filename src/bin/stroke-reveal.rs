use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use stroke_reveal::{
    CpuSurface, GeometrySource, RevealConfig, RevealSession, SvgGeometryProvider, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "stroke-reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render reveal frames at given times as PNGs.
    Snapshot(SnapshotArgs),
    /// Print the outlines an SVG produces for a viewport.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Input SVG. Overrides the config's geometry source.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Reveal config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Host height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,
}

impl SourceArgs {
    fn reveal_config(&self) -> anyhow::Result<RevealConfig> {
        let mut cfg = match &self.config {
            Some(path) => RevealConfig::from_json_file(path)?,
            None => RevealConfig::default(),
        };
        if let Some(svg) = &self.svg {
            cfg.geometry_source = Some(GeometrySource::File(svg.clone()));
        }
        anyhow::ensure!(
            cfg.geometry_source.is_some(),
            "no geometry source: pass --svg or a config with `geometry_source`"
        );
        Ok(cfg)
    }
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Milliseconds after the reveal starts; repeat for several frames.
    #[arg(long = "at-ms", required = true)]
    at_ms: Vec<u64>,

    /// Output directory for `frame_<ms>.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Background color as `RRGGBBAA` hex.
    #[arg(long, default_value = "ffffffff")]
    background: String,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    source: SourceArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let background = parse_rgba_hex(&args.background)?;
    let cfg = args.source.reveal_config()?;
    let (width, height) = (args.source.width, args.source.height);

    let mut session = RevealSession::new(cfg, Arc::new(SvgGeometryProvider::new()));
    let n = session.load_blocking(width, height)?;
    tracing::info!(outlines = n, "geometry loaded");

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut times = args.at_ms;
    times.sort_unstable();
    times.dedup();

    let t0 = Instant::now();
    session.reveal(t0);
    for ms in times {
        session.tick(t0 + Duration::from_millis(ms));
        let mut surface = CpuSurface::with_background(width, height, background)?;
        session.draw(&mut surface);
        let out = args.out_dir.join(format!("frame_{ms:06}.png"));
        surface.finish().save_png(&out)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = args.source.reveal_config()?;
    let source = cfg
        .geometry_source
        .clone()
        .context("no geometry source")?;
    let viewport: Viewport = cfg
        .padding
        .inner_viewport(args.source.width, args.source.height);

    let provider = SvgGeometryProvider::new();
    let outlines = stroke_reveal::GeometryProvider::parse(&provider, &source, viewport)
        .context("load geometry")?;

    println!("viewport {}x{}", viewport.width, viewport.height);
    for (i, o) in outlines.iter().enumerate() {
        let b = o.bounds();
        println!(
            "{i:4} length={:.3} bounds=[{:.2} {:.2} {:.2} {:.2}]",
            o.arc_length(),
            b.x0,
            b.y0,
            b.x1,
            b.y1
        );
    }
    let total: f64 = outlines.iter().map(|o| o.arc_length()).sum();
    println!("{} outlines, total length {total:.3}", outlines.len());
    Ok(())
}

fn parse_rgba_hex(s: &str) -> anyhow::Result<[u8; 4]> {
    let s = s.trim_start_matches('#');
    anyhow::ensure!(s.len() == 8, "expected RRGGBBAA hex color, got '{s}'");
    let v = u32::from_str_radix(s, 16).with_context(|| format!("parse color '{s}'"))?;
    Ok(v.to_be_bytes())
}
