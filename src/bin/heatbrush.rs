use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use heatbrush::{
    BrushSettings, Canvas, Editor, EditorOpts, ExportFormat, ExportOptions, OutputSize,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heatbrush", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a strokes file and write the raw heatmap layer as a PNG.
    Render(RenderArgs),
    /// Replay a strokes file and export the composed artwork.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct CanvasArgs {
    /// Strokes JSON (array of strokes, each an array of `{x, y, r, opacity}`).
    #[arg(long)]
    strokes: PathBuf,

    /// Canvas width in logical points.
    #[arg(long)]
    width: f64,

    /// Canvas height in logical points.
    #[arg(long)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Brush settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    canvas: CanvasArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// 810x810
    Square,
    /// 810x1080
    Portrait,
    /// 1400x1867
    PortraitHd,
}

impl Preset {
    fn size(self) -> OutputSize {
        match self {
            Self::Square => OutputSize::SQUARE_810,
            Self::Portrait => OutputSize::PORTRAIT_810,
            Self::PortraitHd => OutputSize::PORTRAIT_1400,
        }
    }
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    canvas: CanvasArgs,

    /// Background photo drawn under the heat layer.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Output size preset.
    #[arg(long, value_enum, default_value_t = Preset::Portrait, conflicts_with = "print_mm")]
    preset: Preset,

    /// Physical print size in millimetres, e.g. `100x150`.
    #[arg(long, value_parser = parse_print_mm)]
    print_mm: Option<(f64, f64)>,

    /// JPEG quality in (0, 1].
    #[arg(long, default_value_t = 0.9)]
    quality: f32,

    /// Keep blank margins around the heat layer.
    #[arg(long, default_value_t = false)]
    no_crop: bool,

    /// Output path; `.png` selects PNG, anything else JPEG.
    #[arg(long)]
    out: PathBuf,
}

fn parse_print_mm(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<f64>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<f64>().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn open_editor(args: &CanvasArgs) -> anyhow::Result<Editor> {
    let settings = match &args.settings {
        Some(p) => BrushSettings::from_path(p)?,
        None => BrushSettings::default(),
    };
    let canvas = Canvas::new(args.width, args.height, args.scale)?;
    let mut editor = Editor::new(EditorOpts {
        settings,
        ..EditorOpts::new(canvas)
    })?;
    editor.open(&args.strokes)?;
    tracing::debug!(
        strokes = editor.strokes().log().len(),
        stamps = editor.strokes().log().stamp_count(),
        "replayed strokes"
    );
    Ok(editor)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut editor = open_editor(&args.canvas)?;
    editor.on_display_refresh();
    let frame = editor
        .frame()
        .context("canvas has no pixels; nothing to render")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let mut editor = open_editor(&args.canvas)?;
    if let Some(bg) = &args.background {
        editor.load_background(bg);
    }
    if args.no_crop {
        let compositor = editor.compositor().clone().with_crop(None);
        editor.set_compositor(compositor);
    }

    let size = match args.print_mm {
        Some((w, h)) => OutputSize::from_print_mm(w, h)?,
        None => args.preset.size(),
    };
    let opts = ExportOptions {
        size,
        format: ExportFormat::from_path(&args.out),
        quality: args.quality,
    };
    editor
        .export_to_path(&opts, &args.out)
        .with_context(|| format!("export '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
