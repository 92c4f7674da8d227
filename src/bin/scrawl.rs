use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrawl::{DrawConfig, FontVariant, FuzzKind, Fuzzer, MonoFont, Rgba8Premul};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrawl", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw some text onto a distorted PNG.
    Draw(DrawArgs),
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Text to draw.
    text: String,

    /// Output PNG path.
    #[arg(long, short)]
    out: PathBuf,

    /// Comma separated fuzzers: [b]ands, [a]ccurate bands, random [l]ines, [r]andom circles,
    /// [c]oncentric circles. Defaults to a random pair.
    #[arg(long, short)]
    fuzzers: Option<String>,

    /// JSON draw config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Primary fuzzer color, "r,g,b" or "r,g,b,a".
    #[arg(long)]
    color: Option<Rgba8Premul>,

    /// Secondary color for bands and concentric circles.
    #[arg(long)]
    fg_color: Option<Rgba8Premul>,

    /// Noise level in [0, 1] for lines and circles.
    #[arg(long)]
    noise: Option<f64>,

    /// Band thickness for bands and concentric circles.
    #[arg(long)]
    thickness: Option<u32>,

    /// Band slope in [-2, 2]; random if unset.
    #[arg(long, allow_hyphen_values = true)]
    slope: Option<f64>,

    /// Rotate every glyph by this many degrees instead of a random angle.
    #[arg(long, allow_hyphen_values = true)]
    font_rotation: Option<i32>,

    /// Scale glyphs by this factor.
    #[arg(long)]
    font_scale: Option<f64>,

    /// Glyph sheet: gray, black or inverted.
    #[arg(long)]
    variant: Option<FontVariant>,

    /// Break lines at the first space after this many characters.
    #[arg(long)]
    line_break: Option<usize>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Draw(args) => cmd_draw(args),
    }
}

fn load_config(args: &DrawArgs) -> anyhow::Result<DrawConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            DrawConfig::from_json(&json)?
        }
        None => DrawConfig::default(),
    };

    if let Some(c) = args.color {
        cfg.color1 = Some(c);
    }
    if let Some(c) = args.fg_color {
        cfg.color2 = Some(c);
    }
    if let Some(n) = args.noise {
        cfg.noise = n;
    }
    if let Some(t) = args.thickness {
        cfg.thickness = t;
    }
    if let Some(s) = args.slope {
        cfg.slope = Some(s);
    }
    if let Some(r) = args.font_rotation {
        cfg.rotation = r;
        cfg.random_rotation = false;
    }
    if let Some(s) = args.font_scale {
        cfg.scale = s;
    }
    if let Some(v) = args.variant {
        cfg.variant = v;
    }
    if let Some(n) = args.line_break {
        cfg.line_break = n;
    }
    Ok(cfg.normalized())
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;

    let kinds = match args.fuzzers.as_deref() {
        Some(list) => FuzzKind::parse_list(list)?,
        None => FuzzKind::random_pair(&mut rand::rng()).to_vec(),
    };
    tracing::info!(?kinds, variant = ?cfg.variant, "drawing");

    let font = MonoFont::new(&cfg)?;
    let fuzzers: Vec<Box<dyn Fuzzer>> = kinds.iter().map(|k| k.resolve(&cfg)).collect();
    let canvas = match args.threads {
        Some(_) => {
            let pool = scrawl::build_thread_pool(args.threads)?;
            scrawl::generate_in(&pool, &args.text, &font, &fuzzers)
        }
        None => scrawl::generate(&args.text, &font, &fuzzers),
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = canvas.encode_png()?;
    std::fs::write(&args.out, png).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        canvas.width(),
        canvas.height()
    );
    Ok(())
}
