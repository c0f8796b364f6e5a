use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "climate-story", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one scene to SVG, PNG or JSON (chosen by the output extension).
    Render(RenderArgs),
    /// Render every scene into a directory.
    Story(StoryArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Story config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Geography source (file path or http(s) URL), overriding the config.
    #[arg(long)]
    geo: Option<String>,

    /// How long to wait for the geography before drawing the map without it.
    #[arg(long, default_value_t = 10_000)]
    geo_timeout_ms: u64,

    /// Device pixels per surface unit for PNG output.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Scene number (1, 2 or 3).
    #[arg(long)]
    scene: u8,

    /// Hover the map marker at this dataset index.
    #[arg(long)]
    hover: Option<usize>,

    /// Click the map marker at this dataset index.
    #[arg(long)]
    click: Option<usize>,

    /// Output path (.svg, .png or .json).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct StoryArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Svg)]
    format: FormatChoice,

    /// Worker threads for parallel export. Defaults to rayon's choice.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
    Json,
}

impl From<FormatChoice> for climate_story::OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Svg => Self::Svg,
            FormatChoice::Png => Self::Png,
            FormatChoice::Json => Self::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Story(args) => cmd_story(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &SourceArgs) -> anyhow::Result<climate_story::StoryConfig> {
    let mut cfg = match &args.config {
        Some(path) => climate_story::StoryConfig::from_json_file(path)?,
        None => climate_story::StoryConfig::default(),
    };
    if let Some(geo) = &args.geo {
        cfg.geography = geo.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn raster_options(
    args: &SourceArgs,
    cfg: &climate_story::StoryConfig,
) -> climate_story::RasterOptions {
    climate_story::RasterOptions {
        scale: args.scale,
        font_dir: cfg.font_dir.clone(),
        ..Default::default()
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    let format = climate_story::OutputFormat::from_path(&args.out)?;
    let raster = raster_options(&args.source, &cfg);

    let mut session = climate_story::Session::from_config(cfg)?;
    session.select_scene(args.scene)?;

    if session.is_fetch_pending() {
        session.wait_for_geography(Duration::from_millis(args.source.geo_timeout_ms));
        if session.is_fetch_pending() {
            tracing::warn!(
                timeout_ms = args.source.geo_timeout_ms,
                "geography not ready; drawing markers only"
            );
        }
    }
    if let Some(i) = args.hover
        && !session.hover_marker(i)
    {
        tracing::warn!(index = i, "--hover ignored (not on the map scene or no such marker)");
    }
    if let Some(i) = args.click
        && !session.click_marker(i)
    {
        tracing::warn!(index = i, "--click ignored (not on the map scene or no such marker)");
    }

    let list = session.redraw();
    climate_story::Exporter::new(format, &raster)?
        .write(&list, &args.out)
        .with_context(|| format!("render scene {} to '{}'", args.scene, args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_story(args: StoryArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    let raster = raster_options(&args.source, &cfg);
    let geography = fetch_geography(
        &cfg.geography,
        Duration::from_millis(args.source.geo_timeout_ms),
    )?;

    let paths = climate_story::export_story(
        &cfg,
        geography.as_ref(),
        &args.out_dir,
        args.format.into(),
        &raster,
        args.threads,
    )?;
    for path in paths {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn fetch_geography(
    spec: &str,
    timeout: Duration,
) -> anyhow::Result<Option<climate_story::Geography>> {
    let source = climate_story::source_from_spec(spec)?;
    let handle = climate_story::spawn_fetch(source, climate_story::Generation::default())?;
    match handle.wait(timeout) {
        climate_story::FetchPoll::Ready(outcome) => match outcome.result {
            Ok(geo) => Ok(Some(geo)),
            Err(err) => {
                tracing::warn!(error = %err, "geography unavailable; drawing markers only");
                Ok(None)
            }
        },
        climate_story::FetchPoll::Pending => {
            handle.cancel();
            tracing::warn!(
                timeout_ms = timeout.as_millis() as u64,
                "geography not ready; drawing markers only"
            );
            Ok(None)
        }
        climate_story::FetchPoll::Lost => Ok(None),
    }
}
