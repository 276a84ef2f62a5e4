use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use globset::{Glob, GlobSetBuilder};
use photo_packer_core::prelude::*;
use tracing::{info, warn};
use walkdir::WalkDir;

mod manifest;
mod raster;
mod svg;

use manifest::{Manifest, PageSection, PhotoEntry};

#[derive(Parser, Debug)]
#[command(
    name = "photo-packer",
    about = "Lay out photos on printable pages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress=false or --quiet)
    #[arg(long, default_value_t = true, action = ArgAction::Set, global = true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute placements and write them as JSON (optionally SVG previews)
    Layout(LayoutArgs),
    /// Composite placements into one PNG per page
    Render(RenderArgs),
    /// Pack once per algorithm and print time, pages, and occupancy
    Bench(BenchArgs),
    /// Emit a manifest skeleton for a directory of images
    Scan(ScanArgs),
}

#[derive(Parser, Debug, Clone)]
struct LayoutArgs {
    /// Manifest file (YAML)
    manifest: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Output base name (files will be name.json / name_N.svg)
    #[arg(short, long, default_value = "sheet", help_heading = "Input/Output")]
    name: String,
    /// Algorithm override: guillotine | shelf | maxrects
    #[arg(long, help_heading = "Algorithms")]
    algorithm: Option<String>,
    /// Also write one SVG preview per page
    #[arg(long, default_value_t = false, help_heading = "Export")]
    svg: bool,
}

#[derive(Parser, Debug, Clone)]
struct RenderArgs {
    /// Manifest file (YAML)
    manifest: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Output base name (files will be name.png or name_N.png)
    #[arg(short, long, default_value = "sheet", help_heading = "Input/Output")]
    name: String,
    /// Algorithm override: guillotine | shelf | maxrects
    #[arg(long, help_heading = "Algorithms")]
    algorithm: Option<String>,
    /// Raster resolution in pixels per page unit
    #[arg(long, default_value_t = 300, help_heading = "Export")]
    dpi: u32,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Manifest file (YAML)
    manifest: PathBuf,
}

#[derive(Parser, Debug, Clone)]
struct ScanArgs {
    /// Image file or directory
    input: PathBuf,
    /// Print size WIDTHxHEIGHT in page units, e.g. 4x6
    #[arg(long, default_value = "4x6")]
    size: String,
    /// Rotate landscape images 90 degrees to fit portrait prints
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    auto_rotate: bool,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long)]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long)]
    exclude: Vec<String>,
    /// Write the manifest here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Layout(args) => run_layout(args),
        Commands::Render(args) => run_render(args, cli.progress && !cli.quiet),
        Commands::Bench(args) => run_bench(args),
        Commands::Scan(args) => run_scan(args),
    }
}

fn run_layout(args: &LayoutArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create out_dir {}", args.out_dir.display()))?;
    let manifest = Manifest::load(&args.manifest)?;
    let config = manifest.page_config();
    let algorithm = resolve_algorithm(&manifest, args.algorithm.as_deref())?;
    let (placements, dropped) = pack_manifest(&manifest, &config, algorithm)?;
    if dropped > 0 {
        warn!(dropped, "some photos did not fit");
    }

    let json_path = args.out_dir.join(format!("{}.json", args.name));
    let value = to_json_array(&placements, &config);
    fs::write(&json_path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("write {}", json_path.display()))?;

    let stats = LayoutStats::compute(&placements, &config);
    info!(
        ?json_path,
        pages = stats.num_pages,
        placed = stats.num_placed,
        dropped,
        "layout written"
    );

    if args.svg {
        for (index, page) in placements_by_page(&placements).iter().enumerate() {
            let svg_path = args.out_dir.join(format!("{}_{}.svg", args.name, index));
            fs::write(&svg_path, svg::render_page_svg(page, &config))
                .with_context(|| format!("write {}", svg_path.display()))?;
            info!(?svg_path, "preview written");
        }
    }

    info!("{}", stats.summary());
    Ok(())
}

fn run_render(args: &RenderArgs, show_progress: bool) -> anyhow::Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create out_dir {}", args.out_dir.display()))?;
    let manifest = Manifest::load(&args.manifest)?;
    let config = manifest.page_config();
    let algorithm = resolve_algorithm(&manifest, args.algorithm.as_deref())?;
    let (placements, dropped) = pack_manifest(&manifest, &config, algorithm)?;
    if dropped > 0 {
        warn!(dropped, "some photos did not fit");
    }

    let sources: Vec<&PathBuf> = placements.iter().map(|p| &p.payload).collect();
    let images = raster::load_sources(&sources, show_progress);

    let pages = placements_by_page(&placements);
    for (index, page) in pages.iter().enumerate() {
        let canvas = raster::render_page_png(page, &config, args.dpi, &images);
        let png_path = if pages.len() == 1 {
            args.out_dir.join(format!("{}.png", args.name))
        } else {
            args.out_dir.join(format!("{}_{}.png", args.name, index))
        };
        canvas
            .save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!(?png_path, photos = page.len(), "wrote page");
    }
    Ok(())
}

fn run_bench(args: &BenchArgs) -> anyhow::Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let config = manifest.page_config();
    let inputs = manifest.inputs()?;
    for algorithm in [Algorithm::Guillotine, Algorithm::Shelf, Algorithm::MaxRects] {
        let start = Instant::now();
        let placements = pack(inputs.clone(), &config, algorithm)?;
        let dur = start.elapsed();
        let stats = LayoutStats::compute(&placements, &config);
        println!(
            "{algorithm:?}: pages={} placed={}/{} occupancy={:.2}% time={}",
            stats.num_pages,
            stats.num_placed,
            inputs.len(),
            stats.occupancy * 100.0,
            fmt_dur(dur)
        );
    }
    Ok(())
}

fn run_scan(args: &ScanArgs) -> anyhow::Result<()> {
    let (width, height) = parse_size(&args.size)?;
    let paths = gather_paths(&args.input, &args.include, &args.exclude)?;
    anyhow::ensure!(
        !paths.is_empty(),
        "no images under {}",
        args.input.display()
    );

    let mut photos = Vec::with_capacity(paths.len());
    for path in paths {
        // Landscape sources print sideways on portrait sizes.
        let rotation = if args.auto_rotate {
            match image::image_dimensions(&path) {
                Ok((iw, ih)) if iw > ih && height > width => 90,
                Ok(_) => 0,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot read dimensions");
                    0
                }
            }
        } else {
            0
        };
        photos.push(PhotoEntry {
            source: path,
            name: Some(args.size.clone()),
            width,
            height,
            quantity: 1,
            rotation,
            priority: 0,
        });
    }

    let manifest = Manifest {
        page: PageSection {
            width: 8.5,
            height: 11.0,
            margin: 0.25,
            margin_top: None,
            margin_right: None,
            margin_bottom: None,
            margin_left: None,
            spacing: 0.125,
            multi_page: true,
        },
        algorithm: "maxrects".to_string(),
        photos,
    };
    let yaml = serde_yaml::to_string(&manifest)?;
    match &args.out {
        Some(path) => {
            fs::write(path, yaml).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "manifest written");
        }
        None => print!("{yaml}"),
    }
    Ok(())
}

fn resolve_algorithm(manifest: &Manifest, flag: Option<&str>) -> anyhow::Result<Algorithm> {
    match flag {
        Some(name) => Ok(name.parse()?),
        None => manifest.algorithm(),
    }
}

fn pack_manifest(
    manifest: &Manifest,
    config: &PageConfig,
    algorithm: Algorithm,
) -> anyhow::Result<(Vec<Placement<String, PathBuf>>, usize)> {
    let inputs = manifest.inputs()?;
    let input_count = inputs.len();
    let placements = pack(inputs, config, algorithm)?;
    let dropped = input_count - placements.len();
    Ok((placements, dropped))
}

fn parse_size(s: &str) -> anyhow::Result<(f64, f64)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("size '{s}' is not WIDTHxHEIGHT"))?;
    let width: f64 = w
        .trim()
        .parse()
        .with_context(|| format!("bad width in '{s}'"))?;
    let height: f64 = h
        .trim()
        .parse()
        .with_context(|| format!("bad height in '{s}'"))?;
    anyhow::ensure!(width > 0.0 && height > 0.0, "size '{s}' must be positive");
    Ok((width, height))
}

fn gather_paths(
    path: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let mut inc_set = None;
    if !include.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in include {
            b.add(Glob::new(pat)?);
        }
        inc_set = Some(b.build()?);
    }
    let mut exc_set = None;
    if !exclude.is_empty() {
        let mut b = GlobSetBuilder::new();
        for pat in exclude {
            b.add(Glob::new(pat)?);
        }
        exc_set = Some(b.build()?);
    }
    let mut list: Vec<PathBuf> = Vec::new();
    if path.is_file() {
        if !should_skip(path, inc_set.as_ref(), exc_set.as_ref()) && is_image(path) {
            list.push(path.to_path_buf());
        }
    } else {
        for entry in WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let p = entry.path();
            if p.is_file() && !should_skip(p, inc_set.as_ref(), exc_set.as_ref()) && is_image(p) {
                list.push(p.to_path_buf());
            }
        }
    }
    Ok(list)
}

fn should_skip(
    p: &Path,
    include: Option<&globset::GlobSet>,
    exclude: Option<&globset::GlobSet>,
) -> bool {
    let s = p.to_string_lossy().replace('\\', "/");
    if let Some(ex) = exclude {
        if ex.is_match(&s) {
            return true;
        }
    }
    if let Some(inc) = include {
        if !inc.is_match(&s) {
            return true;
        }
    }
    false
}

fn is_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "tga" | "gif")
    )
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
