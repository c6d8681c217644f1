use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use vitals_dashboard::api::{ChartKind, ChartOutput, DashboardConfig, DashboardController};
use vitals_dashboard::core::{Dataset, Viewport};
use vitals_dashboard::render::SvgRenderer;

const DEFAULT_OUTPUT_DIR: &str = "dashboard_svg";
const DEFAULT_SIZE: (u32, u32) = (800, 500);

#[derive(Debug)]
struct CliArgs {
    regions: Vec<String>,
    line: Option<String>,
    bar: Option<String>,
    pie: Option<String>,
    size: (u32, u32),
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
    dataset_path: Option<PathBuf>,
}

fn main() {
    let _ = vitals_dashboard::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => DashboardConfig::from_path(path)
            .map_err(|err| format!("failed to load config `{}`: {err}", path.display()))?,
        None => DashboardConfig::default(),
    };
    let dataset = match &args.dataset_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read dataset `{}`: {err}", path.display()))?;
            Dataset::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => Dataset::bundled().map_err(|err| err.to_string())?,
    };

    let mut dashboard =
        DashboardController::new(Arc::new(dataset), config).map_err(|err| err.to_string())?;
    dashboard.set_regions(args.regions.iter().cloned());
    if let Some(label) = &args.line {
        dashboard.select_line_variable(label);
    }
    if let Some(label) = &args.bar {
        dashboard.select_bar_variable(label);
    }
    if let Some(label) = &args.pie {
        dashboard.select_pie_variable(label);
    }
    dashboard.confirm().map_err(|err| err.to_string())?;

    let viewport = Viewport::new(args.size.0, args.size.1);
    for chart in [ChartKind::Line, ChartKind::Bar, ChartKind::Pie] {
        dashboard
            .resize(chart, viewport)
            .map_err(|err| err.to_string())?;
    }

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let mut written = 0usize;
    for (chart, file_name) in [
        (ChartKind::Line, "line.svg"),
        (ChartKind::Bar, "bar.svg"),
        (ChartKind::Pie, "pie.svg"),
    ] {
        let mut renderer = SvgRenderer::new();
        match dashboard.output(chart) {
            ChartOutput::Placeholder(prompt) => {
                println!("{file_name}: skipped ({prompt})");
                continue;
            }
            ChartOutput::Blank => {
                println!("{file_name}: skipped (no drawable area)");
                continue;
            }
            output @ ChartOutput::Frame(_) => {
                output
                    .render_with(&mut renderer)
                    .map_err(|err| format!("failed to render {file_name}: {err}"))?;
            }
        }

        let path = args.output_dir.join(file_name);
        fs::write(&path, renderer.document())
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        info!(path = %path.display(), "chart written");
        written += 1;
    }

    println!(
        "wrote {written} chart(s) to {}",
        args.output_dir.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut regions = Vec::new();
    let mut line = None;
    let mut bar = None;
    let mut pie = None;
    let mut size = DEFAULT_SIZE;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut config_path = None;
    let mut dataset_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--regions" => {
                regions = value("--regions")?
                    .split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned)
                    .collect();
            }
            "--line" => line = Some(value("--line")?),
            "--bar" => bar = Some(value("--bar")?),
            "--pie" => pie = Some(value("--pie")?),
            "--size" => size = parse_size(&value("--size")?)?,
            "--out" => output_dir = PathBuf::from(value("--out")?),
            "--config" => config_path = Some(PathBuf::from(value("--config")?)),
            "--dataset" => dataset_path = Some(PathBuf::from(value("--dataset")?)),
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        regions,
        line,
        bar,
        pie,
        size,
        output_dir,
        config_path,
        dataset_path,
    })
}

fn parse_size(raw: &str) -> Result<(u32, u32), String> {
    let (width, height) = raw
        .split_once('x')
        .ok_or_else(|| format!("size must look like 800x500, got `{raw}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid size `{raw}`: {err}"))
    };
    Ok((parse(width)?, parse(height)?))
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_dashboard -- [options]\n\nOptions:\n  --regions <a,b,...>   Region labels to select, comma separated (e.g. 서울,부산)\n  --line <label>        Line chart variable label (e.g. 출생수)\n  --bar <label>         Bar chart variable label\n  --pie <label>         Pie chart variable label\n  --size <WxH>          Chart size in pixels (default: {}x{})\n  --out <dir>           Output directory (default: {DEFAULT_OUTPUT_DIR})\n  --config <path>       Dashboard config JSON\n  --dataset <path>      Dataset JSON instead of the bundled one\n  -h, --help            Show this message",
        DEFAULT_SIZE.0, DEFAULT_SIZE.1
    )
}
