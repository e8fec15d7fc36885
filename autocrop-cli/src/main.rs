use autocrop::io::{crop_and_save, gray_from_dynamic};
use autocrop::{CropHints, Cropper, DensityPath, Rect, Selection, Strategy, TargetSize};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Entropy-guided image auto-cropper")]
struct Cli {
    /// Path to the source image.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
    /// Path for the cropped output image.
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
    /// Output size as WxH, e.g. 640x480.
    #[arg(short, long, value_name = "WxH", value_parser = parse_size)]
    size: Option<TargetSize>,
    /// Coordinates of the important part of the image, X1 < X2 and
    /// Y1 < Y2; (0,0) is the top-left corner.
    #[arg(short, long, value_name = "X1,Y1,X2,Y2", value_parser = parse_featured)]
    featured: Option<Rect>,
    /// Print the selected rectangle and strategy as JSON on stdout.
    #[arg(long)]
    report: bool,
    /// Enable tracing output from the selection pipeline.
    #[arg(long)]
    trace: bool,
}

/// Extracts the runs of decimal digits from `s`, in order.
fn parse_numbers(s: &str) -> Result<Vec<i64>, String> {
    let runs: Vec<&str> = s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect();
    let mut numbers = Vec::with_capacity(runs.len());
    for run in runs {
        numbers.push(
            run.parse::<i64>()
                .map_err(|_| format!("invalid number '{run}'"))?,
        );
    }
    Ok(numbers)
}

fn parse_size(s: &str) -> Result<TargetSize, String> {
    match parse_numbers(s)?.as_slice() {
        &[width, height] if width <= i64::from(u32::MAX) && height <= i64::from(u32::MAX) => {
            TargetSize::new(width as u32, height as u32).map_err(|err| err.to_string())
        }
        _ => Err(format!("invalid size '{s}', expected WxH")),
    }
}

fn parse_featured(s: &str) -> Result<Rect, String> {
    match parse_numbers(s)?.as_slice() {
        &[x1, y1, x2, y2] if [x1, y1, x2, y2].iter().all(|&v| v <= i64::from(i32::MAX)) => {
            let rect = Rect::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32);
            rect.validate_featured().map_err(|err| err.to_string())?;
            Ok(rect)
        }
        _ => Err(format!("invalid featured box '{s}', expected X1,Y1,X2,Y2")),
    }
}

#[derive(Debug, Serialize)]
struct Report {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    strategy: &'static str,
    reestimated: bool,
}

impl From<&Selection> for Report {
    fn from(selection: &Selection) -> Self {
        let strategy = match selection.strategy {
            Strategy::Featured => "featured",
            Strategy::Peak => "peak",
            Strategy::Intervals { .. } => "intervals",
        };
        Self {
            x1: selection.rect.x1,
            y1: selection.rect.y1,
            x2: selection.rect.x2,
            y2: selection.rect.y2,
            strategy,
            reestimated: selection.density_path == Some(DensityPath::Reestimated),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("autocrop=debug".parse()?))
            .with_target(false)
            .init();
    }

    if let Some(dir) = cli.output.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            return Err(format!("output directory '{}' does not exist", dir.display()).into());
        }
    }

    let color = image::open(&cli.input)?;
    let gray = gray_from_dynamic(&color)?;

    let hints = CropHints {
        featured: cli.featured,
        size: cli.size,
    };
    let selection = Cropper::new().select(gray.view(), &hints)?;
    crop_and_save(&color, selection.rect, &cli.output)?;

    if cli.report {
        let report = Report::from(&selection);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
