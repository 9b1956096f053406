use crate::config::{Config, Output};
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use hue_shift::HueSession;
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Recolor an image by replacing the hue of every pixel.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Image to recolor (PNG or JPEG)
    pub input: PathBuf,

    /// Hue in degrees, repeat for several outputs [default: from config]
    #[arg(long = "hue", value_name = "DEG", allow_negative_numbers = true, value_parser = parse_hue)]
    pub hues: Vec<f64>,

    /// Output file, only valid with a single hue
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the original and recolored image side by side
    #[arg(long)]
    pub compare: bool,

    /// Configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More logs, -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// One recolored output of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub hue: f64,
    pub output: PathBuf,
    pub compare: Option<PathBuf>,
}

fn parse_hue(s: &str) -> Result<f64, String> {
    let hue: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if !hue.is_finite() {
        return Err(format!("`{s}` is not a finite number of degrees"));
    }
    Ok(hue)
}

pub fn run(args: &Args, config: &Config) -> Result<()> {
    let hues = if args.hues.is_empty() {
        vec![config.hue.default]
    } else {
        args.hues.clone()
    };

    let compare = args.compare || config.output.compare;
    let jobs = plan_jobs(&args.input, &hues, args.output.as_deref(), compare, &config.output)?;

    let mut session = HueSession::open(&args.input)
        .with_context(|| format!("could not load image {}", args.input.display()))?;

    let (width, height) = session.dimensions();
    info!("loaded {} ({width}x{height})", args.input.display());

    for job in jobs {
        if let Some(dir) = job.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {} failed", dir.display()))?;
        }

        session
            .set_hue(job.hue)
            .with_context(|| format!("apply hue {} failed", job.hue))?;

        session
            .save_modified(&job.output)
            .with_context(|| format!("save {} failed", job.output.display()))?;
        info!("hue {} -> {}", job.hue, job.output.display());

        if let Some(compare) = &job.compare {
            session
                .save_compare(compare)
                .with_context(|| format!("save {} failed", compare.display()))?;
            info!("compare sheet -> {}", compare.display());
        }

        println!("{}", job.output.display());
    }

    Ok(())
}

/// Work out where each hue is written.
///
/// A single hue goes to `output` when given. Otherwise files are named
/// `<stem><suffix><hue>.<ext>` in the configured directory, or next to the
/// input when none is configured.
pub fn plan_jobs(
    input: &Path,
    hues: &[f64],
    output: Option<&Path>,
    compare: bool,
    settings: &Output,
) -> Result<Vec<Job>> {
    if hues.is_empty() {
        bail!("no hue to apply");
    }

    if let Some(output) = output {
        if hues.len() > 1 {
            bail!("--output takes a single --hue, got {}", hues.len());
        }

        return Ok(vec![Job {
            hue: hues[0],
            output: output.to_path_buf(),
            compare: compare.then(|| with_stem_suffix(output, "_compare")),
        }]);
    }

    let stem = input
        .file_stem()
        .with_context(|| format!("{} has no file name", input.display()))?
        .to_string_lossy();

    let ext = input
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "png".to_string());

    let dir = if settings.dir.is_empty() {
        input.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        PathBuf::from(&settings.dir)
    };

    let jobs = hues
        .iter()
        .map(|&hue| {
            let name = format!("{stem}{}{hue}", settings.suffix);
            Job {
                hue,
                output: dir.join(format!("{name}.{ext}")),
                compare: compare.then(|| dir.join(format!("{name}_compare.{ext}"))),
            }
        })
        .collect();

    Ok(jobs)
}

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };

    path.with_file_name(name)
}
