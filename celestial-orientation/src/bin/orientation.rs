use anyhow::Context;
use celestial_core::constants::RAD_TO_DEG;
use celestial_core::RotationMatrix3;
use celestial_orientation::{Body, OrientationAxes, OrientationParameters, ValidationConfig};
use celestial_time::{JulianDate, TT, UTC};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "orientation")]
#[command(about = "Print the ICRF to body-fixed rotation of a celestial body")]
struct Cli {
    /// Body name: moon, sun, earth or mars
    #[arg(long, default_value = "moon")]
    body: String,

    /// Epoch as a TT Julian Date (conflicts with --date)
    #[arg(long, conflicts_with = "date")]
    jd: Option<f64>,

    /// Epoch as ISO 8601 UTC, e.g. 2024-03-20T03:06:00Z (conflicts with --jd)
    #[arg(long, conflicts_with = "jd")]
    date: Option<String>,

    /// Reject non-finite or non-orthonormal results
    #[arg(long)]
    check: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let body: Body = cli.body.parse()?;
    let epoch = resolve_epoch(cli.jd, cli.date.as_deref())?;
    debug!(%body, jd = epoch.to_julian_date().to_f64(), "resolved inputs");

    let axes = OrientationAxes::new(body.model());
    let params = axes.parameters(&epoch);
    let matrix = if cli.check {
        axes.evaluate_checked(&epoch, &ValidationConfig::default())
            .with_context(|| format!("orientation of {} failed validation", body))?
    } else {
        axes.evaluate(&epoch)
    };

    match cli.format {
        OutputFormat::Text => print_text(body, &epoch, &params, &matrix),
        OutputFormat::Json => print_json(body, &epoch, &params, &matrix)?,
    }

    Ok(())
}

fn resolve_epoch(jd: Option<f64>, date: Option<&str>) -> anyhow::Result<TT> {
    if let Some(date) = date {
        let utc: UTC = date
            .parse()
            .with_context(|| format!("invalid --date '{}'", date))?;
        return Ok(utc.to_tai().to_tt());
    }
    Ok(match jd {
        Some(jd) => TT::from_julian_date(JulianDate::from_f64(jd)),
        None => TT::now(),
    })
}

fn print_text(body: Body, epoch: &TT, params: &OrientationParameters, matrix: &RotationMatrix3) {
    println!("Body: {}", body);
    println!("Epoch: {}", epoch);
    println!("RA   = {:.9}°", params.right_ascension * RAD_TO_DEG);
    println!("Dec  = {:.9}°", params.declination * RAD_TO_DEG);
    println!("W    = {:.9}°", params.rotation * RAD_TO_DEG);
    println!("dW/dt = {:.12e} rad/s", params.rotation_rate);
    println!("ICRF -> {} fixed:", body);
    println!("{}", matrix);
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    body: &'a str,
    jd_tt: f64,
    right_ascension_deg: f64,
    declination_deg: f64,
    rotation_deg: f64,
    rotation_rate_rad_per_s: f64,
    matrix: &'a [[f64; 3]; 3],
}

fn print_json(
    body: Body,
    epoch: &TT,
    params: &OrientationParameters,
    matrix: &RotationMatrix3,
) -> anyhow::Result<()> {
    let output = JsonOutput {
        body: body.name(),
        jd_tt: epoch.to_julian_date().to_f64(),
        right_ascension_deg: params.right_ascension * RAD_TO_DEG,
        declination_deg: params.declination * RAD_TO_DEG,
        rotation_deg: params.rotation * RAD_TO_DEG,
        rotation_rate_rad_per_s: params.rotation_rate,
        matrix: matrix.elements(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
