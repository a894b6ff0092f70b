mod coordinates;
mod error;
mod output;
mod params;
mod parse_stars;
mod selection;

use anyhow::Context;
use clap::Parser;
use output::OutputFormat;
use params::{QueryParams, RunConfig};
use selection::BrightnessOrder;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fov-brightest")]
#[command(about = "Select the brightest catalog objects inside a rectangular field of view")]
struct Cli {
    /// Tab separated catalog file, asked for when omitted
    catalog: Option<PathBuf>,

    /// JSON file with query parameters and catalog layout, overridden by the flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Right ascension of the center of the field of view, degrees [0, 360)
    #[arg(long)]
    ra: Option<f64>,

    /// Declination of the center of the field of view, degrees [-90, 90]
    #[arg(long, allow_hyphen_values = true)]
    dec: Option<f64>,

    /// Full horizontal field of view, radians (0, pi/2]
    #[arg(long)]
    fov_h: Option<f64>,

    /// Full vertical field of view, radians (0, pi/2]
    #[arg(long)]
    fov_v: Option<f64>,

    /// Number of objects to select
    #[arg(short = 'n', long = "count")]
    n: Option<usize>,

    /// Which end of the magnitude scale to keep
    #[arg(long, value_enum)]
    order: Option<BrightnessOrder>,

    /// Ask for every query parameter on the terminal
    #[arg(short, long)]
    interactive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Output file, <unix time>.<format> when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Catalog column with the object identifier
    #[arg(long)]
    id_column: Option<String>,

    /// Catalog column with the right ascension in degrees
    #[arg(long)]
    ra_column: Option<String>,

    /// Catalog column with the declination in degrees
    #[arg(long)]
    dec_column: Option<String>,

    /// Catalog column with the magnitude
    #[arg(long)]
    mag_column: Option<String>,

    /// Lines before the header line of the catalog
    #[arg(long)]
    skip_lines: Option<usize>,
}

impl Cli {
    /// the config file if any, with the command line flags applied on top
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("could not load config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog_path = Some(catalog.clone());
        }

        let query: &mut QueryParams = &mut config.query;
        query.ra = self.ra.unwrap_or(query.ra);
        query.dec = self.dec.unwrap_or(query.dec);
        query.fov_h = self.fov_h.unwrap_or(query.fov_h);
        query.fov_v = self.fov_v.unwrap_or(query.fov_v);
        query.n = self.n.unwrap_or(query.n);
        query.order = self.order.unwrap_or(query.order);

        let columns = &mut config.catalog.columns;
        for (flag, column) in [
            (&self.id_column, &mut columns.id),
            (&self.ra_column, &mut columns.ra),
            (&self.dec_column, &mut columns.dec),
            (&self.mag_column, &mut columns.magnitude),
        ] {
            if let Some(name) = flag {
                *column = name.clone();
            }
        }
        config.catalog.skip_lines = self.skip_lines.unwrap_or(config.catalog.skip_lines);
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fov_brightest=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = cli.run_config()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let catalog_path = match config.catalog_path.take() {
        Some(path) => path,
        None => params::prompt_catalog_path(&mut input, &mut stdout)?,
    };
    let query = if cli.interactive {
        params::prompt_query_params(&mut input, &mut stdout, &config.query)?
    } else {
        config.query
    };
    let fov = query.fov_spec()?;
    info!(
        ra = query.ra,
        dec = query.dec,
        half_h = fov.half_h,
        half_v = fov.half_v,
        n = query.n,
        order = ?query.order,
        "query"
    );

    let catalog = parse_stars::read_catalog_file(&catalog_path, &config.catalog)
        .with_context(|| format!("could not read catalog {}", catalog_path.display()))?;

    let selection = selection::select_objects(&catalog, &fov, query.n, query.order);
    if selection.is_empty() {
        warn!("no objects found inside the field of view");
    } else {
        info!(selected = selection.len(), "selection done");
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(output::default_file_name(cli.format)));
    output::write_selection_file(&output_path, cli.format, &selection)
        .with_context(|| format!("could not write {}", output_path.display()))?;
    info!(path = %output_path.display(), format = ?cli.format, "selection written");
    println!("\nFile {} was successfully created", output_path.display());
    Ok(())
}
