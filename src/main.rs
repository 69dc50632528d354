use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use domondrian::rendering::{html, snapshot, Format, Rendered};
use domondrian::{demo, fill, ColorSpec, MondrianConfig, Page, RandomSource, SeededRandom, ThreadRandom};

#[derive(Parser)]
#[command(name = "domondrian", version, about = "Fill grid tables with colors")]
struct Cli {
    /// Seed for reproducible layouts (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write the output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html, global = true)]
    format: OutputFormat,

    /// Print the SHA-256 digest of the output to stderr
    #[arg(long, global = true)]
    digest: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Args)]
struct TableArgs {
    /// Table identifier
    #[arg(long, default_value = "hello")]
    id: String,

    #[arg(long, default_value_t = 5)]
    rows: usize,

    #[arg(long, default_value_t = 7)]
    columns: usize,
}

#[derive(Args)]
struct PaletteArgs {
    /// Colors and weights, either `red:3,blue:1` or `[["red",3],["blue",1]]`
    #[arg(long)]
    colors: ColorSpec,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a bare table
    Table(TableArgs),
    /// Paint consecutive cells, color block after color block
    Linear {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        palette: PaletteArgs,
        /// Cells to skip before the first paint
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Paint a number of random distinct cells per color
    Random {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Fill the whole table by relative color frequency
    Ratio {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Merge cells into blocks, then fill by ratio
    Mondrian {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        palette: PaletteArgs,
        #[command(flatten)]
        merge: MergeArgs,
    },
    /// Draw every strategy on one page
    Demo {
        #[command(flatten)]
        merge: MergeArgs,
    },
}

#[derive(Args)]
struct MergeArgs {
    /// JSON file with Mondrian settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    horizontal_threshold: Option<f64>,

    #[arg(long)]
    vertical_threshold: Option<f64>,
}

impl MergeArgs {
    fn resolve(&self) -> Result<MondrianConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                MondrianConfig::from_json(&json)?
            }
            None => MondrianConfig::default(),
        };
        if let Some(t) = self.horizontal_threshold {
            cfg.horizontal_threshold = t;
        }
        if let Some(t) = self.vertical_threshold {
            cfg.vertical_threshold = t;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }
    builder.init();
}

fn build_page(command: &Command, rng: &mut dyn RandomSource) -> Result<(Page, String)> {
    let mut page = Page::new();
    let title = match command {
        Command::Table(t) => {
            page.write_table(&t.id, t.rows, t.columns)?;
            "Table"
        }
        Command::Linear { table, palette, offset } => {
            let grid = page.write_table(&table.id, table.rows, table.columns)?;
            let report = fill::draw_linear(grid, &palette.colors, *offset);
            log::info!("painted {} of {} cells", report.painted, report.requested);
            "Linear"
        }
        Command::Random { table, palette } => {
            let grid = page.write_table(&table.id, table.rows, table.columns)?;
            fill::draw_random(grid, &palette.colors, rng)?;
            "Random"
        }
        Command::Ratio { table, palette } => {
            let grid = page.write_table(&table.id, table.rows, table.columns)?;
            fill::draw_random_ratio(grid, &palette.colors, rng)?;
            "Ratio"
        }
        Command::Mondrian { table, palette, merge } => {
            let cfg = merge.resolve()?;
            page.draw_mondrian(&table.id, table.rows, table.columns, &palette.colors, &cfg, rng)?;
            "Mondrian"
        }
        Command::Demo { merge } => {
            page = demo::build_demo_page(&merge.resolve()?, rng)?;
            "DOMondrian"
        }
    };
    Ok((page, title.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    let (page, title) = build_page(&cli.command, rng.as_mut())?;

    let rendered = match cli.format {
        OutputFormat::Html => Rendered::new(Format::Html, html::render_page(&page, &title)),
        OutputFormat::Json => Rendered::new(Format::Json, snapshot::page_to_json(&page)?),
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered.body)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(rendered.body.as_bytes())?;
            out.flush()?;
        }
    }

    if cli.digest {
        eprintln!("{}", rendered.digest);
    }
    Ok(())
}
