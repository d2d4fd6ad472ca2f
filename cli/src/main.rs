use clap::Parser;
use shoplist::config::Config;
use shoplist::display::ItemFormatter;
use shoplist::list;
use shoplist::unit::Unit;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Price a plain-text shopping list", long_about = None)]
struct Cli {
    /// Shopping list file, one item per line
    file: PathBuf,

    /// Unit to show weights in (oz, lb, kg, g)
    unit: Option<String>,

    /// TOML file with a preferred unit and column widths
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the table
    #[arg(long)]
    json: bool,

    /// Log more detail to stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match print_shopping_list(&cli) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "shoplist=warn",
        1 => "shoplist=info",
        _ => "shoplist=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_shopping_list(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::empty(),
    };

    let preferred_unit = config
        .resolve_preferred_unit(cli.unit.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("{}; using pounds", e);
            Unit::Pound
        });

    let (shopping_list, report) = list::load_list_from_file(&cli.file)?;

    // Skipped lines are reported but never fatal
    if report.has_issues() {
        eprint!("{}", report);
    }

    tracing::info!(
        items = shopping_list.len(),
        skipped = report.len(),
        total_cents = shopping_list.total_price_cents,
        unit = %preferred_unit,
        "priced shopping list"
    );

    if cli.json {
        println!("{}", shopping_list.to_json()?);
        return Ok(());
    }

    let formatter = ItemFormatter::new(preferred_unit).with_columns(config.columns);
    for priced in shopping_list.iter() {
        println!("{}", formatter.format_row(&priced.item, priced.total_price_cents));
    }

    println!();
    println!("{}", formatter.format_total(shopping_list.total_price_cents));

    Ok(())
}
