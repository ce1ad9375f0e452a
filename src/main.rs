// SyriaBiz - main.rs
//
// Command-line entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Catalog loading (built-in + user catalog file)
// 4. Running the list/add command against a fresh session

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveTime;
use syriabiz::app::catalog::load_catalog;
use syriabiz::app::state::Session;
use syriabiz::core::builder::RawFormFields;
use syriabiz::core::export::{export_csv, export_json};
use syriabiz::core::filter::Selection;
use syriabiz::core::i18n;
use syriabiz::core::model::{Business, Category, City, Language};
use syriabiz::core::status::status_label;
use syriabiz::platform::config::{load_config, PlatformPaths};
use syriabiz::util::constants;
use syriabiz::util::error::DirectoryError;

/// SyriaBiz - bilingual business directory.
///
/// Browse, search and filter clinics, pharmacies, factories and offices in
/// Damascus, Aleppo and Homs.
#[derive(Parser, Debug)]
#[command(name = "syriabiz", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// User catalog TOML file (overrides config and the platform default).
    #[arg(short = 'c', long = "catalog", global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding config.toml.
    #[arg(long = "config-dir", global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List businesses matching the given filters.
    List(ListArgs),
    /// Add a business for this run and show the updated listing.
    Add(AddArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Display language (defaults to config, then Arabic).
    #[arg(short = 'l', long = "lang", value_parser = parse_language)]
    lang: Option<Language>,

    /// Evaluate open/closed at this local hour instead of the current time.
    #[arg(long = "at", value_parser = clap::value_parser!(u32).range(0..24))]
    at: Option<u32>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Search text matched against name and description.
    #[arg(short = 's', long = "search", default_value = "")]
    search: String,

    /// Only this category (Clinic, Pharmacy, Factory, Office).
    #[arg(long = "category", value_parser = parse_category)]
    category: Option<Category>,

    /// Only this city (Damascus, Aleppo, Homs).
    #[arg(long = "city", value_parser = parse_city)]
    city: Option<City>,

    /// Only businesses open right now.
    #[arg(short = 'o', long = "open-now")]
    open_now: bool,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long = "name-ar", default_value = "")]
    name_ar: String,
    #[arg(long = "name-en", default_value = "")]
    name_en: String,
    #[arg(long = "category", default_value = "")]
    category: String,
    #[arg(long = "city", default_value = "")]
    city: String,
    #[arg(long = "phone", default_value = "")]
    phone: String,
    #[arg(long = "address-ar", default_value = "")]
    address_ar: String,
    #[arg(long = "address-en", default_value = "")]
    address_en: String,
    #[arg(long = "desc-ar", default_value = "")]
    desc_ar: String,
    #[arg(long = "desc-en", default_value = "")]
    desc_en: String,
    /// Image URL (placeholder when omitted).
    #[arg(long = "image", default_value = "")]
    image: String,
    /// Opening hour, 0-24 (default 9).
    #[arg(long = "open-hour", default_value = "")]
    open_hour: String,
    /// Closing hour, 0-24 (default 17).
    #[arg(long = "close-hour", default_value = "")]
    close_hour: String,

    #[command(flatten)]
    view: ViewArgs,
}

impl From<AddArgs> for RawFormFields {
    fn from(a: AddArgs) -> Self {
        RawFormFields {
            name_ar: a.name_ar,
            name_en: a.name_en,
            category: a.category,
            city: a.city,
            phone: a.phone,
            address_ar: a.address_ar,
            address_en: a.address_en,
            desc_ar: a.desc_ar,
            desc_en: a.desc_en,
            image: a.image,
            open_hour: a.open_hour,
            close_hour: a.close_hour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unknown language '{s}' (expected ar or en)"))
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        format!("unknown category '{s}' (expected one of {})", names.join(", "))
    })
}

fn parse_city(s: &str) -> Result<City, String> {
    City::parse(s).ok_or_else(|| {
        let names: Vec<&str> = City::all().iter().map(|c| c.name()).collect();
        format!("unknown city '{s}' (expected one of {})", names.join(", "))
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let paths = PlatformPaths::resolve();
    let config_dir = cli.config_dir.clone().unwrap_or_else(|| paths.config_dir.clone());
    let (config, config_problems) = load_config(&config_dir);

    syriabiz::util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "SyriaBiz starting"
    );
    for problem in &config_problems {
        tracing::warn!(error = %problem, "Configuration warning");
    }

    // CLI override > config > platform default; only the default may be absent
    let catalog_required = cli.catalog.is_some() || config.user_catalog.is_some();
    let user_catalog = cli
        .catalog
        .clone()
        .or_else(|| config.user_catalog.clone())
        .unwrap_or_else(|| paths.default_user_catalog());

    let (catalog, catalog_errors) = load_catalog(Some(&user_catalog), catalog_required);
    for err in &catalog_errors {
        tracing::warn!(error = %err, "Catalog loading warning");
    }

    let mut session = Session::new(catalog, config.language);

    let result = match cli.command {
        Command::List(args) => {
            configure_view(&mut session, &args.view);
            session.set_search(args.search);
            session.set_filters(
                Selection::from(args.category),
                Selection::from(args.city),
                args.open_now,
            );
            print_listing(&session, args.view.format)
        }
        Command::Add(args) => {
            configure_view(&mut session, &args.view);
            let format = args.view.format;
            session
                .add_business(args.into())
                .and_then(|id| {
                    tracing::info!(id, "Listing added for this run");
                    print_listing(&session, format)
                })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(DirectoryError::Validation(e)) => {
            eprintln!("The business was not added:");
            for issue in &e.issues {
                eprintln!("  - {}: {}", issue.field, issue.problem);
            }
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn configure_view(session: &mut Session, view: &ViewArgs) {
    if let Some(lang) = view.lang {
        session.set_language(lang);
    }
    if let Some(hour) = view.at {
        session.pin_clock(NaiveTime::from_hms_opt(hour, 0, 0));
    }
}

fn print_listing(session: &Session, format: OutputFormat) -> syriabiz::util::error::Result<()> {
    let listing = session.visible();
    let stdout = std::io::stdout();
    let out = stdout.lock();

    match format {
        OutputFormat::Json => {
            export_json(&listing, session.language, &session.evaluated_at, out, "stdout")?;
        }
        OutputFormat::Csv => {
            export_csv(&listing, session.language, &session.evaluated_at, out, "stdout")?;
        }
        OutputFormat::Table => print_table(session, &listing, out).map_err(|e| {
            syriabiz::util::error::ExportError::Io {
                destination: "stdout".to_string(),
                source: e,
            }
        })?,
    }
    Ok(())
}

fn print_table<W: Write>(
    session: &Session,
    listing: &[&Business],
    mut out: W,
) -> std::io::Result<()> {
    let lang = session.language;

    if let Some(message) = session.empty_message() {
        return writeln!(out, "{message}");
    }

    for business in listing {
        let status = status_label(business, &session.evaluated_at, lang);
        writeln!(
            out,
            "#{:<4} {}  [{} / {}]  {}  {}",
            business.id,
            business.name.get(lang),
            i18n::category_label(business.category, lang),
            i18n::city_label(business.city, lang),
            business.hours.label(),
            status,
        )?;
        writeln!(
            out,
            "      {}  |  {}",
            business.address.get(lang),
            business.phone
        )?;
    }
    writeln!(out, "({} / {})", listing.len(), session.catalog.len())
}
