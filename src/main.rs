use anyhow::Result;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use std::path::Path;

use review_desk::config::Config;
use review_desk::data::records::{InterviewListing, Submission, TeamMember};
use review_desk::data::{loaders, sample};
use review_desk::logging::init_tracing;
use review_desk::storage::{FileStore, KeyValueStore, BANNER_DISMISSED};
use review_desk::table::{FilterSelection, TableController, TableSchema};

/// One table row rendered by the shell.
trait RowDisplay {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl RowDisplay for InterviewListing {
    const HEADERS: &'static [&'static str] = &["ID", "Interview", "Status", "Created", "Signups"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.interview_name.clone(),
            self.status.to_string(),
            self.created_at.format("%Y-%m-%d").to_string(),
            self.signups.to_string(),
        ]
    }
}

impl RowDisplay for Submission {
    const HEADERS: &'static [&'static str] =
        &["ID", "Student", "Document", "Status", "Submitted", "Reviewer"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.student_name.clone(),
            self.document_type.to_string(),
            self.status.to_string(),
            self.submitted_at.format("%Y-%m-%d").to_string(),
            self.reviewer.clone().unwrap_or_default(),
        ]
    }
}

impl RowDisplay for TeamMember {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Email", "Role", "Status", "Joined"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.status.to_string(),
            self.joined_at.format("%Y-%m-%d").to_string(),
        ]
    }
}

#[derive(Debug, Default)]
struct CliOptions {
    dataset: Option<String>,
    file: Option<String>,
    search: Option<String>,
    filters: Vec<(String, String)>,
    sorts: Vec<String>,
    page: Option<usize>,
    page_size: Option<usize>,
    help: bool,
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut opts = CliOptions::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => opts.help = true,
            "--dataset" => {
                if let Some(v) = args.get(i + 1) {
                    opts.dataset = Some(v.clone());
                    i += 1;
                }
            }
            "--search" => {
                if let Some(v) = args.get(i + 1) {
                    opts.search = Some(v.clone());
                    i += 1;
                }
            }
            "--filter" => {
                if let Some(v) = args.get(i + 1) {
                    if let Some((key, value)) = v.split_once('=') {
                        opts.filters.push((key.to_string(), value.to_string()));
                    } else {
                        eprintln!("Ignoring malformed --filter '{}', expected key=value", v);
                    }
                    i += 1;
                }
            }
            "--sort" => {
                if let Some(v) = args.get(i + 1) {
                    opts.sorts.push(v.clone());
                    i += 1;
                }
            }
            "--page" => {
                if let Some(v) = args.get(i + 1) {
                    opts.page = v.parse().ok();
                    i += 1;
                }
            }
            "--page-size" => {
                if let Some(v) = args.get(i + 1) {
                    opts.page_size = v.parse().ok();
                    i += 1;
                }
            }
            arg if arg.ends_with(".json") || arg.ends_with(".csv") => {
                opts.file = Some(arg.to_string());
            }
            arg => {
                eprintln!("Unknown argument '{}', see --help", arg);
            }
        }
        i += 1;
    }
    opts
}

fn print_help() {
    println!("review-desk - browse career-services review tables");
    println!();
    println!("Usage:");
    println!("  review-desk [OPTIONS] [FILE.json|FILE.csv]");
    println!();
    println!("Options:");
    println!("  --dataset <name>     interviews | submissions | team (default: interviews)");
    println!("  --search <text>      free-text search over the dataset's text fields");
    println!("  --filter <key=val>   equality filter, repeatable (e.g. status=Active)");
    println!("  --sort <key>         cycle sort on a key; pass twice for descending");
    println!("  --page <n>           page to display (1-based)");
    println!("  --page-size <n>      rows per page (default from config)");
    println!("  --help               show this help");
    println!();
    println!("With FILE, records are loaded from the file instead of the built-in");
    println!("sample data; --dataset selects the record type the file contains.");
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let opts = parse_args(&args);

    if opts.help {
        print_help();
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(target: "config", "falling back to defaults: {}", e);
        Config::default()
    });

    show_banner_once();

    let dataset = opts.dataset.as_deref().unwrap_or("interviews");
    match dataset {
        "interviews" => {
            let rows = match &opts.file {
                Some(path) => loaders::load_records(Path::new(path))?,
                None => sample::interview_listings(),
            };
            run_table(rows, InterviewListing::schema(), &opts, &config)
        }
        "submissions" => {
            let rows = match &opts.file {
                Some(path) => loaders::load_records(Path::new(path))?,
                None => sample::submissions(),
            };
            run_table(rows, Submission::schema(), &opts, &config)
        }
        "team" => {
            let rows = match &opts.file {
                Some(path) => loaders::load_records(Path::new(path))?,
                None => sample::team_members(),
            };
            run_table(rows, TeamMember::schema(), &opts, &config)
        }
        other => {
            eprintln!("Unknown dataset '{}', see --help", other);
            std::process::exit(1);
        }
    }
}

/// First run prints a short hint, every later run stays quiet.
fn show_banner_once() {
    match FileStore::open_default() {
        Ok(mut store) => {
            if !store.get_bool(BANNER_DISMISSED) {
                println!("Tip: combine --filter and --search to narrow any table.\n");
                if let Err(e) = store.set_bool(BANNER_DISMISSED, true) {
                    tracing::warn!(target: "storage", "could not persist banner flag: {}", e);
                }
            }
        }
        Err(e) => {
            tracing::warn!(target: "storage", "flag store unavailable: {}", e);
        }
    }
}

fn run_table<R: RowDisplay>(
    rows: Vec<R>,
    schema: TableSchema<R>,
    opts: &CliOptions,
    config: &Config,
) -> Result<()> {
    let page_size = opts.page_size.unwrap_or(config.behavior.page_size);
    let mut controller = TableController::new(rows, schema)
        .with_page_size(page_size)
        .with_search_mode(config.behavior.resolved_search_mode())
        .with_fuzzy_threshold(config.behavior.fuzzy_threshold);

    for (key, value) in &opts.filters {
        controller.set_field_filter(key, FilterSelection::Value(value.clone()));
    }
    if let Some(search) = &opts.search {
        controller.set_search_text(search.clone());
    }
    for key in &opts.sorts {
        controller.cycle_sort(key);
    }
    if let Some(page) = opts.page {
        controller.set_page(page);
    }

    let view = controller.derive();
    if view.is_empty() {
        println!("No matching rows.");
        return Ok(());
    }

    let mut table = Table::new();
    if config.display.compact_mode {
        table.load_preset(presets::UTF8_BORDERS_ONLY);
    } else {
        table.load_preset(presets::UTF8_FULL);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers: Vec<Cell> = Vec::new();
    if config.display.show_row_numbers {
        headers.push(Cell::new("#").add_attribute(Attribute::Bold));
    }
    headers.extend(
        R::HEADERS
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );
    table.set_header(headers);

    let offset = (view.page - 1) * page_size;
    for (i, row) in controller.page_rows().into_iter().enumerate() {
        let mut cells = Vec::new();
        if config.display.show_row_numbers {
            cells.push((offset + i + 1).to_string());
        }
        cells.extend(row.cells());
        table.add_row(cells);
    }

    println!("{table}");
    println!(
        "Page {} of {} - {} matching rows ({} total)",
        view.page, view.total_pages, view.filtered_count, view.total_count
    );

    Ok(())
}
