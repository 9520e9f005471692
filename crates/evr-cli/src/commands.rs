//! Subcommand implementations.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::Table;
use tracing::{debug, info};

use evr_model::{ReportDefinition, SortDirection, ViewState};
use evr_query::derive_with_attributes;
use evr_store::{JsonFileStore, load_config};
use evr_table::{ActionColumns, DEFAULT_HIDDEN_COLUMNS, project_only, run, to_csv};

use evr_cli::ingest::read_result_table;

use crate::cli::{DeriveArgs, ExportArgs, RenderArgs, ViewArgs};
use crate::summary::{ActionRender, apply_table_style, print_display_table};

pub fn run_derive(args: &DeriveArgs) -> Result<()> {
    let report = load_report(&args.report)?;
    let known: BTreeSet<String> = args.known_attributes.iter().cloned().collect();
    let Some(mut params) = derive_with_attributes(&report, &known) else {
        bail!(
            "report '{}' has no program id; cannot derive an analytics query",
            report.name
        );
    };
    if let Some(page) = args.page {
        params = params.with_page(page);
    }
    if let Some(page_size) = args.page_size {
        params = params.with_page_size(page_size);
    }

    println!("Report: {} ({})", report.name, report.id);
    println!("Resource: {}", params.resource_path(report.output_type));
    let mut table = Table::new();
    table.set_header(vec!["Parameter", "Value"]);
    apply_table_style(&mut table);
    for (key, value) in params.query_pairs() {
        table.add_row(vec![key, value]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let report = load_report(&args.report)?;
    let table = read_result_table(&args.data)?;
    let view = build_view(&args.view)?;
    info!(
        report = %report.id,
        rows = table.rows.len(),
        "rendering result table"
    );

    let display = run(&table, &view, &ActionColumns::default(), report.output_type);
    let program = report.program_id().unwrap_or_default().to_string();
    print_display_table(
        &display,
        &ActionRender {
            program: &program,
            program_type: report.program_type(),
            links: args.links,
        },
    );
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let report = load_report(&args.report)?;
    let table = read_result_table(&args.data)?;
    let view = build_view(&args.view)?;

    let projected = project_only(&table, &view, &ActionColumns::default(), report.output_type);
    let csv = to_csv(&projected);
    match &args.output {
        Some(path) => {
            fs::write(path, csv).with_context(|| format!("write csv: {}", path.display()))?;
            info!(path = %path.display(), "exported projected table");
        }
        None => println!("{csv}"),
    }
    Ok(())
}

pub fn run_columns() -> Result<()> {
    for name in DEFAULT_HIDDEN_COLUMNS {
        println!("{name}");
    }
    Ok(())
}

fn load_report(path: &Path) -> Result<ReportDefinition> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read report: {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse report: {}", path.display()))
}

/// Assemble the view state: stored dashboard configuration first, CLI
/// flags on top.
pub fn build_view(args: &ViewArgs) -> Result<ViewState> {
    let mut view = match (&args.config_dir, &args.dashboard) {
        (Some(dir), Some(dashboard)) => {
            let store = JsonFileStore::new(dir.clone())
                .with_context(|| format!("open config store: {}", dir.display()))?;
            let config = load_config(&store, dashboard).context("load dashboard config")?;
            debug!(%dashboard, "seeded view from stored config");
            config.seed_view_state()
        }
        _ => ViewState::new(),
    };

    for name in &args.hide {
        view.hidden_columns.insert(name.clone());
    }
    if args.hide_defaults {
        view.hidden_columns
            .extend(DEFAULT_HIDDEN_COLUMNS.iter().map(|s| (*s).to_string()));
    }
    if let Some(search) = &args.search {
        view = view.with_search(search.clone());
    }
    for filter in &args.filters {
        let (column, value) = parse_filter(filter)?;
        view = view.with_column_filter(column, value);
    }
    if let Some(column) = args.sort_by {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        view = view.with_sort(column, direction);
    }
    view = view.with_paging(args.page, args.page_size)?;
    Ok(view)
}

fn parse_filter(raw: &str) -> Result<(usize, String)> {
    let (index, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid filter '{raw}', expected IDX=VALUE"))?;
    let column: usize = index
        .trim()
        .parse()
        .with_context(|| format!("invalid filter column in '{raw}'"))?;
    Ok((column, value.to_string()))
}
