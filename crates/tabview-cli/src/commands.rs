//! Command implementations for the table viewer CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use tabview_cli::pipeline::{LoadedTable, ViewRequest, build_view, ensure_exportable, load_table};
use tabview_cli::render::{page_footer, schema_table, view_table};
use tabview_export::export_view;
use tabview_model::SortDirection;

use crate::cli::{ColumnsArgs, DirectionArg, ExportArgs, ViewArgs};

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let LoadedTable { config, records } = load_table(&args.data, args.config.as_deref())?;
    let request = ViewRequest {
        query: args.query.clone(),
        sort: args.sort.clone(),
        direction: direction(args.direction),
        page: args.page,
        page_size: args.page_size,
        no_pagination: args.no_pagination,
    };
    let view = build_view(&config, records, &request)?;
    if let Some(title) = &config.title {
        println!("{title}");
    }
    if view.filtered_len() == 0 {
        println!("{}", config.empty_text);
        return Ok(());
    }
    let table = view_table(&view);
    println!("{table}");
    println!("{}", page_footer(&view));
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let LoadedTable { config, records } = load_table(&args.data, args.config.as_deref())?;
    ensure_exportable(&config)?;
    let request = ViewRequest {
        query: args.query.clone(),
        sort: args.sort.clone(),
        direction: direction(args.direction),
        ..ViewRequest::default()
    };
    let view = build_view(&config, records, &request)?;
    let file = export_view(&view, config.title.as_deref()).context("build export payload")?;
    let rows = view.filtered_len();
    let path = match &args.output {
        Some(path) => {
            fs::write(path, &file.content)
                .with_context(|| format!("write export file {}", path.display()))?;
            path.clone()
        }
        None => file.write_to(Path::new(".")).context("write export file")?,
    };
    info!(rows, path = %path.display(), "export written");
    println!(
        "Exported {rows} record{} to {}",
        if rows == 1 { "" } else { "s" },
        path.display()
    );
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let LoadedTable { config, .. } = load_table(&args.data, args.config.as_deref())?;
    let table = schema_table(&config.columns);
    println!("{table}");
    Ok(())
}

fn direction(arg: DirectionArg) -> SortDirection {
    match arg {
        DirectionArg::Asc => SortDirection::Asc,
        DirectionArg::Desc => SortDirection::Desc,
    }
}
