use super::print::{print_config, print_items, print_messages};
use super::setup::{init_logging, Cli, Commands, SortArgs};
use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use stockroom::api::{ConfigAction, StockroomApi, StockroomPaths};
use stockroom::commands;
use stockroom::config::StockroomConfig;
use stockroom::error::{Result, StockroomError};
use stockroom::model::{parse_stock, ImportMode};
use stockroom::store::fs_backend::FsBackend;

const HOME_ENV: &str = "STOCKROOM_HOME";

struct AppContext {
    api: StockroomApi<FsBackend>,
    config: StockroomConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = StockroomPaths::new(resolve_data_dir(&cli)?);
    tracing::debug!(data_dir = %paths.data_dir().display(), "resolved data dir");

    // Init and config must work before a catalog exists or while it is unreadable.
    match cli.command {
        Some(Commands::Init) => {
            let result = commands::init::run(&paths)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&paths, key, value),
        command => run_catalog_command(&paths, command),
    }
}

fn run_catalog_command(paths: &StockroomPaths, command: Option<Commands>) -> Result<()> {
    let mut ctx = init_context(paths)?;

    match command {
        Some(Commands::Add { name, stock }) => handle_add(&mut ctx, name, stock),
        Some(Commands::Update { name, delta }) => handle_update(&mut ctx, name, delta),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, name),
        Some(Commands::Search { query, sort }) => handle_search(&ctx, query, sort),
        Some(Commands::List { sort }) => handle_list(&ctx, sort),
        Some(Commands::Import {
            file,
            merge,
            overwrite,
        }) => handle_import(&mut ctx, file, merge, overwrite),
        Some(Commands::Export { file }) => handle_export(&ctx, file),
        Some(Commands::Init) | Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, SortArgs::default()),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockroomError::Api("Could not determine data directory".into()))
}

fn init_context(paths: &StockroomPaths) -> Result<AppContext> {
    let config = StockroomConfig::load(paths.data_dir())?;
    let api = StockroomApi::open_with_config(paths, &config)?;
    Ok(AppContext { api, config })
}

fn handle_add(ctx: &mut AppContext, name: String, stock: String) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StockroomError::Api("Please enter an item name.".into()));
    }
    let stock = parse_stock(&stock)
        .map_err(|_| StockroomError::Api("Stock must be a number.".into()))?;

    let result = ctx.api.add_item(name, stock)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, name: String, delta: String) -> Result<()> {
    let delta = parse_stock(&delta)
        .map_err(|_| StockroomError::Api("Stock change must be a number.".into()))?;

    let result = ctx.api.update_stock(name.trim(), delta)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.delete_item(name.trim())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String, sort: SortArgs) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return handle_list(ctx, sort);
    }
    let result = ctx.api.search_items(query, sort.to_order())?;
    if !result.listed_items.is_empty() {
        print_items(&result.listed_items);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, sort: SortArgs) -> Result<()> {
    let result = ctx.api.list_items(sort.to_order())?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf, merge: bool, overwrite: bool) -> Result<()> {
    let mode = if overwrite {
        ImportMode::Overwrite
    } else if merge {
        ImportMode::Merge
    } else {
        ctx.config.import_mode
    };

    let result = ctx.api.import_csv(&file, mode)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(default_export_path);
    let result = ctx.api.export_csv(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "stockroom-{}.csv",
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    ))
}

fn handle_config(paths: &StockroomPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(paths, action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
