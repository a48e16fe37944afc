//! # CLI Layer
//!
//! This module is one possible UI client for flashdeck. It is the only place
//! that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: `FLASHDECK_LOG` filter, `-v` for debug
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Business logic is tested in the command layer; rendering is tested in
//! `render.rs`.

use super::render::{
    print_messages, render_card, render_config, render_document_list, render_search_results,
    render_toc,
};
use super::setup::{
    CardCommands, Cli, Commands, CoreCommands, DataCommands, DocCommands, MiscCommands,
};
use clap::Parser;
use flashdeck::api::{CmdResult, ConfigAction, ExportFormat, FlashdeckApi};
use flashdeck::commands::create::NEW_NOTE_TEMPLATE;
use flashdeck::editor::edit_text;
use flashdeck::error::{FlashdeckError, Result};
use flashdeck::init::initialize;
use flashdeck::render::TerminalRenderer;
use flashdeck::search::MatchMode;
use flashdeck::store::fs::FileStore;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "FLASHDECK_LOG";

struct AppContext {
    api: FlashdeckApi<FileStore>,
    renderer: TerminalRenderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Create {
                no_editor,
                file,
                name,
            } => {
                let name = if name.is_empty() {
                    None
                } else {
                    Some(name.join(" "))
                };
                handle_create(&mut ctx, name, file, no_editor)
            }
            CoreCommands::List => handle_list(&ctx),
            CoreCommands::Search {
                regex,
                literal,
                query,
            } => {
                let mode = if regex {
                    Some(MatchMode::Pattern)
                } else if literal {
                    Some(MatchMode::Literal)
                } else {
                    None
                };
                handle_search(&ctx, query.join(" "), mode)
            }
        },
        Some(Commands::Card(cmd)) => match cmd {
            CardCommands::View { indexes } => handle_view(&mut ctx, indexes),
            CardCommands::Next => {
                let result = ctx.api.next_card()?;
                print_card_result(&ctx, &result);
                Ok(())
            }
            CardCommands::Prev => {
                let result = ctx.api.prev_card()?;
                print_card_result(&ctx, &result);
                Ok(())
            }
            CardCommands::Jump { card, indexes } => {
                let result = ctx.api.jump_to_card(&indexes, card)?;
                print_card_result(&ctx, &result);
                Ok(())
            }
            CardCommands::Toc { indexes } => handle_toc(&ctx, indexes),
        },
        Some(Commands::Doc(cmd)) => match cmd {
            DocCommands::Edit { indexes } => handle_edit(&mut ctx, indexes),
            DocCommands::Pin { indexes } => {
                let result = ctx.api.pin_documents(&indexes)?;
                print_messages(&result.messages);
                Ok(())
            }
            DocCommands::Unpin { indexes } => {
                let result = ctx.api.unpin_documents(&indexes)?;
                print_messages(&result.messages);
                Ok(())
            }
            DocCommands::Delete { indexes } => {
                let result = ctx.api.delete_documents(&indexes)?;
                print_messages(&result.messages);
                Ok(())
            }
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Import { paths } => handle_import(&mut ctx, paths),
            DataCommands::Export {
                archive,
                out,
                indexes,
            } => handle_export(&ctx, indexes, out, archive),
            DataCommands::Reset { yes } => handle_reset(&mut ctx, yes),
        },
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            handle_config(&mut ctx, key, value)
        }
        None => handle_list(&ctx),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let ctx = initialize()?;
    Ok(AppContext {
        api: ctx.api,
        renderer: TerminalRenderer::default(),
    })
}

fn handle_create(
    ctx: &mut AppContext,
    name: Option<String>,
    file: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let text = if let Some(path) = file {
        std::fs::read_to_string(&path).map_err(FlashdeckError::Io)?
    } else if let Some(piped) = read_piped_stdin() {
        piped
    } else if no_editor {
        return Err(FlashdeckError::Api(
            "Nothing to create: pass --file, pipe text in, or drop --no-editor".to_string(),
        ));
    } else {
        edit_text(NEW_NOTE_TEMPLATE)?
    };

    let result = ctx.api.create_document(&text, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn read_piped_stdin() -> Option<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    let mut buffer = String::new();
    match stdin.read_to_string(&mut buffer) {
        Ok(_) if !buffer.trim().is_empty() => Some(buffer),
        _ => None,
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_documents();
    print!("{}", render_document_list(&result.listed_documents));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String, mode: Option<MatchMode>) -> Result<()> {
    let result = ctx.api.search(&query, mode);
    print!("{}", render_search_results(&result.search_results));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_document(&indexes)?;
    print_card_result(ctx, &result);
    Ok(())
}

fn print_card_result(ctx: &AppContext, result: &CmdResult) {
    if let Some(view) = &result.card_view {
        print!("{}", render_card(view, &ctx.renderer));
    }
    print_messages(&result.messages);
}

fn handle_toc(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.table_of_contents(&indexes)?;
    print!("{}", render_toc(&result.toc));
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_document(&indexes, edit_text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<String>) -> Result<()> {
    let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let result = ctx.api.import_documents(paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    indexes: Vec<String>,
    out: Option<String>,
    archive: bool,
) -> Result<()> {
    let out_dir = out.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let format = if archive {
        ExportFormat::Archive
    } else {
        ExportFormat::Files
    };
    let result = ctx.api.export_documents(&indexes, &out_dir, format)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.api.state().documents.len();
    if !yes && count > 0 && !confirm(&format!("Remove all {} document(s)?", count))? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush().map_err(FlashdeckError::Io)?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(FlashdeckError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
