use super::logging;
use super::render::{print_messages, render_full_notes, render_note_lines};
use super::setup::{parse_tags, Cli, Commands, PriorityArg, StatusArg};
use clap::{CommandFactory, Parser};
use notebook::commands::{CmdMessage, NewNote, NoteFilter};
use notebook::config::{NotebookConfig, CONFIG_KEYS};
use notebook::error::Result;
use notebook::init::{config_dir, initialize};
use notebook::manager::NoteManager;
use notebook::store::fs::FileStore;
use std::path::Path;

struct AppContext {
    manager: NoteManager<FileStore>,
    date_format: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let file = cli.file.as_deref();

    match command {
        Commands::Add {
            title,
            content,
            priority,
            tags,
        } => handle_add(&mut init_context(&cwd, file)?, title, content, priority, tags),
        Commands::List {
            status,
            priority,
            tag,
            all,
        } => handle_list(&init_context(&cwd, file)?, status, priority, tag, all),
        Commands::Search { query } => handle_search(&init_context(&cwd, file)?, &query),
        Commands::Delete { id } => handle_delete(&mut init_context(&cwd, file)?, id),
        Commands::Status { id, status } => {
            handle_status(&mut init_context(&cwd, file)?, id, status)
        }
        // Config never opens the notes file
        Commands::Config { key, value } => handle_config(key, value),
    }
}

fn init_context(cwd: &Path, file: Option<&Path>) -> Result<AppContext> {
    let ctx = initialize(cwd, file)?;
    Ok(AppContext {
        manager: ctx.manager,
        date_format: ctx.config.date_format,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: String,
    priority: PriorityArg,
    tags: Option<String>,
) -> Result<()> {
    let new = NewNote::new(title, content)
        .priority(priority.into())
        .tags(parse_tags(tags.as_deref()));
    let result = ctx.manager.add_note(new)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    status: Option<StatusArg>,
    priority: Option<PriorityArg>,
    tag: Option<String>,
    all: bool,
) -> Result<()> {
    let filter = NoteFilter {
        status: status.map(Into::into),
        priority: priority.map(Into::into),
        tag,
        include_archived: all,
    };
    let result = ctx.manager.list_notes(&filter);
    print!("{}", render_full_notes(&result.listed_notes, &ctx.date_format));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.manager.search_notes(query);
    print_messages(&result.messages);
    print!("{}", render_note_lines(&result.listed_notes, &ctx.date_format));
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.manager.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, id: u64, status: StatusArg) -> Result<()> {
    let result = ctx.manager.update_status(id, status.into())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir()?;
    let mut config = NotebookConfig::load(&dir)?;

    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), value) if !CONFIG_KEYS.contains(&key.as_str()) => {
            let hint = if value.is_some() { " (nothing saved)" } else { "" };
            print_messages(&[CmdMessage::warning(format!(
                "Unknown config key: {}{}. Known keys: {}",
                key,
                hint,
                CONFIG_KEYS.join(", ")
            ))]);
        }
        (Some(key), None) => println!("{} = {}", key, config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            print_messages(&[CmdMessage::success(format!("{} set to {}", key, value))]);
        }
    }
    Ok(())
}
