use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::cli::commands::{Cli, Commands, ListArgs, ShowArgs};
use crate::cli::output::{TodoJson, TodoListJson};
use crate::io::config_io::load_config;
use crate::io::fetch::fetch_todos;
use crate::model::{SortKey, Todo, config::Config};
use crate::ops::board::Board;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let config = load_config(cli.config.as_deref().map(Path::new))?;

    match cli.command {
        // No subcommand is handled in main.rs (launches the TUI)
        None => Ok(()),
        Some(Commands::List(args)) => cmd_list(args, &config, json),
        Some(Commands::Show(args)) => cmd_show(args, &config, json),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new();
    board.load_all(fetch_todos(config)?);

    match args.sort.as_deref() {
        // Creation date ascending is already the default
        None | Some("date") => {}
        Some("title") => board.sort_by_title(),
        Some(other) => {
            return Err(format!("unknown sort key '{}' (expected title or date)", other).into());
        }
    }
    if args.desc {
        // A second toggle on the active key flips the direction
        match board.sort().key {
            SortKey::Title => board.sort_by_title(),
            SortKey::CreationDate => board.sort_by_date(),
        }
    }
    if args.from.is_some() || args.to.is_some() {
        board.set_filter(
            args.from.as_deref().unwrap_or(""),
            args.to.as_deref().unwrap_or(""),
        );
    }

    let visible = board.visible();
    if json {
        let out = TodoListJson {
            count: visible.len(),
            todos: visible.iter().map(TodoJson::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_table(&visible, board.len());
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new();
    board.load_all(fetch_todos(config)?);

    let todo = board
        .get(args.id)
        .ok_or_else(|| format!("no todo with id {}", args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&TodoJson::from(todo))?);
    } else {
        println!("id:          {}", todo.id);
        println!("title:       {}", todo.title);
        println!("completed:   {}", if todo.completed { "yes" } else { "no" });
        println!("created:     {}", todo.display_date());
        println!("description: {}", todo.description);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn print_table(visible: &[Todo], total: usize) {
    if visible.is_empty() {
        println!("no todos ({} total, all filtered out)", total);
        return;
    }

    let title_width = visible
        .iter()
        .map(|t| t.title.width())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());

    println!(
        "{:>4}  {}  {:<title_width$}  {}",
        "ID", " ", "TITLE", "CREATED"
    );
    for todo in visible {
        let mark = if todo.completed { "x" } else { " " };
        let pad = title_width - todo.title.width();
        println!(
            "{:>4}  {}  {}{}  {}",
            todo.id,
            mark,
            todo.title,
            " ".repeat(pad),
            todo.display_date()
        );
    }
    if visible.len() != total {
        println!("({} of {} shown)", visible.len(), total);
    }
}
