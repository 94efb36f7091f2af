use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use todz::api::{CmdMessage, MessageLevel, TodzApi, ViewState};
use todz::config::TodzConfig;
use todz::error::{Result, TodzError};
use todz::filter::Filter;
use todz::model::Item;
use todz::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodzApi<FileStore>,
    config: TodzConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::List {
            active,
            completed,
            all,
        }) => handle_list(&mut ctx, active, completed, all),
        Some(Commands::Done { indexes }) => handle_complete(&mut ctx, indexes, true),
        Some(Commands::Undone { indexes }) => handle_complete(&mut ctx, indexes, false),
        Some(Commands::Edit { index, text }) => handle_edit(&mut ctx, index, text),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::ToggleAll) => handle_toggle_all(&mut ctx),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, false, false, false),
    }
}

fn init_context() -> Result<AppContext> {
    // TODZ_HOME overrides the platform data dir (used by the test suite).
    let data_dir = match std::env::var_os("TODZ_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "todz", "todz")
            .ok_or_else(|| TodzError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = TodzConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(&data_dir);
    let api = TodzApi::load(store).with_filter(config.default_filter);

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let result = ctx.api.add(&text.join(" "));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, active: bool, completed: bool, all: bool) -> Result<()> {
    if active {
        ctx.api.set_filter(Filter::Active);
    } else if completed {
        ctx.api.set_filter(Filter::Completed);
    } else if all {
        ctx.api.set_filter(Filter::All);
    }
    print_view(&ctx.api.view(), ctx.api.items());
    Ok(())
}

fn handle_complete(ctx: &mut AppContext, indexes: Vec<String>, complete: bool) -> Result<()> {
    for key in resolve_indexes(&ctx.api, &indexes)? {
        let result = ctx.api.toggle_complete(key, complete);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, text: Vec<String>) -> Result<()> {
    let position = parse_index(&index)?;
    let Some(key) = ctx.api.key_at(position) else {
        print_messages(&[CmdMessage::warning(format!("No item at {}", position))]);
        return Ok(());
    };

    // Mirror the interactive edit lifecycle: enter edit mode, replace the
    // text, leave edit mode. Each step persists.
    ctx.api.toggle_editing(key, true);
    let result = ctx.api.update_text(key, &text.join(" "));
    ctx.api.toggle_editing(key, false);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    for key in resolve_indexes(&ctx.api, &indexes)? {
        let result = ctx.api.remove(key);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_toggle_all(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.toggle_all_complete();
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_completed();
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("default-filter"), None) => {
            println!("default-filter = {}", ctx.config.default_filter);
        }
        (Some("default-filter"), Some(v)) => {
            ctx.config.default_filter = v.parse()?;
            ctx.config.save(&ctx.data_dir)?;
            print_messages(&[CmdMessage::success(format!(
                "default-filter set to {}",
                ctx.config.default_filter
            ))]);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;

/// Render the visible items. Positions shown are 1-based over the full
/// collection, so they stay valid as addresses under any filter.
fn print_view(view: &ViewState, all_items: &[Item]) {
    if view.items.is_empty() {
        match view.filter {
            Filter::All => println!("Nothing to do."),
            other => println!("No {} items.", other),
        }
        return;
    }

    for item in &view.items {
        let position = all_items
            .iter()
            .position(|i| i.key == item.key)
            .map(|p| p + 1)
            .unwrap_or(0);

        let checkbox = if item.complete { "[x]" } else { "[ ]" };
        let idx_str = format!("{:>3}. ", position);

        let fixed_width = 4 + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let text_display = truncate_to_width(&item.text, available);
        let padding = available.saturating_sub(text_display.width());

        let text_colored = if item.complete {
            text_display.dimmed().strikethrough()
        } else {
            text_display.normal()
        };

        println!(
            "{} {}{}{}{}",
            checkbox,
            idx_str,
            text_colored,
            " ".repeat(padding),
            format_time_ago(item.created_at).dimmed()
        );
    }

    println!(
        "{}",
        format!(
            "{} left{}",
            view.active_count,
            if view.all_complete { " (all done)" } else { "" }
        )
        .dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse()
        .map_err(|_| TodzError::Api(format!("Invalid index format: {}", s)))
}

fn resolve_indexes<S: todz::store::KvStore>(
    api: &TodzApi<S>,
    strs: &[String],
) -> Result<Vec<uuid::Uuid>> {
    let mut keys = Vec::new();
    for s in strs {
        let position = parse_index(s)?;
        match api.key_at(position) {
            Some(key) => keys.push(key),
            None => print_messages(&[CmdMessage::warning(format!("No item at {}", position))]),
        }
    }
    Ok(keys)
}
