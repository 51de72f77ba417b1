//! Scripted task board session.
//!
//! # Responsibility
//! - Act as the composition root: one store, one form, two lists.
//! - Replay `--add` submissions and `--finish` drags, then print both lists.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::{
    init_logging, BoardConfig, Component, DataTransfer, DragTarget, Draggable, ProjectInput,
    ProjectList, ProjectListView, ProjectStatus, ProjectStore,
};

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Drive a task board session from the terminal")]
struct Cli {
    /// Project to submit, as `TITLE;DESCRIPTION;PEOPLE`. Repeatable.
    #[arg(long = "add", value_name = "TITLE;DESCRIPTION;PEOPLE")]
    add: Vec<String>,

    /// 1-based position in the active list to drag onto the finished list.
    #[arg(long = "finish", value_name = "POSITION")]
    finish: Vec<usize>,

    /// Log level (trace|debug|info|warn|error). Overrides TASKBOARD_LOG_LEVEL.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for log files. Overrides TASKBOARD_LOG_DIR.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("taskboard: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = cli.log_level.clone() {
        config.logging.level = level;
    }
    if let Some(dir) = cli.log_dir.clone() {
        config.logging.log_dir = Some(dir);
    }
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("taskboard: {err}");
        return ExitCode::FAILURE;
    }

    let mut store = ProjectStore::new();
    let mut input = ProjectInput::new(config.input.clone());
    let mut active = ProjectList::new(ProjectStatus::Active);
    let mut finished = ProjectList::new(ProjectStatus::Finished);
    input.configure(&mut store);
    active.configure(&mut store);
    finished.configure(&mut store);

    let mut failed = false;
    for raw in &cli.add {
        let Some((title, description, people)) = split_entry(raw) else {
            eprintln!("taskboard: expected TITLE;DESCRIPTION;PEOPLE, got `{raw}`");
            failed = true;
            continue;
        };
        input.fill(title, description, people);
        if let Err(err) = input.submit(&mut store) {
            eprintln!("taskboard: {err}");
            input.clear();
            failed = true;
        }
    }

    // Resolve positions up front so earlier drags do not shift later ones.
    let cards = active.items();
    for position in &cli.finish {
        let Some(card) = position.checked_sub(1).and_then(|index| cards.get(index)) else {
            error!(
                "event=finish_skipped module=cli status=error position={}",
                position
            );
            eprintln!("taskboard: no active project at position {position}");
            failed = true;
            continue;
        };
        let mut transfer = DataTransfer::new();
        card.drag_start(&mut transfer);
        if finished.drag_over(&transfer).is_accept() {
            finished.drop(&transfer, &mut store);
        } else {
            finished.drag_leave();
        }
        card.drag_end(&transfer);
    }

    print_list(&active.render_content());
    print_list(&finished.render_content());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Splits `TITLE;DESCRIPTION;PEOPLE`. The title ends at the first `;` and
/// people starts after the last one, so the description may contain `;`.
fn split_entry(raw: &str) -> Option<(&str, &str, &str)> {
    let (rest, people) = raw.rsplit_once(';')?;
    let (title, description) = rest.split_once(';')?;
    Some((title, description, people))
}

fn print_list(view: &ProjectListView) {
    println!("{}", view.heading);
    if view.items.is_empty() {
        println!("  (none)");
    }
    for item in &view.items {
        println!("  - {} [{}]", item.title, item.assigned);
        println!("    {}", item.description);
    }
}

#[cfg(test)]
mod tests {
    use super::split_entry;

    #[test]
    fn split_entry_requires_three_parts() {
        assert_eq!(
            split_entry("Build API;Design and implement;3"),
            Some(("Build API", "Design and implement", "3"))
        );
        assert_eq!(split_entry("Build API;3"), None);
    }

    #[test]
    fn split_entry_keeps_semicolons_in_description() {
        assert_eq!(split_entry("a;b;c;d"), Some(("a", "b;c", "d")));
        assert_eq!(
            split_entry("Build API;design; then implement;3"),
            Some(("Build API", "design; then implement", "3"))
        );
    }
}
