//! Taskpad - Main Entry Point
//!
//! Interactive line-oriented front end. All state and persistence live in
//! the `taskpad` library; this binary only turns input lines into intents
//! and prints the derived view.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, BufRead, Write};
use taskpad::{App, Filter, Theme, ViewState};

/// Taskpad - task list with filters, themes and durable storage
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the persisted task list and theme
    dir: String,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut app = App::open(&args.dir);

    let stdin = io::stdin();
    loop {
        render(&app.view());
        prompt(&app)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);

        // While editing, the whole line is the replacement text; only a
        // successful submit ends the edit session.
        if app.is_editing() {
            if let Err(e) = app.submit(line) {
                println!("error: {}", e);
            }
            continue;
        }

        match dispatch(&mut app, line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("error: {}", e),
        }
    }

    Ok(())
}

/// Apply one command line to the app. Returns `Ok(false)` to quit.
fn dispatch(app: &mut App, line: &str) -> Result<bool> {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "add" => {
            if let Err(e) = app.submit(rest) {
                println!("error: {}", e);
            }
        }
        "edit" => match parse_index(rest) {
            Ok(i) => {
                if let Err(e) = app.begin_edit(i) {
                    println!("error: {}", e);
                }
            }
            Err(e) => println!("error: {}", e),
        },
        "done" => match parse_index(rest) {
            Ok(i) => {
                if let Err(e) = app.toggle_complete(i) {
                    println!("error: {}", e);
                }
            }
            Err(e) => println!("error: {}", e),
        },
        "del" => match parse_index(rest) {
            Ok(i) => {
                if let Err(e) = app.delete(i) {
                    println!("error: {}", e);
                }
            }
            Err(e) => println!("error: {}", e),
        },
        "filter" => match rest.parse::<Filter>() {
            Ok(f) => app.set_filter(f),
            Err(e) => println!("error: {}", e),
        },
        "theme" => {
            let theme = app.toggle_theme();
            println!("theme is now {}", theme);
        }
        "help" => print_usage(),
        "quit" | "exit" => return Ok(false),
        other => println!("error: unknown command '{}' (try 'help')", other),
    }

    Ok(true)
}

/// Parse a 1-based display number as shown in the list.
fn parse_index(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a task number", s))?;
    if n == 0 {
        return Err("task numbers start at 1".to_string());
    }
    Ok(n - 1)
}

fn render(view: &ViewState) {
    let marker = match view.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    println!();
    println!("-- tasks ({}, {} theme) --", view.filter, marker);
    if view.tasks.is_empty() {
        println!("  (nothing to show)");
    }
    for (i, task) in view.tasks.iter().enumerate() {
        let check = if task.completed { "x" } else { " " };
        println!("  {:>2}. [{}] {}", i + 1, check, task.text);
    }
}

fn prompt(app: &App) -> Result<()> {
    if app.is_editing() {
        print!("update [{}]> ", app.pending_text());
    } else {
        print!("> ");
    }
    io::stdout().flush()?;
    Ok(())
}

fn print_usage() {
    println!("commands:");
    println!("  add <text>                  add a task");
    println!("  edit <n>                    edit task n (next line replaces its text)");
    println!("  done <n>                    toggle completion of task n");
    println!("  del <n>                     delete task n");
    println!("  filter all|completed|pending  choose which tasks are shown");
    println!("  theme                       switch between light and dark");
    println!("  quit                        exit");
    println!();
    println!("task numbers refer to the list as currently shown.");
}
