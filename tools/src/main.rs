//! monster-tool: terminal editor for monster spawn files.
//!
//! Usage:
//!   monster-tool [--config tool.json] [--load monsters.dat] [--resume session.json]
//!   monster-tool --ipc-mode
//!
//! Interactive mode reads text commands (type `help`). IPC mode reads one
//! JSON `EditorCommand` per line and answers with one JSON line each.

use anyhow::Result;
use spawn_core::{
    catalog::{Buff, Monster},
    command::{parse_text_command, CommandOutcome, EditorCommand},
    config::ToolConfig,
    editor::{MonsterToolEditor, RemoveOutcome, SaveOutcome},
    list_view::ListView,
    prompt::SavePrompt,
    snapshot::SessionSnapshot,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(serde::Serialize)]
struct UiState<'a> {
    outcome:  &'a CommandOutcome,
    rows:     Vec<String>,
    selected: Option<usize>,
}

/// Commands handled by the runner itself rather than the session.
#[derive(serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum IpcControl {
    Quit,
}

/// Save prompt over stdin. An empty answer cancels.
struct StdinPrompt;

impl SavePrompt for StdinPrompt {
    fn prompt_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        print!("save as (suggested: {suggested_name}, empty to cancel): ");
        io::stdout().flush().ok()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer).ok()?;
        let answer = answer.trim();
        (!answer.is_empty()).then(|| PathBuf::from(answer))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let config = match flag_value(&args, "--config") {
        Some(path) => ToolConfig::load(Path::new(path))?,
        None => ToolConfig::default(),
    };

    let mut editor = match flag_value(&args, "--resume") {
        Some(path) => {
            let snapshot = SessionSnapshot::read_from(Path::new(path))?;
            MonsterToolEditor::from_snapshot(config, snapshot)?
        }
        None => MonsterToolEditor::new(config),
    };

    if let Some(path) = flag_value(&args, "--load") {
        editor.load_file(Path::new(path))?;
    }

    if ipc_mode {
        run_ipc_loop(&mut editor)
    } else {
        run_interactive(&mut editor)
    }
}

fn run_ipc_loop(editor: &mut MonsterToolEditor) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }
        if serde_json::from_str::<IpcControl>(&buffer).is_ok() {
            break;
        }

        let reply = serde_json::from_str::<EditorCommand>(&buffer)
            .map_err(anyhow::Error::from)
            .and_then(|cmd| editor.apply(cmd).map_err(anyhow::Error::from));

        match reply {
            Ok(outcome) => {
                let state = UiState {
                    outcome:  &outcome,
                    rows:     editor.row_texts(),
                    selected: editor.list().selected_row(),
                };
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            Err(e) => {
                log::warn!("ipc: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn run_interactive(editor: &mut MonsterToolEditor) -> Result<()> {
    println!("Monsters Tool");
    print_help();

    let stdin = io::stdin();
    let mut buffer = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        buffer.clear();
        if stdin.lock().read_line(&mut buffer)? == 0 {
            break;
        }
        let line = buffer.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "save" => {
                // No path given: ask, like the File > Save dialog.
                match editor.save(&mut StdinPrompt) {
                    Ok(outcome) => print_save(&outcome),
                    Err(e) => println!("error: save failed: {e}"),
                }
                continue;
            }
            _ => {}
        }
        if let Some(path) = line.strip_prefix("snapshot ") {
            match editor.snapshot().write_to(Path::new(path.trim())) {
                Ok(()) => println!("session written to {}", path.trim()),
                Err(e) => println!("error: snapshot failed: {e}"),
            }
            continue;
        }

        let Some(command) = parse_text_command(line) else {
            log::warn!("Unknown command: {line}");
            println!("unrecognised command, type `help`");
            continue;
        };
        match editor.apply(command) {
            Ok(outcome) => report(editor, &outcome),
            Err(e) => println!("error: {e}"),
        }
    }
    Ok(())
}

fn report(editor: &MonsterToolEditor, outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Added { id } => println!("added record {id}"),
        CommandOutcome::Selected { row } => match row {
            Some(r) => println!("selected row {r}"),
            None => println!("selection cleared"),
        },
        CommandOutcome::Removed { remove } => match remove {
            RemoveOutcome::Removed { id } => println!("removed record {id}"),
            RemoveOutcome::NothingSelected => println!("nothing selected"),
        },
        CommandOutcome::Saved { save } => print_save(save),
        CommandOutcome::Loaded { count } => println!("loaded {count} records"),
        CommandOutcome::Listed { .. } => {}
    }
    print_rows(editor);
}

fn print_save(outcome: &SaveOutcome) {
    match outcome {
        SaveOutcome::Saved { path, lines } => {
            println!("saved {lines} records to {}", path.display())
        }
        SaveOutcome::Cancelled => println!("save cancelled"),
    }
}

fn print_rows(editor: &MonsterToolEditor) {
    let selected = editor.list().selected_row();
    for (i, text) in editor.row_texts().iter().enumerate() {
        let marker = if selected == Some(i) { '>' } else { ' ' };
        println!("{marker} [{i}] {text}");
    }
}

fn print_help() {
    let monsters: Vec<&str> = Monster::ALL.iter().map(|m| m.name()).collect();
    let buffs: Vec<&str> = Buff::ALL.iter().map(|b| b.as_str()).collect();
    println!("  add <monster> <seconds> [buff ...]   monsters: {}", monsters.join(", "));
    println!("                                       buffs: {}", buffs.join(", "));
    println!("  select <row> | select none");
    println!("  remove                               remove the selected row");
    println!("  save [path]                          write the spawn file");
    println!("  load <path>                          append records from a spawn file");
    println!("  snapshot <path>                      write the session as JSON (resume with --resume)");
    println!("  list | help | quit");
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
