//! Horizon Autocomplete Terminal Demo
//!
//! Drives an autocomplete control from stdin, one host event per line:
//!
//! - `type <text>`: type characters into the input
//! - `key <name>`: press a named key (`ArrowUp`, `ArrowDown`, `Enter`, `Backspace`, ...)
//! - `focus` / `blur`: move keyboard focus
//! - `enter` / `leave`: move the pointer over or off the list
//! - `click <row>`: click a suggestion row
//! - `wait <ms>`: let time pass and run due timers
//!
//! Run with: cargo run -p horizon-autocomplete --example terminal_demo
//!
//! Set `RUST_LOG=horizon_autocomplete=debug` to watch state transitions.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use horizon_autocomplete::prelude::*;
use tracing_subscriber::EnvFilter;

const ITEMS: &[&str] = &[
    "apple", "apricot", "avocado", "banana", "blackberry", "blueberry", "cherry", "coconut",
    "date", "dragonfruit", "grape", "grapefruit", "guava",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = TextInput::new();
    let mut autocomplete = Autocomplete::new(
        AutocompleteConfig::new()
            .items(ITEMS.iter().copied())
            .max_suggestions(5),
    );
    autocomplete.attach(input.clone());

    autocomplete
        .autocompleted
        .connect(|text| println!(">> selected: {text}"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&autocomplete, &input);
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let (command, arg) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));

        match command {
            "type" => {
                for c in arg.chars() {
                    press(&mut autocomplete, &input, Key::Character(c));
                }
            }
            "key" => press(&mut autocomplete, &input, Key::from_name(arg)),
            "focus" => dispatch(&mut autocomplete, AutocompleteEvent::focus_in()),
            "blur" => dispatch(&mut autocomplete, AutocompleteEvent::focus_out()),
            "enter" => dispatch(&mut autocomplete, AutocompleteEvent::popup_enter()),
            "leave" => dispatch(&mut autocomplete, AutocompleteEvent::popup_leave()),
            "click" => match arg.parse() {
                Ok(row) => dispatch(&mut autocomplete, AutocompleteEvent::suggestion_click(row)),
                Err(_) => println!("click needs a row number"),
            },
            "wait" => match arg.parse() {
                Ok(ms) => {
                    thread::sleep(Duration::from_millis(ms));
                    let fired = autocomplete.process_timers();
                    if fired > 0 {
                        println!("({fired} timer(s) fired)");
                    }
                }
                Err(_) => println!("wait needs milliseconds"),
            },
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }

        render(&autocomplete, &input);
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}

/// Key-down, text edit, key-up, as a real text field would deliver them.
fn press(autocomplete: &mut Autocomplete, input: &TextInput, key: Key) {
    let mut down = AutocompleteEvent::key_press(key);
    if !autocomplete.handle_event(&mut down) {
        match key {
            Key::Character(c) => input.type_text(&c.to_string()),
            Key::Backspace => input.backspace(),
            _ => {}
        }
    }
    dispatch(autocomplete, AutocompleteEvent::key_release(key));
}

fn dispatch(autocomplete: &mut Autocomplete, mut event: AutocompleteEvent) {
    autocomplete.handle_event(&mut event);
}

fn render(autocomplete: &Autocomplete, input: &TextInput) {
    println!("[{}]", input.value());

    let view = autocomplete.view();
    if !view.is_visible() {
        return;
    }
    for row in view.rows() {
        let marker = if row.highlighted { '>' } else { ' ' };
        println!(" {marker} {}: {}", row.index, row.text);
    }
}
