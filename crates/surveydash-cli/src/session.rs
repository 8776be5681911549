use std::io::{self, BufRead, Write};

use anyhow::Result;
use surveydash_core::{Dataset, SelectionEvent, SelectionState, Surface};
use surveydash_reports::{JsonFormatter, Reporter, StdOutFormatter};

use crate::OutputFormat;
use crate::commands::{Command, HELP_TEXT, parse_command};

/// Apply the given selections through the surface wiring and collect every
/// output once.
fn apply_selection(
    surface: &mut Surface<'_>,
    selection: SelectionState,
) -> Vec<(surveydash_core::OutputSlot, surveydash_core::OutputValue)> {
    let mut outputs = surface.apply(SelectionEvent::Contact(selection.contact));
    outputs.extend(surface.apply(SelectionEvent::Analysis(selection.analysis)));
    outputs.extend(surface.apply(SelectionEvent::Verification(selection.verification)));
    outputs
}

/// One-shot mode: render the outputs for a fixed selection and exit.
pub fn run_once(dataset: &Dataset, selection: SelectionState, format: &OutputFormat) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let mut surface = Surface::new(dataset);
    match format {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version.to_string());
            formatter.on_start();
            formatter.on_dataset(dataset);
            for (slot, value) in apply_selection(&mut surface, selection) {
                formatter.on_output(slot, &value);
            }
            formatter.on_complete();
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version.to_string());
            formatter.on_dataset(dataset);
            for (slot, value) in apply_selection(&mut surface, selection) {
                formatter.on_output(slot, &value);
            }
            println!("{}", formatter.to_json()?);
        }
    }
    Ok(())
}

/// Interactive mode: a synchronous stdin loop where each command dispatches
/// one selection event and renders the outputs it changed.
pub fn run_interactive(dataset: &Dataset) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let mut formatter = StdOutFormatter::new(version.to_string());
    formatter.on_start();
    formatter.on_dataset(dataset);
    print_contacts(dataset);
    print_columns(dataset);
    println!("\n{}", HELP_TEXT);

    let mut surface = Surface::new(dataset);
    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Contact(value) => {
                render(&mut formatter, surface.apply(SelectionEvent::Contact(value)));
            }
            Command::Analysis(kind) => {
                render(&mut formatter, surface.apply(SelectionEvent::Analysis(kind)));
            }
            Command::Verify(column) => {
                render(
                    &mut formatter,
                    surface.apply(SelectionEvent::Verification(column)),
                );
            }
            Command::Contacts => print_contacts(dataset),
            Command::Columns => print_columns(dataset),
            Command::Show => render(&mut formatter, surface.refresh_all()),
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(command) => {
                println!("Unknown command: '{}' (try 'help')", command);
            }
        }
        prompt()?;
    }
    Ok(())
}

fn render(
    formatter: &mut StdOutFormatter,
    outputs: Vec<(surveydash_core::OutputSlot, surveydash_core::OutputValue)>,
) {
    for (slot, value) in outputs {
        formatter.on_output(slot, &value);
    }
}

fn print_contacts(dataset: &Dataset) {
    match dataset.contacts() {
        Ok(contacts) => {
            println!("\nContacts:");
            for contact in contacts {
                println!("  {} ({})", contact.mobile, contact.name);
            }
        }
        Err(err) => println!("  Error: {}", err),
    }
}

fn print_columns(dataset: &Dataset) {
    println!("\nStatus columns:");
    for column in dataset.status_columns() {
        println!("  {}", column);
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
