use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use rolodex::api::PhoneBookApi;
use rolodex::commands::{CmdMessage, MessageLevel};
use rolodex::error::Result;
use rolodex::index::DisplayContact;
use rolodex::model::{Contact, Field};
use rolodex::store::fs::FileStore;
use std::io::{self, Write};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PhoneBookApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    let opened = ctx.api.open();
    print_messages(&opened.messages);

    loop {
        let action = match prompt("[menu] Enter action (add, list, search, count, exit):")? {
            Some(line) => line,
            None => return exit_program(&mut ctx),
        };

        let outcome = match action.as_str() {
            "add" => handle_add(&mut ctx),
            "list" => handle_list(&mut ctx),
            "search" => handle_search(&mut ctx),
            "count" => handle_count(&ctx),
            "exit" => return exit_program(&mut ctx),
            "" => Ok(()),
            _ => {
                println!("Invalid action. Please try again.");
                Ok(())
            }
        };

        // User-level failures (bad pattern, bad field) end the request,
        // not the session.
        if let Err(e) = outcome {
            println!("{}", e.to_string().red());
        }
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let store = FileStore::new(&cli.path);
    AppContext {
        api: PhoneBookApi::new(store),
    }
}

fn exit_program(ctx: &mut AppContext) -> Result<()> {
    // The final save must not be lost silently; a failure here is the
    // one fatal path in the program.
    let result = ctx.api.save()?;
    print_messages(&result.messages);
    println!("Exiting the program.");
    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    let name = prompt("Enter name:")?.unwrap_or_default();
    let address = prompt("Enter address:")?.unwrap_or_default();
    let number = prompt("Enter number:")?.unwrap_or_default();

    let result = ctx.api.add_contact(name, address, number)?;
    print_messages(&result.messages);
    if let Some(contact) = result.affected_contacts.first() {
        print_contact(contact);
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    println!("Contacts:");
    print_listing(&result.listed_contacts);

    let action = match prompt("[list] Enter action ([number], back):")? {
        Some(line) => line,
        None => return Ok(()),
    };
    if action == "back" {
        return Ok(());
    }
    select_from_listing(ctx, &result.listed_contacts, &action)
}

fn handle_search(ctx: &mut AppContext) -> Result<()> {
    loop {
        let query = match prompt("Enter search query:")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let result = ctx.api.search_contacts(&query)?;
        print_messages(&result.messages);
        print_listing(&result.listed_contacts);

        let action = match prompt("[search] Enter action ([number], back, again):")? {
            Some(line) => line,
            None => return Ok(()),
        };
        match action.as_str() {
            "back" => return Ok(()),
            "again" => continue,
            other => return select_from_listing(ctx, &result.listed_contacts, other),
        }
    }
}

fn handle_count(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.count_contacts()?;
    print_messages(&result.messages);
    Ok(())
}

/// Resolves a 1-based listing number and drops into the record view.
fn select_from_listing(
    ctx: &mut AppContext,
    listed: &[DisplayContact],
    input: &str,
) -> Result<()> {
    let index: usize = match input.parse() {
        Ok(n) => n,
        Err(_) => {
            println!("Invalid input. Please try again.");
            return Ok(());
        }
    };

    match listed.iter().find(|dc| dc.index == index) {
        Some(dc) => {
            print_contact(&dc.contact);
            record_actions(ctx, dc.position)
        }
        None => {
            println!("Invalid number. Please try again.");
            Ok(())
        }
    }
}

fn record_actions(ctx: &mut AppContext, position: usize) -> Result<()> {
    loop {
        let action = match prompt("[record] Enter action (edit, delete, menu):")? {
            Some(line) => line,
            None => return Ok(()),
        };

        match action.as_str() {
            "edit" => {
                if let Err(e) = edit_record(ctx, position) {
                    println!("{}", e.to_string().red());
                }
            }
            "delete" => {
                let result = ctx.api.delete_contact(position)?;
                print_messages(&result.messages);
                // The record is gone; its view goes with it.
                return Ok(());
            }
            "menu" => return Ok(()),
            _ => println!("Invalid action. Please try again."),
        }
    }
}

fn edit_record(ctx: &mut AppContext, position: usize) -> Result<()> {
    let fields = ctx
        .api
        .fields()
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let field = match prompt(&format!("Select a field ({}):", fields))? {
        Some(line) => line,
        None => return Ok(()),
    };
    let value = match prompt(&format!("Enter {}:", field))? {
        Some(line) => line,
        None => return Ok(()),
    };

    let result = ctx.api.edit_field(position, &field, value)?;
    print_messages(&result.messages);
    if let Some(contact) = result.affected_contacts.first() {
        print_contact(contact);
    }
    Ok(())
}

/// Prints `text` and reads one line. `None` means stdin hit EOF.
fn prompt(text: &str) -> Result<Option<String>> {
    println!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_listing(listed: &[DisplayContact]) {
    for dc in listed {
        println!("{}. {}", dc.index, dc.contact.name);
    }
}

fn print_contact(contact: &Contact) {
    println!("Name: {}", contact.name.bold());
    println!("Address: {}", contact.address);
    println!("Number: {}", contact.number);
    println!("Time created: {}", format_time(contact.created_at));
    println!("Time last edit: {}", format_time(contact.updated_at));
}

/// Minute precision is all any display surface shows.
fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M").to_string()
}
