pub mod context;
pub mod commands;

use tracing::{debug, info};

use crate::config::Config;
use context::CLIContext;

const EXIT_WORDS: [&str; 3] = ["close", "exit", "bye"];

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(s) | Reply::Exit(s) => s,
        }
    }
}

/// Run the interactive REPL.
pub fn run(config: Config) {
    println!("Welcome to the assistant bot!");
    print_help();

    let mut ctx = CLIContext::new(config);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("Enter a command: ") {
            Some(s) => s,
            None => break,
        };

        match handle_line(ctx, &input) {
            None => continue,
            Some(Reply::Continue(text)) => println!("{}", text),
            Some(Reply::Exit(text)) => {
                println!("{}", text);
                break;
            }
        }
    }
}

/// Handle one input line. Blank lines yield `None`.
///
/// Every error raised by the core is turned into its message here, so a bad
/// command never ends the session.
pub fn handle_line(ctx: &mut CLIContext, input: &str) -> Option<Reply> {
    let (action, args) = parse_command(input)?;
    debug!(%action, ?args, "dispatching");

    if EXIT_WORDS.contains(&action.as_str()) {
        return Some(Reply::Exit("Good bye!".into()));
    }

    let result = match action.as_str() {
        "hello" => Ok("How can I help you?".into()),
        "help" => Ok(help_text().into()),
        "add" => commands::add(ctx, &args),
        "change" => commands::change(ctx, &args),
        "phone" => commands::phone(ctx, &args),
        "all" => commands::all(ctx, &args),
        "add-birthday" => commands::add_birthday(ctx, &args),
        "show-birthday" => commands::show_birthday(ctx, &args),
        "birthdays" => commands::birthdays(ctx, &args),
        _ => Ok(format!(
            "Invalid command. Available commands are: hello, add, change, phone, all, \
             add-birthday, show-birthday, birthdays, help, {}.",
            EXIT_WORDS.join(", ")
        )),
    };

    let text = match result {
        Ok(text) => text,
        Err(e) => {
            info!(%action, kind = ?e.kind(), error = %e, "command failed");
            e.to_string()
        }
    };
    Some(Reply::Continue(text))
}

/// Split a line into a lowercased action and its whitespace-separated arguments.
pub fn parse_command(input: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = input.split_whitespace();
    let action = tokens.next()?.to_lowercase();
    Some((action, tokens.collect()))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> &'static str {
    r#"
Available commands:
  hello                                   Greeting
  add <name> <phone> [DD.MM.YYYY]         Add a contact, or another phone to an existing one
  change <name> <old phone> <new phone>   Replace a phone number
  change <name> <phone>                   Remove a phone number
  phone <name>                            Show a contact's phone numbers
  all                                     Show all contacts
  add-birthday <name> <DD.MM.YYYY>        Set a contact's birthday
  show-birthday <name>                    Show a contact's birthday
  birthdays                               Upcoming birthdays (weekends move to Monday)
  help                                    Show this help
  close / exit / bye                      Exit

Phone numbers are exactly 10 digits. Names are case-sensitive."#
}
