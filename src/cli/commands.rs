use crate::cli::context::CLIContext;
use crate::error::{ContactsError, ContactsResult};
use crate::model::contact::format_date;
use crate::ops::contact_ops::{self, AddOutcome};
use crate::queries::contact_queries;

pub fn add(ctx: &mut CLIContext, args: &[&str]) -> ContactsResult<String> {
    let (name, phone, birthday) = match args {
        [name, phone] => (*name, *phone, None),
        [name, phone, birthday] => (*name, *phone, Some(*birthday)),
        _ => return Err(usage("add <name> <phone> [DD.MM.YYYY]")),
    };

    let reply = match contact_ops::add_contact(&mut ctx.directory, name, phone, birthday)? {
        AddOutcome::Added => "Contact added.",
        AddOutcome::Updated => "Contact updated.",
        AddOutcome::Duplicate => "Contact with this name and phone number already exists.",
    };
    Ok(reply.into())
}

/// Three arguments edit a phone, two remove one.
pub fn change(ctx: &mut CLIContext, args: &[&str]) -> ContactsResult<String> {
    match args {
        [name, old_phone, new_phone] => {
            contact_ops::change_phone(&mut ctx.directory, name, old_phone, new_phone)?;
            Ok("Phone number updated.".into())
        }
        [name, phone] => {
            contact_ops::remove_phone(&mut ctx.directory, name, phone)?;
            Ok("Phone number removed.".into())
        }
        _ => Err(usage("change <name> <old phone> <new phone> | change <name> <phone>")),
    }
}

pub fn phone(ctx: &CLIContext, args: &[&str]) -> ContactsResult<String> {
    let [name] = args else {
        return Err(usage("phone <name>"));
    };
    let phones = contact_queries::phones_of(&ctx.directory, name)?;
    let list: Vec<&str> = phones.iter().map(|p| p.as_str()).collect();
    Ok(format!("{}: {}", name, list.join(", ")))
}

pub fn all(ctx: &CLIContext, args: &[&str]) -> ContactsResult<String> {
    if !args.is_empty() {
        return Err(usage("all"));
    }
    if ctx.directory.is_empty() {
        return Ok("The address book is empty.".into());
    }
    let lines: Vec<String> = ctx.directory.all().iter().map(|c| c.to_string()).collect();
    Ok(lines.join("\n"))
}

pub fn add_birthday(ctx: &mut CLIContext, args: &[&str]) -> ContactsResult<String> {
    let [name, birthday] = args else {
        return Err(usage("add-birthday <name> <DD.MM.YYYY>"));
    };
    contact_ops::set_birthday(&mut ctx.directory, name, birthday)?;
    Ok("Birthday added.".into())
}

pub fn show_birthday(ctx: &CLIContext, args: &[&str]) -> ContactsResult<String> {
    let [name] = args else {
        return Err(usage("show-birthday <name>"));
    };
    let reply = match contact_queries::birthday_of(&ctx.directory, name)? {
        Some(date) => format!("{}: {}", name, format_date(date)),
        None => format!("{}: no birthday set", name),
    };
    Ok(reply)
}

pub fn birthdays(ctx: &CLIContext, args: &[&str]) -> ContactsResult<String> {
    if !args.is_empty() {
        return Err(usage("birthdays"));
    }
    let window = ctx.config.window_days;
    let upcoming = ctx.directory.upcoming_birthdays(ctx.today(), window);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", window));
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|u| {
            format!(
                "{}: congratulate on {} ({}), birthday {}, phones: {}",
                u.contact.name(),
                format_date(u.congratulation_date),
                u.congratulation_date.format("%A"),
                format_date(u.birthday),
                u.contact.phone_list(),
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn usage(usage: &'static str) -> ContactsError {
    ContactsError::ArgumentCount { usage }
}
