//! Text rendering for menus and member data.

use crate::command::MenuCommand;
use registry_core::Member;
use std::io::{self, Write};

pub const MENU_TITLE: &str = "-----------\n Main menu \n-----------";
pub const FAREWELL: &str = "Bye bye!";

pub fn render_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    for command in MenuCommand::all() {
        writeln!(out, "{} : {}", command.key(), command.description())?;
    }
    Ok(())
}

/// One line per member: id and name.
pub fn render_compact_list(out: &mut impl Write, members: &[Member]) -> io::Result<()> {
    if members.is_empty() {
        return writeln!(out, "No members registered.");
    }
    for member in members {
        writeln!(out, "{:>5}  {}", display_id(member), member.name())?;
    }
    Ok(())
}

/// One line per member: id, name and social security number.
pub fn render_full_list(out: &mut impl Write, members: &[Member]) -> io::Result<()> {
    if members.is_empty() {
        return writeln!(out, "No members registered.");
    }
    writeln!(out, "{:>5}  {:<30}  {}", "ID", "Name", "SSN")?;
    for member in members {
        writeln!(
            out,
            "{:>5}  {:<30}  {}",
            display_id(member),
            member.name(),
            member.social_security_number()
        )?;
    }
    Ok(())
}

pub fn render_member(out: &mut impl Write, member: &Member) -> io::Result<()> {
    writeln!(out, "Member ID: {}", display_id(member))?;
    writeln!(out, "Name:      {}", member.name())?;
    writeln!(out, "SSN:       {}", member.social_security_number())
}

fn display_id(member: &Member) -> String {
    member
        .id()
        .map_or_else(|| "-".to_string(), |id| id.to_string())
}
