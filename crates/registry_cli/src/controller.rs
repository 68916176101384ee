//! Interactive controller state machine.
//!
//! # Responsibility
//! - Drive the read-dispatch-act loop over the fixed main menu.
//! - Validate operator input before calling the registry service.
//! - Report lookup and storage failures and return to the menu.
//!
//! # Invariants
//! - At most one service call is in flight; the loop is fully sequential.
//! - `Exit` and closed input are the only ways out of the loop.
//! - No failure is dropped without a line of operator-visible output.

use crate::command::MenuCommand;
use crate::prompt::{
    parse_member_id, parse_menu_option, parse_required, OperatorPrompt, PromptError,
};
use crate::view;
use log::{debug, info, warn};
use registry_core::{Member, MemberRepository, RegistryService, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

pub type ControllerResult<T> = Result<T, ControllerError>;

#[derive(Debug)]
pub enum ControllerError {
    Prompt(PromptError),
    Storage(RepoError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prompt(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<PromptError> for ControllerError {
    fn from(value: PromptError) -> Self {
        Self::Prompt(value)
    }
}

impl From<io::Error> for ControllerError {
    fn from(value: io::Error) -> Self {
        Self::Prompt(PromptError::Io(value))
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

impl From<registry_core::MemberValidationError> for ControllerError {
    fn from(value: registry_core::MemberValidationError) -> Self {
        Self::Storage(RepoError::Validation(value))
    }
}

/// What the loop does after one dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Back to waiting for a menu option.
    MenuWait,
    Exit,
}

/// Menu-driven session over one registry service.
pub struct Controller<R: MemberRepository, P: OperatorPrompt> {
    service: RegistryService<R>,
    prompter: P,
}

impl<R: MemberRepository, P: OperatorPrompt> Controller<R, P> {
    pub fn new(service: RegistryService<R>, prompter: P) -> Self {
        Self { service, prompter }
    }

    /// Runs until the operator exits or input closes.
    ///
    /// # Errors
    /// - Terminal I/O failures. Lookup and storage failures are reported
    ///   to the operator and do not end the session.
    pub fn run(&mut self) -> ControllerResult<()> {
        info!("event=session_start module=controller status=ok");
        loop {
            match self.step() {
                Ok(Transition::MenuWait) => continue,
                Ok(Transition::Exit) => break,
                Err(ControllerError::Prompt(PromptError::Closed)) => {
                    warn!("event=session_end module=controller status=input_closed");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
        info!("event=session_end module=controller status=ok");
        Ok(())
    }

    /// Shows the menu, reads one valid option and dispatches it.
    pub fn step(&mut self) -> ControllerResult<Transition> {
        view::render_menu(self.prompter.output())?;
        let command = self.prompter.ask_until(
            "Select option: ",
            "That is not a valid option",
            parse_menu_option,
        )?;
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: MenuCommand) -> ControllerResult<Transition> {
        debug!(
            "event=menu_command module=controller key={}",
            command.key()
        );

        let outcome = match command {
            MenuCommand::List => self.list(false),
            MenuCommand::ListLong => self.list(true),
            MenuCommand::Register => self.register(),
            MenuCommand::Edit => self.edit(),
            MenuCommand::Select => self.select(),
            MenuCommand::Exit => {
                writeln!(self.prompter.output(), "{}", view::FAREWELL)?;
                return Ok(Transition::Exit);
            }
        };

        match outcome {
            Ok(()) => Ok(Transition::MenuWait),
            Err(ControllerError::Storage(err)) => {
                warn!(
                    "event=menu_command module=controller status=error key={} error={}",
                    command.key(),
                    err
                );
                self.report(&err)?;
                Ok(Transition::MenuWait)
            }
            Err(err) => Err(err),
        }
    }

    fn list(&mut self, long: bool) -> ControllerResult<()> {
        let members = self.service.list_members()?;
        let out = self.prompter.output();
        if long {
            view::render_full_list(out, &members)?;
        } else {
            view::render_compact_list(out, &members)?;
        }
        Ok(())
    }

    fn register(&mut self) -> ControllerResult<()> {
        let name = self
            .prompter
            .ask_until("Name: ", "Name cannot be blank", parse_required)?;
        let ssn = self.prompter.ask_until(
            &format!("Social security number for {name}: "),
            "SSN cannot be blank",
            parse_required,
        )?;

        let member = Member::unsaved(name, ssn)?;
        let id = self.service.add_member(&member)?;
        writeln!(self.prompter.output(), "Registered member {id}.")?;
        Ok(())
    }

    fn edit(&mut self) -> ControllerResult<()> {
        let mut member = self.select_member()?;

        // Blank answers keep the current value.
        let name = self
            .prompter
            .ask_line(&format!("New name [{}]: ", member.name()))?;
        let ssn = self.prompter.ask_line(&format!(
            "New social security number [{}]: ",
            member.social_security_number()
        ))?;

        if let Some(name) = parse_required(&name) {
            member.set_name(name)?;
        }
        if let Some(ssn) = parse_required(&ssn) {
            member.set_social_security_number(ssn)?;
        }

        self.service.change_member(&member)?;
        writeln!(self.prompter.output(), "Member updated.")?;
        Ok(())
    }

    fn select(&mut self) -> ControllerResult<()> {
        let member = self.select_member()?;
        view::render_member(self.prompter.output(), &member)?;
        Ok(())
    }

    fn select_member(&mut self) -> ControllerResult<Member> {
        let id = self.prompter.ask_until(
            "Member ID: ",
            "Member ID must be a positive number",
            parse_member_id,
        )?;
        Ok(self.service.get_member(id)?)
    }

    fn report(&mut self, err: &RepoError) -> ControllerResult<()> {
        let out = self.prompter.output();
        match err {
            RepoError::NotFound(id) => writeln!(out, "No member with ID {id}.")?,
            other => writeln!(out, "Something went wrong: {other}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Controller, Transition};
    use crate::command::MenuCommand;
    use registry_core::db::open_db_in_memory;
    use crate::prompt::Prompter;
    use registry_core::{
        Member, MemberRepository, RegistryService, RepoResult, SqliteMemberRepository,
    };
    use rusqlite::Connection;
    use std::io::Cursor;

    fn run_session(conn: &Connection, script: &str) -> String {
        let service = RegistryService::new(SqliteMemberRepository::try_new(conn).unwrap());
        let mut output = Vec::new();
        Controller::new(service, Prompter::new(Cursor::new(script.to_string()), &mut output))
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn stored(conn: &Connection) -> Vec<Member> {
        SqliteMemberRepository::try_new(conn).unwrap().list().unwrap()
    }

    #[test]
    fn register_retries_blank_fields_then_stores_member() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "r\n\n  \nJamie Lannister\n\n123456-1234\nq\n");

        assert_eq!(output.matches("Name cannot be blank").count(), 2);
        assert_eq!(output.matches("SSN cannot be blank").count(), 1);
        assert!(output.contains("Registered member 1."));
        assert!(output.ends_with("Bye bye!\n"));

        let members = stored(&conn);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name(), "Jamie Lannister");
        assert_eq!(members[0].social_security_number(), "123456-1234");
    }

    #[test]
    fn unknown_option_is_rejected_until_valid() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "x\nR\nq\n");

        assert_eq!(output.matches("That is not a valid option").count(), 2);
        assert!(output.contains("Bye bye!"));
    }

    #[test]
    fn exit_stops_reading_further_input() {
        let conn = open_db_in_memory().unwrap();
        run_session(&conn, "q\nr\nJamie Lannister\n123456-1234\n");
        assert!(stored(&conn).is_empty());
    }

    #[test]
    fn closed_input_ends_session_without_error() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "r\nJamie Lannister\n");
        assert!(!output.contains("Bye bye!"));
        assert!(stored(&conn).is_empty());
    }

    #[test]
    fn list_and_long_list_render_stored_members() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteMemberRepository::try_new(&conn).unwrap();
        repo.insert(&Member::unsaved("Cersei Lannister", "654321-0987").unwrap())
            .unwrap();

        let compact = run_session(&conn, "l\nq\n");
        assert!(compact.contains("Cersei Lannister"));
        assert!(!compact.contains("654321-0987"));

        let long = run_session(&conn, "L\nq\n");
        assert!(long.contains("654321-0987"));
    }

    #[test]
    fn select_missing_member_reports_and_returns_to_menu() {
        let conn = open_db_in_memory().unwrap();
        let output = run_session(&conn, "s\nabc\n9\nq\n");

        assert!(output.contains("Member ID must be a positive number"));
        assert!(output.contains("No member with ID 9."));
        assert!(output.contains("Bye bye!"));
    }

    #[test]
    fn select_shows_member() {
        let conn = open_db_in_memory().unwrap();
        let id = SqliteMemberRepository::try_new(&conn)
            .unwrap()
            .insert(&Member::unsaved("Cersei Lannister", "654321-0987").unwrap())
            .unwrap();

        let output = run_session(&conn, &format!("s\n{id}\nq\n"));
        assert!(output.contains(&format!("Member ID: {id}")));
        assert!(output.contains("654321-0987"));
    }

    #[test]
    fn edit_replaces_given_fields_and_keeps_blank_ones() {
        let conn = open_db_in_memory().unwrap();
        let id = SqliteMemberRepository::try_new(&conn)
            .unwrap()
            .insert(&Member::unsaved("Jamie Lannister", "123456-1234").unwrap())
            .unwrap();

        let output = run_session(&conn, &format!("e\n{id}\nSansa Stark\n\nq\n"));
        assert!(output.contains("Member updated."));

        let members = stored(&conn);
        assert_eq!(members[0].id(), Some(id));
        assert_eq!(members[0].name(), "Sansa Stark");
        assert_eq!(members[0].social_security_number(), "123456-1234");
    }

    #[test]
    fn edit_with_blank_answers_keeps_member_and_asks_each_field_once() {
        let conn = open_db_in_memory().unwrap();
        let id = SqliteMemberRepository::try_new(&conn)
            .unwrap()
            .insert(&Member::unsaved("Jamie Lannister", "123456-1234").unwrap())
            .unwrap();

        let output = run_session(&conn, &format!("e\n{id}\n\n   \nq\n"));
        assert_eq!(output.matches("New name [Jamie Lannister]: ").count(), 1);
        assert_eq!(
            output
                .matches("New social security number [123456-1234]: ")
                .count(),
            1
        );
        assert!(output.contains("Member updated."));

        let members = stored(&conn);
        assert_eq!(members[0].name(), "Jamie Lannister");
        assert_eq!(members[0].social_security_number(), "123456-1234");
    }

    #[test]
    fn dispatch_exit_returns_exit_transition() {
        let conn = open_db_in_memory().unwrap();
        let service = RegistryService::new(SqliteMemberRepository::try_new(&conn).unwrap());
        let mut controller =
            Controller::new(service, Prompter::new(Cursor::new(String::new()), Vec::new()));

        assert_eq!(
            controller.dispatch(MenuCommand::Exit).unwrap(),
            Transition::Exit
        );
        assert_eq!(
            controller.dispatch(MenuCommand::List).unwrap(),
            Transition::MenuWait
        );
    }

    struct FailingRepository;

    impl MemberRepository for FailingRepository {
        fn get_by_id(&self, id: i64) -> RepoResult<Member> {
            Err(registry_core::RepoError::NotFound(id))
        }
        fn insert(&self, _member: &Member) -> RepoResult<i64> {
            Err(registry_core::RepoError::InvalidData("disk full".to_string()))
        }
        fn update(&self, _member: &Member) -> RepoResult<()> {
            Ok(())
        }
        fn delete(&self, _id: i64) -> RepoResult<()> {
            Ok(())
        }
        fn list(&self) -> RepoResult<Vec<Member>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn register_failure_is_reported_and_session_continues() {
        let mut output = Vec::new();
        Controller::new(
            RegistryService::new(FailingRepository),
            Prompter::new(
                Cursor::new("r\nJamie Lannister\n123456-1234\nq\n"),
                &mut output,
            ),
        )
        .run()
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Something went wrong: invalid persisted member data: disk full"));
        assert!(output.ends_with("Bye bye!\n"));
    }
}
