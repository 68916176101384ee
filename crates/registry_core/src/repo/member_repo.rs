//! Member repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Ensure the `Member` table exists before any statement runs.
//! - Translate member operations into single parameterized statements.
//! - Map rows back into validated `Member` values.
//!
//! # Invariants
//! - `MemberID` is assigned by SQLite `AUTOINCREMENT` and never reused.
//! - Insert ignores any caller-supplied id.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::member::{Member, MemberId, MemberValidationError};
use log::{debug, error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMBER_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS Member (
    MemberID INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    SocialSecurityNumber TEXT NOT NULL
);";

const MEMBER_SELECT_SQL: &str = "SELECT
    MemberID,
    Name,
    SocialSecurityNumber
FROM Member";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for member persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(MemberValidationError),
    /// The backend could not be reached or the schema could not be ensured.
    StorageUnavailable(DbError),
    Db(DbError),
    NotFound(MemberId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::StorageUnavailable(err) => write!(f, "member storage unavailable: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "member not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted member data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::StorageUnavailable(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<MemberValidationError> for RepoError {
    fn from(value: MemberValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for member CRUD operations.
pub trait MemberRepository {
    /// Loads one member by key, or `NotFound`.
    fn get_by_id(&self, id: MemberId) -> RepoResult<Member>;
    /// Stores name/ssn under a fresh key and returns that key.
    ///
    /// The id carried by `member` is ignored and left unchanged.
    fn insert(&self, member: &Member) -> RepoResult<MemberId>;
    /// Overwrites name/ssn of the row keyed by `member.id()`.
    ///
    /// Succeeds without changes when no row matches.
    fn update(&self, member: &Member) -> RepoResult<()>;
    /// Removes the row with key `id`; succeeds without changes when absent.
    fn delete(&self, id: MemberId) -> RepoResult<()>;
    /// Lists every member ordered by ascending key.
    fn list(&self) -> RepoResult<Vec<Member>>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    /// Constructs a repository and creates the `Member` table if absent.
    ///
    /// # Errors
    /// - `StorageUnavailable` when the schema statement fails.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_member_table(conn)?;
        Ok(Self { conn })
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn get_by_id(&self, id: MemberId) -> RepoResult<Member> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE MemberID = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_member_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn insert(&self, member: &Member) -> RepoResult<MemberId> {
        self.conn.execute(
            "INSERT INTO Member (Name, SocialSecurityNumber) VALUES (?1, ?2);",
            params![member.name(), member.social_security_number()],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=member_insert module=repo status=ok member_id={id}");
        Ok(id)
    }

    fn update(&self, member: &Member) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE Member
             SET
                Name = ?1,
                SocialSecurityNumber = ?2
             WHERE MemberID = ?3;",
            params![member.name(), member.social_security_number(), member.id()],
        )?;

        info!(
            "event=member_update module=repo status=ok member_id={} rows={changed}",
            display_id(member.id())
        );
        Ok(())
    }

    fn delete(&self, id: MemberId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM Member WHERE MemberID = ?1;", params![id])?;

        info!("event=member_delete module=repo status=ok member_id={id} rows={changed}");
        Ok(())
    }

    fn list(&self) -> RepoResult<Vec<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} ORDER BY MemberID ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();

        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        debug!(
            "event=member_list module=repo status=ok count={}",
            members.len()
        );
        Ok(members)
    }
}

fn ensure_member_table(conn: &Connection) -> RepoResult<()> {
    if let Err(err) = conn.execute_batch(MEMBER_TABLE_SQL) {
        error!("event=member_schema_ensure module=repo status=error error={err}");
        return Err(RepoError::StorageUnavailable(err.into()));
    }

    debug!("event=member_schema_ensure module=repo status=ok");
    Ok(())
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    let id: MemberId = row.get("MemberID")?;
    let name: String = row.get("Name")?;
    let social_security_number: String = row.get("SocialSecurityNumber")?;

    Member::new(Some(id), name, social_security_number).map_err(|err| {
        RepoError::InvalidData(format!("row MemberID={id} violates member rules: {err}"))
    })
}

fn display_id(id: Option<MemberId>) -> String {
    id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
