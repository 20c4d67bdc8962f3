//! Person store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the store operations the scheduling core consumes: person
//!   fetch/upsert, assignment and free-time registration, cohort lookup.
//! - Maintain the assignment→members index alongside per-person lists.
//!
//! # Invariants
//! - `add_assignment` and `add_free_time_block` are idempotent per key, so
//!   concurrent writers merging into the same person lose no updates.
//! - A stored record with unparsable or inverted timestamps is skipped
//!   with a warning, never fatal to the read.
//! - Missing cohort identities resolve to an empty member set, not an
//!   error.

use crate::db::DbError;
use crate::model::assignment::{assignment_identity, Assignment};
use crate::model::person::Person;
use crate::model::time_block::{parse_instant, Instant, TimeBlock};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error taxonomy for person and cohort records.
#[derive(Debug)]
pub enum RepoError {
    /// The operation's contract required a person that does not exist.
    NotFound(String),
    /// A persisted record is unusable and cannot be skipped.
    InvalidData(String),
    /// The backing store could not be reached or read.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(email) => write!(f, "person not found: {email}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
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

/// Store contract consumed by the scheduling services.
pub trait PersonRepository {
    /// Fetches one person with assignments and free time, or `None`.
    fn get_person(&self, email: &str) -> RepoResult<Option<Person>>;
    /// Creates the person or merges name/assignments/free time into the
    /// existing record.
    fn upsert_person(&self, person: &Person) -> RepoResult<()>;
    /// Registers an assignment for the person and adds them to the
    /// assignment's cohort index entry.
    fn add_assignment(
        &self,
        email: &str,
        title: &str,
        due: &Instant,
        description: Option<&str>,
    ) -> RepoResult<()>;
    /// Adds one free-time block to the person's stored list.
    fn add_free_time_block(&self, email: &str, block: &TimeBlock) -> RepoResult<()>;
    /// Returns every member of the cohort identity; empty when unknown.
    fn get_cohort_members(&self, identity: &str) -> RepoResult<HashSet<String>>;
}

/// SQLite-backed person store.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn load_assignments(&self, email: &str) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, due, description
             FROM user_assignments
             WHERE email = ?1
             ORDER BY due ASC, title ASC;",
        )?;

        let mut rows = stmt.query(params![email])?;
        let mut assignments = Vec::new();

        while let Some(row) = rows.next()? {
            let title: String = row.get("title")?;
            let due_text: String = row.get("due")?;
            let description: Option<String> = row.get("description")?;

            let due = match parse_instant(&due_text) {
                Ok(due) => due,
                Err(err) => {
                    warn!(
                        "event=record_skipped module=repo reason=malformed_due email={email} error={err}"
                    );
                    continue;
                }
            };

            assignments.push(Assignment {
                title,
                due,
                description,
            });
        }

        Ok(assignments)
    }

    fn load_free_time(&self, email: &str) -> RepoResult<Vec<TimeBlock>> {
        let mut stmt = self.conn.prepare(
            "SELECT block_start, block_end
             FROM user_free_time
             WHERE email = ?1
             ORDER BY block_start ASC, block_end ASC;",
        )?;

        let mut rows = stmt.query(params![email])?;
        let mut blocks = Vec::new();

        while let Some(row) = rows.next()? {
            let start: String = row.get("block_start")?;
            let end: String = row.get("block_end")?;

            match TimeBlock::parse(&start, &end) {
                Ok(block) => blocks.push(block),
                Err(err) => {
                    warn!(
                        "event=record_skipped module=repo reason=malformed_block email={email} error={err}"
                    );
                }
            }
        }

        Ok(blocks)
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn get_person(&self, email: &str) -> RepoResult<Option<Person>> {
        let name: Option<String> = self
            .conn
            .query_row(
                "SELECT name FROM users WHERE email = ?1;",
                params![email],
                |row| row.get(0),
            )
            .optional()?;

        let Some(name) = name else {
            return Ok(None);
        };

        Ok(Some(Person {
            name,
            email: email.to_string(),
            assignments: self.load_assignments(email)?,
            free_time: self.load_free_time(email)?,
        }))
    }

    fn upsert_person(&self, person: &Person) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO users (email, name) VALUES (?1, ?2)
             ON CONFLICT(email) DO UPDATE SET name = excluded.name;",
            params![person.email, person.name],
        )?;

        for assignment in &person.assignments {
            self.add_assignment(
                &person.email,
                &assignment.title,
                &assignment.due,
                assignment.description.as_deref(),
            )?;
        }

        for block in &person.free_time {
            self.add_free_time_block(&person.email, block)?;
        }

        Ok(())
    }

    fn add_assignment(
        &self,
        email: &str,
        title: &str,
        due: &Instant,
        description: Option<&str>,
    ) -> RepoResult<()> {
        let due_text = due.to_rfc3339();
        self.conn.execute(
            "INSERT OR IGNORE INTO user_assignments (email, title, due, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![email, title, due_text, description],
        )?;

        let identity = assignment_identity(title, due);
        self.conn.execute(
            "INSERT OR IGNORE INTO assignment_members (assignment_id, email, title, due)
             VALUES (?1, ?2, ?3, ?4);",
            params![identity, email, title, due_text],
        )?;

        Ok(())
    }

    fn add_free_time_block(&self, email: &str, block: &TimeBlock) -> RepoResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO user_free_time (email, block_start, block_end)
             VALUES (?1, ?2, ?3);",
            params![email, block.start.to_rfc3339(), block.end.to_rfc3339()],
        )?;
        Ok(())
    }

    fn get_cohort_members(&self, identity: &str) -> RepoResult<HashSet<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT email FROM assignment_members WHERE assignment_id = ?1;",
        )?;

        let mut rows = stmt.query(params![identity])?;
        let mut members = HashSet::new();
        while let Some(row) = rows.next()? {
            members.insert(row.get::<_, String>("email")?);
        }

        Ok(members)
    }
}
