use std::rc::Rc;

use yew::functional::Reducible;

use crate::api::EntryQuery;
use crate::error::ApiError;
use crate::types::{ProjectEntry, UserIdentity};

pub const STATUS_NAME_REQUIRED: &str = "Please enter a project name!";
pub const STATUS_SIGN_IN: &str = "Sign in to see your saved projects.";

/// Where the listed entries come from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntrySource {
    /// Entries of the project the user types in, fetched on demand.
    ByName,
    /// Every entry of the signed-in user, fetched whenever the identity changes.
    ByUser,
}

impl EntrySource {
    /// Builds the query to run, or the status explaining why none can run.
    pub fn query(
        &self,
        project_name: &str,
        identity: Option<&UserIdentity>,
    ) -> Result<EntryQuery, &'static str> {
        match self {
            EntrySource::ByName => {
                let name = project_name.trim();
                if name.is_empty() {
                    return Err(STATUS_NAME_REQUIRED);
                }
                Ok(EntryQuery::ProjectName(name.to_string()))
            }
            EntrySource::ByUser => identity
                .map(|user| EntryQuery::UserEmail(user.email.clone()))
                .ok_or(STATUS_SIGN_IN),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntrySource::ByName => "🔍 Search Project Entries",
            EntrySource::ByUser => "📁 My Projects",
        }
    }
}

pub fn fetching_status(query: &EntryQuery) -> &'static str {
    match query {
        EntryQuery::ProjectName(_) => "Fetching entries...",
        EntryQuery::UserEmail(_) => "Fetching your projects...",
    }
}

pub fn found_status(query: &EntryQuery, count: usize) -> String {
    match query {
        EntryQuery::ProjectName(name) => {
            format!("Found {} entries for project: \"{}\"", count, name)
        }
        EntryQuery::UserEmail(email) => format!("Found {} projects for {}", count, email),
    }
}

pub fn failure_status(query: &EntryQuery, error: &ApiError) -> String {
    if let Some(message) = error.service_message() {
        return message.to_string();
    }
    let text = match (query, error) {
        (EntryQuery::ProjectName(_), ApiError::Service { .. }) => "Failed to fetch entries.",
        (EntryQuery::UserEmail(_), ApiError::Service { .. }) => "Failed to fetch projects.",
        (EntryQuery::ProjectName(_), _) => "An error occurred while fetching entries.",
        (EntryQuery::UserEmail(_), _) => "An error occurred while fetching projects.",
    };
    text.to_string()
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct EntriesState {
    pub project_name: String,
    pub entries: Vec<ProjectEntry>,
    pub status: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum EntriesAction {
    EditName(String),
    /// No request was sent; the status says why. Listed entries stay.
    Skipped(&'static str),
    Started(EntryQuery),
    Completed(EntryQuery, Result<Vec<ProjectEntry>, ApiError>),
}

impl EntriesState {
    pub fn apply(&mut self, action: EntriesAction) {
        match action {
            EntriesAction::EditName(name) => self.project_name = name,
            EntriesAction::Skipped(status) => self.status = status.to_string(),
            EntriesAction::Started(query) => self.status = fetching_status(&query).to_string(),
            EntriesAction::Completed(query, Ok(entries)) => {
                self.status = found_status(&query, entries.len());
                self.entries = entries;
            }
            EntriesAction::Completed(query, Err(error)) => {
                self.entries.clear();
                self.status = failure_status(&query, &error);
            }
        }
    }
}

impl Reducible for EntriesState {
    type Action = EntriesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
