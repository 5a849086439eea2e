//! Page object for the projects board, plus the project/column vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{load_card, Card};
use crate::error::{E2eError, E2eResult};
use crate::selectors::{Selector, SelectorTemplate};
use crate::session::Session;

/// The project tabs the board exposes.
///
/// Fixture records name these by their serialized form, e.g.
/// `WEB_APPLICATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Project {
    WebApplication,
    MobileApplication,
    MarketingCampaign,
}

impl Project {
    /// The literal tab text rendered in the UI.
    ///
    /// Must stay in sync with the application copy; drift shows up as
    /// locator-not-found at runtime, not as a typed error.
    pub fn display_name(self) -> &'static str {
        match self {
            Project::WebApplication => "Web Application",
            Project::MobileApplication => "Mobile Application",
            Project::MarketingCampaign => "Marketing Campaign",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Board columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Column {
    ToDo,
    InProgress,
    Review,
    Done,
}

impl Column {
    /// The literal column-header text rendered in the UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::Review => "Review",
            Column::Done => "Done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub const BOARD_TITLE: SelectorTemplate =
    SelectorTemplate::xpath("//h1[contains(., 'Projects')]");
pub const PROJECT_TAB: SelectorTemplate =
    SelectorTemplate::xpath("//button/h2[contains(., '{}')]");
pub const PROJECT_TITLE: SelectorTemplate = SelectorTemplate::xpath("//h1[contains(., '{}')]");
pub const COLUMN_HEADER: SelectorTemplate = SelectorTemplate::xpath("//div/h2[contains(., '{}')]");

/// Cards carry no test id, so match the card container's layout classes.
pub const CARD_ITEM: SelectorTemplate = SelectorTemplate::xpath(
    ".//div[@class='bg-white p-4 rounded-lg shadow-sm border border-gray-200 hover:shadow-md transition-shadow']",
);

/// Page object for the project board.
pub struct ProjectsPage<'a> {
    session: &'a dyn Session,
}

impl<'a> ProjectsPage<'a> {
    pub fn new(session: &'a dyn Session) -> Self {
        Self { session }
    }

    /// Check that the board title is present.
    pub async fn validate(&self) -> E2eResult<()> {
        let selector = BOARD_TITLE.selector();
        if self.session.locator(&selector).is_present().await? {
            Ok(())
        } else {
            Err(E2eError::Validation {
                page: "projects",
                selector: selector.to_string(),
            })
        }
    }

    /// Click the tab for `project`.
    pub async fn select_project(&self, project: Project) -> E2eResult<()> {
        debug!(project = project.display_name(), "selecting project tab");
        self.session
            .locator(&PROJECT_TAB.resolve(project.display_name()))
            .click()
            .await
    }

    /// Whether the board currently shows `project`'s title.
    pub async fn is_project_selected(&self, project: Project) -> E2eResult<bool> {
        self.session
            .locator(&PROJECT_TITLE.resolve(project.display_name()))
            .is_present()
            .await
    }

    /// All cards under `column`'s header, in DOM order.
    ///
    /// The card pattern lives in the header's parent container, so this
    /// ascends one level before enumerating.
    pub async fn cards_in_column(&self, column: Column) -> E2eResult<Vec<Card>> {
        let header = self
            .session
            .locator(&COLUMN_HEADER.resolve(column.display_name()));
        let container = header.locator(&Selector::parent());

        let mut cards = Vec::new();
        for base in container.locator(&CARD_ITEM.selector()).all().await? {
            cards.push(load_card(base.as_ref()).await?);
        }

        debug!(
            column = column.display_name(),
            count = cards.len(),
            "loaded column cards"
        );
        Ok(cards)
    }
}
