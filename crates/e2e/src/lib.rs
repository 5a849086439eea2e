//! Project-board E2E test suite
//!
//! Fixture-driven end-to-end tests for the project board UI: page objects
//! for the login and board views, a card extractor, and a scenario runner
//! that asserts expected card titles and tags per project/column.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ScenarioRunner                          │
//! │   for each fixture record {column, project_type, text,      │
//! │                            tags}:                           │
//! │     goto(base_url)                                          │
//! │     LoginPage::validate + login                             │
//! │     ProjectsPage::validate + select_project                 │
//! │     ProjectsPage::is_project_selected (real presence check) │
//! │     ProjectsPage::cards_in_column -> Vec<Card>              │
//! │     find card by title, compare tag sequence                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Session / Locator traits (session.rs)                      │
//! │    └── WebDriverSession over fantoccini                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Selector templates: `{}` substituted with the enum's       │
//! │  display string (selectors.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The traits keep the page objects driver-agnostic; the integration tests
//! run the whole suite against an in-memory mock session.

pub mod board;
pub mod card;
pub mod error;
pub mod fixtures;
pub mod login;
pub mod runner;
pub mod selectors;
pub mod session;

pub use board::{Column, Project, ProjectsPage};
pub use card::{load_card, Card};
pub use error::{E2eError, E2eResult};
pub use fixtures::{Credentials, ScenarioFixture};
pub use login::LoginPage;
pub use runner::{ScenarioResult, ScenarioRunner, SuiteResult};
pub use session::{Locator, Session, WebDriverSession};
