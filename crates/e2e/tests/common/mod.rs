//! In-memory Session/Locator doubles backed by a selector-keyed tree.
//!
//! Elements are addressed by the raw selector strings the page objects
//! produce, so the mock exercises the same `{}` templating the live driver
//! sees. The builders below key nodes with the selector templates exported
//! by the library, so a selector change in `src/` cannot silently drift
//! away from the mock. Parent traversal (`..`) is modeled as a regular
//! edge inserted by the builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use board_e2e::board::{BOARD_TITLE, CARD_ITEM, COLUMN_HEADER, PROJECT_TAB, PROJECT_TITLE};
use board_e2e::card::{DESCRIPTION, TAGS, TITLE};
use board_e2e::error::{E2eError, E2eResult};
use board_e2e::login::{PASSWORD_FIELD, SUBMIT_BUTTON, USERNAME_FIELD};
use board_e2e::selectors::Selector;
use board_e2e::session::{Locator, Session};

/// One mock DOM node. Children are keyed by the raw selector string that
/// reaches them; duplicate keys model multiple matches.
#[derive(Debug, Default, Clone)]
pub struct MockNode {
    pub text: Option<String>,
    pub children: Vec<(String, MockNode)>,
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, key: &str, node: MockNode) -> Self {
        self.children.push((key.to_string(), node));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    Goto(String),
    Fill { path: Vec<String>, value: String },
    Click(Vec<String>),
}

/// Mock [`Session`] recording navigation, fills, and clicks.
pub struct MockSession {
    root: Arc<MockNode>,
    events: Arc<Mutex<Vec<MockEvent>>>,
}

impl MockSession {
    pub fn new(root: MockNode) -> Self {
        Self {
            root: Arc::new(root),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<MockEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Session for MockSession {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        self.events
            .lock()
            .unwrap()
            .push(MockEvent::Goto(url.to_string()));
        Ok(())
    }

    fn locator(&self, selector: &Selector) -> Box<dyn Locator> {
        Box::new(MockLocator {
            root: self.root.clone(),
            path: vec![selector.raw().to_string()],
            events: self.events.clone(),
        })
    }
}

struct MockLocator {
    root: Arc<MockNode>,
    path: Vec<String>,
    events: Arc<Mutex<Vec<MockEvent>>>,
}

fn resolve<'a>(root: &'a MockNode, path: &[String]) -> Option<&'a MockNode> {
    let mut current = root;
    for key in path {
        current = current
            .children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)?;
    }
    Some(current)
}

fn resolve_all<'a>(root: &'a MockNode, path: &[String]) -> Vec<&'a MockNode> {
    let Some((last, prefix)) = path.split_last() else {
        return vec![root];
    };
    match resolve(root, prefix) {
        Some(container) => container
            .children
            .iter()
            .filter(|(k, _)| k == last)
            .map(|(_, node)| node)
            .collect(),
        None => Vec::new(),
    }
}

#[async_trait]
impl Locator for MockLocator {
    fn locator(&self, selector: &Selector) -> Box<dyn Locator> {
        let mut path = self.path.clone();
        path.push(selector.raw().to_string());
        Box::new(MockLocator {
            root: self.root.clone(),
            path,
            events: self.events.clone(),
        })
    }

    async fn text_content(&self) -> E2eResult<Option<String>> {
        Ok(resolve(&self.root, &self.path).and_then(|node| node.text.clone()))
    }

    async fn fill(&self, value: &str) -> E2eResult<()> {
        if resolve(&self.root, &self.path).is_none() {
            return Err(E2eError::LocatorNotFound(self.path.join(" >> ")));
        }
        self.events.lock().unwrap().push(MockEvent::Fill {
            path: self.path.clone(),
            value: value.to_string(),
        });
        Ok(())
    }

    async fn click(&self) -> E2eResult<()> {
        if resolve(&self.root, &self.path).is_none() {
            return Err(E2eError::LocatorNotFound(self.path.join(" >> ")));
        }
        self.events
            .lock()
            .unwrap()
            .push(MockEvent::Click(self.path.clone()));
        Ok(())
    }

    async fn all(&self) -> E2eResult<Vec<Box<dyn Locator>>> {
        Ok(resolve_all(&self.root, &self.path)
            .into_iter()
            .map(|node| {
                Box::new(MockLocator {
                    root: Arc::new(node.clone()),
                    path: Vec::new(),
                    events: self.events.clone(),
                }) as Box<dyn Locator>
            })
            .collect())
    }

    async fn is_present(&self) -> E2eResult<bool> {
        Ok(resolve(&self.root, &self.path).is_some())
    }
}

/// A card node with the structure the extractor expects.
pub fn card(title: &str, description: &str, tags: &[&str]) -> MockNode {
    let mut node = MockNode::new()
        .child(TITLE.selector().raw(), MockNode::with_text(title))
        .child(DESCRIPTION.selector().raw(), MockNode::with_text(description));
    for tag in tags {
        node = node.child(TAGS.selector().raw(), MockNode::with_text(tag));
    }
    node
}

/// Attach a column (header + parent container holding `cards`) to `root`.
pub fn with_column(root: MockNode, column_name: &str, cards: Vec<MockNode>) -> MockNode {
    let mut container = MockNode::new();
    for card in cards {
        container = container.child(CARD_ITEM.selector().raw(), card);
    }
    let header = MockNode::with_text(column_name).child("..", container);
    root.child(COLUMN_HEADER.resolve(column_name).raw(), header)
}

/// Attach the login form fields and submit button to `root`.
pub fn with_login_form(root: MockNode) -> MockNode {
    root.child(USERNAME_FIELD.selector().raw(), MockNode::new())
        .child(PASSWORD_FIELD.selector().raw(), MockNode::new())
        .child(SUBMIT_BUTTON.selector().raw(), MockNode::new())
}

/// Attach just the tab for `project`, without the selected-project title
/// heading the board shows after a successful switch.
pub fn with_project_tab(root: MockNode, project_name: &str) -> MockNode {
    root.child(
        PROJECT_TAB.resolve(project_name).raw(),
        MockNode::with_text(project_name),
    )
}

/// Attach the board chrome for `project`: board title, tab, and the
/// selected-project title heading.
pub fn with_board(root: MockNode, project_name: &str) -> MockNode {
    let root = root.child(
        BOARD_TITLE.selector().raw(),
        MockNode::with_text("Projects"),
    );
    with_project_tab(root, project_name).child(
        PROJECT_TITLE.resolve(project_name).raw(),
        MockNode::with_text(project_name),
    )
}
