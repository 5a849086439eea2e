//! The automation seam: opaque session and locator handles
//!
//! Page objects never talk to a WebDriver client directly. They go through
//! the [`Session`] and [`Locator`] traits, so the same suite runs against a
//! live browser or the in-memory double the integration tests use.

use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::debug;

use crate::error::{E2eError, E2eResult};
use crate::selectors::{Selector, SelectorKind};

/// A live page or browser session.
#[async_trait]
pub trait Session: Send + Sync {
    /// Navigate the browser to the given URL.
    async fn goto(&self, url: &str) -> E2eResult<()>;

    /// Build a lazy locator rooted at the document.
    fn locator(&self, selector: &Selector) -> Box<dyn Locator>;
}

/// A lazy reference to an element (or set of elements), resolved per action.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Build a locator scoped to this one. [`Selector::parent`] ascends.
    fn locator(&self, selector: &Selector) -> Box<dyn Locator>;

    /// Text content of the first match, or `None` when nothing matches.
    async fn text_content(&self) -> E2eResult<Option<String>>;

    /// Clear the first matching input and type the value into it.
    async fn fill(&self, value: &str) -> E2eResult<()>;

    /// Click the first match.
    async fn click(&self) -> E2eResult<()>;

    /// Every match of the final selector step, in DOM order.
    async fn all(&self) -> E2eResult<Vec<Box<dyn Locator>>>;

    /// Whether at least one element matches.
    async fn is_present(&self) -> E2eResult<bool>;
}

/// WebDriver-backed [`Session`] over a fantoccini client.
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Connect to a WebDriver endpoint with default capabilities.
    pub async fn connect(webdriver_url: &str) -> E2eResult<Self> {
        let client = ClientBuilder::native().connect(webdriver_url).await?;
        Ok(Self { client })
    }

    /// Connect a headless Chrome session.
    pub async fn connect_headless(webdriver_url: &str) -> E2eResult<Self> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({ "args": ["--headless", "--disable-gpu"] }),
        );
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;
        Ok(Self { client })
    }

    /// End the WebDriver session.
    pub async fn close(self) -> E2eResult<()> {
        self.client.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Session for WebDriverSession {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        debug!(url, "navigating");
        self.client.goto(url).await?;
        Ok(())
    }

    fn locator(&self, selector: &Selector) -> Box<dyn Locator> {
        Box::new(WebDriverLocator {
            root: Root::Document(self.client.clone()),
            path: vec![selector.clone()],
        })
    }
}

#[derive(Clone)]
enum Root {
    Document(Client),
    Element(Element),
}

/// Chain of selector steps resolved against the driver on each action.
#[derive(Clone)]
struct WebDriverLocator {
    root: Root,
    path: Vec<Selector>,
}

fn to_locator(selector: &Selector) -> fantoccini::Locator<'_> {
    match selector.kind() {
        SelectorKind::Css => fantoccini::Locator::Css(selector.raw()),
        SelectorKind::XPath => fantoccini::Locator::XPath(selector.raw()),
    }
}

fn map_find_err(selector: &Selector, err: fantoccini::error::CmdError) -> E2eError {
    match err {
        fantoccini::error::CmdError::NoSuchElement(_) => {
            E2eError::LocatorNotFound(selector.raw().to_string())
        }
        other => E2eError::WebDriver(other),
    }
}

impl WebDriverLocator {
    /// Resolve every step of the chain, yielding the first match.
    async fn resolve(&self) -> E2eResult<Element> {
        let mut steps = self.path.iter();
        let mut current = match &self.root {
            Root::Element(element) => element.clone(),
            Root::Document(client) => {
                // Document-rooted locators always carry at least one step.
                let first = steps
                    .next()
                    .ok_or_else(|| E2eError::LocatorNotFound("<empty chain>".to_string()))?;
                client
                    .find(to_locator(first))
                    .await
                    .map_err(|e| map_find_err(first, e))?
            }
        };
        for selector in steps {
            current = current
                .find(to_locator(selector))
                .await
                .map_err(|e| map_find_err(selector, e))?;
        }
        Ok(current)
    }
}

#[async_trait]
impl Locator for WebDriverLocator {
    fn locator(&self, selector: &Selector) -> Box<dyn Locator> {
        let mut path = self.path.clone();
        path.push(selector.clone());
        Box::new(Self {
            root: self.root.clone(),
            path,
        })
    }

    async fn text_content(&self) -> E2eResult<Option<String>> {
        match self.resolve().await {
            Ok(element) => Ok(Some(element.text().await?)),
            Err(E2eError::LocatorNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fill(&self, value: &str) -> E2eResult<()> {
        let element = self.resolve().await?;
        element.clear().await?;
        element.send_keys(value).await?;
        Ok(())
    }

    async fn click(&self) -> E2eResult<()> {
        let element = self.resolve().await?;
        element.click().await?;
        Ok(())
    }

    async fn all(&self) -> E2eResult<Vec<Box<dyn Locator>>> {
        let Some((last, prefix)) = self.path.split_last() else {
            // Already resolved to a single element.
            return Ok(vec![Box::new(self.clone()) as Box<dyn Locator>]);
        };

        let elements = if prefix.is_empty() {
            match &self.root {
                Root::Document(client) => client.find_all(to_locator(last)).await?,
                Root::Element(element) => element.find_all(to_locator(last)).await?,
            }
        } else {
            let base = Self {
                root: self.root.clone(),
                path: prefix.to_vec(),
            };
            match base.resolve().await {
                Ok(element) => element.find_all(to_locator(last)).await?,
                // An unresolvable scope means no matches, not an error.
                Err(E2eError::LocatorNotFound(_)) => return Ok(Vec::new()),
                Err(e) => return Err(e),
            }
        };

        Ok(elements
            .into_iter()
            .map(|element| {
                Box::new(Self {
                    root: Root::Element(element),
                    path: Vec::new(),
                }) as Box<dyn Locator>
            })
            .collect())
    }

    async fn is_present(&self) -> E2eResult<bool> {
        match self.resolve().await {
            Ok(_) => Ok(true),
            Err(E2eError::LocatorNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
