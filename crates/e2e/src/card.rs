//! Card extraction from a board subtree

use futures::future::try_join_all;
use futures::try_join;

use crate::error::E2eResult;
use crate::selectors::SelectorTemplate;
use crate::session::Locator;

/// Matches the card title, relative to the card root.
pub const TITLE: SelectorTemplate = SelectorTemplate::css("h3");

/// Matches the card description.
pub const DESCRIPTION: SelectorTemplate = SelectorTemplate::css("p");

/// Tag pills carry no id, so match on their styling classes.
pub const TAGS: SelectorTemplate = SelectorTemplate::xpath(
    ".//div//span[contains(@class, 'px-2 py-1 rounded-full text-xs font-medium')]",
);

/// One card extracted from the board, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl Card {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tags in DOM order. Order is significant for assertions.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Load a [`Card`] from the subtree rooted at `base`.
///
/// A missing title, description, or tag reads as an empty string rather
/// than an error. The three extractions are independent of each other and
/// run concurrently.
pub async fn load_card(base: &dyn Locator) -> E2eResult<Card> {
    let title = base.locator(&TITLE.selector());
    let description = base.locator(&DESCRIPTION.selector());
    let tags = base.locator(&TAGS.selector());

    let (title, description, tags) = try_join!(
        text_or_empty(title.as_ref()),
        text_or_empty(description.as_ref()),
        load_tags(tags.as_ref()),
    )?;

    Ok(Card {
        title,
        description,
        tags,
    })
}

async fn text_or_empty(locator: &dyn Locator) -> E2eResult<String> {
    Ok(locator.text_content().await?.unwrap_or_default())
}

async fn load_tags(locator: &dyn Locator) -> E2eResult<Vec<String>> {
    let pills = locator.all().await?;
    try_join_all(pills.iter().map(|pill| text_or_empty(pill.as_ref()))).await
}
