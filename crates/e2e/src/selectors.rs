//! Selector templates and the `{}` display-string substitution
//!
//! Selectors are the suite's only wire format: CSS or XPath strings, some
//! of which carry a `{}` placeholder that gets replaced with an enum's
//! display string before use.

use std::fmt;

/// How a selector string should be interpreted by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Css,
    XPath,
}

/// A resolved selector, ready to hand to a session or locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    kind: SelectorKind,
    raw: String,
}

impl Selector {
    pub fn css(raw: impl Into<String>) -> Self {
        Self {
            kind: SelectorKind::Css,
            raw: raw.into(),
        }
    }

    pub fn xpath(raw: impl Into<String>) -> Self {
        Self {
            kind: SelectorKind::XPath,
            raw: raw.into(),
        }
    }

    /// Ascend from the current element to its parent.
    pub fn parent() -> Self {
        Self::xpath("..")
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A selector with an optional `{}` placeholder for a display string.
///
/// Kept const so page objects can declare their selectors the way the UI
/// renders them, in one place at the top of the module.
#[derive(Debug, Clone, Copy)]
pub struct SelectorTemplate {
    kind: SelectorKind,
    template: &'static str,
}

impl SelectorTemplate {
    pub const fn css(template: &'static str) -> Self {
        Self {
            kind: SelectorKind::Css,
            template,
        }
    }

    pub const fn xpath(template: &'static str) -> Self {
        Self {
            kind: SelectorKind::XPath,
            template,
        }
    }

    /// Substitute the `{}` placeholder with a display string.
    pub fn resolve(&self, value: &str) -> Selector {
        Selector {
            kind: self.kind,
            raw: self.template.replace("{}", value),
        }
    }

    /// Use the template verbatim, for selectors without a placeholder.
    pub fn selector(&self) -> Selector {
        Selector {
            kind: self.kind,
            raw: self.template.to_string(),
        }
    }
}
