use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, Result};

/// Where a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same-document fragment, stored without the leading '#'
    Anchor(String),
    /// Absolute http(s) URL opened outside the page
    External(Url),
    /// Bare "#": a link with nowhere to go yet
    Placeholder,
}

impl LinkTarget {
    pub fn parse(href: &str) -> Result<Self> {
        let href = href.trim();
        if href == "#" {
            return Ok(LinkTarget::Placeholder);
        }
        if let Some(id) = href.strip_prefix('#') {
            return Ok(LinkTarget::Anchor(id.to_string()));
        }

        let url = Url::parse(href).map_err(|e| Error::InvalidLink {
            href: href.to_string(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" | "mailto" => Ok(LinkTarget::External(url)),
            other => Err(Error::InvalidLink {
                href: href.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            LinkTarget::Anchor(id) => Some(id),
            _ => None,
        }
    }
}

/// A labelled link as it appears on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLink", into = "RawLink")]
pub struct Link {
    pub label: String,
    pub href: String,
    pub target: LinkTarget,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Result<Self> {
        let href = href.into();
        let target = LinkTarget::parse(&href)?;
        Ok(Self {
            label: label.into(),
            href,
            target,
        })
    }

    pub fn is_external(&self) -> bool {
        matches!(self.target, LinkTarget::External(_))
    }
}

#[derive(Serialize, Deserialize)]
struct RawLink {
    label: String,
    href: String,
}

impl TryFrom<RawLink> for Link {
    type Error = Error;

    fn try_from(raw: RawLink) -> Result<Self> {
        Link::new(raw.label, raw.href)
    }
}

impl From<Link> for RawLink {
    fn from(link: Link) -> Self {
        RawLink {
            label: link.label,
            href: link.href,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anchor() {
        assert_eq!(
            LinkTarget::parse("#skills").unwrap(),
            LinkTarget::Anchor("skills".to_string())
        );
        assert_eq!(LinkTarget::parse("#skills").unwrap().anchor(), Some("skills"));
    }

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(LinkTarget::parse("#").unwrap(), LinkTarget::Placeholder);
    }

    #[test]
    fn test_parse_external() {
        let target = LinkTarget::parse("https://github.com/Guciosk").unwrap();
        match target {
            LinkTarget::External(url) => assert_eq!(url.host_str(), Some("github.com")),
            other => panic!("expected external link, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_relative_and_unknown_scheme() {
        assert!(matches!(
            LinkTarget::parse("projects/lockdin"),
            Err(Error::InvalidLink { .. })
        ));
        assert!(matches!(
            LinkTarget::parse("javascript:alert(1)"),
            Err(Error::InvalidLink { .. })
        ));
    }

    #[test]
    fn test_link_json_shape() {
        let link = Link::new("About", "#about").unwrap();
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["label"], "About");
        assert_eq!(json["href"], "#about");

        let back: Link = serde_json::from_value(json).unwrap();
        assert_eq!(back, link);
    }
}
