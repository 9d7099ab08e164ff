use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::normalize_path;

/// A direct navigation link in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
}

impl NavLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Named children of a branch, in authoring order.
pub type NavEntries = IndexMap<String, NavNode>;

/// One node of the documentation page hierarchy.
///
/// Objects carrying a `title` are leaves; every other object is a branch
/// whose keys name its children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    Leaf(NavLink),
    Branch(NavEntries),
}

impl NavNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, NavNode::Leaf(_))
    }
}

/// The navigation tree produced by the content pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree {
    entries: NavEntries,
}

impl NavTree {
    pub fn new(entries: NavEntries) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entries(&self) -> &NavEntries {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        fn count(entries: &NavEntries) -> usize {
            entries
                .values()
                .map(|node| match node {
                    NavNode::Leaf(_) => 1,
                    NavNode::Branch(children) => count(children),
                })
                .sum()
        }
        count(&self.entries)
    }
}

/// Current location as seen by the sidebar.
///
/// `slug` is `None` while segment data is unavailable (e.g. the server
/// rendered pass before hydration); every route check then answers "no".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteState {
    pub as_path: String,
    pub slug: Option<Vec<String>>,
}

impl RouteState {
    pub fn new(as_path: impl Into<String>, slug: Vec<String>) -> Self {
        Self {
            as_path: as_path.into(),
            slug: Some(slug),
        }
    }

    /// A route whose path segments are not known yet.
    pub fn unhydrated(as_path: impl Into<String>) -> Self {
        Self {
            as_path: as_path.into(),
            slug: None,
        }
    }

    /// Returns `true` if `key` is one of the current path segments.
    pub fn in_focus(&self, key: &str) -> bool {
        self.slug
            .as_ref()
            .is_some_and(|slug| slug.iter().any(|segment| segment == key))
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.slug.as_ref()?.first().map(String::as_str)
    }

    /// Returns `true` if `url` points at the current page.
    pub fn is_active(&self, url: &str) -> bool {
        self.slug.is_some() && normalize_path(&self.as_path) == normalize_path(url)
    }
}

/// A technology an example is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technology {
    #[serde(rename = "javascript")]
    JavaScript,
    #[serde(rename = "react")]
    React,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "flutter")]
    Flutter,
    #[serde(rename = "react-native")]
    ReactNative,
    #[serde(rename = "server-side")]
    ServerSide,
}

impl Technology {
    pub const ALL: [Technology; 7] = [
        Technology::JavaScript,
        Technology::React,
        Technology::Android,
        Technology::Ios,
        Technology::Flutter,
        Technology::ReactNative,
        Technology::ServerSide,
    ];

    /// Stable identifier, used for keys and in content files.
    pub fn id(self) -> &'static str {
        match self {
            Technology::JavaScript => "javascript",
            Technology::React => "react",
            Technology::Android => "android",
            Technology::Ios => "ios",
            Technology::Flutter => "flutter",
            Technology::ReactNative => "react-native",
            Technology::ServerSide => "server-side",
        }
    }

    /// Human readable label shown next to a lone icon.
    pub fn name(self) -> &'static str {
        match self {
            Technology::JavaScript => "JavaScript",
            Technology::React => "React",
            Technology::Android => "Android",
            Technology::Ios => "iOS",
            Technology::Flutter => "Flutter",
            Technology::ReactNative => "React Native",
            Technology::ServerSide => "Server-side",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Technology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Technology::ALL
            .into_iter()
            .find(|technology| technology.id() == s)
            .ok_or_else(|| Error::UnknownTechnology(s.to_string()))
    }
}

/// Display data for one [`ExampleCard`](crate::components::card::ExampleCard).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExampleSummary {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ExampleSummary {
    /// Parses a JSON list of examples. Unknown technology identifiers are
    /// rejected here rather than at render time.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
