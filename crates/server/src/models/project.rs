//! Project domain types.

use impact_core::ProjectId;
use serde::{Deserialize, Serialize};

/// External links for a project. Both fields are optional; absent links are
/// omitted from responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

/// A portfolio project as served to the front end.
///
/// `order_index` is a stable sort key controlling display order (ascending).
/// It is not guaranteed unique or contiguous and is never reassigned
/// automatically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Category tag ("Tesis", "Producción", ...). Serialized as `type` for
    /// front-end compatibility.
    #[serde(rename = "type")]
    pub kind: String,
    pub summary: String,
    pub problem: String,
    pub solution: String,
    pub stack: Vec<String>,
    pub highlights: Vec<String>,
    pub challenges: Vec<String>,
    pub architecture_diagram: String,
    pub links: ProjectLinks,
    pub order_index: i64,
}

/// A project to insert. The store assigns the id.
///
/// Every field defaults to blank, mirroring the admin endpoint contract:
/// fields missing from the request body are persisted empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub architecture_diagram: String,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub order_index: i64,
}

impl NewProject {
    /// Attach an id assigned by the store.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            title: self.title,
            kind: self.kind,
            summary: self.summary,
            problem: self.problem,
            solution: self.solution,
            stack: self.stack,
            highlights: self.highlights,
            challenges: self.challenges,
            architecture_diagram: self.architecture_diagram,
            links: self.links,
            order_index: self.order_index,
        }
    }
}
