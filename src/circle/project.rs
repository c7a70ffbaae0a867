//! Project identifier parsing
//!
//! Supports the compact identifier formats accepted on the command line:
//! - `username/project` (VCS defaults to GitHub)
//! - `vcs/username/project` where `vcs` is `gh`, `github`, `bb`, or
//!   `bitbucket`
//!
//! Only the first two `/` characters are split points, so project names
//! containing further slashes are preserved in full.

use std::fmt;
use std::str::FromStr;

use crate::error::{OvertureError, Result};

/// Source-control hosting platform recognized by CircleCI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    Github,
    Bitbucket,
}

impl VcsKind {
    /// The identifier used in CircleCI API paths
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsKind::Github => "github",
            VcsKind::Bitbucket => "bitbucket",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved project identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId {
    pub vcs: VcsKind,
    pub username: String,
    pub project: String,
}

impl FromStr for ProjectId {
    type Err = OvertureError;

    /// Parse a `[vcs/]username/project` identifier.
    ///
    /// Two segments default the VCS to GitHub; three segments require a
    /// recognized VCS alias in the first position. Anything else fails with
    /// `InvalidProjectName` carrying the original input.
    fn from_str(name: &str) -> Result<Self> {
        let parts: Vec<&str> = name.splitn(3, '/').collect();

        match parts.as_slice() {
            [username, project] => Ok(ProjectId {
                vcs: VcsKind::Github,
                username: (*username).to_string(),
                project: (*project).to_string(),
            }),
            [vcs, username, project] => {
                let vcs = match *vcs {
                    "gh" | "github" => VcsKind::Github,
                    "bb" | "bitbucket" => VcsKind::Bitbucket,
                    _ => return Err(OvertureError::InvalidProjectName(name.to_string())),
                };

                Ok(ProjectId {
                    vcs,
                    username: (*username).to_string(),
                    project: (*project).to_string(),
                })
            }
            _ => Err(OvertureError::InvalidProjectName(name.to_string())),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.vcs, self.username, self.project)
    }
}
