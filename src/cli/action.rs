//! Trigger action selection and dispatch
//!
//! Flags partition into two disjoint usage modes: triggering a fresh build
//! (any combination of branch/ref/tag, optionally with build parameters) and
//! retrying an existing build (a build number, optionally with SSH, never
//! combined with the fresh-build flags or parameters). Every flag
//! combination resolves to exactly one action or is rejected.

use crate::circle::{BuildParameters, BuildResponse, CircleClient, ProjectId};
use crate::error::{OvertureError, Result};

/// Raw trigger flag values, prior to action selection
#[derive(Debug, Clone, Default)]
pub struct TriggerInputs {
    pub branch: Option<String>,
    pub reference: Option<String>,
    pub tag: Option<String>,
    pub build: Option<String>,
    pub ssh: bool,
    pub params: BuildParameters,
}

/// One of the seven trigger variants, carrying the values that selected it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Build the HEAD of the default branch
    BuildDefault { params: BuildParameters },
    /// Build the HEAD of a branch
    BuildBranch {
        branch: String,
        params: BuildParameters,
    },
    /// Build a branch at a specific revision
    BuildBranchAtRef {
        branch: String,
        reference: String,
        params: BuildParameters,
    },
    /// Build a specific revision
    BuildRef {
        reference: String,
        params: BuildParameters,
    },
    /// Build a tag
    BuildTag {
        tag: String,
        params: BuildParameters,
    },
    /// Re-run a build by number
    Rebuild { build: String },
    /// Re-run a build by number with SSH enabled
    RebuildWithSSH { build: String },
}

impl Action {
    /// Resolve the flag combination to a single action.
    ///
    /// An empty string is treated the same as an absent flag. Build
    /// parameters are permitted alongside any fresh-build mode but never
    /// alongside `--build`/`--ssh`; every combination off the table fails
    /// with `InvalidFlagCombination`.
    pub fn select(inputs: TriggerInputs) -> Result<Action> {
        let TriggerInputs {
            branch,
            reference,
            tag,
            build,
            ssh,
            params,
        } = inputs;

        let branch = branch.filter(|v| !v.is_empty());
        let reference = reference.filter(|v| !v.is_empty());
        let tag = tag.filter(|v| !v.is_empty());
        let build = build.filter(|v| !v.is_empty());

        match (branch, reference, tag, build, ssh) {
            (None, None, None, None, false) => Ok(Action::BuildDefault { params }),

            (Some(branch), None, None, None, false) => Ok(Action::BuildBranch { branch, params }),

            (Some(branch), Some(reference), None, None, false) => Ok(Action::BuildBranchAtRef {
                branch,
                reference,
                params,
            }),

            (None, Some(reference), None, None, false) => {
                Ok(Action::BuildRef { reference, params })
            }

            (None, None, Some(tag), None, false) => Ok(Action::BuildTag { tag, params }),

            (None, None, None, Some(build), false) if params.is_empty() => {
                Ok(Action::Rebuild { build })
            }

            (None, None, None, Some(build), true) if params.is_empty() => {
                Ok(Action::RebuildWithSSH { build })
            }

            _ => Err(OvertureError::InvalidFlagCombination),
        }
    }

    /// Human-readable description of what will be triggered
    pub fn describe(&self) -> String {
        match self {
            Action::BuildDefault { .. } => "build default branch".to_string(),
            Action::BuildBranch { branch, .. } => format!("build branch {branch}"),
            Action::BuildBranchAtRef {
                branch, reference, ..
            } => format!("build branch {branch} at {reference}"),
            Action::BuildRef { reference, .. } => format!("build ref {reference}"),
            Action::BuildTag { tag, .. } => format!("build tag {tag}"),
            Action::Rebuild { build } => format!("rebuild #{build}"),
            Action::RebuildWithSSH { build } => format!("rebuild #{build} with SSH"),
        }
    }

    /// Perform the one API call this action stands for
    pub fn dispatch(&self, client: &CircleClient, project: &ProjectId) -> Result<BuildResponse> {
        match self {
            Action::BuildDefault { params } => client.build_default(project, params),
            Action::BuildBranch { branch, params } => client.build_branch(project, branch, params),
            Action::BuildBranchAtRef {
                branch,
                reference,
                params,
            } => client.build_branch_at_ref(project, branch, reference, params),
            Action::BuildRef { reference, params } => client.build_ref(project, reference, params),
            Action::BuildTag { tag, params } => client.build_tag(project, tag, params),
            Action::Rebuild { build } => client.rebuild(project, build),
            Action::RebuildWithSSH { build } => client.rebuild_with_ssh(project, build),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn params(pairs: &[(&str, &str)]) -> BuildParameters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn inputs(
        branch: Option<String>,
        reference: Option<String>,
        tag: Option<String>,
        build: Option<String>,
        ssh: bool,
        params: BuildParameters,
    ) -> TriggerInputs {
        TriggerInputs {
            branch,
            reference,
            tag,
            build,
            ssh,
            params,
        }
    }

    #[test]
    fn test_no_flags_builds_default_branch() {
        let action = Action::select(TriggerInputs::default()).unwrap();
        assert_eq!(
            action,
            Action::BuildDefault {
                params: BuildParameters::new()
            }
        );
    }

    #[test]
    fn test_branch_flag_builds_branch() {
        let action = Action::select(inputs(
            some("main"),
            None,
            None,
            None,
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        assert!(matches!(
            action,
            Action::BuildBranch { ref branch, .. } if branch == "main"
        ));
    }

    #[test]
    fn test_branch_and_ref_build_branch_at_ref() {
        let action = Action::select(inputs(
            some("main"),
            some("cafe1234"),
            None,
            None,
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        assert!(matches!(
            action,
            Action::BuildBranchAtRef { ref branch, ref reference, .. }
                if branch == "main" && reference == "cafe1234"
        ));
    }

    #[test]
    fn test_ref_flag_builds_ref() {
        let action = Action::select(inputs(
            None,
            some("cafe1234"),
            None,
            None,
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        assert!(matches!(
            action,
            Action::BuildRef { ref reference, .. } if reference == "cafe1234"
        ));
    }

    #[test]
    fn test_tag_flag_builds_tag() {
        let action = Action::select(inputs(
            None,
            None,
            some("v1.0.0"),
            None,
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        assert!(matches!(
            action,
            Action::BuildTag { ref tag, .. } if tag == "v1.0.0"
        ));
    }

    #[test]
    fn test_build_flag_rebuilds() {
        let action = Action::select(inputs(
            None,
            None,
            None,
            some("42"),
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        assert_eq!(
            action,
            Action::Rebuild {
                build: "42".to_string()
            }
        );
    }

    #[test]
    fn test_build_and_ssh_rebuild_with_ssh() {
        let action = Action::select(inputs(
            None,
            None,
            None,
            some("42"),
            true,
            BuildParameters::new(),
        ))
        .unwrap();
        assert_eq!(
            action,
            Action::RebuildWithSSH {
                build: "42".to_string()
            }
        );
    }

    #[test]
    fn test_params_permitted_with_every_fresh_build_mode() {
        let fresh: [(Option<String>, Option<String>, Option<String>); 5] = [
            (None, None, None),
            (some("main"), None, None),
            (some("main"), some("cafe1234"), None),
            (None, some("cafe1234"), None),
            (None, None, some("v1.0.0")),
        ];

        for (branch, reference, tag) in fresh {
            let action = Action::select(inputs(
                branch,
                reference,
                tag,
                None,
                false,
                params(&[("key", "value")]),
            ));
            assert!(action.is_ok());
        }
    }

    #[test]
    fn test_params_rejected_with_rebuild() {
        let result = Action::select(inputs(
            None,
            None,
            None,
            some("42"),
            false,
            params(&[("key", "value")]),
        ));
        assert!(matches!(result, Err(OvertureError::InvalidFlagCombination)));

        let result = Action::select(inputs(
            None,
            None,
            None,
            some("42"),
            true,
            params(&[("key", "value")]),
        ));
        assert!(matches!(result, Err(OvertureError::InvalidFlagCombination)));
    }

    #[test]
    fn test_ssh_without_build_is_rejected() {
        let result = Action::select(inputs(
            None,
            None,
            None,
            None,
            true,
            BuildParameters::new(),
        ));
        assert!(matches!(result, Err(OvertureError::InvalidFlagCombination)));
    }

    #[test]
    fn test_mixing_fresh_and_rebuild_flags_is_rejected() {
        let result = Action::select(inputs(
            some("main"),
            None,
            None,
            some("42"),
            false,
            BuildParameters::new(),
        ));
        assert!(matches!(result, Err(OvertureError::InvalidFlagCombination)));

        let result = Action::select(inputs(
            None,
            None,
            some("v1.0.0"),
            some("42"),
            false,
            BuildParameters::new(),
        ));
        assert!(matches!(result, Err(OvertureError::InvalidFlagCombination)));
    }

    #[test]
    fn test_tag_does_not_combine_with_branch_or_ref() {
        let result = Action::select(inputs(
            some("main"),
            None,
            some("v1.0.0"),
            None,
            false,
            BuildParameters::new(),
        ));
        assert!(result.is_err());

        let result = Action::select(inputs(
            None,
            some("cafe1234"),
            some("v1.0.0"),
            None,
            false,
            BuildParameters::new(),
        ));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_flag_values_count_as_absent() {
        let action = Action::select(inputs(
            some(""),
            some(""),
            some(""),
            some(""),
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        assert!(matches!(action, Action::BuildDefault { .. }));
    }

    // Every combination of the five selection flags, with and without
    // parameters, resolves to exactly one action or is rejected.
    #[test]
    fn test_selection_is_total() {
        for index in 0..64u32 {
            let has_branch = index & 1 != 0;
            let has_ref = index & 2 != 0;
            let has_tag = index & 4 != 0;
            let has_build = index & 8 != 0;
            let has_ssh = index & 16 != 0;
            let has_params = index & 32 != 0;

            let result = Action::select(inputs(
                has_branch.then(|| "feature".to_string()),
                has_ref.then(|| "cafe1234".to_string()),
                has_tag.then(|| "v1.0.0".to_string()),
                has_build.then(|| "42".to_string()),
                has_ssh,
                if has_params {
                    params(&[("key", "value")])
                } else {
                    BuildParameters::new()
                },
            ));

            let expected = match (has_branch, has_ref, has_tag, has_build, has_ssh, has_params) {
                (false, false, false, false, false, _) => Some("build default branch"),
                (true, false, false, false, false, _) => Some("build branch feature"),
                (true, true, false, false, false, _) => Some("build branch feature at cafe1234"),
                (false, true, false, false, false, _) => Some("build ref cafe1234"),
                (false, false, true, false, false, _) => Some("build tag v1.0.0"),
                (false, false, false, true, false, false) => Some("rebuild #42"),
                (false, false, false, true, true, false) => Some("rebuild #42 with SSH"),
                _ => None,
            };

            match expected {
                Some(description) => {
                    let action = result.unwrap_or_else(|e| {
                        panic!("combination {index:#08b} should be valid, got {e}")
                    });
                    assert_eq!(action.describe(), description);
                }
                None => {
                    assert!(
                        matches!(result, Err(OvertureError::InvalidFlagCombination)),
                        "combination {index:#08b} should be rejected"
                    );
                }
            }
        }
    }

    #[test]
    fn test_descriptions_contain_flag_values() {
        let action = Action::select(inputs(
            some("release/2.x"),
            some("deadbeef"),
            None,
            None,
            false,
            BuildParameters::new(),
        ))
        .unwrap();
        let description = action.describe();
        assert!(description.contains("release/2.x"));
        assert!(description.contains("deadbeef"));

        let action = Action::select(inputs(
            None,
            None,
            None,
            some("1337"),
            true,
            BuildParameters::new(),
        ))
        .unwrap();
        assert!(action.describe().contains("1337"));
        assert!(action.describe().contains("SSH"));
    }
}
