use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

use super::project::ProjectId;
use super::types::{BuildParameters, BuildResponse, TriggerBody};
use crate::error::{OvertureError, Result};

/// The public CircleCI service endpoint
pub const PUBLIC_HOST: &str = "circleci.com";

const USER_AGENT: &str = concat!("overture/", env!("CARGO_PKG_VERSION"));

/// CircleCI v1.1 API client
pub struct CircleClient {
    client: Client,
    token: String,
    base: String,
}

impl CircleClient {
    /// Create a new client against the public CircleCI endpoint
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_host(token, PUBLIC_HOST)
    }

    /// Create a new client against a specific host.
    ///
    /// A bare hostname is reached over HTTPS; a host carrying an explicit
    /// scheme is used verbatim.
    pub fn with_host(token: impl Into<String>, host: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        let base = if host.contains("://") {
            format!("{}/api/v1.1", host.trim_end_matches('/'))
        } else {
            format!("https://{host}/api/v1.1")
        };

        Ok(Self {
            client,
            token: token.into(),
            base,
        })
    }

    /// Make a POST request against the API.
    ///
    /// The API token rides along as the `circle-token` query parameter.
    fn post(&self, path: &str, body: &TriggerBody) -> Result<BuildResponse> {
        let mut url = Url::parse(&format!("{}/{}", self.base, path))?;
        url.query_pairs_mut().append_pair("circle-token", &self.token);

        let response = self.client.post(url).json(body).send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(OvertureError::api(status.as_u16(), message));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(OvertureError::Json)
    }

    fn project_path(project: &ProjectId) -> String {
        format!(
            "project/{}/{}/{}",
            project.vcs, project.username, project.project
        )
    }

    /// Trigger a build on the HEAD of the default branch. This branch is
    /// typically master, and can be customized in the VCS platform.
    pub fn build_default(
        &self,
        project: &ProjectId,
        params: &BuildParameters,
    ) -> Result<BuildResponse> {
        self.post(
            &Self::project_path(project),
            &TriggerBody {
                build_parameters: non_empty(params),
                ..TriggerBody::default()
            },
        )
    }

    /// Trigger a build on the given tag
    pub fn build_tag(
        &self,
        project: &ProjectId,
        tag: &str,
        params: &BuildParameters,
    ) -> Result<BuildResponse> {
        self.post(
            &Self::project_path(project),
            &TriggerBody {
                tag: Some(tag),
                build_parameters: non_empty(params),
                ..TriggerBody::default()
            },
        )
    }

    /// Trigger a build on the given ref
    pub fn build_ref(
        &self,
        project: &ProjectId,
        reference: &str,
        params: &BuildParameters,
    ) -> Result<BuildResponse> {
        self.post(
            &Self::project_path(project),
            &TriggerBody {
                revision: Some(reference),
                build_parameters: non_empty(params),
                ..TriggerBody::default()
            },
        )
    }

    /// Trigger a build on the HEAD of the given branch
    pub fn build_branch(
        &self,
        project: &ProjectId,
        branch: &str,
        params: &BuildParameters,
    ) -> Result<BuildResponse> {
        self.post(
            &format!("{}/tree/{}", Self::project_path(project), branch),
            &TriggerBody {
                build_parameters: non_empty(params),
                ..TriggerBody::default()
            },
        )
    }

    /// Trigger a build on the given branch at the given ref
    pub fn build_branch_at_ref(
        &self,
        project: &ProjectId,
        branch: &str,
        reference: &str,
        params: &BuildParameters,
    ) -> Result<BuildResponse> {
        self.post(
            &format!("{}/tree/{}", Self::project_path(project), branch),
            &TriggerBody {
                revision: Some(reference),
                build_parameters: non_empty(params),
                ..TriggerBody::default()
            },
        )
    }

    /// Re-run a previous build by its build number
    pub fn rebuild(&self, project: &ProjectId, build: &str) -> Result<BuildResponse> {
        self.post(
            &format!("{}/{}/retry", Self::project_path(project), build),
            &TriggerBody::default(),
        )
    }

    /// Re-run a previous build by its build number, with SSH enabled
    pub fn rebuild_with_ssh(&self, project: &ProjectId, build: &str) -> Result<BuildResponse> {
        self.post(
            &format!("{}/{}/ssh", Self::project_path(project), build),
            &TriggerBody::default(),
        )
    }
}

/// The API expects `build_parameters` to be omitted entirely when empty
fn non_empty(params: &BuildParameters) -> Option<&BuildParameters> {
    (!params.is_empty()).then_some(params)
}
