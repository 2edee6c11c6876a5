use anyhow::Context as _;

use crate::{ApiClient, ApiFailure, PAGE_SIZE, PROJECT_PREFIX};

/// The slice of a Pages project this tool looks at. The API returns a much
/// larger object per project; everything but the name is ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Project {
    pub name: String,
}

/// The two calls the cleanup needs from the Pages API.
pub trait PagesApi {
    fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<Project>, ApiFailure>;
    fn delete(&self, name: &str) -> Result<(), ApiFailure>;
}

impl PagesApi for ApiClient {
    fn list_page(&self, page: u32, per_page: u32) -> Result<Vec<Project>, ApiFailure> {
        self.request(
            "GET",
            "/pages/projects",
            &[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ],
        )
    }

    fn delete(&self, name: &str) -> Result<(), ApiFailure> {
        let _: serde_json::Value = self.request("DELETE", &format!("/pages/projects/{}", name), &[])?;
        Ok(())
    }
}

/// Pages through every project on the account and keeps the ones whose
/// name starts with `prefix`, in the order the API returned them.
///
/// Any page failure is an error: deleting from a partial listing would be
/// operating on an untrustworthy candidate set.
pub fn list_matching(api: &impl PagesApi, prefix: &str) -> anyhow::Result<Vec<Project>> {
    let mut projects = Vec::new();
    let mut page = 1;

    loop {
        let batch = api
            .list_page(page, PAGE_SIZE)
            .with_context(|| format!("failed to fetch project list (page {})", page))?;
        tracing::debug!(page, count = batch.len(), "fetched project page");

        let len = batch.len();
        projects.extend(batch);

        // a short page is the last page
        if len < PAGE_SIZE as usize {
            break;
        }
        page += 1;
    }

    projects.retain(|project| project.name.starts_with(prefix));
    Ok(projects)
}

/// Deletes one project by name. Failure here is tolerated: another run of
/// this tool may have deleted it already.
pub fn delete_project(api: &impl PagesApi, name: &str) {
    println!("Deleting project: {}", name);
    if let Err(err) = api.delete(name) {
        tracing::warn!("could not delete '{}': {}", name, err);
    }
}

/// Lists the e2e projects and deletes each one (or only reports them when
/// `dry_run` is set). Returns how many projects matched.
pub fn run(api: &impl PagesApi, dry_run: bool) -> anyhow::Result<usize> {
    let projects = list_matching(api, PROJECT_PREFIX)?;

    for project in &projects {
        if dry_run {
            println!("Would delete project: {}", project.name);
        } else {
            delete_project(api, &project.name);
        }
    }

    Ok(projects.len())
}

pub fn summary(count: usize) -> String {
    match count {
        0 => "No projects to delete.".to_string(),
        n => format!("Successfully deleted {} projects", n),
    }
}
