// Cleans up Pages projects left behind by the create-cloudflare e2e suite.
// Requires CLOUDFLARE_API_TOKEN and CLOUDFLARE_ACCOUNT_ID in the environment.

// Projects created by the e2e suite are namespaced under this prefix.
// Anything carrying it is assumed safe to delete.
pub const PROJECT_PREFIX: &str = "c3-e2e-";

// How many projects to request per list call.
pub const PAGE_SIZE: u32 = 10;

mod args;
pub use args::Args;

mod config;
pub use config::Config;

mod client;
pub use client::{ApiClient, ApiFailure};

mod cleanup;
pub use cleanup::{delete_project, list_matching, run, summary, PagesApi, Project};
