#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use maintainers_audit::Repository;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;
use tiny_http::{Response, Server, StatusCode};

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    /// Runs in the temp dir with no credential and no ambient log filter.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("maintainers-audit");
        cmd.current_dir(&self.root)
            .env_remove("GITHUB_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `audit` against a local GitHub stand-in, caching under `cache/`.
    pub fn audit_cmd(&self, github: &MockGithub, org: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GITHUB_TOKEN", "test-token").args([
            "audit",
            "--org",
            org,
            "--api-url",
            &github.base,
            "--raw-url",
            &github.base,
            "--cache-dir",
            "cache",
            "--timeout-ms",
            "5000",
        ]);
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let p = self.root.join(name);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&p, contents).expect("write fixture");
        p
    }

    pub fn write_report(&self, report: &Value) -> PathBuf {
        self.write(
            "report.json",
            &serde_json::to_string_pretty(report).expect("serialize report"),
        )
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

pub fn fixture_report() -> Value {
    serde_json::json!({
        "lax": ["a@example.org", "b@example.org"],
        "journal": ["a@example.org"],
        "orphan": []
    })
}

pub fn repo(name: &str, default_branch: &str) -> Repository {
    Repository {
        name: name.to_string(),
        default_branch: default_branch.to_string(),
        archived: false,
    }
}

struct Route {
    path: String,
    page: Option<String>,
    status: u16,
    body: String,
}

/// Canned GitHub API + raw content host. Unrouted paths answer 404.
#[derive(Default)]
pub struct MockGithubBuilder {
    routes: Vec<Route>,
}

impl MockGithubBuilder {
    pub fn route(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            page: None,
            status,
            body: body.to_string(),
        });
        self
    }

    /// Listing page `page` of `GET /orgs/<org>/repos`.
    pub fn repos_page(mut self, org: &str, page: usize, repos: &Value) -> Self {
        self.routes.push(Route {
            path: format!("/orgs/{}/repos", org),
            page: Some(page.to_string()),
            status: 200,
            body: repos.to_string(),
        });
        self
    }

    pub fn spawn(self) -> MockGithub {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base = format!("http://{}", server.server_addr());
        let routes = self.routes;
        thread::spawn(move || {
            for req in server.incoming_requests() {
                let url = req.url().to_string();
                let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
                let page = query
                    .split('&')
                    .find_map(|kv| kv.strip_prefix("page="))
                    .unwrap_or("1");
                let hit = routes.iter().find(|r| {
                    r.path == path && r.page.as_deref().map(|p| p == page).unwrap_or(true)
                });
                let resp = match hit {
                    Some(r) => Response::from_string(r.body.clone()).with_status_code(StatusCode(r.status)),
                    None => Response::from_string("404: Not Found").with_status_code(StatusCode(404)),
                };
                let _ = req.respond(resp);
            }
        });
        MockGithub { base }
    }
}

pub struct MockGithub {
    pub base: String,
}

impl MockGithub {
    pub fn builder() -> MockGithubBuilder {
        MockGithubBuilder::default()
    }
}

/// A loopback address nothing listens on.
pub fn refused_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
