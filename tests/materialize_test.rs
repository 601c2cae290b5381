use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use stencil::archive::archive_name;
use stencil::error::{Error, Result};
use stencil::manifest::TemplateManifest;
use stencil::materialize::{materialize, materialize_template};
use stencil::registry::RepoRef;
use stencil::remote::{RemoteRepository, TreeEntry};
use stencil::substitute::ValueMap;

/// In-memory stand-in for the GitHub client.
struct FakeRemote {
    manifest: TemplateManifest,
    tree: Vec<TreeEntry>,
    files: HashMap<String, String>,
    fail_manifest: bool,
    fail_tree: bool,
    fail_paths: HashSet<String>,
}

impl FakeRemote {
    fn new(manifest_json: &str) -> Self {
        FakeRemote {
            manifest: serde_json::from_str(manifest_json).unwrap(),
            tree: Vec::new(),
            files: HashMap::new(),
            fail_manifest: false,
            fail_tree: false,
            fail_paths: HashSet::new(),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.tree.push(TreeEntry::blob(path));
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    fn with_failing_file(mut self, path: &str) -> Self {
        self.tree.push(TreeEntry::blob(path));
        self.fail_paths.insert(path.to_string());
        self
    }

    fn with_failing_tree(mut self) -> Self {
        self.fail_tree = true;
        self
    }

    fn with_failing_manifest(mut self) -> Self {
        self.fail_manifest = true;
        self
    }
}

#[async_trait]
impl RemoteRepository for FakeRemote {
    async fn fetch_manifest(
        &self,
        _repo: &RepoRef,
        template_path: &str,
    ) -> Result<TemplateManifest> {
        if self.fail_manifest {
            return Err(Error::ManifestFetch {
                url: format!("{template_path}/template.json"),
                reason: "not found".to_string(),
            });
        }
        Ok(self.manifest.clone())
    }

    async fn fetch_tree(&self, repo: &RepoRef) -> Result<Vec<TreeEntry>> {
        if self.fail_tree {
            return Err(Error::TreeFetch {
                repo: repo.repo.clone(),
                branch: repo.branch.clone(),
                reason: "service unavailable".to_string(),
            });
        }
        Ok(self.tree.clone())
    }

    async fn fetch_raw(&self, _repo: &RepoRef, path: &str) -> Result<String> {
        if self.fail_paths.contains(path) {
            return Err(Error::FileFetch {
                path: path.to_string(),
                reason: "connection reset".to_string(),
            });
        }
        self.files.get(path).cloned().ok_or_else(|| Error::FileFetch {
            path: path.to_string(),
            reason: "not found".to_string(),
        })
    }
}

fn repo_ref() -> RepoRef {
    RepoRef { repo: "acme/templates".to_string(), branch: "main".to_string() }
}

fn values(pairs: &[(&str, &str)]) -> ValueMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

const SCENARIO_MANIFEST: &str = r#"{
    "prompts": {"project_name": {"label": "Name", "default": "myapp"}},
    "rename": {"myapp": "{{project_name}}"},
    "replace": [{"glob": "**/*.json", "values": {"myapp": "{{project_name}}"}}]
}"#;

#[tokio::test]
async fn test_end_to_end_scenario() {
    let remote = FakeRemote::new(SCENARIO_MANIFEST)
        .with_file("node/basic/myapp/package.json", r#"{"name":"myapp"}"#);
    let values = values(&[("project_name", "coolapp")]);

    let outcome = materialize(
        &remote,
        &repo_ref(),
        "node/basic",
        &remote.manifest,
        &values,
    )
    .await
    .unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert_eq!(outcome.files[0].destination_path, "coolapp/package.json");
    assert_eq!(outcome.files[0].content, r#"{"name":"coolapp"}"#);
    assert!(outcome.warnings.is_empty());
    assert_eq!(archive_name("coolapp"), "coolapp.zip");
}

#[tokio::test]
async fn test_manifest_and_doc_sentinel_never_materialized() {
    let remote = FakeRemote::new(SCENARIO_MANIFEST)
        .with_file("node/basic/template.json", SCENARIO_MANIFEST)
        .with_file("node/basic/CLAUDE.md", "docs")
        .with_file("node/basic/myapp/package.json", r#"{"name":"myapp"}"#);
    let values = values(&[("project_name", "demo")]);

    let outcome = materialize(
        &remote,
        &repo_ref(),
        "node/basic",
        &remote.manifest,
        &values,
    )
    .await
    .unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert_eq!(outcome.files[0].destination_path, "demo/package.json");
}

#[tokio::test]
async fn test_file_fetch_failure_drops_only_that_file() {
    let remote = FakeRemote::new(SCENARIO_MANIFEST)
        .with_file("tpl/a.json", r#"{"name":"myapp"}"#)
        .with_failing_file("tpl/b.json")
        .with_file("tpl/c.txt", "myapp everywhere");
    let values = values(&[("project_name", "demo")]);

    let outcome =
        materialize(&remote, &repo_ref(), "tpl", &remote.manifest, &values)
            .await
            .unwrap();

    let paths: Vec<&str> =
        outcome.files.iter().map(|f| f.destination_path.as_str()).collect();
    assert_eq!(paths, ["a.json", "c.txt"]);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("tpl/b.json"));

    // The replace rule is scoped to json files; c.txt is untouched.
    assert_eq!(outcome.files[0].content, r#"{"name":"demo"}"#);
    assert_eq!(outcome.files[1].content, "myapp everywhere");
}

#[tokio::test]
async fn test_tree_fetch_failure_is_fatal() {
    let remote = FakeRemote::new(SCENARIO_MANIFEST)
        .with_file("tpl/a.json", "{}")
        .with_failing_tree();
    let values = values(&[("project_name", "demo")]);

    let result =
        materialize(&remote, &repo_ref(), "tpl", &remote.manifest, &values).await;
    assert!(matches!(result, Err(Error::TreeFetch { .. })));
}

#[tokio::test]
async fn test_manifest_fetch_failure_is_fatal() {
    let remote = FakeRemote::new(SCENARIO_MANIFEST)
        .with_file("tpl/a.json", "{}")
        .with_failing_manifest();

    let mut values_resolved = false;
    let result = materialize_template(&remote, &repo_ref(), "tpl", |_manifest| {
        values_resolved = true;
        Ok(ValueMap::new())
    })
    .await;

    // The run aborts before values are collected; zero output exists.
    assert!(matches!(result, Err(Error::ManifestFetch { .. })));
    assert!(!values_resolved);
}

#[tokio::test]
async fn test_materialize_template_end_to_end() {
    let remote = FakeRemote::new(SCENARIO_MANIFEST)
        .with_file("node/basic/myapp/package.json", r#"{"name":"myapp"}"#);

    let outcome = materialize_template(&remote, &repo_ref(), "node/basic", |manifest| {
        assert_eq!(manifest.prompts["project_name"].default, "myapp");
        Ok(values(&[("project_name", "coolapp")]))
    })
    .await
    .unwrap();

    assert_eq!(outcome.files.len(), 1);
    assert_eq!(outcome.files[0].destination_path, "coolapp/package.json");
    assert_eq!(outcome.files[0].content, r#"{"name":"coolapp"}"#);
}

#[tokio::test]
async fn test_output_order_follows_tree_order() {
    let remote = FakeRemote::new(r#"{"prompts": {}}"#)
        .with_file("tpl/z.txt", "z")
        .with_file("tpl/a.txt", "a")
        .with_file("tpl/m/n.txt", "n");
    let values = ValueMap::new();

    let outcome =
        materialize(&remote, &repo_ref(), "tpl", &remote.manifest, &values)
            .await
            .unwrap();

    let paths: Vec<&str> =
        outcome.files.iter().map(|f| f.destination_path.as_str()).collect();
    assert_eq!(paths, ["z.txt", "a.txt", "m/n.txt"]);
}

#[tokio::test]
async fn test_unresolved_tokens_survive_to_output() {
    let manifest = r#"{
        "prompts": {},
        "replace": [{"glob": "**/*", "values": {"NAME": "{{missing_key}}"}}]
    }"#;
    let remote = FakeRemote::new(manifest).with_file("tpl/file.txt", "hello NAME");
    let values = ValueMap::new();

    let outcome =
        materialize(&remote, &repo_ref(), "tpl", &remote.manifest, &values)
            .await
            .unwrap();
    assert_eq!(outcome.files[0].content, "hello {{missing_key}}");
}
