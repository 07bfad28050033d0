//! GitHub Actions CI provider.
//!
//! Writes one set of files per enabled pipeline feature. Projects recorded
//! without any pipeline features get `ci`, `commit-lint` and `release`.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use scotter_core::{
    application::{
        ApplicationError,
        ports::{CiProvider, Filesystem, GenerationContext},
    },
    domain::{CapabilityKind, CiCapability, DomainError},
    error::ScotterResult,
};

use crate::providers::{golang::main_package, write_file};
use crate::render::TemplateVars;

/// Features generated when a project records none.
pub const DEFAULT_FEATURES: &[&str] = &["ci", "commit-lint", "release"];

const SUPPORTED_LANGUAGES: &[&str] = &["go"];

const DEFAULT_GO_VERSION: &str = "1.22";

pub struct GitHubActionsProvider {
    filesystem: Arc<dyn Filesystem>,
}

impl GitHubActionsProvider {
    pub const NAME: &'static str = "github";

    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    fn write(&self, root: &Path, relative: &str, content: &str) -> ScotterResult<()> {
        write_file(self.filesystem.as_ref(), &root.join(relative), content)
    }

    fn vars(ctx: &GenerationContext<'_>) -> TemplateVars {
        let os_matrix = ctx
            .config
            .platforms()
            .iter()
            .filter_map(|p| runner_for(p))
            .collect::<Vec<_>>();
        let os_matrix = if os_matrix.is_empty() {
            "ubuntu-latest".to_string()
        } else {
            os_matrix.join(", ")
        };

        let tag_pattern = if ctx.config.project_type() == "library" {
            "v*"
        } else {
            "*"
        };

        TemplateVars::for_project(ctx.config)
            .with(
                "GO_VERSION",
                ctx.option_str("go_version").unwrap_or(DEFAULT_GO_VERSION),
            )
            .with("OS_MATRIX", os_matrix)
            .with("TAG_PATTERN", tag_pattern)
            .with("CONTAINER_FILE", ctx.config.container_format().file_name())
            .with(
                "MAIN_PACKAGE",
                main_package(ctx.config).unwrap_or_else(|| ".".to_string()),
            )
    }

    fn generate_feature(
        &self,
        feature: &str,
        ctx: &GenerationContext<'_>,
        vars: &TemplateVars,
    ) -> ScotterResult<()> {
        let root = ctx.project_root;
        match feature {
            "ci" => self.write(root, ".github/workflows/ci.yml", &vars.render(CI_WORKFLOW)),
            "commit-lint" => {
                self.write(root, ".github/workflows/commitlint.yml", COMMITLINT_WORKFLOW)?;
                self.write(root, "commitlint.config.js", COMMITLINT_CONFIG)
            }
            "changelog" => {
                self.write(root, ".github/workflows/changelog.yml", CHANGELOG_WORKFLOW)?;
                self.write(root, "cliff.toml", &render_cliff_config()?)?;
                let changelog = root.join("CHANGELOG.md");
                if !self.filesystem.exists(&changelog) {
                    self.filesystem.write_file(&changelog, CHANGELOG_SEED)?;
                }
                Ok(())
            }
            "release" => {
                let template = if ctx.config.project_type() == "library" {
                    LIBRARY_RELEASE_WORKFLOW
                } else {
                    BINARY_RELEASE_WORKFLOW
                };
                self.write(root, ".github/workflows/release.yml", &vars.render(template))
            }
            "dependabot" => self.write(root, ".github/dependabot.yml", DEPENDABOT_CONFIG),
            "container" if main_package(ctx.config).is_none() => {
                warn!("Libraries have no binary to containerize, skipping container");
                Ok(())
            }
            "container" => {
                self.write(
                    root,
                    ctx.config.container_format().file_name(),
                    &vars.render(GO_CONTAINERFILE),
                )?;
                self.write(
                    root,
                    ".github/workflows/container.yml",
                    &vars.render(CONTAINER_WORKFLOW),
                )
            }
            other => {
                warn!(feature = other, "No GitHub Actions generator for feature, skipping");
                Ok(())
            }
        }
    }
}

impl CiCapability for GitHubActionsProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn supported_languages(&self) -> &[&str] {
        SUPPORTED_LANGUAGES
    }
}

impl CiProvider for GitHubActionsProvider {
    #[instrument(skip_all, fields(project = ctx.config.project_name()))]
    fn generate_workflows(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()> {
        let language = ctx.config.language();
        if !self.supports_language(language) {
            return Err(DomainError::UnsupportedCapability {
                kind: CapabilityKind::Language,
                value: language.to_string(),
                provider: Self::NAME.into(),
                supported: SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            }
            .into());
        }

        let recorded = ctx.config.pipeline_features();
        let features: Vec<&str> = if recorded.is_empty() {
            DEFAULT_FEATURES.to_vec()
        } else {
            recorded.iter().map(String::as_str).collect()
        };

        self.filesystem
            .create_dir_all(&ctx.project_root.join(".github/workflows"))?;

        let vars = Self::vars(ctx);
        for feature in &features {
            self.generate_feature(feature, ctx, &vars)?;
        }

        debug!(?features, "GitHub Actions files written");
        Ok(())
    }
}

/// GitHub-hosted runner for a Go platform, if there is one.
fn runner_for(platform: &str) -> Option<&'static str> {
    match platform {
        "linux" => Some("ubuntu-latest"),
        "darwin" => Some("macos-latest"),
        "windows" => Some("windows-latest"),
        _ => None,
    }
}

// ── git-cliff ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CliffConfig {
    changelog: CliffChangelog,
    git: CliffGit,
}

#[derive(Serialize)]
struct CliffChangelog {
    header: &'static str,
    body: &'static str,
    trim: bool,
}

#[derive(Serialize)]
struct CliffGit {
    conventional_commits: bool,
    filter_unconventional: bool,
    commit_parsers: Vec<CommitParser>,
}

#[derive(Serialize)]
struct CommitParser {
    message: &'static str,
    group: &'static str,
}

fn render_cliff_config() -> ScotterResult<String> {
    let parsers = [
        ("^feat", "Features"),
        ("^fix", "Bug Fixes"),
        ("^perf", "Performance"),
        ("^refactor", "Refactoring"),
        ("^doc", "Documentation"),
        ("^test", "Testing"),
        ("^(chore|ci|build)", "Miscellaneous"),
    ];

    let config = CliffConfig {
        changelog: CliffChangelog {
            header: "# Changelog\n\nAll notable changes to this project are documented here.\n",
            body: CLIFF_BODY,
            trim: true,
        },
        git: CliffGit {
            conventional_commits: true,
            filter_unconventional: true,
            commit_parsers: parsers
                .into_iter()
                .map(|(message, group)| CommitParser { message, group })
                .collect(),
        },
    };

    toml::to_string(&config).map_err(|e| {
        ApplicationError::GenerationFailed {
            provider: GitHubActionsProvider::NAME.into(),
            reason: format!("cliff.toml: {e}"),
        }
        .into()
    })
}

const CLIFF_BODY: &str = r#"
{% if version %}## {{ version | trim_start_matches(pat="v") }} - {{ timestamp | date(format="%Y-%m-%d") }}{% else %}## Unreleased{% endif %}
{% for group, commits in commits | group_by(attribute="group") %}
### {{ group }}
{% for commit in commits %}- {{ commit.message | upper_first }}
{% endfor %}{% endfor %}
"#;

// ── Workflow templates ───────────────────────────────────────────────────────

const CI_WORKFLOW: &str = r#"name: CI

on:
  push:
    branches: [main, develop]
  pull_request:
    branches: [main, develop]

jobs:
  build:
    runs-on: ${{ matrix.os }}
    strategy:
      matrix:
        os: [{{OS_MATRIX}}]

    steps:
      - uses: actions/checkout@v4

      - name: Set up Go
        uses: actions/setup-go@v5
        with:
          go-version: "{{GO_VERSION}}"

      - name: Build
        run: go build -v ./...

      - name: Test
        run: go test -v ./...
"#;

const COMMITLINT_WORKFLOW: &str = r#"name: Commit Lint

on:
  pull_request:
    types: [opened, synchronize, reopened, edited]

jobs:
  commitlint:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
        with:
          fetch-depth: 0
      - uses: wagoid/commitlint-github-action@v6
"#;

const COMMITLINT_CONFIG: &str = r#"module.exports = {
  extends: ['@commitlint/config-conventional'],
  rules: {
    'body-max-line-length': [1, 'always', 100],
  },
};
"#;

const CHANGELOG_WORKFLOW: &str = r#"name: Changelog

on:
  push:
    branches: [main]

permissions:
  contents: write

jobs:
  changelog:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
        with:
          fetch-depth: 0
      - uses: orhun/git-cliff-action@v4
        with:
          config: cliff.toml
          args: --verbose
        env:
          OUTPUT: CHANGELOG.md
      - name: Commit changelog
        run: |
          git config user.name "github-actions[bot]"
          git config user.email "github-actions[bot]@users.noreply.github.com"
          git add CHANGELOG.md
          git diff --cached --quiet || git commit -m "chore: update changelog"
          git push
"#;

const CHANGELOG_SEED: &str = "# Changelog\n\n## Unreleased\n";

const BINARY_RELEASE_WORKFLOW: &str = r#"name: Release

on:
  push:
    tags: ['{{TAG_PATTERN}}']

permissions:
  contents: write

jobs:
  release:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
        with:
          fetch-depth: 0
      - uses: actions/setup-go@v5
        with:
          go-version: "{{GO_VERSION}}"
      - uses: goreleaser/goreleaser-action@v6
        with:
          version: "~> v2"
          args: release --clean
        env:
          GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}
"#;

const LIBRARY_RELEASE_WORKFLOW: &str = r#"name: Release

on:
  push:
    tags: ['{{TAG_PATTERN}}']

permissions:
  contents: write

jobs:
  release:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-go@v5
        with:
          go-version: "{{GO_VERSION}}"
      - name: Test
        run: go test ./...
      - name: Create GitHub release
        run: gh release create "${{ github.ref_name }}" --generate-notes
        env:
          GH_TOKEN: ${{ secrets.GITHUB_TOKEN }}
"#;

const DEPENDABOT_CONFIG: &str = r#"version: 2
updates:
  - package-ecosystem: "gomod"
    directory: "/"
    schedule:
      interval: "weekly"
    open-pull-requests-limit: 10

  - package-ecosystem: "github-actions"
    directory: "/"
    schedule:
      interval: "weekly"
"#;

const GO_CONTAINERFILE: &str = r#"FROM golang:{{GO_VERSION}}-alpine AS build
WORKDIR /src
COPY go.mod ./
RUN go mod download
COPY . .
RUN CGO_ENABLED=0 go build -o /out/{{PROJECT_NAME}} {{MAIN_PACKAGE}}

FROM gcr.io/distroless/static
COPY --from=build /out/{{PROJECT_NAME}} /usr/local/bin/{{PROJECT_NAME}}
ENTRYPOINT ["/usr/local/bin/{{PROJECT_NAME}}"]
"#;

const CONTAINER_WORKFLOW: &str = r#"name: Container

on:
  push:
    branches: [main]
    tags: ['*']

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: docker/setup-buildx-action@v3
      - uses: docker/build-push-action@v6
        with:
          context: .
          file: {{CONTAINER_FILE}}
          push: false
          tags: {{PROJECT_NAME_KEBAB}}:latest
"#;
