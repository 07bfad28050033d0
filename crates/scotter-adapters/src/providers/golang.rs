//! Go language provider.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use scotter_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, GenerationContext, LanguageProvider},
    },
    domain::{LanguageCapability, ProjectConfig},
    error::ScotterResult,
};

use crate::providers::write_file;
use crate::render::TemplateVars;

/// `GOOS` values accepted by `go tool dist list`.
pub const GO_PLATFORMS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "illumos", "ios", "js", "linux", "netbsd",
    "openbsd", "plan9", "solaris", "wasip1", "windows",
];

/// `GOARCH` values accepted by `go tool dist list`.
pub const GO_ARCHITECTURES: &[&str] = &[
    "386", "amd64", "arm", "arm64", "loong64", "mips", "mips64", "mips64le", "mipsle", "ppc64",
    "ppc64le", "riscv64", "s390x", "wasm",
];

pub const GO_RELEASE_ASSETS: &[&str] = &["checksum", "sbom", "archive"];

pub const GO_PROJECT_TYPES: &[&str] = &["default", "library", "cli", "api"];

pub const GORELEASER_FILE: &str = ".goreleaser.yaml";

/// Extension-map key switching `Taskfile.yml` generation; absent means on.
pub const TASKFILE_OPTION: &str = "taskfile";

const DEFAULT_GO_VERSION: &str = "1.22";

pub struct GoLanguageProvider {
    filesystem: Arc<dyn Filesystem>,
}

impl GoLanguageProvider {
    pub const NAME: &'static str = "go";

    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    fn vars(ctx: &GenerationContext<'_>) -> TemplateVars {
        let name = ctx.config.project_name();
        TemplateVars::for_project(ctx.config)
            .with("MODULE_PATH", ctx.option_str("module_path").unwrap_or(name))
            .with(
                "GO_VERSION",
                ctx.option_str("go_version").unwrap_or(DEFAULT_GO_VERSION),
            )
    }

    fn write(
        &self,
        root: &Path,
        relative: &str,
        template: &str,
        vars: &TemplateVars,
    ) -> ScotterResult<()> {
        write_file(
            self.filesystem.as_ref(),
            &root.join(relative),
            &vars.render(template),
        )
    }
}

impl LanguageCapability for GoLanguageProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn supported_platforms(&self) -> &[&str] {
        GO_PLATFORMS
    }

    fn supported_architectures(&self) -> &[&str] {
        GO_ARCHITECTURES
    }

    fn supported_release_assets(&self) -> &[&str] {
        GO_RELEASE_ASSETS
    }

    fn supported_project_types(&self) -> &[&str] {
        GO_PROJECT_TYPES
    }
}

impl LanguageProvider for GoLanguageProvider {
    #[instrument(skip_all, fields(project = ctx.config.project_name(), kind = ctx.config.project_type()))]
    fn initialize(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()> {
        let root = ctx.project_root;
        let vars = Self::vars(ctx);
        let name = ctx.config.project_name();

        self.filesystem.create_dir_all(&root.join(".github/workflows"))?;
        self.write(root, "go.mod", GO_MOD, &vars)?;
        self.write(root, ".gitignore", GITIGNORE, &vars)?;
        self.write(root, "README.md", README, &vars)?;

        match ctx.config.project_type() {
            "library" => {
                let file = format!("pkg/{0}/{0}.go", vars.get("PROJECT_NAME_SNAKE").unwrap_or(name));
                self.write(root, &file, LIBRARY_GO, &vars)?;
            }
            "cli" => {
                self.write(root, &format!("cmd/{name}/main.go"), CLI_MAIN_GO, &vars)?;
                self.write(root, "internal/config/config.go", CONFIG_GO, &vars)?;
            }
            "api" => {
                self.write(root, &format!("cmd/{name}/main.go"), API_MAIN_GO, &vars)?;
                self.write(root, "internal/handler/handler.go", HANDLER_GO, &vars)?;
                self.write(root, "internal/config/config.go", CONFIG_GO, &vars)?;
            }
            _ => self.write(root, "main.go", DEFAULT_MAIN_GO, &vars)?,
        }

        if ctx
            .options
            .get(TASKFILE_OPTION)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true)
        {
            write_file(
                self.filesystem.as_ref(),
                &root.join("Taskfile.yml"),
                &render_taskfile(ctx.config, &vars),
            )?;
        }

        debug!("Go project layout written");
        Ok(())
    }

    #[instrument(skip_all, fields(project = ctx.config.project_name()))]
    fn generate_release_script(&self, ctx: &GenerationContext<'_>) -> ScotterResult<()> {
        let yaml = render_goreleaser(ctx.config).map_err(|e| ApplicationError::GenerationFailed {
            provider: Self::NAME.into(),
            reason: e.to_string(),
        })?;

        write_file(
            self.filesystem.as_ref(),
            &ctx.project_root.join(GORELEASER_FILE),
            &format!("{GORELEASER_HEADER}{yaml}"),
        )
    }
}

/// Package holding `func main` for the layout `initialize` writes. Libraries
/// have none.
pub fn main_package(config: &ProjectConfig) -> Option<String> {
    match config.project_type() {
        "library" => None,
        "default" => Some(".".to_string()),
        _ => Some(format!("./cmd/{}", config.project_name())),
    }
}

// ── GoReleaser ───────────────────────────────────────────────────────────────

const GORELEASER_HEADER: &str =
    "# Generated by scotter. Regenerated whenever platforms, architectures or\n# release assets change; edit .scotter.yaml instead.\n";

#[derive(Serialize)]
struct GoReleaser<'a> {
    version: u8,
    project_name: &'a str,
    builds: Vec<Build<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    archives: Vec<Archive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<Checksum>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sboms: Vec<Sbom>,
}

#[derive(Serialize)]
struct Build<'a> {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    skip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    env: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    goos: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    goarch: Vec<&'a str>,
}

#[derive(Serialize)]
struct Archive {
    formats: Vec<&'static str>,
    format_overrides: Vec<FormatOverride>,
}

#[derive(Serialize)]
struct FormatOverride {
    goos: &'static str,
    formats: Vec<&'static str>,
}

#[derive(Serialize)]
struct Checksum {
    name_template: &'static str,
}

#[derive(Serialize)]
struct Sbom {
    artifacts: &'static str,
}

fn render_goreleaser(config: &ProjectConfig) -> Result<String, serde_yaml::Error> {
    let name = config.project_name();
    let has = |asset: &str| config.release_assets().iter().any(|a| a == asset);

    let build = match main_package(config) {
        None => Build {
            skip: true,
            main: None,
            binary: None,
            env: Vec::new(),
            goos: Vec::new(),
            goarch: Vec::new(),
        },
        Some(main) => Build {
            skip: false,
            main: Some(main),
            binary: Some(name),
            env: vec!["CGO_ENABLED=0"],
            goos: config.platforms().iter().map(String::as_str).collect(),
            goarch: config.architectures().iter().map(String::as_str).collect(),
        },
    };

    let doc = GoReleaser {
        version: 2,
        project_name: name,
        builds: vec![build],
        archives: if has("archive") {
            vec![Archive {
                formats: vec!["tar.gz"],
                format_overrides: vec![FormatOverride {
                    goos: "windows",
                    formats: vec!["zip"],
                }],
            }]
        } else {
            Vec::new()
        },
        checksum: has("checksum").then_some(Checksum {
            name_template: "checksums.txt",
        }),
        sboms: if has("sbom") {
            vec![Sbom {
                artifacts: "archive",
            }]
        } else {
            Vec::new()
        },
    };

    serde_yaml::to_string(&doc)
}

// ── Taskfile ─────────────────────────────────────────────────────────────────

fn render_taskfile(config: &ProjectConfig, vars: &TemplateVars) -> String {
    let build = match main_package(config) {
        Some(main) => format!("go build -o bin/{} {main}", config.project_name()),
        None => "go build ./...".to_string(),
    };

    let mut taskfile = vars.clone().with("BUILD_CMD", build).render(TASKFILE);
    if config.has_feature("changelog") {
        taskfile.push_str(TASKFILE_CHANGELOG);
    }
    taskfile
}

const TASKFILE: &str = r#"version: '3'

tasks:
  build:
    desc: Build {{PROJECT_NAME}}
    cmds:
      - {{BUILD_CMD}}

  test:
    desc: Run the tests
    cmds:
      - go test -race ./...

  lint:
    desc: Vet and lint the code
    cmds:
      - go vet ./...
      - golangci-lint run
"#;

const TASKFILE_CHANGELOG: &str = r#"
  changelog:
    desc: Regenerate CHANGELOG.md from the commit history
    cmds:
      - git cliff -o CHANGELOG.md
"#;

// ── File templates ───────────────────────────────────────────────────────────

const GO_MOD: &str = "module {{MODULE_PATH}}\n\ngo {{GO_VERSION}}\n";

const GITIGNORE: &str = "\
# Binaries
*.exe
*.exe~
*.dll
*.so
*.dylib
*.test
*.out

# Dependencies and build output
vendor/
dist/
bin/

# Editors and OS files
.idea/
.vscode/
*.swp
.DS_Store
Thumbs.db
";

const README: &str = "\
# {{PROJECT_NAME}}

A Go {{PROJECT_TYPE}} project.

## Build

```sh
go build ./...
go test ./...
```

## Release

Releases are built with GoReleaser from `.goreleaser.yaml`.
";

const DEFAULT_MAIN_GO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello from {{PROJECT_NAME}}")
}
"#;

const LIBRARY_GO: &str = r#"// Package {{PROJECT_NAME_SNAKE}} provides the {{PROJECT_NAME}} library.
package {{PROJECT_NAME_SNAKE}}

// Version is the library version.
const Version = "0.1.0"
"#;

const CLI_MAIN_GO: &str = r#"package main

import (
	"fmt"
	"os"
)

func main() {
	if len(os.Args) > 1 && os.Args[1] == "version" {
		fmt.Println("{{PROJECT_NAME}} dev")
		return
	}
	fmt.Println("Usage: {{PROJECT_NAME}} [version]")
}
"#;

const API_MAIN_GO: &str = r#"package main

import (
	"log"
	"net/http"

	"{{MODULE_PATH}}/internal/config"
	"{{MODULE_PATH}}/internal/handler"
)

func main() {
	cfg := config.Load()
	mux := http.NewServeMux()
	mux.HandleFunc("/health", handler.Health)

	log.Printf("{{PROJECT_NAME}} listening on %s", cfg.Addr)
	log.Fatal(http.ListenAndServe(cfg.Addr, mux))
}
"#;

const HANDLER_GO: &str = r#"package handler

import "net/http"

// Health reports that the service is up.
func Health(w http.ResponseWriter, _ *http.Request) {
	w.WriteHeader(http.StatusOK)
	_, _ = w.Write([]byte("ok"))
}
"#;

const CONFIG_GO: &str = r#"package config

import "os"

// Config holds runtime settings read from the environment.
type Config struct {
	Addr string
}

// Load reads the configuration from the environment.
func Load() Config {
	addr := os.Getenv("ADDR")
	if addr == "" {
		addr = ":8080"
	}
	return Config{Addr: addr}
}
"#;
