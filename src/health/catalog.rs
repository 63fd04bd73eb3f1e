//! The check catalog.
//!
//! Defines what gets checked, in what order, and whether a failure counts
//! as a missing tool or a soft warning. The catalog is a static table:
//! extending the set of checks means adding a row, never touching the
//! runner's control flow. Results hold non-owning references back
//! into it.

/// A named group of checks, printed under its own heading.
#[derive(Debug)]
pub struct Section {
    /// Heading shown before the section's check lines.
    pub title: &'static str,
    /// Checks in display/evaluation order.
    pub checks: &'static [CheckDef],
}

/// A single unit of verification.
#[derive(Debug)]
pub struct CheckDef {
    /// Display label (also the name reported when a required check fails).
    pub name: &'static str,
    /// What to probe and how.
    pub kind: CheckKind,
    /// Whether a failure counts as a missing tool (`true`) or a warning.
    pub required: bool,
}

/// How a check is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// An executable resolvable on the search path.
    Command { binary: &'static str },

    /// An alternative set: the first binary that resolves wins.
    CommandAny { binaries: &'static [&'static str] },

    /// A file expected under the home directory.
    HomeFile { relative: &'static str },

    /// An application bundle at an absolute path.
    AppBundle { path: &'static str },

    /// A global git configuration key that must be set and non-empty.
    GitConfig { key: &'static str },

    /// At least one private-key file under `~/.ssh`.
    SshKey { candidates: &'static [&'static str] },
}

impl CheckDef {
    /// The warning sentence reported when this check fails and is optional.
    pub fn warning_text(&self) -> String {
        match self.kind {
            CheckKind::Command { .. } | CheckKind::CommandAny { .. } => {
                format!("Optional tool {} is not installed", self.name)
            }
            CheckKind::HomeFile { relative } => {
                format!("Configuration file ~/{} is missing", relative)
            }
            CheckKind::AppBundle { .. } => {
                format!("{} is not installed in /Applications", self.name)
            }
            CheckKind::GitConfig { key } => {
                format!(
                    "Global git {key} is not set. Set it with `git config --global {key} <value>`"
                )
            }
            CheckKind::SshKey { .. } => {
                "No SSH private key found in ~/.ssh. Generate one with `ssh-keygen -t ed25519`"
                    .to_string()
            }
        }
    }
}

const fn tool(binary: &'static str) -> CheckDef {
    CheckDef {
        name: binary,
        kind: CheckKind::Command { binary },
        required: true,
    }
}

const fn named_tool(name: &'static str, binary: &'static str) -> CheckDef {
    CheckDef {
        name,
        kind: CheckKind::Command { binary },
        required: true,
    }
}

const fn optional_tool(binary: &'static str) -> CheckDef {
    CheckDef {
        name: binary,
        kind: CheckKind::Command { binary },
        required: false,
    }
}

const fn home_file(relative: &'static str) -> CheckDef {
    CheckDef {
        name: relative,
        kind: CheckKind::HomeFile { relative },
        required: false,
    }
}

const fn app(name: &'static str, path: &'static str) -> CheckDef {
    CheckDef {
        name,
        kind: CheckKind::AppBundle { path },
        required: false,
    }
}

/// The fixed check catalog, in the order it runs and prints.
pub const CATALOG: &[Section] = &[
    Section {
        title: "Essential Tools",
        checks: &[
            tool("git"),
            tool("curl"),
            tool("wget"),
            tool("jq"),
            tool("tree"),
            tool("tmux"),
            tool("watch"),
        ],
    },
    Section {
        title: "Modern CLI Tools",
        checks: &[
            named_tool("ripgrep", "rg"),
            tool("fd"),
            tool("bat"),
            tool("eza"),
            tool("fzf"),
            tool("zoxide"),
            tool("htop"),
        ],
    },
    Section {
        title: "AWS Tools",
        checks: &[
            tool("aws"),
            tool("aws-vault"),
            tool("session-manager-plugin"),
        ],
    },
    Section {
        title: "Container & Kubernetes Tools",
        checks: &[
            tool("docker"),
            tool("kubectl"),
            tool("helm"),
            tool("kubectx"),
            tool("stern"),
            optional_tool("k9s"),
        ],
    },
    Section {
        title: "Infrastructure as Code",
        checks: &[tool("terraform"), tool("packer"), tool("ansible")],
    },
    Section {
        title: "Git Tools",
        checks: &[tool("gh"), tool("git-lfs"), tool("pre-commit")],
    },
    Section {
        title: "Code Quality Tools",
        checks: &[tool("shellcheck"), tool("hadolint"), tool("yamllint")],
    },
    Section {
        title: "Database Tools",
        checks: &[tool("psql"), tool("redis-cli"), tool("sqlite3")],
    },
    Section {
        title: "Build Tools",
        checks: &[tool("make"), tool("cmake"), optional_tool("bazel")],
    },
    Section {
        title: "Network Tools",
        checks: &[
            tool("nmap"),
            tool("mtr"),
            CheckDef {
                name: "speedtest",
                kind: CheckKind::CommandAny {
                    binaries: &["speedtest", "speedtest-cli"],
                },
                required: false,
            },
        ],
    },
    Section {
        title: "Security Tools",
        checks: &[tool("gpg"), tool("openssl"), tool("age")],
    },
    Section {
        title: "Configuration Files",
        checks: &[
            home_file(".zshrc"),
            home_file(".gitconfig"),
            home_file(".ssh/config"),
        ],
    },
    Section {
        title: "Applications",
        checks: &[
            app("Docker Desktop", "/Applications/Docker.app"),
            app("iTerm", "/Applications/iTerm.app"),
            app("Visual Studio Code", "/Applications/Visual Studio Code.app"),
        ],
    },
    Section {
        title: "Git Configuration",
        checks: &[
            CheckDef {
                name: "Git user.name",
                kind: CheckKind::GitConfig { key: "user.name" },
                required: false,
            },
            CheckDef {
                name: "Git user.email",
                kind: CheckKind::GitConfig { key: "user.email" },
                required: false,
            },
        ],
    },
    Section {
        title: "SSH Keys",
        checks: &[CheckDef {
            name: "SSH key",
            kind: CheckKind::SshKey {
                candidates: &["id_ed25519", "id_ecdsa", "id_rsa"],
            },
            required: false,
        }],
    },
];

/// Total number of checks in the catalog.
pub fn check_count() -> usize {
    CATALOG.iter().map(|s| s.checks.len()).sum()
}
