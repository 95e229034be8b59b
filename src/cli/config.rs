use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "prestacao-contas",
    version,
    about = "Monta a prestação de contas de entidades beneficiárias em JSON"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: prestacao.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate section documents (or the full report) from a saved draft
    Generate {
        /// Path to the draft snapshot file
        #[arg(long)]
        draft: Option<String>,

        /// Section name (see `sections`); omit to generate the full report
        #[arg(long)]
        section: Option<String>,

        /// Output directory for the generated JSON files
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Run every section assembler against a draft and report pass/fail
    Validate {
        /// Path to the draft snapshot file
        #[arg(long)]
        draft: Option<String>,
    },

    /// List the section catalog
    Sections,

    /// Inspect or clear a saved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Summarize the draft's inputs and staged lists
    Show {
        /// Path to the draft snapshot file
        #[arg(long)]
        file: Option<String>,
    },

    /// Delete the draft (asks for confirmation unless --yes)
    Clear {
        /// Path to the draft snapshot file
        #[arg(long)]
        file: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `prestacao.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_draft")]
    pub draft: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: "out".to_string(),
            draft: "rascunho.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default = "default_trace_file")]
    pub file: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            file: "prestacao_trace.jsonl".to_string(),
        }
    }
}

// Serde default helpers
fn default_output_dir() -> String { "out".to_string() }
fn default_draft() -> String { "rascunho.json".to_string() }
fn default_trace_file() -> String { "prestacao_trace.jsonl".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("prestacao.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
