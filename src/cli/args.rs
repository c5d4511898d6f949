//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::application::ControllerConfig;
use crate::domain::config::{AppConfig, OutputFormat, TerminalConfig};
use crate::domain::whisper::WhisperCategory;

/// whisper-banner - transient auto-dismissing notification banners
#[derive(Parser, Debug)]
#[command(name = "whisper-banner")]
#[command(version)]
#[command(about = "Show transient notification banners that dismiss themselves")]
#[command(long_about = None)]
pub struct Cli {
    /// Message to show in the banner
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Whisper category (success dismisses itself, error stays)
    #[arg(short = 'c', long, value_name = "CATEGORY")]
    pub category: Option<CategoryArg>,

    /// Countdown ticks before a success whisper dismisses itself
    #[arg(short = 't', long, value_name = "COUNT")]
    pub ticks: Option<u32>,

    /// Length of one countdown tick (e.g., 1s, 500ms)
    #[arg(long, value_name = "TIME")]
    pub tick: Option<String>,

    /// Wait between hiding and removing a whisper (e.g., 333ms)
    #[arg(long, value_name = "TIME")]
    pub grace: Option<String>,

    /// Output format for whisper events
    #[arg(short = 'o', long, value_name = "FORMAT")]
    pub output: Option<OutputArg>,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config values given on the command line
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            dismissal_ticks: self.ticks,
            tick: self.tick.clone(),
            grace: self.grace.clone(),
            category: self.category.map(|c| WhisperCategory::from(c).to_string()),
            terminal: self.output.map(|o| TerminalConfig {
                output: Some(OutputFormat::from(o).to_string()),
                color: None,
            }),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Run a scripted tour of whispers and alerts
    Demo,
    /// Drive whispers and alerts with line commands on stdin
    Interactive,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Category argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Success,
    Error,
}

impl From<CategoryArg> for WhisperCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Success => WhisperCategory::Success,
            CategoryArg::Error => WhisperCategory::Error,
        }
    }
}

/// Output argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Terminal,
    Json,
    None,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Terminal => OutputFormat::Terminal,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::None => OutputFormat::None,
        }
    }
}

/// Resolved options shared by the show, demo and interactive runners
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub controller: ControllerConfig,
    pub output: OutputFormat,
    pub category: WhisperCategory,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "dismissal_ticks",
    "tick",
    "grace",
    "category",
    "terminal.output",
    "terminal.color",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
