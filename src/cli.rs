use std::path::PathBuf;

use clap::Parser;

use crate::config::{Action, Overrides};

/// org-capture - Capture a line of text into an org-mode inbox
///
/// # Quick Reference
///
/// ```bash
/// org-capture "Buy milk"                          # * TODO Buy milk
/// org-capture "#a Call bank:: tomorrow  ask about fees"
/// org-capture -a note "Rust tip:: use split_once"
/// org-capture -a inspiration "Blog post idea"
/// echo "Pay rent:: DL: 1.2" | org-capture -
/// org-capture --dry-run "Plan trip:: DL: Monday"  # print, do not write
/// ```
///
/// ## Capture Syntax
///
/// - `heading:: body` splits heading from body (delimiter configurable)
/// - `#a` in the heading becomes the priority cookie `[#A]`
/// - `today`, `tomorrow`, weekday names (English or German) become dates
/// - `1.10`, `1.10.2025`, `1.10 15:00` become org timestamps
/// - `DL: <date>` / `S: <date>` become DEADLINE / SCHEDULED
/// - two spaces in the body start a new line
///
/// ## Environment Variables
///
/// - `todos_inbox`, `notes_inbox`, `inspirations_inbox`: inbox file per action
/// - `todos_heading_level`, ...: heading depth per action
/// - `delimiter`, `use_priority_tags`, `add_creation_date`, ...: format options ("1" = on)
/// - `ORG_CAPTURE_CONFIG`: YAML config file
/// - `ORG_CAPTURE_TIMESTAMP`: fixed "now" as `YYYY-MM-DD HH:MM`
/// - `ORG_CAPTURE_LOG`: log filter, e.g. `debug`
#[derive(Parser, Debug)]
#[command(name = "org-capture")]
#[command(version)]
#[command(about = "Capture a line of text into an org-mode inbox")]
pub struct Cli {
    /// Text to capture; "-" or nothing reads stdin
    pub text: Vec<String>,

    /// Kind of capture, selects inbox and heading level
    #[arg(short, long, value_enum, default_value_t = Action::Todo)]
    pub action: Action,

    /// Inbox file (overrides the environment)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Heading level (overrides the environment)
    #[arg(short, long, value_name = "N")]
    pub level: Option<usize>,

    /// YAML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the entry instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Command line values that override the other config layers
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            file: self.file.clone(),
            heading_level: self.level,
        }
    }

    /// Capture text from the arguments, `None` when it should come from stdin
    pub fn inline_text(&self) -> Option<String> {
        match self.text.as_slice() {
            [] => None,
            [single] if single == "-" => None,
            words => Some(words.join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["org-capture", "Buy", "milk"]).unwrap();
        assert_eq!(cli.action, Action::Todo);
        assert_eq!(cli.inline_text().as_deref(), Some("Buy milk"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "org-capture", "-a", "inspiration", "-f", "/tmp/ideas.org", "-l", "2", "--dry-run", "--json",
            "Idea:: details",
        ])
        .unwrap();
        assert_eq!(cli.action, Action::Inspiration);
        assert!(cli.dry_run && cli.json);
        let overrides = cli.overrides();
        assert_eq!(overrides.file, Some(PathBuf::from("/tmp/ideas.org")));
        assert_eq!(overrides.heading_level, Some(2));
        assert_eq!(cli.inline_text().as_deref(), Some("Idea:: details"));
    }

    #[test]
    fn test_stdin_markers() {
        let cli = Cli::try_parse_from(["org-capture", "-"]).unwrap();
        assert_eq!(cli.inline_text(), None);
        let cli = Cli::try_parse_from(["org-capture"]).unwrap();
        assert_eq!(cli.inline_text(), None);
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(Cli::try_parse_from(["org-capture", "-a", "journal", "x"]).is_err());
    }
}
