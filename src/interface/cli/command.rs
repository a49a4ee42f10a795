//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::options::{CiRunOptions, ClientOverrides, TaskInput, TaskRunOptions};
use crate::domain::task::TaskKind;

#[derive(Debug, Parser)]
#[command(name = "reviewer")]
#[command(about = "Review, document, optimize and test code snippets with an OpenAI completion model")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Model identifier (overrides config)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Maximum completion tokens (overrides config)
    #[arg(long, global = true)]
    max_tokens: Option<u32>,
}

#[derive(Debug, Args, Default)]
struct InputArgs {
    /// Inline code snippet (reads stdin until EOF when neither --code nor --file is given)
    #[arg(long, conflicts_with = "file")]
    code: Option<String>,

    /// Read the code snippet from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Review code and suggest improvements (default)
    Review {
        #[command(flatten)]
        input: InputArgs,
        /// Use the legacy engine-scoped completions route
        #[arg(long)]
        legacy: bool,
    },
    /// Report bugs, improvements and anti-patterns
    Assist {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Generate JSDoc documentation
    Document {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Optimize code for performance and readability
    Optimize {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Generate unit tests
    Tests {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Analyze code for security vulnerabilities
    Security {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Recommend style improvements
    Style {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Analyze change history of a repository path, or of a diff from --file/stdin
    History {
        /// Repository path
        #[arg(conflicts_with_all = ["code", "file"])]
        path: Option<String>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List models available to the configured API key
    Models,
    /// Review the diff against the upstream branch (git fetch + git diff)
    Ci {
        /// Remote name (default: origin)
        #[arg(long)]
        remote: Option<String>,
        /// Upstream branch (default: develop)
        #[arg(long)]
        base: Option<String>,
        /// File to save the diff to (default: pr.diff)
        #[arg(long)]
        output: Option<String>,
        /// Do not save the diff to a file
        #[arg(long, conflicts_with = "output")]
        no_diff_file: bool,
    },
    /// Show effective merged config and credential source
    Config,
}

pub enum CliAction {
    RunTask(TaskRunOptions),
    ReviewCi(CiRunOptions),
    ListModels(ClientOverrides),
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    /// 인자 목록으로 파싱한다(테스트/임베딩용).
    pub fn parse_action_from<I, T>(args: I) -> Result<CliAction, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args)
            .map_err(|err| err.to_string())?
            .into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        let overrides = ClientOverrides {
            model: self.model,
            max_tokens: self.max_tokens,
        };
        if overrides.max_tokens == Some(0) {
            return Err("--max-tokens must be greater than zero".to_string());
        }

        let task = |kind: TaskKind, input: InputArgs, legacy: bool| {
            CliAction::RunTask(TaskRunOptions {
                kind,
                input: input.into_task_input(),
                legacy,
                overrides: overrides.clone(),
            })
        };

        let action = match self.command {
            None => task(TaskKind::Review, InputArgs::default(), false),
            Some(Commands::Review { input, legacy }) => task(TaskKind::Review, input, legacy),
            Some(Commands::Assist { input }) => task(TaskKind::AssistedReview, input, false),
            Some(Commands::Document { input }) => task(TaskKind::Document, input, false),
            Some(Commands::Optimize { input }) => task(TaskKind::Optimize, input, false),
            Some(Commands::Tests { input }) => task(TaskKind::GenerateTests, input, false),
            Some(Commands::Security { input }) => task(TaskKind::SecurityAnalysis, input, false),
            Some(Commands::Style { input }) => task(TaskKind::StyleRecommendations, input, false),
            Some(Commands::History { path, input }) => {
                let input = match path {
                    Some(path) => InputArgs {
                        code: Some(path),
                        file: None,
                    },
                    None => input,
                };
                task(TaskKind::HistoricalAnalysis, input, false)
            }
            Some(Commands::Models) => CliAction::ListModels(overrides.clone()),
            Some(Commands::Ci {
                remote,
                base,
                output,
                no_diff_file,
            }) => CliAction::ReviewCi(CiRunOptions {
                remote,
                base_branch: base,
                diff_output: output,
                no_diff_file,
                overrides: overrides.clone(),
            }),
            Some(Commands::Config) => CliAction::InspectConfig,
        };

        Ok(action)
    }
}

impl InputArgs {
    fn into_task_input(self) -> TaskInput {
        match (self.code, self.file) {
            (Some(code), _) => TaskInput::Inline(code),
            (None, Some(path)) => TaskInput::File(path),
            (None, None) => TaskInput::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_task(args: &[&str]) -> TaskRunOptions {
        match Cli::parse_action_from(args) {
            Ok(CliAction::RunTask(options)) => options,
            _ => panic!("expected a task action for {args:?}"),
        }
    }

    #[test]
    fn no_subcommand_reviews_stdin() {
        let options = run_task(&["reviewer"]);
        assert_eq!(options.kind, TaskKind::Review);
        assert_eq!(options.input, TaskInput::Stdin);
        assert!(!options.legacy);
    }

    #[test]
    fn task_subcommands_map_to_kinds() {
        let cases = [
            ("assist", TaskKind::AssistedReview),
            ("document", TaskKind::Document),
            ("optimize", TaskKind::Optimize),
            ("tests", TaskKind::GenerateTests),
            ("security", TaskKind::SecurityAnalysis),
            ("style", TaskKind::StyleRecommendations),
        ];
        for (sub, kind) in cases {
            let options = run_task(&["reviewer", sub, "--code", "x"]);
            assert_eq!(options.kind, kind);
            assert_eq!(options.input, TaskInput::Inline("x".to_string()));
        }
    }

    #[test]
    fn global_overrides_and_legacy_flag() {
        let options = run_task(&[
            "reviewer",
            "review",
            "--legacy",
            "--model",
            "davinci-002",
            "--max-tokens",
            "64",
            "--file",
            "a.js",
        ]);
        assert!(options.legacy);
        assert_eq!(options.overrides.model.as_deref(), Some("davinci-002"));
        assert_eq!(options.overrides.max_tokens, Some(64));
        assert_eq!(options.input, TaskInput::File(PathBuf::from("a.js")));
    }

    #[test]
    fn history_path_is_inline_input() {
        let options = run_task(&["reviewer", "history", "./repo"]);
        assert_eq!(options.kind, TaskKind::HistoricalAnalysis);
        assert_eq!(options.input, TaskInput::Inline("./repo".to_string()));
    }

    #[test]
    fn ci_options_are_forwarded() {
        match Cli::parse_action_from(["reviewer", "ci", "--base", "main", "--no-diff-file"]) {
            Ok(CliAction::ReviewCi(options)) => {
                assert_eq!(options.base_branch.as_deref(), Some("main"));
                assert!(options.no_diff_file);
                assert!(options.remote.is_none());
            }
            _ => panic!("expected ci action"),
        }
    }

    #[test]
    fn code_and_file_conflict() {
        assert!(
            Cli::parse_action_from(["reviewer", "optimize", "--code", "x", "--file", "a.js"])
                .is_err()
        );
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        assert!(Cli::parse_action_from(["reviewer", "models", "--max-tokens", "0"]).is_err());
    }
}
