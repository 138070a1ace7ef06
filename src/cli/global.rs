use base62_id::{LogLevel, Settings};
use clap::{ArgAction, Args};

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Report failed items and continue with the rest
    #[arg(short = 'k', long, global = true)]
    pub keep_going: bool,

    /// More diagnostic output (repeat for more)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Log level from flags alone, used while configuration is loading.
    pub fn bootstrap_level(&self) -> LogLevel {
        self.level_from(LogLevel::default())
    }

    pub fn log_level(&self, settings: &Settings) -> LogLevel {
        self.level_from(settings.log_level)
    }

    pub fn keep_going(&self, settings: &Settings) -> bool {
        self.keep_going || settings.keep_going
    }

    fn level_from(&self, base: LogLevel) -> LogLevel {
        if self.quiet {
            LogLevel::Error
        } else {
            base.raised(self.verbose)
        }
    }
}
