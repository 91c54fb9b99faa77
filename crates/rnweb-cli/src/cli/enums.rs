use clap::ValueEnum;
use rnweb_config::Mode;

/// Build mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// `__DEV__` is true and `NODE_ENV` is "development"
    #[value(name = "development", alias = "dev")]
    Development,

    /// `__DEV__` is false and `NODE_ENV` is "production"
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
