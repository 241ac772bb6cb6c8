use clap::Parser;

pub const USAGE: &str = "extract-changelog <version>";
pub const EXAMPLE: &str = "extract-changelog 0.1.0";

#[derive(Parser, Debug)]
#[command(name = "extract-changelog")]
#[command(
    author,
    version,
    override_usage = USAGE,
    about = "Print the release notes for a version from CHANGES.yaml as markdown"
)]
pub struct Cli {
    /// Version to extract, with or without a leading `v` (e.g. 0.1.0 or v0.1.0)
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub release: Option<String>,

    /// Anything after the version is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}
