mod describe;
mod manifest;

use crate::Cli;
use crate::CommandResult;
use describe::DescribeCmd;
use manifest::ManifestCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlgen")]
pub(crate) enum CommandEnum {
    /// Parse query/mutation documents and emit their descriptors as JSON.
    Describe(Box<DescribeCmd>),

    /// Generate the registry manifest for a provider release.
    Manifest(Box<ManifestCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Describe(cmd) => cmd.run(cli).await,
            Self::Manifest(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
