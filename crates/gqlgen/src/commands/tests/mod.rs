mod describe_tests;

use crate::Cli;
use crate::commands::CommandEnum;
use clap::Parser;

pub(super) fn parse_command(args: &[&str]) -> CommandEnum {
    let mut cli = Cli::try_parse_from(
        std::iter::once("gqlgen").chain(args.iter().copied()),
    ).unwrap();
    cli.cmd.take().unwrap()
}
