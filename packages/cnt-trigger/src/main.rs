mod cli;
mod demo;
mod events;
mod execute;
mod msg;
mod query;
mod trigger;
mod wallet;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Subcommand;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = cli::Cmd::parse();
    cmd.opt.init_logger()?;

    tracing::debug!("Verbose logging enabled");

    cmd.subcommand.go(cmd.opt).await
}

impl Subcommand {
    pub(crate) async fn go(self, opt: cli::Opt) -> Result<()> {
        match self {
            Subcommand::Demo { opt: inner } => {
                let cosmos = opt.network_opt.build().await?;
                demo::go(cosmos, inner).await?;
            }
            Subcommand::SmartQuery { opt: inner } => {
                let cosmos = opt.network_opt.build().await?;
                query::smart(cosmos, inner).await?;
            }
            Subcommand::RawQuery { opt: inner } => {
                let cosmos = opt.network_opt.build().await?;
                query::raw(cosmos, inner).await?;
            }
            Subcommand::GetCount { counter } => {
                let cosmos = opt.network_opt.build().await?;
                query::get_count(cosmos, counter).await?;
            }
            Subcommand::SetWithMsg { opt: inner } => {
                let cosmos = opt.network_opt.build().await?;
                execute::set_with_msg(cosmos, inner).await?;
            }
            Subcommand::SetWithSubMsg { opt: inner, id } => {
                let cosmos = opt.network_opt.build().await?;
                execute::set_with_sub_msg(cosmos, inner, id).await?;
            }
            Subcommand::Wallet { opt: inner } => {
                wallet::go(inner)?;
            }
            Subcommand::GenerateShellCompletions { shell } => {
                clap_complete::generate(
                    shell,
                    &mut Subcommand::command(),
                    "cnt-trigger",
                    &mut std::io::stdout(),
                );
            }
        }

        Ok(())
    }
}
