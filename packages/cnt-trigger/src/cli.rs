use anyhow::Result;
use cosmos::{clap::CosmosOpt, error::WalletError, Address, AddressHrp, SeedPhrase, Wallet};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{demo, execute, query, wallet};

/// Command line tool for driving the cnt-trigger demonstration contract
#[derive(clap::Parser)]
pub(crate) struct Cmd {
    #[clap(flatten)]
    pub(crate) opt: Opt,
    #[clap(subcommand)]
    pub(crate) subcommand: Subcommand,
}

#[derive(clap::Parser)]
pub(crate) struct Opt {
    #[clap(flatten)]
    pub(crate) network_opt: CosmosOpt,
    /// Turn on verbose output
    #[clap(long, short, global = true)]
    verbose: bool,
}

impl Opt {
    pub(crate) fn init_logger(&self) -> Result<()> {
        let mut filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

        if self.verbose {
            filter = filter.add_directive("cosmos=debug".parse()?);
            filter = filter.add_directive(format!("{}=debug", env!("CARGO_CRATE_NAME")).parse()?);
        };

        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(std::io::stderr)
                .and_then(filter),
        );

        subscriber.init();
        Ok(())
    }
}

#[derive(clap::Parser)]
pub(crate) struct TxOpt {
    /// Mnemonic phrase
    #[clap(long, env = "COSMOS_WALLET")]
    pub(crate) wallet: SeedPhrase,
    /// Memo to put on transaction
    #[clap(long)]
    pub(crate) memo: Option<String>,
}

impl TxOpt {
    pub(crate) fn get_wallet(&self, hrp: AddressHrp) -> Result<Wallet, WalletError> {
        self.wallet.with_hrp(hrp)
    }
}

#[derive(clap::Parser)]
pub(crate) struct FeeOpt {
    /// Gas limit to authorize for each execute
    #[clap(long, default_value_t = 250_000)]
    pub(crate) gas: u64,
    /// Estimate gas by simulation instead of using the fixed limit
    #[clap(long)]
    pub(crate) simulate: bool,
}

#[derive(clap::Parser)]
pub(crate) enum Subcommand {
    /// Run the full demonstration flow against the trigger contract
    Demo {
        #[clap(flatten)]
        opt: demo::Opt,
    },
    /// Query the trigger contract and follow the returned smart query
    SmartQuery {
        #[clap(flatten)]
        opt: query::QueryOpt,
    },
    /// Query the trigger contract and follow the returned raw storage lookup
    RawQuery {
        #[clap(flatten)]
        opt: query::QueryOpt,
    },
    /// Query the counter contract's count directly
    GetCount {
        /// Counter contract address
        #[clap(long, env = "COUNTER_CONTRACT")]
        counter: Address,
    },
    /// Tell the trigger contract to set the count via a plain message
    SetWithMsg {
        #[clap(flatten)]
        opt: execute::SetOpt,
    },
    /// Tell the trigger contract to set the count via a sub-message,
    /// exercising its reply callback
    SetWithSubMsg {
        #[clap(flatten)]
        opt: execute::SetOpt,
        /// Sub-message reply ID
        #[clap(long, default_value_t = 1)]
        id: u64,
    },
    /// Wallet utilities
    Wallet {
        #[clap(flatten)]
        opt: wallet::Opt,
    },
    /// Generate bash shell completion script
    GenerateShellCompletions {
        /// Which shell to generate for
        #[clap(default_value_t = clap_complete::Shell::Bash)]
        shell: clap_complete::Shell,
    },
}
