use anyhow::Result;
use cosmos::{AddressHrp, SeedPhrase};

#[derive(clap::Parser)]
pub(crate) struct Opt {
    #[clap(subcommand)]
    sub: Subcommand,
}

#[derive(clap::Parser)]
enum Subcommand {
    /// Generate a fresh wallet
    Gen {
        /// Address prefix, e.g. juno
        #[clap(default_value = "juno")]
        hrp: AddressHrp,
    },
    /// Print the address for the given phrase
    PrintAddress {
        /// HRP (human readable part) of the address, e.g. juno
        hrp: AddressHrp,
        /// Phrase
        phrase: SeedPhrase,
    },
}

pub(crate) fn go(Opt { sub }: Opt) -> Result<()> {
    match sub {
        Subcommand::Gen { hrp } => {
            let phrase = SeedPhrase::random();
            let wallet = phrase.with_hrp(hrp)?;
            println!("Mnemonic: {}", phrase.phrase());
            println!("Address: {wallet}");
            println!("Public Key: {}", hex::encode(wallet.public_key_bytes()));
        }
        Subcommand::PrintAddress { hrp, phrase } => {
            println!("{}", phrase.with_hrp(hrp)?);
        }
    }
    Ok(())
}
