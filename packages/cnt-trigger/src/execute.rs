use anyhow::Result;
use cosmos::{
    proto::cosmos::base::abci::v1beta1::TxResponse, Address, Cosmos, HasAddress, HasAddressHrp,
};

use crate::{
    cli::{FeeOpt, TxOpt},
    events::WasmEventExt,
    trigger::CntTrigger,
};

#[derive(clap::Parser)]
pub(crate) struct SetOpt {
    /// Trigger contract address
    #[clap(long, env = "TRIGGER_CONTRACT")]
    trigger: Address,
    /// Contract the trigger forwards the set to. Defaults to the trigger
    /// contract itself.
    #[clap(long, env = "COUNTER_CONTRACT")]
    counter: Option<Address>,
    /// Count to set
    #[clap(long)]
    count: u8,
    #[clap(flatten)]
    tx_opt: TxOpt,
    #[clap(flatten)]
    fee_opt: FeeOpt,
}

pub(crate) async fn set_with_msg(cosmos: Cosmos, opt: SetOpt) -> Result<()> {
    let SetOpt {
        trigger,
        counter,
        count,
        tx_opt,
        fee_opt,
    } = opt;
    let target = counter.unwrap_or(trigger);
    let wallet = tx_opt.get_wallet(cosmos.get_address_hrp())?;
    let trigger = CntTrigger::new(&cosmos, trigger);
    let res = trigger
        .set_with_msg(&wallet, target, count, tx_opt.memo, &fee_opt)
        .await?;
    print_wasm_event(&trigger, &res)
}

pub(crate) async fn set_with_sub_msg(cosmos: Cosmos, opt: SetOpt, id: u64) -> Result<()> {
    let SetOpt {
        trigger,
        counter,
        count,
        tx_opt,
        fee_opt,
    } = opt;
    let target = counter.unwrap_or(trigger);
    let wallet = tx_opt.get_wallet(cosmos.get_address_hrp())?;
    let trigger = CntTrigger::new(&cosmos, trigger);
    let res = trigger
        .set_with_sub_msg(&wallet, target, count, id, tx_opt.memo, &fee_opt)
        .await?;
    print_wasm_event(&trigger, &res)
}

pub(crate) fn print_wasm_event(trigger: &CntTrigger, res: &TxResponse) -> Result<()> {
    tracing::info!("Executed in {}", res.txhash);
    for (key, value) in res.wasm_attributes(trigger.get_address())? {
        println!("{key}: {value}");
    }
    Ok(())
}
