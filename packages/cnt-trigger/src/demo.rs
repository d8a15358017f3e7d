use anyhow::Result;
use cosmos::{
    proto::cosmos::base::abci::v1beta1::TxResponse, Address, Cosmos, HasAddress, HasAddressHrp,
};

use crate::{
    cli::{FeeOpt, TxOpt},
    events::WasmEventExt,
    execute, query,
    trigger::CntTrigger,
};

/// Counts submitted by the two demonstration steps.
const SET_WITH_MSG_COUNT: u8 = 111;
const SET_WITH_SUB_MSG_COUNT: u8 = 222;

#[derive(clap::Parser)]
pub(crate) struct Opt {
    /// Trigger contract address
    #[clap(long, env = "TRIGGER_CONTRACT")]
    trigger: Address,
    /// Contract the trigger forwards to. Defaults to the trigger contract
    /// itself.
    #[clap(long, env = "COUNTER_CONTRACT")]
    counter: Option<Address>,
    /// Sub-message reply ID
    #[clap(long, default_value_t = 1)]
    id: u64,
    #[clap(flatten)]
    tx_opt: TxOpt,
    #[clap(flatten)]
    fee_opt: FeeOpt,
}

/// Run the whole demonstration: query, set via plain message, query, set
/// via sub-message, query. Strictly sequential, one network call in flight
/// at a time.
pub(crate) async fn go(cosmos: Cosmos, opt: Opt) -> Result<()> {
    let Opt {
        trigger,
        counter,
        id,
        tx_opt,
        fee_opt,
    } = opt;
    let target = counter.unwrap_or(trigger);
    let wallet = tx_opt.get_wallet(cosmos.get_address_hrp())?;
    let trigger = CntTrigger::new(&cosmos, trigger);

    let resp = trigger.query_with_smart_query(target).await?;
    query::print_followed(&trigger, &resp).await?;

    tracing::info!("Setting count to {SET_WITH_MSG_COUNT} with a plain message");
    let res = trigger
        .set_with_msg(
            &wallet,
            target,
            SET_WITH_MSG_COUNT,
            tx_opt.memo.clone(),
            &fee_opt,
        )
        .await?;
    execute::print_wasm_event(&trigger, &res)?;
    check_expected_count(&trigger, &res, SET_WITH_MSG_COUNT)?;

    let resp = trigger.query_with_smart_query(target).await?;
    query::print_followed(&trigger, &resp).await?;

    tracing::info!("Setting count to {SET_WITH_SUB_MSG_COUNT} with a sub-message, reply ID {id}");
    let res = trigger
        .set_with_sub_msg(
            &wallet,
            target,
            SET_WITH_SUB_MSG_COUNT,
            id,
            tx_opt.memo,
            &fee_opt,
        )
        .await?;
    execute::print_wasm_event(&trigger, &res)?;
    check_expected_count(&trigger, &res, SET_WITH_SUB_MSG_COUNT)?;

    let resp = trigger.query_with_smart_query(target).await?;
    query::print_followed(&trigger, &resp).await?;

    Ok(())
}

fn check_expected_count(trigger: &CntTrigger, res: &TxResponse, count: u8) -> Result<()> {
    let reported = res.wasm_attribute(trigger.get_address(), "expected_count")?;
    anyhow::ensure!(
        reported == count.to_string(),
        "contract reported expected_count {reported}, submitted {count}"
    );
    Ok(())
}
