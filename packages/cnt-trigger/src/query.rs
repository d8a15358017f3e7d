use anyhow::Result;
use cosmos::{Address, Cosmos};

use crate::{
    msg::{CountResponse, QueryPointerResponse},
    trigger::{CntTrigger, Counter},
};

#[derive(clap::Parser)]
pub(crate) struct QueryOpt {
    /// Trigger contract address
    #[clap(long, env = "TRIGGER_CONTRACT")]
    trigger: Address,
    /// Contract the returned wasm query should point at. Defaults to the
    /// trigger contract itself.
    #[clap(long, env = "COUNTER_CONTRACT")]
    counter: Option<Address>,
}

pub(crate) async fn smart(cosmos: Cosmos, opt: QueryOpt) -> Result<()> {
    let QueryOpt { trigger, counter } = opt;
    let target = counter.unwrap_or(trigger);
    let trigger = CntTrigger::new(&cosmos, trigger);
    let resp = trigger.query_with_smart_query(target).await?;
    print_followed(&trigger, &resp).await
}

pub(crate) async fn raw(cosmos: Cosmos, opt: QueryOpt) -> Result<()> {
    let QueryOpt { trigger, counter } = opt;
    let target = counter.unwrap_or(trigger);
    let trigger = CntTrigger::new(&cosmos, trigger);
    let resp = trigger.query_with_raw_query(target).await?;
    print_followed(&trigger, &resp).await
}

pub(crate) async fn get_count(cosmos: Cosmos, counter: Address) -> Result<()> {
    let counter = Counter::new(&cosmos, counter);
    let CountResponse { count } = counter.get_count().await?;
    println!("{count}");
    Ok(())
}

/// Print the query descriptor the trigger returned, then the state it
/// resolves to.
pub(crate) async fn print_followed(
    trigger: &CntTrigger,
    resp: &QueryPointerResponse,
) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(resp)?);
    let state = trigger.follow(resp).await?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
