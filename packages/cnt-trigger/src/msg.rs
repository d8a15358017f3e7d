use anyhow::{Context, Result};
use cosmos::Address;
use cosmwasm_std::{Binary, Empty, QueryRequest, WasmQuery};
use serde::{Deserialize, Serialize};

/// Execute schema of the trigger contract.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ExecuteMsg {
    SetWithMsg {
        contract_addr: Address,
        count: u8,
    },
    SetWithSubMsg {
        contract_addr: Address,
        count: u8,
        id: u64,
    },
}

/// Query schema of the trigger contract.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum QueryMsg {
    QueryWithSmartQuery { contract_addr: Address },
    QueryWithRawQuery { contract_addr: Address },
}

/// Both trigger queries answer with a descriptor of the wasm query to
/// perform next, not with counter state itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub(crate) struct QueryPointerResponse {
    pub(crate) data: QueryRequest<Empty>,
}

/// Query schema of the counter contract the trigger forwards to.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CounterQueryMsg {
    GetCount {},
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub(crate) struct CountResponse {
    pub(crate) count: u8,
}

/// A [QueryPointerResponse] resolved to something we can actually send.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FollowTarget {
    Smart { contract: Address, msg: Binary },
    Raw { contract: Address, key: Binary },
}

impl QueryPointerResponse {
    pub(crate) fn follow_target(&self) -> Result<FollowTarget> {
        match &self.data {
            QueryRequest::Wasm(WasmQuery::Smart { contract_addr, msg }) => {
                Ok(FollowTarget::Smart {
                    contract: parse_contract_addr(contract_addr)?,
                    msg: msg.clone(),
                })
            }
            QueryRequest::Wasm(WasmQuery::Raw { contract_addr, key }) => Ok(FollowTarget::Raw {
                contract: parse_contract_addr(contract_addr)?,
                key: key.clone(),
            }),
            other => Err(anyhow::anyhow!(
                "query response does not describe a followable wasm query: {other:?}"
            )),
        }
    }
}

fn parse_contract_addr(contract_addr: &str) -> Result<Address> {
    contract_addr
        .parse()
        .with_context(|| format!("invalid contract address in query response: {contract_addr}"))
}
