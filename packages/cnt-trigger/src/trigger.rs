use anyhow::{Context, Result};
use cosmos::{
    proto::cosmos::base::abci::v1beta1::TxResponse, Address, AddressHrp, Contract, Cosmos,
    HasAddress, HasAddressHrp, HasContract, HasCosmos, TxBuilder, Wallet,
};

use crate::{
    cli::FeeOpt,
    msg::{CountResponse, CounterQueryMsg, ExecuteMsg, FollowTarget, QueryMsg, QueryPointerResponse},
};

/// Typed client for a deployed trigger contract.
#[derive(Clone)]
pub(crate) struct CntTrigger(Contract);

impl CntTrigger {
    pub(crate) fn new(cosmos: &Cosmos, address: Address) -> Self {
        CntTrigger(cosmos.make_contract(address))
    }

    pub(crate) async fn query_with_smart_query(
        &self,
        target: Address,
    ) -> Result<QueryPointerResponse> {
        Ok(self
            .0
            .query(QueryMsg::QueryWithSmartQuery {
                contract_addr: target,
            })
            .await?)
    }

    pub(crate) async fn query_with_raw_query(
        &self,
        target: Address,
    ) -> Result<QueryPointerResponse> {
        Ok(self
            .0
            .query(QueryMsg::QueryWithRawQuery {
                contract_addr: target,
            })
            .await?)
    }

    pub(crate) async fn set_with_msg(
        &self,
        wallet: &Wallet,
        target: Address,
        count: u8,
        memo: Option<String>,
        fee: &FeeOpt,
    ) -> Result<TxResponse> {
        self.execute(
            wallet,
            ExecuteMsg::SetWithMsg {
                contract_addr: target,
                count,
            },
            memo,
            fee,
        )
        .await
    }

    pub(crate) async fn set_with_sub_msg(
        &self,
        wallet: &Wallet,
        target: Address,
        count: u8,
        id: u64,
        memo: Option<String>,
        fee: &FeeOpt,
    ) -> Result<TxResponse> {
        self.execute(
            wallet,
            ExecuteMsg::SetWithSubMsg {
                contract_addr: target,
                count,
                id,
            },
            memo,
            fee,
        )
        .await
    }

    async fn execute(
        &self,
        wallet: &Wallet,
        msg: ExecuteMsg,
        memo: Option<String>,
        fee: &FeeOpt,
    ) -> Result<TxResponse> {
        let mut builder = TxBuilder::default();
        builder.add_execute_message(&self.0, wallet, vec![], &msg)?;
        builder.set_optional_memo(memo);
        let res = if fee.simulate {
            builder.sign_and_broadcast(self.get_cosmos(), wallet).await?
        } else {
            builder
                .sign_and_broadcast_with_gas(self.get_cosmos(), wallet, fee.gas)
                .await?
        };
        Ok(res)
    }

    /// Dispatch the wasm query described by a trigger query response and
    /// return whatever state it resolves to.
    pub(crate) async fn follow(&self, resp: &QueryPointerResponse) -> Result<serde_json::Value> {
        match resp.follow_target()? {
            FollowTarget::Smart { contract, msg } => {
                let contract = self.get_cosmos().make_contract(contract);
                let bytes = contract.query_rendered_bytes(msg.to_vec()).await?;
                serde_json::from_slice(&bytes)
                    .with_context(|| format!("non-JSON smart query response from {contract}"))
            }
            FollowTarget::Raw { contract, key } => {
                let contract = self.get_cosmos().make_contract(contract);
                let bytes = contract.query_raw(key.to_vec()).await?;
                if bytes.is_empty() {
                    // No value stored under that key.
                    return Ok(serde_json::Value::Null);
                }
                serde_json::from_slice(&bytes)
                    .with_context(|| format!("non-JSON raw storage value in {contract}"))
            }
        }
    }
}

impl HasAddressHrp for CntTrigger {
    fn get_address_hrp(&self) -> AddressHrp {
        self.0.get_address_hrp()
    }
}

impl HasAddress for CntTrigger {
    fn get_address(&self) -> Address {
        self.0.get_address()
    }
}

impl HasCosmos for CntTrigger {
    fn get_cosmos(&self) -> &Cosmos {
        self.0.get_cosmos()
    }
}

impl HasContract for CntTrigger {
    fn get_contract(&self) -> &Contract {
        &self.0
    }
}

/// Typed client for the counter contract itself.
#[derive(Clone)]
pub(crate) struct Counter(Contract);

impl Counter {
    pub(crate) fn new(cosmos: &Cosmos, address: Address) -> Self {
        Counter(cosmos.make_contract(address))
    }

    pub(crate) async fn get_count(&self) -> Result<CountResponse> {
        Ok(self.0.query(CounterQueryMsg::GetCount {}).await?)
    }
}
