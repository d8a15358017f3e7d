use anyhow::{anyhow, Result};
use cosmos::{proto::cosmos::base::abci::v1beta1::TxResponse, HasAddress};

const WASM_EVENT_TYPE: &str = "wasm";
const CONTRACT_ADDRESS_KEY: &str = "_contract_address";

/// Extension trait to look up wasm event attributes in a [TxResponse] by
/// name.
///
/// Lookup is by event type and attribute key only. The position of an event
/// within the transaction log is not part of the contract's interface and
/// changes between chain versions.
pub(crate) trait WasmEventExt {
    /// All attributes of the wasm event emitted by the given contract, in
    /// emission order.
    fn wasm_attributes(&self, contract: impl HasAddress) -> Result<Vec<(String, String)>>;

    /// A single attribute of the given contract's wasm event.
    fn wasm_attribute(&self, contract: impl HasAddress, key: &str) -> Result<String>;
}

impl WasmEventExt for TxResponse {
    fn wasm_attributes(&self, contract: impl HasAddress) -> Result<Vec<(String, String)>> {
        let address = contract.get_address().to_string();

        for log in &self.logs {
            for event in &log.events {
                if event.r#type != WASM_EVENT_TYPE {
                    continue;
                }
                let is_ours = event.attributes.iter().any(|attr| {
                    attr.key == CONTRACT_ADDRESS_KEY && strip_quotes(&attr.value) == address
                });
                if !is_ours {
                    continue;
                }
                return Ok(event
                    .attributes
                    .iter()
                    .map(|attr| (attr.key.clone(), strip_quotes(&attr.value).to_owned()))
                    .collect());
            }
        }

        Err(anyhow!(
            "no wasm event emitted by {address} in transaction {}",
            self.txhash
        ))
    }

    fn wasm_attribute(&self, contract: impl HasAddress, key: &str) -> Result<String> {
        let contract = contract.get_address();
        self.wasm_attributes(contract)?
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
            .ok_or_else(|| {
                anyhow!(
                    "wasm event from {contract} has no attribute {key:?} in transaction {}",
                    self.txhash
                )
            })
    }
}

// Older chains wrap string attribute values in JSON quotes.
fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('\"')
        .and_then(|s| s.strip_suffix('\"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use cosmos::proto::cosmos::base::abci::v1beta1::{AbciMessageLog, Attribute, StringEvent};
    use cosmos::Address;

    use super::*;

    pub const CONTRACT_ADDR: &str = "juno1gjqnuhv52pd2a7ets2vhw9w9qa9knyhyqd4qeg";
    pub const ALICE_ADDR: &str = "juno1chgwz55h9kepjq0fkj5supl2ta3nwu638camkg";
    const TXHASH: &str = "A9E1B6F5E8D3FFA22A2F61FBA1B9363863ED0220A468B51BF47DA3A3FB5B0F46";

    fn contract() -> Address {
        CONTRACT_ADDR.parse().unwrap()
    }

    fn attrs(pairs: &[(&str, &str)]) -> Vec<Attribute> {
        pairs
            .iter()
            .map(|(key, value)| Attribute {
                key: (*key).to_owned(),
                value: (*value).to_owned(),
            })
            .collect()
    }

    fn event(r#type: &str, pairs: &[(&str, &str)]) -> StringEvent {
        StringEvent {
            r#type: r#type.to_owned(),
            attributes: attrs(pairs),
        }
    }

    fn set_with_msg_events() -> Vec<StringEvent> {
        vec![
            event("message", &[("action", "/cosmwasm.wasm.v1.MsgExecuteContract")]),
            event("execute", &[("_contract_address", CONTRACT_ADDR)]),
            event(
                "wasm",
                &[
                    ("_contract_address", CONTRACT_ADDR),
                    ("method", "set_with_msg"),
                    ("expected_count", "111"),
                ],
            ),
            event("coin_spent", &[("spender", ALICE_ADDR)]),
        ]
    }

    fn response(events: Vec<StringEvent>) -> TxResponse {
        TxResponse {
            txhash: TXHASH.to_owned(),
            logs: vec![AbciMessageLog {
                msg_index: 0,
                log: String::new(),
                events,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn finds_wasm_event_by_name() {
        let res = response(set_with_msg_events());
        assert_eq!(
            res.wasm_attributes(contract()).unwrap(),
            vec![
                ("_contract_address".to_owned(), CONTRACT_ADDR.to_owned()),
                ("method".to_owned(), "set_with_msg".to_owned()),
                ("expected_count".to_owned(), "111".to_owned()),
            ]
        );
    }

    #[test]
    fn single_attribute_lookup() {
        let res = response(set_with_msg_events());
        assert_eq!(res.wasm_attribute(contract(), "method").unwrap(), "set_with_msg");
        assert_eq!(res.wasm_attribute(contract(), "expected_count").unwrap(), "111");
        res.wasm_attribute(contract(), "missing").unwrap_err();
    }

    #[test]
    fn strips_quoted_values() {
        let quoted = format!("\"{CONTRACT_ADDR}\"");
        let res = response(vec![event(
            "wasm",
            &[("_contract_address", &quoted), ("method", "\"set_with_msg\"")],
        )]);
        assert_eq!(
            res.wasm_attributes(contract()).unwrap(),
            vec![
                ("_contract_address".to_owned(), CONTRACT_ADDR.to_owned()),
                ("method".to_owned(), "set_with_msg".to_owned()),
            ]
        );
    }

    #[test]
    fn ignores_other_contracts() {
        let res = response(vec![event(
            "wasm",
            &[("_contract_address", ALICE_ADDR), ("method", "set")],
        )]);
        res.wasm_attributes(contract()).unwrap_err();
    }

    #[test]
    fn no_wasm_event() {
        let res = response(vec![event(
            "message",
            &[("action", "/cosmwasm.wasm.v1.MsgExecuteContract")],
        )]);
        res.wasm_attributes(contract()).unwrap_err();
    }

    #[test]
    fn scans_later_logs() {
        let res = TxResponse {
            txhash: TXHASH.to_owned(),
            logs: vec![
                AbciMessageLog {
                    msg_index: 0,
                    log: String::new(),
                    events: vec![event("message", &[])],
                },
                AbciMessageLog {
                    msg_index: 1,
                    log: String::new(),
                    events: set_with_msg_events(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            res.wasm_attribute(contract(), "method").unwrap(),
            "set_with_msg"
        );
    }

    quickcheck::quickcheck! {
        fn lookup_ignores_event_order(rotation: usize) -> bool {
            let mut events = set_with_msg_events();
            let len = events.len();
            events.rotate_left(rotation % len);
            let res = response(events);
            res.wasm_attributes(contract()).unwrap()
                == vec![
                    ("_contract_address".to_owned(), CONTRACT_ADDR.to_owned()),
                    ("method".to_owned(), "set_with_msg".to_owned()),
                    ("expected_count".to_owned(), "111".to_owned()),
                ]
        }
    }
}
