//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{json, Value};

use xrpl_codec_core::amount::{MAX_EXPONENT, MIN_EXPONENT};
use xrpl_codec_core::{AccountId, AmountValue, Currency, Hash256};

/// Generate a random Hash256.
pub fn hash256() -> impl Strategy<Value = Hash256> {
    any::<[u8; 32]>().prop_map(Hash256::from_bytes)
}

/// Generate a random AccountId.
pub fn account_id() -> impl Strategy<Value = AccountId> {
    any::<[u8; 20]>().prop_map(AccountId::from_bytes)
}

/// Generate a three-letter ISO currency other than XRP.
pub fn currency() -> impl Strategy<Value = Currency> {
    "[A-Z]{3}"
        .prop_filter("XRP is native", |code| code != "XRP")
        .prop_map(|code| Currency::from_iso(&code).expect("three letters form a currency"))
}

/// Generate a drop count with at most 16 significant digits.
pub fn drops() -> impl Strategy<Value = u64> {
    prop_oneof![0u64..=1_000_000u64, 0u64..10_000_000_000_000_000u64]
}

/// Generate an issued value with at most 16 significant digits.
pub fn amount_value() -> impl Strategy<Value = AmountValue> {
    (
        1u64..10_000_000_000_000_000u64,
        (MIN_EXPONENT + 16)..=(MAX_EXPONENT - 16),
        any::<bool>(),
    )
        .prop_map(|(mantissa, exponent, negative)| {
            AmountValue::new(mantissa, exponent, negative).expect("exponent kept in range")
        })
}

/// Generate blob bytes of specified max length.
pub fn blob(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Parameters for generating a transaction.
#[derive(Debug, Clone)]
pub struct TxParams {
    pub account: AccountId,
    pub destination: AccountId,
    pub sequence: u32,
    pub fee: u64,
    pub flags: u32,
    pub amount: AmountParams,
    pub invoice_id: Option<Hash256>,
    pub memos: Vec<Vec<u8>>,
}

/// Either side of the amount grammar.
#[derive(Debug, Clone)]
pub enum AmountParams {
    Native(u64),
    Issued {
        value: AmountValue,
        currency: Currency,
        issuer: AccountId,
    },
}

impl AmountParams {
    pub fn to_json(&self) -> Value {
        match self {
            AmountParams::Native(drops) => Value::String(drops.to_string()),
            AmountParams::Issued {
                value,
                currency,
                issuer,
            } => json!({
                "value": value.to_string(),
                "currency": currency.to_json(),
                "issuer": issuer.to_address(),
            }),
        }
    }
}

impl Arbitrary for AmountParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            drops().prop_map(AmountParams::Native),
            (amount_value(), currency(), account_id()).prop_map(|(value, currency, issuer)| {
                AmountParams::Issued {
                    value,
                    currency,
                    issuer,
                }
            }),
        ]
        .boxed()
    }
}

impl Arbitrary for TxParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            account_id(),
            account_id(),
            any::<u32>(),
            0u64..=1_000_000u64, // fee in drops
            any::<u32>(),
            any::<AmountParams>(),
            proptest::option::of(hash256()),
            prop::collection::vec(blob(64), 0..3),
        )
            .prop_map(
                |(account, destination, sequence, fee, flags, amount, invoice_id, memos)| {
                    TxParams {
                        account,
                        destination,
                        sequence,
                        fee,
                        flags,
                        amount,
                        invoice_id,
                        memos,
                    }
                },
            )
            .boxed()
    }
}

/// Build the Payment JSON described by `params`.
pub fn tx_json_from_params(params: &TxParams) -> Value {
    let mut tx = json!({
        "TransactionType": "Payment",
        "Account": params.account.to_address(),
        "Destination": params.destination.to_address(),
        "Sequence": params.sequence,
        "Fee": params.fee.to_string(),
        "Flags": params.flags,
        "Amount": params.amount.to_json(),
    });
    if let Some(invoice_id) = params.invoice_id {
        tx["InvoiceID"] = json!(invoice_id.to_hex());
    }
    if !params.memos.is_empty() {
        let memos: Vec<Value> = params
            .memos
            .iter()
            .map(|data| json!({"Memo": {"MemoData": hex::encode_upper(data)}}))
            .collect();
        tx["Memos"] = Value::Array(memos);
    }
    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrpl_codec::Codec;
    use xrpl_codec_core::{Amount, StObject};
    use xrpl_codec_shamap::{AccountState, LedgerEntry};

    proptest! {
        #[test]
        fn test_binary_roundtrip(params: TxParams) {
            let object = StObject::from_json_strict(&tx_json_from_params(&params)).unwrap();
            let bytes = object.to_bytes().unwrap();
            let decoded = StObject::from_bytes(&bytes).unwrap();

            prop_assert_eq!(&decoded, &object);
            prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
        }

        #[test]
        fn test_json_roundtrip(params: TxParams) {
            let codec = Codec::default();
            let hex = codec.encode(&tx_json_from_params(&params)).unwrap();
            let json = codec.decode(&hex).unwrap();
            prop_assert_eq!(codec.encode(&json).unwrap(), hex);
        }

        #[test]
        fn test_amount_restringify(value in amount_value()) {
            let reparsed = AmountValue::parse(&value.to_string()).unwrap();
            prop_assert_eq!(reparsed.mantissa(), value.mantissa());
            prop_assert_eq!(reparsed.exponent(), value.exponent());
            prop_assert_eq!(reparsed.is_negative(), value.is_negative());
            prop_assert!((1_000_000_000_000_000..10_000_000_000_000_000).contains(&value.mantissa()));
        }

        #[test]
        fn test_native_amount_roundtrip(drops in drops()) {
            let amount = Amount::from_drops(drops).unwrap();
            let parsed = Amount::from_json(&amount.to_json()).unwrap();
            prop_assert_eq!(parsed, amount);
        }

        #[test]
        fn test_state_root_order_independent(
            keys in prop::collection::btree_set(any::<[u8; 32]>(), 1..24),
            balances in prop::collection::vec(drops(), 24),
        ) {
            let entries: Vec<LedgerEntry> = keys
                .iter()
                .zip(&balances)
                .map(|(key, balance)| {
                    LedgerEntry::from_json(&json!({
                        "LedgerEntryType": "AccountRoot",
                        "Balance": balance.to_string(),
                        "index": hex::encode_upper(key),
                    }))
                    .unwrap()
                })
                .collect();

            let mut forward = AccountState::new();
            for entry in entries.iter().cloned() {
                forward.add(entry).unwrap();
            }
            let mut backward = AccountState::new();
            for entry in entries.iter().rev().cloned() {
                backward.add(entry).unwrap();
            }
            prop_assert_eq!(forward.root_hash(), backward.root_hash());
        }

        #[test]
        fn test_snapshot_isolation(
            keys in prop::collection::btree_set(any::<[u8; 32]>(), 2..16),
        ) {
            let mut keys: Vec<[u8; 32]> = keys.into_iter().collect();
            let late = keys.pop().unwrap();
            let entry = |key: &[u8; 32]| {
                LedgerEntry::from_json(&json!({
                    "LedgerEntryType": "AccountRoot",
                    "index": hex::encode_upper(key),
                }))
                .unwrap()
            };

            let mut state = AccountState::new();
            for key in &keys {
                state.add(entry(key)).unwrap();
            }
            let snapshot = state.snapshot();
            let frozen = snapshot.root_hash();

            state.add(entry(&late)).unwrap();
            state.remove(&Hash256::from_bytes(keys[0]));
            prop_assert_eq!(snapshot.root_hash(), frozen);
            prop_assert_eq!(snapshot.len(), keys.len());
        }
    }
}
