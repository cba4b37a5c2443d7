//! Transaction signing.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use xrpl_codec_core::{fields, prefixed_half, Hash256, HashPrefix, StObject};

use crate::error::{Result, SigningError};
use crate::keypair::{verify_signature, KeyPair, Signer};

/// Output of [`sign_transaction`].
#[derive(Debug, Clone, Serialize)]
pub struct SignedTransaction {
    /// The input JSON with `SigningPubKey` and `TxnSignature` filled in.
    pub tx_json: Value,
    /// Upper-case hex of the signed canonical bytes.
    pub tx_blob: String,
    /// Transaction ID, upper-case hex.
    pub hash: String,
}

/// `sha512half(TXN\0 || blob)`.
pub fn transaction_id(blob: &[u8]) -> Hash256 {
    prefixed_half(HashPrefix::TransactionId, blob)
}

/// Sign a transaction given as JSON.
pub fn sign_transaction(tx_json: &Value, signer: &dyn Signer) -> Result<SignedTransaction> {
    let mut tx = StObject::from_json(tx_json)?;
    let public_key = signer.public_key_bytes();
    tx.insert(fields::SIGNING_PUB_KEY, Bytes::from(public_key.clone()))?;

    let signature = signer.sign(&tx.signing_data()?)?;
    tx.insert(fields::TXN_SIGNATURE, Bytes::from(signature.clone()))?;

    let blob = tx.to_bytes()?;
    let hash = transaction_id(&blob);

    let mut signed_json = tx_json.clone();
    if let Some(map) = signed_json.as_object_mut() {
        map.insert(
            fields::SIGNING_PUB_KEY.name().to_string(),
            Value::String(hex::encode_upper(&public_key)),
        );
        map.insert(
            fields::TXN_SIGNATURE.name().to_string(),
            Value::String(hex::encode_upper(&signature)),
        );
    }
    tracing::debug!("signed transaction {}", hash);

    Ok(SignedTransaction {
        tx_json: signed_json,
        tx_blob: hex::encode_upper(&blob),
        hash: hash.to_hex(),
    })
}

/// Sign with an `s...` or `sEd...` secret.
pub fn sign_with_secret(tx_json: &Value, secret: &str) -> Result<SignedTransaction> {
    let pair = KeyPair::from_secret(secret)?;
    sign_transaction(tx_json, &pair)
}

/// Check the single signature carried by a decoded transaction.
pub fn verify_transaction(tx: &StObject) -> Result<()> {
    let public_key = tx
        .get(&fields::SIGNING_PUB_KEY)
        .and_then(|v| v.as_blob())
        .ok_or(SigningError::MissingField("SigningPubKey"))?;
    let signature = tx
        .get(&fields::TXN_SIGNATURE)
        .and_then(|v| v.as_blob())
        .ok_or(SigningError::MissingField("TxnSignature"))?;
    verify_signature(public_key, &tx.signing_data()?, signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "sEd7rBGm5kxzauRTAV2hbsNz7N45X91";

    const EXPECTED_SIGNATURE: &str = concat!(
        "C3646313B08EED6AF4392261A31B961F",
        "10C66CB733DB7F6CD9EAB079857834C8",
        "B0334270A2C037E63CDCCC1932E08328",
        "82B7B7066ECD2FAEDEB4A83DF8AE6303",
    );

    const EXPECTED_BLOB: &str = concat!(
        "12000022800000002400000001614000",
        "0000000003E868400000000000000A73",
        "21EDD3993CDC6647896C455F136648B7",
        "750723B011475547AF60691AA3D7438E",
        "021D7440C3646313B08EED6AF4392261",
        "A31B961F10C66CB733DB7F6CD9EAB079",
        "857834C8B0334270A2C037E63CDCCC19",
        "32E0832882B7B7066ECD2FAEDEB4A83D",
        "F8AE63038114C0A5ABEF242802EFED4B",
        "041E8F2D4A8CC86AE3D18314B5F76279",
        "8A53D543A014CAF8B297CFF8F2F937E8",
    );

    fn unsigned() -> Value {
        json!({
            "Account": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
            "Amount": "1000",
            "Destination": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Fee": "10",
            "Flags": 2147483648u32,
            "Sequence": 1,
            "TransactionType": "Payment"
        })
    }

    #[test]
    fn test_sign_known_transaction() {
        let signed = sign_with_secret(&unsigned(), SECRET).unwrap();
        assert_eq!(signed.tx_json["TxnSignature"], json!(EXPECTED_SIGNATURE));
        assert_eq!(
            signed.tx_json["SigningPubKey"],
            json!("EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7438E021D")
        );
        assert_eq!(signed.tx_blob, EXPECTED_BLOB);
        assert_eq!(
            signed.hash,
            "A8A9C869671D35A18DFB69AFB7741062DF43F73C8A5942AD94EE58ED31477AC6"
        );
    }

    #[test]
    fn test_signed_blob_verifies() {
        let signed = sign_with_secret(&unsigned(), SECRET).unwrap();
        let tx = StObject::from_hex(&signed.tx_blob).unwrap();
        verify_transaction(&tx).unwrap();

        let mut tampered = tx.clone();
        tampered.insert(fields::SEQUENCE, 2u32).unwrap();
        assert!(matches!(
            verify_transaction(&tampered),
            Err(SigningError::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_requires_signature() {
        let tx = StObject::from_json(&unsigned()).unwrap();
        assert!(matches!(
            verify_transaction(&tx),
            Err(SigningError::MissingField("SigningPubKey"))
        ));
    }

    #[test]
    fn test_secp256k1_secret_signs() {
        let tx = json!({
            "TransactionType": "Payment",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Destination": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
            "Amount": "1000",
            "Fee": "10",
            "Sequence": 1
        });
        let signed = sign_with_secret(&tx, "snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap();
        assert_eq!(
            signed.tx_json["SigningPubKey"],
            json!("0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020")
        );

        let decoded = StObject::from_hex(&signed.tx_blob).unwrap();
        verify_transaction(&decoded).unwrap();
        assert_eq!(transaction_id(&decoded.to_bytes().unwrap()).to_hex(), signed.hash);

        let mut tampered = decoded.clone();
        tampered.insert(fields::SEQUENCE, 2u32).unwrap();
        assert!(matches!(
            verify_transaction(&tampered),
            Err(SigningError::InvalidSignature)
        ));
    }
}
