//! Golden test vectors for deterministic verification.
//!
//! These vectors ensure that canonical encoding produces identical results
//! across all implementations.

use anyhow::{ensure, Context};
use serde::Serialize;
use serde_json::Value;

use xrpl_codec::Codec;

/// A golden encoding vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input JSON.
    pub json: &'static str,
    /// Expected canonical hex.
    pub expected_hex: &'static str,
}

/// The Ed25519-signed Payment vector.
#[derive(Debug, Clone, Serialize)]
pub struct SigningVector {
    pub secret: &'static str,
    pub unsigned_json: &'static str,
    pub expected_signing_pub_key: &'static str,
    pub expected_signature: &'static str,
    pub expected_blob: &'static str,
    pub expected_hash: &'static str,
}

/// Get all golden encoding vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Payment with Ed25519 signing key",
            json: r#"{
                "Account": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
                "Amount": "1000",
                "Destination": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
                "Fee": "10",
                "Flags": 2147483648,
                "Sequence": 1,
                "SigningPubKey": "EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7438E021D",
                "TransactionType": "Payment"
            }"#,
            expected_hex: concat!(
                "120000228000000024000000016140000000000003E868400000000000000A",
                "7321EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7",
                "438E021D8114C0A5ABEF242802EFED4B041E8F2D4A8CC86AE3D18314B5F762",
                "798A53D543A014CAF8B297CFF8F2F937E8",
            ),
        },
        GoldenVector {
            name: "Native amount",
            json: r#"{"Amount": "1000"}"#,
            expected_hex: "6140000000000003E8",
        },
        GoldenVector {
            name: "Issued amount of one",
            json: r#"{"Amount": {
                "currency": "USD",
                "issuer": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
                "value": "1"
            }}"#,
            expected_hex: concat!(
                "61D4838D7EA4C68000",
                "0000000000000000000000005553440000000000",
                "B5F762798A53D543A014CAF8B297CFF8F2F937E8",
            ),
        },
        GoldenVector {
            name: "Issued zero",
            json: r#"{"Amount": {
                "currency": "USD",
                "issuer": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
                "value": "0"
            }}"#,
            expected_hex: concat!(
                "618000000000000000",
                "0000000000000000000000005553440000000000",
                "B5F762798A53D543A014CAF8B297CFF8F2F937E8",
            ),
        },
        GoldenVector {
            name: "Uint64 as hex",
            json: r#"{"ExchangeRate": "4E11C37937E08000"}"#,
            expected_hex: "364E11C37937E08000",
        },
        GoldenVector {
            name: "Memo array",
            json: r#"{"Memos": [{"Memo": {"MemoData": "0102"}}]}"#,
            expected_hex: "F9EA7D020102E1F1",
        },
    ]
}

/// The signing vector.
pub fn signing_vector() -> SigningVector {
    SigningVector {
        secret: "sEd7rBGm5kxzauRTAV2hbsNz7N45X91",
        unsigned_json: r#"{
            "Account": "rJZdUusLDtY9NEsGea7ijqhVrXv98rYBYN",
            "Amount": "1000",
            "Destination": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Fee": "10",
            "Flags": 2147483648,
            "Sequence": 1,
            "TransactionType": "Payment"
        }"#,
        expected_signing_pub_key:
            "EDD3993CDC6647896C455F136648B7750723B011475547AF60691AA3D7438E021D",
        expected_signature: concat!(
            "C3646313B08EED6AF4392261A31B961F10C66CB733DB7F6CD9EAB079857834C8",
            "B0334270A2C037E63CDCCC1932E0832882B7B7066ECD2FAEDEB4A83DF8AE6303",
        ),
        expected_blob: concat!(
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
        ),
        expected_hash: "A8A9C869671D35A18DFB69AFB7741062DF43F73C8A5942AD94EE58ED31477AC6",
    }
}

/// Encode a vector's JSON with `codec`.
pub fn encode_vector(codec: &Codec, vector: &GoldenVector) -> anyhow::Result<String> {
    let json: Value = serde_json::from_str(vector.json)
        .with_context(|| format!("vector '{}' has invalid json", vector.name))?;
    codec
        .encode(&json)
        .with_context(|| format!("vector '{}' failed to encode", vector.name))
}

/// Check the signing vector end to end.
pub fn verify_signing_vector(codec: &Codec) -> anyhow::Result<()> {
    let vector = signing_vector();
    let json: Value = serde_json::from_str(vector.unsigned_json)?;
    let signed = codec.sign(&json, vector.secret).context("signing vector")?;

    ensure!(
        signed.tx_json["SigningPubKey"] == vector.expected_signing_pub_key,
        "signing key mismatch"
    );
    ensure!(
        signed.tx_json["TxnSignature"] == vector.expected_signature,
        "signature mismatch: {}",
        signed.tx_json["TxnSignature"]
    );
    ensure!(signed.tx_blob == vector.expected_blob, "blob mismatch");
    ensure!(
        signed.hash == vector.expected_hash,
        "hash mismatch: {}",
        signed.hash
    );
    Ok(())
}

/// Verify all golden vectors against the reference encodings.
///
/// Returns `(name, matches, actual)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let codec = Codec::default();
    all_vectors()
        .iter()
        .map(|v| match encode_vector(&codec, v) {
            Ok(hex) => (v.name.to_string(), hex == v.expected_hex, hex),
            Err(e) => (v.name.to_string(), false, format!("{:#}", e)),
        })
        .collect()
}
