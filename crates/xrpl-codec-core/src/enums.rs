//! Enumerated field values.
//!
//! These ride on the wire as plain integers but are named in JSON. JSON
//! input accepts either the name or the number.

use std::fmt;

use crate::error::{CodecError, Result};

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident: $repr:ty {
            $($variant:ident = $code:expr => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Wire code.
            pub const fn code(self) -> $repr {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn from_code(code: $repr) -> Option<Self> {
                match code {
                    $(c if c == $code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// JSON name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn to_json(&self) -> serde_json::Value {
                serde_json::Value::String(self.name().to_string())
            }

            /// Accepts a name or a number.
            pub fn from_json(value: &serde_json::Value) -> Result<Self> {
                let found = match value {
                    serde_json::Value::String(s) => Self::from_name(s),
                    serde_json::Value::Number(n) => n
                        .as_i64()
                        .and_then(|n| <$repr>::try_from(n).ok())
                        .and_then(Self::from_code),
                    _ => None,
                };
                found.ok_or_else(|| {
                    CodecError::MalformedInput(format!(
                        "unknown {} {}",
                        stringify!($name),
                        value
                    ))
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_enum! {
    /// Transaction kinds, carried by the `TransactionType` field.
    TransactionType: u16 {
        Invalid = 0xFFFF => "Invalid",
        Payment = 0 => "Payment",
        Claim = 1 => "Claim",
        WalletAdd = 2 => "WalletAdd",
        AccountSet = 3 => "AccountSet",
        PasswordFund = 4 => "PasswordFund",
        SetRegularKey = 5 => "SetRegularKey",
        NickNameSet = 6 => "NickNameSet",
        OfferCreate = 7 => "OfferCreate",
        OfferCancel = 8 => "OfferCancel",
        Contract = 9 => "Contract",
        TicketCreate = 10 => "TicketCreate",
        TicketCancel = 11 => "TicketCancel",
        SignerListSet = 12 => "SignerListSet",
        TrustSet = 20 => "TrustSet",
        EnableAmendment = 100 => "EnableAmendment",
        SetFee = 101 => "SetFee",
    }
}

named_enum! {
    /// Ledger object kinds, carried by the `LedgerEntryType` field.
    LedgerEntryType: u16 {
        AccountRoot = b'a' as u16 => "AccountRoot",
        DirectoryNode = b'd' as u16 => "DirectoryNode",
        GeneratorMap = b'g' as u16 => "GeneratorMap",
        RippleState = b'r' as u16 => "RippleState",
        Offer = b'o' as u16 => "Offer",
        Contract = b'c' as u16 => "Contract",
        LedgerHashes = b'h' as u16 => "LedgerHashes",
        EnabledAmendments = b'f' as u16 => "EnabledAmendments",
        FeeSettings = b's' as u16 => "FeeSettings",
        Ticket = b'T' as u16 => "Ticket",
        SignerList = b'S' as u16 => "SignerList",
    }
}

named_enum! {
    /// Engine results stored in transaction metadata.
    EngineResult: u8 {
        TesSuccess = 0 => "tesSUCCESS",
        TecClaim = 100 => "tecCLAIM",
        TecPathPartial = 101 => "tecPATH_PARTIAL",
        TecUnfundedAdd = 102 => "tecUNFUNDED_ADD",
        TecUnfundedOffer = 103 => "tecUNFUNDED_OFFER",
        TecUnfundedPayment = 104 => "tecUNFUNDED_PAYMENT",
        TecFailedProcessing = 105 => "tecFAILED_PROCESSING",
        TecDirFull = 121 => "tecDIR_FULL",
        TecInsufReserveLine = 122 => "tecINSUF_RESERVE_LINE",
        TecInsufReserveOffer = 123 => "tecINSUF_RESERVE_OFFER",
        TecNoDst = 124 => "tecNO_DST",
        TecNoDstInsufXrp = 125 => "tecNO_DST_INSUF_XRP",
        TecNoLineInsufReserve = 126 => "tecNO_LINE_INSUF_RESERVE",
        TecNoLineRedundant = 127 => "tecNO_LINE_REDUNDANT",
        TecPathDry = 128 => "tecPATH_DRY",
        TecUnfunded = 129 => "tecUNFUNDED",
        TecNoAlternativeKey = 130 => "tecNO_ALTERNATIVE_KEY",
        TecNoRegularKey = 131 => "tecNO_REGULAR_KEY",
        TecOwners = 132 => "tecOWNERS",
        TecNoIssuer = 133 => "tecNO_ISSUER",
        TecNoAuth = 134 => "tecNO_AUTH",
        TecNoLine = 135 => "tecNO_LINE",
        TecInsuffFee = 136 => "tecINSUFF_FEE",
        TecFrozen = 137 => "tecFROZEN",
        TecNoTarget = 138 => "tecNO_TARGET",
        TecNoPermission = 139 => "tecNO_PERMISSION",
        TecNoEntry = 140 => "tecNO_ENTRY",
        TecInsufficientReserve = 141 => "tecINSUFFICIENT_RESERVE",
        TecNeedMasterKey = 142 => "tecNEED_MASTER_KEY",
        TecDstTagNeeded = 143 => "tecDST_TAG_NEEDED",
        TecInternal = 144 => "tecINTERNAL",
        TecOversize = 145 => "tecOVERSIZE",
    }
}
