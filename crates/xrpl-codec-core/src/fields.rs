//! The catalog of ledger fields.
//!
//! Every constant here is registered in [`FieldRegistry::standard`]. Names
//! match the JSON keys used by the ledger.
//!
//! [`FieldRegistry::standard`]: crate::field::FieldRegistry::standard

use crate::field::{Field, FieldType};

// Unknown
pub const GENERIC: Field = Field::new("Generic", 0, FieldType::Unknown);
pub const INVALID: Field = Field::new("Invalid", -1, FieldType::Unknown);

// Uint16
pub const LEDGER_ENTRY_TYPE: Field = Field::new("LedgerEntryType", 1, FieldType::Uint16);
pub const TRANSACTION_TYPE: Field = Field::new("TransactionType", 2, FieldType::Uint16);
pub const SIGNER_WEIGHT: Field = Field::new("SignerWeight", 3, FieldType::Uint16);

// Uint32
pub const FLAGS: Field = Field::new("Flags", 2, FieldType::Uint32);
pub const SOURCE_TAG: Field = Field::new("SourceTag", 3, FieldType::Uint32);
pub const SEQUENCE: Field = Field::new("Sequence", 4, FieldType::Uint32);
pub const PREVIOUS_TXN_LGR_SEQ: Field = Field::new("PreviousTxnLgrSeq", 5, FieldType::Uint32);
pub const LEDGER_SEQUENCE: Field = Field::new("LedgerSequence", 6, FieldType::Uint32);
pub const CLOSE_TIME: Field = Field::new("CloseTime", 7, FieldType::Uint32);
pub const PARENT_CLOSE_TIME: Field = Field::new("ParentCloseTime", 8, FieldType::Uint32);
pub const SIGNING_TIME: Field = Field::new("SigningTime", 9, FieldType::Uint32);
pub const EXPIRATION: Field = Field::new("Expiration", 10, FieldType::Uint32);
pub const TRANSFER_RATE: Field = Field::new("TransferRate", 11, FieldType::Uint32);
pub const WALLET_SIZE: Field = Field::new("WalletSize", 12, FieldType::Uint32);
pub const OWNER_COUNT: Field = Field::new("OwnerCount", 13, FieldType::Uint32);
pub const DESTINATION_TAG: Field = Field::new("DestinationTag", 14, FieldType::Uint32);
pub const HIGH_QUALITY_IN: Field = Field::new("HighQualityIn", 16, FieldType::Uint32);
pub const HIGH_QUALITY_OUT: Field = Field::new("HighQualityOut", 17, FieldType::Uint32);
pub const LOW_QUALITY_IN: Field = Field::new("LowQualityIn", 18, FieldType::Uint32);
pub const LOW_QUALITY_OUT: Field = Field::new("LowQualityOut", 19, FieldType::Uint32);
pub const QUALITY_IN: Field = Field::new("QualityIn", 20, FieldType::Uint32);
pub const QUALITY_OUT: Field = Field::new("QualityOut", 21, FieldType::Uint32);
pub const STAMP_ESCROW: Field = Field::new("StampEscrow", 22, FieldType::Uint32);
pub const BOND_AMOUNT: Field = Field::new("BondAmount", 23, FieldType::Uint32);
pub const LOAD_FEE: Field = Field::new("LoadFee", 24, FieldType::Uint32);
pub const OFFER_SEQUENCE: Field = Field::new("OfferSequence", 25, FieldType::Uint32);
pub const FIRST_LEDGER_SEQUENCE: Field = Field::new("FirstLedgerSequence", 26, FieldType::Uint32);
pub const LAST_LEDGER_SEQUENCE: Field = Field::new("LastLedgerSequence", 27, FieldType::Uint32);
pub const TRANSACTION_INDEX: Field = Field::new("TransactionIndex", 28, FieldType::Uint32);
pub const OPERATION_LIMIT: Field = Field::new("OperationLimit", 29, FieldType::Uint32);
pub const REFERENCE_FEE_UNITS: Field = Field::new("ReferenceFeeUnits", 30, FieldType::Uint32);
pub const RESERVE_BASE: Field = Field::new("ReserveBase", 31, FieldType::Uint32);
pub const RESERVE_INCREMENT: Field = Field::new("ReserveIncrement", 32, FieldType::Uint32);
pub const SET_FLAG: Field = Field::new("SetFlag", 33, FieldType::Uint32);
pub const CLEAR_FLAG: Field = Field::new("ClearFlag", 34, FieldType::Uint32);
pub const SIGNER_QUORUM: Field = Field::new("SignerQuorum", 35, FieldType::Uint32);

// Uint64
pub const INDEX_NEXT: Field = Field::new("IndexNext", 1, FieldType::Uint64);
pub const INDEX_PREVIOUS: Field = Field::new("IndexPrevious", 2, FieldType::Uint64);
pub const BOOK_NODE: Field = Field::new("BookNode", 3, FieldType::Uint64);
pub const OWNER_NODE: Field = Field::new("OwnerNode", 4, FieldType::Uint64);
pub const BASE_FEE: Field = Field::new("BaseFee", 5, FieldType::Uint64);
pub const EXCHANGE_RATE: Field = Field::new("ExchangeRate", 6, FieldType::Uint64);
pub const LOW_NODE: Field = Field::new("LowNode", 7, FieldType::Uint64);
pub const HIGH_NODE: Field = Field::new("HighNode", 8, FieldType::Uint64);

// Hash128
pub const EMAIL_HASH: Field = Field::new("EmailHash", 1, FieldType::Hash128);

// Hash256
pub const LEDGER_HASH: Field = Field::new("LedgerHash", 1, FieldType::Hash256);
pub const PARENT_HASH: Field = Field::new("ParentHash", 2, FieldType::Hash256);
pub const TRANSACTION_HASH: Field = Field::new("TransactionHash", 3, FieldType::Hash256);
pub const ACCOUNT_HASH: Field = Field::new("AccountHash", 4, FieldType::Hash256);
pub const PREVIOUS_TXN_ID: Field = Field::new("PreviousTxnID", 5, FieldType::Hash256);
pub const LEDGER_INDEX: Field = Field::new("LedgerIndex", 6, FieldType::Hash256);
pub const WALLET_LOCATOR: Field = Field::new("WalletLocator", 7, FieldType::Hash256);
pub const ROOT_INDEX: Field = Field::new("RootIndex", 8, FieldType::Hash256);
pub const ACCOUNT_TXN_ID: Field = Field::new("AccountTxnID", 9, FieldType::Hash256);
pub const BOOK_DIRECTORY: Field = Field::new("BookDirectory", 16, FieldType::Hash256);
pub const INVOICE_ID: Field = Field::new("InvoiceID", 17, FieldType::Hash256);
pub const NICKNAME: Field = Field::new("Nickname", 18, FieldType::Hash256);
pub const AMENDMENT: Field = Field::new("Amendment", 19, FieldType::Hash256);
pub const TICKET_ID: Field = Field::new("TicketID", 20, FieldType::Hash256);
pub const HASH: Field = Field::new("hash", 257, FieldType::Hash256).not_serialized().not_signing();
pub const INDEX: Field =
    Field::new("index", 258, FieldType::Hash256).not_serialized().not_signing();

// Amount
pub const AMOUNT: Field = Field::new("Amount", 1, FieldType::Amount);
pub const BALANCE: Field = Field::new("Balance", 2, FieldType::Amount);
pub const LIMIT_AMOUNT: Field = Field::new("LimitAmount", 3, FieldType::Amount);
pub const TAKER_PAYS: Field = Field::new("TakerPays", 4, FieldType::Amount);
pub const TAKER_GETS: Field = Field::new("TakerGets", 5, FieldType::Amount);
pub const LOW_LIMIT: Field = Field::new("LowLimit", 6, FieldType::Amount);
pub const HIGH_LIMIT: Field = Field::new("HighLimit", 7, FieldType::Amount);
pub const FEE: Field = Field::new("Fee", 8, FieldType::Amount);
pub const SEND_MAX: Field = Field::new("SendMax", 9, FieldType::Amount);
pub const DELIVER_MIN: Field = Field::new("DeliverMin", 10, FieldType::Amount);
pub const MINIMUM_OFFER: Field = Field::new("MinimumOffer", 16, FieldType::Amount);
pub const RIPPLE_ESCROW: Field = Field::new("RippleEscrow", 17, FieldType::Amount);
pub const DELIVERED_AMOUNT: Field = Field::new("DeliveredAmount", 18, FieldType::Amount);
pub const TAKER_GETS_FUNDED: Field =
    Field::new("taker_gets_funded", 258, FieldType::Amount).not_serialized().not_signing();
pub const TAKER_PAYS_FUNDED: Field =
    Field::new("taker_pays_funded", 259, FieldType::Amount).not_serialized().not_signing();

// Blob
pub const PUBLIC_KEY: Field = Field::new("PublicKey", 1, FieldType::Blob);
pub const MESSAGE_KEY: Field = Field::new("MessageKey", 2, FieldType::Blob);
pub const SIGNING_PUB_KEY: Field = Field::new("SigningPubKey", 3, FieldType::Blob);
pub const TXN_SIGNATURE: Field = Field::new("TxnSignature", 4, FieldType::Blob).not_signing();
pub const GENERATOR: Field = Field::new("Generator", 5, FieldType::Blob);
pub const SIGNATURE: Field = Field::new("Signature", 6, FieldType::Blob);
pub const DOMAIN: Field = Field::new("Domain", 7, FieldType::Blob);
pub const FUND_CODE: Field = Field::new("FundCode", 8, FieldType::Blob);
pub const REMOVE_CODE: Field = Field::new("RemoveCode", 9, FieldType::Blob);
pub const EXPIRE_CODE: Field = Field::new("ExpireCode", 10, FieldType::Blob);
pub const CREATE_CODE: Field = Field::new("CreateCode", 11, FieldType::Blob);
pub const MEMO_TYPE: Field = Field::new("MemoType", 12, FieldType::Blob);
pub const MEMO_DATA: Field = Field::new("MemoData", 13, FieldType::Blob);
pub const MEMO_FORMAT: Field = Field::new("MemoFormat", 14, FieldType::Blob);

// AccountId
pub const ACCOUNT: Field = Field::new("Account", 1, FieldType::AccountId);
pub const OWNER: Field = Field::new("Owner", 2, FieldType::AccountId);
pub const DESTINATION: Field = Field::new("Destination", 3, FieldType::AccountId);
pub const ISSUER: Field = Field::new("Issuer", 4, FieldType::AccountId);
pub const TARGET: Field = Field::new("Target", 7, FieldType::AccountId);
pub const REGULAR_KEY: Field = Field::new("RegularKey", 8, FieldType::AccountId);

// StObject
pub const OBJECT_END_MARKER: Field = Field::new("ObjectEndMarker", 1, FieldType::StObject);
pub const TRANSACTION_META_DATA: Field = Field::new("TransactionMetaData", 2, FieldType::StObject);
pub const CREATED_NODE: Field = Field::new("CreatedNode", 3, FieldType::StObject);
pub const DELETED_NODE: Field = Field::new("DeletedNode", 4, FieldType::StObject);
pub const MODIFIED_NODE: Field = Field::new("ModifiedNode", 5, FieldType::StObject);
pub const PREVIOUS_FIELDS: Field = Field::new("PreviousFields", 6, FieldType::StObject);
pub const FINAL_FIELDS: Field = Field::new("FinalFields", 7, FieldType::StObject);
pub const NEW_FIELDS: Field = Field::new("NewFields", 8, FieldType::StObject);
pub const TEMPLATE_ENTRY: Field = Field::new("TemplateEntry", 9, FieldType::StObject);
pub const MEMO: Field = Field::new("Memo", 10, FieldType::StObject);
pub const SIGNER_ENTRY: Field = Field::new("SignerEntry", 11, FieldType::StObject);
pub const SIGNER: Field = Field::new("Signer", 16, FieldType::StObject);

// StArray
pub const ARRAY_END_MARKER: Field = Field::new("ArrayEndMarker", 1, FieldType::StArray);
pub const SIGNERS: Field = Field::new("Signers", 3, FieldType::StArray).not_signing();
pub const SIGNER_ENTRIES: Field = Field::new("SignerEntries", 4, FieldType::StArray);
pub const TEMPLATE: Field = Field::new("Template", 5, FieldType::StArray);
pub const NECESSARY: Field = Field::new("Necessary", 6, FieldType::StArray);
pub const SUFFICIENT: Field = Field::new("Sufficient", 7, FieldType::StArray);
pub const AFFECTED_NODES: Field = Field::new("AffectedNodes", 8, FieldType::StArray);
pub const MEMOS: Field = Field::new("Memos", 9, FieldType::StArray);

// Uint8
pub const CLOSE_RESOLUTION: Field = Field::new("CloseResolution", 1, FieldType::Uint8);
pub const TEMPLATE_ENTRY_TYPE: Field = Field::new("TemplateEntryType", 2, FieldType::Uint8);
pub const TRANSACTION_RESULT: Field = Field::new("TransactionResult", 3, FieldType::Uint8);

// Hash160
pub const TAKER_PAYS_CURRENCY: Field = Field::new("TakerPaysCurrency", 1, FieldType::Hash160);
pub const TAKER_PAYS_ISSUER: Field = Field::new("TakerPaysIssuer", 2, FieldType::Hash160);
pub const TAKER_GETS_CURRENCY: Field = Field::new("TakerGetsCurrency", 3, FieldType::Hash160);
pub const TAKER_GETS_ISSUER: Field = Field::new("TakerGetsIssuer", 4, FieldType::Hash160);

// PathSet
pub const PATHS: Field = Field::new("Paths", 1, FieldType::PathSet);

// Vector256
pub const INDEXES: Field = Field::new("Indexes", 1, FieldType::Vector256);
pub const HASHES: Field = Field::new("Hashes", 2, FieldType::Vector256);
pub const FEATURES: Field = Field::new("Features", 3, FieldType::Vector256);

/// Every catalog field, in declaration order.
pub const ALL: &[Field] = &[
    GENERIC,
    INVALID,
    LEDGER_ENTRY_TYPE,
    TRANSACTION_TYPE,
    SIGNER_WEIGHT,
    FLAGS,
    SOURCE_TAG,
    SEQUENCE,
    PREVIOUS_TXN_LGR_SEQ,
    LEDGER_SEQUENCE,
    CLOSE_TIME,
    PARENT_CLOSE_TIME,
    SIGNING_TIME,
    EXPIRATION,
    TRANSFER_RATE,
    WALLET_SIZE,
    OWNER_COUNT,
    DESTINATION_TAG,
    HIGH_QUALITY_IN,
    HIGH_QUALITY_OUT,
    LOW_QUALITY_IN,
    LOW_QUALITY_OUT,
    QUALITY_IN,
    QUALITY_OUT,
    STAMP_ESCROW,
    BOND_AMOUNT,
    LOAD_FEE,
    OFFER_SEQUENCE,
    FIRST_LEDGER_SEQUENCE,
    LAST_LEDGER_SEQUENCE,
    TRANSACTION_INDEX,
    OPERATION_LIMIT,
    REFERENCE_FEE_UNITS,
    RESERVE_BASE,
    RESERVE_INCREMENT,
    SET_FLAG,
    CLEAR_FLAG,
    SIGNER_QUORUM,
    INDEX_NEXT,
    INDEX_PREVIOUS,
    BOOK_NODE,
    OWNER_NODE,
    BASE_FEE,
    EXCHANGE_RATE,
    LOW_NODE,
    HIGH_NODE,
    EMAIL_HASH,
    LEDGER_HASH,
    PARENT_HASH,
    TRANSACTION_HASH,
    ACCOUNT_HASH,
    PREVIOUS_TXN_ID,
    LEDGER_INDEX,
    WALLET_LOCATOR,
    ROOT_INDEX,
    ACCOUNT_TXN_ID,
    BOOK_DIRECTORY,
    INVOICE_ID,
    NICKNAME,
    AMENDMENT,
    TICKET_ID,
    HASH,
    INDEX,
    AMOUNT,
    BALANCE,
    LIMIT_AMOUNT,
    TAKER_PAYS,
    TAKER_GETS,
    LOW_LIMIT,
    HIGH_LIMIT,
    FEE,
    SEND_MAX,
    DELIVER_MIN,
    MINIMUM_OFFER,
    RIPPLE_ESCROW,
    DELIVERED_AMOUNT,
    TAKER_GETS_FUNDED,
    TAKER_PAYS_FUNDED,
    PUBLIC_KEY,
    MESSAGE_KEY,
    SIGNING_PUB_KEY,
    TXN_SIGNATURE,
    GENERATOR,
    SIGNATURE,
    DOMAIN,
    FUND_CODE,
    REMOVE_CODE,
    EXPIRE_CODE,
    CREATE_CODE,
    MEMO_TYPE,
    MEMO_DATA,
    MEMO_FORMAT,
    ACCOUNT,
    OWNER,
    DESTINATION,
    ISSUER,
    TARGET,
    REGULAR_KEY,
    OBJECT_END_MARKER,
    TRANSACTION_META_DATA,
    CREATED_NODE,
    DELETED_NODE,
    MODIFIED_NODE,
    PREVIOUS_FIELDS,
    FINAL_FIELDS,
    NEW_FIELDS,
    TEMPLATE_ENTRY,
    MEMO,
    SIGNER_ENTRY,
    SIGNER,
    ARRAY_END_MARKER,
    SIGNERS,
    SIGNER_ENTRIES,
    TEMPLATE,
    NECESSARY,
    SUFFICIENT,
    AFFECTED_NODES,
    MEMOS,
    CLOSE_RESOLUTION,
    TEMPLATE_ENTRY_TYPE,
    TRANSACTION_RESULT,
    TAKER_PAYS_CURRENCY,
    TAKER_PAYS_ISSUER,
    TAKER_GETS_CURRENCY,
    TAKER_GETS_ISSUER,
    PATHS,
    INDEXES,
    HASHES,
    FEATURES,
];
