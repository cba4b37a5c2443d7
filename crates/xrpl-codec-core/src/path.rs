//! Payment path sets.
//!
//! On the wire each hop is a type byte followed by whichever of account,
//! currency and issuer it flags, in that order. `0xFF` separates paths and
//! `0x00` ends the set.

use serde_json::{Map, Value};

use crate::address::AccountId;
use crate::binary::{BinaryParser, BytesSink};
use crate::currency::Currency;
use crate::error::{CodecError, Result};

const TYPE_ACCOUNT: u8 = 0x01;
const TYPE_CURRENCY: u8 = 0x10;
const TYPE_ISSUER: u8 = 0x20;
const PATH_SEPARATOR: u8 = 0xFF;
const PATHSET_END: u8 = 0x00;

/// One step of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hop {
    pub account: Option<AccountId>,
    pub currency: Option<Currency>,
    pub issuer: Option<AccountId>,
}

impl Hop {
    /// The type byte flagging which members are present.
    pub fn type_byte(&self) -> u8 {
        let mut ty = 0;
        if self.account.is_some() {
            ty |= TYPE_ACCOUNT;
        }
        if self.currency.is_some() {
            ty |= TYPE_CURRENCY;
        }
        if self.issuer.is_some() {
            ty |= TYPE_ISSUER;
        }
        ty
    }

    fn from_parser(ty: u8, parser: &mut BinaryParser<'_>) -> Result<Self> {
        if ty & !(TYPE_ACCOUNT | TYPE_CURRENCY | TYPE_ISSUER) != 0 {
            return Err(CodecError::MalformedInput(format!(
                "unknown path hop type 0x{:02X}",
                ty
            )));
        }
        let account = if ty & TYPE_ACCOUNT != 0 {
            Some(AccountId::from_parser(parser)?)
        } else {
            None
        };
        let currency = if ty & TYPE_CURRENCY != 0 {
            Some(Currency::from_parser(parser)?)
        } else {
            None
        };
        let issuer = if ty & TYPE_ISSUER != 0 {
            Some(AccountId::from_parser(parser)?)
        } else {
            None
        };
        Ok(Self {
            account,
            currency,
            issuer,
        })
    }

    fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) {
        sink.put_u8(self.type_byte());
        if let Some(account) = &self.account {
            account.to_bytes_sink(sink);
        }
        if let Some(currency) = &self.currency {
            currency.to_bytes_sink(sink);
        }
        if let Some(issuer) = &self.issuer {
            issuer.to_bytes_sink(sink);
        }
    }

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(account) = &self.account {
            map.insert("account".into(), account.to_json());
        }
        if let Some(currency) = &self.currency {
            map.insert("currency".into(), currency.to_json());
        }
        if let Some(issuer) = &self.issuer {
            map.insert("issuer".into(), issuer.to_json());
        }
        Value::Object(map)
    }

    fn from_json(json: &Value) -> Result<Self> {
        let map = json
            .as_object()
            .ok_or_else(|| CodecError::json("path hop object", json))?;
        Ok(Self {
            account: map.get("account").map(AccountId::from_json).transpose()?,
            currency: map.get("currency").map(Currency::from_json).transpose()?,
            issuer: map.get("issuer").map(AccountId::from_json).transpose()?,
        })
    }
}

pub type Path = Vec<Hop>;

/// An ordered list of alternative paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathSet(pub Vec<Path>);

impl PathSet {
    pub fn paths(&self) -> &[Path] {
        &self.0
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> Result<Self> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        loop {
            match parser.read_u8()? {
                PATHSET_END => break,
                PATH_SEPARATOR => paths.push(std::mem::take(&mut current)),
                ty => current.push(Hop::from_parser(ty, parser)?),
            }
        }
        if !current.is_empty() || !paths.is_empty() {
            paths.push(current);
        }
        Ok(Self(paths))
    }

    pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                sink.put_u8(PATH_SEPARATOR);
            }
            for hop in path {
                hop.to_bytes_sink(sink);
            }
        }
        sink.put_u8(PATHSET_END);
    }

    pub fn to_json(&self) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|path| Value::Array(path.iter().map(Hop::to_json).collect()))
                .collect(),
        )
    }

    pub fn from_json(json: &Value) -> Result<Self> {
        let outer = json
            .as_array()
            .ok_or_else(|| CodecError::json("array of paths", json))?;
        let mut paths = Vec::with_capacity(outer.len());
        for path in outer {
            let hops = path
                .as_array()
                .ok_or_else(|| CodecError::json("array of hops", path))?;
            paths.push(hops.iter().map(Hop::from_json).collect::<Result<Vec<_>>>()?);
        }
        Ok(Self(paths))
    }
}
