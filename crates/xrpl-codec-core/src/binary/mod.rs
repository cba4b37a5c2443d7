//! The wire grammar: field headers, variable-length prefixes, and the
//! cursor/sink pair that reads and writes them.

mod parser;
mod serializer;
mod sink;

pub use parser::BinaryParser;
pub use serializer::{encode_vl, BinarySerializer, MAX_VL_LENGTH};
pub use sink::BytesSink;
