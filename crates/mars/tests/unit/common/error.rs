//! # Error Tests
//!
//! Checks the user-facing messages and the conversions into [`MarsError`].

use mars_core::MarsError;
use mars_core::common::error::{ConfigError, DecodeError, LoadError};
use mars_core::isa::{OpType, Operand};

#[test]
fn decode_error_messages() {
    assert_eq!(
        DecodeError::InvalidOpType { raw: 0xd }.to_string(),
        "invalid operation type 0xd"
    );
    assert_eq!(
        DecodeError::InvalidMode {
            operand: Operand::B,
            mode: 3
        }
        .to_string(),
        "invalid addressing mode 3 on B operand"
    );
    assert_eq!(
        DecodeError::ImmediateDestination {
            op: OpType::Djz,
            operand: Operand::A
        }
        .to_string(),
        "DJZ cannot use an immediate A operand as a destination"
    );
}

#[test]
fn load_error_messages() {
    assert_eq!(
        LoadError::BlockOutOfRange { block: 4, blocks: 2 }.to_string(),
        "block 4 out of range; core has 2 blocks"
    );
    assert_eq!(LoadError::NoFreeBlock.to_string(), "no free block left in core");
}

#[test]
fn errors_convert_into_mars_error() {
    let e: MarsError = ConfigError::ZeroCoreSize.into();
    assert!(matches!(e, MarsError::Config(ConfigError::ZeroCoreSize)));
    assert_eq!(e.to_string(), "core size must be non-zero");

    let e: MarsError = DecodeError::InvalidOpType { raw: 9 }.into();
    assert!(matches!(e, MarsError::Decode(_)));
}
