//! Validators for token values.
use crate::{
    errors::{TBError, TBResult},
    types::TokenType,
};

/// The size of the u8 space.
pub const U8_SIZE: usize = u8::MAX as usize + 1;

/// Convert `value` to a token, checking it is usable as a rank.
///
/// `T::max_value()` is reserved by the merge engine as its "no rank"
/// sentinel, so the largest usable token is one below it.
pub fn try_token<T: TokenType>(value: u64) -> TBResult<T> {
    match T::from_u64(value) {
        Some(token) if token != T::max_value() => Ok(token),
        _ => Err(TBError::TokenOutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_token() {
        assert_eq!(try_token::<u16>(0).unwrap(), 0);
        assert_eq!(try_token::<u16>(u16::MAX as u64 - 1).unwrap(), u16::MAX - 1);

        assert!(matches!(
            try_token::<u16>(u16::MAX as u64),
            Err(TBError::TokenOutOfRange)
        ));
        assert!(matches!(
            try_token::<u16>(100_000),
            Err(TBError::TokenOutOfRange)
        ));

        assert_eq!(try_token::<u32>(200_018).unwrap(), 200_018);
    }
}
