//! Serialized form of a [`UserHandle`].
//!
//! A handle occupies exactly one fixed-width field in a parcel: the user id as
//! little-endian `i32` ([`PARCEL_SIZE`] bytes). An absent handle is written as
//! [`USER_NULL`], so that it fits into the same field without a presence flag.
//!
//! The handle implements serde's traits and can therefore be part of bigger
//! records, which are encoded with [`postcard`](crate::ipc_postcard).

use crate::consts::USER_NULL;
use crate::ipc_serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use crate::{
    UserHandle,
    UserId,
};
use core::fmt::{
    Display,
    Formatter,
};

/// Number of bytes a [`UserHandle`] occupies in a parcel.
pub const PARCEL_SIZE: usize = core::mem::size_of::<UserId>();

/// Errors of the parcel functions in this module.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParcelError {
    /// The output buffer can't hold the record.
    BufferTooSmall,
    /// The input ended before the record was complete.
    UnexpectedEnd,
    /// The input is not a valid record.
    Malformed,
}

impl Display for ParcelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small for parcel"),
            Self::UnexpectedEnd => write!(f, "unexpected end of parcel"),
            Self::Malformed => write!(f, "malformed parcel"),
        }
    }
}

impl From<postcard::Error> for ParcelError {
    fn from(err: postcard::Error) -> Self {
        log::trace!("parcel error: {:?}", err);
        match err {
            postcard::Error::SerializeBufferFull => Self::BufferTooSmall,
            postcard::Error::DeserializeUnexpectedEnd => Self::UnexpectedEnd,
            _ => Self::Malformed,
        }
    }
}

impl Serialize for UserHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // a byte array keeps the field fixed-width; postcard would zigzag-encode an i32
        self.identifier().to_le_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <[u8; PARCEL_SIZE]>::deserialize(deserializer)?;
        Ok(Self::of(UserId::from_le_bytes(bytes)))
    }
}

/// Writes the handle into the buffer and returns the used part of it.
pub fn write_to_parcel<'a>(
    handle: &UserHandle,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], ParcelError> {
    Ok(postcard::to_slice(handle, buf)?)
}

/// Reads a handle that was written with [`write_to_parcel`]. Trailing bytes are ignored.
pub fn read_from_parcel(bytes: &[u8]) -> Result<UserHandle, ParcelError> {
    Ok(postcard::from_bytes::<UserHandle>(bytes)?)
}

/// Like [`write_to_parcel`] but writes [`USER_NULL`] if there is no handle. Must be
/// read with [`read_nullable_from_parcel`].
pub fn write_nullable_to_parcel<'a>(
    handle: Option<&UserHandle>,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], ParcelError> {
    write_to_parcel(handle.unwrap_or(&UserHandle::NULL), buf)
}

/// Reads a handle that was written with [`write_nullable_to_parcel`].
pub fn read_nullable_from_parcel(bytes: &[u8]) -> Result<Option<UserHandle>, ParcelError> {
    let handle = read_from_parcel(bytes)?;
    if handle.identifier() == USER_NULL {
        Ok(None)
    } else {
        Ok(Some(handle))
    }
}
