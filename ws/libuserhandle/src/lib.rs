//! Type definitions and integer arithmetic for multi-user uids.
//!
//! A uid encodes two values: the user (account) it belongs to and the app (or system
//! component) inside that user. See [`uid`] for the codec, [`gid`] for the derived
//! group ids and [`UserHandle`] for the value type that represents a user.

#![cfg_attr(not(test), no_std)]
#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(clippy::redundant_pub_crate, clippy::fallible_impl_from)]
// I can not influence this; this is the problem of some dependencies
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]
// I see a benefit here: Even tho it might not be usable from the outside world,
// it may contain useful information about how the implementation works.
#![allow(rustdoc::private_intra_doc_links)]
#![allow(rustdoc::missing_doc_code_examples)]

#[allow(unused)]
#[cfg_attr(test, macro_use)]
#[cfg(test)]
extern crate std;

#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

pub mod consts;
pub mod gid;
mod parcel;
pub use parcel::*;
pub mod uid;
mod user_arg;
pub use user_arg::*;
mod user_handle;
pub use user_handle::*;

/// Re-export the `postcard`-version required for serialization of parcel data.
pub use postcard as ipc_postcard;
/// Re-export the `no_std` serde-version required for serialization of parcel data.
pub use serde as ipc_serde;

/// A uid: `user_id * PER_USER_RANGE + app_id`. See [`uid`].
pub type Uid = i32;

/// The user part of a [`Uid`]. Negative values are sentinels, such as
/// [`consts::USER_ALL`].
pub type UserId = i32;

/// The app part of a [`Uid`], i.e. the uid with the user stripped off.
pub type AppId = i32;

/// A group id derived from a [`Uid`]. See [`gid`].
pub type Gid = i32;
