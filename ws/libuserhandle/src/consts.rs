//! Constants that partition the uid space.
//! The values must match the ones of the host platform that allocates uids to processes.

use crate::{
    AppId,
    Gid,
    Uid,
    UserId,
};

/// Range of uids allocated for a user.
pub const PER_USER_RANGE: i32 = 100_000;

/// Whether uids carry a user part at all. See the `multiuser` cargo feature.
pub const MU_ENABLED: bool = cfg!(feature = "multiuser");

/// A user id to indicate all users on the device.
pub const USER_ALL: UserId = -1;
/// A user id to indicate the currently active user.
pub const USER_CURRENT: UserId = -2;
/// A user id to indicate that we would like to send to the current user, but if this is
/// calling from a user process then we will send it to the caller's user instead of failing
/// with a security exception.
pub const USER_CURRENT_OR_SELF: UserId = -3;
/// An undefined user id. Also marks an absent [`crate::UserHandle`] in a parcel.
pub const USER_NULL: UserId = -10000;
/// The "system" user of the device.
pub const USER_SYSTEM: UserId = 0;
/// The "owner" user of the device. Same as [`USER_SYSTEM`].
#[deprecated(note = "use USER_SYSTEM")]
pub const USER_OWNER: UserId = USER_SYSTEM;
/// User serial of the "system" user.
pub const USER_SERIAL_SYSTEM: i32 = 0;

/// First user id that belongs to a secondary user.
pub const MIN_SECONDARY_USER_ID: UserId = 10;
/// Number of secondary users starting at [`MIN_SECONDARY_USER_ID`] with a cached
/// [`crate::UserHandle`].
pub const NUM_CACHED_USERS: usize = 4;

/// Returned by the gid mappings in [`crate::gid`] for invalid input.
pub const ERR_GID: Gid = -1;

/// Uid of the root user.
pub const ROOT_UID: Uid = 0;
/// Uid of the system server.
pub const SYSTEM_UID: Uid = 1000;
/// Gid shared by all apps that run in the same user.
pub const SHARED_USER_GID: Gid = 9997;
/// First app id of a regular application.
pub const FIRST_APPLICATION_UID: AppId = 10000;
/// Last app id of a regular application.
pub const LAST_APPLICATION_UID: AppId = 19999;
/// First gid of the cache gid range. Each app has one, offset by its app id.
pub const AID_CACHE_GID_START: Gid = 20000;
/// First gid of the shared app gid range.
pub const AID_SHARED_GID_START: Gid = 50000;
/// Last gid of the shared app gid range.
pub const AID_SHARED_GID_END: Gid = 59999;
/// First app id for isolated processes spawned from an app zygote.
pub const FIRST_APP_ZYGOTE_ISOLATED_UID: AppId = 90000;
/// Last app id for isolated processes spawned from an app zygote.
pub const LAST_APP_ZYGOTE_ISOLATED_UID: AppId = 98999;
/// First app id for fully isolated sandboxed processes.
pub const FIRST_ISOLATED_UID: AppId = 99000;
/// Last app id for fully isolated sandboxed processes.
pub const LAST_ISOLATED_UID: AppId = 99999;

/// Alias for [`ROOT_UID`].
pub const AID_ROOT: Uid = ROOT_UID;
/// Alias for [`FIRST_APPLICATION_UID`].
pub const AID_APP_START: AppId = FIRST_APPLICATION_UID;
/// Alias for [`LAST_APPLICATION_UID`].
pub const AID_APP_END: AppId = LAST_APPLICATION_UID;
