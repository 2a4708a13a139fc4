//! Encoding and decoding of [`Uid`]s and the predicates built on top of it.
//!
//! A uid is `user_id * PER_USER_RANGE + app_id`. The app id is further partitioned
//! into sub ranges by convention (see [`crate::consts`]):
//! ```text
//! 0 ............. 9999 | 10000 ... 19999 | ... | 90000 ... 98999 | 99000 ... 99999
//! core components      | regular apps    |     | app zygote iso. | isolated
//! ```

use crate::consts::{
    FIRST_APPLICATION_UID,
    FIRST_APP_ZYGOTE_ISOLATED_UID,
    FIRST_ISOLATED_UID,
    LAST_APPLICATION_UID,
    LAST_APP_ZYGOTE_ISOLATED_UID,
    LAST_ISOLATED_UID,
    MU_ENABLED,
    PER_USER_RANGE,
    USER_SYSTEM,
};
use crate::{
    AppId,
    Uid,
    UserHandle,
    UserId,
};
use alloc::string::String;
use core::fmt::Write;

/// Returns the user id for a given uid.
pub const fn user_id(uid: Uid) -> UserId {
    if MU_ENABLED {
        uid / PER_USER_RANGE
    } else {
        USER_SYSTEM
    }
}

/// Returns the app id (or base uid) for a given uid, stripping out the user id from it.
pub const fn app_id(uid: Uid) -> AppId {
    uid % PER_USER_RANGE
}

/// Returns the uid that is composed from the user id and the app id. The app id is
/// taken modulo [`PER_USER_RANGE`], so out of range values get truncated silently.
pub const fn uid_of(user_id: UserId, app_id: AppId) -> Uid {
    if MU_ENABLED {
        user_id
            .wrapping_mul(PER_USER_RANGE)
            .wrapping_add(app_id % PER_USER_RANGE)
    } else {
        app_id
    }
}

/// Checks whether both uids belong to the same user.
pub const fn is_same_user(uid1: Uid, uid2: Uid) -> bool {
    user_id(uid1) == user_id(uid2)
}

/// Checks whether both uids refer to the same app id, ignoring the user part.
pub const fn is_same_app(uid1: Uid, uid2: Uid) -> bool {
    app_id(uid1) == app_id(uid2)
}

/// Whether a uid belongs to a regular app. *Note* "Not a regular app" does not mean
/// "it's system", because of isolated uids. Use [`is_core`] for that.
pub const fn is_app(uid: Uid) -> bool {
    if uid >= 0 {
        let app_id = app_id(uid);
        app_id >= FIRST_APPLICATION_UID && app_id <= LAST_APPLICATION_UID
    } else {
        false
    }
}

/// Whether a uid belongs to a system core component.
pub const fn is_core(uid: Uid) -> bool {
    if uid >= 0 {
        app_id(uid) < FIRST_APPLICATION_UID
    } else {
        false
    }
}

/// Whether a uid belongs to an isolated process, either a fully isolated one or
/// one that was spawned from an app zygote.
pub const fn is_isolated(uid: Uid) -> bool {
    if uid > 0 {
        let app_id = app_id(uid);
        (app_id >= FIRST_ISOLATED_UID && app_id <= LAST_ISOLATED_UID)
            || (app_id >= FIRST_APP_ZYGOTE_ISOLATED_UID && app_id <= LAST_APP_ZYGOTE_ISOLATED_UID)
    } else {
        false
    }
}

/// Returns the user for a given uid.
pub fn user_handle_for_uid(uid: Uid) -> UserHandle {
    UserHandle::of(user_id(uid))
}

/// Writes a text representation of the uid that breaks out its individual parts.
///
/// Uids below [`FIRST_APPLICATION_UID`] are written as is. All others are written as
/// `u<user>` followed by
/// * `i<n>` for isolated processes,
/// * `ai<n>` for isolated processes of an app zygote,
/// * `a<n>` for regular apps,
/// * `s<n>` for system app ids.
pub fn write_uid<W: Write>(w: &mut W, uid: Uid) -> core::fmt::Result {
    if uid < FIRST_APPLICATION_UID {
        return write!(w, "{}", uid);
    }
    write!(w, "u{}", user_id(uid))?;
    let app_id = app_id(uid);
    if is_isolated(app_id) {
        if app_id >= FIRST_ISOLATED_UID {
            write!(w, "i{}", app_id - FIRST_ISOLATED_UID)
        } else {
            write!(w, "ai{}", app_id - FIRST_APP_ZYGOTE_ISOLATED_UID)
        }
    } else if app_id >= FIRST_APPLICATION_UID {
        write!(w, "a{}", app_id - FIRST_APPLICATION_UID)
    } else {
        write!(w, "s{}", app_id)
    }
}

/// Like [`write_uid`] but returns a new string.
pub fn format_uid(uid: Uid) -> String {
    let mut buf = String::new();
    // writing into a String never fails
    let _ = write_uid(&mut buf, uid);
    buf
}
