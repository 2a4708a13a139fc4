//! Mappings from uids to the group ids that are derived from them.
//!
//! Invalid input never fails loudly. All mappings return [`ERR_GID`] instead.

use crate::consts::{
    AID_CACHE_GID_START,
    AID_SHARED_GID_START,
    ERR_GID,
    FIRST_APPLICATION_UID,
    LAST_APPLICATION_UID,
    ROOT_UID,
    SHARED_USER_GID,
};
use crate::uid::{
    app_id,
    uid_of,
    user_id,
};
use crate::{
    AppId,
    Gid,
    Uid,
    UserId,
};

/// Returns the gid shared between all apps of the given user.
pub const fn user_gid(user_id: UserId) -> Gid {
    uid_of(user_id, SHARED_USER_GID)
}

/// Returns the shared app gid of the uid. See [`shared_app_gid_for`].
pub fn shared_app_gid(uid: Uid) -> Gid {
    shared_app_gid_for(user_id(uid), app_id(uid))
}

/// Returns the gid that all users share for the given app id.
///
/// Regular apps are mapped into the range starting at [`AID_SHARED_GID_START`]. Core
/// components keep their app id. Everything else is [`ERR_GID`].
pub fn shared_app_gid_for(_user_id: UserId, app_id: AppId) -> Gid {
    if (FIRST_APPLICATION_UID..=LAST_APPLICATION_UID).contains(&app_id) {
        (app_id - FIRST_APPLICATION_UID) + AID_SHARED_GID_START
    } else if (ROOT_UID..=FIRST_APPLICATION_UID).contains(&app_id) {
        app_id
    } else {
        log::trace!("no shared app gid for app_id={}", app_id);
        ERR_GID
    }
}

/// Returns the app id for a given shared app gid or [`ERR_GID`] if it is none.
pub const fn app_id_from_shared_app_gid(gid: Gid) -> AppId {
    let app_id = app_id(gid) + FIRST_APPLICATION_UID - AID_SHARED_GID_START;
    if app_id < 0 || app_id >= AID_SHARED_GID_START {
        ERR_GID
    } else {
        app_id
    }
}

/// Whether the gid is a shared app gid.
pub const fn is_shared_app_gid(gid: Gid) -> bool {
    app_id_from_shared_app_gid(gid) != ERR_GID
}

/// Returns the cache gid of the uid. See [`cache_app_gid_for`].
pub fn cache_app_gid(uid: Uid) -> Gid {
    cache_app_gid_for(user_id(uid), app_id(uid))
}

/// Returns the gid of the app's cache directory. Unlike the shared app gid, it is
/// specific to the user. Only regular apps have one; everything else is [`ERR_GID`].
pub fn cache_app_gid_for(user_id: UserId, app_id: AppId) -> Gid {
    if (FIRST_APPLICATION_UID..=LAST_APPLICATION_UID).contains(&app_id) {
        uid_of(user_id, (app_id - FIRST_APPLICATION_UID) + AID_CACHE_GID_START)
    } else {
        log::trace!("no cache app gid for app_id={}", app_id);
        ERR_GID
    }
}

#[cfg(all(test, feature = "multiuser"))]
mod tests {
    use super::*;
    use crate::consts::{
        AID_SHARED_GID_END,
        FIRST_ISOLATED_UID,
        SYSTEM_UID,
    };

    #[test]
    fn test_user_gid() {
        assert_eq!(user_gid(0), SHARED_USER_GID);
        assert_eq!(user_gid(10), 1_009_997);
    }

    #[test]
    fn test_shared_app_gid() {
        assert_eq!(shared_app_gid(FIRST_APPLICATION_UID), AID_SHARED_GID_START);
        assert_eq!(shared_app_gid(uid_of(10, 10123)), 50123);
        assert_eq!(shared_app_gid(LAST_APPLICATION_UID), AID_SHARED_GID_END);
        // core components keep their id
        assert_eq!(shared_app_gid(SYSTEM_UID), SYSTEM_UID);
        assert_eq!(shared_app_gid(ROOT_UID), ROOT_UID);
        // neither root nor application range
        assert_eq!(shared_app_gid(FIRST_ISOLATED_UID), ERR_GID);
        assert_eq!(shared_app_gid_for(0, LAST_APPLICATION_UID + 1), ERR_GID);
        assert_eq!(shared_app_gid_for(0, -5), ERR_GID);
    }

    #[test]
    fn test_app_id_from_shared_app_gid() {
        assert_eq!(app_id_from_shared_app_gid(50123), 10123);
        assert_eq!(app_id_from_shared_app_gid(uid_of(3, 50123)), 10123);
        assert_eq!(app_id_from_shared_app_gid(AID_SHARED_GID_START), FIRST_APPLICATION_UID);
        assert_eq!(app_id_from_shared_app_gid(0), ERR_GID);
        assert_eq!(app_id_from_shared_app_gid(39_999), ERR_GID);
        assert!(is_shared_app_gid(50_000));
        assert!(!is_shared_app_gid(SYSTEM_UID));

        for app_id in FIRST_APPLICATION_UID..=LAST_APPLICATION_UID {
            assert_eq!(app_id_from_shared_app_gid(shared_app_gid_for(0, app_id)), app_id);
        }
    }

    #[test]
    fn test_cache_app_gid() {
        assert_eq!(cache_app_gid(FIRST_APPLICATION_UID), AID_CACHE_GID_START);
        assert_eq!(cache_app_gid(uid_of(10, 10123)), uid_of(10, 20123));
        assert_eq!(cache_app_gid(SYSTEM_UID), ERR_GID);
        assert_eq!(cache_app_gid(uid_of(10, FIRST_ISOLATED_UID)), ERR_GID);
    }
}
