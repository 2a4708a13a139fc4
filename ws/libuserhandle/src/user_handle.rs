//! Module for [`UserHandle`].

use crate::consts::{
    MIN_SECONDARY_USER_ID,
    NUM_CACHED_USERS,
    USER_ALL,
    USER_CURRENT,
    USER_CURRENT_OR_SELF,
    USER_NULL,
    USER_SYSTEM,
};
use crate::uid::uid_of;
use crate::{
    AppId,
    Uid,
    UserId,
};
use alloc::vec::Vec;
use core::fmt::{
    Display,
    Formatter,
};

/// Representation of a user on the device. Wraps a [`UserId`].
///
/// Two handles are equal if their user ids are equal. Use [`UserHandle::of`] to get
/// handles for well-known user ids without constructing them again.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserHandle(UserId);

/// Canonical instances for the user ids that [`UserHandle::of`] recognizes.
static SYSTEM: UserHandle = UserHandle::SYSTEM;
static ALL: UserHandle = UserHandle::ALL;
static CURRENT: UserHandle = UserHandle::CURRENT;
static CURRENT_OR_SELF: UserHandle = UserHandle::CURRENT_OR_SELF;
static NULL: UserHandle = UserHandle::NULL;

/// Handles for the first secondary users. Built at compile time; read-only afterwards.
static CACHED_USERS: [UserHandle; NUM_CACHED_USERS] = {
    let mut users = [UserHandle::SYSTEM; NUM_CACHED_USERS];
    let mut i = 0;
    while i < NUM_CACHED_USERS {
        users[i] = UserHandle::new(MIN_SECONDARY_USER_ID + i as UserId);
        i += 1;
    }
    users
};

impl UserHandle {
    /// Handle of the "system" user of the device.
    pub const SYSTEM: Self = Self::new(USER_SYSTEM);
    /// Handle of the primary/owner user of the device. Same as [`Self::SYSTEM`].
    #[deprecated(note = "use UserHandle::SYSTEM")]
    pub const OWNER: Self = Self::SYSTEM;
    /// Handle that indicates all users on the device.
    pub const ALL: Self = Self::new(USER_ALL);
    /// Handle that indicates the current user of the device.
    pub const CURRENT: Self = Self::new(USER_CURRENT);
    /// Handle that indicates the current user, or the caller's user if the caller is a
    /// user process.
    pub const CURRENT_OR_SELF: Self = Self::new(USER_CURRENT_OR_SELF);
    /// Handle for an undefined user.
    pub(crate) const NULL: Self = Self::new(USER_NULL);

    /// Creates a new handle for the given user id.
    pub const fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    /// Returns a handle for the user id. Well-known user ids and the first
    /// [`NUM_CACHED_USERS`] secondary users come from a process-wide table; all others
    /// get constructed.
    pub fn of(user_id: UserId) -> Self {
        Self::cached(user_id)
            .copied()
            .unwrap_or_else(|| Self::new(user_id))
    }

    /// Looks up the canonical handle of the user id in the process-wide table, if there
    /// is one.
    pub fn cached(user_id: UserId) -> Option<&'static Self> {
        match user_id {
            USER_SYSTEM => Some(&SYSTEM),
            USER_ALL => Some(&ALL),
            USER_CURRENT => Some(&CURRENT),
            USER_CURRENT_OR_SELF => Some(&CURRENT_OR_SELF),
            USER_NULL => Some(&NULL),
            _ => {
                let index = user_id.checked_sub(MIN_SECONDARY_USER_ID)?;
                CACHED_USERS.get(usize::try_from(index).ok()?)
            }
        }
    }

    /// Returns the user id stored in this handle.
    pub const fn identifier(self) -> UserId {
        self.0
    }

    /// Returns the uid of the app id for this user.
    pub const fn uid(self, app_id: AppId) -> Uid {
        uid_of(self.0, app_id)
    }

    /// Whether this handle refers to the system user.
    pub const fn is_system(self) -> bool {
        self.0 == USER_SYSTEM
    }

    /// Whether this handle refers to the owner user.
    #[deprecated(note = "use UserHandle::is_system")]
    pub const fn is_owner(self) -> bool {
        self.is_system()
    }
}

impl Display for UserHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "UserHandle{{{}}}", self.0)
    }
}

impl From<UserHandle> for UserId {
    fn from(handle: UserHandle) -> Self {
        handle.identifier()
    }
}

/// Returns the handles for the given user ids. See [`UserHandle::of`].
pub fn to_user_handles(user_ids: &[UserId]) -> Vec<UserHandle> {
    user_ids.iter().copied().map(UserHandle::of).collect()
}

/// Returns the user ids of the given handles.
pub fn from_user_handles(users: &[UserHandle]) -> Vec<UserId> {
    users.iter().map(|user| user.identifier()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_of_system() {
        assert_eq!(UserHandle::of(0), UserHandle::SYSTEM);
        assert_eq!(UserHandle::of(0), UserHandle::of(0));
        assert!(UserHandle::of(0).is_system());
        assert!(core::ptr::eq(
            UserHandle::cached(0).unwrap(),
            UserHandle::cached(0).unwrap()
        ));
    }

    #[test]
    fn test_of_sentinels() {
        assert_eq!(UserHandle::of(USER_ALL), UserHandle::ALL);
        assert_eq!(UserHandle::of(USER_CURRENT), UserHandle::CURRENT);
        assert_eq!(UserHandle::of(USER_CURRENT_OR_SELF), UserHandle::CURRENT_OR_SELF);
        assert_eq!(UserHandle::of(USER_NULL), UserHandle::NULL);
    }

    #[test]
    fn test_cached_range() {
        for user_id in MIN_SECONDARY_USER_ID..MIN_SECONDARY_USER_ID + NUM_CACHED_USERS as i32 {
            let cached = UserHandle::cached(user_id).expect("must be cached");
            assert_eq!(cached.identifier(), user_id);
            assert_eq!(UserHandle::of(user_id), *cached);
        }
        assert!(UserHandle::cached(MIN_SECONDARY_USER_ID - 1).is_none());
        assert!(UserHandle::cached(MIN_SECONDARY_USER_ID + NUM_CACHED_USERS as i32).is_none());
        assert!(UserHandle::cached(i32::MIN).is_none());
        assert!(UserHandle::cached(-4).is_none());
    }

    #[test]
    fn test_of_uncached() {
        let user = UserHandle::of(150);
        assert_eq!(user, UserHandle::new(150));
        assert_eq!(user.identifier(), 150);
        assert!(!user.is_system());
    }

    #[test]
    #[allow(deprecated)]
    fn test_owner() {
        assert_eq!(UserHandle::OWNER, UserHandle::SYSTEM);
        assert!(UserHandle::SYSTEM.is_owner());
        assert!(!UserHandle::of(10).is_owner());
    }

    #[cfg(feature = "multiuser")]
    #[test]
    fn test_uid() {
        assert_eq!(UserHandle::of(10).uid(10123), 1_010_123);
        assert_eq!(UserHandle::SYSTEM.uid(1000), 1000);
    }

    #[test]
    fn test_equality_and_hash() {
        let set = [UserHandle::new(11), UserHandle::of(11), UserHandle::new(12)]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(UserHandle::of(10).to_string(), "UserHandle{10}");
        assert_eq!(UserHandle::ALL.to_string(), "UserHandle{-1}");
    }

    #[test]
    fn test_user_handle_lists() {
        let handles = to_user_handles(&[0, 10, 42, USER_ALL]);
        assert_eq!(
            handles,
            vec![
                UserHandle::SYSTEM,
                UserHandle::new(10),
                UserHandle::new(42),
                UserHandle::ALL
            ]
        );
        assert_eq!(from_user_handles(&handles), vec![0, 10, 42, USER_ALL]);
        assert!(to_user_handles(&[]).is_empty());
    }
}
