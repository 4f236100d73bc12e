//! Live room membership.
//!
//! The registry is the single source of truth for "who is in this room right
//! now". Counts are derived from the member sets, so they cannot drift or go
//! negative under interleaved join/leave sequences. Callers share one
//! registry behind a `tokio::sync::Mutex`; every read-modify-write happens
//! under that lock.

use std::collections::{HashMap, HashSet};

use super::value_object::{RoomId, SessionId};

/// In-process index of session↔room bindings and per-room member sets.
///
/// A session is a member of exactly zero or one room; a room absent from the
/// index is equivalent to an empty room.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// Active binding of each connected session, at most one room each.
    bindings: HashMap<SessionId, RoomId>,
    /// Members of each room currently having at least one session.
    members: HashMap<RoomId, HashSet<SessionId>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `session_id` to `room_id` and return the room's updated count.
    ///
    /// Any previous binding is removed first; the departed room and its
    /// decremented count are returned so the caller can notify it. Rebinding
    /// to the currently bound room goes through the same leave/join cycle.
    pub fn join(
        &mut self,
        session_id: SessionId,
        room_id: RoomId,
    ) -> (usize, Option<(RoomId, usize)>) {
        let departed = self.leave(&session_id);

        self.bindings.insert(session_id, room_id.clone());
        let members = self.members.entry(room_id).or_default();
        members.insert(session_id);

        (members.len(), departed)
    }

    /// Remove the session's binding, returning the departed room and its
    /// updated count. `None` when the session was not bound.
    pub fn leave(&mut self, session_id: &SessionId) -> Option<(RoomId, usize)> {
        let room_id = self.bindings.remove(session_id)?;

        let count = match self.members.get_mut(&room_id) {
            Some(members) => {
                members.remove(session_id);
                members.len()
            }
            None => 0,
        };
        if count == 0 {
            self.members.remove(&room_id);
        }

        Some((room_id, count))
    }

    /// Number of sessions currently in the room; 0 for an unknown room.
    pub fn count_of(&self, room_id: &RoomId) -> usize {
        self.members.get(room_id).map_or(0, HashSet::len)
    }

    /// Sessions currently in the room, in no particular order.
    pub fn members_of(&self, room_id: &RoomId) -> Vec<SessionId> {
        self.members
            .get(room_id)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The room the session is currently bound to, if any.
    pub fn room_of(&self, session_id: &SessionId) -> Option<RoomId> {
        self.bindings.get(session_id).cloned()
    }
}
