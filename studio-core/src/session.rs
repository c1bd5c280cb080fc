//! Logged-in session
//!
//! A [`Session`] is produced by a successful login and handed to whatever
//! needs to act on behalf of the member. Logging out means dropping it.

use shared::models::{Member, MemberId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    member_id: MemberId,
    member_name: String,
}

impl Session {
    pub(crate) fn start(member: &Member) -> Self {
        Self {
            member_id: member.id,
            member_name: member.name.clone(),
        }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }
}
