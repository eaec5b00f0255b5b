mod info;
mod invite;

use super::*;
use crate::model::member::MemberRecord;
use test_utils::{builder::TestBuilder, factory};

const GUILD: u64 = 100;
const OWNER: u64 = 1;

/// Loads a member record the way `remove` sees it.
async fn record(db: &DatabaseConnection, user_id: u64) -> Option<MemberRecord> {
    LeagueMemberRepository::new(db)
        .get_record(GUILD, user_id)
        .await
        .unwrap()
}
