use std::collections::HashSet;

use twilight_model::gateway::payload::incoming::MessageCreate;

/// Whether a user is one of the configured bot owners.
pub fn is_owner(owner_ids: &HashSet<u64>, user_id: u64) -> bool {
    owner_ids.contains(&user_id)
}

/// Owner pre-filter for message commands.
///
/// Webhook and bot authors never pass, even if their id is listed.
pub fn is_message_from_owner(owner_ids: &HashSet<u64>, msg: &MessageCreate) -> bool {
    !msg.author.bot && msg.webhook_id.is_none() && is_owner(owner_ids, msg.author.id.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_listed_users_are_owners() {
        let owners = HashSet::from([10, 20]);
        assert!(is_owner(&owners, 10));
        assert!(is_owner(&owners, 20));
        assert!(!is_owner(&owners, 30));
        assert!(!is_owner(&HashSet::new(), 10));
    }
}
