use anchor_lang::prelude::*;

use crate::DOMAIN_SEPARATOR;

/// Exact byte layout signed by validators and verified by the light client:
///
/// ```text
/// DOMAIN_SEPARATOR | asset_id (1) | set_version (8, LE) | burn_nonce (8, LE) | amount (8, LE) | user (32)
/// ```
///
/// Any change to a field or to this order invalidates every outstanding
/// signature. This function is the single source of truth shared by the
/// off-chain signing path and the light client's verification path; they
/// must never diverge.
pub fn build_canonical_message(
    asset_id: u8,
    set_version: u64,
    burn_nonce: u64,
    amount: u64,
    user: Pubkey,
) -> Vec<u8> {
    let mut message = Vec::with_capacity(DOMAIN_SEPARATOR.len() + 1 + 8 + 8 + 8 + 32);
    message.extend_from_slice(DOMAIN_SEPARATOR.as_bytes());
    message.push(asset_id);
    message.extend_from_slice(&set_version.to_le_bytes());
    message.extend_from_slice(&burn_nonce.to_le_bytes());
    message.extend_from_slice(&amount.to_le_bytes());
    message.extend_from_slice(&user.to_bytes());
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differs_by_asset_id() {
        let user = Pubkey::new_unique();
        let xencat = build_canonical_message(1, 1, 42, 10_000, user);
        let dgn = build_canonical_message(2, 1, 42, 10_000, user);
        assert_ne!(xencat, dgn, "asset byte must separate signature domains");
    }

    #[test]
    fn differs_by_set_version() {
        let user = Pubkey::new_unique();
        let v1 = build_canonical_message(1, 1, 42, 10_000, user);
        let v2 = build_canonical_message(1, 2, 42, 10_000, user);
        assert_ne!(v1, v2, "set_version byte must separate signature domains");
    }

    #[test]
    fn deterministic() {
        let user = Pubkey::new_unique();
        let a = build_canonical_message(1, 1, 42, 10_000, user);
        let b = build_canonical_message(1, 1, 42, 10_000, user);
        assert_eq!(a, b);
    }

    #[test]
    fn starts_with_domain_separator() {
        let user = Pubkey::new_unique();
        let msg = build_canonical_message(1, 1, 42, 10_000, user);
        assert!(msg.starts_with(DOMAIN_SEPARATOR.as_bytes()));
    }
}
