use solana_sdk::pubkey::Pubkey;

/// Read-only mirror of the source chain's burn record layout. This program
/// never creates or mutates these accounts; it only parses what the source
/// chain's burn program has already written.
///
/// Layout (little-endian, after an 8-byte runtime discriminator this parser
/// skips): `user (32) | amount (u64) | nonce (u64) | timestamp (u64) |
/// record_hash (32) | bump (1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurnRecord {
    pub user: Pubkey,
    pub amount: u64,
    pub nonce: u64,
    pub timestamp: u64,
    pub record_hash: [u8; 32],
    pub bump: u8,
}

const DISCRIMINATOR_LEN: usize = 8;
const RECORD_LEN: usize = 32 + 8 + 8 + 8 + 32 + 1;

impl BurnRecord {
    pub fn seed(burn_nonce: u64) -> [Vec<u8>; 2] {
        [b"burn_record".to_vec(), burn_nonce.to_le_bytes().to_vec()]
    }

    pub fn derive_address(burn_program: &Pubkey, burn_nonce: u64) -> Pubkey {
        let seeds = Self::seed(burn_nonce);
        let seed_refs: Vec<&[u8]> = seeds.iter().map(|s| s.as_slice()).collect();
        Pubkey::find_program_address(&seed_refs, burn_program).0
    }

    /// Parses raw account data. Fields outside this exact byte layout are
    /// never trusted; any length mismatch is a parse failure, not a
    /// best-effort partial read.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() != DISCRIMINATOR_LEN + RECORD_LEN {
            return None;
        }
        let body = &data[DISCRIMINATOR_LEN..];

        let mut offset = 0;
        let user = Pubkey::new_from_array(body[offset..offset + 32].try_into().ok()?);
        offset += 32;
        let amount = u64::from_le_bytes(body[offset..offset + 8].try_into().ok()?);
        offset += 8;
        let nonce = u64::from_le_bytes(body[offset..offset + 8].try_into().ok()?);
        offset += 8;
        let timestamp = u64::from_le_bytes(body[offset..offset + 8].try_into().ok()?);
        offset += 8;
        let record_hash: [u8; 32] = body[offset..offset + 32].try_into().ok()?;
        offset += 32;
        let bump = body[offset];

        Some(BurnRecord {
            user,
            amount,
            nonce,
            timestamp,
            record_hash,
            bump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(record: &BurnRecord) -> Vec<u8> {
        let mut data = vec![0u8; DISCRIMINATOR_LEN];
        data.extend_from_slice(&record.user.to_bytes());
        data.extend_from_slice(&record.amount.to_le_bytes());
        data.extend_from_slice(&record.nonce.to_le_bytes());
        data.extend_from_slice(&record.timestamp.to_le_bytes());
        data.extend_from_slice(&record.record_hash);
        data.push(record.bump);
        data
    }

    #[test]
    fn round_trips_through_parse() {
        let record = BurnRecord {
            user: Pubkey::new_unique(),
            amount: 10_000,
            nonce: 42,
            timestamp: 1_700_000_000,
            record_hash: [7u8; 32],
            bump: 254,
        };

        let encoded = encode(&record);
        let parsed = BurnRecord::parse(&encoded).expect("valid layout parses");
        assert_eq!(parsed, record);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(BurnRecord::parse(&[0u8; 10]).is_none());
    }
}
