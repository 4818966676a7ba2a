/*!
# Marketplace Identifiers

Fixed-width identifiers used as seeds and instruction arguments.
*/

use crate::{SdkError, SdkResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use solana_sdk::pubkey::Pubkey;
use std::{fmt, str::FromStr};

pub const UUID_LEN: usize = 16;

fn parse_uuid_hex(value: &str) -> SdkResult<[u8; UUID_LEN]> {
    let bytes = hex::decode(value).map_err(|e| SdkError::InvalidUuid {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    bytes.try_into().map_err(|bytes: Vec<u8>| SdkError::InvalidUuid {
        value: value.to_string(),
        reason: format!("expected {} bytes, got {}", UUID_LEN, bytes.len()),
    })
}

macro_rules! uuid_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name([u8; UUID_LEN]);

        impl $name {
            pub const fn new(bytes: [u8; UUID_LEN]) -> Self {
                Self(bytes)
            }

            pub fn from_hex(value: &str) -> SdkResult<Self> {
                parse_uuid_hex(value).map(Self)
            }

            pub fn to_bytes(&self) -> [u8; UUID_LEN] {
                self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = SdkError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::from_hex(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

uuid_newtype!(
    /// Identifies a listed machine together with its owner.
    MachineUuid
);

uuid_newtype!(
    /// Identifies an order together with its buyer.
    OrderUuid
);

impl OrderUuid {
    /// ASCII digits of the millisecond timestamp, left-aligned and
    /// zero-padded to 16 bytes.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        let digits = millis.to_string();
        let mut bytes = [0u8; UUID_LEN];
        let len = digits.len().min(UUID_LEN);
        bytes[..len].copy_from_slice(&digits.as_bytes()[..len]);
        Self(bytes)
    }

    pub fn now() -> Self {
        Self::from_timestamp_millis(chrono::Utc::now().timestamp_millis())
    }
}

/// One period's reward for one machine. Never persisted; it only exists
/// long enough to build a `claim` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardClaim {
    pub period: u32,
    pub machine_uuid: MachineUuid,
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
}

impl RewardClaim {
    pub fn new(period: u32, machine_uuid: MachineUuid, owner: Pubkey) -> Self {
        Self {
            period,
            machine_uuid,
            owner,
        }
    }
}

mod pubkey_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let value = String::deserialize(deserializer)?;
        Pubkey::from_str(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_uuid_hex_round_trip() {
        let hex_str = "00112233445566778899aabbccddeeff";
        let uuid = MachineUuid::from_hex(hex_str).unwrap();
        assert_eq!(uuid.to_bytes()[1], 0x11);
        assert_eq!(uuid.to_string(), hex_str);
    }

    #[test]
    fn test_machine_uuid_wrong_length() {
        let err = MachineUuid::from_hex("0011").unwrap_err();
        assert!(matches!(err, SdkError::InvalidUuid { .. }));
        assert!(err.to_string().contains("expected 16 bytes, got 2"));
    }

    #[test]
    fn test_machine_uuid_not_hex() {
        assert!(matches!(
            MachineUuid::from_hex("zz112233445566778899aabbccddeeff"),
            Err(SdkError::InvalidUuid { .. })
        ));
    }

    #[test]
    fn test_order_uuid_from_timestamp() {
        let uuid = OrderUuid::from_timestamp_millis(1_700_000_000_123);
        let bytes = uuid.to_bytes();

        assert_eq!(&bytes[..13], b"1700000000123");
        assert_eq!(&bytes[13..], &[0, 0, 0]);
        assert_eq!(uuid.to_string(), "31373030303030303030313233000000");
    }

    #[test]
    fn test_reward_claim_deserializes_from_json() {
        let owner = Pubkey::new_unique();
        let json = format!(
            r#"{{"period":7,"machine_uuid":"00000000000000000000000000000001","owner":"{}"}}"#,
            owner
        );

        let claim: RewardClaim = serde_json::from_str(&json).unwrap();
        assert_eq!(claim.period, 7);
        assert_eq!(claim.owner, owner);
        assert_eq!(claim.machine_uuid.to_bytes()[15], 1);
    }
}
