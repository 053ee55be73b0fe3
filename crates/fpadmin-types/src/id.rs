use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identifier of a record within its collection.
///
/// Every entity gets its own newtype so a `UserId` can never be handed to a
/// lookup expecting an `FpId`.
pub trait RecordKey:
    Clone
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + AsRef<str>
    + From<String>
    + Serialize
    + for<'de> Deserialize<'de>
{
    fn as_str(&self) -> &str {
        self.as_ref()
    }
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl RecordKey for $name {}
    };
}

record_id!(
    /// End user of the matching service (`U001`)
    UserId
);
record_id!(
    /// Financial planner account (`FP001`)
    FpId
);
record_id!(
    /// Referral partner (`P001`)
    PartnerId
);
record_id!(
    /// Monthly lead quota of one FP (`ALLOC001`)
    AllocationId
);
record_id!(
    /// One lead handed to an FP (`HIST001`)
    HistoryId
);
record_id!(ReviewId);
record_id!(PaymentUrlId);
record_id!(PlanId);
record_id!(FaqId);
record_id!(LegalDocumentId);
record_id!(BannerId);

/// Split a generated id into its prefix and numeric sequence.
///
/// Returns `None` when the id does not start with `prefix` or the remainder
/// is not purely decimal (e.g. hand-entered seed ids like `U-legacy`).
pub fn id_sequence(id: &str, prefix: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Format a generated id: prefix followed by a sequence padded to three digits.
pub fn format_id(prefix: &str, seq: u64) -> String {
    format!("{}{:03}", prefix, seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_id_pads_to_three_digits() {
        assert_eq!(format_id("U", 7), "U007");
        assert_eq!(format_id("FP", 42), "FP042");
        assert_eq!(format_id("ALLOC", 1234), "ALLOC1234");
    }

    #[test]
    fn test_id_sequence_parses_suffix() {
        assert_eq!(id_sequence("U007", "U"), Some(7));
        assert_eq!(id_sequence("FP120", "FP"), Some(120));
        assert_eq!(id_sequence("U1", "U"), Some(1));
    }

    #[test]
    fn test_id_sequence_rejects_foreign_ids() {
        assert_eq!(id_sequence("FP001", "U"), None);
        assert_eq!(id_sequence("U", "U"), None);
        assert_eq!(id_sequence("U-legacy", "U"), None);
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = UserId::new("U001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"U001\"");
    }
}
