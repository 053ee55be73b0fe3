use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Closed set of operator-visible values with a display label and an ASCII key.
///
/// Labels are what the console shows (`公開中`); keys are what scripts type
/// (`published`). Parsing accepts either.
pub trait Choice: Copy + Eq + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
    fn key(&self) -> &'static str;
}

/// Look up a choice by label or key. Keys match case-insensitively and treat
/// `-` and `_` as the same character.
pub fn parse_choice<C: Choice>(input: &str) -> Option<C> {
    let trimmed = input.trim();
    let normalized = trimmed.replace('-', "_");
    C::ALL
        .iter()
        .copied()
        .find(|c| c.label() == trimmed || c.key().eq_ignore_ascii_case(&normalized))
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($label:literal, $key:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_choice(s).ok_or_else(|| Error::UnknownLabel {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

choice_enum!(
    /// Identity check state of an end user
    VerificationStatus, "verification status" {
        Verified => ("認証済み", "verified"),
        Unverified => ("未認証", "unverified"),
    }
);

choice_enum!(
    LineStatus, "line status" {
        Linked => ("連携済み", "linked"),
        Unlinked => ("未連携", "unlinked"),
    }
);

choice_enum!(
    FpType, "fp type" {
        Individual => ("個人", "individual"),
        Corporate => ("法人", "corporate"),
    }
);

choice_enum!(
    FpStatus, "fp status" {
        Active => ("活動中", "active"),
        Suspended => ("停止中", "suspended"),
    }
);

choice_enum!(
    /// Console permissions of an FP account
    FpRole, "fp role" {
        General => ("一般", "general"),
        Admin => ("管理者", "admin"),
    }
);

choice_enum!(
    PartnerStatus, "partner status" {
        Active => ("アクティブ", "active"),
        Suspended => ("停止中", "suspended"),
    }
);

choice_enum!(
    /// Whether a quota is the monthly base or an extra request from the FP
    AllocationType, "allocation type" {
        Basic => ("基本割当", "basic"),
        Additional => ("追加配信依頼", "additional"),
    }
);

choice_enum!(
    /// Derived from the quota: 完了 once completed reaches total
    AllocationStatus, "allocation status" {
        Incomplete => ("未完了", "incomplete"),
        Completed => ("完了", "completed"),
    }
);

choice_enum!(
    /// How a single lead was handed to an FP
    DeliveryType, "delivery type" {
        Basic => ("基本配信", "basic"),
        Additional => ("追加配信依頼", "additional"),
    }
);

choice_enum!(
    AllocationMethod, "allocation method" {
        Automatic => ("自動マッチング", "automatic"),
        Manual => ("手動割当", "manual"),
    }
);

choice_enum!(
    /// Where a matched consultation stands
    MatchingStage, "matching stage" {
        New => ("新規", "new"),
        Scheduling => ("日程調整", "scheduling"),
        Interviewed => ("面談実施", "interviewed"),
        Proposal => ("商品提案", "proposal"),
        Contracted => ("契約", "contracted"),
        OnHold => ("保留", "on_hold"),
        Lost => ("失注", "lost"),
    }
);

impl MatchingStage {
    /// Stages on the forward path a review can be posted from
    pub fn is_pipeline(&self) -> bool {
        !matches!(self, MatchingStage::OnHold | MatchingStage::Lost)
    }
}

choice_enum!(
    ReviewerType, "reviewer type" {
        EndUser => ("エンドユーザー", "end_user"),
        SystemAdmin => ("システム管理者", "system_admin"),
    }
);

choice_enum!(
    /// Visibility of content pages
    PublicationStatus, "publication status" {
        Published => ("公開中", "published"),
        Private => ("非公開", "private"),
    }
);

choice_enum!(
    PaymentUrlStatus, "payment url status" {
        Active => ("利用中", "active"),
        Suspended => ("停止中", "suspended"),
    }
);

choice_enum!(
    PlanStatus, "plan status" {
        Active => ("有効", "active"),
        Inactive => ("無効", "inactive"),
    }
);

choice_enum!(
    BillingCycle, "billing cycle" {
        Monthly => ("月間請求", "monthly"),
        Yearly => ("年間請求", "yearly"),
    }
);

choice_enum!(
    LegalDocumentKind, "legal document kind" {
        Terms => ("利用規約", "terms"),
        Privacy => ("プライバシーポリシー", "privacy"),
    }
);
