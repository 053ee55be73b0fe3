//! Built-in demo data the console starts from.
//!
//! Everything here is fixed except the allocation progress figures, which
//! are drawn from [`seeded_ratio`] so a given `demo_seed` always produces
//! the same store.

use chrono::{NaiveDate, NaiveDateTime};

use fpadmin_types::*;

use crate::Result;
use crate::store::Store;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn users() -> Vec<User> {
    type Row<'a> = (
        &'a str,
        &'a str,
        &'a str,
        Option<&'a str>,
        NaiveDate,
        &'a str,
        NaiveDate,
        VerificationStatus,
        Option<&'a str>,
        bool,
    );
    let rows: [Row; 12] = [
        ("佐藤 花子", "サトウ ハナコ", "sato.hanako", Some("090-1234-0001"), date(1988, 4, 12), "東京都", date(2024, 1, 5), VerificationStatus::Verified, Some("P001"), false),
        ("鈴木 一郎", "スズキ イチロウ", "suzuki.ichiro", None, date(1975, 11, 3), "神奈川県", date(2024, 1, 18), VerificationStatus::Verified, Some("P002"), false),
        ("田村 恵子", "タムラ ケイコ", "tamura.keiko", Some("080-2222-0003"), date(1992, 7, 21), "大阪府", date(2024, 2, 2), VerificationStatus::Unverified, Some("P003"), false),
        ("中村 健太", "ナカムラ ケンタ", "nakamura.kenta", Some("070-3333-0004"), date(1985, 2, 14), "愛知県", date(2024, 2, 20), VerificationStatus::Verified, Some("P001"), false),
        ("小林 さくら", "コバヤシ サクラ", "kobayashi.sakura", None, date(1996, 3, 30), "福岡県", date(2024, 3, 3), VerificationStatus::Verified, Some("P004"), false),
        ("森田 拓海", "モリタ タクミ", "morita.takumi", Some("090-4444-0006"), date(1990, 9, 9), "北海道", date(2024, 3, 15), VerificationStatus::Unverified, Some("P002"), false),
        ("清水 美香", "シミズ ミカ", "shimizu.mika", Some("080-5555-0007"), date(1983, 12, 1), "京都府", date(2024, 4, 1), VerificationStatus::Verified, Some("P005"), false),
        ("岡田 直樹", "オカダ ナオキ", "okada.naoki", None, date(1979, 6, 18), "埼玉県", date(2024, 4, 22), VerificationStatus::Verified, Some("P001"), false),
        ("井上 千春", "イノウエ チハル", "inoue.chiharu", Some("090-6666-0009"), date(1994, 8, 27), "千葉県", date(2024, 5, 9), VerificationStatus::Unverified, None, false),
        ("坂本 真理", "サカモト マリ", "sakamoto.mari", Some("070-7777-0010"), date(1987, 1, 25), "兵庫県", date(2024, 5, 28), VerificationStatus::Verified, Some("P003"), true),
        ("上野 結衣", "ウエノ ユイ", "ueno.yui", None, date(1999, 10, 10), "宮城県", date(2024, 6, 11), VerificationStatus::Unverified, None, true),
        ("加藤 陽介", "カトウ ヨウスケ", "kato.yosuke", Some("080-8888-0012"), date(1981, 5, 5), "広島県", date(2024, 6, 30), VerificationStatus::Verified, Some("P004"), true),
    ];
    let topics = ["老後資金", "保険の見直し", "教育資金", "住宅ローン", "資産運用"];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, furigana, mail, phone, birth_date, prefecture, registration_date, verification_status, partner, is_new))| {
                User {
                    id: UserId::new(format_id(User::PREFIX, i as u64 + 1)),
                    name: name.to_string(),
                    furigana: furigana.to_string(),
                    email: format!("{}@example.jp", mail),
                    phone: phone.map(str::to_string),
                    birth_date: Some(birth_date),
                    prefecture: Some(prefecture.to_string()),
                    consultation_content: Some(topics[i % topics.len()].to_string()),
                    line_status: Some(if i % 3 == 2 {
                        LineStatus::Unlinked
                    } else {
                        LineStatus::Linked
                    }),
                    last_login: (!is_new).then(|| registration_date + chrono::Duration::days(30 + i as i64)),
                    registration_date,
                    verification_status,
                    partner_id: partner.map(PartnerId::new),
                    is_new,
                }
            },
        )
        .collect()
}

fn fps() -> Vec<Fp> {
    type Row<'a> = (&'a str, &'a str, FpType, Option<&'a str>, NaiveDate, u32, f64, u8, (u32, u32), FpStatus, FpRole);
    let rows: [Row; 8] = [
        ("山本 恵子", "yamamoto", FpType::Individual, None, date(2023, 10, 1), 24, 4.6, 5, (8, 10), FpStatus::Active, FpRole::General),
        ("みらいライフ設計", "mirai", FpType::Corporate, Some("株式会社みらいライフ設計"), date(2023, 11, 12), 31, 4.2, 4, (12, 20), FpStatus::Active, FpRole::Admin),
        ("中村 修", "nakamura", FpType::Individual, None, date(2023, 12, 3), 9, 3.8, 2, (0, 5), FpStatus::Suspended, FpRole::General),
        ("小林 香織", "kobayashi", FpType::Individual, None, date(2024, 1, 20), 17, 4.9, 5, (6, 6), FpStatus::Active, FpRole::General),
        ("あおば資産相談室", "aoba", FpType::Corporate, Some("合同会社あおば"), date(2024, 2, 14), 12, 4.0, 3, (9, 15), FpStatus::Active, FpRole::General),
        ("松田 誠一", "matsuda", FpType::Individual, None, date(2024, 3, 30), 0, 0.0, 1, (2, 8), FpStatus::Active, FpRole::General),
        ("森 奈々", "mori", FpType::Individual, None, date(2024, 4, 18), 4, 3.5, 2, (0, 4), FpStatus::Suspended, FpRole::General),
        ("ひかりFPパートナーズ", "hikari", FpType::Corporate, Some("ひかりFPパートナーズ株式会社"), date(2024, 5, 7), 21, 4.4, 4, (18, 18), FpStatus::Active, FpRole::Admin),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, mail, fp_type, company, join_date, review_count, average_rating, rank, (assigned, total), status, role))| Fp {
                id: FpId::new(format_id(Fp::PREFIX, i as u64 + 1)),
                name: name.to_string(),
                email: format!("{}@fp.example.jp", mail),
                fp_type,
                company: company.map(str::to_string),
                join_date,
                review_count,
                average_rating,
                rank,
                monthly_assigned: assigned,
                monthly_total: total,
                status,
                role,
            },
        )
        .collect()
}

fn partners() -> Vec<Partner> {
    let rows: [(&str, &str, PartnerStatus, NaiveDate); 5] = [
        ("株式会社マネーメディア", "money-media", PartnerStatus::Active, date(2024, 9, 10)),
        ("家計相談ナビ", "kakei-navi", PartnerStatus::Active, date(2024, 8, 28)),
        ("保険比較ラボ", "hoken-lab", PartnerStatus::Suspended, date(2024, 6, 3)),
        ("子育てマネー塾", "kosodate", PartnerStatus::Active, date(2024, 9, 1)),
        ("ライフプラン広場", "lifeplan", PartnerStatus::Active, date(2024, 7, 19)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, slug, status, last_updated))| Partner {
            id: PartnerId::new(format_id(Partner::PREFIX, i as u64 + 1)),
            name: name.to_string(),
            contact_email: format!("contact@{}.example.jp", slug),
            lp_url: format!("https://fp-match.example.jp/lp/{}", slug),
            status,
            last_updated,
        })
        .collect()
}

/// One quota per active FP. Every fourth is already met; the others sit
/// between half and 95% of the FP's monthly total.
fn allocations(fps: &[Fp], seed: u64) -> Vec<MatchingAllocation> {
    fps.iter()
        .filter(|fp| fp.status == FpStatus::Active)
        .enumerate()
        .map(|(i, fp)| {
            let index = i as u64;
            let total = fp.monthly_total;
            let completed = if i % 4 == 0 {
                total
            } else {
                let ratio = 0.5 + seeded_ratio(seed, index) * 0.45;
                (total as f64 * ratio).floor() as u32
            };

            let mut allocation = MatchingAllocation {
                id: AllocationId::new(format_id(MatchingAllocation::PREFIX, index + 1)),
                fp_id: fp.id.clone(),
                allocation_type: if i % 5 == 0 {
                    AllocationType::Additional
                } else {
                    AllocationType::Basic
                },
                completed_allocations: completed,
                total_allocations: total,
                status: AllocationStatus::Incomplete,
                completion_date: None,
            };
            allocation.status = allocation.derived_status();
            if allocation.status == AllocationStatus::Completed {
                allocation.completion_date = Some(date(2025, 9, 5 - (i as u32 % 5)));
            }
            allocation
        })
        .collect()
}

/// Stages a consultation passes through to reach `stage`
fn path_to(stage: MatchingStage) -> Vec<MatchingStage> {
    use MatchingStage::*;
    match stage {
        New => vec![New],
        Scheduling => vec![New, Scheduling],
        Interviewed => vec![New, Scheduling, Interviewed],
        Proposal => vec![New, Scheduling, Interviewed, Proposal],
        Contracted => vec![New, Scheduling, Interviewed, Proposal, Contracted],
        OnHold => vec![New, Scheduling, OnHold],
        Lost => vec![New, Scheduling, Interviewed, Lost],
    }
}

fn stage_note(stage: MatchingStage, method: AllocationMethod) -> &'static str {
    match (stage, method) {
        (MatchingStage::New, AllocationMethod::Automatic) => "自動割当完了",
        (MatchingStage::New, AllocationMethod::Manual) => "手動割当完了",
        (MatchingStage::Scheduling, _) => "初回連絡完了",
        (MatchingStage::Interviewed, _) => "オンライン面談実施",
        (MatchingStage::Proposal, _) => "保険商品を提案",
        (MatchingStage::Contracted, _) => "契約締結",
        (MatchingStage::OnHold, _) => "顧客都合で一時保留",
        (MatchingStage::Lost, _) => "他社で契約済み",
    }
}

fn histories(fps: &[Fp]) -> Vec<MatchingHistory> {
    type Row = (NaiveDateTime, u64, u64, DeliveryType, AllocationMethod, MatchingStage, Option<u64>);
    let rows: [Row; 10] = [
        (at(2024, 9, 15, 14, 30), 1, 1, DeliveryType::Basic, AllocationMethod::Automatic, MatchingStage::Interviewed, Some(1)),
        (at(2024, 9, 15, 9, 45), 2, 2, DeliveryType::Additional, AllocationMethod::Manual, MatchingStage::Scheduling, Some(2)),
        (at(2024, 9, 14, 16, 20), 4, 3, DeliveryType::Basic, AllocationMethod::Automatic, MatchingStage::Contracted, Some(3)),
        (at(2024, 9, 14, 11, 15), 5, 4, DeliveryType::Basic, AllocationMethod::Automatic, MatchingStage::Proposal, Some(1)),
        (at(2024, 9, 13, 13, 50), 6, 5, DeliveryType::Additional, AllocationMethod::Automatic, MatchingStage::New, Some(4)),
        (at(2024, 9, 13, 10, 25), 1, 6, DeliveryType::Basic, AllocationMethod::Manual, MatchingStage::Lost, Some(2)),
        (at(2024, 9, 12, 15, 40), 8, 7, DeliveryType::Basic, AllocationMethod::Automatic, MatchingStage::Interviewed, Some(5)),
        (at(2024, 9, 12, 8, 30), 4, 8, DeliveryType::Additional, AllocationMethod::Manual, MatchingStage::OnHold, Some(1)),
        (at(2024, 9, 11, 17, 10), 5, 9, DeliveryType::Basic, AllocationMethod::Automatic, MatchingStage::Scheduling, None),
        (at(2024, 9, 11, 12, 5), 8, 10, DeliveryType::Basic, AllocationMethod::Automatic, MatchingStage::Contracted, Some(3)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (allocated_at, fp, user, delivery_type, allocation_method, current_status, partner))| {
            let fp_id = FpId::new(format_id(Fp::PREFIX, fp));
            let fp_name = fps
                .iter()
                .find(|candidate| candidate.id == fp_id)
                .map_or("担当FP", |candidate| candidate.name.as_str());

            let status_history = path_to(current_status)
                .into_iter()
                .enumerate()
                .map(|(step, status)| StatusChange {
                    changed_at: if step == 0 {
                        allocated_at
                    } else {
                        allocated_at + chrono::Duration::days(step as i64) + chrono::Duration::hours(1)
                    },
                    status,
                    updated_by: if step == 0 {
                        "システム".to_string()
                    } else {
                        fp_name.to_string()
                    },
                    notes: stage_note(status, allocation_method).to_string(),
                })
                .collect();

            MatchingHistory {
                id: HistoryId::new(format_id(MatchingHistory::PREFIX, i as u64 + 1)),
                allocated_at,
                fp_id,
                user_id: UserId::new(format_id(User::PREFIX, user)),
                delivery_type,
                allocation_method,
                current_status,
                partner_id: partner.map(|p| PartnerId::new(format_id(Partner::PREFIX, p))),
                status_history,
            }
        })
        .collect()
}

fn reviews() -> Vec<ReviewRecord> {
    type Row<'a> = (NaiveDate, Option<u64>, u64, u8, &'a str, MatchingStage, &'a [&'a str]);
    let rows: [Row; 10] = [
        (date(2024, 9, 18), Some(1), 1, 5, "保険の見直しで毎月の負担が減りました。", MatchingStage::Interviewed, &["保険の見直し"]),
        (date(2024, 9, 17), Some(4), 5, 4, "法人ならではの幅広い提案がありました。", MatchingStage::Proposal, &["保険の見直し", "資産運用"]),
        (date(2024, 9, 16), Some(3), 4, 5, "NISAの始め方を丁寧に教えてもらえました。", MatchingStage::Contracted, &["資産運用"]),
        (date(2024, 9, 15), None, 1, 3, "面談記録をもとに運営側で登録。説明がやや早口との声あり。", MatchingStage::Interviewed, &["老後資金"]),
        (date(2024, 9, 14), Some(7), 8, 4, "住宅ローンの比較が分かりやすかった。", MatchingStage::Interviewed, &["住宅ローン"]),
        (date(2024, 9, 13), Some(2), 2, 2, "日程調整に時間がかかりました。", MatchingStage::Scheduling, &["教育資金"]),
        (date(2024, 9, 12), Some(10), 8, 5, "二回目の相談も満足です。", MatchingStage::Contracted, &["老後資金", "資産運用"]),
        (date(2024, 9, 11), Some(12), 6, 4, "教育資金の計画が立てられました。", MatchingStage::New, &["教育資金"]),
        (date(2024, 9, 10), None, 2, 1, "連絡の遅れについて運営に苦情あり。", MatchingStage::Scheduling, &[]),
        (date(2024, 9, 9), Some(5), 6, 4, "老後資金の不安が軽くなりました。", MatchingStage::New, &["老後資金"]),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (posted_at, user, fp, rating, content, status_at_review, topics))| ReviewRecord {
            id: ReviewId::new(format_id(ReviewRecord::PREFIX, i as u64 + 1)),
            posted_at,
            reviewer_type: if user.is_some() {
                ReviewerType::EndUser
            } else {
                ReviewerType::SystemAdmin
            },
            user_id: user.map(|u| UserId::new(format_id(User::PREFIX, u))),
            fp_id: FpId::new(format_id(Fp::PREFIX, fp)),
            rating,
            review_content: content.to_string(),
            status_at_review,
            consultation_topics: topics.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

fn plans() -> Vec<SubscriptionPlan> {
    let rows: [(&str, u32, u32, NaiveDate); 3] = [
        ("基本プラン", 45_000, 38, date(2024, 4, 1)),
        ("ビジネスプラン", 200_000, 12, date(2024, 4, 1)),
        ("エンタープライズプラン", 750_000, 3, date(2024, 6, 1)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (plan_name, price, subscriber_count, created_at))| SubscriptionPlan {
            id: PlanId::new(format_id(SubscriptionPlan::PREFIX, i as u64 + 1)),
            plan_name: plan_name.to_string(),
            price,
            billing_cycle: BillingCycle::Monthly,
            status: PlanStatus::Active,
            subscriber_count,
            created_at,
        })
        .collect()
}

fn payment_urls() -> Vec<PaymentUrl> {
    type Row<'a> = (&'a str, &'a str, u32, PaymentUrlStatus, NaiveDate, NaiveDate, u32);
    let rows: [Row; 6] = [
        ("基本プラン初期決済用", "basic-initial", 45_000, PaymentUrlStatus::Active, date(2024, 9, 15), date(2024, 9, 18), 47),
        ("ビジネスプラン初期決済用", "business-initial", 200_000, PaymentUrlStatus::Active, date(2024, 8, 22), date(2024, 9, 17), 23),
        ("エンタープライズプラン初期決済用", "enterprise-initial", 750_000, PaymentUrlStatus::Active, date(2024, 7, 10), date(2024, 9, 16), 156),
        ("テスト決済URL", "test", 100, PaymentUrlStatus::Suspended, date(2024, 6, 5), date(2024, 6, 8), 3),
        ("特別キャンペーン決済", "campaign", 30_000, PaymentUrlStatus::Suspended, date(2024, 5, 20), date(2024, 5, 31), 89),
        ("新規顧客向け決済URL", "new-customer", 45_000, PaymentUrlStatus::Active, date(2024, 4, 15), date(2024, 9, 18), 12),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (url_name, slug, amount, status, created_at, last_payment, payment_count))| PaymentUrl {
            id: PaymentUrlId::new(format_id(PaymentUrl::PREFIX, i as u64 + 1)),
            url_name: url_name.to_string(),
            url: format!("https://moneydotcom.jp/link/creditcard/{}", slug),
            description: format!("{}のクレジットカード決済リンク", url_name),
            amount,
            status,
            created_at,
            last_payment_date: Some(last_payment),
            payment_count,
        })
        .collect()
}

fn faqs() -> Vec<FaqItem> {
    let rows: [(&str, &str, &str, PublicationStatus, NaiveDate); 5] = [
        ("サービス基本", "サービスの利用料金は？", "ご相談は無料でご利用いただけます。", PublicationStatus::Published, date(2024, 9, 15)),
        ("サービス基本", "相談できる内容は何ですか？", "保険、資産運用、住宅ローン、老後資金などお金に関するご相談全般です。", PublicationStatus::Published, date(2024, 9, 14)),
        ("FPとの相談", "相談は何回でも無料ですか？", "回数に制限はなく、何度でも無料でご相談いただけます。", PublicationStatus::Published, date(2024, 9, 13)),
        ("FPとの相談", "オンラインでの相談は可能ですか？", "ビデオ通話でのご相談に対応しています。", PublicationStatus::Published, date(2024, 9, 12)),
        ("その他", "個人情報の取り扱いはどうなっていますか？", "プライバシーポリシーに基づき適切に管理しています。", PublicationStatus::Private, date(2024, 9, 11)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (category, question, answer, publication_status, last_updated))| FaqItem {
            id: FaqId::new(format_id(FaqItem::PREFIX, i as u64 + 1)),
            display_order: i as u32 + 1,
            category: category.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            publication_status,
            last_updated,
        })
        .collect()
}

fn document_versions(stem: &str, versions: &[(&str, NaiveDate)]) -> Vec<DocumentVersion> {
    versions
        .iter()
        .map(|(version, upload_date)| {
            let file_name = format!("{}_{}.pdf", stem, version);
            DocumentVersion {
                version: version.to_string(),
                upload_date: *upload_date,
                file_ref: local_file_ref("legal", &file_name),
                file_name,
            }
        })
        .collect()
}

fn legal_documents() -> Vec<LegalDocument> {
    vec![
        LegalDocument {
            id: LegalDocumentId::new("LD001"),
            kind: LegalDocumentKind::Terms,
            name: "サービス利用規約".to_string(),
            current_version: "v2.1".to_string(),
            last_updated: date(2024, 8, 20),
            publication_status: PublicationStatus::Published,
            history: document_versions(
                "tos",
                &[
                    ("v2.1", date(2024, 8, 20)),
                    ("v2.0", date(2024, 5, 10)),
                    ("v1.0", date(2023, 1, 15)),
                ],
            ),
        },
        LegalDocument {
            id: LegalDocumentId::new("LD002"),
            kind: LegalDocumentKind::Privacy,
            name: "プライバシーポリシー".to_string(),
            current_version: "v1.3".to_string(),
            last_updated: date(2024, 7, 15),
            publication_status: PublicationStatus::Published,
            history: document_versions(
                "privacy",
                &[
                    ("v1.3", date(2024, 7, 15)),
                    ("v1.2", date(2024, 4, 1)),
                    ("v1.1", date(2023, 6, 20)),
                    ("v1.0", date(2023, 1, 15)),
                ],
            ),
        },
    ]
}

fn banners() -> Vec<AdBanner> {
    let rows: [(u32, &str, NaiveDate, NaiveDate, PublicationStatus, u32); 3] = [
        (1, "product-a", date(2024, 9, 1), date(2024, 10, 31), PublicationStatus::Published, 1234),
        (2, "product-b", date(2024, 9, 15), date(2024, 11, 15), PublicationStatus::Published, 876),
        (0, "product-c", date(2024, 8, 1), date(2024, 8, 31), PublicationStatus::Private, 543),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (position, slug, display_start, display_end, publication_status, clicks))| AdBanner {
            id: BannerId::new(format_id(AdBanner::PREFIX, i as u64 + 1)),
            position,
            image_ref: local_file_ref("banners", &format!("{}.png", slug)),
            link_url: format!("https://example.com/{}", slug),
            display_start,
            display_end,
            publication_status,
            clicks,
        })
        .collect()
}

impl Store {
    /// Store filled with the built-in demo data.
    pub fn seeded(demo_seed: u64) -> Result<Self> {
        let fps = fps();
        let allocations = allocations(&fps, demo_seed);
        let histories = histories(&fps);

        let mut store = Store::new();
        store.load(users())?;
        store.load(fps)?;
        store.load(partners())?;
        store.load(allocations)?;
        store.load(histories)?;
        store.load(reviews())?;
        store.load(payment_urls())?;
        store.load(plans())?;
        store.load(faqs())?;
        store.load(legal_documents())?;
        store.load(banners())?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic_per_seed() {
        let fps = fps();
        assert_eq!(allocations(&fps, 42), allocations(&fps, 42));
        let first = allocations(&fps, 0);
        assert!((1..10).any(|seed| allocations(&fps, seed) != first));
    }

    #[test]
    fn test_seed_allocations_respect_invariants() {
        let fps = fps();
        for seed in 0..20 {
            let quotas = allocations(&fps, seed);
            assert_eq!(quotas.len(), fps.iter().filter(|fp| fp.status == FpStatus::Active).count());
            for allocation in quotas {
                assert!(allocation.completed_allocations <= allocation.total_allocations);
                assert_eq!(allocation.status, allocation.derived_status());
                assert_eq!(
                    allocation.completion_date.is_some(),
                    allocation.status == AllocationStatus::Completed
                );
            }
        }
    }

    #[test]
    fn test_seed_histories_end_at_current_status() {
        for history in histories(&fps()) {
            let last = history.status_history.last().unwrap();
            assert_eq!(last.status, history.current_status);
            assert_eq!(history.status_history[0].changed_at, history.allocated_at);
        }
    }

    #[test]
    fn test_seed_references_resolve() {
        let store = Store::seeded(42).unwrap();
        for review in store.records::<ReviewRecord>() {
            if let Some(user) = &review.user_id {
                assert!(store.resolve_user(user).is_ok());
            }
            assert_eq!(review.user_id.is_some(), review.reviewer_type == ReviewerType::EndUser);
            assert!(store.resolve_fp(&review.fp_id).is_ok());
        }
        for history in store.records::<MatchingHistory>() {
            assert!(store.resolve_references(history).iter().all(|r| r.name.is_some()));
        }
        for user in store.records::<User>() {
            if let Some(partner) = &user.partner_id {
                assert!(store.resolve_partner(partner).is_ok());
            }
        }
    }

    #[test]
    fn test_seed_first_fp_is_searchable_by_name() {
        let store = Store::seeded(42).unwrap();
        let fp = store.resolve_fp(&FpId::new("FP001")).unwrap();
        assert_eq!(fp.name, "山本 恵子");
        assert!(
            store
                .records::<MatchingAllocation>()
                .iter()
                .any(|a| a.fp_id == fp.id)
        );
    }
}
