use fpadmin_types::*;

#[test]
fn test_user_json_uses_operator_labels() {
    let json = r#"{
        "id": "U001",
        "name": "青木 花子",
        "email": "aoki@example.com",
        "registration_date": "2024-01-01",
        "verification_status": "認証済み"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id.as_ref(), "U001");
    assert_eq!(user.verification_status, VerificationStatus::Verified);
    assert_eq!(user.phone, None);
    assert_eq!(user.furigana, "");
    assert!(!user.is_new);

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["verification_status"], "認証済み");
    assert_eq!(value["registration_date"], "2024-01-01");
    assert!(value.get("partner_id").is_none());
}

#[test]
fn test_draft_rejects_unknown_fields() {
    let err = serde_json::from_str::<UserDraft>(r#"{"nmae": "typo"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn test_draft_rejects_invalid_status() {
    let err = serde_json::from_str::<FaqItemDraft>(r#"{"publication_status": "draft"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Unknown publication status value"));
}

#[test]
fn test_empty_draft_is_default() {
    let draft: FpDraft = serde_json::from_str("{}").unwrap();
    assert_eq!(draft, FpDraft::default());
}

#[test]
fn test_review_references_user_and_fp() {
    let mut review = ReviewRecord {
        id: ReviewId::new("R001"),
        posted_at: parse_date("2024-05-01").unwrap(),
        reviewer_type: ReviewerType::EndUser,
        user_id: Some(UserId::new("U003")),
        fp_id: FpId::new("FP002"),
        rating: 4,
        review_content: "丁寧でした".to_string(),
        status_at_review: MatchingStage::Interviewed,
        consultation_topics: vec!["資産運用".to_string()],
    };

    assert_eq!(
        review.references(),
        vec![
            ForeignKey::new("user_id", EntityKind::User, "U003"),
            ForeignKey::new("fp_id", EntityKind::Fp, "FP002"),
        ]
    );

    review.reviewer_type = ReviewerType::SystemAdmin;
    review.user_id = None;
    assert_eq!(
        review.references(),
        vec![ForeignKey::new("fp_id", EntityKind::Fp, "FP002")]
    );
}

#[test]
fn test_allocation_derived_status() {
    let mut allocation = MatchingAllocation {
        id: AllocationId::new("ALLOC001"),
        fp_id: FpId::new("FP001"),
        allocation_type: AllocationType::Basic,
        completed_allocations: 4,
        total_allocations: 10,
        status: AllocationStatus::Incomplete,
        completion_date: None,
    };

    assert_eq!(allocation.derived_status(), AllocationStatus::Incomplete);
    assert!(allocation.is_in_progress());
    assert_eq!(allocation.completion_rate(), 40.0);

    allocation.completed_allocations = 10;
    assert_eq!(allocation.derived_status(), AllocationStatus::Completed);
    allocation.status = allocation.derived_status();
    assert!(!allocation.is_in_progress());
}

#[test]
fn test_fp_monthly_assignment() {
    let json = r#"{
        "id": "FP001",
        "name": "山本 恵子",
        "email": "yamamoto@example.com",
        "fp_type": "個人",
        "join_date": "2023-04-01",
        "rank": 3,
        "monthly_assigned": 3,
        "monthly_total": 5,
        "status": "活動中",
        "role": "一般"
    }"#;

    let mut fp: Fp = serde_json::from_str(json).unwrap();
    assert_eq!(fp.monthly_assignment(), "3/5");
    assert!(fp.is_behind_quota());

    fp.monthly_assigned = 5;
    assert!(!fp.is_behind_quota());
}

#[test]
fn test_history_timestamps_keep_minutes() {
    let json = r#"{
        "id": "HIST001",
        "allocated_at": "2024/09/15 14:30",
        "fp_id": "FP001",
        "user_id": "U001",
        "delivery_type": "基本配信",
        "allocation_method": "自動マッチング",
        "current_status": "日程調整",
        "partner_id": "P001",
        "status_history": [
            {"changed_at": "2024/09/15 14:30", "status": "新規", "updated_by": "システム", "notes": "自動割当完了"},
            {"changed_at": "2024/09/16 10:15", "status": "日程調整", "updated_by": "田中太郎"}
        ]
    }"#;

    let history: MatchingHistory = serde_json::from_str(json).unwrap();
    assert_eq!(history.status_history.len(), 2);
    assert_eq!(history.status_history[1].notes, "");
    assert_eq!(history.references().len(), 3);

    let value = serde_json::to_value(&history).unwrap();
    assert_eq!(value["allocated_at"], "2024/09/15 14:30");
    assert_eq!(value["status_history"][1]["changed_at"], "2024/09/16 10:15");
}

#[test]
fn test_history_rejects_bad_timestamp() {
    let json = r#"{
        "id": "HIST001",
        "allocated_at": "someday",
        "fp_id": "FP001",
        "user_id": "U001",
        "delivery_type": "基本配信",
        "allocation_method": "自動マッチング",
        "current_status": "新規"
    }"#;
    let err = serde_json::from_str::<MatchingHistory>(json).unwrap_err();
    assert!(err.to_string().contains("invalid timestamp 'someday'"));
}

#[test]
fn test_banner_placement() {
    let banner = AdBanner {
        id: BannerId::new("BANNER003"),
        position: 0,
        image_ref: local_file_ref("banners", "c.png"),
        link_url: "https://example.com/product-c".to_string(),
        display_start: parse_date("2024-08-01").unwrap(),
        display_end: parse_date("2024-08-31").unwrap(),
        publication_status: PublicationStatus::Private,
        clicks: 543,
    };
    assert!(!banner.is_placed());
    assert_eq!(banner.display_period(), "2024/08/01 - 2024/08/31");
}

#[test]
fn test_entity_kinds_are_distinct() {
    let mut names: Vec<&str> = EntityKind::ALL.iter().map(|k| k.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), EntityKind::ALL.len());
}
