use chrono::NaiveDate;
use fpadmin_engine::ViolationKind;
use fpadmin_store::{Error, Store};
use fpadmin_types::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
}

fn store() -> Store {
    Store::seeded(42).unwrap()
}

fn new_user_draft(name: &str) -> UserDraft {
    UserDraft {
        name: Some(name.to_string()),
        email: Some("new.user@example.jp".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_create_inserts_fresh_id_at_front() {
    let mut store = store();
    let before = store.records::<User>().len();

    let id = store.create::<User>(&new_user_draft("新規 太郎"), today()).unwrap();

    assert_eq!(id.as_ref(), "U013");
    assert_eq!(store.records::<User>().len(), before + 1);
    assert_eq!(store.records::<User>()[0].id, id);
    assert_eq!(store.records::<User>()[0].registration_date, today());
}

#[test]
fn test_create_appends_for_back_inserted_entities() {
    let mut store = store();
    let draft = FaqItemDraft {
        display_order: Some(6),
        category: Some("その他".to_string()),
        question: Some("領収書は出ますか?".to_string()),
        answer: Some("マイページから発行できます。".to_string()),
        ..Default::default()
    };

    let id = store.create::<FaqItem>(&draft, today()).unwrap();
    assert_eq!(store.records::<FaqItem>().last().unwrap().id, id);
}

#[test]
fn test_ids_never_collide_after_deletes() {
    let mut store = store();
    let first = store.create::<User>(&new_user_draft("一人目"), today()).unwrap();
    store.delete::<User>(first.as_ref()).unwrap();

    let second = store.create::<User>(&new_user_draft("二人目"), today()).unwrap();
    assert_ne!(first, second);
    assert_eq!(second.as_ref(), "U014");
}

#[test]
fn test_edit_preserves_id_and_size() {
    let mut store = store();
    let before = store.records::<User>().len();
    let original = store.get::<User>("U002").unwrap().clone();

    let draft = UserDraft {
        verification_status: Some(VerificationStatus::Unverified),
        ..Default::default()
    };
    let edited = store.update::<User>("U002", &draft, today()).unwrap().clone();

    assert_eq!(edited.id, original.id);
    assert_eq!(edited.verification_status, VerificationStatus::Unverified);
    assert_eq!(edited.name, original.name);
    assert_eq!(store.records::<User>().len(), before);
}

#[test]
fn test_edit_missing_id_is_not_found() {
    let mut store = store();
    let err = store
        .update::<User>("U999", &UserDraft::default(), today())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_delete_removes_exactly_the_target() {
    let mut store = store();
    let before: Vec<String> = store.records::<Fp>().iter().map(|f| f.id.to_string()).collect();

    let removed = store.delete::<Fp>("FP003").unwrap();
    assert_eq!(removed.id.as_ref(), "FP003");

    let after: Vec<String> = store.records::<Fp>().iter().map(|f| f.id.to_string()).collect();
    let expected: Vec<String> = before.into_iter().filter(|id| id != "FP003").collect();
    assert_eq!(after, expected);
}

#[test]
fn test_delete_missing_is_noop() {
    let mut store = store();
    let before = store.records::<Partner>().len();
    assert!(store.delete::<Partner>("P404").is_none());
    assert_eq!(store.records::<Partner>().len(), before);
}

#[test]
fn test_create_rejects_unknown_reference() {
    let mut store = store();
    let draft = ReviewRecordDraft {
        user_id: Some(UserId::new("U001")),
        fp_id: Some(FpId::new("FP404")),
        rating: Some(4),
        reviewer_type: Some(ReviewerType::EndUser),
        review_content: Some("丁寧な説明でした。".to_string()),
        ..Default::default()
    };

    let Err(Error::Validation(report)) = store.create::<ReviewRecord>(&draft, today()) else {
        panic!("expected validation error");
    };
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, "fp_id");
    assert!(matches!(
        report.errors[0].kind,
        ViolationKind::UnknownReference {
            target: EntityKind::Fp,
            ..
        }
    ));
}

#[test]
fn test_dangling_reference_surfaces_as_not_found() {
    let mut store = store();
    let review = store.get::<ReviewRecord>("R001").unwrap().clone();
    store.delete::<Fp>(review.fp_id.as_ref()).unwrap();

    assert!(store.resolve_fp(&review.fp_id).unwrap_err().is_not_found());

    let refs = store.resolve_references(&review);
    let fp_ref = refs.iter().find(|r| r.key.field == "fp_id").unwrap();
    assert_eq!(fp_ref.name, None);

    // Editing other fields of the review still works
    let draft = ReviewRecordDraft {
        review_content: Some("追記しました".to_string()),
        ..Default::default()
    };
    assert!(store.update::<ReviewRecord>("R001", &draft, today()).is_ok());
}

#[test]
fn test_snapshot_round_trip_keeps_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut original = store();
    let id = original.create::<User>(&new_user_draft("保存 花子"), today()).unwrap();
    original.delete::<User>(id.as_ref()).unwrap();
    original.save_snapshot(&path).unwrap();

    let mut loaded = Store::load_snapshot(&path).unwrap();
    assert_eq!(loaded.counts(), original.counts());

    // The deleted id stays burned after reload
    let next = loaded.create::<User>(&new_user_draft("次 次郎"), today()).unwrap();
    assert_eq!(next.as_ref(), "U014");
}

#[test]
fn test_snapshot_with_duplicate_ids_is_rejected() {
    let json = r#"{
        "version": 1,
        "store": {
            "plans": {
                "records": [
                    {"id": "SP001", "plan_name": "A", "price": 1, "billing_cycle": "monthly", "status": "active", "created_at": "2024-01-01"},
                    {"id": "SP001", "plan_name": "B", "price": 2, "billing_cycle": "monthly", "status": "active", "created_at": "2024-01-01"}
                ],
                "next_seq": 2
            }
        }
    }"#;

    let err = Store::from_snapshot_json(json).unwrap_err();
    assert!(matches!(err, Error::DuplicateId { .. }));
}

#[test]
fn test_opening_new_user_clears_marker_once() {
    let mut store = store();
    let fresh = store
        .records::<User>()
        .iter()
        .find(|u| u.is_new)
        .map(|u| u.id.clone())
        .unwrap();

    assert!(store.mark_user_seen(&fresh).unwrap());
    assert!(!store.resolve_user(&fresh).unwrap().is_new);
    assert!(!store.mark_user_seen(&fresh).unwrap());
    assert!(store.mark_user_seen(&UserId::new("U999")).unwrap_err().is_not_found());
}

#[test]
fn test_store_joins_allocation_columns() {
    use fpadmin_engine::{AllocationField, FieldValue, Queryable};

    let store = store();
    let allocation = store
        .records::<MatchingAllocation>()
        .iter()
        .find(|a| a.fp_id.as_ref() == "FP001")
        .unwrap();

    assert_eq!(
        allocation.field(AllocationField::FpName, &store),
        FieldValue::Text("山本 恵子")
    );
    assert_eq!(allocation.field(AllocationField::FpType, &store).to_string(), "個人");
}

#[test]
fn test_history_status_change_appends_step() {
    let mut store = store();
    let before = store.get::<MatchingHistory>("HIST002").unwrap().status_history.len();

    let draft = MatchingHistoryDraft {
        current_status: Some(MatchingStage::Interviewed),
        notes: Some("対面で実施".to_string()),
        ..Default::default()
    };
    let history = store.update::<MatchingHistory>("HIST002", &draft, today()).unwrap();

    assert_eq!(history.status_history.len(), before + 1);
    let last = history.status_history.last().unwrap();
    assert_eq!(last.status, MatchingStage::Interviewed);
    assert_eq!(last.notes, "対面で実施");
}
