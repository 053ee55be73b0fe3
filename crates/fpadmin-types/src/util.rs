use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use sha2::{Digest, Sha256};

/// Parse an operator-entered date.
///
/// Accepts `2024-03-01`, `2024/03/01` and full RFC 3339 timestamps (the date
/// part is kept). Anything else is `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Parse an operator-entered timestamp such as `2024/09/15 14:30`.
///
/// Minutes are enough; seconds and RFC 3339 offsets are accepted and the
/// offset is dropped. A bare date reads as midnight.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    const FORMATS: [&str; 4] = [
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| parse_date(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
}

/// Deterministic value in `[0.0, 1.0)` derived from a seed and an index.
///
/// Demo data that would otherwise be random (completion ratios, ratings) is
/// drawn from here so two stores seeded alike are identical.
pub fn seeded_ratio(seed: u64, index: u64) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(index.to_le_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    (u64::from_le_bytes(bytes) >> 11) as f64 / (1u64 << 53) as f64
}

/// Fabricate the local reference stored for an "uploaded" file, such as a
/// banner image (`folder = "banners"`) or a legal document PDF.
///
/// Only the file name is kept; no bytes are read.
pub fn local_file_ref(folder: &str, file_name: &str) -> String {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();
    format!("local://{}/{}", folder, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date("2024-03-01"), expected);
        assert_eq!(parse_date("2024/03/01"), expected);
        assert_eq!(parse_date("2024-03-01T09:30:00+09:00"), expected);
        assert_eq!(parse_date(" 2024-03-01 "), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 9, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0);
        assert_eq!(parse_datetime("2024/09/15 14:30"), expected);
        assert_eq!(parse_datetime("2024-09-15 14:30"), expected);
        assert_eq!(parse_datetime("2024-09-15T14:30:00"), expected);
        assert_eq!(parse_datetime("2024-09-15T14:30:00+09:00"), expected);
        assert_eq!(
            parse_datetime("2024/09/15"),
            NaiveDate::from_ymd_opt(2024, 9, 15).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_datetime("14:30"), None);
    }

    #[test]
    fn test_seeded_ratio_is_deterministic_and_bounded() {
        for i in 0..100 {
            let a = seeded_ratio(42, i);
            assert_eq!(a, seeded_ratio(42, i));
            assert!((0.0..1.0).contains(&a));
        }
        assert_ne!(seeded_ratio(1, 0), seeded_ratio(2, 0));
    }

    #[test]
    fn test_local_file_ref_keeps_file_name_only() {
        assert_eq!(
            local_file_ref("banners", "/home/op/Pictures/spring.png"),
            "local://banners/spring.png"
        );
        assert_eq!(local_file_ref("banners", "C:\\img\\a.jpg"), "local://banners/a.jpg");
        assert_eq!(local_file_ref("legal", "tos_v2.1.pdf"), "local://legal/tos_v2.1.pdf");
    }
}
