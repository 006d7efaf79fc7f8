use crate::raw::ListRecord;

/// First non-empty text value among `candidates` on a record.
///
/// Lists store the same logical column under configuration-dependent names;
/// reads coalesce across the candidates in order.
pub fn coalesce_field<'a>(record: &'a ListRecord, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|field| record.text(field))
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesce_picks_first_present() {
        let mut record = ListRecord::new();
        record.set("ModerationStatus", "Pending");
        record.set("ApprovalStatus", "Rejected");
        let value = coalesce_field(&record, &["_ModerationStatus", "ModerationStatus", "ApprovalStatus"]);
        assert_eq!(value, Some("Pending"));
    }

    #[test]
    fn test_coalesce_skips_empty_values() {
        let mut record = ListRecord::new();
        record.set("_ModerationStatus", "");
        record.set("ApprovalStatus", "Draft");
        let value = coalesce_field(&record, &["_ModerationStatus", "ApprovalStatus"]);
        assert_eq!(value, Some("Draft"));
    }

    #[test]
    fn test_coalesce_none_when_absent() {
        let record = ListRecord::new();
        assert_eq!(coalesce_field(&record, &["Status"]), None);
    }
}
