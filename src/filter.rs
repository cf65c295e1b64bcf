use crate::app::Record;

/// Returns true when `query` matches `record`.
///
/// The id is matched verbatim against its decimal form; name, email and role
/// are matched case-insensitively. An empty query matches every record.
pub fn matches(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if record.id.to_string().contains(query) {
        return true;
    }
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.email.to_lowercase().contains(&needle)
        || record.role.to_lowercase().contains(&needle)
}

/// Returns the records matching `query`, in collection order.
pub fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64, name: &str, email: &str, role: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            rec(1, "Aaron Miles", "aaron@mailinator.com", "member"),
            rec(2, "Aishwarya Naik", "aishwarya@mailinator.com", "admin"),
            rec(12, "Arvind Kumar", "arvind@mailinator.com", "member"),
            rec(21, "Caterina Binotto", "caterina@mailinator.com", "member"),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "")), vec![1, 2, 12, 21]);
    }

    #[test]
    fn role_is_case_insensitive() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "ADMIN")), vec![2]);
    }

    #[test]
    fn name_is_case_insensitive() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "binOTTO")), vec![21]);
    }

    #[test]
    fn email_substring() {
        let records = sample();
        assert_eq!(ids(&filter_records(&records, "arvind@")), vec![12]);
    }

    #[test]
    fn id_substring_preserves_order() {
        let records = sample();
        // "1" hits ids 1, 12, 21; "Aaron Miles" etc. contain no "1"
        assert_eq!(ids(&filter_records(&records, "1")), vec![1, 12, 21]);
    }

    #[test]
    fn no_match_is_empty() {
        let records = sample();
        assert!(filter_records(&records, "zzz").is_empty());
    }

    #[test]
    fn unicode_lowercase() {
        let records = vec![rec(5, "ÉLODIE", "e@x", "User")];
        assert!(matches(&records[0], "élodie"));
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let first = ids(&filter_records(&records, "member"));
        let second = ids(&filter_records(&records, "member"));
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 12, 21]);
    }
}
