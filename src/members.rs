//! Member records and login verification.

/// One row of the member range: a member id paired with a mobile number.
///
/// Read fresh from the spreadsheet on every login attempt, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub member_id: String,
    pub mobile_number: String,
}

impl MemberRecord {
    /// Parse a raw row. Rows with fewer than two cells carry no credential
    /// pair and can never match; extra trailing cells are ignored.
    pub fn from_row(row: &[String]) -> Option<Self> {
        match row {
            [member_id, mobile_number, ..] => Some(Self {
                member_id: member_id.clone(),
                mobile_number: mobile_number.clone(),
            }),
            _ => None,
        }
    }

    pub fn matches(&self, member_id: &str, mobile_number: &str) -> bool {
        self.member_id == member_id && self.mobile_number == mobile_number
    }
}

/// Linear scan of the fetched rows for an exact match on both fields.
/// First match short-circuits.
pub fn verify(rows: &[Vec<String>], member_id: &str, mobile_number: &str) -> bool {
    rows.iter()
        .filter_map(|row| MemberRecord::from_row(row))
        .any(|record| record.matches(member_id, mobile_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_matching_pair_verifies() {
        let rows = vec![row(&["M1", "5550001"]), row(&["M2", "5550002"])];
        assert!(verify(&rows, "M2", "5550002"));
        assert!(verify(&rows, "M1", "5550001"));
    }

    #[test]
    fn test_wrong_mobile_rejected() {
        let rows = vec![row(&["M1", "5550001"]), row(&["M2", "5550002"])];
        assert!(!verify(&rows, "M2", "0000000"));
    }

    #[test]
    fn test_unknown_member_rejected() {
        let rows = vec![row(&["M1", "5550001"])];
        assert!(!verify(&rows, "M3", "5550001"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rows = vec![row(&["M1", "5550001"])];
        assert!(!verify(&rows, "m1", "5550001"));
    }

    #[test]
    fn test_short_rows_never_match() {
        let rows = vec![row(&["M1"]), row(&[])];
        assert!(!verify(&rows, "M1", ""));
    }

    #[test]
    fn test_extra_cells_ignored() {
        let rows = vec![row(&["M1", "5550001", "extra"])];
        assert!(verify(&rows, "M1", "5550001"));
    }
}
