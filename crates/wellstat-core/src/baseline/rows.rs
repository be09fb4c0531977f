use super::schema::{BaselineAssumptionRow, RowKind};

impl RowKind {
    pub const ALL: [RowKind; 2] = [RowKind::GrossOil, RowKind::GrossGas];

    /// Label substrings tried in order. The first pattern that matches any
    /// row wins, not the first row that matches any pattern.
    fn label_priority(self) -> &'static [&'static str] {
        match self {
            RowKind::GrossOil => &["gross prod oil", "gross oil", "gross prod"],
            RowKind::GrossGas => &["gross sales gas", "gross gas", "gross sales"],
        }
    }

    /// Both substrings must appear in the label.
    fn label_fallback(self) -> [&'static str; 2] {
        match self {
            RowKind::GrossOil => ["oil", "gross"],
            RowKind::GrossGas => ["gas", "gross"],
        }
    }
}

/// Find the row for `kind`: an explicitly tagged row first, then by label.
pub fn find_row(rows: &[BaselineAssumptionRow], kind: RowKind) -> Option<&BaselineAssumptionRow> {
    rows.iter()
        .find(|r| r.kind == Some(kind))
        .or_else(|| position_by_label(rows, kind).map(|i| &rows[i]))
}

fn position_by_label(rows: &[BaselineAssumptionRow], kind: RowKind) -> Option<usize> {
    let labels: Vec<String> = rows.iter().map(|r| r.label.to_lowercase()).collect();

    for pattern in kind.label_priority() {
        if let Some(idx) = labels.iter().position(|l| l.contains(pattern)) {
            return Some(idx);
        }
    }

    let [a, b] = kind.label_fallback();
    labels.iter().position(|l| l.contains(a) && l.contains(b))
}

/// Tag the label-matched row of each kind so later lookups need no
/// heuristics.
///
/// Kinds that already have a tagged row are left alone, and a row that
/// already carries a different tag is never retagged. Lookup results are
/// the same before and after tagging.
pub fn tag_rows(rows: &mut [BaselineAssumptionRow]) {
    for kind in RowKind::ALL {
        if rows.iter().any(|r| r.kind == Some(kind)) {
            continue;
        }
        if let Some(idx) = position_by_label(rows, kind) {
            if rows[idx].kind.is_none() {
                rows[idx].kind = Some(kind);
            }
        }
    }
}
