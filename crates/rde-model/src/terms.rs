/// One row of the general sample term dictionary sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralTerm {
    pub key_name: String,
    pub term_id: String,
    /// Display name matched against a parameter row's `term` cell.
    pub name_ja: String,
}

/// One row of the class-specific sample term dictionary sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTerm {
    pub key_name: String,
    pub class_id: String,
    pub term_id: String,
    /// Combined class+term display name matched against a parameter row's
    /// `term` cell.
    pub bind_name: String,
}

/// General term dictionary, in sheet order. Order matters: lookups take the
/// first matching entry.
#[derive(Debug, Clone, Default)]
pub struct GeneralTermTable {
    pub entries: Vec<GeneralTerm>,
}

/// Class-specific term dictionary, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct ClassTermTable {
    pub entries: Vec<ClassTerm>,
}
