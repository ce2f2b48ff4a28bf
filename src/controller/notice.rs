/// Outcome of a user intent. The front end decides how each one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    Selected(usize),
    Filtered(usize),
    Reset(usize),

    MissingInformation,
    MissingKeyword,
    NoSelection,
    NoSuchRow(usize),
    Empty,
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self,
            Notice::MissingInformation |
            Notice::MissingKeyword |
            Notice::NoSelection |
            Notice::NoSuchRow(_) |
            Notice::Empty
        )
    }
}
