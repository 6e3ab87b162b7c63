//! Mode of a detail page.

/// Neither form is shown until one of the two radio options is picked;
/// picking one always deselects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    View,
    Change,
    Delete,
}

impl DetailMode {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("change") => DetailMode::Change,
            Some("delete") => DetailMode::Delete,
            _ => DetailMode::View,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailMode::View => "view",
            DetailMode::Change => "change",
            DetailMode::Delete => "delete",
        }
    }

    pub fn shows_edit_form(&self) -> bool {
        matches!(self, DetailMode::Change)
    }

    pub fn shows_delete_confirmation(&self) -> bool {
        matches!(self, DetailMode::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_are_mutually_exclusive() {
        for mode in [DetailMode::View, DetailMode::Change, DetailMode::Delete] {
            assert!(!(mode.shows_edit_form() && mode.shows_delete_confirmation()));
        }
        assert_eq!(DetailMode::parse(Some("bogus")), DetailMode::View);
        assert_eq!(DetailMode::parse(None), DetailMode::View);
    }
}
