//! Static description of form fields.

/// One option of a fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const SEXES: &[Choice] = &[Choice::new("MALE", "Male"), Choice::new("FEMALE", "Female")];

pub const HANDS: &[Choice] = &[Choice::new("LEFT", "Left"), Choice::new("RIGHT", "Right")];

pub const CATEGORY_TYPES: &[Choice] = &[
    Choice::new("SINGLES", "Singles"),
    Choice::new("DOUBLES", "Doubles"),
];

pub const SURFACES: &[Choice] = &[
    Choice::new("CLAY", "Clay"),
    Choice::new("GRASS", "Grass"),
    Choice::new("HARD", "Hard"),
];

pub const PAYMENT_METHODS: &[Choice] = &[
    Choice::new("CASH", "Cash"),
    Choice::new("CREDIT_CARD", "Credit card"),
];

pub const STAGES: &[Choice] = &[
    Choice::new("GROUP", "Group stage"),
    Choice::new("ROUND_OF_32", "Round of 32"),
    Choice::new("ROUND_OF_16", "Round of 16"),
    Choice::new("QUARTER_FINAL", "Quarterfinal"),
    Choice::new("SEMI_FINAL", "Semifinal"),
    Choice::new("FINAL", "Final"),
    Choice::new("OTHER", "Other"),
];

/// Human label for an enumeration value, falling back to the raw value.
pub fn choice_label(choices: &[Choice], value: &str) -> String {
    choices
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Backend collection that feeds a relation picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupSource {
    /// `/clubs`, option value is the club name.
    Clubs,
    /// `/players`, option value is the player's OIB.
    Players,
    /// `/coaches/{id}/players`, scoped by the coach in the current route.
    CoachPlayers,
    /// `/clubs/person`, the flattened person directory.
    Persons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice(&'static [Choice]),
    Lookup(LookupSource),
    /// Growing list of values submitted under the same key.
    Multi(Option<LookupSource>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub hint: &'static str,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            hint,
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        choices: &'static [Choice],
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Choice(choices),
            hint: "",
        }
    }

    pub const fn lookup(
        key: &'static str,
        label: &'static str,
        source: LookupSource,
        hint: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Lookup(source),
            hint,
        }
    }

    pub const fn multi(
        key: &'static str,
        label: &'static str,
        source: Option<LookupSource>,
        hint: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Multi(source),
            hint,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.kind, FieldKind::Multi(_))
    }

    pub fn lookup_source(&self) -> Option<LookupSource> {
        match self.kind {
            FieldKind::Lookup(source) => Some(source),
            FieldKind::Multi(source) => source,
            _ => None,
        }
    }
}
