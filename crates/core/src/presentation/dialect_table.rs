/// One known dialect: classifier code, region flag, full display name.
pub struct Dialect {
    pub code: &'static str,
    pub flag: &'static str,
    pub display_name: &'static str,
}

/// The known dialect codes. Adding a dialect is one new row.
pub const DIALECTS: &[Dialect] = &[
    Dialect {
        code: "us",
        flag: "\u{1F1FA}\u{1F1F8}",
        display_name: "American English",
    },
    Dialect {
        code: "england",
        flag: "\u{1F1EC}\u{1F1E7}",
        display_name: "British English",
    },
    Dialect {
        code: "australia",
        flag: "\u{1F1E6}\u{1F1FA}",
        display_name: "Australian English",
    },
    Dialect {
        code: "canada",
        flag: "\u{1F1E8}\u{1F1E6}",
        display_name: "Canadian English",
    },
    Dialect {
        code: "indian",
        flag: "\u{1F1EE}\u{1F1F3}",
        display_name: "Indian English",
    },
    Dialect {
        code: "ireland",
        flag: "\u{1F1EE}\u{1F1EA}",
        display_name: "Irish English",
    },
    Dialect {
        code: "scotland",
        flag: "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
        display_name: "Scottish English",
    },
    Dialect {
        code: "south_africa",
        flag: "\u{1F1FF}\u{1F1E6}",
        display_name: "South African English",
    },
];

/// Shown for codes the table doesn't know.
pub const UNKNOWN_FLAG: &str = "\u{1F30D}";

fn lookup(label: &str) -> Option<&'static Dialect> {
    let code = label.to_ascii_lowercase();
    DIALECTS.iter().find(|d| d.code == code)
}

/// Region flag for a dialect code, case-insensitively; globe for strangers.
pub fn flag_of(label: &str) -> &'static str {
    lookup(label).map(|d| d.flag).unwrap_or(UNKNOWN_FLAG)
}

/// Full dialect name for a code, case-insensitively. Unknown codes render as
/// themselves, first letter capitalized.
pub fn display_label_of(label: &str) -> String {
    match lookup(label) {
        Some(d) => d.display_name.to_owned(),
        None => capitalize(label),
    }
}

fn capitalize(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
