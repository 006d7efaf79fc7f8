use viewdeck_types::{Classification, StatusColor};

/// What a rule assigns as the status label when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleLabel {
    /// A fixed category name.
    Fixed(&'static str),
    /// The view's own title, unchanged.
    ViewTitle,
}

/// One row of the classification rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Lowercase substrings; any one of them matching the title fires
    /// the rule.
    pub keywords: &'static [&'static str],
    pub label: RuleLabel,
    pub color: StatusColor,
    pub icon: &'static str,
    pub show_view_more: bool,
}

/// Ordered rule table; evaluated top to bottom, first match wins.
///
/// Specific phrasings come before the generic keyword they contain:
/// "past review"/"overdue" precedes "review", and "review" precedes
/// "pending" so that a "Pending Review" view lands in the review category.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["published", "final"],
        label: RuleLabel::Fixed("Published Documents"),
        color: StatusColor::Black,
        icon: "Document",
        show_view_more: false,
    },
    Rule {
        keywords: &["working", "active", "current"],
        label: RuleLabel::Fixed("Working Documents"),
        color: StatusColor::Black,
        icon: "Folder",
        show_view_more: false,
    },
    Rule {
        keywords: &["draft", "in progress"],
        label: RuleLabel::ViewTitle,
        color: StatusColor::Blue,
        icon: "Edit",
        show_view_more: false,
    },
    Rule {
        keywords: &["awaiting owner", "owner action"],
        label: RuleLabel::Fixed("Documents Awaiting Owner Action"),
        color: StatusColor::Blue,
        icon: "Lock",
        show_view_more: false,
    },
    Rule {
        keywords: &["past review", "overdue"],
        label: RuleLabel::Fixed("Documents Past Review Date"),
        color: StatusColor::Red,
        icon: "Clock",
        show_view_more: true,
    },
    Rule {
        keywords: &["awaiting review", "review"],
        label: RuleLabel::Fixed("Awaiting Review"),
        color: StatusColor::Orange,
        icon: "Clock",
        show_view_more: false,
    },
    Rule {
        keywords: &["pending"],
        label: RuleLabel::ViewTitle,
        color: StatusColor::Orange,
        icon: "Clock",
        show_view_more: false,
    },
    Rule {
        keywords: &["awaiting approval", "approval"],
        label: RuleLabel::Fixed("Awaiting Approval"),
        color: StatusColor::Orange,
        icon: "CheckMark",
        show_view_more: false,
    },
    Rule {
        keywords: &["awaiting formatting", "formatting"],
        label: RuleLabel::Fixed("Awaiting Formatting"),
        color: StatusColor::Orange,
        icon: "Brush",
        show_view_more: false,
    },
    Rule {
        keywords: &["quality", "check"],
        label: RuleLabel::Fixed("Awaiting Quality Team Check"),
        color: StatusColor::Orange,
        icon: "Shield",
        show_view_more: false,
    },
    Rule {
        keywords: &["rejected", "rejection"],
        label: RuleLabel::ViewTitle,
        color: StatusColor::Red,
        icon: "Cancel",
        show_view_more: false,
    },
    Rule {
        keywords: &["assigned"],
        label: RuleLabel::Fixed("Assigned to Me"),
        color: StatusColor::Red,
        icon: "Contact",
        show_view_more: false,
    },
];

/// Catch-all applied when no table rule matches.
const DEFAULT_RULE: Rule = Rule {
    keywords: &[],
    label: RuleLabel::ViewTitle,
    color: StatusColor::Black,
    icon: "DocumentLibrary",
    show_view_more: false,
};

/// First table rule matching the title, with its position, or None when
/// only the catch-all applies.
pub fn matching_rule(title: &str) -> Option<(usize, &'static Rule)> {
    let lowered = title.to_lowercase();
    RULES.iter().enumerate().find(|(_, rule)| {
        rule.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
    })
}

/// Map a view title to its status descriptor. Pure and deterministic.
pub fn classify(title: &str) -> Classification {
    let rule = matching_rule(title).map(|(_, r)| r).unwrap_or(&DEFAULT_RULE);
    let status = match rule.label {
        RuleLabel::Fixed(label) => label.to_string(),
        RuleLabel::ViewTitle => title.to_string(),
    };
    Classification {
        status,
        status_color: rule.color,
        icon_name: rule.icon.to_string(),
        show_view_more: rule.show_view_more,
    }
}
