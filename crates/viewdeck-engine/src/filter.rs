use viewdeck_types::{DENYLISTED_TITLES, ViewDescriptor};

/// True if the descriptor may be shown: not a personal view and not one of
/// the housekeeping views.
pub fn is_surfaced(descriptor: &ViewDescriptor) -> bool {
    if descriptor.is_personal {
        return false;
    }
    let title = descriptor.title.to_lowercase();
    !DENYLISTED_TITLES
        .iter()
        .any(|denied| title.contains(denied))
}

/// Drop personal and denylisted views. Idempotent.
pub fn filter_views(views: Vec<ViewDescriptor>) -> Vec<ViewDescriptor> {
    views.into_iter().filter(is_surfaced).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewdeck_types::RawView;

    fn descriptor(title: &str, personal: bool) -> ViewDescriptor {
        let raw = RawView {
            id: title.to_lowercase().replace(' ', "-"),
            title: Some(title.to_string()),
            ..Default::default()
        };
        let mut d = ViewDescriptor::from_raw(&raw);
        d.is_personal = personal;
        d
    }

    #[test]
    fn test_personal_views_dropped() {
        let views = vec![
            descriptor("My Private View", true),
            descriptor("Drafts", false),
        ];
        let kept = filter_views(views);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Drafts");
    }

    #[test]
    fn test_denylisted_titles_dropped() {
        let views = vec![
            descriptor("Merge Documents", false),
            descriptor("Relink Documents Helper", false),
            descriptor("All Documents", false),
            descriptor("assetLibTemp", false),
            descriptor("Pending Review", false),
        ];
        let kept = filter_views(views);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Pending Review");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let views = vec![
            descriptor("Personal", true),
            descriptor("All Documents", false),
            descriptor("Drafts", false),
            descriptor("Rejected", false),
        ];
        let once = filter_views(views);
        let twice = filter_views(once.clone());
        assert_eq!(
            once.iter().map(|v| &v.title).collect::<Vec<_>>(),
            twice.iter().map(|v| &v.title).collect::<Vec<_>>()
        );
    }
}
