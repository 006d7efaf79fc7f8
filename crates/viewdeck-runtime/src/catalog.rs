//! Catalog builder: fetch, count, classify, filter, assemble.

use chrono::Utc;
use futures::future::join_all;

use viewdeck_engine::{classify_descriptor, filter_views};
use viewdeck_providers::ListService;
use viewdeck_types::{
    Catalog, CatalogMeta, Classification, PUBLISHED_DOCUMENTS_LIST, RawView, StatusColor,
    ViewDescriptor, WORKING_DOCUMENT_TILE,
};

use crate::counts::{library_total, resolve_count};
use crate::error::{Error, Result};

/// Builds the top-level catalog for one site/list pair.
///
/// A blank list title is the "not configured" state and yields an empty
/// catalog, not an error. A blank site is a configuration error; an
/// absent list is a not-found error carrying the requested title. All
/// other failures degrade inside the count ladders and per-view
/// isolation, so a partial catalog is still produced.
///
/// Per-view counting is fanned out concurrently and joined before
/// classification; each view's internal fallback ladder stays sequential.
pub async fn build_catalog<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
    generation: u64,
) -> Result<Catalog>
where
    S: ListService + ?Sized,
{
    if list_title.trim().is_empty() {
        return Ok(Catalog::empty(site_url, generation));
    }
    if site_url.trim().is_empty() {
        return Err(Error::Config("site URL must be set".to_string()));
    }

    let handle = service
        .get_list(site_url, list_title)
        .await
        .map_err(Error::Service)?
        .ok_or_else(|| Error::NotFound(format!("List '{}' not found", list_title)))?;

    let raw_views = service
        .get_views(site_url, list_title)
        .await
        .map_err(Error::Service)?;

    let per_view = raw_views
        .iter()
        .map(|raw| describe_view(service, site_url, list_title, raw));
    let (descriptors, total, published_total) = futures::join!(
        join_all(per_view),
        library_total(service, site_url, list_title),
        library_total(service, site_url, PUBLISHED_DOCUMENTS_LIST),
    );

    let views = filter_views(descriptors);
    let mut entries = Vec::with_capacity(views.len() + 1);
    entries.push(summary_entry(&handle.title, total));
    entries.extend(views);

    Ok(Catalog {
        meta: CatalogMeta {
            site_url: site_url.to_string(),
            list_title: list_title.to_string(),
            built_at: Utc::now(),
            generation,
        },
        entries,
        published_total,
    })
}

/// Classified and filtered views of one list, for a tile's nested fetch.
/// Any failure collapses to an empty sequence.
pub async fn nested_views<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
) -> Vec<ViewDescriptor>
where
    S: ListService + ?Sized,
{
    let Ok(raw_views) = service.get_views(site_url, list_title).await else {
        return Vec::new();
    };
    let per_view = raw_views
        .iter()
        .map(|raw| describe_view(service, site_url, list_title, raw));
    filter_views(join_all(per_view).await)
}

/// Counts and classifies one view. A failed detail fetch isolates to this
/// view: it is still emitted, count zeroed, title and id preserved.
async fn describe_view<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
    raw: &RawView,
) -> ViewDescriptor
where
    S: ListService + ?Sized,
{
    let descriptor = match service.get_view_detail(site_url, list_title, &raw.id).await {
        Ok(detail) => {
            let mut descriptor = ViewDescriptor::from_raw(raw);
            descriptor.is_personal = detail.is_personal;
            descriptor.is_default = descriptor.is_default || detail.is_default;
            descriptor.item_count = resolve_count(
                service,
                site_url,
                list_title,
                raw.display_title(),
                &raw.id,
                &detail.stored_query,
            )
            .await;
            descriptor
        }
        Err(_) => ViewDescriptor::fallback(raw),
    };
    classify_descriptor(descriptor)
}

/// The synthetic tile representing the whole configured library.
fn summary_entry(label: &str, item_count: usize) -> ViewDescriptor {
    ViewDescriptor::summary_tile(
        WORKING_DOCUMENT_TILE,
        label,
        item_count,
        Classification {
            status: label.to_string(),
            status_color: StatusColor::Black,
            icon_name: "Folder".to_string(),
            show_view_more: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use viewdeck_providers::FixtureHost;

    const SITE: &str = "https://tenant.example.com/sites/docs";

    fn service() -> FixtureHost {
        let fixture = json!({
            "site_url": SITE,
            "lists": [
                {
                    "title": "Working Document",
                    "views": [
                        { "Id": "v-drafts", "Title": "Drafts" },
                        { "Id": "v-mine", "Title": "My View", "PersonalView": true },
                        { "Id": "v-all", "Title": "All Documents" },
                    ],
                    "items": [
                        { "Id": 1, "Status": "Draft" },
                        { "Id": 2, "Status": "Draft" },
                        { "Id": 3, "Status": "Rejected" },
                    ],
                },
                {
                    "title": "Published Documents",
                    "items": [{ "Id": 10 }, { "Id": 11 }],
                },
            ],
        });
        FixtureHost::from_json(&fixture.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_blank_list_title_builds_empty_catalog() {
        let catalog = build_catalog(&service(), SITE, "  ", 1).await.unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.meta.generation, 1);
    }

    #[tokio::test]
    async fn test_blank_site_is_a_configuration_error() {
        let err = build_catalog(&service(), "", "Docs", 1).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_list_is_not_found_with_title() {
        let err = build_catalog(&service(), SITE, "Docs", 1).await.unwrap_err();
        match err {
            Error::NotFound(message) => assert!(message.contains("Docs")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summary_tile_leads_and_filters_apply() {
        let catalog = build_catalog(&service(), SITE, "Working Document", 3)
            .await
            .unwrap();

        // Summary first, with the library's unfiltered total.
        let summary = &catalog.entries[0];
        assert_eq!(summary.id, WORKING_DOCUMENT_TILE);
        assert_eq!(summary.title, "Working Document");
        assert_eq!(summary.item_count, 3);
        assert!(summary.url.is_none());

        // The personal view and the denylisted "All Documents" are gone.
        let titles: Vec<&str> = catalog.entries[1..].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Drafts"]);
        assert_eq!(catalog.entries[1].item_count, 2);

        assert_eq!(catalog.published_total, 2);
    }

    #[tokio::test]
    async fn test_every_entry_is_classified() {
        let catalog = build_catalog(&service(), SITE, "Working Document", 1)
            .await
            .unwrap();
        assert!(catalog.entries.iter().all(|e| e.classification.is_some()));
    }

    #[tokio::test]
    async fn test_nested_views_absorb_failure_to_empty() {
        let views = nested_views(&service(), SITE, "Nope").await;
        assert!(views.is_empty());
    }
}
