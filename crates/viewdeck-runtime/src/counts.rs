//! Count resolution strategy chain.
//!
//! A view's title selects one counting strategy; each strategy is an
//! ordered ladder of attempts against the list service. Every rung that
//! fails drops to the next, and the terminal rung is always a value, so
//! resolution never surfaces an error. A filtered attempt that returns
//! successfully short-circuits all later rungs, even at count zero.

use serde_json::Value;

use viewdeck_providers::{ItemQuery, ListService};
use viewdeck_types::{MODERATION_FIELDS, coalesce_field};

/// Strategy selected from a view title, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStrategy {
    Pending,
    Rejected,
    Draft,
    AssignedToMe,
    ViewScoped,
}

/// Title dispatch for count resolution, first match wins.
pub fn select_strategy(title: &str) -> CountStrategy {
    let lower = title.to_lowercase();
    if lower.contains("pending") {
        CountStrategy::Pending
    } else if lower.contains("rejected") {
        CountStrategy::Rejected
    } else if lower.contains("draft") {
        CountStrategy::Draft
    } else if lower.contains("assigned") {
        CountStrategy::AssignedToMe
    } else {
        CountStrategy::ViewScoped
    }
}

/// Resolves the item count for one view.
///
/// `stored_query` is the view's own query definition, used only by the
/// view-scoped strategy. Never returns an error: transport failures
/// degrade rung by rung down to 0.
pub async fn resolve_count<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
    view_title: &str,
    view_id: &str,
    stored_query: &str,
) -> usize
where
    S: ListService + ?Sized,
{
    match select_strategy(view_title) {
        CountStrategy::Pending => pending_count(service, site_url, list_title).await,
        CountStrategy::Rejected => {
            status_count(service, site_url, list_title, "Rejected").await
        }
        CountStrategy::Draft => status_count(service, site_url, list_title, "Draft").await,
        CountStrategy::AssignedToMe => assigned_count(service, site_url, list_title).await,
        CountStrategy::ViewScoped => {
            view_scoped_count(service, site_url, list_title, stored_query, view_id).await
        }
    }
}

/// Unfiltered record count for a list, capped at the service row cap.
///
/// Falls back to the service's coarse `ItemCount` when the record fetch
/// fails; ultimate failure yields 0.
pub async fn library_total<S>(service: &S, site_url: &str, list_title: &str) -> usize
where
    S: ListService + ?Sized,
{
    match service.query_items(site_url, list_title, &ItemQuery::all()).await {
        Ok(records) => records.len(),
        Err(_) => service
            .get_list_item_count(site_url, list_title)
            .await
            .unwrap_or(0),
    }
}

/// Locates the row collection in a render response; the service answers
/// either `{"Row": [...]}` or `{"ListData": {"Row": [...]}}`.
pub fn extract_rows(payload: &Value) -> Option<&Vec<Value>> {
    payload
        .get("Row")
        .or_else(|| payload.get("ListData").and_then(|data| data.get("Row")))
        .and_then(Value::as_array)
}

/// One server-side equality filter; `None` means the service rejected it.
async fn filtered_count<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
    field: &str,
    value: &str,
) -> Option<usize>
where
    S: ListService + ?Sized,
{
    let query = ItemQuery::field_equals(field, value);
    service
        .query_items(site_url, list_title, &query)
        .await
        .ok()
        .map(|records| records.len())
}

/// Unfiltered fetch with a client-side case-insensitive equality predicate
/// coalesced over `candidates`.
async fn scan_count<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
    candidates: &[&str],
    value: &str,
) -> Option<usize>
where
    S: ListService + ?Sized,
{
    let records = service
        .query_items(site_url, list_title, &ItemQuery::all())
        .await
        .ok()?;
    let count = records
        .iter()
        .filter(|record| {
            coalesce_field(record, candidates)
                .is_some_and(|status| status.eq_ignore_ascii_case(value))
        })
        .count();
    Some(count)
}

/// Pending ladder: `Status` filter, then each moderation-status column in
/// turn, then a client-side scan, then 0. Lists store the moderation
/// column under configuration-dependent names, hence the alternates.
async fn pending_count<S>(service: &S, site_url: &str, list_title: &str) -> usize
where
    S: ListService + ?Sized,
{
    if let Some(count) = filtered_count(service, site_url, list_title, "Status", "Pending").await
    {
        return count;
    }
    for field in MODERATION_FIELDS {
        if let Some(count) = filtered_count(service, site_url, list_title, field, "Pending").await
        {
            return count;
        }
    }
    // The scan reads only the moderation columns; a plain Status value
    // of "Pending" is not a moderation state.
    scan_count(service, site_url, list_title, &MODERATION_FIELDS, "Pending")
        .await
        .unwrap_or(0)
}

/// Two-rung ladder shared by the Rejected and Draft strategies: one
/// `Status` filter, then a client-side scan, then 0.
async fn status_count<S>(service: &S, site_url: &str, list_title: &str, literal: &str) -> usize
where
    S: ListService + ?Sized,
{
    if let Some(count) = filtered_count(service, site_url, list_title, "Status", literal).await {
        return count;
    }
    scan_count(service, site_url, list_title, &["Status"], literal)
        .await
        .unwrap_or(0)
}

/// Assigned ladder: resolve the caller's identity, filter on `AssignedTo`;
/// any failure drops to the Draft scan as the generic fallback.
async fn assigned_count<S>(service: &S, site_url: &str, list_title: &str) -> usize
where
    S: ListService + ?Sized,
{
    if let Ok(user_id) = service.get_current_user_id(site_url).await
        && let Some(count) =
            filtered_count(service, site_url, list_title, "AssignedTo", &user_id).await
    {
        return count;
    }
    scan_count(service, site_url, list_title, &["Status"], "Draft")
        .await
        .unwrap_or(0)
}

/// Executes the view's stored query through the rendering endpoint. A
/// failed call or an empty row collection drops to the unfiltered total.
async fn view_scoped_count<S>(
    service: &S,
    site_url: &str,
    list_title: &str,
    stored_query: &str,
    view_id: &str,
) -> usize
where
    S: ListService + ?Sized,
{
    if let Ok(payload) = service
        .render_view_data(site_url, list_title, stored_query, view_id)
        .await
        && let Some(rows) = extract_rows(&payload)
        && !rows.is_empty()
    {
        return rows.len();
    }
    library_total(service, site_url, list_title).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use viewdeck_providers::FixtureHost;

    fn host(fixture: Value) -> FixtureHost {
        FixtureHost::from_json(&fixture.to_string()).unwrap()
    }

    fn status_items(field: &str, statuses: &[&str]) -> Value {
        let items: Vec<Value> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| json!({ "Title": format!("doc-{}", i), field: status }))
            .collect();
        Value::Array(items)
    }

    #[test]
    fn test_dispatch_order() {
        assert_eq!(select_strategy("Pending Approval"), CountStrategy::Pending);
        assert_eq!(select_strategy("Rejected Items"), CountStrategy::Rejected);
        assert_eq!(select_strategy("Draft Documents"), CountStrategy::Draft);
        assert_eq!(select_strategy("Assigned to Me"), CountStrategy::AssignedToMe);
        assert_eq!(select_strategy("Published"), CountStrategy::ViewScoped);
        // "pending" outranks "draft" when both appear.
        assert_eq!(select_strategy("Pending Drafts"), CountStrategy::Pending);
    }

    #[tokio::test]
    async fn test_pending_falls_through_to_moderation_column() {
        // Given a list whose moderation state lives under _ModerationStatus
        let service = host(json!({
            "lists": [{
                "title": "Documents",
                "fields": ["Title", "_ModerationStatus"],
                "items": status_items(
                    "_ModerationStatus",
                    &["Pending", "Approved", "Pending", "Rejected", "Pending",
                      "Approved", "Approved", "Draft", "Approved", "Approved"],
                ),
            }]
        }));

        // When a pending-dispatched title resolves its count
        let count = resolve_count(&service, "", "Documents", "Pending Review", "v1", "").await;

        // Then the Status rung is rejected and the alternate column answers
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn test_pending_scan_reads_only_moderation_columns() {
        // No filterable columns, so the ladder bottoms out in the scan.
        // One record is genuinely pending moderation; the other has a
        // plain Status of "Pending" but an approved moderation state and
        // must not count.
        let service = host(json!({
            "lists": [{
                "title": "Documents",
                "fields": ["Title"],
                "items": [
                    { "Title": "a", "_ModerationStatus": "Pending" },
                    { "Title": "b", "Status": "Pending", "_ModerationStatus": "Approved" },
                    { "Title": "c", "Status": "Pending" },
                ],
            }]
        }));

        let count = resolve_count(&service, "", "Documents", "Pending", "v1", "").await;
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_rejected_scans_client_side_when_filter_rejected() {
        // Fields list omits Status, so the server-side filter is rejected
        // even though the records carry the column.
        let service = host(json!({
            "lists": [{
                "title": "Documents",
                "fields": ["Title"],
                "items": status_items("Status", &["rejected", "Draft", "REJECTED", "Approved"]),
            }]
        }));

        let count = resolve_count(&service, "", "Documents", "Rejected Files", "v1", "").await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_draft_server_side_filter_short_circuits() {
        let service = host(json!({
            "lists": [{
                "title": "Documents",
                "items": status_items("Status", &["Draft", "Draft", "Approved"]),
            }]
        }));

        let count = resolve_count(&service, "", "Documents", "Draft View", "v1", "").await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_assigned_filters_on_current_user() {
        let service = host(json!({
            "current_user_id": "7",
            "lists": [{
                "title": "Documents",
                "items": [
                    { "Title": "a", "AssignedTo": "7" },
                    { "Title": "b", "AssignedTo": "3" },
                    { "Title": "c", "AssignedTo": "7" },
                ],
            }]
        }));

        let count = resolve_count(&service, "", "Documents", "Assigned Documents", "v1", "").await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_assigned_falls_back_to_draft_scan() {
        // No AssignedTo column: the filtered rung is rejected.
        let service = host(json!({
            "lists": [{
                "title": "Documents",
                "fields": ["Title"],
                "items": status_items("Status", &["Draft", "draft", "Approved"]),
            }]
        }));

        let count = resolve_count(&service, "", "Documents", "Assigned to Me", "v1", "").await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_view_scoped_counts_rendered_rows() {
        let service = host(json!({
            "render_shape": "nested",
            "lists": [{
                "title": "Documents",
                "views": [{
                    "Id": "v1",
                    "Title": "Published",
                    "ViewQuery": "<Where><Eq><FieldRef Name=\"Status\"/><Value Type=\"Text\">Approved</Value></Eq></Where>",
                }],
                "items": status_items("Status", &["Approved", "Draft", "Approved"]),
            }]
        }));

        let count = resolve_count(
            &service,
            "",
            "Documents",
            "Published",
            "v1",
            "<Where><Eq><FieldRef Name=\"Status\"/><Value Type=\"Text\">Approved</Value></Eq></Where>",
        )
        .await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_view_scoped_empty_render_falls_back_to_total() {
        // A stored query matching nothing drops to the unfiltered total.
        let service = host(json!({
            "lists": [{
                "title": "Documents",
                "views": [{ "Id": "v1", "Title": "Archive" }],
                "items": status_items("Status", &["Approved", "Draft"]),
            }]
        }));

        let count = resolve_count(
            &service,
            "",
            "Documents",
            "Archive",
            "v1",
            "<Where><Eq><FieldRef Name=\"Status\"/><Value Type=\"Text\">Nothing</Value></Eq></Where>",
        )
        .await;
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_total_service_failure_yields_zero() {
        // The list is absent, so every rung of every ladder fails.
        let service = host(json!({ "lists": [] }));

        for title in ["Pending", "Rejected", "Draft", "Assigned", "Anything Else"] {
            let count = resolve_count(&service, "", "Documents", title, "v1", "").await;
            assert_eq!(count, 0, "strategy for '{}' must degrade to zero", title);
        }
    }

    #[test]
    fn test_extract_rows_accepts_both_shapes() {
        let flat = json!({ "Row": [{}, {}] });
        let nested = json!({ "ListData": { "Row": [{}] } });
        let neither = json!({ "Items": [] });

        assert_eq!(extract_rows(&flat).map(Vec::len), Some(2));
        assert_eq!(extract_rows(&nested).map(Vec::len), Some(1));
        assert!(extract_rows(&neither).is_none());
    }
}
