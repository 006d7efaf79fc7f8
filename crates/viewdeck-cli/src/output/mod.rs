//! Plain-text rendering of catalogs and view lists.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use viewdeck_engine::{navigation_target, summary_tile_target};
use viewdeck_types::{Catalog, StatusColor, ViewDescriptor, is_summary_tile};

pub fn print_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No list configured.");
        return;
    }
    println!(
        "{} entries  (published library total: {})",
        catalog.entries.len(),
        catalog.published_total
    );
    print_views(&catalog.meta.site_url, &catalog.entries);
    // Only the summary tile means the library itself has nothing to show.
    if catalog.entries.len() == 1 {
        println!("The library has no views to show.");
    }
}

pub fn print_views(site_url: &str, views: &[ViewDescriptor]) {
    for view in views {
        let marker = if view.is_default { "*" } else { " " };
        let more = view
            .classification
            .as_ref()
            .filter(|c| c.show_view_more)
            .map(|_| "  [view more]")
            .unwrap_or("");
        println!(
            "{:>6} {} {:<32} {}{}",
            view.item_count,
            marker,
            view.title,
            paint_status(view),
            more
        );
        if let Some(target) = target_of(site_url, view) {
            println!("         -> {}", target);
        }
    }
}

fn target_of(site_url: &str, view: &ViewDescriptor) -> Option<String> {
    if is_summary_tile(&view.id) {
        summary_tile_target(site_url, &view.id)
    } else {
        navigation_target(site_url, view)
    }
}

fn paint_status(view: &ViewDescriptor) -> String {
    let label = view.status_label();
    let Some(classification) = &view.classification else {
        return label.to_string();
    };
    if !std::io::stdout().is_terminal() {
        return label.to_string();
    }
    match classification.status_color {
        StatusColor::Black => label.to_string(),
        StatusColor::Blue => label.blue().to_string(),
        StatusColor::Orange => label.yellow().to_string(),
        StatusColor::Red => label.red().to_string(),
        StatusColor::Aliceblue => label.cyan().to_string(),
    }
}
