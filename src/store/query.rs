//! Project listing: status filter, tag filter, sort, then paginate.

use std::cmp::Ordering;

use crate::models::{Project, ProjectPage, ProjectQuery, SortField, SortOrder};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Run a listing query over a snapshot of the store.
///
/// `total` counts the filtered records before pagination. Pages past the end
/// come back empty.
pub fn query_projects(mut projects: Vec<&Project>, query: &ProjectQuery) -> ProjectPage {
    if let Some(status) = query.status {
        projects.retain(|p| p.status == status);
    }

    // OR semantics: one shared tag is enough.
    if !query.tags.is_empty() {
        projects.retain(|p| p.tags.iter().any(|tag| query.tags.contains(tag)));
    }

    if let (Some(sort_by), Some(order)) = (query.sort_by.as_deref(), query.sort_order) {
        // Unsortable fields keep the filtered order.
        if let Some(field) = SortField::from_field_name(sort_by) {
            // `sort_by` is stable, so ties keep their relative order.
            projects.sort_by(|a, b| {
                let ordering = compare_by(a, b, field);
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
    }

    let total = projects.len();
    let page = query.page.filter(|&p| p > 0).unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.filter(|&l| l > 0).unwrap_or(DEFAULT_LIMIT);
    let start = (page - 1).saturating_mul(limit);

    let projects = projects
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    ProjectPage { projects, total }
}

fn compare_by(a: &Project, b: &Project, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}
