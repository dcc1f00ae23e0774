use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect};

use crate::db;
use crate::error::AppError;
use crate::models::{Capability, DashboardSummary, ModeratorProfile};
use crate::session::CurrentModerator;
use crate::state::SharedState;
use crate::tables::{RenderedTable, TableConfig, TableQuery, TableRow, configs};
use crate::views::layout::Layout;

#[derive(Template)]
#[template(path = "dashboard/table.html")]
struct TableTemplate {
    layout: Layout,
    table: RenderedTable,
}

#[derive(Template)]
#[template(path = "dashboard/analytics.html")]
struct AnalyticsTemplate {
    layout: Layout,
    summary: DashboardSummary,
}

fn render_table<R: TableRow>(
    moderator: &ModeratorProfile,
    path: &str,
    config: &TableConfig,
    rows: &[R],
    query: &TableQuery,
) -> Html<String> {
    let template = TableTemplate {
        layout: Layout::new(moderator, path),
        table: config.render(rows, query),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn index() -> Redirect {
    Redirect::to("/dashboard/analytics")
}

pub async fn analytics(
    CurrentModerator(moderator): CurrentModerator,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = db::summary::fetch(state.public.pool()).await?;

    let template = AnalyticsTemplate {
        layout: Layout::new(&moderator, "/dashboard/analytics"),
        summary,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn users(
    CurrentModerator(moderator): CurrentModerator,
    State(state): State<SharedState>,
    Query(query): Query<TableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let users = db::users::list(state.public.pool()).await?;
    Ok(render_table(&moderator, "/dashboard/users", &configs::USERS, &users, &query))
}

pub async fn items(
    CurrentModerator(moderator): CurrentModerator,
    State(state): State<SharedState>,
    Query(query): Query<TableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = db::items::list(state.public.pool()).await?;
    Ok(render_table(&moderator, "/dashboard/items", &configs::ITEMS, &items, &query))
}

pub async fn requests(
    CurrentModerator(moderator): CurrentModerator,
    State(state): State<SharedState>,
    Query(query): Query<TableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let requests = db::requests::list(state.public.pool()).await?;
    Ok(render_table(
        &moderator,
        "/dashboard/requests",
        &configs::REQUESTS,
        &requests,
        &query,
    ))
}

pub async fn bookings(
    CurrentModerator(moderator): CurrentModerator,
    State(state): State<SharedState>,
    Query(query): Query<TableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = db::bookings::list(state.public.pool()).await?;
    Ok(render_table(
        &moderator,
        "/dashboard/bookings",
        &configs::BOOKINGS,
        &bookings,
        &query,
    ))
}

pub async fn merchants(
    CurrentModerator(moderator): CurrentModerator,
    State(state): State<SharedState>,
    Query(query): Query<TableQuery>,
) -> Result<impl IntoResponse, AppError> {
    let merchants = db::merchants::list(state.public.pool()).await?;
    Ok(render_table(
        &moderator,
        "/dashboard/merchants",
        &configs::MERCHANTS,
        &merchants,
        &query,
    ))
}

pub async fn moderators(
    current: CurrentModerator,
    State(state): State<SharedState>,
    Query(query): Query<TableQuery>,
) -> Result<impl IntoResponse, AppError> {
    current.require(Capability::ManageModerators)?;

    // Moderator rows are not visible to the public role.
    let moderators = db::moderators::list(state.service.pool()).await?;
    Ok(render_table(
        &current.0,
        "/dashboard/moderators",
        &configs::MODERATORS,
        &moderators,
        &query,
    ))
}
