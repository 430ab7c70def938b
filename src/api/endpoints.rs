use axum::extract::{Query, State};
use axum::Json;
use sqlx::PgPool;

use crate::model::{TopZone, Trip, TripSummary, Zone};
use crate::query;
use crate::query::filter::TripFilter;
use crate::query::page::{Page, PageRequest, Sort};

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

pub async fn top_zones(
    State(pool): State<PgPool>,
    Query(params): Query<TopZonesParams>,
) -> Result<Json<Vec<TopZone>>> {
    let order = query::TopZoneOrder::from_param(&params.order_by);
    let zones = query::top_zones(&pool, order).await?;

    Ok(Json(zones))
}

pub async fn zone_trips(
    State(pool): State<PgPool>,
    Query(params): Query<ZoneTripsParams>,
) -> Result<Json<TripSummary>> {
    let summary = query::trip_summary(&pool, params.zone_id, params.date).await?;

    Ok(Json(summary))
}

pub async fn list_trips(
    State(pool): State<PgPool>,
    Query(params): Query<ListTripsParams>,
) -> Result<Json<Page<Trip>>> {
    if params.size == 0 {
        return Err(ErrorResponse::bad_request("size must be at least 1"));
    }

    let sort = match &params.sort {
        Some(value) => {
            let sort = Sort::parse(value).map_err(|e| ErrorResponse::bad_request(e.to_string()))?;
            Some(sort)
        }
        None => None,
    };

    let filter = TripFilter {
        pickup_location_id: params.pickup_location_id,
        dropoff_location_id: params.dropoff_location_id,
        pickup_date: params.pickup_date,
        dropoff_date: params.dropoff_date,
    };

    let page = PageRequest {
        page: params.page,
        size: params.size,
        sort,
    };

    let trips = query::find_trips(&pool, &filter, &page).await?;

    Ok(Json(trips))
}

pub async fn zones(State(pool): State<PgPool>) -> Result<Json<Vec<Zone>>> {
    let zones = query::all_zones(&pool).await?;

    Ok(Json(zones))
}
