pub mod filter;
pub mod page;

use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};

use crate::model::{TopZone, Trip, TripSummary, Zone};

use self::filter::{day_bounds, push_where, TripFilter};
use self::page::{Page, PageRequest, Sort};

pub const TOP_ZONES_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopZoneOrder {
    #[default]
    Pickup,
    Dropoff,
}

impl TopZoneOrder {
    /// Anything that is not `dropoff` counts trips by pickup zone.
    pub fn from_param(value: &str) -> Self {
        if value.eq_ignore_ascii_case("dropoff") {
            TopZoneOrder::Dropoff
        } else {
            TopZoneOrder::Pickup
        }
    }
}

/// Busiest zones by trip volume through the selected location field.
/// Trips referencing an unknown zone drop out of the join. Equal counts
/// break deterministically on zone name.
pub async fn top_zones(pool: &PgPool, order: TopZoneOrder) -> Result<Vec<TopZone>, sqlx::Error> {
    let sql = match order {
        TopZoneOrder::Pickup => {
            "SELECT z.zone_name, COUNT(*) AS trips
            FROM trip t
            INNER JOIN zone z ON t.pickup_location_id = z.location_id
            GROUP BY z.zone_name
            ORDER BY trips DESC, z.zone_name ASC
            LIMIT $1"
        }
        TopZoneOrder::Dropoff => {
            "SELECT z.zone_name, COUNT(*) AS trips
            FROM trip t
            INNER JOIN zone z ON t.dropoff_location_id = z.location_id
            GROUP BY z.zone_name
            ORDER BY trips DESC, z.zone_name ASC
            LIMIT $1"
        }
    };

    let rows: Vec<(String, i64)> = sqlx::query_as(sql)
        .bind(TOP_ZONES_LIMIT)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(zone_name, count)| TopZone { zone_name, count })
        .collect())
}

/// Pickup and dropoff counts for one zone on one calendar day. Zero
/// matches is a zero count, not an error.
pub async fn trip_summary(
    pool: &PgPool,
    zone_id: i32,
    date: NaiveDate,
) -> Result<TripSummary, sqlx::Error> {
    let (start, end) = day_bounds(date);

    let pickup_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM trip
        WHERE pickup_location_id = $1 AND pickup_date_time BETWEEN $2 AND $3",
    )
    .bind(zone_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    let dropoff_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM trip
        WHERE dropoff_location_id = $1 AND dropoff_date_time BETWEEN $2 AND $3",
    )
    .bind(zone_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    Ok(TripSummary {
        zone_id,
        date,
        pickup_count,
        dropoff_count,
    })
}

/// One page of trips matching the filter. The count and the page query
/// share the same composed predicate; an absent sort falls back to id
/// order.
pub async fn find_trips(
    pool: &PgPool,
    filter: &TripFilter,
    page: &PageRequest,
) -> Result<Page<Trip>, sqlx::Error> {
    let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM trip");
    push_where(&mut count_query, filter);

    let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

    let mut query = QueryBuilder::new(
        "SELECT id, pickup_date_time, dropoff_date_time, pickup_location_id, dropoff_location_id FROM trip",
    );
    push_where(&mut query, filter);

    let sort = page.sort.unwrap_or(Sort::DEFAULT);
    query.push(" ORDER BY ");
    query.push(sort.order_by());
    query.push(" LIMIT ");
    query.push_bind(page.limit());
    query.push(" OFFSET ");
    query.push_bind(page.offset());

    let trips: Vec<Trip> = query.build_query_as().fetch_all(pool).await?;

    Ok(Page::new(trips, page, total))
}

pub async fn all_zones(pool: &PgPool) -> Result<Vec<Zone>, sqlx::Error> {
    sqlx::query_as(
        "SELECT location_id, borough, zone_name, service_zone FROM zone ORDER BY location_id",
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_param_defaults_to_pickup() {
        assert_eq!(TopZoneOrder::from_param("pickup"), TopZoneOrder::Pickup);
        assert_eq!(TopZoneOrder::from_param("dropoff"), TopZoneOrder::Dropoff);
        assert_eq!(TopZoneOrder::from_param("DROPOFF"), TopZoneOrder::Dropoff);
        assert_eq!(TopZoneOrder::from_param("anything"), TopZoneOrder::Pickup);
    }
}
