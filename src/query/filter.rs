use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::{Postgres, QueryBuilder};

/// Independently-optional trip criteria. Each present field contributes
/// exactly one clause, absent fields contribute nothing.
#[derive(Debug, Default, Clone)]
pub struct TripFilter {
    pub pickup_location_id: Option<i32>,
    pub dropoff_location_id: Option<i32>,
    pub pickup_date: Option<NaiveDate>,
    pub dropoff_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    PickupLocation(i32),
    DropoffLocation(i32),
    PickupBetween(NaiveDateTime, NaiveDateTime),
    DropoffBetween(NaiveDateTime, NaiveDateTime),
}

impl TripFilter {
    pub fn clauses(&self) -> Vec<Clause> {
        let mut clauses = Vec::new();

        if let Some(id) = self.pickup_location_id {
            clauses.push(Clause::PickupLocation(id));
        }

        if let Some(id) = self.dropoff_location_id {
            clauses.push(Clause::DropoffLocation(id));
        }

        if let Some(date) = self.pickup_date {
            let (start, end) = day_bounds(date);
            clauses.push(Clause::PickupBetween(start, end));
        }

        if let Some(date) = self.dropoff_date {
            let (start, end) = day_bounds(date);
            clauses.push(Clause::DropoffBetween(start, end));
        }

        clauses
    }
}

/// Closed range covering one calendar day. TIMESTAMP columns carry
/// microsecond precision; the upper bound is the last representable
/// instant of the day.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let last_instant = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999)
        .expect("23:59:59.999999 is a valid time of day");

    (date.and_time(NaiveTime::MIN), date.and_time(last_instant))
}

/// Appends `WHERE ...` with the present criteria AND-combined and all
/// values bound as parameters. No criteria appends nothing, which matches
/// every row.
pub fn push_where(query: &mut QueryBuilder<'_, Postgres>, filter: &TripFilter) {
    let clauses = filter.clauses();
    if clauses.is_empty() {
        return;
    }

    query.push(" WHERE ");
    let mut and = query.separated(" AND ");

    for clause in clauses {
        match clause {
            Clause::PickupLocation(id) => {
                and.push("pickup_location_id = ").push_bind_unseparated(id);
            }
            Clause::DropoffLocation(id) => {
                and.push("dropoff_location_id = ").push_bind_unseparated(id);
            }
            Clause::PickupBetween(start, end) => {
                and.push("pickup_date_time BETWEEN ")
                    .push_bind_unseparated(start)
                    .push_unseparated(" AND ")
                    .push_bind_unseparated(end);
            }
            Clause::DropoffBetween(start, end) => {
                and.push("dropoff_date_time BETWEEN ")
                    .push_bind_unseparated(start)
                    .push_unseparated(" AND ")
                    .push_bind_unseparated(end);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sql_for(filter: &TripFilter) -> String {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM trip");
        push_where(&mut query, filter);
        query.sql().to_string()
    }

    #[test]
    fn empty_filter_adds_no_where_clause() {
        assert_eq!(sql_for(&TripFilter::default()), "SELECT COUNT(*) FROM trip");
    }

    #[test]
    fn single_criterion_becomes_a_single_equality() {
        let filter = TripFilter {
            pickup_location_id: Some(5),
            ..TripFilter::default()
        };

        assert_eq!(
            sql_for(&filter),
            "SELECT COUNT(*) FROM trip WHERE pickup_location_id = $1"
        );
    }

    #[test]
    fn two_criteria_are_and_combined() {
        let filter = TripFilter {
            pickup_location_id: Some(5),
            dropoff_location_id: Some(9),
            ..TripFilter::default()
        };

        assert_eq!(
            sql_for(&filter),
            "SELECT COUNT(*) FROM trip WHERE pickup_location_id = $1 AND dropoff_location_id = $2"
        );
    }

    #[test]
    fn date_criterion_becomes_a_between_range() {
        let filter = TripFilter {
            pickup_date: Some(date(2024, 3, 5)),
            ..TripFilter::default()
        };

        assert_eq!(
            sql_for(&filter),
            "SELECT COUNT(*) FROM trip WHERE pickup_date_time BETWEEN $1 AND $2"
        );
    }

    #[test]
    fn all_criteria_compose_in_declaration_order() {
        let filter = TripFilter {
            pickup_location_id: Some(5),
            dropoff_location_id: Some(9),
            pickup_date: Some(date(2024, 3, 5)),
            dropoff_date: Some(date(2024, 3, 6)),
        };

        assert_eq!(
            sql_for(&filter),
            "SELECT COUNT(*) FROM trip \
             WHERE pickup_location_id = $1 \
             AND dropoff_location_id = $2 \
             AND pickup_date_time BETWEEN $3 AND $4 \
             AND dropoff_date_time BETWEEN $5 AND $6"
        );
    }

    #[test]
    fn day_bounds_span_the_whole_day() {
        let (start, end) = day_bounds(date(2024, 3, 5));

        assert_eq!(start, date(2024, 3, 5).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            end,
            date(2024, 3, 5).and_hms_micro_opt(23, 59, 59, 999_999).unwrap()
        );

        // The last second of the day is in range, the next midnight is not.
        let last_second = date(2024, 3, 5).and_hms_opt(23, 59, 59).unwrap();
        let next_midnight = date(2024, 3, 6).and_hms_opt(0, 0, 0).unwrap();

        assert!(start <= last_second && last_second <= end);
        assert!(next_midnight > end);
    }

    #[test]
    fn date_clauses_carry_the_day_bounds() {
        let filter = TripFilter {
            pickup_date: Some(date(2024, 3, 5)),
            ..TripFilter::default()
        };

        let (start, end) = day_bounds(date(2024, 3, 5));
        assert_eq!(filter.clauses(), vec![Clause::PickupBetween(start, end)]);
    }
}
