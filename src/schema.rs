pub const SCHEMA: &'static str = r#"

CREATE TABLE IF NOT EXISTS zone (
    location_id INTEGER PRIMARY KEY,
    borough TEXT NOT NULL,
    zone_name TEXT NOT NULL,
    service_zone TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS trip (
    id BIGSERIAL PRIMARY KEY,
    pickup_date_time TIMESTAMP NOT NULL,
    dropoff_date_time TIMESTAMP NOT NULL,
    pickup_location_id INTEGER NOT NULL,
    dropoff_location_id INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS trip_pickup_idx ON trip (pickup_location_id, pickup_date_time);

CREATE INDEX IF NOT EXISTS trip_dropoff_idx ON trip (dropoff_location_id, dropoff_date_time);

"#;
