use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Zone {
    #[serde(rename = "locationID")]
    pub location_id: i32,
    pub borough: String,
    #[serde(rename = "zoneName")]
    pub zone_name: String,
    #[serde(rename = "serviceZone")]
    pub service_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Trip {
    pub id: i64,
    #[serde(rename = "pickupDateTime")]
    pub pickup_date_time: NaiveDateTime,
    #[serde(rename = "dropoffDateTime")]
    pub dropoff_date_time: NaiveDateTime,
    #[serde(rename = "pickupLocationID")]
    pub pickup_location_id: i32,
    #[serde(rename = "dropoffLocationID")]
    pub dropoff_location_id: i32,
}

/// A trip parsed from the dataset but not yet persisted; the id is
/// assigned by storage on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub pickup_date_time: NaiveDateTime,
    pub dropoff_date_time: NaiveDateTime,
    pub pickup_location_id: i32,
    pub dropoff_location_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopZone {
    #[serde(rename = "zoneName")]
    pub zone_name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    #[serde(rename = "zoneId")]
    pub zone_id: i32,
    pub date: NaiveDate,
    #[serde(rename = "pickupCount")]
    pub pickup_count: i64,
    #[serde(rename = "dropoffCount")]
    pub dropoff_count: i64,
}
