use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::page::DEFAULT_PAGE_SIZE;

#[derive(Deserialize)]
pub struct TopZonesParams {
    #[serde(rename = "orderBy", default = "default_order_by")]
    pub order_by: String,
}

#[derive(Deserialize)]
pub struct ZoneTripsParams {
    #[serde(rename = "zoneId")]
    pub zone_id: i32,
    pub date: NaiveDate,
}

#[derive(Deserialize)]
pub struct ListTripsParams {
    #[serde(rename = "pickupLocationId")]
    pub pickup_location_id: Option<i32>,

    #[serde(rename = "dropoffLocationId")]
    pub dropoff_location_id: Option<i32>,

    #[serde(rename = "pickupDate")]
    pub pickup_date: Option<NaiveDate>,

    #[serde(rename = "dropoffDate")]
    pub dropoff_date: Option<NaiveDate>,

    #[serde(default)]
    pub page: u32,

    #[serde(default = "default_page_size")]
    pub size: u32,

    pub sort: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip)]
    pub status: StatusCode,
}

fn default_order_by() -> String {
    "pickup".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
