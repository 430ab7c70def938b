use anyhow::bail;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort clause in the `"field,direction"` form the API takes. Fields map
/// onto a whitelist of columns, never onto caller-supplied SQL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sort {
    pub column: &'static str,
    pub descending: bool,
}

impl Sort {
    pub const DEFAULT: Sort = Sort {
        column: "id",
        descending: false,
    };

    pub fn parse(value: &str) -> anyhow::Result<Self> {
        let (field, direction) = match value.split_once(',') {
            Some((field, direction)) => (field, direction),
            None => (value, "asc"),
        };

        let column = match field {
            "id" => "id",
            "pickupDateTime" => "pickup_date_time",
            "dropoffDateTime" => "dropoff_date_time",
            "pickupLocationID" => "pickup_location_id",
            "dropoffLocationID" => "dropoff_location_id",
            _ => bail!("{field} is not a sortable field"),
        };

        let descending = match direction {
            "asc" => false,
            "desc" => true,
            _ => bail!("{direction} is not a sort direction (use asc or desc)"),
        };

        Ok(Sort { column, descending })
    }

    pub fn order_by(&self) -> String {
        let direction = if self.descending { "DESC" } else { "ASC" };
        format!("{} {}", self.column, direction)
    }
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

/// One page of results in the envelope the frontend paginates with.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let size = i64::from(request.size.max(1));
        let total_pages = ((total_elements + size - 1) / size) as u32;

        Page {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: request.page == 0,
            last: request.page + 1 >= total_pages || total_pages == 0,
        }
    }
}
