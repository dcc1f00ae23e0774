//! Presentation transforms: flat display values derived from joined rows.

use chrono::{DateTime, NaiveDate, Utc};

use super::configs::{booking_status_tone, item_status_tone, request_status_tone};
use super::{Cell, TableRow, Tone};
use crate::models::{
    BookingListing, ItemListing, MerchantListing, ModeratorProfile, RequestListing, Role, User,
};

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_ITEM: &str = "Unknown Item";
const NONE_SHOWN: &str = "-";
const DESCRIPTION_PREVIEW: usize = 50;

/// "first last", trimmed, with either part allowed to be missing.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}

/// Display name of a joined person: `Unknown` unless a first name came back.
pub fn person_name(first: Option<&str>, last: Option<&str>) -> String {
    match first {
        Some(f) if !f.is_empty() => full_name(Some(f), last),
        _ => UNKNOWN.to_string(),
    }
}

pub fn item_title(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => UNKNOWN_ITEM.to_string(),
    }
}

pub fn preview(text: Option<&str>) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;
    if text.chars().count() > DESCRIPTION_PREVIEW {
        let cut: String = text.chars().take(DESCRIPTION_PREVIEW).collect();
        Some(format!("{cut}..."))
    } else {
        Some(text.to_string())
    }
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NONE_SHOWN.to_string(),
    }
}

fn day(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

fn span(start: &NaiveDate, end: &NaiveDate) -> String {
    format!("{} - {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
}

impl User {
    pub fn display_name(&self) -> String {
        let name = full_name(self.first_name.as_deref(), self.last_name.as_deref());
        if name.is_empty() {
            UNKNOWN.to_string()
        } else {
            name
        }
    }
}

impl TableRow for User {
    fn cell(&self, column: &str) -> Cell {
        match column {
            "name" => Cell::text(self.display_name()).with_detail(self.email.clone()),
            "phone_number" => Cell::muted(or_dash(self.phone_number.as_deref())),
            "vacation_mode" => {
                if self.vacation_mode {
                    Cell::badge("On Vacation", Tone::Gray)
                } else {
                    Cell::badge("Active", Tone::Green)
                }
            }
            "created_at" => Cell::text(day(&self.created_at)),
            _ => Cell::default(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.display_name()),
            "email" => Some(self.email.clone()),
            "vacation_mode" => Some(self.vacation_mode.to_string()),
            _ => None,
        }
    }
}

impl ItemListing {
    pub fn owner_name(&self) -> String {
        person_name(self.owner_first_name.as_deref(), self.owner_last_name.as_deref())
    }
}

impl TableRow for ItemListing {
    fn cell(&self, column: &str) -> Cell {
        match column {
            "title" => {
                let cell = Cell::text(self.title.clone());
                match preview(self.description.as_deref()) {
                    Some(p) => cell.with_detail(p),
                    None => cell,
                }
            }
            "owner" => Cell::text(self.owner_name()),
            "category" => Cell::badge(or_dash(self.category_name.as_deref()), Tone::Gray),
            "status" => Cell::badge(self.status.clone(), item_status_tone(&self.status)),
            "average_rating" => Cell::text(format!(
                "★ {:.1} ({})",
                self.average_rating, self.total_reviews
            )),
            _ => Cell::default(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.clone()),
            "owner_name" => Some(self.owner_name()),
            "category_name" => Some(or_dash(self.category_name.as_deref())),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

impl RequestListing {
    pub fn item_title(&self) -> String {
        item_title(self.item_title.as_deref())
    }

    pub fn borrower_name(&self) -> String {
        person_name(
            self.borrower_first_name.as_deref(),
            self.borrower_last_name.as_deref(),
        )
    }

    pub fn owner_name(&self) -> String {
        person_name(self.owner_first_name.as_deref(), self.owner_last_name.as_deref())
    }
}

impl TableRow for RequestListing {
    fn cell(&self, column: &str) -> Cell {
        match column {
            "item" => Cell::text(self.item_title()),
            "borrower_name" => Cell::text(self.borrower_name()),
            "owner_name" => Cell::text(self.owner_name()),
            "dates" => Cell::text(span(&self.start_date, &self.end_date)),
            "status" => Cell::badge(self.status.clone(), request_status_tone(&self.status)),
            _ => Cell::default(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "item_title" => Some(self.item_title()),
            "borrower_name" => Some(self.borrower_name()),
            "owner_name" => Some(self.owner_name()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

impl BookingListing {
    pub fn item_title(&self) -> String {
        item_title(self.item_title.as_deref())
    }

    pub fn borrower_name(&self) -> String {
        person_name(
            self.borrower_first_name.as_deref(),
            self.borrower_last_name.as_deref(),
        )
    }
}

impl TableRow for BookingListing {
    fn cell(&self, column: &str) -> Cell {
        match column {
            "item" => Cell::text(self.item_title()),
            "borrower_name" => Cell::text(self.borrower_name()),
            "period" => Cell::text(format!(
                "{} - {}",
                day(&self.start_time),
                day(&self.return_time)
            )),
            "status" => Cell::badge(self.status.clone(), booking_status_tone(&self.status)),
            "confirmed_at" => Cell::muted(day(&self.confirmed_at)),
            _ => Cell::default(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "item_title" => Some(self.item_title()),
            "borrower_name" => Some(self.borrower_name()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

impl TableRow for MerchantListing {
    fn cell(&self, column: &str) -> Cell {
        match column {
            "business_name" => Cell::text(self.business_name.clone()),
            "owner" => {
                let name = person_name(
                    self.owner_first_name.as_deref(),
                    self.owner_last_name.as_deref(),
                );
                match &self.owner_email {
                    Some(email) => Cell::text(name).with_detail(email.clone()),
                    None => Cell::text(name),
                }
            }
            "business_license" => Cell::muted(or_dash(self.business_license.as_deref())),
            "verified_status" => {
                if self.verified_status {
                    Cell::badge("Verified", Tone::Green)
                } else {
                    Cell::badge("Pending", Tone::Gray)
                }
            }
            "created_at" => Cell::text(day(&self.created_at)),
            _ => Cell::default(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "business_name" => Some(self.business_name.clone()),
            "verified_status" => Some(self.verified_status.to_string()),
            _ => None,
        }
    }
}

impl TableRow for ModeratorProfile {
    fn cell(&self, column: &str) -> Cell {
        match column {
            "username" => Cell::text(self.username.clone()),
            "role" => match self.role {
                Role::Admin => Cell::badge(self.role.label(), Tone::Blue),
                Role::Moderator => Cell::badge(self.role.label(), Tone::Gray),
            },
            "is_active" => {
                if self.is_active {
                    Cell::badge("Active", Tone::Green)
                } else {
                    Cell::badge("Disabled", Tone::Red)
                }
            }
            "last_login" => match &self.last_login {
                Some(at) => Cell::muted(at.format("%Y-%m-%d %H:%M").to_string()),
                None => Cell::muted("Never"),
            },
            _ => Cell::default(),
        }
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "username" => Some(self.username.clone()),
            "role" => Some(self.role.as_str().to_string()),
            "is_active" => Some(self.is_active.to_string()),
            _ => None,
        }
    }
}
