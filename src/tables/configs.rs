use super::{Column, Tab, TableConfig, Tone};

pub const USERS: TableConfig = TableConfig {
    title: "Users",
    columns: &[
        Column {
            key: "name",
            header: "Name",
        },
        Column {
            key: "phone_number",
            header: "Phone",
        },
        Column {
            key: "vacation_mode",
            header: "Status",
        },
        Column {
            key: "created_at",
            header: "Joined",
        },
    ],
    tabs: &[
        Tab {
            label: "Active",
            value: "active",
            field: "vacation_mode",
            matches: "false",
        },
        Tab {
            label: "On Vacation",
            value: "vacation",
            field: "vacation_mode",
            matches: "true",
        },
    ],
    search_key: "name",
    search_placeholder: "Search by name...",
};

pub const ITEMS: TableConfig = TableConfig {
    title: "Items",
    columns: &[
        Column {
            key: "title",
            header: "Item",
        },
        Column {
            key: "owner",
            header: "Owner",
        },
        Column {
            key: "category",
            header: "Category",
        },
        Column {
            key: "status",
            header: "Status",
        },
        Column {
            key: "average_rating",
            header: "Rating",
        },
    ],
    tabs: &[
        Tab {
            label: "Pending",
            value: "pending",
            field: "status",
            matches: "PENDING",
        },
        Tab {
            label: "Approved",
            value: "approved",
            field: "status",
            matches: "APPROVED",
        },
        Tab {
            label: "Rejected",
            value: "rejected",
            field: "status",
            matches: "REJECTED",
        },
        Tab {
            label: "Under Review",
            value: "under_review",
            field: "status",
            matches: "UNDER_REVIEW",
        },
    ],
    search_key: "title",
    search_placeholder: "Search by title...",
};

pub const REQUESTS: TableConfig = TableConfig {
    title: "Requests",
    columns: &[
        Column {
            key: "item",
            header: "Item",
        },
        Column {
            key: "borrower_name",
            header: "Borrower",
        },
        Column {
            key: "owner_name",
            header: "Owner",
        },
        Column {
            key: "dates",
            header: "Dates",
        },
        Column {
            key: "status",
            header: "Status",
        },
    ],
    tabs: &[
        Tab {
            label: "Pending",
            value: "pending",
            field: "status",
            matches: "PENDING",
        },
        Tab {
            label: "Accepted",
            value: "accepted",
            field: "status",
            matches: "ACCEPTED",
        },
        Tab {
            label: "Rejected",
            value: "rejected",
            field: "status",
            matches: "REJECTED",
        },
        Tab {
            label: "Expired",
            value: "expired",
            field: "status",
            matches: "EXPIRED",
        },
        Tab {
            label: "Cancelled",
            value: "cancelled",
            field: "status",
            matches: "CANCELLED",
        },
    ],
    search_key: "borrower_name",
    search_placeholder: "Search by borrower...",
};

pub const BOOKINGS: TableConfig = TableConfig {
    title: "Bookings",
    columns: &[
        Column {
            key: "item",
            header: "Item",
        },
        Column {
            key: "borrower_name",
            header: "Borrower",
        },
        Column {
            key: "period",
            header: "Period",
        },
        Column {
            key: "status",
            header: "Status",
        },
        Column {
            key: "confirmed_at",
            header: "Confirmed",
        },
    ],
    tabs: &[
        Tab {
            label: "Confirmed",
            value: "confirmed",
            field: "status",
            matches: "CONFIRMED",
        },
        Tab {
            label: "In Progress",
            value: "in_progress",
            field: "status",
            matches: "IN_PROGRESS",
        },
        Tab {
            label: "Completed",
            value: "completed",
            field: "status",
            matches: "COMPLETED",
        },
        Tab {
            label: "Cancelled",
            value: "cancelled",
            field: "status",
            matches: "CANCELLED",
        },
    ],
    search_key: "borrower_name",
    search_placeholder: "Search by borrower...",
};

pub const MERCHANTS: TableConfig = TableConfig {
    title: "Merchants",
    columns: &[
        Column {
            key: "business_name",
            header: "Business Name",
        },
        Column {
            key: "owner",
            header: "Owner",
        },
        Column {
            key: "business_license",
            header: "License",
        },
        Column {
            key: "verified_status",
            header: "Status",
        },
        Column {
            key: "created_at",
            header: "Joined",
        },
    ],
    tabs: &[
        Tab {
            label: "Verified",
            value: "verified",
            field: "verified_status",
            matches: "true",
        },
        Tab {
            label: "Pending",
            value: "pending",
            field: "verified_status",
            matches: "false",
        },
    ],
    search_key: "business_name",
    search_placeholder: "Search by business...",
};

pub const MODERATORS: TableConfig = TableConfig {
    title: "Moderators",
    columns: &[
        Column {
            key: "username",
            header: "Username",
        },
        Column {
            key: "role",
            header: "Role",
        },
        Column {
            key: "is_active",
            header: "Status",
        },
        Column {
            key: "last_login",
            header: "Last Login",
        },
    ],
    tabs: &[
        Tab {
            label: "Active",
            value: "active",
            field: "is_active",
            matches: "true",
        },
        Tab {
            label: "Disabled",
            value: "disabled",
            field: "is_active",
            matches: "false",
        },
    ],
    search_key: "username",
    search_placeholder: "Search by username...",
};

pub fn item_status_tone(status: &str) -> Tone {
    match status {
        "APPROVED" => Tone::Green,
        "PENDING" => Tone::Yellow,
        "REJECTED" => Tone::Red,
        "UNDER_REVIEW" => Tone::Blue,
        _ => Tone::Gray,
    }
}

pub fn request_status_tone(status: &str) -> Tone {
    match status {
        "PENDING" => Tone::Yellow,
        "ACCEPTED" => Tone::Green,
        "REJECTED" => Tone::Red,
        "CANCELLED" => Tone::Blue,
        _ => Tone::Gray,
    }
}

pub fn booking_status_tone(status: &str) -> Tone {
    match status {
        "CONFIRMED" => Tone::Blue,
        "IN_PROGRESS" => Tone::Yellow,
        "COMPLETED" => Tone::Green,
        "CANCELLED" => Tone::Red,
        _ => Tone::Gray,
    }
}
