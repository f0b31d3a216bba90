use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use crate::models::UserRecord;

pub const EMPTY_LIST_MESSAGE: &str = "No users found.";

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

/// One row per user, in list order.
pub fn users_table(users: &[UserRecord]) -> Table {
    let mut table = base_table();
    table.set_header(vec!["ID", "Name", "Email", "Phone", "Website", "Address"]);
    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            user.name_display().to_string(),
            user.email_display().to_string(),
            user.phone_display().to_string(),
            user.website_display().to_string(),
            user.address_display(),
        ]);
    }
    table
}

/// Field/value view of a single record.
pub fn user_detail_table(user: &UserRecord) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["ID".to_string(), user.id.to_string()]);
    table.add_row(vec!["Name".to_string(), user.name_display().to_string()]);
    table.add_row(vec!["Email".to_string(), user.email_display().to_string()]);
    table.add_row(vec!["Phone".to_string(), user.phone_display().to_string()]);
    table.add_row(vec!["Website".to_string(), user.website_display().to_string()]);
    table.add_row(vec!["Address".to_string(), user.address_display()]);
    table
}

/// Render the list view, or the empty-list notice.
pub fn render_users(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }
    users_table(users).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ada() -> UserRecord {
        serde_json::from_value(json!({
            "id": 11, "name": "Ada", "email": "ada@example.com", "phone": "555-0100"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_list_shows_notice() {
        assert_eq!(render_users(&[]), "No users found.");
    }

    #[test]
    fn test_table_uses_placeholders() {
        let rendered = render_users(&[ada()]);
        assert!(rendered.contains("Ada"));
        assert!(rendered.contains("N/A"));
        assert!(rendered.contains("Not provided"));
    }

    #[test]
    fn test_missing_contact_fields_render_blank() {
        let partial: UserRecord = serde_json::from_value(json!({"id": 11, "name": "Ada"})).unwrap();
        let rendered = render_users(&[partial]);
        assert!(rendered.contains("Ada"));
        assert!(rendered.contains("11"));
    }

    #[test]
    fn test_detail_table_lists_fields() {
        let rendered = user_detail_table(&ada()).to_string();
        assert!(rendered.contains("ada@example.com"));
        assert!(rendered.contains("555-0100"));
    }
}
