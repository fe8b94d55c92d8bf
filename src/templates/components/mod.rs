pub mod favorites_panel;
pub mod listing_card;
pub mod pagination;

pub use favorites_panel::favorites_panel;
pub use listing_card::listing_card;
pub use pagination::pagination_controls;

/// Link that toggles one favorite and redirects back to `back`.
pub fn toggle_href(id: &str, back: &str) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    ser.append_pair("id", id).append_pair("back", back);
    format!("/favorites/toggle?{}", ser.finish())
}

pub fn detail_href(id: &str) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    ser.append_pair("id", id);
    format!("/listing?{}", ser.finish())
}
