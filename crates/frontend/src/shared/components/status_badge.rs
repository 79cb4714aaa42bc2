use leptos::prelude::*;

/// CSS-класс бейджа для статуса заявки или техника.
/// Неизвестные статусы получают нейтральный бейдж.
pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "completed" | "active" => "badge badge--success",
        "in progress" | "assigned" => "badge badge--primary",
        "pending" | "on leave" => "badge badge--warning",
        "cancelled" | "inactive" => "badge badge--danger",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = status_badge_class(&status);
    view! { <span class=class>{status}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class("Completed"), "badge badge--success");
        assert_eq!(status_badge_class("In Progress"), "badge badge--primary");
        assert_eq!(status_badge_class("On Leave"), "badge badge--warning");
        assert_eq!(status_badge_class("Cancelled"), "badge badge--danger");
        assert_eq!(status_badge_class("archived"), "badge badge--neutral");
    }
}
