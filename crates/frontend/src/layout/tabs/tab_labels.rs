//! Tab labels - заголовки табов и ключи detail-табов.

const DETAIL_SEPARATOR: &str = "_detail_";

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: "".
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_client" => "Clients",
        "a002_technician" => "Technicians",
        "a003_product" => "Products",
        "a004_part" => "Parts",
        "a005_job" => "Jobs",
        "p900_job_report" => "Job Report",
        _ => "",
    }
}

/// Название одного элемента сущности для заголовка detail-таба.
pub fn entity_element_name(entity_key: &str) -> &'static str {
    match entity_key {
        "a001_client" => "Client",
        "a002_technician" => "Technician",
        "a003_product" => "Product",
        "a004_part" => "Part",
        "a005_job" | "p900_job_report" => "Job",
        _ => "Record",
    }
}

/// Ключ detail-таба: `{entity}_detail_{id}`.
pub fn detail_tab_key(entity_key: &str, id: &str) -> String {
    format!("{}{}{}", entity_key, DETAIL_SEPARATOR, id)
}

/// Разбирает ключ detail-таба на `(entity, id)`.
pub fn parse_detail_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(DETAIL_SEPARATOR)
        .filter(|(entity, id)| !entity.is_empty() && !id.is_empty())
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_key: &str, identifier: &str) -> String {
    format!("{} · {}", entity_element_name(entity_key), identifier)
}
