//! Resumo legível de items decodificados (saída `summary` da CLI)

use std::fmt::Write as _;

use podio::{Field, FieldData, FieldError, Item, ItemList};

fn join<T>(values: &[T], render: impl Fn(&T) -> String) -> String {
    values.iter().map(render).collect::<Vec<_>>().join(", ")
}

/// Valores de um campo em uma linha
pub fn values_summary(data: &FieldData) -> String {
    match data {
        FieldData::Text { values, .. } => join(values, |v| v.value.clone()),
        FieldData::Number { values, .. } => join(values, |v| v.value.to_string()),
        FieldData::Money { values, .. } => join(values, |v| format!("{} {}", v.value, v.currency)),
        FieldData::Date { values, .. } => join(values, |v| {
            let start = v.start.map(|t| t.to_string()).unwrap_or_default();
            match v.end {
                Some(end) if !v.is_open_ended() => format!("{} → {}", start, end),
                _ => start,
            }
        }),
        FieldData::Category { values, .. } => join(values, |v| v.value.text.clone()),
        FieldData::App { values, .. } => {
            join(values, |v| format!("#{} {}", v.value.id(), v.value.title()))
        }
        FieldData::Contact { values, .. } => join(values, |v| v.value.name.clone()),
        FieldData::Image { values } => join(values, |v| v.value.name.clone()),
        FieldData::Member { values } => join(values, |v| v.value.to_string()),
        FieldData::Progress { values } => join(values, |v| format!("{}%", v.value)),
        FieldData::Location { values, .. } => join(values, |v| {
            v.formatted.clone().unwrap_or_else(|| v.value.clone())
        }),
        FieldData::Video { values } => join(values, |v| v.value.to_string()),
        FieldData::Duration { values, .. } => join(values, |v| format!("{}s", v.value)),
        FieldData::Embed { values } => join(values, |v| v.embed.url.clone()),
        FieldData::Question { values, .. } => join(values, |v| v.value.to_string()),
        FieldData::Tel { values, .. } => join(values, |v| v.value.clone()),
        FieldData::Calculation { values, .. } => join(values, |v| match (v.as_text(), v.as_f64()) {
            (Some(text), _) => text.to_string(),
            (None, Some(number)) => number.to_string(),
            (None, None) => String::new(),
        }),
        FieldData::Phone { values, .. } => join(values, |v| format!("{} ({})", v.value, v.type_)),
        FieldData::Email { values, .. } => join(values, |v| format!("{} ({})", v.value, v.type_)),
        FieldData::Unknown(opaque) => format!("<opaco: {}>", opaque.values),
    }
}

pub fn field_summary(position: usize, field: &Field) -> String {
    format!(
        "  [{}] {} '{}' ({}, field_id {}): {}",
        position,
        field.label(),
        field.external_id(),
        field.type_tag(),
        field.id(),
        values_summary(field.data())
    )
}

pub fn item_summary(item: &Item) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📄 Item {} - {}", item.id(), item.title());
    if let Some(app) = item.app() {
        let _ = writeln!(out, "   App: {}", app.id);
    }
    if let Some(created_on) = item.created_on() {
        let created_by = item.created_by().map(|b| b.name.as_str()).unwrap_or("-");
        let _ = writeln!(out, "   Criado em {} por {}", created_on, created_by);
    }
    let _ = writeln!(
        out,
        "   Revisão {} | {} arquivos | {} campos",
        item.revision(),
        item.files().len(),
        item.fields().len()
    );
    for (position, field) in item.fields().iter().enumerate() {
        let _ = writeln!(out, "{}", field_summary(position, field));
    }
    out
}

pub fn errors_summary(errors: &[FieldError]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "⚠️ {} campos com erro:", errors.len());
    for error in errors {
        match error.error.type_tag() {
            Some(type_tag) => {
                let _ = writeln!(out, "  - [{}] {}", type_tag, error);
            }
            None => {
                let _ = writeln!(out, "  - {}", error);
            }
        }
    }
    out
}

pub fn item_list_summary(list: &ItemList) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "📚 {} items (filtered {}, total {})",
        list.items.len(),
        list.filtered,
        list.total
    );
    for item in &list.items {
        out.push_str(&item_summary(item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn item() -> Item {
        let json = json!({
            "item_id": 9,
            "title": "Pedido",
            "revision": 2,
            "created_on": "2014-12-11 13:40:35",
            "created_by": {"id": 1, "type": "user", "name": "Ana"},
            "fields": [
                {"field_id": 1, "external_id": "total", "type": "money", "label": "Total",
                 "values": [{"value": "10.5000", "currency": "BRL"}]},
                {"field_id": 2, "external_id": "prazo", "type": "date", "label": "Prazo",
                 "values": [{"start": "2014-12-11 22:00:00", "end": "2014-12-12 10:00:00"}]},
                {"field_id": 3, "external_id": "etapa", "type": "progress", "label": "Etapa",
                 "values": [{"value": 40}]},
                {"field_id": 4, "external_id": "novo", "type": "frobnicate", "label": "Novo",
                 "values": [1]}
            ]
        });
        podio::ItemDecoder::default().decode_item_value(json).unwrap()
    }

    #[test]
    fn test_values_summary_per_variant() {
        let item = item();
        let summaries: Vec<String> = item
            .fields()
            .iter()
            .map(|f| values_summary(f.data()))
            .collect();
        assert_eq!(
            summaries,
            vec![
                "10.5 BRL".to_string(),
                "2014-12-11 22:00:00 → 2014-12-12 10:00:00".to_string(),
                "40%".to_string(),
                "<opaco: [1]>".to_string(),
            ]
        );
    }

    #[test]
    fn test_item_summary_lists_fields_in_order() {
        let summary = item_summary(&item());
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "📄 Item 9 - Pedido");
        assert_eq!(lines[1], "   Criado em 2014-12-11 13:40:35 por Ana");
        assert_eq!(lines[2], "   Revisão 2 | 0 arquivos | 4 campos");
        assert_eq!(lines[3], "  [0] Total 'total' (money, field_id 1): 10.5 BRL");
        assert!(lines[6].starts_with("  [3] Novo 'novo' (frobnicate"));
    }

    #[test]
    fn test_errors_summary_tags_each_error_with_its_field_type() {
        let json = json!({
            "item_id": 9,
            "fields": [
                {"field_id": 1, "external_id": "total", "type": "number", "label": "Total",
                 "values": [{"value": "NaN"}]},
                {"field_id": 2, "external_id": "novo", "type": "frobnicate", "label": "Novo",
                 "values": [1]}
            ]
        })
        .to_string();
        let partial = podio::ItemDecoder::new(podio::DecodeOptions::strict())
            .decode_item_partial(&json)
            .unwrap();

        let summary = errors_summary(&partial.errors);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "⚠️ 2 campos com erro:");
        assert!(lines[1].starts_with("  - [number] field #0 'total'"));
        assert!(lines[2].starts_with("  - [frobnicate] field #1 'novo'"));
    }
}
