pub fn delete_prompt(item_name: &str) -> String {
    let item_name = match item_name.trim() {
        "" => "item",
        name => name,
    };
    format!(
        "Are you sure you want to delete this {}? This action cannot be undone.",
        item_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_item() {
        assert_eq!(
            delete_prompt("case"),
            "Are you sure you want to delete this case? This action cannot be undone."
        );
        assert!(delete_prompt("  ").contains("delete this item?"));
    }
}
