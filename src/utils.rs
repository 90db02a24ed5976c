/// Formats every T as `...`
pub fn mask_fmt<T>(_: &T, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str("...")
}

/// Converts a field name like `short_description` or `shortDescription` into `ShortDescription`.
pub fn pascal_case(name: &str) -> String {
    let mut pascal = String::with_capacity(name.len());
    let mut upper_next = true;

    for c in name.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }

        if upper_next {
            pascal.extend(c.to_uppercase());
            upper_next = false;
        } else {
            pascal.push(c);
        }
    }

    pascal
}

#[cfg(test)]
mod tests {
    use super::pascal_case;

    #[test]
    fn pascal_case_handles_snake_and_camel_case() {
        assert_eq!(pascal_case("isbn"), "Isbn");
        assert_eq!(pascal_case("short_description"), "ShortDescription");
        assert_eq!(pascal_case("pageCount"), "PageCount");
        assert_eq!(pascal_case("Title"), "Title");
    }
}
